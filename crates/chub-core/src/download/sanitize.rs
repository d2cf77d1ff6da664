//! Filesystem-safe names for imported cards.

/// Used when sanitizing leaves nothing usable.
pub const DEFAULT_ASSET_NAME: &str = "character.png";

/// Makes a card name safe as a single path component.
///
/// - Replaces NUL, `/`, `\` and control characters with `_`
/// - Collapses consecutive underscores
/// - Trims leading/trailing spaces, dots and underscores
/// - Limits length to 255 bytes (NAME_MAX)
pub fn sanitize_file_name(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let c = if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            '_'
        } else {
            c
        };
        if c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.' || c == '_');
    let mut take = trimmed.len().min(NAME_MAX);
    while take > 0 && !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    let result = &trimmed[..take];

    if result.is_empty() || result.starts_with('.') {
        DEFAULT_ASSET_NAME.to_string()
    } else {
        result.to_string()
    }
}
