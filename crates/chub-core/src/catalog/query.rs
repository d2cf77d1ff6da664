//! Search URL construction.

use url::Url;

use super::SearchOptions;

/// Builds the search GET URL. `search`, `tags`, `exclude_tags` and `sort` are
/// only present when they carry a value; `page`, `first` and `nsfw` always are.
pub fn search_url(endpoint: &str, opts: &SearchOptions) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(endpoint)?;
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(term) = opts.search_term.as_deref().map(str::trim) {
            if !term.is_empty() {
                pairs.append_pair("search", term);
            }
        }
        if !opts.include_tags.is_empty() {
            pairs.append_pair("tags", &opts.include_tags.join(","));
        }
        if !opts.exclude_tags.is_empty() {
            pairs.append_pair("exclude_tags", &opts.exclude_tags.join(","));
        }
        if let Some(sort) = opts.sort {
            pairs.append_pair("sort", sort.as_str());
        }
        pairs.append_pair("page", &opts.page().to_string());
        pairs.append_pair("first", &opts.page_size().to_string());
        pairs.append_pair("nsfw", if opts.nsfw { "true" } else { "false" });
    }
    Ok(url)
}
