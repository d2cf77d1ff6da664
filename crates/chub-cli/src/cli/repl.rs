//! Line commands of `chub browse`.

use anyhow::{bail, Context, Result};
use chub_core::catalog::SortKey;
use chub_core::controller::UserAction;
use chub_core::view::TagField;

pub const HELP: &str = "\
commands:
  find <term>             search for a term
  term <text>             set the term without searching
  tags <a, b>             include tags (suggests completions)
  exclude <a, b>          exclude tags (suggests completions)
  pick include|exclude <tag>
                          complete the tag being typed
  sort <key>              download_count, rating, rating_count, last_activity_at, created_at, name, random
  nsfw on|off
  size <n>                results per page
  page <n> | next | prev
  search                  search again with the current filters
  get <#>                 download a listed character
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Actions(Vec<UserAction>),
    /// Download the character at a list index.
    Get(usize),
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<Option<ReplCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };
    let one = |a: UserAction| -> Result<Option<ReplCommand>> {
        Ok(Some(ReplCommand::Actions(vec![a])))
    };

    match cmd.to_ascii_lowercase().as_str() {
        "find" => Ok(Some(ReplCommand::Actions(vec![
            UserAction::EditTerm(rest.to_string()),
            UserAction::ConfirmTerm,
        ]))),
        "term" => one(UserAction::EditTerm(rest.to_string())),
        "tags" => one(UserAction::EditTags {
            field: TagField::Include,
            text: rest.to_string(),
        }),
        "exclude" => one(UserAction::EditTags {
            field: TagField::Exclude,
            text: rest.to_string(),
        }),
        "pick" => {
            let (which, tag) = rest
                .split_once(char::is_whitespace)
                .context("usage: pick include|exclude <tag>")?;
            let field = match which {
                "include" | "tags" => TagField::Include,
                "exclude" => TagField::Exclude,
                other => bail!("unknown tag field '{}'", other),
            };
            one(UserAction::SelectSuggestion {
                field,
                tag: tag.trim().to_string(),
            })
        }
        "sort" => one(UserAction::SetSort(rest.parse::<SortKey>()?)),
        "nsfw" => match rest {
            "on" | "true" | "yes" => one(UserAction::SetNsfw(true)),
            "off" | "false" | "no" => one(UserAction::SetNsfw(false)),
            _ => bail!("usage: nsfw on|off"),
        },
        "size" => one(UserAction::SetPageSize(rest.to_string())),
        "page" => one(UserAction::SetPage(rest.to_string())),
        "next" => one(UserAction::PageUp),
        "prev" => one(UserAction::PageDown),
        "search" => one(UserAction::Search),
        "get" => {
            let index = rest
                .parse::<usize>()
                .with_context(|| format!("not a list index: '{}'", rest))?;
            Ok(Some(ReplCommand::Get(index)))
        }
        "help" | "?" => Ok(Some(ReplCommand::Help)),
        "quit" | "exit" | "q" => Ok(Some(ReplCommand::Quit)),
        other => bail!("unknown command '{}' (try 'help')", other),
    }
}
