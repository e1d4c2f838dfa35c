//! Operator commands read from stdin.

use roster_lib::model::MemberId;
use roster_lib::view::Action;
use roster_lib::view::PageNav;
use thiserror::Error;

/// Help text printed for `help` and after a bad command.
pub const USAGE: &str = "\
commands:
  search <text>        filter by name, email or role (empty clears)
  clear                clear the search
  first | prev | next | last | page <n>
  select-all           toggle selection of the visible page
  select <id>          toggle selection of one row
  delete <id>          delete one row
  delete-selected      delete every selected row
  edit <id>            enter or leave edit mode on a row
  type <id> <text>     replace the draft name of a row in edit mode
  commit <id> [text]   save the draft (or <text>) and leave edit mode
  cancel <id>          leave edit mode without saving
  show | help | quit";

/// Error type for command parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{command} needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("not a page number: {0}")]
    InvalidPage(String),
}

/// A parsed operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A table transition.
    Apply(Action),
    /// Commit a row with whatever name it currently shows.
    CommitDraft(MemberId),
    /// Reprint the table.
    Show,
    /// Print usage.
    Help,
    /// Leave the session.
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines reprint the table.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "" | "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            "search" => Self::Apply(Action::Search(rest.to_string())),
            "clear" => Self::Apply(Action::Search(String::new())),
            "first" => Self::Apply(Action::Navigate(PageNav::First)),
            "prev" => Self::Apply(Action::Navigate(PageNav::Prev)),
            "next" => Self::Apply(Action::Navigate(PageNav::Next)),
            "last" => Self::Apply(Action::Navigate(PageNav::Last)),
            "page" => {
                let page = required(rest, "page", "a number")?;
                let page = page
                    .parse::<usize>()
                    .map_err(|_| CommandError::InvalidPage(page.to_string()))?;
                Self::Apply(Action::Navigate(PageNav::Page(page)))
            }
            "select-all" => Self::Apply(Action::ToggleSelectAll),
            "select" => Self::Apply(Action::ToggleSelected(id(rest, "select")?)),
            "delete" => Self::Apply(Action::DeleteOne(id(rest, "delete")?)),
            "delete-selected" => Self::Apply(Action::DeleteSelected),
            "edit" => Self::Apply(Action::ToggleEditing(id(rest, "edit")?)),
            "cancel" => Self::Apply(Action::CancelEditing(id(rest, "cancel")?)),
            "type" => {
                let (id, text) = id_and_text(rest, "type")?;
                Self::Apply(Action::UpdateDraftName { id, text })
            }
            "commit" => {
                let (id, text) = id_and_text(rest, "commit")?;
                if text.is_empty() {
                    Self::CommitDraft(id)
                } else {
                    Self::Apply(Action::CommitName { id, name: text })
                }
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, what })
    } else {
        Ok(rest)
    }
}

fn id(rest: &str, command: &'static str) -> Result<MemberId, CommandError> {
    required(rest, command, "a row id").map(MemberId::from)
}

/// Splits `<id> <text...>`; the text may be empty or contain spaces.
fn id_and_text(rest: &str, command: &'static str) -> Result<(MemberId, String), CommandError> {
    let rest = required(rest, command, "a row id")?;
    let (id, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    Ok((MemberId::from(id), text.trim().to_string()))
}
