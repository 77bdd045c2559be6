//! Line-oriented command language for browse sessions.
//!
//! One command per line; blank lines and `#` comments are skipped.
//!
//! | Line            | Effect                                   |
//! |-----------------|------------------------------------------|
//! | `size N`        | rows per page                            |
//! | `goto N`        | zero-based page index                    |
//! | `next` / `prev` | one page forward / back                  |
//! | `first`/`last`  | first / last page                        |
//! | `draft TEXT`    | replace the page-jump input (may be empty) |
//! | `type C`        | type one character into the page-jump input |
//! | `backspace`     | delete the last page-jump character      |
//! | `jump`          | commit the page-jump input               |
//! | `toggle ID`     | flip selection of one row                |
//! | `page-select`   | header checkbox for the current page     |
//! | `clear`         | clear the selection                      |
//! | `delete [--yes]`| delete the selected rows                 |
//! | `status VALUE`  | set the status of the selected rows      |
//! | `show`          | render without changing anything         |
//! | `quit`          | end the session                          |

use gridview_core::ViewCommand;
use gridview_model::RecordId;
use thiserror::Error;

/// Flag that confirms a delete when confirmation is required.
pub const CONFIRM_FLAG: &str = "--yes";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("{command}: missing {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("{command}: not a number: {value}")]
    InvalidNumber { command: &'static str, value: String },
    #[error("{command}: invalid argument: {value}")]
    InvalidArgument { command: &'static str, value: String },
    #[error("{command}: unexpected argument: {value}")]
    UnexpectedArgument { command: &'static str, value: String },
}

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLine {
    /// A controller command.
    Command(ViewCommand),
    /// Bulk delete; `confirmed` is set by `--yes`.
    Delete { confirmed: bool },
    /// Re-render the current page.
    Show,
    /// Stop reading input.
    Quit,
}

/// Parse one line. Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<ScriptLine>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };
    let parsed = match keyword.to_ascii_lowercase().as_str() {
        "size" => ScriptLine::Command(ViewCommand::SetPageSize(number("size", rest)?)),
        "goto" => ScriptLine::Command(ViewCommand::GoToPage(number("goto", rest)?)),
        "next" => bare("next", rest, ViewCommand::NextPage)?,
        "prev" => bare("prev", rest, ViewCommand::PreviousPage)?,
        "first" => bare("first", rest, ViewCommand::FirstPage)?,
        "last" => bare("last", rest, ViewCommand::LastPage)?,
        "draft" => ScriptLine::Command(ViewCommand::UpdateDraft(rest.to_string())),
        "type" => ScriptLine::Command(ViewCommand::PushDraftChar(single_char(rest)?)),
        "backspace" => bare("backspace", rest, ViewCommand::PopDraftChar)?,
        "jump" => bare("jump", rest, ViewCommand::CommitPageJump)?,
        "toggle" => {
            let id = RecordId::new(rest).map_err(|_| ScriptError::MissingArgument {
                command: "toggle",
                expected: "record id",
            })?;
            ScriptLine::Command(ViewCommand::Toggle(id))
        }
        "page-select" => bare("page-select", rest, ViewCommand::TogglePageSelection)?,
        "clear" => bare("clear", rest, ViewCommand::ClearSelection)?,
        "delete" => match rest {
            "" => ScriptLine::Delete { confirmed: false },
            CONFIRM_FLAG => ScriptLine::Delete { confirmed: true },
            other => {
                return Err(ScriptError::UnexpectedArgument {
                    command: "delete",
                    value: other.to_string(),
                });
            }
        },
        "status" => {
            if rest.is_empty() {
                return Err(ScriptError::MissingArgument {
                    command: "status",
                    expected: "status value",
                });
            }
            ScriptLine::Command(ViewCommand::ApplyStatusChange(rest.to_string()))
        }
        "show" => no_args("show", rest, ScriptLine::Show)?,
        "quit" | "exit" => no_args("quit", rest, ScriptLine::Quit)?,
        _ => return Err(ScriptError::UnknownCommand(keyword.to_string())),
    };
    Ok(Some(parsed))
}

fn number(command: &'static str, rest: &str) -> Result<usize, ScriptError> {
    if rest.is_empty() {
        return Err(ScriptError::MissingArgument {
            command,
            expected: "number",
        });
    }
    rest.parse().map_err(|_| ScriptError::InvalidNumber {
        command,
        value: rest.to_string(),
    })
}

fn single_char(rest: &str) -> Result<char, ScriptError> {
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(ScriptError::MissingArgument {
            command: "type",
            expected: "character",
        }),
        (Some(_), Some(_)) => Err(ScriptError::InvalidArgument {
            command: "type",
            value: rest.to_string(),
        }),
    }
}

fn bare(
    command: &'static str,
    rest: &str,
    view_command: ViewCommand,
) -> Result<ScriptLine, ScriptError> {
    no_args(command, rest, ScriptLine::Command(view_command))
}

fn no_args(
    command: &'static str,
    rest: &str,
    line: ScriptLine,
) -> Result<ScriptLine, ScriptError> {
    if rest.is_empty() {
        Ok(line)
    } else {
        Err(ScriptError::UnexpectedArgument {
            command,
            value: rest.to_string(),
        })
    }
}
