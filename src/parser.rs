//! Turns a line of user input into a [`Command`]

use regex::Regex;
use std::sync::LazyLock;

use crate::command::Command;
use crate::error::{EchonError, Result};

// deadline <description> /by <date>
static DEADLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?s)(.*?)\s*/by(?:\s+(.*))?$").unwrap());

// event <description> /from <date> /to <date>
static EVENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?s)(.*?)\s*/from(?:\s+(.*?))?\s*/to(?:\s+(.*))?$").unwrap()
});

/// Parse one line of input
///
/// The first word picks the command; the rest of the line is its argument.
pub fn parse(input: &str) -> Result<Command> {
    let input = input.trim();
    let (keyword, rest) = match input.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (input, ""),
    };

    match keyword {
        "bye" => Ok(Command::Bye),
        "list" => Ok(Command::List),
        "echo" => Ok(Command::Echo(rest.to_string())),
        "todo" => Ok(Command::AddTodo {
            description: rest.to_string(),
        }),
        "deadline" => parse_deadline(rest),
        "event" => parse_event(rest),
        "mark" => parse_index("mark", rest).map(Command::Mark),
        "unmark" => parse_index("unmark", rest).map(Command::Unmark),
        "delete" => parse_index("delete", rest).map(Command::Delete),
        "find" => {
            if rest.is_empty() {
                return Err(EchonError::MissingArgument {
                    keyword: "find",
                    what: "a keyword",
                });
            }
            Ok(Command::Find(rest.to_string()))
        }
        _ => Err(EchonError::UnknownCommand(input.to_string())),
    }
}

fn parse_deadline(rest: &str) -> Result<Command> {
    let missing_by = || EchonError::MissingArgument {
        keyword: "deadline",
        what: "a date after /by",
    };

    let caps = DEADLINE_RE.captures(rest).ok_or_else(missing_by)?;
    let by = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
    if by.is_empty() {
        return Err(missing_by());
    }

    Ok(Command::AddDeadline {
        description: caps[1].trim().to_string(),
        by: by.to_string(),
    })
}

fn parse_event(rest: &str) -> Result<Command> {
    let missing_dates = || EchonError::MissingArgument {
        keyword: "event",
        what: "dates after /from and /to",
    };

    let caps = EVENT_RE.captures(rest).ok_or_else(missing_dates)?;
    let from = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
    let to = caps.get(3).map(|m| m.as_str().trim()).unwrap_or_default();
    if from.is_empty() || to.is_empty() {
        return Err(missing_dates());
    }

    Ok(Command::AddEvent {
        description: caps[1].trim().to_string(),
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Parse a one-based task number into a zero-based index
fn parse_index(keyword: &'static str, rest: &str) -> Result<usize> {
    if rest.is_empty() {
        return Err(EchonError::MissingArgument {
            keyword,
            what: "a task number",
        });
    }

    match rest.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(EchonError::InvalidIndex(rest.to_string())),
    }
}
