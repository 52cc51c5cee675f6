//! Task data model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EchonError, Result};

/// Format users type dates in
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Format dates are shown in, e.g. `Oct 15 2019`
pub const DATE_DISPLAY_FORMAT: &str = "%b %-d %Y";

/// Parse a user-supplied `yyyy-mm-dd` date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT)
        .map_err(|_| EchonError::InvalidDate(trimmed.to_string()))
}

fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}

/// What kind of task this is, with the dates that kind carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDate },
    Event { from: NaiveDate, to: NaiveDate },
}

impl TaskKind {
    /// Single-letter tag shown in brackets before the status
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Todo => "T",
            Self::Deadline { .. } => "D",
            Self::Event { .. } => "E",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline { .. } => "deadline",
            Self::Event { .. } => "event",
        }
    }
}

/// A task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What the user has to do
    pub description: String,

    /// Whether the task has been marked as done
    #[serde(default)]
    pub done: bool,

    #[serde(flatten)]
    pub kind: TaskKind,
}

impl Task {
    /// Create a new, not yet done task
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    /// Create a deadline from a `yyyy-mm-dd` date string
    pub fn deadline(description: impl Into<String>, by: &str) -> Result<Self> {
        let by = parse_date(by)?;
        Ok(Self::new(description, TaskKind::Deadline { by }))
    }

    /// Create an event from two `yyyy-mm-dd` date strings
    ///
    /// Fails when either date is malformed or when `to` is before `from`.
    pub fn event(description: impl Into<String>, from: &str, to: &str) -> Result<Self> {
        let from = parse_date(from)?;
        let to = parse_date(to)?;
        if to < from {
            return Err(EchonError::EventEndsBeforeStart);
        }
        Ok(Self::new(description, TaskKind::Event { from, to }))
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_as_done(&mut self) {
        self.done = true;
    }

    pub fn unmark_as_done(&mut self) {
        self.done = false;
    }

    /// `X` when done, a blank otherwise
    pub fn status_icon(&self) -> &'static str {
        if self.done {
            "X"
        } else {
            " "
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.icon(),
            self.status_icon(),
            self.description
        )?;

        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", format_date(by)),
            TaskKind::Event { from, to } => write!(
                f,
                " (from: {} to: {})",
                format_date(from),
                format_date(to)
            ),
        }
    }
}
