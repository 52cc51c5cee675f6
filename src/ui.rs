//! Output sinks for Echon's responses
//!
//! A response is one or more lines shown together. Sinks never fail; a
//! console that cannot be written to only logs a warning.

use std::io::Write;
use tracing::warn;

const DIVIDER: &str = "____________________________________________________________";
const INDENT: &str = "    ";

/// Where commands send their responses
pub trait EchonUi {
    /// Show several lines as one response
    fn display_echon_messages(&mut self, messages: &[String]);

    /// Show a single-line response
    fn display_echon_message(&mut self, message: &str) {
        self.display_echon_messages(&[message.to_string()]);
    }
}

/// Writes responses to a terminal-like stream
pub struct ConsoleUi<W: Write> {
    out: W,
    divider: bool,
}

impl<W: Write> ConsoleUi<W> {
    pub fn new(out: W) -> Self {
        Self { out, divider: true }
    }

    /// Toggle the divider lines framing each response
    pub fn with_divider(mut self, divider: bool) -> Self {
        self.divider = divider;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_response(&mut self, messages: &[String]) -> std::io::Result<()> {
        if self.divider {
            writeln!(self.out, "{INDENT}{DIVIDER}")?;
        }
        for message in messages {
            writeln!(self.out, "{INDENT}{message}")?;
        }
        if self.divider {
            writeln!(self.out, "{INDENT}{DIVIDER}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl ConsoleUi<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> EchonUi for ConsoleUi<W> {
    fn display_echon_messages(&mut self, messages: &[String]) {
        if let Err(e) = self.write_response(messages) {
            warn!("Failed to write response: {}", e);
        }
    }
}

/// Records every response in order
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    responses: Vec<Vec<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responses(&self) -> &[Vec<String>] {
        &self.responses
    }

    /// The most recent response, if any
    pub fn last(&self) -> Option<&[String]> {
        self.responses.last().map(Vec::as_slice)
    }
}

impl EchonUi for Transcript {
    fn display_echon_messages(&mut self, messages: &[String]) {
        self.responses.push(messages.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_message_is_one_response() {
        let mut ui = Transcript::new();
        ui.display_echon_message("hello");
        assert_eq!(ui.responses(), &[vec!["hello".to_string()]]);
    }

    #[test]
    fn test_messages_stay_together() {
        let mut ui = Transcript::new();
        ui.display_echon_messages(&["a".to_string(), "b".to_string()]);
        ui.display_echon_message("c");
        assert_eq!(ui.responses().len(), 2);
        assert_eq!(ui.last(), Some(&["c".to_string()][..]));
    }

    #[test]
    fn test_console_frames_with_divider() {
        let mut ui = ConsoleUi::new(Vec::new());
        ui.display_echon_message("hi");
        let out = String::from_utf8(ui.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].trim(), DIVIDER);
        assert_eq!(lines[1], "    hi");
        assert_eq!(lines[2].trim(), DIVIDER);
    }

    #[test]
    fn test_console_without_divider() {
        let mut ui = ConsoleUi::new(Vec::new()).with_divider(false);
        ui.display_echon_messages(&["one".to_string(), "two".to_string()]);
        let out = String::from_utf8(ui.into_inner()).unwrap();
        assert_eq!(out, "    one\n    two\n\n");
    }
}
