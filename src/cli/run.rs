//! `echon run` command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::session::run_once;
use crate::storage::Storage;
use crate::ui::Transcript;

#[derive(Args)]
pub struct RunArgs {
    /// Input line, as you would type it in a chat
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,

    /// Output the response lines as JSON
    #[arg(long)]
    json: bool,
}

impl RunArgs {
    pub fn line(&self) -> String {
        self.words.join(" ")
    }
}

pub fn run(file: Option<PathBuf>, config: Config, args: RunArgs) -> Result<()> {
    let storage = super::open_storage(file, &config)?;
    let transcript = execute_line(&storage, &args.line())?;
    render(&mut std::io::stdout().lock(), &transcript, args.json)
}

/// Run one line against the stored tasks
///
/// The task file is only written when the command changed the list.
pub fn execute_line(storage: &Storage, line: &str) -> Result<Transcript> {
    let mut tasks = storage.load()?;
    let mut ui = Transcript::new();

    let command = run_once(line, &mut tasks, &mut ui)?;
    if command.mutates() {
        storage.save(&tasks)?;
    }

    Ok(ui)
}

/// Print every response line, or a JSON array of them
pub fn render<W: Write>(out: &mut W, transcript: &Transcript, json: bool) -> Result<()> {
    let lines: Vec<&String> = transcript.responses().iter().flatten().collect();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&lines)?)?;
    } else {
        for line in lines {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EchonError;
    use crate::ui::EchonUi;
    use tempfile::tempdir;

    fn transcript() -> Transcript {
        let mut ui = Transcript::new();
        ui.display_echon_messages(&["Got it.".to_string(), "  [T][ ] x".to_string()]);
        ui.display_echon_message("done");
        ui
    }

    #[test]
    fn test_render_plain() -> Result<()> {
        let mut out = Vec::new();
        render(&mut out, &transcript(), false)?;
        assert_eq!(String::from_utf8(out)?, "Got it.\n  [T][ ] x\ndone\n");
        Ok(())
    }

    #[test]
    fn test_render_json() -> Result<()> {
        let mut out = Vec::new();
        render(&mut out, &transcript(), true)?;
        let lines: Vec<String> = serde_json::from_slice(&out)?;
        assert_eq!(lines, vec!["Got it.", "  [T][ ] x", "done"]);
        Ok(())
    }

    #[test]
    fn test_mutating_line_is_saved() -> Result<()> {
        let temp = tempdir()?;
        let storage = Storage::new(temp.path().join("tasks.json"));

        let ui = execute_line(&storage, "todo x")?;
        assert_eq!(ui.last().unwrap()[1], "  [T][ ] x");

        let saved = storage.load()?;
        assert_eq!(saved.size(), 1);
        assert_eq!(saved.get_task(0)?.description(), "x");
        Ok(())
    }

    #[test]
    fn test_read_only_line_does_not_write() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        let storage = Storage::new(&path);

        let ui = execute_line(&storage, "list")?;
        assert_eq!(
            ui.last().unwrap(),
            &["Here are the tasks in your list:".to_string()]
        );
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_failed_line_is_an_error() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        let storage = Storage::new(&path);

        let err = execute_line(&storage, "mark 1").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EchonError>(),
            Some(EchonError::IndexOutOfRange { index: 0, size: 0 })
        ));
        assert!(!path.exists());
        Ok(())
    }
}
