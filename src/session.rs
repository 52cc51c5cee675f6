//! Chat session: reads lines, runs commands, keeps the task list saved

use std::io::BufRead;
use tracing::{debug, warn};

use crate::command::Command;
use crate::config::ChatConfig;
use crate::error::{EchonError, Result};
use crate::parser;
use crate::storage::Storage;
use crate::task::TaskList;
use crate::ui::EchonUi;

/// Owns the task list for the lifetime of one conversation
pub struct ChatSession<U: EchonUi> {
    tasks: TaskList,
    storage: Option<Storage>,
    ui: U,
    config: ChatConfig,
}

impl<U: EchonUi> ChatSession<U> {
    pub fn new(tasks: TaskList, storage: Option<Storage>, ui: U, config: ChatConfig) -> Self {
        Self {
            tasks,
            storage,
            ui,
            config,
        }
    }

    /// Start from whatever `storage` has saved
    pub fn open(storage: Storage, ui: U, config: ChatConfig) -> Result<Self> {
        let tasks = storage.load()?;
        Ok(Self::new(tasks, Some(storage), ui, config))
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn into_ui(self) -> U {
        self.ui
    }

    pub fn greet(&mut self) {
        self.ui.display_echon_messages(&[
            format!("Hello! I'm {}", self.config.name),
            "What can I do for you?".to_string(),
        ]);
    }

    /// Handle one line of input
    ///
    /// Errors are shown to the user rather than returned. Returns `false`
    /// once the user has said goodbye.
    pub fn handle_line(&mut self, line: &str) -> bool {
        match self.dispatch(line) {
            Ok(keep_going) => keep_going,
            Err(e) => {
                debug!("Command failed: {}", e);
                self.ui.display_echon_message(&e.to_string());
                true
            }
        }
    }

    /// Like [`handle_line`](Self::handle_line) but hands the error back
    pub fn dispatch(&mut self, line: &str) -> Result<bool> {
        let command = parser::parse(line)?;
        command.execute(&mut self.tasks, &mut self.ui)?;
        if command.mutates() {
            self.persist()?;
        }
        Ok(!command.is_exit())
    }

    /// Greet, then handle lines until `bye` or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.greet();

        for raw in input.split(b'\n') {
            let raw = raw.map_err(|e| EchonError::Input(e.to_string()))?;
            let line = String::from_utf8_lossy(&raw);
            if line.trim().is_empty() {
                continue;
            }
            if !self.handle_line(&line) {
                return Ok(());
            }
        }

        debug!("Input closed without bye");
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        match &self.storage {
            Some(storage) => storage.save(&self.tasks).inspect_err(|e| {
                warn!("Failed to save tasks to {}: {}", storage.path().display(), e);
            }),
            None => Ok(()),
        }
    }
}

/// Execute a single command without a session around it
pub fn run_once(line: &str, tasks: &mut TaskList, ui: &mut dyn EchonUi) -> Result<Command> {
    let command = parser::parse(line)?;
    command.execute(tasks, ui)?;
    Ok(command)
}
