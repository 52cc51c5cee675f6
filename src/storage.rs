//! Task storage - JSON file persistence

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::Result;
use crate::task::TaskList;

pub struct Storage {
    tasks_path: PathBuf,
    backup: bool,
}

impl Storage {
    pub fn new(tasks_path: impl Into<PathBuf>) -> Self {
        Self {
            tasks_path: tasks_path.into(),
            backup: true,
        }
    }

    /// Keep a `<file name>.bak` copy of the previous file on every save
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.tasks_path
    }

    /// `<file name>.bak` next to the task file
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.tasks_path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    pub fn load(&self) -> Result<TaskList> {
        if !self.tasks_path.exists() {
            debug!("No task file at {}, starting empty", self.tasks_path.display());
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.tasks_path)?;
        if content.trim().is_empty() {
            return Ok(TaskList::new());
        }

        let tasks: TaskList = serde_json::from_str(&content)?;
        debug!(
            "Loaded {} tasks from {}",
            tasks.size(),
            self.tasks_path.display()
        );
        Ok(tasks)
    }

    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        if self.backup && self.tasks_path.exists() {
            let backup_path = self.backup_path();
            if let Err(e) = fs::copy(&self.tasks_path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        if let Some(parent) = self.tasks_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.tasks_path, content)?;
        debug!("Saved {} tasks to {}", tasks.size(), self.tasks_path.display());
        Ok(())
    }
}
