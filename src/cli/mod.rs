//! CLI command implementations

pub mod chat;
pub mod definition;
pub mod run;

pub use definition::{Cli, Commands};

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::storage::Storage;

/// Storage for `--file` if given, otherwise the configured task file
pub fn open_storage(file: Option<PathBuf>, config: &Config) -> Result<Storage> {
    let path = match file {
        Some(path) => path,
        None => config.tasks_path()?,
    };
    Ok(Storage::new(path).with_backup(config.storage.backup))
}
