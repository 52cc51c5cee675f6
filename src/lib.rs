//! Echon library - a chatbot-style todo list
//!
//! User input is parsed into a [`command::Command`], executed against a
//! [`task::TaskList`], and answered through an [`ui::EchonUi`] sink.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod parser;
pub mod session;
pub mod storage;
pub mod task;
pub mod ui;

pub use command::Command;
pub use error::{EchonError, Result};
pub use task::{Task, TaskKind, TaskList};
pub use ui::EchonUi;
