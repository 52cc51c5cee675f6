//! Task management module
//!
//! This module provides the task entities and the list that owns them:
//! - Todo, deadline and event tasks with a done flag
//! - `yyyy-mm-dd` date parsing for deadlines and events
//! - An ordered task list with one-based display numbering

pub mod list;
pub mod model;

pub use list::TaskList;
pub use model::{parse_date, Task, TaskKind};
