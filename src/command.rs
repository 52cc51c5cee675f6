//! Commands: one variant per user intent
//!
//! A command is built from a line of input, executed once against the task
//! list, and dropped. Indices are zero-based.

use tracing::debug;

use crate::error::{EchonError, Result};
use crate::task::list::numbered;
use crate::task::{Task, TaskList};
use crate::ui::EchonUi;

pub const BYE_MESSAGE: &str = "Bye. Hope to see you again soon!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bye,
    Echo(String),
    AddTodo {
        description: String,
    },
    AddDeadline {
        description: String,
        by: String,
    },
    AddEvent {
        description: String,
        from: String,
        to: String,
    },
    List,
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    Find(String),
}

impl Command {
    /// Whether the session should end after this command
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Bye)
    }

    /// Whether a successful run changes the task list
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::AddTodo { .. }
                | Self::AddDeadline { .. }
                | Self::AddEvent { .. }
                | Self::Mark(_)
                | Self::Unmark(_)
                | Self::Delete(_)
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bye => "bye",
            Self::Echo(_) => "echo",
            Self::AddTodo { .. } => "todo",
            Self::AddDeadline { .. } => "deadline",
            Self::AddEvent { .. } => "event",
            Self::List => "list",
            Self::Mark(_) => "mark",
            Self::Unmark(_) => "unmark",
            Self::Delete(_) => "delete",
            Self::Find(_) => "find",
        }
    }

    /// Run the command, reporting the outcome to `ui`
    ///
    /// On error nothing is written to `ui` and `tasks` is left unchanged.
    pub fn execute(&self, tasks: &mut TaskList, ui: &mut dyn EchonUi) -> Result<()> {
        debug!("Executing {} command", self.name());

        match self {
            Self::Bye => ui.display_echon_message(BYE_MESSAGE),
            Self::Echo(message) => ui.display_echon_message(message),
            Self::AddTodo { description } => {
                add_task(tasks, ui, description, |d| Ok(Task::todo(d)))?
            }
            Self::AddDeadline { description, by } => {
                add_task(tasks, ui, description, |d| Task::deadline(d, by))?
            }
            Self::AddEvent {
                description,
                from,
                to,
            } => add_task(tasks, ui, description, |d| Task::event(d, from, to))?,
            Self::List => {
                let mut messages = vec!["Here are the tasks in your list:".to_string()];
                messages.extend(tasks.list_tasks());
                ui.display_echon_messages(&messages);
            }
            Self::Mark(index) => {
                let task = tasks.get_task_mut(*index)?;
                task.mark_as_done();
                ui.display_echon_messages(&[
                    "Nice! I've marked this task as done:".to_string(),
                    format!("  {}", task),
                ]);
            }
            Self::Unmark(index) => {
                let task = tasks.get_task_mut(*index)?;
                task.unmark_as_done();
                ui.display_echon_messages(&[
                    "OK, I've marked this task as not done yet:".to_string(),
                    format!("  {}", task),
                ]);
            }
            Self::Delete(index) => {
                let task = tasks.delete_task(*index)?;
                ui.display_echon_messages(&[
                    "Noted. I've removed this task:".to_string(),
                    format!("  {}", task),
                    task_count(tasks),
                ]);
            }
            Self::Find(keyword) => {
                let mut messages = vec!["Here are the matching tasks in your list:".to_string()];
                messages.extend(
                    tasks
                        .find(keyword)
                        .into_iter()
                        .map(|(i, task)| numbered(i, task)),
                );
                ui.display_echon_messages(&messages);
            }
        }

        Ok(())
    }
}

/// Validate the description, build the task and append it
///
/// `build` only runs for a non-empty description.
fn add_task(
    tasks: &mut TaskList,
    ui: &mut dyn EchonUi,
    description: &str,
    build: impl FnOnce(&str) -> Result<Task>,
) -> Result<()> {
    if description.is_empty() {
        return Err(EchonError::EmptyDescription);
    }

    let task = build(description)?;
    debug!("Adding {} task", task.kind.label());
    let line = format!("  {}", task);
    tasks.add_task(task);
    ui.display_echon_messages(&[
        "Got it. I've added this task:".to_string(),
        line,
        task_count(tasks),
    ]);
    Ok(())
}

fn task_count(tasks: &TaskList) -> String {
    format!("Now you have {} tasks in the list.", tasks.size())
}
