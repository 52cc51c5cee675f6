//! Ordered, in-memory task collection

use serde::{Deserialize, Serialize};

use super::model::Task;
use crate::error::{EchonError, Result};

/// The user's tasks, in the order they were added
///
/// Indices are zero-based here; commands translate to the one-based numbers
/// users see.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn get_task(&self, index: usize) -> Result<&Task> {
        let size = self.size();
        self.tasks
            .get(index)
            .ok_or(EchonError::IndexOutOfRange { index, size })
    }

    pub fn get_task_mut(&mut self, index: usize) -> Result<&mut Task> {
        let size = self.size();
        self.tasks
            .get_mut(index)
            .ok_or(EchonError::IndexOutOfRange { index, size })
    }

    /// Remove and return the task at `index`
    pub fn delete_task(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            return Err(EchonError::IndexOutOfRange {
                index,
                size: self.size(),
            });
        }
        Ok(self.tasks.remove(index))
    }

    pub fn size(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Numbered display lines, `1.[T][ ] read book`
    pub fn list_tasks(&self) -> Vec<String> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| numbered(i, task))
            .collect()
    }

    /// Tasks whose description contains `keyword`, with their original index
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description().contains(keyword))
            .collect()
    }
}

/// One-based list label for the task at zero-based `index`
pub fn numbered(index: usize, task: &Task) -> String {
    format!("{}.{}", index + 1, task)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        TaskList::from_tasks(vec![Task::todo("read book"), Task::todo("write code")])
    }

    #[test]
    fn test_add_increases_size() {
        let mut list = TaskList::new();
        assert!(list.is_empty());
        list.add_task(Task::todo("a"));
        list.add_task(Task::todo("b"));
        assert_eq!(list.size(), 2);
    }

    #[test]
    fn test_list_tasks_is_one_based() {
        let lines = sample().list_tasks();
        assert_eq!(lines, vec!["1.[T][ ] read book", "2.[T][ ] write code"]);
    }

    #[test]
    fn test_empty_list_has_no_lines() {
        assert!(TaskList::new().list_tasks().is_empty());
    }

    #[test]
    fn test_delete_removes_exact_task() {
        let mut list = sample();
        let removed = list.delete_task(0).unwrap();
        assert_eq!(removed.description(), "read book");
        assert_eq!(list.size(), 1);
        assert_eq!(list.get_task(0).unwrap().description(), "write code");
    }

    #[test]
    fn test_out_of_range_access() {
        let mut list = sample();
        assert!(matches!(
            list.get_task(2),
            Err(EchonError::IndexOutOfRange { index: 2, size: 2 })
        ));
        assert!(list.get_task_mut(5).is_err());
        assert!(list.delete_task(2).is_err());
        assert_eq!(list.size(), 2);
    }

    #[test]
    fn test_find_keeps_original_index() {
        let list = TaskList::from_tasks(vec![
            Task::todo("write code"),
            Task::todo("read book"),
        ]);
        let found = list.find("book");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, 1);
        assert_eq!(numbered(found[0].0, found[0].1), "2.[T][ ] read book");
    }

    #[test]
    fn test_find_is_case_sensitive() {
        assert!(sample().find("Book").is_empty());
    }
}
