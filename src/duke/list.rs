//! The ordered task collection.
//!
//! Insertion order is display order and position order. Every operation that
//! takes a position resolves it against the current length, so positions shift
//! down after a delete.

use crate::error::{DukeError, Result};
use crate::index::Position;
use crate::model::{Task, TaskAttribute};
use crate::parser::parse_index;

pub const EMPTY_LIST_MESSAGE: &str = "You have no tasks :).";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, position: Position) -> Result<&Task> {
        let offset = position.to_offset(self.len())?;
        Ok(&self.tasks[offset])
    }

    fn get_mut(&mut self, position: Position) -> Result<&mut Task> {
        let offset = position.to_offset(self.len())?;
        Ok(&mut self.tasks[offset])
    }

    pub fn add(&mut self, task: Task) -> String {
        let summary = format!("added: {}\nYou have {} tasks.", task, self.len() + 1);
        self.tasks.push(task);
        summary
    }

    pub fn mark_done(&mut self, position: &str) -> Result<String> {
        let task = self.get_mut(parse_index(position)?)?;
        task.mark_as_done();
        Ok(format!("Nice! You have completed the task:\n    {}", task))
    }

    pub fn mark_undone(&mut self, position: &str) -> Result<String> {
        let task = self.get_mut(parse_index(position)?)?;
        task.mark_as_not_done();
        Ok(format!("Ok! Task marked undone:\n    {}", task))
    }

    pub fn delete(&mut self, position: &str) -> Result<String> {
        let offset = parse_index(position)?.to_offset(self.len())?;
        let task = self.tasks.remove(offset);
        Ok(format!(
            "removed: {}\nYou have {} tasks.",
            task,
            self.len()
        ))
    }

    /// A new list holding the tasks whose description contains `term`, in order.
    /// An empty term copies the whole list.
    pub fn find_all(&self, term: &str) -> TaskList {
        if term.is_empty() {
            return self.clone();
        }
        TaskList {
            tasks: self
                .tasks
                .iter()
                .filter(|task| task.matches(term))
                .cloned()
                .collect(),
        }
    }

    pub fn update(
        &mut self,
        position: Position,
        attribute: TaskAttribute,
        value: &str,
    ) -> Result<String> {
        let task = self.get_mut(position)?;
        task.update(attribute, value)?;
        Ok(format!("Updated task:\n    {}", task))
    }

    pub fn to_display_list(&self) -> String {
        if self.tasks.is_empty() {
            return EMPTY_LIST_MESSAGE.to_string();
        }
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| format!("    {}. {}", i + 1, task))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Data file contents: one persisted task per line, no trailing newline.
    pub fn to_persist_block(&self) -> String {
        self.tasks
            .iter()
            .map(Task::to_persist_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Appends the tasks encoded in `lines`. Blank lines are skipped; any other
    /// line that does not parse fails the whole load and leaves the list as it was.
    pub fn load_from<I, L>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut loaded = Vec::new();
        for (i, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            let task = Task::from_persist_str(line).map_err(|e| DukeError::CorruptRecord {
                line: i + 1,
                content: line.to_string(),
                source: Box::new(e),
            })?;
            loaded.push(task);
        }
        self.tasks.extend(loaded);
        Ok(())
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<T: IntoIterator<Item = Task>>(iter: T) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskKind;

    fn list_of(descriptions: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for d in descriptions {
            list.add(Task::todo(d).unwrap());
        }
        list
    }

    fn descriptions(list: &TaskList) -> Vec<&str> {
        list.tasks().iter().map(Task::description).collect()
    }

    #[test]
    fn add_reports_task_and_count() {
        let mut list = list_of(&["a"]);
        let summary = list.add(Task::todo("b").unwrap());
        assert_eq!(summary, "added: [T][ ] b\nYou have 2 tasks.");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn mark_targets_one_based_position() {
        let mut list = list_of(&["a", "b", "c"]);
        let summary = list.mark_done("1").unwrap();
        assert_eq!(
            summary,
            "Nice! You have completed the task:\n    [T][X] a"
        );
        let done: Vec<bool> = list.tasks().iter().map(Task::is_done).collect();
        assert_eq!(done, vec![true, false, false]);

        list.mark_undone("1").unwrap();
        assert!(!list.tasks()[0].is_done());
    }

    #[test]
    fn delete_last_and_shift_positions() {
        let mut list = list_of(&["A", "B", "C"]);
        let summary = list.delete("2").unwrap();
        assert_eq!(summary, "removed: [T][ ] B\nYou have 2 tasks.");
        assert_eq!(descriptions(&list), vec!["A", "C"]);

        list.mark_done("2").unwrap();
        assert!(list.tasks()[1].is_done());
        assert_eq!(list.tasks()[1].description(), "C");

        list.delete("2").unwrap();
        assert_eq!(descriptions(&list), vec!["A"]);
    }

    #[test]
    fn bad_positions_fail_without_changes() {
        let mut list = list_of(&["a", "b"]);
        assert!(matches!(
            list.mark_done("5"),
            Err(DukeError::IndexOutOfRange { position: 5, len: 2 })
        ));
        assert!(matches!(
            list.mark_done("x"),
            Err(DukeError::NotAnInteger(_))
        ));
        assert!(matches!(
            list.delete("0"),
            Err(DukeError::IndexOutOfRange { .. })
        ));
        assert_eq!(list, list_of(&["a", "b"]));
    }

    #[test]
    fn find_all_filters_in_order() {
        let list = list_of(&["foo one", "bar", "two foo", "Foo"]);
        let found = list.find_all("foo");
        assert_eq!(descriptions(&found), vec!["foo one", "two foo"]);
        assert_eq!(descriptions(&list).len(), 4);
    }

    #[test]
    fn find_all_with_empty_term_copies() {
        let list = list_of(&["a", "b"]);
        let found = list.find_all("");
        assert_eq!(found.to_display_list(), list.to_display_list());
    }

    #[test]
    fn update_delegates_to_task() {
        let mut list = TaskList::new();
        list.add(Task::deadline("d /by 2024-03-01T10:00").unwrap());
        let summary = list
            .update(Position::new(1), TaskAttribute::By, "2024-03-02T09:15")
            .unwrap();
        assert_eq!(summary, "Updated task:\n    [D][ ] d (by 2024-03-02T09:15)");

        assert!(matches!(
            list.update(Position::new(2), TaskAttribute::By, "2024-03-02T09:15"),
            Err(DukeError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            list.update(Position::new(1), TaskAttribute::From, "2024-03-02T09:15"),
            Err(DukeError::InvalidAttributeForVariant {
                kind: TaskKind::Deadline,
                ..
            })
        ));
    }

    #[test]
    fn display_list_is_numbered_and_stable() {
        let list = list_of(&["a", "b"]);
        let first = list.to_display_list();
        assert_eq!(first, "    1. [T][ ] a\n    2. [T][ ] b");
        assert_eq!(list.to_display_list(), first);
        assert_eq!(TaskList::new().to_display_list(), EMPTY_LIST_MESSAGE);
    }

    #[test]
    fn persist_block_loads_back() {
        let mut list = list_of(&["a"]);
        list.add(Task::event("e /from 2024-03-01T10:00 /to 2024-03-01T11:00").unwrap());
        list.mark_done("2").unwrap();
        let block = list.to_persist_block();
        assert!(!block.ends_with('\n'));

        let mut restored = TaskList::new();
        restored.load_from(block.lines()).unwrap();
        assert_eq!(restored, list);
        assert_eq!(TaskList::new().to_persist_block(), "");
    }

    #[test]
    fn load_skips_blank_lines() {
        let mut list = TaskList::new();
        list.load_from(["todo 0 a", "", "  ", "todo 1 b"]).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.tasks()[1].is_done());
    }

    #[test]
    fn load_is_all_or_nothing() {
        let mut list = list_of(&["keep"]);
        let err = list
            .load_from(["todo 0 a", "deadline 0 b /by never"])
            .unwrap_err();
        match err {
            DukeError::CorruptRecord { line, content, source } => {
                assert_eq!(line, 2);
                assert_eq!(content, "deadline 0 b /by never");
                assert!(matches!(*source, DukeError::InvalidTimestamp(_)));
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(descriptions(&list), vec!["keep"]);
    }
}
