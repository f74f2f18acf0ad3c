use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::TaskList;

pub fn run(list: &mut TaskList, position: &str) -> Result<CmdResult> {
    let summary = list.delete(position)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(summary)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    #[test]
    fn removes_and_reports_count() {
        let mut list: TaskList = ["A", "B", "C"]
            .iter()
            .map(|d| Task::todo(d).unwrap())
            .collect();
        let result = run(&mut list, "2").unwrap();
        assert_eq!(
            result.messages[0].content,
            "removed: [T][ ] B\nYou have 2 tasks."
        );
        assert_eq!(list.to_display_list(), "    1. [T][ ] A\n    2. [T][ ] C");
    }

    #[test]
    fn out_of_range_keeps_tasks() {
        let mut list: TaskList = std::iter::once(Task::todo("A").unwrap()).collect();
        assert!(run(&mut list, "2").is_err());
        assert_eq!(list.len(), 1);
    }
}
