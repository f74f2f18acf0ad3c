use crate::commands::{CmdMessage, CmdResult};
use crate::list::TaskList;

pub fn run(list: &TaskList) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(list.to_display_list()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::EMPTY_LIST_MESSAGE;
    use crate::model::Task;

    #[test]
    fn lists_numbered_tasks() {
        let list: TaskList = vec![Task::todo("a").unwrap(), Task::todo("b").unwrap()]
            .into_iter()
            .collect();
        let result = run(&list);
        assert_eq!(result.messages[0].content, "    1. [T][ ] a\n    2. [T][ ] b");
    }

    #[test]
    fn empty_list_has_its_own_message() {
        let result = run(&TaskList::new());
        assert_eq!(result.messages[0].content, EMPTY_LIST_MESSAGE);
    }
}
