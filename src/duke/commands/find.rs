use crate::commands::{CmdMessage, CmdResult};
use crate::list::TaskList;
use crate::parser::parse_find;

pub fn run(list: &TaskList, args: &str) -> CmdResult {
    let term = parse_find(args);
    let found = list.find_all(term);

    let message = if found.is_empty() && !term.is_empty() {
        CmdMessage::info(format!("No tasks match \"{}\".", term))
    } else {
        CmdMessage::info(found.to_display_list())
    };
    CmdResult::default().with_message(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    fn books() -> TaskList {
        ["read book", "return book", "buy milk"]
            .iter()
            .map(|d| Task::todo(d).unwrap())
            .collect()
    }

    #[test]
    fn renumbers_matches() {
        let result = run(&books(), "book");
        assert_eq!(
            result.messages[0].content,
            "    1. [T][ ] read book\n    2. [T][ ] return book"
        );
    }

    #[test]
    fn empty_term_lists_everything() {
        let list = books();
        let result = run(&list, "   ");
        assert_eq!(result.messages[0].content, list.to_display_list());
    }

    #[test]
    fn no_match_says_so() {
        let result = run(&books(), "xyz");
        assert_eq!(result.messages[0].content, "No tasks match \"xyz\".");
    }
}
