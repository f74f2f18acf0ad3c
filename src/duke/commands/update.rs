use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::TaskList;
use crate::parser::parse_update;

pub fn run(list: &mut TaskList, args: &str) -> Result<CmdResult> {
    let request = parse_update(args)?;
    let summary = list.update(request.position, request.attribute, &request.value)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(summary)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DukeError;
    use crate::model::Task;

    fn talk() -> TaskList {
        std::iter::once(
            Task::event("talk /from 2024-06-01T14:00 /to 2024-06-01T15:00").unwrap(),
        )
        .collect()
    }

    #[test]
    fn updates_event_end() {
        let mut list = talk();
        let result = run(&mut list, "1 to 2024-06-01T16:00").unwrap();
        assert_eq!(
            result.messages[0].content,
            "Updated task:\n    [E][ ] talk (from 2024-06-01T14:00 to 2024-06-01T16:00)"
        );
    }

    #[test]
    fn updates_event_start() {
        let mut list = talk();
        run(&mut list, "1 from 2024-06-01T13:30").unwrap();
        assert_eq!(
            list.tasks()[0].to_string(),
            "[E][ ] talk (from 2024-06-01T13:30 to 2024-06-01T15:00)"
        );
    }

    #[test]
    fn reports_each_failure_kind() {
        let mut list: TaskList = std::iter::once(Task::todo("a").unwrap()).collect();
        assert!(matches!(
            run(&mut list, "x description b"),
            Err(DukeError::NotAnInteger(_))
        ));
        assert!(matches!(
            run(&mut list, "9 description b"),
            Err(DukeError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            run(&mut list, "1 by 2024-06-01T16:00"),
            Err(DukeError::InvalidAttributeForVariant { .. })
        ));
        assert!(matches!(
            run(&mut list, "1 description"),
            Err(DukeError::EmptyDescription)
        ));
        assert_eq!(list.tasks()[0].description(), "a");
    }
}
