use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::TaskList;
use crate::parser::{parse_task, Command};

/// Handles `todo`, `deadline` and `event`.
pub fn run(list: &mut TaskList, command: Command, args: &str) -> Result<CmdResult> {
    let task = parse_task(command, args)?;
    let summary = list.add(task);
    Ok(CmdResult::default().with_message(CmdMessage::success(summary)))
}
