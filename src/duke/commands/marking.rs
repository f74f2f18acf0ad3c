use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::TaskList;

pub fn mark(list: &mut TaskList, position: &str) -> Result<CmdResult> {
    let summary = list.mark_done(position)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(summary)))
}

pub fn unmark(list: &mut TaskList, position: &str) -> Result<CmdResult> {
    let summary = list.mark_undone(position)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(summary)))
}
