use colored::Colorize;
use duke::commands::{CmdMessage, MessageLevel};
use std::io::{self, Write};

const FRAME: &str = "=====================";

pub(crate) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.normal(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Error => format!("Err: {}", message.content).red(),
        };
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", FRAME.dimmed())
}

pub(crate) fn write_greeting<W: Write>(out: &mut W, loaded: usize) -> io::Result<()> {
    let greeting = CmdMessage::info(format!(
        "Hello! I'm Duke\nYou have {} saved tasks. What can I do for you?",
        loaded
    ));
    write_messages(out, &[greeting])
}
