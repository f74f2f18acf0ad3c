//! Turns raw command lines into commands, tasks and validated arguments.
//!
//! Every input-validation error originates here or in [`crate::model`].
//! Bounds checking is left to [`crate::list::TaskList`], which is the only
//! place that knows how many tasks exist.

use crate::error::{DukeError, Result};
use crate::index::Position;
use crate::model::{Task, TaskAttribute, TaskKind};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Todo,
    Deadline,
    Event,
    List,
    Mark,
    Unmark,
    Delete,
    Find,
    Update,
    Bye,
    Unknown,
}

impl Command {
    /// Maps a command word. Anything unrecognised is `Unknown`, never an error.
    pub fn from_token(token: &str) -> Self {
        match token {
            "todo" => Command::Todo,
            "deadline" => Command::Deadline,
            "event" => Command::Event,
            "list" => Command::List,
            "mark" => Command::Mark,
            "unmark" => Command::Unmark,
            "delete" => Command::Delete,
            "find" => Command::Find,
            "update" => Command::Update,
            "bye" => Command::Bye,
            _ => Command::Unknown,
        }
    }

    pub fn task_kind(self) -> Option<TaskKind> {
        match self {
            Command::Todo => Some(TaskKind::ToDo),
            Command::Deadline => Some(TaskKind::Deadline),
            Command::Event => Some(TaskKind::Event),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Command::Todo => "todo",
            Command::Deadline => "deadline",
            Command::Event => "event",
            Command::List => "list",
            Command::Mark => "mark",
            Command::Unmark => "unmark",
            Command::Delete => "delete",
            Command::Find => "find",
            Command::Update => "update",
            Command::Bye => "bye",
            Command::Unknown => "unknown",
        };
        f.write_str(word)
    }
}

/// A command line split into its command word and the text after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub command: Command,
    pub token: &'a str,
    pub args: &'a str,
}

/// The command word ends at the first whitespace character of any kind.
pub fn split_line(line: &str) -> CommandLine<'_> {
    let line = line.trim();
    let (token, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    CommandLine {
        command: Command::from_token(token),
        token,
        args,
    }
}

pub fn parse_command(line: &str) -> Command {
    split_line(line).command
}

/// Builds a task for `todo`, `deadline` and `event`.
pub fn parse_task(command: Command, args: &str) -> Result<Task> {
    match command.task_kind() {
        Some(kind) => Task::create(kind, args),
        None => Err(DukeError::UnrecognizedCommand(command.to_string())),
    }
}

pub fn parse_index(raw: &str) -> Result<Position> {
    raw.parse()
}

/// An empty term is valid and selects every task.
pub fn parse_find(args: &str) -> &str {
    args.trim()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub position: Position,
    pub attribute: TaskAttribute,
    pub value: String,
}

/// `<position> <attribute> <value...>`
pub fn parse_update(args: &str) -> Result<UpdateRequest> {
    let args = args.trim();
    let (position, rest) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
    let position = parse_index(position)?;

    let rest = rest.trim_start();
    let (attribute, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let attribute = attribute.parse()?;

    Ok(UpdateRequest {
        position,
        attribute,
        value: value.trim().to_string(),
    })
}
