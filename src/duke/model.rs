//! Task types and their text encodings.
//!
//! A [`Task`] carries the fields every kind shares (description, done flag)
//! plus a [`TaskDetails`] holding whatever is specific to its kind. Three
//! string forms exist for every task:
//!
//! - user input (`return book /by 2024-03-01T18:00`), read by [`Task::create`]
//! - the display line (`[D][ ] return book (by 2024-03-01T18:00)`), via `Display`
//! - the persisted line (`deadline 0 return book /by 2024-03-01T18:00`), via
//!   [`Task::to_persist_string`] and [`Task::from_persist_str`]
//!
//! The persisted form is what the data file holds, one task per line. Reading a
//! persisted line back must give a task that displays and persists identically.

use crate::error::{DukeError, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format used for every timestamp the user types, sees, or we persist.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

const BY_DELIMITER: &str = " /by ";
const FROM_DELIMITER: &str = " /from ";
const TO_DELIMITER: &str = " /to ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    ToDo,
    Deadline,
    Event,
}

impl TaskKind {
    /// Single letter shown in the first bracket of the display line.
    pub fn tag(self) -> char {
        match self {
            TaskKind::ToDo => 'T',
            TaskKind::Deadline => 'D',
            TaskKind::Event => 'E',
        }
    }

    /// The command word, which is also the type token of a persisted line.
    pub fn keyword(self) -> &'static str {
        match self {
            TaskKind::ToDo => "todo",
            TaskKind::Deadline => "deadline",
            TaskKind::Event => "event",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "todo" => Some(TaskKind::ToDo),
            "deadline" => Some(TaskKind::Deadline),
            "event" => Some(TaskKind::Event),
            _ => None,
        }
    }

    pub(crate) fn temporal_noun(self) -> &'static str {
        match self {
            TaskKind::ToDo => "time",
            TaskKind::Deadline => "deadline",
            TaskKind::Event => "event time",
        }
    }

    pub(crate) fn usage(self) -> &'static str {
        match self {
            TaskKind::ToDo => "todo <description>",
            TaskKind::Deadline => "deadline <description> /by <deadline>",
            TaskKind::Event => "event <description> /from <start> /to <end>",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A field that `update` can replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskAttribute {
    Description,
    By,
    From,
    To,
}

impl fmt::Display for TaskAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskAttribute::Description => "description",
            TaskAttribute::By => "deadline",
            TaskAttribute::From => "start time",
            TaskAttribute::To => "end time",
        };
        f.write_str(name)
    }
}

impl FromStr for TaskAttribute {
    type Err = DukeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "description" | "desc" => Ok(TaskAttribute::Description),
            "by" | "deadline" => Ok(TaskAttribute::By),
            "from" | "start" => Ok(TaskAttribute::From),
            "to" | "end" => Ok(TaskAttribute::To),
            _ => Err(DukeError::UnknownAttribute(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDetails {
    ToDo,
    Deadline {
        due_at: NaiveDateTime,
    },
    Event {
        start_at: NaiveDateTime,
        end_at: NaiveDateTime,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    is_done: bool,
    details: TaskDetails,
}

impl Task {
    /// Builds a task of `kind` from the text typed after the command word.
    pub fn create(kind: TaskKind, raw: &str) -> Result<Self> {
        match kind {
            TaskKind::ToDo => Self::todo(raw),
            TaskKind::Deadline => Self::deadline(raw),
            TaskKind::Event => Self::event(raw),
        }
    }

    pub fn todo(raw: &str) -> Result<Self> {
        let description = non_empty(raw)?;
        Ok(Self::with_details(description, TaskDetails::ToDo))
    }

    /// `<description> /by <timestamp>`
    pub fn deadline(raw: &str) -> Result<Self> {
        non_empty(raw)?;
        let parts: Vec<&str> = raw.split(BY_DELIMITER).collect();
        let &[description, due] = parts.as_slice() else {
            return Err(DukeError::MissingTemporalField(TaskKind::Deadline));
        };
        let description = non_empty(description)?;
        let due_at = parse_timestamp(due)?;
        Ok(Self::with_details(description, TaskDetails::Deadline { due_at }))
    }

    /// `<description> /from <timestamp> /to <timestamp>`
    pub fn event(raw: &str) -> Result<Self> {
        non_empty(raw)?;
        let missing = || DukeError::MissingTemporalField(TaskKind::Event);

        let parts: Vec<&str> = raw.split(FROM_DELIMITER).collect();
        let &[description, span] = parts.as_slice() else {
            return Err(missing());
        };
        let bounds: Vec<&str> = span.split(TO_DELIMITER).collect();
        let &[start, end] = bounds.as_slice() else {
            return Err(missing());
        };

        let description = non_empty(description)?;
        let start_at = parse_timestamp(start)?;
        let end_at = parse_timestamp(end)?;
        Ok(Self::with_details(
            description,
            TaskDetails::Event { start_at, end_at },
        ))
    }

    fn with_details(description: String, details: TaskDetails) -> Self {
        Self {
            description,
            is_done: false,
            details,
        }
    }

    pub fn kind(&self) -> TaskKind {
        match self.details {
            TaskDetails::ToDo => TaskKind::ToDo,
            TaskDetails::Deadline { .. } => TaskKind::Deadline,
            TaskDetails::Event { .. } => TaskKind::Event,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub fn details(&self) -> &TaskDetails {
        &self.details
    }

    pub fn mark_as_done(&mut self) {
        self.is_done = true;
    }

    pub fn mark_as_not_done(&mut self) {
        self.is_done = false;
    }

    fn status_icon(&self) -> char {
        if self.is_done {
            'X'
        } else {
            ' '
        }
    }

    /// Case-sensitive substring match against the description only.
    pub fn matches(&self, term: &str) -> bool {
        self.description.contains(term)
    }

    /// Replaces one field. Time fields are re-parsed; nothing changes on error.
    pub fn update(&mut self, attribute: TaskAttribute, value: &str) -> Result<()> {
        let invalid = |kind| DukeError::InvalidAttributeForVariant { attribute, kind };
        let kind = self.kind();

        match (attribute, &mut self.details) {
            (TaskAttribute::Description, _) => {
                self.description = non_empty(value)?;
            }
            (TaskAttribute::By, TaskDetails::Deadline { due_at }) => {
                *due_at = parse_timestamp(value)?;
            }
            (TaskAttribute::From, TaskDetails::Event { start_at, .. }) => {
                *start_at = parse_timestamp(value)?;
            }
            (TaskAttribute::To, TaskDetails::Event { end_at, .. }) => {
                *end_at = parse_timestamp(value)?;
            }
            _ => return Err(invalid(kind)),
        }
        Ok(())
    }

    /// One line of the data file: `<keyword> <0|1> <description>[ <delimiter> <time>...]`.
    pub fn to_persist_string(&self) -> String {
        let flag = if self.is_done { 1 } else { 0 };
        let head = format!("{} {} {}", self.kind().keyword(), flag, self.description);
        match &self.details {
            TaskDetails::ToDo => head,
            TaskDetails::Deadline { due_at } => {
                format!("{}{}{}", head, BY_DELIMITER, format_timestamp(due_at))
            }
            TaskDetails::Event { start_at, end_at } => format!(
                "{}{}{}{}{}",
                head,
                FROM_DELIMITER,
                format_timestamp(start_at),
                TO_DELIMITER,
                format_timestamp(end_at)
            ),
        }
    }

    /// Inverse of [`Task::to_persist_string`].
    ///
    /// Time fields are split off from the right, so a description that itself
    /// contains ` /by ` (possible after an update) still reads back intact.
    pub fn from_persist_str(line: &str) -> Result<Self> {
        let mut fields = line.splitn(3, ' ');
        let keyword = fields.next().unwrap_or_default();
        let flag = fields.next().unwrap_or_default();
        let rest = fields.next().unwrap_or_default();

        let kind = TaskKind::from_keyword(keyword)
            .ok_or_else(|| DukeError::MalformedRecord(format!("unknown task type '{}'", keyword)))?;
        let is_done = match flag {
            "1" => true,
            "0" => false,
            other => {
                return Err(DukeError::MalformedRecord(format!(
                    "done flag must be 0 or 1, got '{}'",
                    other
                )))
            }
        };

        let missing = || DukeError::MissingTemporalField(kind);
        let (description, details) = match kind {
            TaskKind::ToDo => (rest, TaskDetails::ToDo),
            TaskKind::Deadline => {
                let (description, due) = rest.rsplit_once(BY_DELIMITER).ok_or_else(missing)?;
                let due_at = parse_timestamp(due)?;
                (description, TaskDetails::Deadline { due_at })
            }
            TaskKind::Event => {
                let (head, end) = rest.rsplit_once(TO_DELIMITER).ok_or_else(missing)?;
                let (description, start) =
                    head.rsplit_once(FROM_DELIMITER).ok_or_else(missing)?;
                let start_at = parse_timestamp(start)?;
                let end_at = parse_timestamp(end)?;
                (description, TaskDetails::Event { start_at, end_at })
            }
        };

        Ok(Self {
            description: non_empty(description)?,
            is_done,
            details,
        })
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind().tag(),
            self.status_icon(),
            self.description
        )?;
        match &self.details {
            TaskDetails::ToDo => Ok(()),
            TaskDetails::Deadline { due_at } => write!(f, " (by {})", format_timestamp(due_at)),
            TaskDetails::Event { start_at, end_at } => write!(
                f,
                " (from {} to {})",
                format_timestamp(start_at),
                format_timestamp(end_at)
            ),
        }
    }
}

pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| DukeError::InvalidTimestamp(text.to_string()))
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

fn non_empty(description: &str) -> Result<String> {
    if description.trim().is_empty() {
        return Err(DukeError::EmptyDescription);
    }
    Ok(description.to_string())
}
