use crate::model::{TaskAttribute, TaskKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DukeError {
    #[error("Empty Description")]
    EmptyDescription,

    #[error("No {} given. Format - {}", .0.temporal_noun(), .0.usage())]
    MissingTemporalField(TaskKind),

    #[error("Invalid date/time: {0} (expected yyyy-mm-ddThh:mm, e.g. 2024-03-01T18:00)")]
    InvalidTimestamp(String),

    #[error("Index provided is not an integer: {0}")]
    NotAnInteger(String),

    #[error("Index {position} is out of range (you have {len} tasks)")]
    IndexOutOfRange { position: i64, len: usize },

    #[error("{kind} tasks have no {attribute}")]
    InvalidAttributeForVariant {
        attribute: TaskAttribute,
        kind: TaskKind,
    },

    #[error("Unknown attribute: {0} (use description, by, from or to)")]
    UnknownAttribute(String),

    #[error("Unknown command - {0}")]
    UnrecognizedCommand(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Corrupt record on line {line}: {content} ({source})")]
    CorruptRecord {
        line: usize,
        content: String,
        #[source]
        source: Box<DukeError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DukeError>;
