//! # API Facade
//!
//! [`DukeApi`] is the single entry point a UI talks to. It owns the task list
//! and the storage it came from, so the position and persistence rules are
//! enforced in one place and the UI never holds the list itself.
//!
//! The facade:
//! - **Loads** the list once at session start ([`DukeApi::load`]); a corrupt
//!   data file is an error the caller must treat as fatal
//! - **Dispatches** each command line to its `commands::*` module
//! - **Recovers** command failures into error messages ([`DukeApi::respond`])
//! - **Saves** the whole list on `bye` or when the session ends
//!
//! It performs no terminal I/O. Generic over [`Storage`], so tests run against
//! [`crate::store::memory::InMemoryStorage`].

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{DukeError, Result};
use crate::list::TaskList;
use crate::parser::{split_line, Command};
use crate::store::Storage;
use tracing::{debug, info, warn};

pub const GOODBYE_MESSAGE: &str = "Bye. Hope to see you again soon!";
pub const NO_COMMAND_MESSAGE: &str = "No command input";

pub struct DukeApi<S: Storage> {
    storage: S,
    tasks: TaskList,
}

impl<S: Storage> DukeApi<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            tasks: TaskList::new(),
        }
    }

    /// Reads the stored tasks into the list. Returns how many were loaded.
    pub fn load(&mut self) -> Result<usize> {
        let lines = self.storage.read()?;
        let mut tasks = TaskList::new();
        tasks.load_from(&lines)?;
        let count = tasks.len();
        self.tasks = tasks;
        info!(count, "loaded tasks");
        Ok(count)
    }

    pub fn save(&mut self) -> Result<()> {
        self.storage.write(&self.tasks.to_persist_block())?;
        info!(count = self.tasks.len(), "saved tasks");
        Ok(())
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Runs one command line.
    pub fn execute(&mut self, input: &str) -> Result<CmdResult> {
        let line = split_line(input);
        debug!(command = %line.command, args = line.args, "dispatching");

        match line.command {
            _ if line.token.is_empty() => {
                Ok(CmdResult::default().with_message(CmdMessage::error(NO_COMMAND_MESSAGE)))
            }
            Command::Todo | Command::Deadline | Command::Event => {
                commands::add::run(&mut self.tasks, line.command, line.args)
            }
            Command::List => Ok(commands::list::run(&self.tasks)),
            Command::Mark => commands::marking::mark(&mut self.tasks, line.args),
            Command::Unmark => commands::marking::unmark(&mut self.tasks, line.args),
            Command::Delete => commands::delete::run(&mut self.tasks, line.args),
            Command::Find => Ok(commands::find::run(&self.tasks, line.args)),
            Command::Update => commands::update::run(&mut self.tasks, line.args),
            Command::Bye => Ok(self.shutdown()),
            Command::Unknown => {
                let unknown = DukeError::UnrecognizedCommand(line.token.to_string());
                Ok(CmdResult::default().with_message(CmdMessage::error(unknown.to_string())))
            }
        }
    }

    /// Like [`DukeApi::execute`], with any failure turned into an error message.
    pub fn respond(&mut self, input: &str) -> CmdResult {
        self.execute(input).unwrap_or_else(|e| {
            debug!(error = %e, "command failed");
            CmdResult::default().with_message(CmdMessage::error(e.to_string()))
        })
    }

    /// Saves and marks the session as finished. A failed save is reported as an
    /// error message; the session still ends.
    pub fn shutdown(&mut self) -> CmdResult {
        let message = match self.save() {
            Ok(()) => CmdMessage::info(GOODBYE_MESSAGE),
            Err(e) => {
                warn!(error = %e, "failed to save tasks");
                CmdMessage::error(format!("Could not save tasks: {}", e))
            }
        };
        CmdResult::default().with_message(message).exiting()
    }
}
