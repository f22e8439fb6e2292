//! Chat session: one task list, one store, one line at a time

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::command::interpret;
use crate::task::{TaskList, TaskStore};

/// What the shell should show after a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Tasks are saved; close after showing `text`
    pub exit: bool,
    pub is_error: bool,
}

impl Reply {
    fn ok(text: String) -> Self {
        Self {
            text,
            exit: false,
            is_error: false,
        }
    }

    fn error(text: String) -> Self {
        Self {
            text,
            exit: false,
            is_error: true,
        }
    }
}

pub struct Session<S: TaskStore> {
    tasks: TaskList,
    store: S,
    autosave: bool,
}

impl<S: TaskStore> Session<S> {
    /// Load the task list from `store`
    pub fn open(store: S) -> Result<Self> {
        let tasks = TaskList::from(store.load()?);
        info!("Session opened with {} tasks", tasks.len());
        Ok(Self {
            tasks,
            store,
            autosave: false,
        })
    }

    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&self) -> Result<()> {
        self.store.save(self.tasks.as_slice())
    }

    /// Interpret one line and turn the outcome into reply text.
    ///
    /// `bye` only reports `exit` once the tasks are saved; if saving fails the
    /// session stays open so nothing is lost.
    pub fn handle(&mut self, line: &str) -> Reply {
        let response = match interpret(line, &mut self.tasks) {
            Ok(response) => response,
            Err(e) => {
                debug!("Command rejected: {}", e);
                return Reply::error(e.to_string());
            }
        };

        if response.exit {
            return match self.save() {
                Ok(()) => Reply {
                    text: response.text,
                    exit: true,
                    is_error: false,
                },
                Err(e) => {
                    warn!("Failed to save tasks on exit: {:#}", e);
                    Reply::error(format!(
                        "I couldn't save your tasks, so I'm staying open: {:#}",
                        e
                    ))
                }
            };
        }

        if response.changed && self.autosave {
            if let Err(e) = self.save() {
                warn!("Autosave failed: {:#}", e);
                return Reply::error(format!(
                    "{}\nWarning: failed to save tasks: {:#}",
                    response.text, e
                ));
            }
        }

        Reply::ok(response.text)
    }
}
