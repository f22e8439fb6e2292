//! Runs parsed commands against a task list

use tracing::debug;

use super::error::CommandError;
use super::messages;
use super::parse::{parse_command, Command, TaskNumber};
use crate::task::{Task, TaskList};

/// Reply to one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    /// The caller should save and close after showing `text`
    pub exit: bool,
    /// The task list was modified
    pub changed: bool,
}

impl Response {
    fn reply(text: String) -> Self {
        Self {
            text,
            exit: false,
            changed: false,
        }
    }

    fn changed(text: String) -> Self {
        Self {
            text,
            exit: false,
            changed: true,
        }
    }

    fn exit(text: String) -> Self {
        Self {
            text,
            exit: true,
            changed: false,
        }
    }
}

/// Interpret one line of input against `tasks`.
///
/// On error the list is left untouched. Empty input is answered with a plain
/// reply rather than an error.
pub fn interpret(input: &str, tasks: &mut TaskList) -> Result<Response, CommandError> {
    match parse_command(input) {
        Ok(command) => execute(command, tasks),
        Err(CommandError::EmptyInput) => Ok(Response::reply(CommandError::EmptyInput.to_string())),
        Err(e) => Err(e),
    }
}

/// Apply an already parsed command
pub fn execute(command: Command, tasks: &mut TaskList) -> Result<Response, CommandError> {
    debug!("Executing {} command", command.kind());

    match command {
        Command::Exit => Ok(Response::exit(messages::goodbye())),
        Command::List => Ok(Response::reply(messages::task_listing(tasks))),
        Command::Find { keyword } => {
            let matches = tasks.find(&keyword);
            Ok(Response::reply(messages::find_results(&keyword, &matches)))
        }
        Command::Delete(number) => {
            let index = number.resolve(tasks.len())?;
            let removed = tasks
                .remove(index)
                .ok_or_else(|| out_of_range(number, tasks.len()))?;
            Ok(Response::changed(messages::task_deleted(
                &removed,
                tasks.len(),
            )))
        }
        Command::Mark(number) => {
            let task = resolve_mut(tasks, number)?;
            task.mark_done();
            Ok(Response::changed(messages::task_marked(task)))
        }
        Command::Unmark(number) => {
            let task = resolve_mut(tasks, number)?;
            task.mark_not_done();
            Ok(Response::changed(messages::task_unmarked(task)))
        }
        Command::Add(task) => {
            let text = messages::task_added(&task, tasks.len() + 1);
            tasks.add(task);
            Ok(Response::changed(text))
        }
    }
}

fn out_of_range(number: TaskNumber, len: usize) -> CommandError {
    CommandError::IndexOutOfRange {
        number: number.0,
        len,
    }
}

fn resolve_mut(tasks: &mut TaskList, number: TaskNumber) -> Result<&mut Task, CommandError> {
    let len = tasks.len();
    let index = number.resolve(len)?;
    tasks.get_mut(index).ok_or_else(|| out_of_range(number, len))
}
