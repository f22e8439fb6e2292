use thiserror::Error;

use super::parse::CommandKind;
use crate::task::DateTimeError;

/// Everything a user can get wrong in a command line.
///
/// The `Display` text is shown to the user as the reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Input text should not be empty.")]
    EmptyInput,

    #[error("{}", missing_argument(.0))]
    EmptyArgument(CommandKind),

    #[error("{}", malformed(.0))]
    MalformedCommand(CommandKind),

    #[error("'{0}' is not a valid task number. Please enter a task number which is numerical.")]
    NotANumber(String),

    #[error("{}", out_of_range(.number, .len))]
    IndexOutOfRange { number: i64, len: usize },

    #[error(transparent)]
    InvalidDateTime(#[from] DateTimeError),

    #[error(
        "I don't understand '{0}'. Please try again with a valid command \
         (List of commands: {commands}).",
        commands = known_commands()
    )]
    UnknownCommand(String),
}

fn missing_argument(kind: &CommandKind) -> String {
    let what = match kind {
        CommandKind::Find => "The keyword provided is empty. Please provide a valid search keyword",
        CommandKind::Delete | CommandKind::Mark | CommandKind::Unmark => {
            "The task number provided is empty. Please provide a valid task number"
        }
        _ => "The description cannot be empty. Please provide a task description",
    };
    format!("{} (e.g., {}).", what, kind.example())
}

fn malformed(kind: &CommandKind) -> String {
    format!(
        "The {} format is incorrect. Please follow the format '{}' (e.g., {}).",
        kind.word(),
        kind.usage(),
        kind.example()
    )
}

fn out_of_range(number: &i64, len: &usize) -> String {
    match *len {
        0 => format!(
            "Task number {} is out of range. Your task list is empty.",
            number
        ),
        1 => format!(
            "Task number {} is out of range. The only valid task number is 1.",
            number
        ),
        _ => format!(
            "Task number {} is out of range. Please provide a number between 1 and {}.",
            number, len
        ),
    }
}

fn known_commands() -> String {
    CommandKind::ALL
        .iter()
        .map(|kind| kind.word())
        .collect::<Vec<_>>()
        .join(", ")
}
