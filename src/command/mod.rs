//! Command interpreter
//!
//! Turns one line of user input into a change to the task list and a reply:
//! - Classify the command word and validate its arguments
//! - Apply the command, or fail without touching the list
//! - Produce the reply text

pub mod error;
pub mod interpreter;
pub mod messages;
pub mod parse;

pub use error::CommandError;
pub use interpreter::{execute, interpret, Response};
pub use parse::{parse_command, Command, CommandKind, TaskNumber};
