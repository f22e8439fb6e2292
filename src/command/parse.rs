//! Command line classification and argument parsing

use std::fmt;

use super::error::CommandError;
use crate::task::{Task, TaskKind};

/// The command words the interpreter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Exit,
    Find,
    List,
    Delete,
    Mark,
    Unmark,
    Todo,
    Deadline,
    Event,
}

impl CommandKind {
    pub const ALL: [CommandKind; 9] = [
        Self::Exit,
        Self::Find,
        Self::List,
        Self::Delete,
        Self::Mark,
        Self::Unmark,
        Self::Todo,
        Self::Deadline,
        Self::Event,
    ];

    /// Classify a command word. Matching is exact; `deadlines` or `de` are not commands.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.word() == word)
    }

    pub fn word(&self) -> &'static str {
        match self {
            Self::Exit => "bye",
            Self::Find => "find",
            Self::List => "list",
            Self::Delete => "delete",
            Self::Mark => "mark",
            Self::Unmark => "unmark",
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Self::Exit => "bye",
            Self::Find => "find <keyword>",
            Self::List => "list",
            Self::Delete => "delete <task number>",
            Self::Mark => "mark <task number>",
            Self::Unmark => "unmark <task number>",
            Self::Todo => "todo <description>",
            Self::Deadline => "deadline <description> /by <time>",
            Self::Event => "event <description> /from <time> /to <time>",
        }
    }

    pub fn example(&self) -> &'static str {
        match self {
            Self::Exit => "bye",
            Self::Find => "find book",
            Self::List => "list",
            Self::Delete => "delete 3",
            Self::Mark => "mark 2",
            Self::Unmark => "unmark 2",
            Self::Todo => "todo read book",
            Self::Deadline => "deadline return book /by 2/12/2024 18:00",
            Self::Event => "event project meeting /from 2024-12-02 14:00 /to 2024-12-02 16:00",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// A 1-based task number as typed by the user, not yet checked against the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskNumber(pub i64);

impl TaskNumber {
    /// Take the first whitespace-separated token of `args` as the task number
    pub fn parse(kind: CommandKind, args: &str) -> Result<Self, CommandError> {
        let token = args
            .split_whitespace()
            .next()
            .ok_or(CommandError::EmptyArgument(kind))?;
        token
            .parse::<i64>()
            .map(Self)
            .map_err(|_| CommandError::NotANumber(token.to_string()))
    }

    /// Convert to a 0-based index valid for a list of `len` tasks
    pub fn resolve(self, len: usize) -> Result<usize, CommandError> {
        let out_of_range = CommandError::IndexOutOfRange {
            number: self.0,
            len,
        };
        self.0
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .filter(|index| *index < len)
            .ok_or(out_of_range)
    }
}

/// A fully validated command, ready to run against a task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Find { keyword: String },
    List,
    Delete(TaskNumber),
    Mark(TaskNumber),
    Unmark(TaskNumber),
    Add(Task),
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Exit => CommandKind::Exit,
            Self::Find { .. } => CommandKind::Find,
            Self::List => CommandKind::List,
            Self::Delete(_) => CommandKind::Delete,
            Self::Mark(_) => CommandKind::Mark,
            Self::Unmark(_) => CommandKind::Unmark,
            Self::Add(task) => match task.kind() {
                TaskKind::Todo => CommandKind::Todo,
                TaskKind::Deadline { .. } => CommandKind::Deadline,
                TaskKind::Event { .. } => CommandKind::Event,
            },
        }
    }
}

/// Split trimmed input into the command word and the (trimmed) rest
pub fn split_command_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

/// Parse one line of user input
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CommandError::EmptyInput);
    }

    let (word, args) = split_command_word(input);
    let kind = CommandKind::from_word(word)
        .ok_or_else(|| CommandError::UnknownCommand(input.to_string()))?;

    match kind {
        CommandKind::Exit | CommandKind::List if !args.is_empty() => {
            Err(CommandError::UnknownCommand(input.to_string()))
        }
        // One record per line in the data file
        _ if args.contains(['\n', '\r']) => Err(CommandError::MalformedCommand(kind)),
        CommandKind::Exit => Ok(Command::Exit),
        CommandKind::List => Ok(Command::List),
        CommandKind::Find => {
            if args.is_empty() {
                return Err(CommandError::EmptyArgument(kind));
            }
            Ok(Command::Find {
                keyword: args.to_string(),
            })
        }
        CommandKind::Delete => TaskNumber::parse(kind, args).map(Command::Delete),
        CommandKind::Mark => TaskNumber::parse(kind, args).map(Command::Mark),
        CommandKind::Unmark => TaskNumber::parse(kind, args).map(Command::Unmark),
        CommandKind::Todo => {
            if args.is_empty() {
                return Err(CommandError::EmptyArgument(kind));
            }
            Ok(Command::Add(Task::todo(args)))
        }
        CommandKind::Deadline => parse_deadline(args),
        CommandKind::Event => parse_event(args),
    }
}

fn parse_deadline(args: &str) -> Result<Command, CommandError> {
    let malformed = || CommandError::MalformedCommand(CommandKind::Deadline);

    let (description, by) = split_at_flag(args, "/by").ok_or_else(malformed)?;
    if description.is_empty() || by.is_empty() {
        return Err(malformed());
    }

    Ok(Command::Add(Task::deadline(description, by)?))
}

fn parse_event(args: &str) -> Result<Command, CommandError> {
    let malformed = || CommandError::MalformedCommand(CommandKind::Event);

    let (description, times) = split_at_flag(args, "/from").ok_or_else(malformed)?;
    let (from, to) = split_at_flag(times, "/to").ok_or_else(malformed)?;
    if description.is_empty() || from.is_empty() || to.is_empty() {
        return Err(malformed());
    }

    Ok(Command::Add(Task::event(description, from, to)?))
}

/// Split `text` around the first occurrence of `flag` standing as its own
/// whitespace-delimited word. Both halves are trimmed.
fn split_at_flag<'a>(text: &'a str, flag: &str) -> Option<(&'a str, &'a str)> {
    text.match_indices(flag).find_map(|(start, _)| {
        let end = start + flag.len();
        let before_ok = text[..start]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace);
        let after_ok = text[end..].chars().next().is_none_or(char::is_whitespace);
        (before_ok && after_ok).then(|| (text[..start].trim(), text[end..].trim()))
    })
}
