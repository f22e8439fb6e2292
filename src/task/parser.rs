//! Data file parser and writer
//!
//! One task per line, fields joined by ` | `:
//!
//! ```text
//! T | 0 | read book
//! D | 1 | submit report | 2/12/2024 18:00
//! E | 0 | project meeting | 2024-12-02 14:00 | 2024-12-02 16:30
//! ```
//!
//! Time fields hold the text the user originally typed.

use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

use super::datetime::DateTimeError;
use super::model::Task;

pub const FIELD_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("unknown task tag '{0}'")]
    UnknownTag(String),

    #[error("invalid done flag '{0}' (expected 0 or 1)")]
    InvalidDoneFlag(String),

    #[error("missing fields for '{tag}' record")]
    MissingFields { tag: char },

    #[error("empty description")]
    EmptyDescription,

    #[error(transparent)]
    DateTime(#[from] DateTimeError),
}

/// A line that could not be turned into a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line_number: usize,
    pub content: String,
    pub error: RecordError,
}

/// Parsed contents of a data file
#[derive(Debug, Clone, Default)]
pub struct TaskFile {
    pub tasks: Vec<Task>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse one record line
pub fn parse_line(line: &str) -> Result<Task, RecordError> {
    let mut head = line.splitn(3, FIELD_SEPARATOR);
    let tag = head.next().unwrap_or_default().trim();
    let flag = head.next().map(str::trim);
    let rest = head.next();

    let tag = match tag {
        "T" => 'T',
        "D" => 'D',
        "E" => 'E',
        other => return Err(RecordError::UnknownTag(other.to_string())),
    };

    let done = match flag {
        Some("1") => true,
        Some("0") => false,
        Some(other) => return Err(RecordError::InvalidDoneFlag(other.to_string())),
        None => return Err(RecordError::MissingFields { tag }),
    };
    let rest = rest.ok_or(RecordError::MissingFields { tag })?;

    // Time fields never contain the separator, so peel them off the end and
    // leave whatever remains (separators included) as the description.
    let task = match tag {
        'T' => Task::todo(non_empty(rest)?),
        'D' => {
            let (description, by) = rest
                .rsplit_once(FIELD_SEPARATOR)
                .ok_or(RecordError::MissingFields { tag })?;
            Task::deadline(non_empty(description)?, by)?
        }
        _ => {
            let mut fields = rest.rsplitn(3, FIELD_SEPARATOR);
            let to = fields.next();
            let from = fields.next();
            let description = fields.next();
            match (description, from, to) {
                (Some(description), Some(from), Some(to)) => {
                    Task::event(non_empty(description)?, from, to)?
                }
                _ => return Err(RecordError::MissingFields { tag }),
            }
        }
    };

    Ok(task.with_done(done))
}

fn non_empty(description: &str) -> Result<&str, RecordError> {
    let description = description.trim();
    if description.is_empty() {
        Err(RecordError::EmptyDescription)
    } else {
        Ok(description)
    }
}

impl TaskFile {
    /// Parse a data file from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tasks from {:?}", path))?;
        Ok(Self::parse(&content))
    }

    /// Parse data file content, collecting bad lines instead of failing
    pub fn parse(content: &str) -> Self {
        let mut file = Self::default();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(line) {
                Ok(task) => file.tasks.push(task),
                Err(error) => file.skipped.push(SkippedLine {
                    line_number: index + 1,
                    content: line.to_string(),
                    error,
                }),
            }
        }

        file
    }

    /// Render tasks as data file content
    pub fn render(tasks: &[Task]) -> String {
        let mut output = String::new();
        for task in tasks {
            output.push_str(&task.to_record_line());
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::command::interpret;
    use crate::task::TaskList;

    const SAMPLE: &str = "T | 0 | read book
D | 1 | submit report | 2/12/2024 18:00
E | 0 | project meeting | 2024-12-02 14:00 | 2024-12-02 16:30
";

    #[test]
    fn test_parse_all_kinds() {
        let file = TaskFile::parse(SAMPLE);

        assert!(file.skipped.is_empty());
        assert_eq!(file.tasks.len(), 3);
        assert_eq!(file.tasks[0].to_display_line(), "[T][ ] read book");
        assert_eq!(
            file.tasks[1].to_display_line(),
            "[D][X] submit report (by: Dec 2 2024, 6:00PM)"
        );
        assert_eq!(
            file.tasks[2].to_display_line(),
            "[E][ ] project meeting (from: Dec 2 2024, 2:00PM to: Dec 2 2024, 4:30PM)"
        );
    }

    #[test]
    fn test_render_matches_source() {
        let file = TaskFile::parse(SAMPLE);
        assert_eq!(TaskFile::render(&file.tasks), SAMPLE);
    }

    #[test]
    fn test_reload_keeps_display() {
        let original = vec![
            Task::deadline("pay rent", "1-03-2025 09:00").unwrap(),
            Task::event("trip", "2025/04/5 07:00", "2025/04/9 21:15").unwrap(),
        ];

        let reloaded = TaskFile::parse(&TaskFile::render(&original));
        assert_eq!(reloaded.tasks, original);
        for (before, after) in original.iter().zip(&reloaded.tasks) {
            assert_eq!(before.to_display_line(), after.to_display_line());
        }
    }

    #[test]
    fn test_description_with_separator_survives() {
        let task = Task::deadline("a | b", "2024-12-02 14:00").unwrap();
        let parsed = parse_line(&task.to_record_line()).unwrap();
        assert_eq!(parsed.description(), "a | b");
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let content = "T | 0 | keep me
X | 0 | unknown tag
T | 2 | bad flag
D | 0 | no time
E | 0 | half | 2024-12-02 14:00
D | 0 | bad time | someday
T | 0 |
T | 1 | keep me too
";
        let file = TaskFile::parse(content);

        let kept: Vec<_> = file.tasks.iter().map(|t| t.description()).collect();
        assert_eq!(kept, vec!["keep me", "keep me too"]);
        assert!(file.tasks[1].is_done());

        let skipped: Vec<_> = file.skipped.iter().map(|s| s.line_number).collect();
        assert_eq!(skipped, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(file.skipped[0].error, RecordError::UnknownTag("X".to_string()));
        assert_eq!(
            file.skipped[1].error,
            RecordError::InvalidDoneFlag("2".to_string())
        );
        assert!(matches!(file.skipped[4].error, RecordError::DateTime(_)));
    }

    #[test]
    fn test_blank_lines_ignored() {
        let file = TaskFile::parse("\n  \nT | 0 | read book\n\n");
        assert_eq!(file.tasks.len(), 1);
        assert!(file.skipped.is_empty());
    }

    #[test]
    fn test_line_break_in_input_never_reaches_file() {
        let mut tasks = TaskList::new();
        assert!(interpret("todo a\nD | 1 | injected | 2024-12-02 14:00", &mut tasks).is_err());
        assert!(interpret("todo b\r\nT | 1 | injected", &mut tasks).is_err());
        interpret("todo a", &mut tasks).unwrap();

        let rendered = TaskFile::render(tasks.as_slice());
        assert_eq!(rendered.lines().count(), 1);

        let reloaded = TaskFile::parse(&rendered);
        assert_eq!(reloaded.tasks, tasks.as_slice());
        assert!(reloaded.skipped.is_empty());
    }
}
