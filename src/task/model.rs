//! Task data model

use chrono::NaiveDateTime;
use std::fmt;

use super::datetime::{format_display, parse_date_time, DateTimeError};

/// A parsed instant together with the text the user typed for it.
///
/// The raw text is what gets written to disk, so reloading re-parses exactly
/// what the user entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moment {
    raw: String,
    at: NaiveDateTime,
}

impl Moment {
    pub fn parse(raw: &str) -> Result<Self, DateTimeError> {
        let raw = raw.trim();
        let at = parse_date_time(raw)?;
        Ok(Self {
            raw: raw.to_string(),
            at,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn at(&self) -> NaiveDateTime {
        self.at
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_display(&self.at))
    }
}

/// Task variant and the time fields that belong to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Plain task with no time attached
    Todo,
    /// Must be finished by a point in time
    Deadline { by: Moment },
    /// Occupies a time range
    Event { from: Moment, to: Moment },
}

impl TaskKind {
    /// Single-letter tag used both on screen and in the data file
    pub fn tag(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline { .. } => "deadline",
            Self::Event { .. } => "event",
        }
    }

    /// Raw time strings in declaration order
    pub fn raw_times(&self) -> Vec<&str> {
        match self {
            Self::Todo => Vec::new(),
            Self::Deadline { by } => vec![by.raw()],
            Self::Event { from, to } => vec![from.raw(), to.raw()],
        }
    }
}

/// A task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: &str) -> Result<Self, DateTimeError> {
        let by = Moment::parse(by)?;
        Ok(Self::new(description, TaskKind::Deadline { by }))
    }

    pub fn event(
        description: impl Into<String>,
        from: &str,
        to: &str,
    ) -> Result<Self, DateTimeError> {
        let from = Moment::parse(from)?;
        let to = Moment::parse(to)?;
        Ok(Self::new(description, TaskKind::Event { from, to }))
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_not_done(&mut self) {
        self.done = false;
    }

    pub(crate) fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    pub fn status_glyph(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }

    /// Format as shown to the user, e.g. `[D][ ] submit report (by: Dec 2 2024, 6:00PM)`
    pub fn to_display_line(&self) -> String {
        let mut line = format!(
            "[{}][{}] {}",
            self.kind.tag(),
            self.status_glyph(),
            self.description
        );

        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => line.push_str(&format!(" (by: {})", by)),
            TaskKind::Event { from, to } => {
                line.push_str(&format!(" (from: {} to: {})", from, to))
            }
        }

        line
    }

    /// Format as a data file record, e.g. `D | 0 | submit report | 2/12/2024 18:00`
    pub fn to_record_line(&self) -> String {
        let mut fields = vec![
            self.kind.tag().to_string(),
            if self.done { "1" } else { "0" }.to_string(),
            self.description.clone(),
        ];
        fields.extend(self.kind.raw_times().into_iter().map(str::to_string));
        fields.join(super::parser::FIELD_SEPARATOR)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_line())
    }
}
