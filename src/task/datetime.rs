//! Date-time parsing and display for deadline and event tasks

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Pattern used when showing an instant to the user, e.g. `Dec 2 2024, 6:00PM`.
pub const DISPLAY_FORMAT: &str = "%b %-d %Y, %-I:%M%p";

/// An accepted input format.
///
/// `shape` pins the digit widths (a one- or two-digit day, everything else
/// fixed width) before chrono gets to parse, since chrono itself is lenient
/// about field widths.
struct InputFormat {
    pattern: &'static str,
    shape: &'static str,
    chrono: &'static str,
}

/// Tried in order, first match wins.
const INPUT_FORMATS: [InputFormat; 4] = [
    InputFormat {
        pattern: "d/MM/yyyy HH:mm",
        shape: r"^\d{1,2}/\d{2}/\d{4} \d{2}:\d{2}$",
        chrono: "%d/%m/%Y %H:%M",
    },
    InputFormat {
        pattern: "yyyy-MM-dd HH:mm",
        shape: r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$",
        chrono: "%Y-%m-%d %H:%M",
    },
    InputFormat {
        pattern: "d-MM-yyyy HH:mm",
        shape: r"^\d{1,2}-\d{2}-\d{4} \d{2}:\d{2}$",
        chrono: "%d-%m-%Y %H:%M",
    },
    InputFormat {
        pattern: "yyyy/MM/d HH:mm",
        shape: r"^\d{4}/\d{2}/\d{1,2} \d{2}:\d{2}$",
        chrono: "%Y/%m/%d %H:%M",
    },
];

static SHAPES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    INPUT_FORMATS
        .iter()
        .map(|format| Regex::new(format.shape).expect("date-time shape regex is valid"))
        .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateTimeError {
    #[error(
        "Date-time string cannot be empty. Please use one of the following formats: {formats}.",
        formats = accepted_formats()
    )]
    Empty,

    #[error(
        "Invalid date-time '{0}'. Please use one of the following formats: {formats}.",
        formats = accepted_formats()
    )]
    Unrecognized(String),
}

/// The accepted input patterns, in the order they are tried.
pub fn accepted_formats() -> String {
    INPUT_FORMATS
        .iter()
        .map(|format| format.pattern)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a user-supplied date-time against every accepted format.
pub fn parse_date_time(raw: &str) -> Result<NaiveDateTime, DateTimeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DateTimeError::Empty);
    }

    INPUT_FORMATS
        .iter()
        .zip(SHAPES.iter())
        .filter(|(_, shape)| shape.is_match(raw))
        .find_map(|(format, _)| NaiveDateTime::parse_from_str(raw, format.chrono).ok())
        .ok_or_else(|| DateTimeError::Unrecognized(raw.to_string()))
}

pub fn format_display(at: &NaiveDateTime) -> String {
    at.format(DISPLAY_FORMAT).to_string()
}
