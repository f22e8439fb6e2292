//! Scrollable chat transcript

use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub speaker: Speaker,
    pub text: String,
}

/// Conversation so far, newest last.
///
/// `scroll_back` counts rows hidden below the viewport; zero follows the tail.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
    scroll_back: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.entries.push(Entry {
            speaker,
            text: text.into(),
        });
        self.scroll_back = 0;
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_back = self.scroll_back.saturating_add(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(rows);
    }

    /// Rows that fit in a `width` x `height` viewport, tagged with their speaker.
    ///
    /// Entries are separated by a blank row. Clamps the scroll offset so the
    /// view never runs past the first row.
    pub fn visible_rows(&mut self, width: usize, height: usize) -> Vec<(Speaker, String)> {
        let mut rows: Vec<(Speaker, String)> = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                rows.push((entry.speaker, String::new()));
            }
            for line in entry.text.lines() {
                for wrapped in wrap(line, width) {
                    rows.push((entry.speaker, wrapped));
                }
            }
        }

        let max_scroll = rows.len().saturating_sub(height);
        self.scroll_back = self.scroll_back.min(max_scroll);

        let end = rows.len() - self.scroll_back;
        let start = end.saturating_sub(height);
        rows.drain(start..end).collect()
    }
}

/// Word-wrap `line` to `width` display columns.
///
/// Leading indentation is kept on the first row; words wider than `width`
/// are split.
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    // Nothing but indentation emitted on this row yet
    let mut fresh = true;

    let indent_len = line.len() - line.trim_start().len();
    let (indent, rest) = line.split_at(indent_len);
    for c in indent.chars() {
        push_char(&mut rows, &mut current, &mut current_width, c, width);
    }

    for word in rest.split(' ').filter(|w| !w.is_empty()) {
        let word_width: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();

        if !fresh {
            if current_width + 1 + word_width <= width {
                current.push(' ');
                current_width += 1;
            } else {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
        }

        for c in word.chars() {
            push_char(&mut rows, &mut current, &mut current_width, c, width);
        }
        fresh = false;
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

fn push_char(
    rows: &mut Vec<String>,
    current: &mut String,
    current_width: &mut usize,
    c: char,
    width: usize,
) {
    let w = c.width().unwrap_or(0);
    if *current_width + w > width && !current.is_empty() {
        rows.push(std::mem::take(current));
        *current_width = 0;
    }
    current.push(c);
    *current_width += w;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_line_untouched() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
        assert_eq!(wrap("", 20), vec![""]);
    }

    #[test]
    fn test_wrap_breaks_between_words() {
        assert_eq!(
            wrap("Got it. I've added this task:", 12),
            vec!["Got it. I've", "added this", "task:"]
        );
    }

    #[test]
    fn test_wrap_keeps_indent() {
        assert_eq!(
            wrap("  [T][ ] read book", 10),
            vec!["  [T][ ]", "read book"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_visible_rows_follow_tail() {
        let mut transcript = Transcript::new();
        transcript.push(Speaker::User, "one");
        transcript.push(Speaker::Assistant, "two\nthree");

        let rows = transcript.visible_rows(20, 2);
        let text: Vec<_> = rows.iter().map(|(_, r)| r.as_str()).collect();
        assert_eq!(text, vec!["two", "three"]);
        assert_eq!(rows[0].0, Speaker::Assistant);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut transcript = Transcript::new();
        transcript.push(Speaker::User, "one");
        transcript.push(Speaker::Assistant, "two");

        transcript.scroll_up(100);
        let rows = transcript.visible_rows(20, 2);
        let text: Vec<_> = rows.iter().map(|(_, r)| r.as_str()).collect();
        assert_eq!(text, vec!["one", ""]);

        transcript.scroll_down(1);
        let rows = transcript.visible_rows(20, 2);
        assert_eq!(rows[1].1, "two");
    }

    #[test]
    fn test_push_returns_to_tail() {
        let mut transcript = Transcript::new();
        for i in 0..10 {
            transcript.push(Speaker::User, format!("line {}", i));
        }
        transcript.scroll_up(5);
        transcript.push(Speaker::Assistant, "latest");

        let rows = transcript.visible_rows(20, 1);
        assert_eq!(rows[0].1, "latest");
    }
}
