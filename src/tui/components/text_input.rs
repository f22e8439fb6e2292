//! Chat prompt rendering component

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tui_input::Input;

use crate::tui::styles::Theme;

const PROMPT: &str = "> ";

/// Renders the chat input line.
///
/// While enabled, shows an inverse-video cursor at the current character
/// position and the placeholder when empty. Once disabled (after `bye`),
/// only the dimmed prompt remains.
pub fn render_prompt(
    frame: &mut Frame,
    area: Rect,
    input: &Input,
    enabled: bool,
    placeholder: &str,
    theme: &Theme,
) {
    if !enabled {
        let line = Line::from(Span::styled(PROMPT, Style::default().fg(theme.dimmed)));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let value = input.value();
    let value_style = Style::default().fg(theme.user);
    let cursor_style = Style::default().fg(theme.background).bg(theme.accent);

    let mut spans = vec![Span::styled(PROMPT, Style::default().fg(theme.accent))];

    if value.is_empty() {
        spans.push(Span::styled(" ", cursor_style));
        spans.push(Span::styled(placeholder, Style::default().fg(theme.dimmed)));
    } else {
        // Keep the cursor in view when the line is longer than the field
        let width = area.width.saturating_sub(PROMPT.len() as u16 + 1) as usize;
        let cursor_pos = input.visual_cursor();
        let skip = cursor_pos.saturating_sub(width);

        let before: String = value.chars().skip(skip).take(cursor_pos - skip).collect();
        let cursor_char: String = value
            .chars()
            .nth(cursor_pos)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = value.chars().skip(cursor_pos + 1).collect();

        if !before.is_empty() {
            spans.push(Span::styled(before, value_style));
        }
        spans.push(Span::styled(cursor_char, cursor_style));
        if !after.is_empty() {
            spans.push(Span::styled(after, value_style));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
