//! Help overlay component

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::command::CommandKind;
use crate::task::datetime::accepted_formats;
use crate::tui::styles::Theme;

const DIALOG_WIDTH: u16 = 66;
const DIALOG_HEIGHT: u16 = 26;
#[cfg(test)]
const BORDER_HEIGHT: u16 = 2;
#[cfg(test)]
const BORDER_WIDTH: u16 = 2;

fn sections() -> Vec<(&'static str, Vec<String>)> {
    vec![
        (
            "Commands",
            CommandKind::ALL
                .iter()
                .map(|kind| format!("  {}", kind.usage()))
                .collect(),
        ),
        (
            "Time formats",
            accepted_formats()
                .split(", ")
                .map(|format| format!("  {}", format))
                .collect(),
        ),
        (
            "Keys",
            vec![
                "  Enter      Send".to_string(),
                "  PgUp/PgDn  Scroll the conversation".to_string(),
                "  F1         Toggle help".to_string(),
                "  Esc        Save and quit".to_string(),
            ],
        ),
    ]
}

#[cfg(test)]
fn content_line_count() -> usize {
    sections()
        .iter()
        .map(|(_, lines)| lines.len() + 2)
        .sum()
}

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let x = area.x + (area.width.saturating_sub(DIALOG_WIDTH)) / 2;
        let y = area.y + (area.height.saturating_sub(DIALOG_HEIGHT)) / 2;

        let dialog_area = Rect {
            x,
            y,
            width: DIALOG_WIDTH.min(area.width),
            height: DIALOG_HEIGHT.min(area.height),
        };

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Help ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let mut lines: Vec<Line> = Vec::new();

        for (section, entries) in sections() {
            lines.push(Line::from(Span::styled(
                section,
                Style::default().fg(theme.accent).bold(),
            )));
            for entry in entries {
                lines.push(Line::from(Span::styled(
                    entry,
                    Style::default().fg(theme.text),
                )));
            }
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_content_fits_in_dialog() {
        let available_height = (DIALOG_HEIGHT - BORDER_HEIGHT) as usize;
        let content_lines = content_line_count();
        assert!(
            content_lines <= available_height,
            "Help content ({content_lines} lines) exceeds dialog inner height ({available_height} lines)"
        );

        let available_width = (DIALOG_WIDTH - BORDER_WIDTH) as usize;
        for (section, entries) in sections() {
            for entry in entries {
                assert!(
                    entry.len() <= available_width,
                    "Help line '{entry}' in '{section}' exceeds dialog width ({available_width} chars)"
                );
            }
        }
    }

    #[test]
    fn help_lists_every_command() {
        let commands = &sections()[0].1;
        assert_eq!(commands.len(), CommandKind::ALL.len());
    }
}
