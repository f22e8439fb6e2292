//! Main TUI application

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::time::{Duration, Instant};
use tracing::warn;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::components::{render_prompt, HelpOverlay};
use super::styles::Theme;
use super::transcript::{Speaker, Transcript};
use crate::command::messages;
use crate::session::{Session, UiConfig};
use crate::task::TaskStore;

const PLACEHOLDER: &str = "Type a command, or F1 for help";

pub struct App<S: TaskStore> {
    session: Session<S>,
    transcript: Transcript,
    input: Input,
    theme: Theme,
    show_help: bool,
    exit_delay: Duration,
    /// Set once `bye` succeeds; the farewell stays up until then
    closing_at: Option<Instant>,
    save_failed: bool,
    should_quit: bool,
    /// Transcript rows shown in the last frame, used as the page size
    page_rows: usize,
}

impl<S: TaskStore> App<S> {
    pub fn new(session: Session<S>, ui: &UiConfig) -> Self {
        let mut transcript = Transcript::new();
        if ui.show_greeting {
            transcript.push(
                Speaker::Assistant,
                messages::greeting(ui.user_name.as_deref()),
            );
        }

        Self {
            session,
            transcript,
            input: Input::default(),
            theme: Theme::default(),
            show_help: false,
            exit_delay: ui.exit_delay(),
            closing_at: None,
            save_failed: false,
            should_quit: false,
            page_rows: 10,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_closing(&self) -> bool {
        self.closing_at.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        loop {
            // Poll with short timeout so the closing deadline is noticed
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => continue,
                }
                terminal.draw(|f| self.render(f))?;
            }

            self.tick(Instant::now());

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Quit once the farewell delay has passed
    pub fn tick(&mut self, now: Instant) {
        if self.closing_at.is_some_and(|at| now >= at) {
            self.should_quit = true;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl_c =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');

        if self.show_help {
            if ctrl_c {
                self.quit_now();
            } else {
                self.show_help = false;
            }
            return;
        }

        if ctrl_c || key.code == KeyCode::Esc {
            self.quit_now();
            return;
        }

        match key.code {
            KeyCode::F(1) => self.show_help = true,
            KeyCode::PageUp => self.transcript.scroll_up(self.page_rows),
            KeyCode::PageDown => self.transcript.scroll_down(self.page_rows),
            // Input is closed after a successful `bye`
            _ if self.is_closing() => {}
            KeyCode::Enter => self.submit(),
            _ => {
                self.input.handle_event(&Event::Key(key));
            }
        }
    }

    fn submit(&mut self) {
        let line = self.input.value().to_string();
        self.input.reset();

        self.transcript.push(Speaker::User, line.clone());
        let reply = self.session.handle(&line);
        let speaker = if reply.is_error {
            Speaker::Error
        } else {
            Speaker::Assistant
        };
        self.transcript.push(speaker, reply.text);

        if reply.exit {
            self.closing_at = Some(Instant::now() + self.exit_delay);
        }
    }

    /// Leave without `bye`. Tasks are still saved; if that fails the error is
    /// shown and a second attempt quits regardless.
    fn quit_now(&mut self) {
        if self.is_closing() || self.save_failed {
            self.should_quit = true;
            return;
        }

        match self.session.save() {
            Ok(()) => self.should_quit = true,
            Err(e) => {
                warn!("Failed to save tasks on quit: {:#}", e);
                self.save_failed = true;
                self.transcript.push(
                    Speaker::Error,
                    format!(
                        "I couldn't save your tasks: {:#}\nPress Esc again to quit without saving.",
                        e
                    ),
                );
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.background)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_transcript(frame, chunks[0]);
        self.render_input(frame, chunks[1]);
        self.render_status_bar(frame, chunks[2]);

        if self.show_help {
            HelpOverlay::render(frame, area, &self.theme);
        }
    }

    fn render_transcript(&mut self, frame: &mut Frame, area: Rect) {
        let tasks = self.session.tasks();
        let done = tasks.iter().filter(|t| t.is_done()).count();
        let title = format!(
            " {} [{} tasks, {} done] ",
            messages::APP_NAME,
            tasks.len(),
            done
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(title)
            .title_style(Style::default().fg(self.theme.title).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.page_rows = (inner.height as usize).max(1);
        let rows = self
            .transcript
            .visible_rows(inner.width as usize, inner.height as usize);

        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(speaker, text)| {
                let color = match speaker {
                    Speaker::User => self.theme.user,
                    Speaker::Assistant => self.theme.reply,
                    Speaker::Error => self.theme.error,
                };
                Line::from(Span::styled(text, Style::default().fg(color)))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let border = if self.is_closing() {
            self.theme.border
        } else {
            self.theme.accent
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        render_prompt(
            frame,
            inner,
            &self.input,
            !self.is_closing(),
            PLACEHOLDER,
            &self.theme,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(self.theme.key).bold();
        let desc_style = Style::default().fg(self.theme.dimmed);
        let sep_style = Style::default().fg(self.theme.border);

        let spans = vec![
            Span::styled(" Enter", key_style),
            Span::styled(" Send ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" PgUp/PgDn", key_style),
            Span::styled(" Scroll ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" F1", key_style),
            Span::styled(" Help ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" Esc", key_style),
            Span::styled(" Quit", desc_style),
        ];

        let status =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(self.theme.selection));
        frame.render_widget(status, area);
    }
}
