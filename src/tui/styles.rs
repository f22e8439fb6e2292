//! TUI theme and styling

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,

    // Chat colors
    pub user: Color,
    pub reply: Color,
    pub error: Color,

    // UI elements
    pub selection: Color,
    pub key: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::phosphor()
    }
}

impl Theme {
    pub fn phosphor() -> Self {
        Self {
            background: Color::Rgb(16, 20, 18),
            border: Color::Rgb(45, 70, 55),

            title: Color::Rgb(57, 255, 20),
            text: Color::Rgb(180, 255, 180),
            dimmed: Color::Rgb(80, 120, 90),

            user: Color::Rgb(130, 170, 255),
            reply: Color::Rgb(180, 255, 180),
            error: Color::Rgb(255, 100, 80),

            selection: Color::Rgb(25, 40, 32),
            key: Color::Rgb(255, 180, 60),
            accent: Color::Rgb(57, 255, 20),
        }
    }
}
