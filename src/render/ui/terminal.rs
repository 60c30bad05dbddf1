//! Terminal UI implementation using ratatui
//!
//! Concrete `UIRenderer` over crossterm. Drawing itself lives in
//! [`slides`](crate::render::ui::slides); this type only owns the terminal.

use crate::error::{NexaiError, Result};
use crate::render::ui::renderer::UIRenderer;
use crate::render::ui::slides;
use crate::render::ui::state::ViewState;
use crate::render::ui::theme::ColorTheme;
use ratatui::crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// A failed frame is a UI failure, whatever the underlying I/O error.
fn draw_error(err: io::Error) -> NexaiError {
    NexaiError::ui(format!("draw failed: {}", err))
}

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        Self::with_theme(ColorTheme::default())
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    pub fn theme(&self) -> &ColorTheme {
        &self.theme
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;
            terminal
                .draw(|frame| slides::draw(frame, view_state, theme))
                .map_err(draw_error)?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(
                io::stdout(),
                LeaveAlternateScreen,
                DisableMouseCapture,
                cursor::Show
            )?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ui::theme::BLOOD_RED;
    use ratatui::style::Color;

    #[test]
    fn test_terminal_ui_creation() {
        let ui = TerminalUI::new().unwrap();
        assert!(ui.terminal.is_none());
        assert_eq!(ui.theme().accent.fg, Some(BLOOD_RED));
    }

    #[test]
    fn test_custom_theme() {
        let ui = TerminalUI::with_theme(ColorTheme::high_contrast()).unwrap();
        assert_eq!(ui.theme().status.bg, Some(Color::White));
    }

    #[test]
    fn test_draw_failures_are_ui_errors() {
        let err = draw_error(io::Error::new(io::ErrorKind::BrokenPipe, "tty closed"));
        assert_eq!(err.code(), "UI_ERROR");
        assert_eq!(err.to_string(), "UI operation failed: draw failed: tty closed");
    }

    #[test]
    fn test_uninitialized_render_and_cleanup_are_noops() {
        let mut ui = TerminalUI::new().unwrap();
        assert!(ui.render(&ViewState::new(80, 24)).is_ok());
        assert!(ui.cleanup().is_ok());
    }
}
