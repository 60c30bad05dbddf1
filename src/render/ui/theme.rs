//! Color theme and styling definitions using ratatui colors
//!
//! The default glitch palette uses the directory's four brand colors. Monochrome and
//! high-contrast variants exist for terminals where the palette is unreadable.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Blood red, the accent color.
pub const BLOOD_RED: Color = Color::Rgb(0xff, 0x00, 0x40);
/// Bone white, body text.
pub const BONE_WHITE: Color = Color::Rgb(0xe8, 0xe8, 0xe8);
/// Void black, the background.
pub const VOID_BLACK: Color = Color::Rgb(0x0a, 0x0a, 0x0a);
/// Terminal green, status accents.
pub const TERMINAL_GREEN: Color = Color::Rgb(0x00, 0xff, 0x41);

/// Color theme for terminal UI elements
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTheme {
    /// Screen background
    pub background: Color,

    /// Normal body text
    pub text: Style,

    /// Secondary text (taglines, tags, footers)
    pub muted: Style,

    /// Slide titles
    pub title: Style,

    /// Accent text, borders and category badges
    pub accent: Style,

    /// Border of the focused catalogue card
    pub focused_border: Style,

    /// Pager hints that cannot be used
    pub disabled: Style,

    /// Filled indicator of the current slide
    pub indicator_active: Style,

    /// Indicators of the other slides
    pub indicator_inactive: Style,

    /// Status line
    pub status: Style,

    /// Animation marker and other live accents
    pub highlight: Style,

    /// Error fallback screen
    pub error: Style,
}

impl Default for ColorTheme {
    /// The glitch palette
    fn default() -> Self {
        Self {
            background: VOID_BLACK,
            text: Style::default().fg(BONE_WHITE),
            muted: Style::default().fg(Color::Gray),
            title: Style::default().fg(BONE_WHITE).add_modifier(Modifier::BOLD),
            accent: Style::default().fg(BLOOD_RED),
            focused_border: Style::default().fg(BLOOD_RED).add_modifier(Modifier::BOLD),
            disabled: Style::default().fg(Color::DarkGray),
            indicator_active: Style::default().fg(VOID_BLACK).bg(BLOOD_RED),
            indicator_inactive: Style::default().fg(BLOOD_RED),
            status: Style::default().fg(TERMINAL_GREEN).bg(VOID_BLACK),
            highlight: Style::default().fg(TERMINAL_GREEN),
            error: Style::default().fg(BLOOD_RED).add_modifier(Modifier::BOLD),
        }
    }
}

impl ColorTheme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Glitch => Self::default(),
            ThemeName::Monochrome => Self::monochrome(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            background: Color::Reset,
            text: Style::default(),
            muted: Style::default().add_modifier(Modifier::DIM),
            title: Style::default().add_modifier(Modifier::BOLD),
            accent: Style::default().add_modifier(Modifier::UNDERLINED),
            focused_border: Style::default().add_modifier(Modifier::BOLD),
            disabled: Style::default().add_modifier(Modifier::DIM),
            indicator_active: Style::default().add_modifier(Modifier::REVERSED),
            indicator_inactive: Style::default(),
            status: Style::default().add_modifier(Modifier::REVERSED),
            highlight: Style::default().add_modifier(Modifier::BOLD),
            error: Style::default().add_modifier(Modifier::BOLD),
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            background: Color::Black,
            text: Style::default().fg(Color::White),
            muted: Style::default().fg(Color::White),
            title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            accent: Style::default().fg(Color::LightYellow),
            focused_border: Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default().fg(Color::Gray),
            indicator_active: Style::default().fg(Color::Black).bg(Color::LightYellow),
            indicator_inactive: Style::default().fg(Color::LightYellow),
            status: Style::default().fg(Color::Black).bg(Color::White),
            highlight: Style::default().fg(Color::LightGreen),
            error: Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        }
    }
}
