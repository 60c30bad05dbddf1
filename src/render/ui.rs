//! Terminal rendering components.
//!
//! This module hosts the concrete terminal UI implementation along with the view state,
//! screen geometry and styling it draws with.

pub mod layout;
pub mod renderer;
pub mod slides;
pub mod state;
pub mod terminal;
pub mod theme;

pub use layout::ScreenLayout;
pub use renderer::UIRenderer;
pub use state::{CatalogView, Fallback, Screen, StatusLine, ViewState};
pub use terminal::TerminalUI;
pub use theme::ColorTheme;

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;
