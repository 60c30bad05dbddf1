//! UI state management structures
//!
//! `ViewState` is a plain snapshot of what the renderer draws. It is rebuilt from the
//! navigation controller and catalogue pager after every event; the renderer never reads
//! either of them directly.

use crate::catalog::Site;
use crate::navigation::{Slide, TOTAL_SLIDES};

/// What occupies the content area.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// The horizontal slide deck
    Slides,
    /// Detail view of one catalogue site
    Detail(Box<Site>),
    /// Static error screen shown after a render failure
    Fallback(Fallback),
}

/// Contents of the error screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub code: &'static str,
    pub message: String,
}

/// The catalogue page currently visible
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogView {
    pub sites: Vec<Site>,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// Index into `sites` of the focused card
    pub focused: Option<usize>,
}

/// Snapshot rendered by the UI
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub screen: Screen,
    pub slide: Slide,
    pub total_slides: usize,
    pub is_animating: bool,
    pub catalog: CatalogView,
    pub status_line: StatusLine,

    /// Viewport dimensions
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl ViewState {
    pub fn new(viewport_width: u16, viewport_height: u16) -> Self {
        Self {
            screen: Screen::Slides,
            slide: Slide::Hero,
            total_slides: TOTAL_SLIDES,
            is_animating: false,
            catalog: CatalogView::default(),
            status_line: StatusLine::new(),
            viewport_width,
            viewport_height,
        }
    }

    pub fn is_slides(&self) -> bool {
        matches!(self.screen, Screen::Slides)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.screen, Screen::Fallback(_))
    }

    /// Update terminal dimensions.
    /// Returns true if dimensions actually changed
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.viewport_width != width || self.viewport_height != height;
        if changed {
            self.viewport_width = width;
            self.viewport_height = height;
        }
        changed
    }

    pub fn format_status_line(&self) -> String {
        self.status_line.format_status_line(
            self.slide,
            self.total_slides,
            self.is_animating,
        )
    }
}

/// Status line information
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub message: Option<String>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message appended after the slide counter until cleared
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// `"{title} | {n}/{total}"`, with a marker while a transition is animating
    pub fn format_status_line(&self, slide: Slide, total_slides: usize, is_animating: bool) -> String {
        let mut line = format!("{} | {}/{}", slide.title(), slide.index() + 1, total_slides);
        if is_animating {
            line.push_str(" ~");
        }
        if let Some(ref message) = self.message {
            line.push_str(" | ");
            line.push_str(message);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_state_creation() {
        let state = ViewState::new(80, 24);
        assert!(state.is_slides());
        assert_eq!(state.slide, Slide::Hero);
        assert_eq!(state.total_slides, 4);
        assert!(!state.is_animating);
        assert!(state.catalog.sites.is_empty());
    }

    #[test]
    fn test_status_line_format() {
        let mut status = StatusLine::new();
        assert_eq!(status.format_status_line(Slide::Hero, 4, false), "Accueil | 1/4");
        assert_eq!(
            status.format_status_line(Slide::Ode, 4, true),
            "Ode au Beau | 3/4 ~"
        );

        status.set_message("Site introuvable".to_string());
        assert_eq!(
            status.format_status_line(Slide::Catalogue, 4, false),
            "Catalogue | 2/4 | Site introuvable"
        );
        status.clear_message();
        assert_eq!(
            status.format_status_line(Slide::Contact, 4, false),
            "Contact | 4/4"
        );
    }

    #[test]
    fn test_terminal_resize() {
        let mut state = ViewState::new(80, 24);
        assert!(!state.update_terminal_size(80, 24));
        assert!(state.update_terminal_size(120, 30));
        assert_eq!(state.viewport_width, 120);
        assert_eq!(state.viewport_height, 30);
    }
}
