//! UI renderer trait
//!
//! The event loop only talks to the screen through [`UIRenderer`], which lets tests swap
//! the crossterm terminal for a recording mock.

use crate::error::Result;
use crate::render::ui::state::ViewState;

/// Core trait for UI rendering
pub trait UIRenderer {
    /// Draw one full frame: content area, slide indicators and status line
    fn render(&mut self, view_state: &ViewState) -> Result<()>;

    /// Take over the terminal. Mouse capture is required for wheel and indicator input.
    fn initialize(&mut self) -> Result<()>;

    /// Clean up and restore terminal state
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions
    fn get_terminal_size(&self) -> Result<(u16, u16)>; // (width, height)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::error::NexaiError;

    /// Mock UI renderer for testing
    ///
    /// Records every rendered snapshot and can be told to fail, which drives the
    /// error boundary in tests.
    pub struct MockUIRenderer {
        pub render_count: usize,
        pub terminal_size: (u16, u16),
        pub is_initialized: bool,
        pub rendered: Vec<ViewState>,
        /// 1-based render calls that fail
        pub fail_on_calls: Vec<usize>,
    }

    impl Default for MockUIRenderer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockUIRenderer {
        pub fn new() -> Self {
            Self {
                render_count: 0,
                terminal_size: (80, 24),
                is_initialized: false,
                rendered: Vec::new(),
                fail_on_calls: Vec::new(),
            }
        }

        pub fn last_rendered(&self) -> Option<&ViewState> {
            self.rendered.last()
        }
    }

    impl UIRenderer for MockUIRenderer {
        fn render(&mut self, view_state: &ViewState) -> Result<()> {
            self.render_count += 1;
            if self.fail_on_calls.contains(&self.render_count) {
                return Err(NexaiError::ui("mock render failure"));
            }
            self.rendered.push(view_state.clone());
            Ok(())
        }

        fn initialize(&mut self) -> Result<()> {
            self.is_initialized = true;
            Ok(())
        }

        fn cleanup(&mut self) -> Result<()> {
            self.is_initialized = false;
            Ok(())
        }

        fn get_terminal_size(&self) -> Result<(u16, u16)> {
            Ok(self.terminal_size)
        }
    }

    #[test]
    fn test_mock_renderer_basic() {
        let mut renderer = MockUIRenderer::new();
        let view_state = ViewState::new(80, 24);

        assert!(!renderer.is_initialized);
        renderer.initialize().unwrap();
        assert!(renderer.is_initialized);

        assert_eq!(renderer.render_count, 0);
        renderer.render(&view_state).unwrap();
        assert_eq!(renderer.render_count, 1);
        assert_eq!(renderer.last_rendered(), Some(&view_state));

        assert_eq!(renderer.get_terminal_size().unwrap(), (80, 24));
        renderer.cleanup().unwrap();
        assert!(!renderer.is_initialized);
    }

    #[test]
    fn test_mock_renderer_failures() {
        let mut renderer = MockUIRenderer::new();
        renderer.fail_on_calls = vec![1];
        let view_state = ViewState::new(80, 24);

        assert!(renderer.render(&view_state).is_err());
        assert!(renderer.render(&view_state).is_ok());
        assert_eq!(renderer.render_count, 2);
        assert_eq!(renderer.rendered.len(), 1);
    }
}
