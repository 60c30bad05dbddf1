//! Application orchestration layer
//!
//! Wires the input thread, the animation timer and the renderer around one
//! [`RenderLoopState`]. The loop is the only place where navigation state changes.

pub mod runtime;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::input::{InputAction, RawInputCollector};
use crate::render::ui::{UIRenderer, ViewState};
use crate::render::{LoopControl, LoopEvent, RenderLoopState};
use runtime::InputRuntime;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Application orchestrator
pub struct Application<R: UIRenderer> {
    catalog: Arc<Catalog>,
    ui_renderer: R,
    config: Config,
}

impl<R: UIRenderer> Application<R> {
    pub fn new(catalog: Arc<Catalog>, ui_renderer: R, config: Config) -> Self {
        Self {
            catalog,
            ui_renderer,
            config,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.ui_renderer
    }

    /// Take over the terminal and run until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;

        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let collector = RawInputCollector::with_settings(
            self.config.wheel_coalesce_window,
            self.config.wheel_tick_delta,
        );
        let mut input = InputRuntime::start(input_tx, collector);

        let result = self.drive(input_rx).await;

        input.stop();
        let cleanup = self.ui_renderer.cleanup();
        result.and(cleanup)
    }

    /// Event loop over an arbitrary source of input actions.
    /// Returns when the user quits or the input source closes.
    pub async fn drive(&mut self, mut input_rx: UnboundedReceiver<InputAction>) -> Result<()> {
        let (width, height) = self.ui_renderer.get_terminal_size()?;
        let mut view = ViewState::new(width, height);

        let (unlock_tx, mut unlock_rx) = mpsc::unbounded_channel();
        let mut state = RenderLoopState::new(Arc::clone(&self.catalog), unlock_tx);
        state.sync_view(&mut view);
        self.render_guarded(&mut state, &mut view)?;

        loop {
            let event = tokio::select! {
                action = input_rx.recv() => match action {
                    Some(action) => LoopEvent::Input(action),
                    None => {
                        log::debug!("Input channel closed");
                        break;
                    }
                },
                Some(elapsed) = unlock_rx.recv() => LoopEvent::AnimationElapsed(elapsed),
            };

            if state.handle_event(event, &mut view) == LoopControl::Quit {
                break;
            }
            self.render_guarded(&mut state, &mut view)?;
        }

        state.shutdown();
        Ok(())
    }

    /// Render, falling back to the error screen on failure. A failure while the error
    /// screen itself is shown ends the loop.
    fn render_guarded(&mut self, state: &mut RenderLoopState, view: &mut ViewState) -> Result<()> {
        match self.ui_renderer.render(view) {
            Ok(()) => Ok(()),
            Err(err) if !view.is_fallback() => {
                state.fail(&err);
                state.sync_view(view);
                self.ui_renderer.render(view)
            }
            Err(err) => Err(err),
        }
    }
}
