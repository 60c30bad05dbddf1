//! Render coordination.
//!
//! `RenderLoopState` is the single writer of navigation, paging and screen state. It
//! applies input actions and animation unlocks, enforces which actions are allowed on
//! which screen, and rebuilds the [`ViewState`] snapshot after every event.

use crate::catalog::{Catalog, CatalogPager};
use crate::error::NexaiError;
use crate::input::InputAction;
use crate::navigation::{AnimationElapsed, NavIntent, NavigationController, Slide};
use crate::render::protocol::{LoopControl, LoopEvent};
use crate::render::ui::{CatalogView, Fallback, Screen, ScreenLayout, ViewState};
use ratatui::layout::Rect;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

const FIRST_SLIDE_MESSAGE: &str = "début de la collection";
const LAST_SLIDE_MESSAGE: &str = "fin de la collection";

/// State that persists across events of the render loop.
#[derive(Debug)]
pub struct RenderLoopState {
    catalog: Arc<Catalog>,
    navigation: NavigationController,
    pager: CatalogPager,
    /// Index of the focused card within the visible page
    focused_card: usize,
    screen: Screen,
    /// Shown after a request that hit the first or last slide
    status_message: Option<&'static str>,
}

impl RenderLoopState {
    /// Must be created inside a tokio runtime; transitions spawn their unlock timer.
    pub fn new(catalog: Arc<Catalog>, unlock_tx: UnboundedSender<AnimationElapsed>) -> Self {
        let pager = CatalogPager::new(catalog.sites().len());
        Self {
            catalog,
            navigation: NavigationController::new(unlock_tx),
            pager,
            focused_card: 0,
            screen: Screen::Slides,
            status_message: None,
        }
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn pager(&self) -> &CatalogPager {
        &self.pager
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn current_slide(&self) -> Slide {
        Slide::from_index(self.navigation.current_slide()).unwrap_or(Slide::Hero)
    }

    /// Apply one event and refresh `view`.
    pub fn handle_event(&mut self, event: LoopEvent, view: &mut ViewState) -> LoopControl {
        let control = match event {
            LoopEvent::Input(action) => self.process_action(action, view),
            LoopEvent::AnimationElapsed(elapsed) => {
                self.navigation.on_animation_elapsed(elapsed);
                LoopControl::Continue
            }
        };
        self.sync_view(view);
        control
    }

    fn process_action(&mut self, action: InputAction, view: &mut ViewState) -> LoopControl {
        match action {
            InputAction::Quit => return LoopControl::Quit,
            InputAction::Resize { width, height } => {
                view.update_terminal_size(width, height);
                return LoopControl::Continue;
            }
            _ => {}
        }

        match self.screen {
            Screen::Fallback(_) => {
                if action == InputAction::Reset {
                    self.reset();
                }
            }
            Screen::Detail(_) => {
                if action == InputAction::Back {
                    log::debug!("Leaving detail view");
                    self.screen = Screen::Slides;
                }
            }
            Screen::Slides => self.process_slide_action(action, view),
        }
        LoopControl::Continue
    }

    fn process_slide_action(&mut self, action: InputAction, view: &ViewState) {
        let before = self.navigation.current_slide();
        let edge = match action {
            InputAction::Navigate(intent) => self.edge_message(intent),
            InputAction::Wheel { delta_y } => self
                .navigation
                .coalescer()
                .wheel(delta_y)
                .and_then(|intent| self.edge_message(intent)),
            _ => None,
        };

        match action {
            InputAction::Navigate(intent) => {
                self.navigation.dispatch(intent);
            }
            InputAction::Wheel { delta_y } => {
                self.navigation.handle_wheel(delta_y);
            }
            InputAction::Click { column, row } => {
                let area = Rect::new(0, 0, view.viewport_width, view.viewport_height);
                let hit = ScreenLayout::new(area).indicator_at(
                    self.navigation.total_slides(),
                    column,
                    row,
                );
                if let Some(index) = hit {
                    let intent = self.navigation.coalescer().indicator_click(index);
                    self.navigation.dispatch(intent);
                }
            }
            catalog_action if self.current_slide() == Slide::Catalogue => {
                self.process_catalog_action(catalog_action)
            }
            _ => {}
        }

        let after = self.navigation.current_slide();
        if after != before {
            log::info!("Slide {}: {}", after + 1, self.current_slide().title());
            self.status_message = None;
        } else if edge.is_some() {
            self.status_message = edge;
        }
    }

    fn process_catalog_action(&mut self, action: InputAction) {
        let visible = self.visible_count();
        match action {
            InputAction::CatalogPrev => {
                self.pager.prev();
                self.focused_card = 0;
            }
            InputAction::CatalogNext => {
                self.pager.next();
                self.focused_card = 0;
            }
            InputAction::FocusNext if visible > 0 => {
                self.focused_card = (self.focused_card + 1) % visible;
            }
            InputAction::FocusPrev if visible > 0 => {
                self.focused_card = (self.focused_card + visible - 1) % visible;
            }
            InputAction::OpenDetail => {
                let site = self
                    .pager
                    .visible_items(self.catalog.sites())
                    .get(self.focused_card)
                    .cloned();
                if let Some(site) = site {
                    log::debug!("Opening detail view for site {}", site.id);
                    self.screen = Screen::Detail(Box::new(site));
                }
            }
            _ => {}
        }
    }

    /// Message for a relative step past either end of the deck
    fn edge_message(&self, intent: NavIntent) -> Option<&'static str> {
        if self.navigation.is_animating() {
            return None;
        }
        let current = self.navigation.current_slide();
        match intent {
            NavIntent::Previous if current == 0 => Some(FIRST_SLIDE_MESSAGE),
            NavIntent::Next if current + 1 == self.navigation.total_slides() => {
                Some(LAST_SLIDE_MESSAGE)
            }
            _ => None,
        }
    }

    fn visible_count(&self) -> usize {
        self.pager.visible_items(self.catalog.sites()).len()
    }

    /// Replace the screen with the error fallback.
    pub fn fail(&mut self, err: &NexaiError) {
        log::error!("Render failed, showing fallback screen: {}", err);
        self.screen = Screen::Fallback(Fallback {
            code: err.code(),
            message: err.to_string(),
        });
    }

    /// Return navigation, paging and screen to their initial state
    pub fn reset(&mut self) {
        log::info!("Resetting directory state");
        self.navigation.reset();
        self.pager.reset();
        self.focused_card = 0;
        self.screen = Screen::Slides;
        self.status_message = None;
    }

    /// Cancel the pending unlock before the loop exits
    pub fn shutdown(&mut self) {
        self.navigation.shutdown();
    }

    /// Rebuild `view` from the controller, pager and screen.
    pub fn sync_view(&self, view: &mut ViewState) {
        let state = self.navigation.state();
        let sites = self.pager.visible_items(self.catalog.sites());

        view.screen = self.screen.clone();
        match self.status_message {
            Some(message) => view.status_line.set_message(message),
            None => view.status_line.clear_message(),
        }
        view.slide = self.current_slide();
        view.total_slides = self.navigation.total_slides();
        view.is_animating = state.is_animating;
        view.catalog = CatalogView {
            sites: sites.to_vec(),
            current_page: self.pager.current_page(),
            total_pages: self.pager.total_pages(),
            has_prev: self.pager.has_prev(),
            has_next: self.pager.has_next(),
            focused: (!sites.is_empty()).then(|| self.focused_card.min(sites.len() - 1)),
        };
    }
}
