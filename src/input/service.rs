//! High-level input service.
//!
//! Consumes raw events, runs the key bindings, and yields domain-level `InputAction`s
//! that the render loop applies.

use crate::error::Result;
use crate::input::raw::{RawInputCollector, RawInputEvent};
use crate::navigation::{InputCoalescer, NavIntent, TOTAL_SLIDES};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// High-level input actions emitted by the key bindings and the service.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// Slide navigation from arrows, Home/End or the digit indicators
    Navigate(NavIntent),
    /// Summed wheel delta, still subject to the threshold
    Wheel { delta_y: f64 },
    Click { column: u16, row: u16 },
    CatalogPrev,
    CatalogNext,
    FocusNext,
    FocusPrev,
    OpenDetail,
    Back,
    Reset,
    Quit,
    Resize { width: u16, height: u16 },
    NoAction,
    InvalidInput,
}

/// Key bindings of the directory.
///
/// Navigation keys are claimed by the [`InputCoalescer`] first; anything it consumes
/// never reaches the remaining bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    coalescer: InputCoalescer,
    total_slides: usize,
}

impl KeyBindings {
    pub fn new(total_slides: usize) -> Self {
        Self {
            coalescer: InputCoalescer::new(total_slides),
            total_slides: total_slides.max(1),
        }
    }

    pub fn handle_key_event(&self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return match key_event.code {
                KeyCode::Char('c') => InputAction::Quit,
                _ => InputAction::InvalidInput,
            };
        }
        if key_event.modifiers.contains(KeyModifiers::ALT) {
            return InputAction::InvalidInput;
        }

        if let Some(intent) = self.coalescer.key(key_event.code) {
            return InputAction::Navigate(intent);
        }

        match key_event.code {
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                if index < self.total_slides {
                    InputAction::Navigate(self.coalescer.indicator_click(index))
                } else {
                    InputAction::InvalidInput
                }
            }
            KeyCode::Char('n') | KeyCode::Char(']') => InputAction::CatalogNext,
            KeyCode::Char('p') | KeyCode::Char('[') => InputAction::CatalogPrev,
            KeyCode::Tab => InputAction::FocusNext,
            KeyCode::BackTab => InputAction::FocusPrev,
            KeyCode::Enter => InputAction::OpenDetail,
            KeyCode::Esc | KeyCode::Backspace => InputAction::Back,
            KeyCode::Char('r') => InputAction::Reset,
            KeyCode::Char('q') => InputAction::Quit,
            _ => InputAction::InvalidInput,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(TOTAL_SLIDES)
    }
}

/// Service responsible for producing high-level `InputAction`s from terminal events.
pub struct InputService {
    bindings: KeyBindings,
    raw_input: RawInputCollector,
}

impl InputService {
    pub fn new() -> Self {
        Self::with_collector(RawInputCollector::new())
    }

    pub fn with_collector(raw_input: RawInputCollector) -> Self {
        Self {
            bindings: KeyBindings::default(),
            raw_input,
        }
    }

    pub fn poll_actions(&mut self, timeout: Option<Duration>) -> Result<Vec<InputAction>> {
        let mut actions = Vec::new();

        if let Some(raw_event) = self.raw_input.poll_event(timeout)? {
            if let Some(action) = self.process_raw_event(raw_event) {
                actions.push(action);
            }

            while let Some(extra_event) = self.raw_input.try_flush() {
                if let Some(action) = self.process_raw_event(extra_event) {
                    actions.push(action);
                }
            }
        }

        Ok(actions)
    }

    pub fn process_event(&mut self, event: Event) -> Vec<InputAction> {
        let mut actions = Vec::new();
        self.raw_input.process_event(event);
        while let Some(raw_event) = self.raw_input.try_flush() {
            if let Some(action) = self.process_raw_event(raw_event) {
                actions.push(action);
            }
        }
        actions
    }

    fn process_raw_event(&mut self, event: RawInputEvent) -> Option<InputAction> {
        let action = match event {
            RawInputEvent::Key(key_event) => self.bindings.handle_key_event(key_event),
            RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
            RawInputEvent::Wheel { delta_y } => InputAction::Wheel { delta_y },
            RawInputEvent::Click { column, row } => InputAction::Click { column, row },
        };

        match action {
            InputAction::NoAction | InputAction::InvalidInput => None,
            _ => Some(action),
        }
    }
}

impl Default for InputService {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a blocking thread that polls for terminal events and forwards actions to the render loop.
pub fn spawn_input_thread(
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
    collector: RawInputCollector,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut service = InputService::with_collector(collector);
        while !shutdown.load(Ordering::SeqCst) {
            match service.poll_actions(Some(poll_interval)) {
                Ok(actions) => {
                    for action in actions {
                        if tx.send(action).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    log::error!("Input thread error: {}", err);
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{
        KeyEventState, MouseButton, MouseEvent, MouseEventKind,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 4,
            row: 2,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn bound(code: KeyCode) -> InputAction {
        KeyBindings::default().handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn navigation_keys_are_claimed_first() {
        assert_eq!(bound(KeyCode::Right), InputAction::Navigate(NavIntent::Next));
        assert_eq!(bound(KeyCode::Up), InputAction::Navigate(NavIntent::Previous));
        assert_eq!(bound(KeyCode::End), InputAction::Navigate(NavIntent::GoTo(3)));
    }

    #[test]
    fn digits_select_slides() {
        assert_eq!(
            bound(KeyCode::Char('1')),
            InputAction::Navigate(NavIntent::GoTo(0))
        );
        assert_eq!(
            bound(KeyCode::Char('4')),
            InputAction::Navigate(NavIntent::GoTo(3))
        );
        assert_eq!(bound(KeyCode::Char('5')), InputAction::InvalidInput);
    }

    #[test]
    fn catalogue_and_detail_bindings() {
        assert_eq!(bound(KeyCode::Char('n')), InputAction::CatalogNext);
        assert_eq!(bound(KeyCode::Char(']')), InputAction::CatalogNext);
        assert_eq!(bound(KeyCode::Char('p')), InputAction::CatalogPrev);
        assert_eq!(bound(KeyCode::Char('[')), InputAction::CatalogPrev);
        assert_eq!(bound(KeyCode::Tab), InputAction::FocusNext);
        assert_eq!(bound(KeyCode::BackTab), InputAction::FocusPrev);
        assert_eq!(bound(KeyCode::Enter), InputAction::OpenDetail);
        assert_eq!(bound(KeyCode::Esc), InputAction::Back);
        assert_eq!(bound(KeyCode::Backspace), InputAction::Back);
        assert_eq!(bound(KeyCode::Char('r')), InputAction::Reset);
        assert_eq!(bound(KeyCode::Char('q')), InputAction::Quit);
        assert_eq!(bound(KeyCode::Char('x')), InputAction::InvalidInput);
    }

    #[test]
    fn ctrl_c_quits_and_other_chords_are_ignored() {
        let bindings = KeyBindings::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        let alt_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT);
        assert_eq!(bindings.handle_key_event(ctrl_c), InputAction::Quit);
        assert_eq!(bindings.handle_key_event(ctrl_n), InputAction::InvalidInput);
        assert_eq!(bindings.handle_key_event(alt_q), InputAction::InvalidInput);
    }

    #[test]
    fn only_presses_count() {
        let bindings = KeyBindings::default();
        for kind in [KeyEventKind::Repeat, KeyEventKind::Release] {
            let event = KeyEvent {
                code: KeyCode::Right,
                modifiers: KeyModifiers::NONE,
                kind,
                state: KeyEventState::NONE,
            };
            assert_eq!(bindings.handle_key_event(event), InputAction::NoAction);
        }
    }

    #[test]
    fn wheel_bursts_are_accumulated_upstream() {
        let mut service = InputService::new();
        assert!(service
            .process_event(mouse(MouseEventKind::ScrollDown))
            .is_empty());
        assert!(service
            .process_event(mouse(MouseEventKind::ScrollDown))
            .is_empty());
        let actions = service.process_event(Event::Resize(80, 24));

        assert_eq!(
            actions,
            vec![
                InputAction::Wheel { delta_y: 200.0 },
                InputAction::Resize {
                    width: 80,
                    height: 24,
                },
            ]
        );
    }

    #[test]
    fn poll_actions_flushes_pending_burst() {
        let mut service = InputService::new();
        service
            .raw_input
            .process_event(mouse(MouseEventKind::ScrollUp));
        std::thread::sleep(Duration::from_millis(35));
        let actions = service
            .poll_actions(Some(Duration::from_millis(1)))
            .unwrap();

        assert_eq!(actions, vec![InputAction::Wheel { delta_y: -100.0 }]);
    }

    #[test]
    fn mixed_events_preserve_order() {
        let mut service = InputService::new();
        assert!(service
            .process_event(mouse(MouseEventKind::ScrollUp))
            .is_empty());
        let actions = service.process_event(mouse(MouseEventKind::Down(MouseButton::Left)));
        let after = service.process_event(key(KeyCode::Char('n')));

        assert_eq!(
            actions,
            vec![
                InputAction::Wheel { delta_y: -100.0 },
                InputAction::Click { column: 4, row: 2 },
            ]
        );
        assert_eq!(after, vec![InputAction::CatalogNext]);
    }
}
