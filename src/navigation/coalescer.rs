//! Normalization of indicator clicks, wheel deltas and keys into navigation intents.
//!
//! A single physical gesture must produce at most one logical transition. Clicks map 1:1.
//! Wheel events below the threshold are noise. Events arriving while a transition is
//! animating are dropped later by the controller's lock, so the two filters together
//! yield one transition per gesture.

use ratatui::crossterm::event::KeyCode;

/// Minimum absolute wheel delta that counts as an intent.
pub const WHEEL_THRESHOLD: f64 = 50.0;

/// Logical navigation request consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Previous,
    Next,
    /// Absolute target; out-of-range values are clamped by the controller
    GoTo(i64),
}

/// Per-modality filters in front of the navigation controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputCoalescer {
    total_slides: usize,
    wheel_threshold: f64,
}

impl InputCoalescer {
    pub fn new(total_slides: usize) -> Self {
        Self {
            total_slides: total_slides.max(1),
            wheel_threshold: WHEEL_THRESHOLD,
        }
    }

    pub fn wheel_threshold(&self) -> f64 {
        self.wheel_threshold
    }

    /// One indicator click is one intent
    pub fn indicator_click(&self, index: usize) -> NavIntent {
        NavIntent::GoTo(index as i64)
    }

    /// Positive deltas scroll forward. Deltas within `[-threshold, threshold]` are ignored.
    pub fn wheel(&self, delta_y: f64) -> Option<NavIntent> {
        if delta_y > self.wheel_threshold {
            Some(NavIntent::Next)
        } else if delta_y < -self.wheel_threshold {
            Some(NavIntent::Previous)
        } else {
            None
        }
    }

    /// Map a navigation key. `Some` means the key is consumed and must not reach any
    /// other binding.
    pub fn key(&self, code: KeyCode) -> Option<NavIntent> {
        match code {
            KeyCode::Right | KeyCode::Down => Some(NavIntent::Next),
            KeyCode::Left | KeyCode::Up => Some(NavIntent::Previous),
            KeyCode::Home => Some(NavIntent::GoTo(0)),
            KeyCode::End => Some(NavIntent::GoTo(self.total_slides as i64 - 1)),
            _ => None,
        }
    }
}
