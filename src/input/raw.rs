//! Low-level input collection: crossterm polling, wheel burst accumulation, and
//! translation into primitive events that the input service can consume.

use crate::config::{DEFAULT_WHEEL_COALESCE_MS, DEFAULT_WHEEL_TICK_DELTA};
use crate::error::Result;
use ratatui::crossterm::event::{
    self, Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind,
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Poll timeout used when the caller does not provide one.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;

/// Low-level events surfaced by the raw input collector.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInputEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    /// Summed delta of one wheel burst; positive scrolls forward
    Wheel { delta_y: f64 },
    /// Left button press at a terminal cell
    Click { column: u16, row: u16 },
}

/// Sums scroll notches in the same direction into one wheel delta.
#[derive(Debug, Clone)]
pub struct WheelAccumulator {
    window: Duration,
    pending: Option<PendingWheel>,
}

#[derive(Debug, Clone)]
struct PendingWheel {
    delta_y: f64,
    last_event: Instant,
}

impl WheelAccumulator {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Register a notch, returning the previous burst when the direction changed.
    pub fn push(&mut self, delta_y: f64, now: Instant) -> Option<f64> {
        match self.pending {
            Some(ref mut pending) if pending.delta_y.signum() == delta_y.signum() => {
                pending.delta_y += delta_y;
                pending.last_event = now;
                None
            }
            Some(_) => {
                let flushed = self.flush();
                self.pending = Some(PendingWheel {
                    delta_y,
                    last_event: now,
                });
                flushed
            }
            None => {
                self.pending = Some(PendingWheel {
                    delta_y,
                    last_event: now,
                });
                None
            }
        }
    }

    /// Flush the burst once no notch has arrived for a full window.
    pub fn flush_if_stale(&mut self, now: Instant) -> Option<f64> {
        if let Some(pending) = &self.pending {
            if now.duration_since(pending.last_event) >= self.window {
                return self.flush();
            }
        }
        None
    }

    pub fn flush(&mut self) -> Option<f64> {
        self.pending.take().map(|pending| pending.delta_y)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

/// Collector that polls crossterm for events and accumulates wheel bursts.
#[derive(Debug)]
pub struct RawInputCollector {
    wheel: WheelAccumulator,
    tick_delta: f64,
    pending_events: VecDeque<RawInputEvent>,
}

impl Default for RawInputCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl RawInputCollector {
    pub fn new() -> Self {
        Self::with_settings(
            Duration::from_millis(DEFAULT_WHEEL_COALESCE_MS),
            DEFAULT_WHEEL_TICK_DELTA,
        )
    }

    /// Create a collector with a custom window and per-notch delta.
    pub fn with_settings(window: Duration, tick_delta: f64) -> Self {
        Self {
            wheel: WheelAccumulator::new(window),
            tick_delta,
            pending_events: VecDeque::new(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.pending_events.is_empty() && self.wheel.is_empty()
    }

    /// Process a synthetic event (primarily used by unit tests).
    pub fn process_event(&mut self, event: Event) {
        self.enqueue_event(event, Instant::now());
    }

    /// Return queued events first, then a wheel burst whose window has expired.
    pub fn try_flush(&mut self) -> Option<RawInputEvent> {
        self.try_flush_at(Instant::now())
    }

    fn try_flush_at(&mut self, now: Instant) -> Option<RawInputEvent> {
        self.pop_pending().or_else(|| {
            self.wheel
                .flush_if_stale(now)
                .map(|delta_y| RawInputEvent::Wheel { delta_y })
        })
    }

    /// Retrieve the next raw input event, blocking up to `timeout`.
    pub fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<RawInputEvent>> {
        if let Some(event) = self.try_flush() {
            return Ok(Some(event));
        }

        let mut poll_timeout = timeout.unwrap_or(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));
        if !self.wheel.is_empty() {
            // Wake up in time to flush the burst.
            poll_timeout = poll_timeout.min(self.wheel.window);
        }

        if !event::poll(poll_timeout)? {
            return Ok(self.try_flush());
        }

        let event = event::read()?;
        self.enqueue_event(event, Instant::now());
        Ok(self.pop_pending())
    }

    fn enqueue_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key_event) => {
                self.flush_pending_wheel();
                self.pending_events.push_back(RawInputEvent::Key(key_event));
            }
            Event::Resize(width, height) => {
                self.flush_pending_wheel();
                self.pending_events
                    .push_back(RawInputEvent::Resize { width, height });
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event, now),
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent, now: Instant) {
        let delta_y = match mouse_event.kind {
            MouseEventKind::ScrollDown => self.tick_delta,
            MouseEventKind::ScrollUp => -self.tick_delta,
            MouseEventKind::Down(MouseButton::Left) => {
                self.flush_pending_wheel();
                self.pending_events.push_back(RawInputEvent::Click {
                    column: mouse_event.column,
                    row: mouse_event.row,
                });
                return;
            }
            _ => return,
        };

        if let Some(flushed) = self.wheel.push(delta_y, now) {
            self.pending_events
                .push_back(RawInputEvent::Wheel { delta_y: flushed });
        }
    }

    fn flush_pending_wheel(&mut self) {
        if let Some(delta_y) = self.wheel.flush() {
            self.pending_events.push_back(RawInputEvent::Wheel { delta_y });
        }
    }

    /// Pop the next pending raw event without touching the accumulator.
    pub fn pop_pending(&mut self) -> Option<RawInputEvent> {
        self.pending_events.pop_front()
    }
}
