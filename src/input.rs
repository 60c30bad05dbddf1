//! Terminal input: raw crossterm collection and the key bindings on top of it.

pub mod raw;
pub mod service;

pub use raw::{RawInputCollector, RawInputEvent, WheelAccumulator};
pub use service::{spawn_input_thread, InputAction, InputService, KeyBindings};
