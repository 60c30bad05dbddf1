//! Rendering subsystem: the loop protocol, the state it mutates, and the terminal UI.

pub mod protocol;
pub mod service;
pub mod ui;

pub use protocol::{LoopControl, LoopEvent};
pub use service::RenderLoopState;
