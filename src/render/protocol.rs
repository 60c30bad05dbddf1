//! Messages consumed by the render loop.

use crate::input::InputAction;
use crate::navigation::AnimationElapsed;

/// One event for the render loop, from either producer.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopEvent {
    /// Action from the input thread
    Input(InputAction),
    /// Unlock from the animation timer task
    AnimationElapsed(AnimationElapsed),
}

impl From<InputAction> for LoopEvent {
    fn from(action: InputAction) -> Self {
        LoopEvent::Input(action)
    }
}

impl From<AnimationElapsed> for LoopEvent {
    fn from(event: AnimationElapsed) -> Self {
        LoopEvent::AnimationElapsed(event)
    }
}

/// Whether the loop keeps running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}
