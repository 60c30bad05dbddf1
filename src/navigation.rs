//! Slide navigation core.
//!
//! [`NavigationController`] owns the current slide and the animation lock;
//! [`InputCoalescer`] turns clicks, wheel deltas and keys into [`NavIntent`]s for it.

pub mod coalescer;
pub mod controller;

pub use coalescer::{InputCoalescer, NavIntent, WHEEL_THRESHOLD};
pub use controller::{
    AnimationElapsed, AnimationTimer, NavigationController, NavigationState, Slide,
    ANIMATION_DURATION, TOTAL_SLIDES,
};
