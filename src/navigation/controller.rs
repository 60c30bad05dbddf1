//! Slide navigation state machine.
//!
//! States are the slide indices `0..total_slides`, cross-cut by an `is_animating` lock.
//! While the lock is held every transition request is a no-op, so at most one transition
//! is ever in flight. A successful transition takes the lock and schedules its release
//! after [`ANIMATION_DURATION`] on an [`AnimationTimer`] owned by the controller. The
//! timer reports back through a channel as an [`AnimationElapsed`] message, which keeps
//! the event loop the only writer of navigation state.

use crate::navigation::coalescer::{InputCoalescer, NavIntent};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Number of slides in the deck.
pub const TOTAL_SLIDES: usize = 4;
/// Length of the slide transition; the lock is held this long.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(500);

/// The four full-screen sections of the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slide {
    Hero,
    Catalogue,
    Ode,
    Contact,
}

impl Slide {
    pub const ALL: [Slide; TOTAL_SLIDES] = [Slide::Hero, Slide::Catalogue, Slide::Ode, Slide::Contact];

    pub fn from_index(index: usize) -> Option<Slide> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Name announced when the slide becomes current
    pub fn title(self) -> &'static str {
        match self {
            Slide::Hero => "Accueil",
            Slide::Catalogue => "Catalogue",
            Slide::Ode => "Ode au Beau",
            Slide::Contact => "Contact",
        }
    }
}

/// Snapshot of the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current_slide: usize,
    pub is_animating: bool,
}

/// Delivered once per transition when its animation window has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationElapsed {
    /// Transition that scheduled this unlock
    pub generation: u64,
}

/// Cancellable one-shot timer releasing the animation lock.
#[derive(Debug, Default)]
pub struct AnimationTimer {
    handle: Option<JoinHandle<()>>,
}

impl AnimationTimer {
    /// Schedule `event` on `tx` after `delay`, replacing any pending schedule.
    /// Must be called from within a tokio runtime.
    pub fn schedule(
        &mut self,
        delay: Duration,
        event: AnimationElapsed,
        tx: UnboundedSender<AnimationElapsed>,
    ) {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone once the event loop has shut down.
            let _ = tx.send(event);
        }));
    }

    /// Abort the pending unlock, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }

    fn clear(&mut self) {
        self.handle = None;
    }
}

impl Drop for AnimationTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Owner of the current slide and the animation lock.
#[derive(Debug)]
pub struct NavigationController {
    state: NavigationState,
    total_slides: usize,
    animation_duration: Duration,
    generation: u64,
    timer: AnimationTimer,
    unlock_tx: UnboundedSender<AnimationElapsed>,
    coalescer: InputCoalescer,
}

impl NavigationController {
    /// Create a controller over the standard four-slide deck.
    /// Unlock notifications are delivered on `unlock_tx`.
    pub fn new(unlock_tx: UnboundedSender<AnimationElapsed>) -> Self {
        Self::with_total_slides(TOTAL_SLIDES, unlock_tx)
    }

    /// Create a controller over `total_slides` slides (at least one)
    pub fn with_total_slides(
        total_slides: usize,
        unlock_tx: UnboundedSender<AnimationElapsed>,
    ) -> Self {
        let total_slides = total_slides.max(1);
        Self {
            state: NavigationState::default(),
            total_slides,
            animation_duration: ANIMATION_DURATION,
            generation: 0,
            timer: AnimationTimer::default(),
            unlock_tx,
            coalescer: InputCoalescer::new(total_slides),
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current_slide(&self) -> usize {
        self.state.current_slide
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    pub fn coalescer(&self) -> &InputCoalescer {
        &self.coalescer
    }

    /// Whether an unlock is still scheduled
    pub fn unlock_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Request a transition to `target`, clamped into range.
    ///
    /// No-op while animating or when the clamped target is already current.
    /// Returns true when a transition started.
    pub fn go_to_slide(&mut self, target: i64) -> bool {
        if self.state.is_animating {
            log::trace!("Transition to {} rejected: animation in progress", target);
            return false;
        }

        let target = self.clamp(target);
        if target == self.state.current_slide {
            return false;
        }

        self.state = NavigationState {
            current_slide: target,
            is_animating: true,
        };
        self.generation += 1;
        self.timer.schedule(
            self.animation_duration,
            AnimationElapsed {
                generation: self.generation,
            },
            self.unlock_tx.clone(),
        );

        log::debug!(
            "Slide transition #{} to {}",
            self.generation,
            self.state.current_slide
        );
        true
    }

    pub fn go_to_next(&mut self) -> bool {
        self.go_to_slide(self.state.current_slide as i64 + 1)
    }

    pub fn go_to_prev(&mut self) -> bool {
        self.go_to_slide(self.state.current_slide as i64 - 1)
    }

    /// Apply a coalesced intent
    pub fn dispatch(&mut self, intent: NavIntent) -> bool {
        match intent {
            NavIntent::Next => self.go_to_next(),
            NavIntent::Previous => self.go_to_prev(),
            NavIntent::GoTo(index) => self.go_to_slide(index),
        }
    }

    /// Run one wheel event through the threshold filter, then dispatch it
    pub fn handle_wheel(&mut self, delta_y: f64) -> bool {
        match self.coalescer.wheel(delta_y) {
            Some(intent) => self.dispatch(intent),
            None => false,
        }
    }

    /// Direct setter for the lock. Normally only used by the scheduled unlock.
    pub fn set_animating(&mut self, is_animating: bool) {
        self.state.is_animating = is_animating;
    }

    /// Release the lock for the transition that scheduled `event`.
    /// Stale notifications (from before a reset) are ignored.
    pub fn on_animation_elapsed(&mut self, event: AnimationElapsed) -> bool {
        if event.generation != self.generation || !self.state.is_animating {
            log::trace!("Ignoring stale unlock #{}", event.generation);
            return false;
        }
        self.timer.clear();
        self.set_animating(false);
        true
    }

    /// Cancel any pending unlock and return to the first slide
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.generation += 1;
        self.state = NavigationState::default();
    }

    /// Cancel the pending unlock before the controller is discarded
    pub fn shutdown(&mut self) {
        self.timer.cancel();
    }

    fn clamp(&self, target: i64) -> usize {
        target.clamp(0, self.total_slides as i64 - 1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tokio::sync::mpsc;

    fn controller() -> (NavigationController, mpsc::UnboundedReceiver<AnimationElapsed>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (NavigationController::new(tx), rx)
    }

    /// Wait past the animation window and release the lock
    async fn finish_animation(
        nav: &mut NavigationController,
        rx: &mut mpsc::UnboundedReceiver<AnimationElapsed>,
    ) {
        let event = rx.recv().await.expect("unlock delivered");
        assert!(nav.on_animation_elapsed(event));
    }

    #[tokio::test(start_paused = true)]
    async fn starts_on_first_slide_unlocked() {
        let (nav, _rx) = controller();
        assert_eq!(nav.state(), NavigationState::default());
        assert_eq!(nav.total_slides(), 4);
        assert!(!nav.unlock_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn transition_locks_immediately_and_unlocks_once() {
        let (mut nav, mut rx) = controller();

        assert!(nav.go_to_slide(2));
        assert_eq!(nav.current_slide(), 2);
        assert!(nav.is_animating());
        assert!(nav.unlock_pending());

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(rx.try_recv().is_err());
        assert!(nav.is_animating());

        tokio::time::sleep(Duration::from_millis(1)).await;
        let event = rx.recv().await.unwrap();
        assert!(nav.on_animation_elapsed(event));
        assert!(!nav.is_animating());

        // Exactly one unlock per transition.
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
        assert!(!nav.on_animation_elapsed(event));
    }

    #[tokio::test(start_paused = true)]
    async fn requests_during_animation_are_rejected() {
        let (mut nav, mut rx) = controller();

        assert!(nav.go_to_next());
        assert!(!nav.go_to_next());
        assert!(!nav.go_to_slide(3));
        assert!(!nav.go_to_prev());
        assert_eq!(nav.current_slide(), 1);

        finish_animation(&mut nav, &mut rx).await;
        assert!(nav.go_to_slide(3));
        assert_eq!(nav.current_slide(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn same_target_is_a_noop() {
        let (mut nav, _rx) = controller();
        assert!(!nav.go_to_slide(0));
        assert!(!nav.is_animating());
        assert!(!nav.unlock_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn boundaries_are_noops() {
        let (mut nav, mut rx) = controller();
        assert!(!nav.go_to_prev());
        assert_eq!(nav.state(), NavigationState::default());

        assert!(nav.go_to_slide(99));
        assert_eq!(nav.current_slide(), 3);
        finish_animation(&mut nav, &mut rx).await;

        let before = nav.state();
        assert!(!nav.go_to_next());
        assert_eq!(nav.state(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn next_next_prev_lands_on_second_slide() {
        let (mut nav, mut rx) = controller();
        nav.go_to_next();
        finish_animation(&mut nav, &mut rx).await;
        nav.go_to_next();
        finish_animation(&mut nav, &mut rx).await;
        nav.go_to_prev();
        finish_animation(&mut nav, &mut rx).await;
        assert_eq!(nav.current_slide(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn wheel_goes_through_threshold_and_lock() {
        let (mut nav, mut rx) = controller();
        assert!(!nav.handle_wheel(50.0));
        assert!(!nav.handle_wheel(-20.0));
        assert_eq!(nav.current_slide(), 0);

        assert!(nav.handle_wheel(120.0));
        // The rest of the gesture lands inside the animation window.
        for _ in 0..20 {
            assert!(!nav.handle_wheel(120.0));
        }
        assert_eq!(nav.current_slide(), 1);

        finish_animation(&mut nav, &mut rx).await;
        assert!(nav.handle_wheel(-80.0));
        assert_eq!(nav.current_slide(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dispatch_maps_intents() {
        let (mut nav, mut rx) = controller();
        assert!(nav.dispatch(NavIntent::GoTo(3)));
        finish_animation(&mut nav, &mut rx).await;
        assert!(nav.dispatch(NavIntent::Previous));
        finish_animation(&mut nav, &mut rx).await;
        assert_eq!(nav.current_slide(), 2);
        assert!(nav.dispatch(NavIntent::GoTo(-7)));
        assert_eq!(nav.current_slide(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_cancels_pending_unlock() {
        let (mut nav, mut rx) = controller();
        nav.go_to_slide(2);
        nav.reset();

        assert_eq!(nav.state(), NavigationState::default());
        assert!(!nav.unlock_pending());
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_unlock_after_reset_is_ignored() {
        let (mut nav, mut rx) = controller();
        nav.go_to_slide(1);
        tokio::time::sleep(Duration::from_millis(600)).await;
        let stale = rx.recv().await.unwrap();

        nav.reset();
        nav.go_to_slide(3);
        assert!(!nav.on_animation_elapsed(stale));
        assert!(nav.is_animating());
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_and_drop_cancel_the_timer() {
        let (mut nav, mut rx) = controller();
        nav.go_to_slide(1);
        nav.shutdown();
        assert!(!nav.unlock_pending());

        let (tx, mut dropped_rx) = mpsc::unbounded_channel();
        let mut dropped = NavigationController::new(tx);
        dropped.go_to_slide(2);
        drop(dropped);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
        // Sender dropped together with the controller and its timer task.
        assert!(dropped_rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn set_animating_is_a_direct_seam() {
        let (mut nav, _rx) = controller();
        nav.set_animating(true);
        assert!(!nav.go_to_slide(2));
        nav.set_animating(false);
        assert!(nav.go_to_slide(2));
    }

    #[test]
    fn slide_titles_and_indices() {
        assert_eq!(Slide::from_index(2), Some(Slide::Ode));
        assert_eq!(Slide::from_index(4), None);
        assert_eq!(Slide::Contact.index(), 3);
        assert_eq!(Slide::Ode.title(), "Ode au Beau");
    }

    proptest! {
        #[test]
        fn go_to_slide_clamps_any_target(target in any::<i64>()) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap();
            let _guard = rt.enter();
            let (tx, _rx) = mpsc::unbounded_channel();
            let mut nav = NavigationController::new(tx);

            nav.go_to_slide(target);
            prop_assert_eq!(nav.current_slide() as i64, target.clamp(0, 3));
        }

        #[test]
        fn locked_controller_never_moves(target in any::<i64>()) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap();
            let _guard = rt.enter();
            let (tx, _rx) = mpsc::unbounded_channel();
            let mut nav = NavigationController::new(tx);
            nav.set_animating(true);

            prop_assert!(!nav.go_to_slide(target));
            prop_assert_eq!(nav.current_slide(), 0);
        }
    }
}
