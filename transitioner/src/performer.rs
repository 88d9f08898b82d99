use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use crate::{DEFAULT_MOTION_DURATION_MS, DEFAULT_MOTION_EASING, Easing, Motion, Rect};

/// The host capability "read this element's current viewport-relative bounding rect".
///
/// Returns `None` when the element is not mounted. Absent geometry is expected data
/// (unmounts race with in-flight transitions), never an error.
pub type GeometryProbe = Rc<dyn Fn() -> Option<Rect>>;

/// The host capability "play a two-keyframe transform animation on this element".
///
/// Hosts without a native one-shot animation facility can sample the motion per frame
/// instead (see `Playback` in the `transitioner-adapter` crate).
pub type MotionPlayer = Rc<dyn Fn(Motion)>;

/// The unit of animatable state attached to one rendered element.
///
/// A performer exists exactly while its element is mounted. It captures the element's
/// pre-transition rect into a pending slot and, once the new layout is measurable,
/// decides whether a motion-correction animation is warranted.
pub struct Performer {
    probe: GeometryProbe,
    player: MotionPlayer,
    before: Cell<Option<Rect>>,
    duration_ms: u64,
    easing: Easing,
}

impl Performer {
    /// Creates a performer with the default motion policy (400ms, ease-in-out).
    pub fn new(
        probe: impl Fn() -> Option<Rect> + 'static,
        player: impl Fn(Motion) + 'static,
    ) -> Self {
        Self {
            probe: Rc::new(probe),
            player: Rc::new(player),
            before: Cell::new(None),
            duration_ms: DEFAULT_MOTION_DURATION_MS,
            easing: DEFAULT_MOTION_EASING,
        }
    }

    pub fn with_motion(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.duration_ms = duration_ms.max(1);
        self.easing = easing;
        self
    }

    /// Whether a before-rect is currently pending (a transition is in flight).
    pub fn has_pending(&self) -> bool {
        self.before.get().is_some()
    }

    /// Captures the element's current rect into the pending slot.
    ///
    /// Does nothing when the element is unmounted.
    pub fn before_transition(&self) {
        if let Some(rect) = (self.probe)() {
            self.before.set(Some(rect));
        }
    }

    /// Re-measures the element and decides whether to animate.
    ///
    /// The pending slot is cleared unconditionally, so a stray later call is a no-op.
    /// Returns `None` when no before-rect is pending, the element is unmounted, or the
    /// element did not move. Otherwise returns a deferred [`PlayAction`] carrying the
    /// inverse delta; deciding and playing are separate so an orchestrator can compute
    /// every decision first and start all playback in the same task.
    pub fn after_transition(&self) -> Option<PlayAction> {
        let before = self.before.take()?;
        let after = (self.probe)()?;

        let delta_x = before.x - after.x;
        let delta_y = before.y - after.y;
        if delta_x == 0.0 && delta_y == 0.0 {
            return None;
        }

        ttrace!(delta_x, delta_y, "Performer::after_transition");
        Some(PlayAction {
            player: Rc::clone(&self.player),
            motion: Motion {
                delta_x,
                delta_y,
                duration_ms: self.duration_ms,
                easing: self.easing,
            },
        })
    }
}

impl fmt::Debug for Performer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Performer")
            .field("has_pending", &self.has_pending())
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}

/// A deferred, one-shot playback of a decided motion correction.
pub struct PlayAction {
    player: MotionPlayer,
    motion: Motion,
}

impl PlayAction {
    /// The decided motion, without playing it.
    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Plays the motion on the element.
    pub fn play(self) {
        (self.player)(self.motion);
    }
}

impl fmt::Debug for PlayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayAction")
            .field("motion", &self.motion)
            .finish_non_exhaustive()
    }
}
