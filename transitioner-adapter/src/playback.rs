use transitioner::Motion;

/// Frame-driven sampling of one motion correction.
///
/// Hosts with a native "play a two-keyframe animation" capability hand the [`Motion`]
/// straight to the platform. Hosts that render frame by frame (TUIs, immediate-mode
/// GUIs) wrap it in a `Playback` instead and apply [`offset`](Self::offset) as a
/// translate on every tick until [`is_done`](Self::is_done).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Playback {
    pub motion: Motion,
    pub start_ms: u64,
}

impl Playback {
    pub fn new(motion: Motion, start_ms: u64) -> Self {
        Self { motion, start_ms }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.motion.duration_ms.max(1)
    }

    /// The translate offset to apply at `now_ms`.
    ///
    /// Starts at the motion's full delta and decays to `(0, 0)` under the motion's
    /// easing; clamped past the end, so sampling after completion returns `(0, 0)`.
    pub fn offset(&self, now_ms: u64) -> (f64, f64) {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let duration = self.motion.duration_ms.max(1);
        let t = (elapsed as f32 / duration as f32).clamp(0.0, 1.0);
        let remaining = f64::from(1.0 - self.motion.easing.sample(t));
        (
            self.motion.delta_x * remaining,
            self.motion.delta_y * remaining,
        )
    }
}
