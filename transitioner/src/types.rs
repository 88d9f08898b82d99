/// Default duration of a motion-correction animation, in milliseconds.
pub const DEFAULT_MOTION_DURATION_MS: u64 = 400;

/// Default timing curve of a motion-correction animation.
pub const DEFAULT_MOTION_EASING: Easing = Easing::EaseInOutCubic;

/// A viewport-relative bounding box.
///
/// Coordinates are plain floating-point pixel offsets. The no-motion check compares
/// positions exactly (no epsilon): an element that did not move reports bit-identical
/// rects before and after a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect at `(x, y)` with zero size. Handy when only position matters.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            width: 0.0,
            height: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// A decided motion correction: a transform animating from
/// `translate(delta_x, delta_y)` back to `translate(0, 0)`.
///
/// Deltas are `before - after`: an element that moved down by 40px gets
/// `delta_y = -40.0`, so playback starts at its old position and settles at the new
/// one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    pub delta_x: f64,
    pub delta_y: f64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Motion {
    /// Creates a motion with the default duration and easing policy.
    pub fn new(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            duration_ms: DEFAULT_MOTION_DURATION_MS,
            easing: DEFAULT_MOTION_EASING,
        }
    }

    pub fn is_still(&self) -> bool {
        self.delta_x == 0.0 && self.delta_y == 0.0
    }
}
