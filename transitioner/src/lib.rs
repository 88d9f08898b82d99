//! A headless FLIP layout-transition engine inspired by React view transitions.
//!
//! For binding-level utilities (a simulated host, frame-driven playback), see the
//! `transitioner-adapter` crate.
//!
//! When application state changes move elements around, this crate animates them from
//! their prior on-screen position to their new one instead of letting them jump. It
//! implements the FLIP technique (First-Last-Invert-Play): measure every element in
//! scope before a state commit, re-measure after, and play the inverse delta.
//!
//! It is UI-agnostic. A TUI/GUI binding layer is expected to provide:
//! - element geometry (a probe returning the current viewport-relative rect)
//! - a way to play a two-keyframe transform animation (or sample one per frame)
//! - a synchronous render flush, so geometry reflects the new state immediately
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animate;
mod kind;
mod performer;
mod scope;
mod transition;
mod types;

#[cfg(test)]
mod tests;

pub use animate::{AnimatedElement, AnimatedKind, Animator, ElementKind};
pub use performer::{GeometryProbe, MotionPlayer, Performer, PlayAction};
pub use scope::ScopeRegistry;
pub use transition::{RenderFlush, ViewTransition};
pub use types::{DEFAULT_MOTION_DURATION_MS, DEFAULT_MOTION_EASING, Easing, Motion, Rect};

#[doc(hidden)]
pub use kind::KindCacheKey;
