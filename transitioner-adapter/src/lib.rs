//! Adapter utilities for the `transitioner` crate.
//!
//! The `transitioner` crate is UI-agnostic and focuses on the core protocol and state.
//! This crate provides small, framework-neutral helpers commonly needed by bindings:
//!
//! - A simulated host ([`Stage`]) that owns element geometry, supplies probes and
//!   players, and provides the render-flush hook (useful for tests, TUIs, and demos)
//! - Frame-driven playback sampling ([`Playback`]) for hosts without a native
//!   one-shot animation capability
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod playback;
mod stage;


pub use playback::Playback;
pub use stage::{ElementId, PlayedMotion, Stage, StagedElement};

pub use transitioner::{Easing, Motion};
