// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Motion: time-stepped fling and zoom animation models.
//!
//! This crate provides the two animation primitives a pan/zoom surface
//! needs, decoupled from any animation loop:
//! - [`FlingTask`] — inertial scrolling after a fling release, following an
//!   exponential velocity decay clamped to a [`ScrollEnvelope`].
//! - [`ZoomTask`] — a fixed-duration scale interpolation about a focal
//!   point, eased by [`ease_in_out`].
//!
//! Both are plain state machines advanced by explicit `step(now)` calls with
//! host-supplied monotonic timestamps; there is no scheduler, thread, or
//! callback inside. Each task carries an explicit finished flag checked
//! before any step emits, so a superseded or cancelled task can never fight
//! a live one over the transform.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Rect, Size, Vec2};
//! use loupe_motion::{FlingTask, ScrollEnvelope};
//!
//! // Content twice as wide as the viewport, flung to the left.
//! let rect = Rect::new(-500.0, 0.0, 1500.0, 1000.0);
//! let envelope = ScrollEnvelope::from_display_rect(rect, Size::new(1000.0, 1000.0));
//! let mut fling = FlingTask::new(envelope, Vec2::new(1200.0, 0.0), Duration::ZERO);
//!
//! // Per frame: apply the emitted delta as a translation, until `step`
//! // returns `None`.
//! let delta = fling.step(Duration::from_millis(16));
//! assert!(delta.is_some());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod easing;
mod fling;
mod zoom;

pub use easing::ease_in_out;
pub use fling::{FlingTask, ScrollEnvelope};
pub use zoom::{DEFAULT_ZOOM_DURATION, ZoomTask};
