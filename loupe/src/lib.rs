// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe --heading-base-level=0

//! Loupe: a pan/zoom/fling interaction controller for zoomable content
//! views.
//!
//! This crate turns recognized pointer gestures into a clamped content
//! transform, the way photo viewers do it: pinch to zoom between
//! configurable scale stops, drag to pan within the content's travel range,
//! fling into an inertial scroll, double-tap to cycle the zoom, and snap
//! transient overshoot back on release. It is headless and host-driven:
//! - The host's gesture recognizer delivers [`GestureSignal`]s.
//! - The host's frame loop calls [`Loupe::tick`] with monotonic timestamps
//!   while an animation reports itself live.
//! - The host's renderer draws the content under
//!   [`Loupe::effective_transform`].
//! - The host's gesture arena applies the returned [`InterceptDirective`]s,
//!   which is what lets a photo inside a pager both pan and page.
//!
//! The geometry lives in [`loupe_transform`] and the animation models in
//! [`loupe_motion`]; this crate owns the routing policy between them.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size};
//! use loupe::{GestureSignal, Loupe};
//!
//! let mut loupe = Loupe::new(Size::new(1000.0, 1000.0));
//! loupe.set_content(Size::new(2000.0, 1000.0));
//!
//! // A double-tap zooms toward the medium scale stop.
//! loupe.handle_signal(
//!     GestureSignal::DoubleTap {
//!         position: Point::new(500.0, 500.0),
//!     },
//!     Duration::ZERO,
//! );
//! let mut now = Duration::ZERO;
//! while loupe.tick(now) {
//!     now += Duration::from_millis(16);
//! }
//! assert!((loupe.scale() - 1.75).abs() < 1e-6);
//!
//! // The renderer consumes the composed transform.
//! let transform = loupe.effective_transform();
//! ```
//!
//! ## Design notes
//!
//! - Gesture recognition stays in the host; Loupe consumes its output, so
//!   platform conventions for slop, tap timing, and velocity tracking apply
//!   unchanged.
//! - Every mutation re-clamps, so viewport changes, envelope drift during a
//!   fling, and animated zooms can never leave the content stranded outside
//!   its travel range.
//! - Animations are plain tasks stepped by [`Loupe::tick`]; there is no
//!   internal scheduler, and a cancelled or superseded task stops emitting
//!   immediately.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod session;
mod signal;

pub use controller::Loupe;
pub use signal::{GestureSignal, InterceptDirective, SignalResponse, TapEvent};

// Re-exported so hosts can configure a `Loupe` without naming the geometry
// crate directly.
pub use loupe_transform::{
    EdgeState, FitMode, HorizontalEdge, ScaleLimits, ScaleOutOfRange, TransformDebugInfo,
    VerticalEdge,
};
