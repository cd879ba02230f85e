// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Transform: matrix stack, content fitting, and bounds clamping for
//! zoomable content views.
//!
//! This crate provides the headless geometric core of a photo-viewer style
//! pan/zoom surface. It focuses on:
//! - A base-plus-user matrix pair: the base matrix fits intrinsic content
//!   into the viewport under a [`FitMode`], the user matrix accumulates
//!   gesture-driven pan/zoom/rotate on top.
//! - Scale limit gating (zoom-in blocked at the maximum, zoom-out never).
//! - Edge clamping that keeps the displayed rectangle inside the viewport's
//!   travel range and reports which edges are flush in an [`EdgeState`].
//!
//! It does **not** own any widget, renderer, or gesture recognizer. Callers
//! are expected to:
//! - Feed viewport and content sizes from their layout system.
//! - Drive [`TransformStack`] mutations from recognized gestures (a
//!   higher-level crate routes gesture signals and animations).
//! - Hand [`TransformStack::effective_transform`] to their renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use loupe_transform::TransformStack;
//!
//! // A 1000x1000 viewport showing a 2000x1000 image.
//! let mut stack = TransformStack::new(Size::new(1000.0, 1000.0));
//! stack.set_content(Size::new(2000.0, 1000.0));
//! assert!((stack.scale() - 1.0).abs() < 1e-9);
//!
//! // Pinch in about the viewport center, then re-clamp.
//! stack.apply_scale(2.0, Point::new(500.0, 500.0));
//! stack.clamp();
//!
//! // The renderer consumes the composed transform.
//! let transform = stack.effective_transform();
//! ```
//!
//! ## Design notes
//!
//! - Matrices are value-type [`kurbo::Affine`]s; the effective transform is
//!   recomputed on every call, never cached across size changes.
//! - `clamp` is a correction applied after every mutation, not only at rest,
//!   and is idempotent.
//! - Absent content is a quiet no-op signal (`Option`/`bool` results), not
//!   an error.
//!
//! This crate is `no_std`.

#![no_std]

mod edges;
mod fit;
mod limits;
mod stack;

pub use edges::{EdgeState, HorizontalEdge, VerticalEdge};
pub use fit::FitMode;
pub use limits::{ScaleLimits, ScaleOutOfRange};
pub use stack::{TransformDebugInfo, TransformStack};
