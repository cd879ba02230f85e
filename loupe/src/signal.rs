// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture signals and the responses they produce.

use kurbo::{Point, Vec2};

/// A recognized pointer gesture, delivered by the host.
///
/// Loupe does not recognize gestures itself. Touch slop, double-tap timing,
/// pinch span tracking, and velocity estimation belong to the host's gesture
/// recognizer; Loupe consumes its output. Positions are in viewport
/// coordinates and velocities in viewport units per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureSignal {
    /// The first pointer of a touch session went down.
    PointerDown,
    /// The last pointer lifted and the session is over.
    PointerUp,
    /// The host aborted the session (for example, an ancestor took over).
    PointerCancel,
    /// A one-finger pan moved the pointer by `delta` since the last signal.
    Drag {
        /// Pointer movement since the previous drag signal.
        delta: Vec2,
    },
    /// A pinch update.
    Pinch {
        /// Incremental scale factor since the previous pinch signal. Must
        /// be finite and positive.
        factor: f64,
        /// Midpoint between the two pointers.
        focal: Point,
    },
    /// The pointer was released fast enough to start inertial scrolling.
    Fling {
        /// Pointer velocity at release.
        velocity: Vec2,
    },
    /// A double-tap.
    DoubleTap {
        /// Position of the second tap.
        position: Point,
    },
    /// A confirmed single tap (the host's double-tap timeout elapsed).
    SingleTap {
        /// Tap position.
        position: Point,
    },
}

/// Whether an ancestor gesture arena may take over the rest of the touch
/// session.
///
/// Hosts embedding zoomable content inside a horizontally swiping container
/// (a pager, a carousel) apply this to their platform's intercept mechanism.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterceptDirective {
    /// Hand the remaining touch stream to interested ancestors.
    Allow,
    /// Keep the touch stream on this view.
    Block,
}

/// Outcome of routing one [`GestureSignal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignalResponse {
    /// Whether the controller consumed the signal. `false` means zoom
    /// interaction is disabled or no content is attached, and nothing
    /// changed.
    pub handled: bool,
    /// The ancestor-intercept directive to apply, for the signals that
    /// carry one (pointer-down and drags).
    pub ancestor_intercept: Option<InterceptDirective>,
}

impl SignalResponse {
    pub(crate) const IGNORED: Self = Self {
        handled: false,
        ancestor_intercept: None,
    };

    pub(crate) const fn handled(ancestor_intercept: Option<InterceptDirective>) -> Self {
        Self {
            handled: true,
            ancestor_intercept,
        }
    }
}

/// Payload delivered to the single-tap listener.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapEvent {
    /// Tap position in viewport coordinates.
    pub position: Point,
    /// Tap position relative to the displayed content rectangle, with both
    /// axes normalized to `0.0..=1.0`. `None` when the tap landed outside
    /// the displayed content.
    pub content_position: Option<Point>,
}
