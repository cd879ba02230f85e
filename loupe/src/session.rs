// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-touch-session bookkeeping.

/// Flags tracked from pointer-down to pointer-up.
///
/// `scaling` is sticky: once a session has pinched, drags and flings stay
/// suppressed until the session ends, so a finger lifted mid-pinch cannot
/// fling the content away.
///
/// `block_ancestor_intercept` describes the *previous* signal: it is set
/// while the previous signal was neither a drag nor a pinch. Drags read it
/// before it is recomputed, so the first drag after pointer-down always
/// keeps the gesture local even when it starts at an edge.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GestureSession {
    pub(crate) dragging: bool,
    pub(crate) scaling: bool,
    pub(crate) block_ancestor_intercept: bool,
}

impl GestureSession {
    /// Resets the flags for a fresh session at pointer-down.
    pub(crate) fn begin(&mut self) {
        *self = Self {
            dragging: false,
            scaling: false,
            block_ancestor_intercept: true,
        };
    }

    /// Clears the session at pointer-up or cancel.
    pub(crate) fn end(&mut self) {
        *self = Self::default();
    }
}
