// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `cos`

/// Symmetric accelerate-then-decelerate curve on `[0, 1]`.
///
/// Evaluates `cos((t + 1) * PI) / 2 + 0.5`: zero slope at both ends,
/// crossing `0.5` at the midpoint. Input outside `[0, 1]` is clamped.
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}
