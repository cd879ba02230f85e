// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Scale limits for user interaction.
///
/// `min` and `max` bound the steady-state scale; `mid` is the intermediate
/// stop of the double-tap cycle. Pinches may overshoot `min` transiently and
/// are snapped back on release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    min: f64,
    mid: f64,
    max: f64,
}

impl ScaleLimits {
    /// Creates scale limits.
    ///
    /// The limits must be strictly increasing: `min < mid < max`.
    #[must_use]
    pub fn new(min: f64, mid: f64, max: f64) -> Self {
        debug_assert!(
            min < mid && mid < max,
            "scale limits must be strictly increasing"
        );
        Self { min, mid, max }
    }

    /// Returns the minimum steady-state scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the medium scale, the first double-tap zoom target.
    #[must_use]
    pub fn mid(&self) -> f64 {
        self.mid
    }

    /// Returns the maximum scale user gestures may reach.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Default for ScaleLimits {
    /// The classic photo-viewer triple: 1.0 / 1.75 / 3.0.
    fn default() -> Self {
        Self {
            min: 1.0,
            mid: 1.75,
            max: 3.0,
        }
    }
}

/// Error returned by absolute scale requests outside the configured limits.
///
/// The transform is left untouched when this error is returned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleOutOfRange {
    /// The rejected scale.
    pub requested: f64,
    /// Lower bound of the allowed range.
    pub min: f64,
    /// Upper bound of the allowed range.
    pub max: f64,
}

impl fmt::Display for ScaleOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scale {} is outside the allowed range [{}, {}]",
            self.requested, self.min, self.max
        )
    }
}

impl core::error::Error for ScaleOutOfRange {}

#[cfg(test)]
mod tests {
    use super::ScaleLimits;

    #[test]
    fn default_limits_match_the_usual_triple() {
        let limits = ScaleLimits::default();
        assert_eq!(limits.min(), 1.0, "default min");
        assert_eq!(limits.mid(), 1.75, "default mid");
        assert_eq!(limits.max(), 3.0, "default max");
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    #[cfg(debug_assertions)]
    fn misordered_limits_panic_in_debug() {
        let _ = ScaleLimits::new(2.0, 1.0, 3.0);
    }
}
