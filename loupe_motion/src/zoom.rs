// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::Point;

use crate::easing::ease_in_out;

/// Default duration of an animated zoom.
pub const DEFAULT_ZOOM_DURATION: Duration = Duration::from_millis(200);

/// Animated zoom between two scales about a fixed focal point.
///
/// [`ZoomTask::step`] emits the eased absolute target scale for the current
/// time. The caller converts each target into a factor relative to the
/// *current actual* scale and routes it through the ordinary scale-pulse
/// path, so limit gating and clamping apply uniformly even when intervening
/// clamps nudged the matrix. The final `t = 1` target is emitted exactly
/// once; after that the task reports finished.
#[derive(Clone, Debug)]
pub struct ZoomTask {
    from: f64,
    to: f64,
    focal: Point,
    start_time: Duration,
    duration: Duration,
    finished: bool,
}

impl ZoomTask {
    /// Creates a zoom from `from` to `to` about `focal`, starting at `now`,
    /// with the default duration.
    #[must_use]
    pub fn new(from: f64, to: f64, focal: Point, now: Duration) -> Self {
        Self::with_duration(from, to, focal, now, DEFAULT_ZOOM_DURATION)
    }

    /// Creates a zoom with an explicit duration.
    ///
    /// A zero duration jumps straight to the target on the first step.
    #[must_use]
    pub fn with_duration(
        from: f64,
        to: f64,
        focal: Point,
        now: Duration,
        duration: Duration,
    ) -> Self {
        Self {
            from,
            to,
            focal,
            start_time: now,
            duration,
            finished: false,
        }
    }

    /// Returns the focal point the zoom pivots about.
    #[must_use]
    pub fn focal(&self) -> Point {
        self.focal
    }

    /// Returns the scale the zoom is heading to.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Returns whether the task has emitted its final target or been
    /// cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Marks the task finished; subsequent steps emit nothing.
    pub fn cancel(&mut self) {
        self.finished = true;
    }

    /// Advances to `now`, returning the absolute target scale for this
    /// moment, or `None` once the task is finished.
    ///
    /// Timestamps earlier than the start saturate to zero elapsed time.
    pub fn step(&mut self, now: Duration) -> Option<f64> {
        if self.finished {
            return None;
        }
        let elapsed = now.saturating_sub(self.start_time).as_secs_f64();
        let duration = self.duration.as_secs_f64();
        let t = if duration <= 0.0 {
            1.0
        } else {
            (elapsed / duration).min(1.0)
        };
        if t >= 1.0 {
            self.finished = true;
        }
        Some(self.from + ease_in_out(t) * (self.to - self.from))
    }
}
