// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `exp`
use kurbo::{Rect, Size, Vec2};

/// Exponential decay rate of fling velocity, per second.
///
/// Equivalent to multiplying velocity by roughly 0.998 every millisecond,
/// the decay mainstream touch scrollers ship.
const DECAY_PER_SECOND: f64 = 2.0;

/// Residual speed below which a fling axis is considered stopped, in view
/// pixels per second.
const STOP_VELOCITY: f64 = 50.0;

/// Travel range available to a fling, in scroll coordinates.
///
/// Scroll position is the negated origin of the displayed rectangle, so it
/// grows as content moves up and to the left. An axis with no room to move
/// collapses to a single position (min = max = start).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEnvelope {
    start: Vec2,
    min: Vec2,
    max: Vec2,
}

impl ScrollEnvelope {
    /// Derives the envelope from the displayed content rectangle and the
    /// viewport, using the same geometry as the clamper.
    ///
    /// The rect is expected to be in its clamped state; the release position
    /// then always lies inside the computed range.
    #[must_use]
    pub fn from_display_rect(rect: Rect, viewport: Size) -> Self {
        let start = Vec2::new(-rect.x0, -rect.y0);
        let (min_x, max_x) = if viewport.width < rect.width() {
            (0.0, rect.width() - viewport.width)
        } else {
            (start.x, start.x)
        };
        let (min_y, max_y) = if viewport.height < rect.height() {
            (0.0, rect.height() - viewport.height)
        } else {
            (start.y, start.y)
        };
        Self {
            start,
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    /// Returns the scroll position at release.
    #[must_use]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Returns the per-axis minimum scroll position.
    #[must_use]
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the per-axis maximum scroll position.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Returns whether there is no room to move on either axis.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min.x == self.max.x && self.min.y == self.max.y
    }
}

/// Inertial scroll animation seeded by a fling release.
///
/// Position follows a closed-form exponential velocity decay from the
/// release point, clamped per axis to the envelope. [`FlingTask::step`]
/// emits the view-space translation accumulated since the previous step and
/// reports finished once every axis has either reached the bound it is
/// heading to or decayed below the stop speed. A finished or cancelled task
/// never emits again.
#[derive(Clone, Debug)]
pub struct FlingTask {
    envelope: ScrollEnvelope,
    velocity: Vec2,
    start_time: Duration,
    last: Vec2,
    finished: bool,
}

impl FlingTask {
    /// Creates a fling from the release state.
    ///
    /// `velocity` is in scroll coordinates, i.e. the negated pointer
    /// velocity. A degenerate envelope produces an already-finished task, so
    /// a fling with nowhere to go is a no-op.
    #[must_use]
    pub fn new(envelope: ScrollEnvelope, velocity: Vec2, now: Duration) -> Self {
        Self {
            velocity,
            start_time: now,
            last: envelope.start(),
            finished: envelope.is_degenerate(),
            envelope,
        }
    }

    /// Returns whether the task has converged or been cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Marks the task finished; subsequent steps emit nothing.
    pub fn cancel(&mut self) {
        self.finished = true;
    }

    /// Advances to `now`, returning the view-space translation to apply to
    /// the content, or `None` once the task is finished.
    ///
    /// Timestamps earlier than the start saturate to zero elapsed time.
    pub fn step(&mut self, now: Duration) -> Option<Vec2> {
        if self.finished {
            return None;
        }
        let elapsed = now.saturating_sub(self.start_time).as_secs_f64();
        let decay = (-DECAY_PER_SECOND * elapsed).exp();
        let offset = self.velocity * ((1.0 - decay) / DECAY_PER_SECOND);
        let min = self.envelope.min();
        let max = self.envelope.max();
        let start = self.envelope.start();
        let position = Vec2::new(
            (start.x + offset.x).clamp(min.x, max.x),
            (start.y + offset.y).clamp(min.y, max.y),
        );
        let speed = self.velocity * decay;
        let x_done = axis_done(position.x, self.velocity.x, speed.x, min.x, max.x);
        let y_done = axis_done(position.y, self.velocity.y, speed.y, min.y, max.y);

        // Content moves opposite to the scroll position.
        let delta = self.last - position;
        self.last = position;
        if x_done && y_done {
            self.finished = true;
            if delta == Vec2::ZERO {
                return None;
            }
        }
        Some(delta)
    }
}

fn axis_done(position: f64, velocity: f64, speed: f64, min: f64, max: f64) -> bool {
    if min == max || speed.abs() < STOP_VELOCITY {
        return true;
    }
    (velocity > 0.0 && position >= max) || (velocity < 0.0 && position <= min)
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::{Rect, Size, Vec2};

    use super::{FlingTask, ScrollEnvelope};

    const VIEWPORT: Size = Size::new(1000.0, 1000.0);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn envelope_from_wide_content() {
        let rect = Rect::new(-500.0, 0.0, 1500.0, 1000.0);
        let envelope = ScrollEnvelope::from_display_rect(rect, VIEWPORT);
        assert_eq!(envelope.start(), Vec2::new(500.0, 0.0), "release position");
        assert_eq!(envelope.min().x, 0.0, "left travel bound");
        assert_eq!(envelope.max().x, 1000.0, "right travel bound");
        assert_eq!(
            envelope.min().y,
            envelope.max().y,
            "no vertical room collapses the axis"
        );
        assert!(!envelope.is_degenerate(), "horizontal room remains");
    }

    #[test]
    fn fitted_content_makes_a_degenerate_envelope() {
        let rect = Rect::new(0.0, 250.0, 1000.0, 750.0);
        let envelope = ScrollEnvelope::from_display_rect(rect, VIEWPORT);
        assert!(envelope.is_degenerate(), "no room on either axis");
        let mut task = FlingTask::new(envelope, Vec2::new(2000.0, -1500.0), ms(0));
        assert!(task.is_finished(), "degenerate fling is born finished");
        assert_eq!(task.step(ms(16)), None, "no motion is ever emitted");
    }

    #[test]
    fn degenerate_axis_stays_put_while_the_other_moves() {
        // Tall content, width exactly matching the viewport.
        let rect = Rect::new(0.0, -500.0, 1000.0, 1500.0);
        let envelope = ScrollEnvelope::from_display_rect(rect, VIEWPORT);
        let mut task = FlingTask::new(envelope, Vec2::new(300.0, -400.0), ms(0));
        let delta = task.step(ms(16)).expect("task is live");
        assert_eq!(delta.x, 0.0, "horizontal axis is pinned");
        assert!(delta.y > 0.0, "negative scroll velocity moves content down");
    }

    #[test]
    fn fling_runs_into_the_bound_and_finishes() {
        let rect = Rect::new(-500.0, -500.0, 1500.0, 1500.0);
        let envelope = ScrollEnvelope::from_display_rect(rect, VIEWPORT);
        // Fast enough that the asymptotic travel exceeds the room.
        let mut task = FlingTask::new(envelope, Vec2::new(3000.0, 0.0), ms(0));
        let mut total = Vec2::ZERO;
        let mut now = ms(0);
        while let Some(delta) = task.step(now) {
            total += delta;
            now += ms(16);
            assert!(now < ms(10_000), "fling must converge");
        }
        assert!(task.is_finished(), "task reports finished");
        assert!(
            (total.x + 500.0).abs() < 1e-6,
            "content travels exactly to the scroll bound, got {}",
            total.x
        );
        assert_eq!(total.y, 0.0, "zero-velocity axis never moves");
    }

    #[test]
    fn slow_fling_decays_to_rest_inside_the_envelope() {
        let rect = Rect::new(-500.0, -500.0, 1500.0, 1500.0);
        let envelope = ScrollEnvelope::from_display_rect(rect, VIEWPORT);
        let mut task = FlingTask::new(envelope, Vec2::new(200.0, 0.0), ms(0));
        let mut total = Vec2::ZERO;
        let mut now = ms(0);
        while let Some(delta) = task.step(now) {
            total += delta;
            now += ms(16);
            assert!(now < ms(10_000), "fling must converge");
        }
        // Asymptotic travel is velocity / decay rate = 100 px; the stop
        // threshold cuts it slightly short.
        assert!(
            total.x < -70.0 && total.x > -100.0,
            "decayed travel stays inside the envelope, got {}",
            total.x
        );
    }

    #[test]
    fn cancel_stops_emission() {
        let rect = Rect::new(-500.0, -500.0, 1500.0, 1500.0);
        let envelope = ScrollEnvelope::from_display_rect(rect, VIEWPORT);
        let mut task = FlingTask::new(envelope, Vec2::new(3000.0, 3000.0), ms(0));
        task.step(ms(16)).expect("task is live");
        task.cancel();
        assert_eq!(task.step(ms(32)), None, "cancelled task emits nothing");
    }

    #[test]
    fn earlier_timestamp_saturates_to_zero_elapsed() {
        let rect = Rect::new(-500.0, -500.0, 1500.0, 1500.0);
        let envelope = ScrollEnvelope::from_display_rect(rect, VIEWPORT);
        let mut task = FlingTask::new(envelope, Vec2::new(3000.0, 0.0), ms(100));
        let delta = task.step(ms(50)).expect("task is live");
        assert_eq!(delta, Vec2::ZERO, "time cannot run backwards");
    }
}
