// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction controller tying gestures to the transform stack.

use alloc::boxed::Box;
use core::fmt;
use core::time::Duration;

use kurbo::{Affine, Point, Rect, Size, Vec2};
use loupe_motion::{DEFAULT_ZOOM_DURATION, FlingTask, ScrollEnvelope, ZoomTask};
use loupe_transform::{
    EdgeState, FitMode, HorizontalEdge, ScaleLimits, ScaleOutOfRange, TransformDebugInfo,
    TransformStack, VerticalEdge,
};

use crate::session::GestureSession;
use crate::signal::{GestureSignal, InterceptDirective, SignalResponse, TapEvent};

/// Boxed single-tap listener.
type TapListener = Box<dyn FnMut(TapEvent)>;

/// Interaction controller for one piece of zoomable content.
///
/// A `Loupe` owns a [`TransformStack`] and drives it from host-delivered
/// [`GestureSignal`]s plus per-frame [`Loupe::tick`] calls. Pinches zoom
/// within the configured [`ScaleLimits`], drags pan within the clamped
/// travel range, flings decay over time, double-taps cycle through the
/// minimum/medium/maximum scale stops, and releasing a pinch that
/// overshot the limits snaps the scale back into range. The host renders
/// with [`Loupe::effective_transform`] and applies the returned
/// ancestor-intercept directives to its own gesture arena.
///
/// All mutating paths re-clamp the transform, so the displayed content
/// never drifts out of the travel range regardless of which gesture or
/// animation produced the change.
pub struct Loupe {
    stack: TransformStack,
    session: GestureSession,
    fling: Option<FlingTask>,
    zoom: Option<ZoomTask>,
    zoom_enabled: bool,
    allow_intercept_on_edge: bool,
    zoom_duration: Duration,
    on_tap: Option<TapListener>,
}

impl Loupe {
    /// Creates a controller for the given viewport with no content attached.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            stack: TransformStack::new(viewport),
            session: GestureSession::default(),
            fling: None,
            zoom: None,
            zoom_enabled: true,
            allow_intercept_on_edge: true,
            zoom_duration: DEFAULT_ZOOM_DURATION,
            on_tap: None,
        }
    }

    /// Returns the current user scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.stack.scale()
    }

    /// Returns the displayed content rectangle in viewport coordinates, or
    /// `None` without content.
    #[must_use]
    pub fn display_rect(&self) -> Option<Rect> {
        self.stack.display_rect()
    }

    /// Returns the transform mapping content coordinates to viewport
    /// coordinates, for the renderer.
    #[must_use]
    pub fn effective_transform(&self) -> Affine {
        self.stack.effective_transform()
    }

    /// Returns the edge contact recorded by the most recent clamp pass.
    #[must_use]
    pub fn edge_state(&self) -> EdgeState {
        self.stack.edges()
    }

    /// Returns a diagnostic snapshot of the underlying transform stack.
    #[must_use]
    pub fn debug_info(&self) -> TransformDebugInfo {
        self.stack.debug_info()
    }

    /// Returns the configured scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> ScaleLimits {
        self.stack.limits()
    }

    /// Replaces the scale limits.
    ///
    /// The current scale is left alone even when it falls outside the new
    /// range; the next gesture end snaps it back.
    pub fn set_scale_limits(&mut self, limits: ScaleLimits) {
        self.stack.set_limits(limits);
    }

    /// Returns the current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.stack.fit_mode()
    }

    /// Sets the fit mode and re-fits attached content from scratch.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.stack.set_fit_mode(mode);
    }

    /// Returns the base rotation in degrees.
    #[must_use]
    pub fn base_rotation(&self) -> f64 {
        self.stack.base_rotation()
    }

    /// Sets the base rotation in degrees and re-fits attached content.
    pub fn set_base_rotation(&mut self, degrees: f64) {
        self.stack.set_base_rotation(degrees);
    }

    /// Rotates the content by `degrees` on top of the current transform
    /// and re-clamps.
    pub fn rotate_by(&mut self, degrees: f64) {
        self.stack.apply_rotate(degrees);
        self.stack.clamp();
    }

    /// Returns whether zoom interaction is enabled.
    #[must_use]
    pub fn is_zoom_enabled(&self) -> bool {
        self.zoom_enabled
    }

    /// Enables or disables zoom interaction.
    ///
    /// Disabling stops in-flight animations and resets the transform to
    /// the fitted base state; while disabled, gesture signals are reported
    /// unhandled. Re-enabling re-fits attached content.
    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.zoom_enabled = enabled;
        self.cancel_animations();
        if enabled {
            self.stack.refit();
        } else {
            self.stack.reset_user();
        }
    }

    /// Returns whether drags past a flush edge may be handed to ancestors.
    #[must_use]
    pub fn allow_ancestor_intercept_on_edge(&self) -> bool {
        self.allow_intercept_on_edge
    }

    /// Sets whether drags past a flush edge may be handed to ancestors.
    ///
    /// Leave this enabled when the view sits inside a pager; disable it to
    /// keep every drag local no matter where the content rests.
    pub fn set_allow_ancestor_intercept_on_edge(&mut self, allow: bool) {
        self.allow_intercept_on_edge = allow;
    }

    /// Returns the duration of animated zooms.
    #[must_use]
    pub fn zoom_duration(&self) -> Duration {
        self.zoom_duration
    }

    /// Sets the duration used by double-tap zooms, snap-backs, and animated
    /// [`Loupe::set_scale`] calls.
    pub fn set_zoom_duration(&mut self, duration: Duration) {
        self.zoom_duration = duration;
    }

    /// Registers the single-tap listener, replacing any previous one.
    pub fn set_on_tap(&mut self, listener: impl FnMut(TapEvent) + 'static) {
        self.on_tap = Some(Box::new(listener));
    }

    /// Removes the single-tap listener.
    pub fn clear_on_tap(&mut self) {
        self.on_tap = None;
    }

    /// Attaches content of the given intrinsic size.
    ///
    /// The content is fitted from scratch; any zoom, pan, and in-flight
    /// animation from previous content is discarded.
    pub fn set_content(&mut self, size: Size) {
        self.cancel_animations();
        self.stack.set_content(size);
    }

    /// Detaches content and drops in-flight animations.
    pub fn clear_content(&mut self) {
        self.cancel_animations();
        self.stack.clear_content();
    }

    /// Returns the intrinsic size of the attached content, if any.
    #[must_use]
    pub fn content(&self) -> Option<Size> {
        self.stack.content()
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.stack.viewport()
    }

    /// Updates the viewport size.
    ///
    /// A size change re-fits the content from scratch and drops in-flight
    /// animations, exactly as [`Loupe::set_content`] does; an unchanged
    /// size is a no-op and leaves a running animation alone.
    pub fn set_viewport(&mut self, size: Size) {
        if size != self.stack.viewport() {
            self.cancel_animations();
        }
        self.stack.set_viewport(size);
    }

    /// Sets the scale about `focal`, optionally animating over the
    /// configured zoom duration.
    ///
    /// Fails without mutating anything when `value` lies outside the
    /// configured limits. `now` is the host's current timestamp and seeds
    /// the animation clock for the animated path.
    pub fn set_scale(
        &mut self,
        value: f64,
        focal: Point,
        animate: bool,
        now: Duration,
    ) -> Result<(), ScaleOutOfRange> {
        if animate {
            let limits = self.stack.limits();
            if !(value >= limits.min() && value <= limits.max()) {
                return Err(ScaleOutOfRange {
                    requested: value,
                    min: limits.min(),
                    max: limits.max(),
                });
            }
            self.start_zoom(value, focal, now);
        } else {
            self.stack.set_scale(value, focal)?;
            // An immediate scale supersedes whatever an older zoom task was
            // heading for.
            if let Some(zoom) = &mut self.zoom {
                zoom.cancel();
            }
            self.zoom = None;
        }
        Ok(())
    }

    /// Sets the scale about the viewport center.
    pub fn set_scale_centered(
        &mut self,
        value: f64,
        animate: bool,
        now: Duration,
    ) -> Result<(), ScaleOutOfRange> {
        let viewport = self.stack.viewport();
        let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
        self.set_scale(value, center, animate, now)
    }

    /// Cancels any in-flight fling and zoom animation.
    pub fn cancel_animations(&mut self) {
        if let Some(fling) = &mut self.fling {
            fling.cancel();
        }
        self.fling = None;
        if let Some(zoom) = &mut self.zoom {
            zoom.cancel();
        }
        self.zoom = None;
    }

    /// Routes one gesture signal.
    ///
    /// `now` timestamps the signal and seeds any animation it starts.
    /// Signals are reported unhandled, with nothing mutated, while zoom
    /// interaction is disabled or no content is attached.
    pub fn handle_signal(&mut self, signal: GestureSignal, now: Duration) -> SignalResponse {
        if !self.zoom_enabled || self.stack.content().is_none() {
            return SignalResponse::IGNORED;
        }
        let response = match signal {
            GestureSignal::PointerDown => self.on_pointer_down(),
            GestureSignal::PointerUp | GestureSignal::PointerCancel => self.on_pointer_up(now),
            GestureSignal::Drag { delta } => self.on_drag(delta),
            GestureSignal::Pinch { factor, focal } => self.on_pinch(factor, focal),
            GestureSignal::Fling { velocity } => self.on_fling(velocity, now),
            GestureSignal::DoubleTap { position } => self.on_double_tap(position, now),
            GestureSignal::SingleTap { position } => self.on_single_tap(position),
        };
        // Interception stays blocked until the session has actually dragged
        // or pinched. Drags read the flag before this point, so the update
        // only affects the signals that follow.
        self.session.block_ancestor_intercept = !(self.session.dragging || self.session.scaling);
        response
    }

    fn on_pointer_down(&mut self) -> SignalResponse {
        self.session.begin();
        // A new touch stops inertial scrolling on the spot.
        if let Some(fling) = &mut self.fling {
            fling.cancel();
        }
        self.fling = None;
        SignalResponse::handled(Some(InterceptDirective::Block))
    }

    fn on_pointer_up(&mut self, now: Duration) -> SignalResponse {
        let scale = self.stack.scale();
        let limits = self.stack.limits();
        let target = if scale < limits.min() {
            Some(limits.min())
        } else if scale > limits.max() {
            Some(limits.max())
        } else {
            None
        };
        if let Some(target) = target {
            if let Some(rect) = self.stack.display_rect() {
                self.start_zoom(target, rect.center(), now);
            }
        }
        self.session.end();
        SignalResponse::handled(None)
    }

    fn on_drag(&mut self, delta: Vec2) -> SignalResponse {
        if self.session.scaling {
            return SignalResponse::handled(None);
        }
        self.session.dragging = true;
        self.stack.apply_translate(delta);
        self.stack.clamp();

        // The edge test uses the state of the clamp that just ran: only a
        // drag that keeps pushing past a flush edge is worth giving away.
        let directive = if self.allow_intercept_on_edge
            && !self.session.block_ancestor_intercept
            && drag_escapes_edges(self.stack.edges(), delta)
        {
            InterceptDirective::Allow
        } else {
            InterceptDirective::Block
        };
        SignalResponse::handled(Some(directive))
    }

    fn on_pinch(&mut self, factor: f64, focal: Point) -> SignalResponse {
        self.session.scaling = true;
        self.stack.apply_scale(factor, focal);
        self.stack.clamp();
        SignalResponse::handled(None)
    }

    fn on_fling(&mut self, velocity: Vec2, now: Duration) -> SignalResponse {
        if self.session.scaling {
            return SignalResponse::handled(None);
        }
        self.stack.clamp();
        if let Some(rect) = self.stack.display_rect() {
            let envelope = ScrollEnvelope::from_display_rect(rect, self.stack.viewport());
            if let Some(old) = &mut self.fling {
                old.cancel();
            }
            // Scroll offsets run opposite to pointer motion.
            let task = FlingTask::new(envelope, -velocity, now);
            self.fling = (!task.is_finished()).then_some(task);
        }
        SignalResponse::handled(None)
    }

    fn on_double_tap(&mut self, position: Point, now: Duration) -> SignalResponse {
        let scale = self.stack.scale();
        let limits = self.stack.limits();
        let target = if scale < limits.mid() {
            limits.mid()
        } else if scale < limits.max() {
            limits.max()
        } else {
            limits.min()
        };
        self.start_zoom(target, position, now);
        SignalResponse::handled(None)
    }

    fn on_single_tap(&mut self, position: Point) -> SignalResponse {
        let content_position = self.stack.display_rect().and_then(|rect| {
            rect.contains(position).then(|| {
                Point::new(
                    (position.x - rect.x0) / rect.width(),
                    (position.y - rect.y0) / rect.height(),
                )
            })
        });
        if let Some(listener) = &mut self.on_tap {
            listener(TapEvent {
                position,
                content_position,
            });
        }
        SignalResponse::handled(None)
    }

    fn start_zoom(&mut self, target: f64, focal: Point, now: Duration) {
        if let Some(zoom) = &mut self.zoom {
            zoom.cancel();
        }
        self.zoom = Some(ZoomTask::with_duration(
            self.stack.scale(),
            target,
            focal,
            now,
            self.zoom_duration,
        ));
    }

    /// Advances in-flight animations to `now`.
    ///
    /// Returns whether any task is still live, i.e. whether the host should
    /// schedule another frame. Zoom pulses run through the same gated scale
    /// path as pinches and fling deltas through the same translate path as
    /// drags, so both stay clamped.
    pub fn tick(&mut self, now: Duration) -> bool {
        let mut live = false;

        if let Some(mut zoom) = self.zoom.take() {
            if let Some(target) = zoom.step(now) {
                let factor = target / self.stack.scale();
                self.stack.apply_scale(factor, zoom.focal());
                self.stack.clamp();
            }
            if !zoom.is_finished() {
                live = true;
                self.zoom = Some(zoom);
            }
        }

        if let Some(mut fling) = self.fling.take() {
            if let Some(delta) = fling.step(now) {
                self.stack.apply_translate(delta);
                self.stack.clamp();
            }
            if !fling.is_finished() {
                live = true;
                self.fling = Some(fling);
            }
        }

        live
    }
}

impl fmt::Debug for Loupe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loupe")
            .field("stack", &self.stack)
            .field("session", &self.session)
            .field("fling", &self.fling)
            .field("zoom", &self.zoom)
            .field("zoom_enabled", &self.zoom_enabled)
            .field("allow_intercept_on_edge", &self.allow_intercept_on_edge)
            .field("zoom_duration", &self.zoom_duration)
            .field("on_tap", &self.on_tap.as_ref().map(|_| "<function>"))
            .finish()
    }
}

/// Whether a drag keeps pushing past a flush edge into ancestor territory.
///
/// A horizontal `Both` contact (content no wider than the viewport) always
/// escapes, which is what lets a pager page while its photos are fitted.
/// Vertical `Both` deliberately does not.
fn drag_escapes_edges(edges: EdgeState, delta: Vec2) -> bool {
    matches!(edges.horizontal, HorizontalEdge::Both)
        || (matches!(edges.horizontal, HorizontalEdge::Left) && delta.x >= 1.0)
        || (matches!(edges.horizontal, HorizontalEdge::Right) && delta.x <= -1.0)
        || (matches!(edges.vertical, VerticalEdge::Top) && delta.y >= 1.0)
        || (matches!(edges.vertical, VerticalEdge::Bottom) && delta.y <= -1.0)
}
