// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::edges::{EdgeState, HorizontalEdge, VerticalEdge};
use crate::fit::FitMode;
use crate::limits::{ScaleLimits, ScaleOutOfRange};

/// Base-plus-user matrix pair driving a zoomable content view.
///
/// `TransformStack` tracks two affine transforms over an intrinsic content
/// rectangle:
/// - the *base* matrix, which fits the content into the viewport under the
///   configured [`FitMode`] and base rotation, recomputed whenever content or
///   viewport change;
/// - the *user* matrix, which accumulates gesture-driven pan/zoom/rotate on
///   top of the base fit.
///
/// The effective transform handed to the renderer is the composition of the
/// two, recomputed on every call rather than cached. After any mutation the
/// [`TransformStack::clamp`] pass keeps the displayed rectangle within the
/// viewport's travel range and records which edges are flush in an
/// [`EdgeState`].
#[derive(Clone, Debug)]
pub struct TransformStack {
    viewport: Size,
    content: Option<Size>,
    fit_mode: FitMode,
    base_rotation: f64,
    limits: ScaleLimits,
    base: Affine,
    user: Affine,
    edges: EdgeState,
}

impl TransformStack {
    /// Creates a stack for the given viewport with no content attached.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            content: None,
            fit_mode: FitMode::default(),
            base_rotation: 0.0,
            limits: ScaleLimits::default(),
            base: Affine::IDENTITY,
            user: Affine::IDENTITY,
            edges: EdgeState::default(),
        }
    }

    /// Returns the current viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the intrinsic content size, if content is attached.
    #[must_use]
    pub fn content(&self) -> Option<Size> {
        self.content
    }

    /// Returns the current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Returns the base rotation in degrees.
    #[must_use]
    pub fn base_rotation(&self) -> f64 {
        self.base_rotation
    }

    /// Returns the configured scale limits.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Returns the edge contact recorded by the most recent clamp pass.
    #[must_use]
    pub fn edges(&self) -> EdgeState {
        self.edges
    }

    /// Attaches content of the given intrinsic size and fits it from scratch.
    ///
    /// The user matrix is reset; any previous zoom or pan is discarded.
    pub fn set_content(&mut self, content: Size) {
        self.content = Some(content);
        self.refit();
    }

    /// Detaches content.
    ///
    /// Subsequent [`TransformStack::display_rect`] calls return `None` and
    /// [`TransformStack::clamp`] becomes a quiet no-op.
    pub fn clear_content(&mut self) {
        self.content = None;
    }

    /// Updates the viewport size and re-fits attached content from scratch.
    ///
    /// A size change discards the user's zoom and pan exactly as
    /// [`TransformStack::set_content`] does. Setting an unchanged size is a
    /// no-op.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        if self.content.is_some() {
            self.refit();
        }
    }

    /// Sets the fit mode and re-fits attached content from scratch.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        if self.fit_mode == mode {
            return;
        }
        self.fit_mode = mode;
        if self.content.is_some() {
            self.refit();
        }
    }

    /// Sets the base rotation in degrees and re-fits attached content.
    ///
    /// The rotation is normalized modulo 360. Odd multiples of 90 degrees fit
    /// against swapped content dimensions so that the rotated content spans
    /// the viewport correctly.
    pub fn set_base_rotation(&mut self, degrees: f64) {
        self.base_rotation = degrees % 360.0;
        if self.content.is_some() {
            self.refit();
        }
    }

    /// Replaces the scale limits.
    ///
    /// The current scale is not adjusted; gestures and release snap-back
    /// enforce the new limits from here on.
    pub fn set_limits(&mut self, limits: ScaleLimits) {
        self.limits = limits;
    }

    /// Recomputes the base fit and resets the user matrix.
    pub fn refit(&mut self) {
        self.rebuild_base();
        self.reset_user();
    }

    /// Resets the user matrix to identity plus the base rotation, then
    /// re-clamps.
    pub fn reset_user(&mut self) {
        self.user = Affine::IDENTITY;
        self.apply_rotate(self.base_rotation);
        self.clamp();
    }

    /// Returns the user matrix's current uniform scale.
    ///
    /// Computed as the Euclidean norm of the matrix's first basis vector,
    /// which stays correct under rotation.
    #[must_use]
    pub fn scale(&self) -> f64 {
        let [a, b, ..] = self.user.as_coeffs();
        (a * a + b * b).sqrt()
    }

    /// Scales the user matrix by `factor` about `focal` (viewport space).
    ///
    /// Zoom-in is blocked once the current scale has reached the maximum
    /// limit; zoom-out is never blocked. Returns whether the scale was
    /// applied; a gated request is silently ignored, not an error. The
    /// factor must be finite and positive.
    pub fn apply_scale(&mut self, factor: f64, focal: Point) -> bool {
        if self.scale() >= self.limits.max() && factor >= 1.0 {
            return false;
        }
        self.user = scale_about(factor, focal) * self.user;
        true
    }

    /// Translates the user matrix by `delta` (viewport space).
    pub fn apply_translate(&mut self, delta: Vec2) {
        self.user = Affine::translate(delta) * self.user;
    }

    /// Rotates the user matrix by `degrees`, normalized modulo 360, about
    /// the viewport origin.
    pub fn apply_rotate(&mut self, degrees: f64) {
        self.user = Affine::rotate((degrees % 360.0).to_radians()) * self.user;
    }

    /// Replaces the user matrix with an absolute scale about `focal`.
    ///
    /// Fails without mutating anything when `scale` lies outside the
    /// configured limits; otherwise the previous zoom, pan, and rotation are
    /// discarded and the result is re-clamped.
    pub fn set_scale(&mut self, scale: f64, focal: Point) -> Result<(), ScaleOutOfRange> {
        if !(scale >= self.limits.min() && scale <= self.limits.max()) {
            return Err(ScaleOutOfRange {
                requested: scale,
                min: self.limits.min(),
                max: self.limits.max(),
            });
        }
        self.user = scale_about(scale, focal);
        self.clamp();
        Ok(())
    }

    /// Returns the effective transform: content coordinates through the base
    /// fit, then through the user matrix.
    ///
    /// Recomputed fresh on every call so it always reflects the most recent
    /// mutation.
    #[must_use]
    pub fn effective_transform(&self) -> Affine {
        self.user * self.base
    }

    /// Returns the displayed content rectangle in viewport space, or `None`
    /// when no content is attached.
    #[must_use]
    pub fn display_rect(&self) -> Option<Rect> {
        let content = self.content?;
        Some(transform_bbox(self.effective_transform(), content.to_rect()))
    }

    /// Clamps the displayed rectangle into the viewport's travel range.
    ///
    /// Per axis: content smaller than the viewport is centered; content that
    /// has been dragged off a viewport edge is pulled back flush. The
    /// correction is applied as a single post-translate on the user matrix
    /// and the resulting edge contact is recorded. Returns `false` (and does
    /// nothing) when no content is attached.
    pub fn clamp(&mut self) -> bool {
        let Some(rect) = self.display_rect() else {
            return false;
        };

        let view_width = self.viewport.width;
        let view_height = self.viewport.height;
        let mut delta = Vec2::ZERO;

        let vertical = if rect.height() <= view_height {
            delta.y = (view_height - rect.height()) / 2.0 - rect.y0;
            VerticalEdge::Both
        } else if rect.y0 > 0.0 {
            delta.y = -rect.y0;
            VerticalEdge::Top
        } else if rect.y1 < view_height {
            delta.y = view_height - rect.y1;
            VerticalEdge::Bottom
        } else {
            VerticalEdge::None
        };

        let horizontal = if rect.width() <= view_width {
            delta.x = (view_width - rect.width()) / 2.0 - rect.x0;
            HorizontalEdge::Both
        } else if rect.x0 > 0.0 {
            delta.x = -rect.x0;
            HorizontalEdge::Left
        } else if rect.x1 < view_width {
            delta.x = view_width - rect.x1;
            HorizontalEdge::Right
        } else {
            HorizontalEdge::None
        };

        self.user = Affine::translate(delta) * self.user;
        self.edges = EdgeState {
            horizontal,
            vertical,
        };
        true
    }

    /// Snapshot of the current stack state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TransformDebugInfo {
        TransformDebugInfo {
            viewport: self.viewport,
            content: self.content,
            fit_mode: self.fit_mode,
            base_rotation: self.base_rotation,
            limits: self.limits,
            scale: self.scale(),
            edges: self.edges,
            base: self.base,
            user: self.user,
            display_rect: self.display_rect(),
        }
    }

    fn rebuild_base(&mut self) {
        let Some(content) = self.content else {
            self.base = Affine::IDENTITY;
            return;
        };
        // Fit against swapped dimensions when the base rotation is an odd
        // multiple of 90 degrees; the rotation itself lives in the user
        // matrix after a reset.
        let quarter_turns = ((self.base_rotation / 90.0) % 4.0 + 4.0) % 4.0;
        let fitted = if quarter_turns == 1.0 || quarter_turns == 3.0 {
            Size::new(content.height, content.width)
        } else {
            content
        };
        if fitted.width <= 0.0
            || fitted.height <= 0.0
            || self.viewport.width <= 0.0
            || self.viewport.height <= 0.0
        {
            self.base = Affine::IDENTITY;
            return;
        }
        let scale = self.fit_mode.scale_for(fitted, self.viewport);
        let offset = Vec2::new(
            (self.viewport.width - fitted.width * scale) / 2.0,
            (self.viewport.height - fitted.height * scale) / 2.0,
        );
        self.base = Affine::translate(offset) * Affine::scale(scale);
    }
}

/// Scale about a fixed point, as a standalone affine.
fn scale_about(scale: f64, focal: Point) -> Affine {
    let focal = focal.to_vec2();
    Affine::translate(focal) * Affine::scale(scale) * Affine::translate(-focal)
}

/// Bounding box of `rect` under `transform`.
fn transform_bbox(transform: Affine, rect: Rect) -> Rect {
    // Transform the four corners and take their bounding box. Exact for
    // axis-aligned transforms, and the conventional answer under rotation.
    let p0 = transform * Point::new(rect.x0, rect.y0);
    let p1 = transform * Point::new(rect.x1, rect.y0);
    let p2 = transform * Point::new(rect.x0, rect.y1);
    let p3 = transform * Point::new(rect.x1, rect.y1);
    let min_x = p0.x.min(p1.x).min(p2.x).min(p3.x);
    let min_y = p0.y.min(p1.y).min(p2.y).min(p3.y);
    let max_x = p0.x.max(p1.x).max(p2.x).max(p3.x);
    let max_y = p0.y.max(p1.y).max(p2.y).max(p3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}

/// Debug snapshot of a [`TransformStack`] state.
#[derive(Clone, Copy, Debug)]
pub struct TransformDebugInfo {
    /// Current viewport size.
    pub viewport: Size,
    /// Intrinsic content size, if attached.
    pub content: Option<Size>,
    /// Fit mode used for the base matrix.
    pub fit_mode: FitMode,
    /// Base rotation in degrees.
    pub base_rotation: f64,
    /// Configured scale limits.
    pub limits: ScaleLimits,
    /// Current user-matrix scale.
    pub scale: f64,
    /// Edge contact from the most recent clamp pass.
    pub edges: EdgeState,
    /// The base (fit) matrix.
    pub base: Affine,
    /// The user (gesture) matrix.
    pub user: Affine,
    /// Displayed content rectangle, if content is attached.
    pub display_rect: Option<Rect>,
}
