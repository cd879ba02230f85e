// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// How content is fitted into the viewport when it is attached or re-fitted.
///
/// The fitted content is always centered in the viewport; the mode only
/// chooses the uniform scale factor baked into the base matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Scale so the whole content is visible.
    ///
    /// One content dimension spans the viewport exactly and the other is
    /// letterboxed. Small content is scaled up.
    #[default]
    Contain,
    /// Scale so the content covers the whole viewport.
    ///
    /// The overflowing dimension is cropped by the viewport edges.
    Cover,
    /// Keep the content at its natural size, centered.
    Center,
}

impl FitMode {
    /// Returns the uniform base scale for `content` fitted into `viewport`.
    ///
    /// Degenerate (non-positive) sizes yield `1.0` so that downstream matrix
    /// math stays finite.
    #[must_use]
    pub fn scale_for(self, content: Size, viewport: Size) -> f64 {
        if content.width <= 0.0
            || content.height <= 0.0
            || viewport.width <= 0.0
            || viewport.height <= 0.0
        {
            return 1.0;
        }
        let sx = viewport.width / content.width;
        let sy = viewport.height / content.height;
        match self {
            Self::Contain => sx.min(sy),
            Self::Cover => sx.max(sy),
            Self::Center => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::FitMode;

    #[test]
    fn contain_picks_the_smaller_ratio() {
        let content = Size::new(2000.0, 1000.0);
        let viewport = Size::new(1000.0, 1000.0);
        let scale = FitMode::Contain.scale_for(content, viewport);
        assert!((scale - 0.5).abs() < 1e-12, "expected 0.5, got {scale}");
    }

    #[test]
    fn contain_scales_small_content_up() {
        let content = Size::new(100.0, 50.0);
        let viewport = Size::new(1000.0, 1000.0);
        let scale = FitMode::Contain.scale_for(content, viewport);
        assert!((scale - 10.0).abs() < 1e-12, "expected 10.0, got {scale}");
    }

    #[test]
    fn cover_picks_the_larger_ratio() {
        let content = Size::new(2000.0, 1000.0);
        let viewport = Size::new(1000.0, 1000.0);
        let scale = FitMode::Cover.scale_for(content, viewport);
        assert!((scale - 1.0).abs() < 1e-12, "expected 1.0, got {scale}");
    }

    #[test]
    fn center_never_scales() {
        let content = Size::new(2000.0, 1000.0);
        let viewport = Size::new(1000.0, 1000.0);
        let scale = FitMode::Center.scale_for(content, viewport);
        assert_eq!(scale, 1.0, "center mode keeps natural size");
    }

    #[test]
    fn degenerate_sizes_fall_back_to_one() {
        let viewport = Size::new(1000.0, 1000.0);
        assert_eq!(
            FitMode::Contain.scale_for(Size::ZERO, viewport),
            1.0,
            "zero content must not divide by zero"
        );
        assert_eq!(
            FitMode::Contain.scale_for(viewport, Size::ZERO),
            1.0,
            "zero viewport must not produce a zero scale"
        );
    }
}
