// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Horizontal edge contact between the displayed content and the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HorizontalEdge {
    /// Content overflows on both sides; neither edge is flush.
    None,
    /// The content's left edge is flush with the viewport's left edge.
    Left,
    /// The content's right edge is flush with the viewport's right edge.
    Right,
    /// Content is no wider than the viewport; both edges are in view.
    #[default]
    Both,
}

/// Vertical edge contact between the displayed content and the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VerticalEdge {
    /// Content overflows above and below; neither edge is flush.
    None,
    /// The content's top edge is flush with the viewport's top edge.
    Top,
    /// The content's bottom edge is flush with the viewport's bottom edge.
    Bottom,
    /// Content is no taller than the viewport; both edges are in view.
    #[default]
    Both,
}

/// Per-axis edge contact, refreshed by every clamp pass.
///
/// Gesture routing reads this to decide whether a drag that pushes past a
/// flush edge should be handed to an ancestor scroll container. The default
/// (both edges in view on both axes) stands until the first clamp runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EdgeState {
    /// Contact along the horizontal axis.
    pub horizontal: HorizontalEdge,
    /// Contact along the vertical axis.
    pub vertical: VerticalEdge,
}
