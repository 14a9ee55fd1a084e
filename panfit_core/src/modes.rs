// Copyright 2025 the Panfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Edge-bounding behavior for [`crate::fit_rect_to_container`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BoundsMode {
    /// Clamp the fitted translation so the visible window stays inside the
    /// content's own edges.
    ///
    /// The origin-side (left/top) edges are pinned first, then any far-side
    /// (right/bottom) overflow is corrected. Content smaller than the
    /// container on an axis ends up fully visible and snapped toward the
    /// origin-side edge.
    #[default]
    Bounded,
    /// Return the centered transform unmodified.
    ///
    /// The view may extend past the content. Useful for free-floating
    /// centering, for example during an interactive drag before a
    /// release-time snap-back.
    Unbounded,
}
