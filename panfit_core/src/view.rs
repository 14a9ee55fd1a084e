// Copyright 2025 the Panfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::tween::lerp;

/// A uniform pan+zoom transform, as produced by
/// [`crate::fit_rect_to_container`].
///
/// The mapping into view space is `view = (content + (x, y)) * k`: the
/// offsets are applied in content space first, then the result is scaled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    /// Uniform scale factor, in container units per content unit.
    pub k: f64,
    /// Horizontal offset added to content coordinates before scaling.
    pub x: f64,
    /// Vertical offset added to content coordinates before scaling.
    pub y: f64,
}

impl View {
    /// The identity view: unit scale, zero offset.
    pub const IDENTITY: Self = Self {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Returns this view as an affine transform.
    ///
    /// Suitable for renderers that consume [`Affine`] directly; equivalent to
    /// [`Self::apply`] on every point.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::scale(self.k) * Affine::translate(Vec2::new(self.x, self.y))
    }

    /// Maps a content-space point into view space.
    #[must_use]
    pub fn apply(&self, pt: Point) -> Point {
        Point::new((pt.x + self.x) * self.k, (pt.y + self.y) * self.k)
    }

    /// Returns the content-space window a container of the given size sees
    /// through this view.
    ///
    /// For a view produced by a [`crate::BoundsMode::Bounded`] fit of content
    /// no larger than the container, this window lies within
    /// `[0, W] × [0, H]`.
    #[must_use]
    pub fn visible_rect(&self, container: Size) -> Rect {
        Rect::new(
            -self.x,
            -self.y,
            -self.x + container.width / self.k,
            -self.y + container.height / self.k,
        )
    }

    /// Interpolates component-wise between `self` and `to`.
    ///
    /// Callers drive transitions by sampling this over time, typically after
    /// shaping `t` with an easing curve; `t` outside `[0, 1]` extrapolates.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            k: lerp(self.k, to.k, t),
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
        }
    }
}
