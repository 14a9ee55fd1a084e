// Copyright 2025 the Panfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// Clamps a rectangle to the container `[0, W] × [0, H]`.
///
/// Returns the axis-aligned intersection of `rect` with the container. If the
/// intersection is empty, or its projection on either axis collapses to zero,
/// the full container rectangle `{0, 0, W, H}` is returned instead: an empty
/// rectangle is never a useful fit target, so the full frame is the safest
/// fallback.
///
/// Pairing this with [`crate::BoundsMode::Bounded`] ensures a zoom is never
/// computed from off-screen content that the bounded view could not pan to.
///
/// This function never fails. Rectangles with negative positions or inverted
/// extents degenerate naturally into the fallback.
#[must_use]
pub fn clamp_rect_to_bounds(rect: Rect, bounds: Size) -> Rect {
    let x0 = rect.x0.min(bounds.width).max(0.0);
    let y0 = rect.y0.min(bounds.height).max(0.0);
    let x1 = rect.x1.min(bounds.width).max(0.0);
    let y1 = rect.y1.min(bounds.height).max(0.0);
    let w = (x1 - x0).max(0.0);
    let h = (y1 - y0).max(0.0);
    if w == 0.0 || h == 0.0 {
        Rect::new(0.0, 0.0, bounds.width, bounds.height)
    } else {
        Rect::new(x0, y0, x1, y1)
    }
}
