// Copyright 2025 the Panfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use thiserror::Error;

use crate::modes::BoundsMode;
use crate::view::View;

/// Precondition failure reported by [`fit_rect_to_container`].
///
/// Neither case is recoverable at this layer: callers either validate their
/// inputs up front or substitute a default view when a fit fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FitError {
    /// The container's width or height is not strictly positive.
    #[error("container dimensions must be strictly positive")]
    InvalidContainer,
    /// The content rectangle's width or height is not strictly positive.
    #[error("content rectangle dimensions must be strictly positive")]
    InvalidRect,
}

/// Computes the view that fits `rect` into `container`.
///
/// The fit is a classic "contain": the aspect ratios decide the limiting axis,
/// which picks a uniform scale `k` such that the scaled rectangle fills the
/// container on that axis and does not overflow on the other. The translation
/// centers the content on the non-limiting axis.
///
/// With [`BoundsMode::Bounded`] (the default mode) the translation is then
/// clamped so the visible window never extends past the content's own edges:
/// the left/top edges are pinned first, then any right/bottom overflow is
/// corrected. The far-edge correction is the authoritative bound; for content
/// smaller than the container on an axis, the first step snaps it toward the
/// origin-side edge while keeping it fully visible. For content larger than
/// the container on both axes the far-edge correction can push the view back
/// past the origin-side pin; that behavior is kept stable and covered by a
/// regression test.
///
/// With [`BoundsMode::Unbounded`] the centered transform is returned
/// unmodified and the view may extend past the content.
///
/// # Errors
///
/// - [`FitError::InvalidContainer`] if either container dimension is not
///   strictly positive.
/// - [`FitError::InvalidRect`] if either extent of `rect` is not strictly
///   positive.
pub fn fit_rect_to_container(
    rect: Rect,
    container: Size,
    mode: BoundsMode,
) -> Result<View, FitError> {
    // The negated comparisons also reject NaN dimensions.
    if !(container.width > 0.0 && container.height > 0.0) {
        return Err(FitError::InvalidContainer);
    }
    if !(rect.width() > 0.0 && rect.height() > 0.0) {
        return Err(FitError::InvalidRect);
    }

    let object_aspect = rect.width() / rect.height();
    let container_aspect = container.width / container.height;

    // Contain fit: the relatively taller side limits the scale.
    let k = if object_aspect < container_aspect {
        container.height / rect.height()
    } else {
        container.width / rect.width()
    };

    let mut x = -rect.x0 + (container.width / k - rect.width()) / 2.0;
    let mut y = -rect.y0 + (container.height / k - rect.height()) / 2.0;

    if mode == BoundsMode::Bounded {
        if -x < 0.0 {
            x = 0.0;
        }
        if -y < 0.0 {
            y = 0.0;
        }

        let right = -x + container.width / k;
        if right > container.width {
            x += right - container.width;
        }

        let bottom = -y + container.height / k;
        if bottom > container.height {
            y += bottom - container.height;
        }
    }

    Ok(View { k, x, y })
}
