// Copyright 2025 the Panfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panfit Core: rect-to-container fit math for pan/zoom widgets.
//!
//! This crate is the small, headless computational core of a pan/zoom content
//! viewer: given a content rectangle and the container it should be shown in,
//! it computes a uniform scale and translation that fit the content inside the
//! container. It focuses on:
//! - Contain-fit scaling: the scaled content never overflows the container and
//!   is never cropped, leaving letterbox space on one axis.
//! - Optional edge bounding, so a fitted view cannot be positioned to reveal
//!   space beyond the content's own edges.
//! - Clamping a target rectangle to the container before fitting.
//! - Linear interpolation between views for caller-driven transitions.
//!
//! It does **not** own any rendering, input handling, or animation timing.
//! Callers are expected to:
//! - Extract numeric rectangles from their UI layer (for example an image's
//!   intrinsic dimensions, or an element's bounding box).
//! - Interpret pointer/wheel/pinch gestures themselves and call
//!   [`fit_rect_to_container`] whenever a new target view is needed.
//! - Drive transitions themselves, sampling [`View::lerp`] (or [`lerp`] on
//!   scalars) over time with whatever easing and scheduling they prefer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use panfit_core::{BoundsMode, fit_rect_to_container};
//!
//! // A 400x300 region of interest at (100, 50) in content space.
//! let target = Rect::new(100.0, 50.0, 500.0, 350.0);
//! // An 800x600 frame.
//! let container = Size::new(800.0, 600.0);
//!
//! let view = fit_rect_to_container(target, container, BoundsMode::Bounded).unwrap();
//! assert_eq!(view.k, 2.0);
//! assert_eq!((view.x, view.y), (-100.0, -50.0));
//! ```
//!
//! ## Clamping a zoom target
//!
//! Zoom targets often come from hit testing or selection and may hang past the
//! content's edges. [`clamp_rect_to_bounds`] trims such a rectangle to the
//! frame first, so a bounded fit is never asked to reach off-screen content:
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use panfit_core::clamp_rect_to_bounds;
//!
//! let frame = Size::new(100.0, 80.0);
//! let target = Rect::new(-20.0, -10.0, 30.0, 30.0);
//! assert_eq!(
//!     clamp_rect_to_bounds(target, frame),
//!     Rect::new(0.0, 0.0, 30.0, 30.0),
//! );
//! ```
//!
//! ## Design notes
//!
//! - Scaling is uniform; anisotropic fits and rotation are out of scope.
//! - A [`View`] maps content space into view space as
//!   `view = (content + (x, y)) * k`. [`View::affine`] exposes the same
//!   mapping as a [`kurbo::Affine`] for renderers that consume affine
//!   transforms.
//! - Every operation is a pure function of its arguments: no state, no I/O,
//!   and nothing to coordinate between concurrent call sites.
//! - Gesture interpretation, easing curves, and frame scheduling are expected
//!   to live in higher-level crates built on top of this one.
//!
//! This crate is `no_std`.

#![no_std]

mod clamp;
mod fit;
mod modes;
mod tween;
mod view;

pub use clamp::clamp_rect_to_bounds;
pub use fit::{FitError, fit_rect_to_container};
pub use modes::BoundsMode;
pub use tween::lerp;
pub use view::View;
