// Copyright 2025 the Panfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the fit and clamp hot paths.
//!
//! Both operations are O(1) arithmetic; these exist to catch accidental
//! regressions if the math grows branches or conversions. Inputs cover the
//! interesting shapes: equal aspect, tall content, and content larger than
//! the container on both axes.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use panfit_core::{BoundsMode, clamp_rect_to_bounds, fit_rect_to_container};

const CONTAINER: Size = Size::new(800.0, 600.0);

const RECTS: [Rect; 3] = [
    Rect::new(100.0, 50.0, 500.0, 350.0),
    Rect::new(0.0, 0.0, 200.0, 400.0),
    Rect::new(0.0, 0.0, 1600.0, 1200.0),
];

fn bench_fit(c: &mut Criterion) {
    c.bench_function("fit_bounded", |b| {
        b.iter(|| {
            for r in RECTS {
                let _ = black_box(fit_rect_to_container(
                    black_box(r),
                    black_box(CONTAINER),
                    BoundsMode::Bounded,
                ));
            }
        });
    });

    c.bench_function("fit_unbounded", |b| {
        b.iter(|| {
            for r in RECTS {
                let _ = black_box(fit_rect_to_container(
                    black_box(r),
                    black_box(CONTAINER),
                    BoundsMode::Unbounded,
                ));
            }
        });
    });
}

fn bench_clamp(c: &mut Criterion) {
    let rects = [
        Rect::new(10.0, 12.0, 40.0, 32.0),
        Rect::new(-20.0, -10.0, 30.0, 30.0),
        Rect::new(-200.0, 10.0, -150.0, 30.0),
    ];
    let bounds = Size::new(100.0, 80.0);

    c.bench_function("clamp_rect", |b| {
        b.iter(|| {
            for r in rects {
                let _ = black_box(clamp_rect_to_bounds(black_box(r), black_box(bounds)));
            }
        });
    });
}

criterion_group!(benches, bench_fit, bench_clamp);
criterion_main!(benches);
