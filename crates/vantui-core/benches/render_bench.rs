//! Benchmarks for per-frame circle work
//!
//! Run with: cargo bench -p vantui-core
//!
//! A rate animation recomputes the render model once per display frame, so
//! these establish baselines for:
//! - Render model construction (solid and gradient)
//! - SVG document generation
//! - Full timeline simulation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vantui_core::animation::timeline;
use vantui_core::{CircleColor, CircleConfig, ElementId};

// ============================================================================
// Render Model Benchmarks
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let id = ElementId::from_string("bench-ring");

    let solid = CircleConfig::default();
    group.bench_function("solid", |b| {
        b.iter(|| black_box(solid.render(black_box(42.5), &id)))
    });

    let gradient = CircleConfig {
        color: CircleColor::gradient([
            ("100%", "#6149f6"),
            ("0%", "#3fecff"),
            ("50%", "#ffd01e"),
        ])
        .unwrap(),
        text: Some("42%".to_string()),
        ..Default::default()
    };
    group.bench_function("gradient", |b| {
        b.iter(|| black_box(gradient.render(black_box(42.5), &id)))
    });

    group.bench_function("gradient_svg", |b| {
        b.iter(|| black_box(gradient.render(black_box(42.5), &id).to_svg()))
    });

    group.finish();
}

// ============================================================================
// Timeline Benchmarks
// ============================================================================

fn bench_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");

    for speed in [10.0, 100.0, 1000.0] {
        group.bench_with_input(BenchmarkId::new("full_sweep", speed), &speed, |b, &speed| {
            b.iter(|| black_box(timeline(0.0, 100.0, speed, 16.0)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_timeline);
criterion_main!(benches);
