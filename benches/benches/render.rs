// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `collage_svg` rendering.
//!
//! Scenes are synthetic: a flat grid of mixed primitives, and a balanced tree of nested
//! groups to stress the depth-first traversal.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use collage::{
    Color, Form, Handler, LineStyle, Texture, circle, dashed_line, group, ngon, plain,
    rectangle, segment, text, textured_fill,
};
use collage_svg::{Counters, Renderer};

fn gradient() -> Texture {
    Texture::linear_gradient(
        0.3,
        [
            (0.0, Color::from_rgba8(200, 40, 40, 255)),
            (1.0, Color::from_rgba8(40, 40, 200, 128)),
        ],
    )
}

/// One primitive of each kind, chosen by `i`.
fn primitive(i: u32) -> Form {
    let x = f64::from(i % 32) * 10.0;
    let y = f64::from(i / 32) * 10.0;
    let form = match i % 5 {
        0 => rectangle(8.0, 6.0).filled(Color::from_rgba8(10, 120, 200, 255)),
        1 => circle(4.0).styled(textured_fill(gradient())),
        2 => segment((0.0, 0.0), (8.0, 8.0)).traced(dashed_line(1.5, Color::BLACK)),
        3 => ngon(6, 4.0).outlined(LineStyle::default().with_texture(gradient())),
        _ => text("label", plain(9)),
    };
    form.with_position(x, y).with_angle(f64::from(i) * 0.01)
}

fn flat_scene(n: u32) -> Form {
    group((0..n).map(|i| {
        let form = primitive(i);
        if i % 16 == 0 {
            form.on("click", Handler::new(i))
        } else {
            form
        }
    }))
}

fn nested_scene(depth: u32, fanout: u32) -> Form {
    if depth == 0 {
        return primitive(fanout);
    }
    group((0..fanout).map(|i| nested_scene(depth - 1, fanout).shift(f64::from(i), 0.0)))
        .with_opacity(0.9)
}

fn bench_render(c: &mut Criterion) {
    let renderer = Renderer::default();
    let mut group = c.benchmark_group("collage_svg");

    for n in [100_u32, 1_000, 10_000] {
        let scene = flat_scene(n);
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(BenchmarkId::new("flat_document", n), |b| {
            b.iter(|| black_box(renderer.render(black_box(&scene), 320.0, 320.0)));
        });
        group.bench_function(BenchmarkId::new("flat_fragment", n), |b| {
            b.iter(|| {
                black_box(renderer.render_fragment(black_box(&scene), Counters::default()))
            });
        });
    }

    for depth in [3_u32, 6] {
        let scene = nested_scene(depth, 4);
        group.throughput(Throughput::Elements(4_u64.pow(depth)));
        group.bench_function(BenchmarkId::new("nested_depth", depth), |b| {
            b.iter(|| black_box(renderer.render(black_box(&scene), 320.0, 320.0)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
