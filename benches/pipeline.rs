//! Benchmarks for the rorschach pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use rorschach::{
    colorize, encode_ppm, generate_pattern, scale_pixels, Canvas, ColourMode, ColourOptions,
    PixelFormat,
};

fn patterned(size: usize, mode: ColourMode) -> Canvas {
    let mut rng = StdRng::seed_from_u64(1);
    let (mut canvas, _) = Canvas::new(size, 1, 0, 255, mode, "bench.ppm");
    generate_pattern(&mut canvas, &mut rng);
    canvas
}

// -- Pattern benchmarks --

fn bench_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern");
    let mut rng = StdRng::seed_from_u64(2);

    for size in [16usize, 128] {
        let (mut canvas, _) = Canvas::new(size, 1, 0, 255, ColourMode::Monochrome, "bench.ppm");
        group.bench_function(format!("generate_{}", size), |b| {
            b.iter(|| generate_pattern(black_box(&mut canvas), &mut rng))
        });
    }

    group.finish();
}

// -- Colorize benchmarks --

fn bench_colorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("colorize");
    let mut rng = StdRng::seed_from_u64(3);
    let source = patterned(64, ColourMode::Colour);

    let rainbow = ColourOptions {
        rainbow: true,
        colored_backgrounds: false,
    };

    group.bench_function("colorize_plain", |b| {
        b.iter(|| {
            let mut canvas = source.clone();
            colorize(black_box(&mut canvas), ColourOptions::default(), &mut rng);
            canvas
        })
    });

    group.bench_function("colorize_rainbow", |b| {
        b.iter(|| {
            let mut canvas = source.clone();
            colorize(black_box(&mut canvas), rainbow, &mut rng);
            canvas
        })
    });

    group.finish();
}

// -- Scale and encode benchmarks --

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let canvas = patterned(16, ColourMode::Monochrome);

    group.bench_function("scale_16_by_20", |b| {
        b.iter(|| scale_pixels(black_box(canvas.pixels()), 20))
    });

    let mut scaled = canvas.clone();
    scaled.replace_pixels(scale_pixels(canvas.pixels(), 20));

    group.bench_function("encode_bitmap_320", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            encode_ppm(black_box(&scaled), PixelFormat::Bitmap, &mut buf).unwrap();
            buf
        })
    });

    group.finish();
}

criterion_group!(benches, bench_pattern, bench_colorize, bench_output);
criterion_main!(benches);
