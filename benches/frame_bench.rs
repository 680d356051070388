//! Per-frame hot paths: particle motion, field rendering, band sampling.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tidelight::input::PointerState;
use tidelight::options::{ParticleOptions, ProximityOptions, WaveOptions};
use tidelight::particles::{render_field, ParticleField};
use tidelight::surface::{RecordingSurface, SurfaceSize};
use tidelight::waves::{band_path, evaluate_height, Wave};

fn field(count: usize) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(1);
    ParticleField::initialize(
        SurfaceSize::new(1280, 720),
        count,
        &ParticleOptions::default(),
        &mut rng,
    )
}

fn advance_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_frame");
    for count in [100, 150] {
        let mut field = field(count);
        let mut t = 0.0_f32;
        group.bench_function(format!("{count}_particles"), |b| {
            b.iter(|| {
                t += 1.0 / 60.0;
                field.advance_frame(black_box(t), 0.2);
            });
        });
    }
    group.finish();
}

fn render_field_benchmark(c: &mut Criterion) {
    let options = ParticleOptions::default();
    let pointer = PointerState::new(Vec2::new(640.0, 360.0), true);
    let mut group = c.benchmark_group("render_field");
    for count in [100, 150] {
        let field = field(count);
        let mut surface = RecordingSurface::new(field.size());
        group.bench_function(format!("{count}_particles"), |b| {
            b.iter(|| {
                render_field(&mut surface, &field, &pointer, &options);
                black_box(surface.take().len())
            });
        });
    }
    group.finish();
}

fn wave_benchmark(c: &mut Criterion) {
    let wave = Wave::with_baseline(504.0, 60.0, 0.008, 0.02, Vec::new());
    let params = ProximityOptions::default();
    let pointer = Vec2::new(640.0, 520.0);
    c.bench_function("evaluate_height", |b| {
        b.iter(|| {
            black_box(evaluate_height(
                &wave,
                black_box(321.0),
                black_box(4.2),
                pointer,
                true,
                &params,
            ))
        });
    });

    let options = WaveOptions::default();
    let size = SurfaceSize::new(1280, 720);
    c.bench_function("band_path_1280px", |b| {
        b.iter(|| {
            black_box(band_path(
                &wave,
                size,
                black_box(4.2),
                Some(pointer),
                options.sample_step,
                &options.proximity,
                None,
            ))
        });
    });
}

criterion_group!(
    benches,
    advance_benchmark,
    render_field_benchmark,
    wave_benchmark
);
criterion_main!(benches);
