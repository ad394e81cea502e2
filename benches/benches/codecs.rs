//! End-to-end codec benchmarks on a full 512x512 plane

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planecodec::{Channels, Codec, CodecConfig, DctCodec, DwtCodec, Plane};

fn create_plane(size: usize) -> Plane {
    Plane::from_fn(size, size, |x, y| ((x * 3 + y * 5) % 256) as i32)
}

fn bench_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reconstruct");
    group.sample_size(10);

    let config = CodecConfig::default();
    let plane = create_plane(config.plane_size());
    let dct = DctCodec::new(config);
    let dwt = DwtCodec::new(config);

    for step in [1usize, 16, 64] {
        group.bench_with_input(BenchmarkId::new("dct", step), &step, |b, &m| {
            b.iter(|| dct.reconstruct(black_box(&plane), m).unwrap());
        });

        let n = step * config.sweep_stride();
        group.bench_with_input(BenchmarkId::new("dwt", step), &n, |b, &n| {
            b.iter(|| dwt.reconstruct(black_box(&plane), n).unwrap());
        });
    }

    group.finish();
}

fn bench_channels(c: &mut Criterion) {
    let mut group = c.benchmark_group("Channels");
    group.sample_size(10);

    let config = CodecConfig::default();
    let size = config.plane_size();
    let plane = create_plane(size);
    let input = Channels::new(plane.clone(), plane.clone(), plane).unwrap();

    group.bench_function("dct_three_channels", |b| {
        let dct = DctCodec::new(config);
        b.iter(|| dct.reconstruct_channels(black_box(&input), 8).unwrap());
    });

    group.bench_function("dwt_three_channels", |b| {
        let dwt = DwtCodec::new(config);
        let n = 8 * config.sweep_stride();
        b.iter(|| dwt.reconstruct_channels(black_box(&input), n).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_reconstruct, bench_channels);
criterion_main!(benches);
