//! Benchmarks for the block and wavelet transforms
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planecodec_transform::{
    forward_2d, forward_block, forward_step, inverse_2d, inverse_block, inverse_step,
    retain_zigzag, Block,
};

fn bench_dct(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT Transform");

    let mut block: Block = [0; 64];
    for (i, sample) in block.iter_mut().enumerate() {
        *sample = (i as i32 * 37) % 256 - 128;
    }

    group.bench_function("forward_block", |b| {
        b.iter(|| forward_block(black_box(&block)));
    });

    group.bench_function("inverse_block", |b| {
        let coeffs = forward_block(&block);
        b.iter(|| inverse_block(black_box(&coeffs)));
    });

    group.bench_function("roundtrip_m16", |b| {
        b.iter(|| {
            let mut coeffs = forward_block(black_box(&block));
            retain_zigzag(&mut coeffs, 16);
            inverse_block(&coeffs)
        });
    });

    group.finish();
}

fn bench_wavelet_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("Wavelet Steps");

    let input_f64: Vec<f64> = (0..512).map(|i| (i % 256) as f64).collect();
    let input_f32: Vec<f32> = input_f64.iter().map(|&v| v as f32).collect();

    group.bench_function("forward_step_f64", |b| {
        let mut output = vec![0.0f64; 512];
        b.iter(|| forward_step(black_box(&input_f64[..]), &mut output[..]));
    });

    group.bench_function("forward_step_f32", |b| {
        let mut output = vec![0.0f32; 512];
        b.iter(|| forward_step(black_box(&input_f32[..]), &mut output[..]));
    });

    group.bench_function("inverse_step_f64", |b| {
        let mut output = vec![0.0f64; 512];
        b.iter(|| inverse_step(black_box(&input_f64[..]), &mut output[..]));
    });

    group.finish();
}

fn bench_wavelet_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("Wavelet 2D");

    for size in [64usize, 256, 512] {
        let grid: Vec<f64> = (0..size * size).map(|i| (i % 251) as f64).collect();

        group.bench_with_input(BenchmarkId::new("forward_2d", size), &size, |b, &s| {
            b.iter(|| {
                let mut data = grid.clone();
                forward_2d(black_box(&mut data[..]), s);
                data
            });
        });

        group.bench_with_input(BenchmarkId::new("roundtrip_2d", size), &size, |b, &s| {
            b.iter(|| {
                let mut data = grid.clone();
                forward_2d(&mut data[..], s);
                inverse_2d(black_box(&mut data[..]), s);
                data
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dct, bench_wavelet_steps, bench_wavelet_2d);
criterion_main!(benches);
