use quern::{hash, Params, ThreadMode, Variant};

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_params(lanes: u32, thread_mode: ThreadMode) -> Params {
    Params {
        mem_cost: 1024,
        time_cost: 1,
        lanes,
        tag_len: 32,
        thread_mode,
        clear_memory: false,
    }
}

pub fn bench_argon2d(c: &mut Criterion) {
    let params = bench_params(1, ThreadMode::Sequential);
    c.bench_function("argon2d 1 MiB", |b| {
        b.iter(|| {
            hash(
                Variant::Argon2d,
                black_box(b"password"),
                black_box(b"somesaltsomesalt"),
                &params,
            )
        })
    });
}

pub fn bench_argon2i(c: &mut Criterion) {
    let params = bench_params(1, ThreadMode::Sequential);
    c.bench_function("argon2i 1 MiB", |b| {
        b.iter(|| {
            hash(
                Variant::Argon2i,
                black_box(b"password"),
                black_box(b"somesaltsomesalt"),
                &params,
            )
        })
    });
}

pub fn bench_argon2ds(c: &mut Criterion) {
    let mut params = bench_params(1, ThreadMode::Sequential);
    params.time_cost = 2;
    c.bench_function("argon2ds 1 MiB 2 passes", |b| {
        b.iter(|| {
            hash(
                Variant::Argon2ds,
                black_box(b"password"),
                black_box(b"somesaltsomesalt"),
                &params,
            )
        })
    });
}

pub fn bench_parallel_lanes(c: &mut Criterion) {
    let params = bench_params(4, ThreadMode::Parallel);
    c.bench_function("argon2d 1 MiB 4 lanes pooled", |b| {
        b.iter(|| {
            hash(
                Variant::Argon2d,
                black_box(b"password"),
                black_box(b"somesaltsomesalt"),
                &params,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_argon2d,
    bench_argon2i,
    bench_argon2ds,
    bench_parallel_lanes
);
criterion_main!(benches);
