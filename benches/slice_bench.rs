//! Benchmarks for slicing and materialization

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use scriptbuf::{Buffer, BufferLike, RawView};

/// Benchmark sub-view derivation for varying buffer sizes
fn bench_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice");

    for &size in &[64usize, 1024, 65536] {
        let buf = Buffer::create_from(&vec![7u8; size]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("{}_bytes", size), |b| {
            b.iter(|| {
                let sub = buf.slice(black_box(1), black_box(size as i64 - 2));
                black_box(sub)
            })
        });
    }

    group.finish();
}

/// Benchmark the whole-range fast path against a real derivation
fn bench_fast_path(c: &mut Criterion) {
    let buf = Buffer::create_from(&vec![7u8; 4096]);

    c.bench_function("slice_full_range", |b| {
        b.iter(|| black_box(buf.slice(black_box(0), black_box(4095))))
    });

    c.bench_function("slice_sub_range", |b| {
        b.iter(|| black_box(buf.slice(black_box(1), black_box(4094))))
    });
}

/// Benchmark copy-out
fn bench_materialize(c: &mut Criterion) {
    let buf = Buffer::create_from(&vec![7u8; 65536]);
    let slice = buf.slice(1024, 33792).unwrap();

    c.bench_function("materialize_32k_view", |b| {
        b.iter(|| black_box(slice.materialize()))
    });
}

/// Benchmark raw-view coercion of the three input shapes
fn bench_coerce(c: &mut Criterion) {
    let buf = Buffer::create_from(&vec![7u8; 4096]);
    let slice = buf.slice(16, 1040).unwrap();

    c.bench_function("coerce_buffer", |b| {
        b.iter(|| black_box(RawView::coerce(BufferLike::Owned(buf.clone()))))
    });

    c.bench_function("coerce_slice", |b| {
        b.iter(|| black_box(RawView::coerce(slice.clone())))
    });

    c.bench_function("coerce_bytes", |b| {
        b.iter(|| black_box(RawView::coerce(BufferLike::Bytes(vec![7u8; 4096]))))
    });
}

criterion_group!(
    benches,
    bench_slice,
    bench_fast_path,
    bench_materialize,
    bench_coerce,
);
criterion_main!(benches);
