//! SDL parsing benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pydgen_bench::synthetic_schema;
use pydgen_schema::parse_document;
use std::hint::black_box;

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for size in [10, 100, 1000] {
        let sdl = synthetic_schema(size);
        group.throughput(Throughput::Bytes(sdl.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &sdl, |b, sdl| {
            b.iter(|| parse_document(black_box(sdl)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse);
criterion_main!(benches);
