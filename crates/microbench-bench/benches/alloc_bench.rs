//! Struct array construction benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use microbench_bench::maybe_pin_thread;
use microbench_kernels::data_transform;

fn bench_build_items(c: &mut Criterion) {
    maybe_pin_thread();
    let counts: &[i32] = &[16, 1_024, data_transform::ITEM_COUNT];
    let mut group = c.benchmark_group("build_items");

    for &count in counts {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(data_transform::build_items(black_box(count))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_items);
criterion_main!(benches);
