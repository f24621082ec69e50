//! Range summation and filter-map-reduce benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use microbench_bench::maybe_pin_thread;
use microbench_kernels::{map_filter, sum_range};

fn bench_sum_range(c: &mut Criterion) {
    maybe_pin_thread();
    let bounds: &[i64] = &[1_000, 100_000, sum_range::RANGE_END];
    let mut group = c.benchmark_group("sum_range");

    for &end in bounds {
        group.throughput(Throughput::Elements(end as u64));
        group.bench_with_input(BenchmarkId::from_parameter(end), &end, |b, &end| {
            b.iter(|| sum_range::sum_range(black_box(end)));
        });
    }
    group.finish();
}

fn bench_odd_square_sum(c: &mut Criterion) {
    let takes: &[usize] = &[100, 1_000, map_filter::TAKE];
    let mut group = c.benchmark_group("odd_square_sum");

    for &take in takes {
        group.throughput(Throughput::Elements(take as u64));
        group.bench_with_input(BenchmarkId::from_parameter(take), &take, |b, &take| {
            b.iter(|| {
                map_filter::odd_square_sum(black_box(map_filter::SCAN_LIMIT), black_box(take))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sum_range, bench_odd_square_sum);
criterion_main!(benches);
