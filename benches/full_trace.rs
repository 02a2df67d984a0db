use block_pseudorand::block_rand;
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use sortrace::{Algorithm, SortTrace};
use std::time::Duration;

fn gen_inputs(n: usize) -> Vec<i64> {
    block_rand::<u32>(n)
        .into_iter()
        .map(|v| (v % 1_000) as i64)
        .collect()
}

fn bench_single(c: &mut Criterion, group: &str, items: usize) {
    let input = gen_inputs(items);

    let mut group = c.benchmark_group(group);
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));
    group.warm_up_time(Duration::from_secs(2));
    group.throughput(Throughput::Elements(input.len() as u64));

    for algorithm in Algorithm::ALL {
        group.bench_with_input(
            BenchmarkId::new(algorithm.id(), input.len()),
            &algorithm,
            |bench, algorithm| {
                bench.iter_batched(
                    || input.clone(),
                    |input| {
                        black_box(input.sort_trace(*algorithm));
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn full_trace(c: &mut Criterion) {
    bench_single(c, "full_trace_20", 20);
    bench_single(c, "full_trace_100", 100);
}

fn trace_all(c: &mut Criterion) {
    let input = gen_inputs(100);

    c.bench_function("trace_all_parallel_100", |b| {
        b.iter(|| black_box(input.trace_builder().with_parallel(true).trace_all()))
    });
    c.bench_function("trace_all_sequential_100", |b| {
        b.iter(|| black_box(input.trace_builder().with_parallel(false).trace_all()))
    });
}

criterion_group!(benches, full_trace, trace_all);
criterion_main!(benches);
