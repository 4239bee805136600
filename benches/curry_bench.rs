//! Benchmark for the currying adapters.
//!
//! Measures the cost of the partial forms and the run-time checked adapter
//! relative to calling the operation directly.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use keyed::curry::{Curried, curry2};
use keyed::iterate::{map, map_with};
use keyed::object::Object;
use std::hint::black_box;

// =============================================================================
// Partial form Benchmark
// =============================================================================

fn benchmark_partial_form(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partial_form");

    for size in [100, 1_000, 10_000] {
        let object: Object<u64, u64> = (0..size).map(|index| (index, index)).collect();

        group.bench_with_input(BenchmarkId::new("full", size), &size, |bencher, _| {
            bencher.iter(|| black_box(map(|value, _| value + 1, black_box(&object))));
        });

        let increment = map_with(|value: &u64, _: &u64| value + 1);
        group.bench_with_input(BenchmarkId::new("partial", size), &size, |bencher, _| {
            bencher.iter(|| black_box(increment(black_box(&object))));
        });
    }

    group.finish();
}

// =============================================================================
// Adapter overhead Benchmark
// =============================================================================

fn benchmark_adapter_overhead(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("adapter_overhead");

    group.bench_function("direct", |bencher| {
        let add = |first: u64, second: u64| first + second;
        bencher.iter(|| black_box(add(black_box(20), black_box(22))));
    });

    group.bench_function("curry2_bind", |bencher| {
        let add_twenty = curry2(|first: u64, second: u64| first + second).bind(20);
        bencher.iter(|| black_box(add_twenty(black_box(22))));
    });

    group.bench_function("runtime_full", |bencher| {
        let add = Curried::binary("add", |first: u64, second: u64| first + second);
        bencher.iter(|| black_box(add.invoke(vec![black_box(20), black_box(22)])));
    });

    group.bench_function("runtime_deferred", |bencher| {
        let add = Curried::binary("add", |first: u64, second: u64| first + second);
        bencher.iter(|| {
            let deferred = add.invoke(vec![black_box(20)]).ok().and_then(|application| application.deferred());
            black_box(deferred.map(|add_twenty| add_twenty.invoke(vec![black_box(22)])))
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_partial_form, benchmark_adapter_overhead);
criterion_main!(benches);
