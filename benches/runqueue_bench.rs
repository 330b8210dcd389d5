//! Runqueue scenario benchmarks
//!
//! 1   growing runqueue (enqueue n processes)
//! 2.1 shrinking runqueue (dequeue once)
//! 2.2 shrinking runqueue (dequeue half)
//! 3   preceding time of a late arrival

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use runqueue::{Runqueue, RunqueueKind};

const SIZES: [usize; 4] = [50, 500, 1_000, 2_500];
const LATE_ARRIVAL: &str = "P99999";

/// Labels P0..P9999 (collisions allowed), vt 1..=100.
fn workload(n: usize) -> Vec<(String, u64)> {
    let mut rng = StdRng::seed_from_u64(n as u64);
    (0..n)
        .map(|_| {
            let label = format!("P{}", rng.random_range(0..10_000));
            let vt = rng.random_range(1..=100);
            (label, vt)
        })
        .collect()
}

fn filled(kind: RunqueueKind, procs: &[(String, u64)]) -> Box<dyn Runqueue> {
    let mut queue = kind.build();
    for (label, vt) in procs {
        queue.enqueue(label, *vt);
    }
    queue
}

fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenario_1_enqueue");
    for n in SIZES {
        let procs = workload(n);
        for kind in RunqueueKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), n), &procs, |b, procs| {
                b.iter(|| black_box(filled(kind, procs)));
            });
        }
    }
    group.finish();
}

fn bench_dequeue_once(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenario_2_1_dequeue_once");
    for n in SIZES {
        let procs = workload(n);
        for kind in RunqueueKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), n), &procs, |b, procs| {
                b.iter_batched(
                    || filled(kind, procs),
                    |mut queue| black_box(queue.dequeue()),
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_dequeue_half(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenario_2_2_dequeue_half");
    for n in SIZES {
        let procs = workload(n);
        for kind in RunqueueKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), n), &procs, |b, procs| {
                b.iter_batched(
                    || filled(kind, procs),
                    |mut queue| {
                        for _ in 0..n / 2 {
                            black_box(queue.dequeue());
                        }
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_preceding_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenario_3_preceding_time");
    for n in SIZES {
        let procs = workload(n);
        for kind in RunqueueKind::ALL {
            let mut queue = filled(kind, &procs);
            queue.enqueue(LATE_ARRIVAL, 150);
            group.bench_function(BenchmarkId::new(kind.name(), n), |b| {
                b.iter(|| black_box(queue.preceding_process_time(black_box(LATE_ARRIVAL))));
            });
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_enqueue,
    bench_dequeue_once,
    bench_dequeue_half,
    bench_preceding_time
);
criterion_main!(benches);
