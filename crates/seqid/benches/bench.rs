use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use seqid::{BasicSeqGenerator, LockSeqGenerator, SeqGenerator, SeqId, compare};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

/// Counts fresh IDs with no recycling.
fn bench_counting<G: SeqGenerator>(c: &mut Criterion, group_name: &str) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("count/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                let generator = G::new();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_id());
                }
            }
            start.elapsed()
        });
    });

    group.bench_function(format!("count_into/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let mut buf = Vec::with_capacity(TOTAL_IDS * 3);
            let start = Instant::now();
            for _ in 0..iters {
                let generator = G::new();
                buf.clear();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_id_into(&mut buf));
                }
            }
            start.elapsed()
        });
    });

    group.finish();
}

/// Allocates and frees in a tight loop so every other call hits the free list.
fn bench_churn<G: SeqGenerator>(c: &mut Criterion, group_name: &str, live: usize) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("churn/live={live}"), |b| {
        b.iter_custom(|iters| {
            let generator = G::new();
            let held: Vec<SeqId> = (0..live).map(|_| generator.next_id()).collect();
            for id in &held {
                generator.free_id(id).unwrap();
            }

            let start = Instant::now();
            for _ in 0..iters {
                for _ in 0..TOTAL_IDS {
                    let id = generator.next_id();
                    generator.free_id(black_box(&id)).unwrap();
                }
            }
            start.elapsed()
        });
    });

    group.finish();
}

/// Many threads hammering one shared generator.
fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("lock/contended");
    for threads in [1, 2, 4, 8, num_cpus::get()] {
        group.throughput(Throughput::Elements((TOTAL_IDS * threads) as u64));
        group.bench_function(format!("threads/{threads}"), |b| {
            b.iter_custom(|iters| {
                let generator = LockSeqGenerator::new();
                let barrier = Arc::new(Barrier::new(threads + 1));
                let start = scope(|s| {
                    for _ in 0..threads {
                        let generator = generator.clone();
                        let barrier = Arc::clone(&barrier);
                        s.spawn(move || {
                            barrier.wait();
                            for _ in 0..iters {
                                for _ in 0..TOTAL_IDS {
                                    black_box(generator.next_id());
                                }
                            }
                        });
                    }
                    barrier.wait();
                    Instant::now()
                });
                start.elapsed()
            });
        });
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    let pairs: [(&[u8], &[u8]); 3] = [
        (b"z", b"aa"),
        (b"abcdefgh", b"abcdefgZ"),
        (b"Zabcdefg", b"aabcdefg"),
    ];
    for (x, y) in pairs {
        let name = format!("{}_vs_{}", x.escape_ascii(), y.escape_ascii());
        group.bench_function(name, |b| b.iter(|| compare(black_box(x), black_box(y))));
    }
    group.finish();
}

fn benches(c: &mut Criterion) {
    bench_counting::<BasicSeqGenerator>(c, "basic");
    bench_counting::<LockSeqGenerator>(c, "lock");
    bench_churn::<BasicSeqGenerator>(c, "basic", 64);
    bench_churn::<LockSeqGenerator>(c, "lock", 64);
    bench_contended(c);
    bench_compare(c);
}

criterion_group!(group, benches);
criterion_main!(group);
