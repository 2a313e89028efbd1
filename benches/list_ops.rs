//! Benchmarks for the list's contractual cost split.
//!
//! The ends are O(1), the middle is O(n); these groups make the split
//! visible so a regression to all-linear behavior shows up.

use std::hint::black_box;

use blocklist::{BlockList, MemoryBlock};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn bench_end_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_ops");

    group.bench_function("push_back_pop_front", |b| {
        let mut list = BlockList::with_capacity(1024);
        b.iter(|| {
            list.push_back(black_box(MemoryBlock::new(4096, 64)));
            black_box(list.pop_front())
        });
    });

    group.bench_function("push_front_pop_front", |b| {
        let mut list = BlockList::with_capacity(1024);
        b.iter(|| {
            list.push_front(black_box(MemoryBlock::new(4096, 64)));
            black_box(list.pop_front())
        });
    });

    group.finish();
}

fn bench_mid_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("mid_ops");

    for n in [64usize, 1024] {
        group.bench_function(BenchmarkId::new("insert_remove_mid", n), |b| {
            let mut list = BlockList::with_capacity(n + 1);
            for i in 0..n {
                list.push_back(MemoryBlock::new(i * 64, 64));
            }
            let mid = n / 2;
            b.iter(|| {
                list.insert_at(black_box(mid), MemoryBlock::new(0, 1))
                    .unwrap();
                black_box(list.remove_at(black_box(mid)).unwrap())
            });
        });

        group.bench_function(BenchmarkId::new("push_pop_back", n), |b| {
            let mut list = BlockList::with_capacity(n + 1);
            for i in 0..n {
                list.push_back(MemoryBlock::new(i * 64, 64));
            }
            b.iter(|| {
                list.push_back(black_box(MemoryBlock::new(4096, 64)));
                black_box(list.pop_back())
            });
        });
    }

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for n in [64usize, 1024] {
        group.bench_function(BenchmarkId::new("iter_sum", n), |b| {
            let mut list = BlockList::with_capacity(n);
            for i in 0..n {
                list.push_back(MemoryBlock::new(i * 64, 64));
            }
            b.iter(|| black_box(list.iter().map(|blk| blk.length).sum::<usize>()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_end_ops, bench_mid_ops, bench_traversal);
criterion_main!(benches);
