//! Criterion micro-benchmarks for the fixed-capacity containers.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use paver_collections::{MinHeap, OpenMap, OpenSet, RingQueue};
use paver_core::TileIndex;

const N: usize = 4096;

/// Deterministic, well-spread tile indices.
fn indices() -> Vec<TileIndex> {
    (0..N as u64)
        .map(|i| TileIndex((i.wrapping_mul(2862933555777941757) % 1_000_000) as u32))
        .collect()
}

/// Benchmark: Fill a 4K map to 75% load, read every key back, clear.
fn bench_map_fill_get_clear(c: &mut Criterion) {
    let keys = indices();
    let live = N * 3 / 4;
    let mut map: OpenMap<TileIndex, u32> = OpenMap::new(N);

    c.bench_function("map_fill_get_clear_4k", |b| {
        b.iter(|| {
            for (n, &k) in keys[..live].iter().enumerate() {
                *map.set(k) = n as u32;
            }
            for k in &keys[..live] {
                black_box(map.get(k));
            }
            map.clear();
        });
    });
}

/// Benchmark: Fill a 4K map then remove every other key (backward shift).
fn bench_map_remove(c: &mut Criterion) {
    let keys = indices();
    let live = N * 3 / 4;
    let mut map: OpenMap<TileIndex, u32> = OpenMap::new(N);

    c.bench_function("map_remove_half_4k", |b| {
        b.iter(|| {
            for &k in &keys[..live] {
                map.insert(k, 0);
            }
            for k in keys[..live].iter().step_by(2) {
                black_box(map.remove(k));
            }
            map.clear();
        });
    });
}

/// Benchmark: Insert into and look up a 4K set.
fn bench_set_insert_contains(c: &mut Criterion) {
    let keys = indices();
    let mut set: OpenSet<TileIndex> = OpenSet::new(N);

    c.bench_function("set_insert_contains_4k", |b| {
        b.iter(|| {
            for &k in &keys[..N / 2] {
                set.insert(k);
            }
            for k in &keys {
                black_box(set.contains(k));
            }
            set.clear();
        });
    });
}

/// Benchmark: Push 4K keys in scrambled order, pop them all.
fn bench_heap_push_pop(c: &mut Criterion) {
    let keys: Vec<f32> = (0..N as u64)
        .map(|i| (i.wrapping_mul(6364136223846793007) % 10_000) as f32 * 0.5)
        .collect();
    let mut heap: MinHeap<usize> = MinHeap::new(N);

    c.bench_function("heap_push_pop_4k", |b| {
        b.iter(|| {
            for (n, &key) in keys.iter().enumerate() {
                *heap.push(key) = n;
            }
            while let Some(entry) = heap.take() {
                black_box(entry);
            }
        });
    });
}

/// Benchmark: Cycle 4K values through a ring from both ends.
fn bench_ring_cycle(c: &mut Criterion) {
    let mut ring: RingQueue<u64> = RingQueue::new(257);

    c.bench_function("ring_cycle_4k", |b| {
        b.iter(|| {
            for i in 0..N as u64 {
                if ring.is_full() {
                    black_box(ring.take_front());
                }
                if i % 2 == 0 {
                    *ring.push_back() = i;
                } else {
                    *ring.push_front() = i;
                }
            }
            ring.clear();
        });
    });
}

criterion_group!(
    benches,
    bench_map_fill_get_clear,
    bench_map_remove,
    bench_set_insert_contains,
    bench_heap_push_pop,
    bench_ring_cycle
);
criterion_main!(benches);
