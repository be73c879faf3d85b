//! Container throughput benchmarks
//!
//! Measures:
//! - Push/pop cost on array-backed containers across growth
//! - Insert/lookup/remove on open-addressed Set and HashMap
//! - Heap push/pop ordering cost

use ark_collections::{Deque, HashMap, Heap, LinkedList, Queue, Set, Stack, Value};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [usize; 3] = [16, 1_000, 10_000];

// ============================================================================
// Sequential containers
// ============================================================================

fn bench_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequences");
    for &size in &SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("stack_push_pop", size), &size, |b, &n| {
            b.iter(|| {
                let mut stack = Stack::new();
                for i in 0..n {
                    stack.push(i);
                }
                while let Some(item) = stack.pop() {
                    black_box(item);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("queue_cycle", size), &size, |b, &n| {
            b.iter(|| {
                let mut queue = Queue::new();
                for i in 0..n {
                    queue.enqueue(i);
                    if i % 2 == 0 {
                        black_box(queue.dequeue());
                    }
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("deque_both_ends", size), &size, |b, &n| {
            b.iter(|| {
                let mut deque = Deque::new();
                for i in 0..n {
                    if i % 2 == 0 {
                        deque.push_front(i);
                    } else {
                        deque.push_back(i);
                    }
                }
                while let Some(item) = deque.pop_back() {
                    black_box(item);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("list_add_remove", size), &size, |b, &n| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..n {
                    list.add_last(i);
                }
                while let Some(item) = list.remove_first() {
                    black_box(item);
                }
            })
        });
    }
    group.finish();
}

// ============================================================================
// Hash containers
// ============================================================================

fn bench_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashing");
    for &size in &SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("set_add_contains", size), &size, |b, &n| {
            b.iter(|| {
                let mut set = Set::new();
                for i in 0..n {
                    set.add(i);
                }
                for i in 0..n {
                    black_box(set.contains(&i));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("map_value_keys", size), &size, |b, &n| {
            let keys: Vec<Value> = (0..n).map(|i| Value::string(format!("key{}", i))).collect();
            b.iter(|| {
                let mut map = HashMap::new();
                for (i, key) in keys.iter().enumerate() {
                    map.put(key.clone(), i);
                }
                for key in keys.iter().step_by(2) {
                    black_box(map.remove(key));
                }
            })
        });
    }
    group.finish();
}

// ============================================================================
// Heap
// ============================================================================

fn bench_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap");
    for &size in &SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("heap_sort", size), &size, |b, &n| {
            b.iter(|| {
                let mut heap = Heap::new();
                for i in 0..n {
                    heap.push((i * 7919) % n);
                }
                black_box(heap.into_sorted_vec())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sequences, bench_hashing, bench_heap);
criterion_main!(benches);
