use criterion::{criterion_group, criterion_main, Criterion};
use keyed_collections::priority_queue::{
    Heap, Priority, PriorityQueue, SortedPriorityQueue, UnsortedPriorityQueue,
};
use rand::Rng;

const NUM_OF_OPERATIONS: usize = 1000;

fn random_keys() -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..NUM_OF_OPERATIONS).map(|_| rng.gen::<u32>()).collect()
}

fn insert_then_drain<Q>(queue: &mut Q, keys: &[u32]) -> u64
where
    Q: PriorityQueue<u32, u32>,
{
    for &key in keys {
        queue.insert(key, key);
    }
    let mut sum = 0;
    while let Some(entry) = queue.remove_priority() {
        sum += u64::from(*entry.value());
    }
    sum
}

fn bench_heap(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench heap", move |b| {
        b.iter(|| insert_then_drain(&mut Heap::new(Priority::Min), &keys))
    });
}

fn bench_sorted(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench sorted priority queue", move |b| {
        b.iter(|| insert_then_drain(&mut SortedPriorityQueue::new(Priority::Min), &keys))
    });
}

fn bench_unsorted(c: &mut Criterion) {
    let keys = random_keys();
    c.bench_function("bench unsorted priority queue", move |b| {
        b.iter(|| insert_then_drain(&mut UnsortedPriorityQueue::new(Priority::Min), &keys))
    });
}

criterion_group!(benches, bench_heap, bench_sorted, bench_unsorted);
criterion_main!(benches);
