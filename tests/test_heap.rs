use keyed_collections::priority_queue::{
    Heap, Priority, PriorityQueue, SortedPriorityQueue, UnsortedPriorityQueue,
};
use rand::Rng;
use simplelog::{Config, LevelFilter, TestLogger};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn assert_heap_order(heap: &Heap<u32, u32>) {
    let entries: Vec<_> = heap.iter().collect();
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.index(), i);
        if i > 0 {
            let parent = entries[(i - 1) / 2];
            assert!(!heap.priority().has_priority(entry.key(), parent.key()));
        }
    }
}

#[test]
fn int_test_min_heap_against_binary_heap() {
    init_logger();
    let mut rng = rand::thread_rng();
    let mut heap = Heap::min();
    let mut expected = BinaryHeap::new();

    for _ in 0..2000 {
        if rng.gen_range(0, 3) == 0 {
            let actual = heap.remove_priority().map(|entry| *entry.key());
            assert_eq!(actual, expected.pop().map(|Reverse(key)| key));
        } else {
            let key = rng.gen_range(0, 100);
            heap.insert(key, key);
            expected.push(Reverse(key));
        }
        assert_eq!(heap.len(), expected.len());
        assert_eq!(
            heap.get_priority().map(|entry| *entry.key()),
            expected.peek().map(|Reverse(key)| *key),
        );
    }
    assert_heap_order(&heap);
}

#[test]
fn int_test_max_heap_against_binary_heap() {
    let mut rng = rand::thread_rng();
    let mut heap = Heap::max();
    let mut expected = BinaryHeap::new();

    for _ in 0..2000 {
        if rng.gen_range(0, 3) == 0 {
            let actual = heap.remove_priority().map(|entry| *entry.key());
            assert_eq!(actual, expected.pop());
        } else {
            let key = rng.gen::<u32>();
            heap.insert(key, key);
            expected.push(key);
        }
        assert_heap_order(&heap);
    }
    assert_eq!(heap.len(), expected.len());
}

#[test]
fn int_test_size_consistency() {
    let mut rng = rand::thread_rng();
    let mut heap = Heap::new(Priority::Min);
    let mut inserted = 0;
    let mut removed = 0;

    for _ in 0..1000 {
        if rng.gen::<bool>() && !heap.is_empty() {
            heap.remove_priority();
            removed += 1;
        } else {
            heap.insert(rng.gen::<u32>(), 0);
            inserted += 1;
        }
        assert_eq!(heap.len(), inserted - removed);
    }
}

#[test]
fn int_test_heap_sort_with_duplicates() {
    let mut rng = rand::thread_rng();
    let mut heap = Heap::min();
    let mut expected = Vec::new();
    for value in 0..500 {
        let key = rng.gen_range(0, 20);
        heap.insert(key, value);
        expected.push((key, value));
    }

    let mut actual = Vec::new();
    while let Some(entry) = heap.remove_priority() {
        actual.push(entry.into_parts());
    }

    let keys: Vec<u32> = actual.iter().map(|pair| pair.0).collect();
    let mut sorted_keys = keys.clone();
    sorted_keys.sort();
    assert_eq!(keys, sorted_keys);

    actual.sort();
    expected.sort();
    assert_eq!(actual, expected);
}

#[test]
fn int_test_variants_extract_same_keys() {
    let mut rng = rand::thread_rng();
    for &priority in &[Priority::Min, Priority::Max] {
        let mut queues: Vec<Box<dyn PriorityQueue<u32, u32>>> = vec![
            Box::new(Heap::new(priority)),
            Box::new(SortedPriorityQueue::new(priority)),
            Box::new(UnsortedPriorityQueue::new(priority)),
        ];
        for _ in 0..300 {
            let key = rng.gen_range(0, 50);
            for queue in &mut queues {
                queue.insert(key, key);
            }
        }

        let mut drained: Vec<Vec<u32>> = Vec::new();
        for queue in &mut queues {
            let mut keys = Vec::new();
            while let Some(entry) = queue.remove_priority() {
                keys.push(*entry.key());
            }
            drained.push(keys);
        }
        assert_eq!(drained[0], drained[1]);
        assert_eq!(drained[1], drained[2]);
    }
}
