use keyed_collections::adapter::{BoundedQueue, BoundedStack, Queue, Stack};
use keyed_collections::error::Error;
use keyed_collections::sequence::{ArrayList, GrowthPolicy, Sequence, SequenceKind};
use rand::Rng;
use std::collections::VecDeque;

const KINDS: [SequenceKind; 3] = [
    SequenceKind::ArrayList,
    SequenceKind::LinkedList,
    SequenceKind::SinglyLinkedList,
];

#[test]
fn int_test_sequences_against_vec() {
    let mut rng = rand::thread_rng();
    for &kind in &KINDS {
        let mut seq = kind.build();
        let mut expected: Vec<u32> = Vec::new();

        for _ in 0..1000 {
            let len = expected.len();
            match rng.gen_range(0, 5) {
                0 => {
                    let value = rng.gen::<u32>();
                    seq.push_front(value);
                    expected.insert(0, value);
                },
                1 => {
                    let value = rng.gen::<u32>();
                    seq.push_back(value);
                    expected.push(value);
                },
                2 => {
                    let index = rng.gen_range(0, len + 1);
                    let value = rng.gen::<u32>();
                    assert_eq!(seq.insert(index, value), Ok(()));
                    expected.insert(index, value);
                },
                3 if len > 0 => {
                    let index = rng.gen_range(0, len);
                    assert_eq!(seq.remove(index), Ok(expected.remove(index)));
                },
                _ => {
                    assert_eq!(seq.pop_back(), expected.pop());
                },
            }
            assert_eq!(seq.len(), expected.len());
            assert_eq!(seq.first(), expected.first());
            assert_eq!(seq.last(), expected.last());
        }
        assert_eq!(seq.iter().cloned().collect::<Vec<u32>>(), expected);
    }
}

#[test]
fn int_test_array_list_growth_policies() {
    let mut doubling = ArrayList::with_capacity(1, GrowthPolicy::Double);
    let mut incrementing = ArrayList::with_capacity(1, GrowthPolicy::Increment);
    for i in 0..100 {
        doubling.push_back(i);
        incrementing.push_back(i);
    }
    assert_eq!(doubling.capacity(), 128);
    assert_eq!(incrementing.capacity(), 100);
    assert_eq!(doubling, incrementing);
}

#[test]
fn int_test_stack_and_queue_against_reference() {
    let mut rng = rand::thread_rng();
    for &kind in &KINDS {
        let mut stack = Stack::with_kind(kind);
        let mut queue = Queue::with_kind(kind);
        let mut expected_stack = Vec::new();
        let mut expected_queue = VecDeque::new();

        for _ in 0..500 {
            if rng.gen::<bool>() {
                let value = rng.gen::<u32>();
                stack.push(value);
                queue.enqueue(value);
                expected_stack.push(value);
                expected_queue.push_back(value);
            } else {
                assert_eq!(stack.pop(), expected_stack.pop());
                assert_eq!(queue.dequeue(), expected_queue.pop_front());
            }
            assert_eq!(stack.peek(), expected_stack.last());
            assert_eq!(queue.peek_front(), expected_queue.front());
            assert_eq!(queue.peek_back(), expected_queue.back());
        }
    }
}

#[test]
fn int_test_bounded_adapters_reject_overflow() {
    for &kind in &KINDS {
        let mut stack = BoundedStack::with_kind_and_capacity(kind, 4).unwrap();
        let mut queue = BoundedQueue::with_kind_and_capacity(kind, 4).unwrap();
        for i in 0..8 {
            let stack_result = stack.push(i);
            let queue_result = queue.enqueue(i);
            if i < 4 {
                assert_eq!(stack_result, Ok(()));
                assert_eq!(queue_result, Ok(()));
            } else {
                assert_eq!(stack_result, Err(Error::Full { capacity: 4 }));
                assert_eq!(queue_result, Err(Error::Full { capacity: 4 }));
            }
        }
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(queue.dequeue(), Some(0));
    }
}
