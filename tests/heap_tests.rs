//! Integration tests for the public heap surface.
//!
//! Covers the heap-sort property, decrease-key through handles, empty-heap
//! behavior, and handle staleness.

use binomial_heap::{BinomialHeap, HeapError};
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn int_heap() -> BinomialHeap<i32, fn(&i32, &i32) -> bool> {
    BinomialHeap::new(|a, b| a < b)
}

#[test]
fn empty_heap_is_inert() {
    let mut heap = int_heap();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.peek_handle(), None);
    assert_eq!(heap.pop(), None);
    // Still empty and still quiet after the failed queries.
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.peek(), None);
    assert!(heap.is_empty());
}

#[test]
fn basic_push_peek_pop() {
    let mut heap = BinomialHeap::new(|a: &&str, b: &&str| a < b);
    heap.push("pear");
    heap.push("apple");
    heap.push("quince");
    heap.push("fig");

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some(&"apple"));

    assert_eq!(heap.pop(), Some("apple"));
    assert_eq!(heap.pop(), Some("fig"));
    assert_eq!(heap.pop(), Some("pear"));
    assert_eq!(heap.pop(), Some("quince"));
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

#[test]
fn drains_sorted_regardless_of_insertion_order() {
    let expected = [10, 20, 30, 30, 40, 40, 40, 50];
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);

    for _ in 0..32 {
        let mut values = expected;
        values.shuffle(&mut rng);

        let mut heap = int_heap();
        for &v in &values {
            heap.push(v);
        }
        for &want in &expected {
            assert_eq!(heap.pop(), Some(want), "insertion order {values:?}");
        }
        assert_eq!(heap.pop(), None);
    }
}

#[test]
fn peek_is_idempotent() {
    let mut heap = int_heap();
    heap.push(3);
    heap.push(1);
    heap.push(2);

    let first = heap.peek().copied();
    let second = heap.peek().copied();
    assert_eq!(first, Some(1));
    assert_eq!(first, second);
    assert_eq!(heap.len(), 3);

    let handle = heap.peek_handle().unwrap();
    assert_eq!(heap.get(handle), Some(&1));
}

#[test]
fn update_after_get_mut_moves_item_to_the_top() {
    let mut heap = int_heap();
    heap.push(10);
    heap.push(20);
    let deep = heap.push(300);
    heap.push(40);
    heap.push(50);

    *heap.get_mut(deep).unwrap() = 1;
    heap.update(deep);

    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(heap.get(deep), Some(&1));

    let drained: Vec<i32> = std::iter::from_fn(|| heap.pop()).collect();
    assert_eq!(drained, vec![1, 10, 20, 40, 50]);
}

#[test]
fn decrease_makes_new_minimum_visible_immediately() {
    let mut heap = int_heap();
    let mut handles = Vec::new();
    for v in [100, 200, 300, 400, 500, 600, 700, 800] {
        handles.push(heap.push(v));
    }

    heap.decrease(handles[5], 50).unwrap();
    assert_eq!(heap.peek(), Some(&50));

    heap.decrease(handles[7], 5).unwrap();
    assert_eq!(heap.peek(), Some(&5));

    let drained: Vec<i32> = std::iter::from_fn(|| heap.pop()).collect();
    assert_eq!(drained, vec![5, 50, 100, 200, 300, 400, 500, 700]);
}

#[test]
fn handles_survive_occupant_swaps() {
    let mut heap = int_heap();
    let mut handles = Vec::new();
    for v in 0..16 {
        handles.push(heap.push(v * 10));
    }

    // Bubbling the deepest items shuffles occupants through many slots.
    heap.decrease(handles[15], -1).unwrap();
    heap.decrease(handles[8], -2).unwrap();

    assert_eq!(heap.get(handles[15]), Some(&-1));
    assert_eq!(heap.get(handles[8]), Some(&-2));
    for (i, &h) in handles.iter().enumerate().take(8).skip(1) {
        assert_eq!(heap.get(h), Some(&(i as i32 * 10)));
    }
}

#[test]
fn decrease_rejects_increases_and_leaves_state_alone() {
    let mut heap = int_heap();
    let h = heap.push(10);
    heap.push(20);

    assert_eq!(heap.decrease(h, 15), Err(HeapError::NotDecreased));
    assert_eq!(heap.get(h), Some(&10));
    assert_eq!(heap.peek(), Some(&10));

    // Equal replacement is not an increase.
    assert_eq!(heap.decrease(h, 10), Ok(()));
    assert_eq!(heap.get(h), Some(&10));
}

#[test]
fn popped_handles_go_stale() {
    let mut heap = int_heap();
    let min = heap.push(1);
    let kept = heap.push(2);

    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.get(min), None);
    assert_eq!(heap.decrease(min, 0), Err(HeapError::StaleHandle));

    // A stale update is a no-op and the survivor is untouched.
    heap.update(min);
    assert_eq!(heap.get(kept), Some(&2));
    assert_eq!(heap.pop(), Some(2));
}

#[test]
fn peek_handle_names_the_minimum() {
    let mut heap = int_heap();
    heap.push(7);
    let expected = heap.push(3);
    heap.push(5);

    assert_eq!(heap.peek_handle(), Some(expected));
    assert_eq!(heap.get(expected), heap.peek());
}

#[test]
fn max_heap_via_flipped_comparator() {
    let mut heap = BinomialHeap::new(|a: &i32, b: &i32| a > b);
    for v in [3, 1, 4, 1, 5, 9, 2, 6] {
        heap.push(v);
    }
    let drained: Vec<i32> = std::iter::from_fn(|| heap.pop()).collect();
    assert_eq!(drained, vec![9, 6, 5, 4, 3, 2, 1, 1]);
}

#[test]
fn interleaved_push_and_pop() {
    let mut heap = int_heap();
    heap.push(5);
    heap.push(3);
    assert_eq!(heap.pop(), Some(3));
    heap.push(1);
    heap.push(4);
    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), Some(4));
    heap.push(2);
    assert_eq!(heap.pop(), Some(2));
    assert_eq!(heap.pop(), Some(5));
    assert_eq!(heap.pop(), None);
}
