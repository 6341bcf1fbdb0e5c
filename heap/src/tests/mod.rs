use std::num::NonZeroUsize;

use crate::Heap;


pub const SCENARIO_INITIAL: [i32; 10] = [2, 1, 5, 7, 9, 8, 4, 3, 6, 7];
pub const SCENARIO_FOLLOW_UP: [i32; 3] = [3, 1, 4];

pub fn heap_with_capacity<T: PartialOrd>(capacity: usize) -> Heap<T> {
    Heap::new(NonZeroUsize::new(capacity).unwrap()).unwrap()
}

pub fn heap_from<T: PartialOrd>(capacity: usize, values: impl IntoIterator<Item = T>) -> Heap<T> {
    let mut heap = heap_with_capacity(capacity);
    for value in values {
        heap.insert(value).unwrap();
    }
    heap
}

/// Capacity 12, the initial ten values, one extraction, then the three follow up values
pub fn scenario_heap() -> (Heap<i32>, i32) {
    let mut heap = heap_from(12, SCENARIO_INITIAL);
    let removed = heap.extract_min().unwrap();
    for value in SCENARIO_FOLLOW_UP {
        heap.insert(value).unwrap();
    }
    (heap, removed)
}

pub fn assert_heap_property<T: PartialOrd + std::fmt::Debug>(heap: &Heap<T>) {
    let items = heap.as_slice();
    for (index, item) in items.iter().enumerate() {
        for child in [2 * index + 1, 2 * index + 2] {
            if let Some(child_item) = items.get(child) {
                assert!(
                    item <= child_item,
                    "child {child_item:?} at {child} is smaller than parent {item:?} at {index}"
                );
            }
        }
    }
}
