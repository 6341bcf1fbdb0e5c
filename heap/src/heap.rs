use crate::error::HeapError;
use crate::levels::Levels;
use fallible_collections::FallibleVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right(index: usize) -> usize {
    2 * index + 2
}

/// A binary min-heap stored in a buffer whose capacity is fixed when the heap is created.
///
/// The smallest element always sits at index 0 and every parent is never greater than
/// either of its children. Elements are only ever compared with `<`, so any `PartialOrd`
/// type works, though values that do not compare (e.g `f32::NAN`) are never considered
/// smaller than anything and may therefore end up anywhere in the heap.
///
/// The heap never grows: once `capacity` elements are held, [`Heap::insert`] returns
/// [`HeapError::CapacityExceeded`] and leaves the heap untouched.
#[derive(Debug)]
pub struct Heap<T> {
    capacity: NonZeroUsize,
    // logical size is items.len(), storage for `capacity` items is reserved up front
    items: Vec<T>,
}

impl<T> Heap<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity.get()
    }

    /// The smallest element, without removing it.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.items.first().ok_or(HeapError::EmptyHeap)
    }

    /// Elements in heap order, i.e index `i` has children at `2i + 1` and `2i + 2`
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Groups the elements by their depth in the tree
    pub fn levels(&self) -> Levels<'_, T> {
        Levels::new(&self.items)
    }
}

impl<T: PartialOrd> Heap<T> {
    /// Creates an empty heap, reserving room for exactly `capacity` elements.
    ///
    /// The only way this fails is if the backing storage cannot be allocated, in which case
    /// [`HeapError::Allocation`] is returned instead of aborting.
    pub fn new(capacity: NonZeroUsize) -> Result<Self, HeapError> {
        let items: Vec<T> = FallibleVec::try_with_capacity(capacity.get())?;
        Ok(Self { capacity, items })
    }

    /// Adds `value` to the heap in O(log n).
    ///
    /// When the heap is already full the value is dropped and
    /// [`HeapError::CapacityExceeded`] is returned, the heap itself is not modified.
    #[tracing::instrument(skip_all)]
    pub fn insert(&mut self, value: T) -> Result<(), HeapError> {
        if self.is_full() {
            tracing::debug!(
                capacity = self.capacity.get(),
                "Rejecting insert into full heap"
            );
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity.get(),
            });
        }
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
        Ok(())
    }

    /// Removes and returns the smallest element in O(log n).
    #[tracing::instrument(skip_all)]
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.items.is_empty() {
            tracing::debug!("Rejecting extract from empty heap");
            return Err(HeapError::EmptyHeap);
        }
        // moves the last element into the root
        let min = self.items.swap_remove(0);
        if self.items.len() > 1 {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Consumes the heap, returning its elements from smallest to largest.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    pub fn into_iter_sorted(self) -> IntoIterSorted<T> {
        IntoIterSorted { inner: self }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.items[index] < self.items[parent] {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    // On equal children the left one wins since right only replaces `smallest` when it is
    // strictly smaller. A parent equal to its smallest child stays where it is.
    fn sift_down(&mut self, mut index: usize) {
        let size = self.items.len();
        loop {
            let left = left(index);
            let right = right(index);
            let mut smallest = index;

            if left < size && self.items[left] < self.items[smallest] {
                smallest = left;
            }
            if right < size && self.items[right] < self.items[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.levels(), f)
    }
}

/// Drains a [`Heap`] in ascending order, see [`Heap::into_iter_sorted`]
#[derive(Debug)]
pub struct IntoIterSorted<T> {
    inner: Heap<T>,
}

impl<T: PartialOrd> Iterator for IntoIterSorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<T: PartialOrd> ExactSizeIterator for IntoIterSorted<T> {}

impl<T: PartialOrd> FusedIterator for IntoIterSorted<T> {}

#[cfg(feature = "serde")]
#[derive(Serialize)]
struct BorrowedHeap<'a, T> {
    capacity: NonZeroUsize,
    items: &'a [T],
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct TempHeap<T> {
    capacity: NonZeroUsize,
    items: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for Heap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BorrowedHeap {
            capacity: self.capacity,
            items: &self.items,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for Heap<T>
where
    T: Deserialize<'de> + PartialOrd,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let temp = TempHeap::deserialize(deserializer)?;
        temp.into_heap().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<T: PartialOrd> TempHeap<T> {
    // Items are pushed back through `insert` so a payload can never break the heap property.
    // A payload that was already in heap order comes back with the exact same layout.
    fn into_heap(self) -> Result<Heap<T>, HeapError> {
        let mut heap = Heap::new(self.capacity)?;
        for item in self.items {
            heap.insert(item)?;
        }
        Ok(heap)
    }
}
