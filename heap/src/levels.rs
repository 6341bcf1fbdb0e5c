//! Level ordered view over a heap.
//!
//! Level `L` of a heap stored in an array spans the indices `2^L - 1 ..= 2^(L + 1) - 2`, the
//! last level may be partially filled.
use std::fmt;
use std::iter::FusedIterator;

#[derive(Debug, Clone)]
pub struct Levels<'a, T> {
    items: &'a [T],
}

impl<'a, T> Levels<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// Number of non-empty levels
    pub fn len(&self) -> usize {
        (usize::BITS - self.items.len().leading_zeros()) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, level: usize) -> Option<&'a [T]> {
        self.iter().nth(level)
    }

    pub fn iter(&self) -> LevelIter<'a, T> {
        LevelIter {
            items: self.items,
            start: 0,
        }
    }

    pub fn to_vec(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.iter().map(<[T]>::to_vec).collect()
    }
}

impl<'a, T> IntoIterator for Levels<'a, T> {
    type Item = &'a [T];
    type IntoIter = LevelIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders as
/// ```text
/// Size: 3
///     1(0)
///     2(1)    5(1)
/// ```
/// with a tab before every value and each value tagged with its level.
impl<T: fmt::Display> fmt::Display for Levels<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size: {}", self.items.len())?;
        for (level, values) in self.iter().enumerate() {
            writeln!(f)?;
            for value in values {
                write!(f, "\t{value}({level})")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LevelIter<'a, T> {
    items: &'a [T],
    // index of the first element of the next level
    start: usize,
}

impl<'a, T> Iterator for LevelIter<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.items.len() {
            return None;
        }
        let end = self
            .start
            .saturating_mul(2)
            .saturating_add(1)
            .min(self.items.len());
        let level = &self.items[self.start..end];
        self.start = end;
        Some(level)
    }
}

impl<T> FusedIterator for LevelIter<'_, T> {}
