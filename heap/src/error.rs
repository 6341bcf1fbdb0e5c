use fallible_collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum HeapError {
    #[error("heap is full, capacity is {capacity}")]
    CapacityExceeded { capacity: usize },
    #[error("heap is empty")]
    EmptyHeap,
    #[error("allocation error {0:?}")]
    Allocation(TryReserveError),
}

impl From<TryReserveError> for HeapError {
    fn from(input: TryReserveError) -> Self {
        Self::Allocation(input)
    }
}
