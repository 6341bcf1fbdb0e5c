pub mod error;
mod heap;
pub mod levels;

pub use heap::{Heap, IntoIterSorted};

#[cfg(test)]
mod tests;
