//! Scripted walk through the heap operations: fill, take the minimum, refill and dump.
use crate::config::cli::DemoConfig;
use fixed_heap::Heap;
use fixed_heap::error::HeapError;
use std::io::{self, Write};
use thiserror::Error;

pub const INITIAL_VALUES: [i32; 10] = [2, 1, 5, 7, 9, 8, 4, 3, 6, 7];
pub const FOLLOW_UP_VALUES: [i32; 3] = [3, 1, 4];

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("heap error {0}")]
    Heap(#[from] HeapError),
    #[error("could not write output {0}")]
    Io(#[from] io::Error),
}

/// Runs the script, printing results to `out` and rejected operations to `err`.
///
/// A value that does not fit is reported and skipped, the rest of the script still runs.
#[tracing::instrument(skip_all, fields(capacity = config.capacity.get()))]
pub fn run<O, E>(config: &DemoConfig, out: &mut O, err: &mut E) -> Result<(), DemoError>
where
    O: Write,
    E: Write,
{
    let mut heap = Heap::new(config.capacity)?;

    insert_all(&mut heap, INITIAL_VALUES, err)?;
    match heap.extract_min() {
        Ok(removed) => writeln!(out, "Removed: {removed}")?,
        Err(e) => writeln!(err, "could not extract: {e}")?,
    }
    insert_all(&mut heap, FOLLOW_UP_VALUES, err)?;

    writeln!(out, "{heap}")?;

    if config.drain {
        let extracted: Vec<String> = heap
            .into_iter_sorted()
            .map(|value| value.to_string())
            .collect();
        writeln!(out, "Extracted: {}", extracted.join(" "))?;
    }
    Ok(())
}

fn insert_all<E: Write>(
    heap: &mut Heap<i32>,
    values: impl IntoIterator<Item = i32>,
    err: &mut E,
) -> io::Result<()> {
    for value in values {
        if let Err(e) = heap.insert(value) {
            tracing::warn!(value, "Dropping value: {e}");
            writeln!(err, "could not insert {value}: {e}")?;
        }
    }
    Ok(())
}
