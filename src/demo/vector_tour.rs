//! Walkthrough of common `Vec` operations.
//!
//! Pushes a sentence word by word into a vector reserved for exactly that
//! many words, prints it with its size/max-size/capacity, swaps two words,
//! inserts one more, prints again, then clears.

use std::io::Write;

use tracing::debug;

use crate::error::Result;

use super::write_heading;

/// Words pushed at the start of the tour.
pub const DEFAULT_WORDS: [&str; 7] = ["This", "is", "a", "Rust", "example", "Vec", "program"];

/// Word inserted before [`INSERT_BEFORE`].
pub const INSERTED_WORD: &str = "demo";

/// Anchor word for the insertion; missing anchor means append.
pub const INSERT_BEFORE: &str = "program";

/// Indices swapped during the tour.
pub const SWAP: (usize, usize) = (4, 5);

/// Size figures for a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VecStats {
    /// Number of elements.
    pub size: usize,
    /// Largest element count the allocator could ever address.
    pub max_size: usize,
    /// Allocated slots.
    pub capacity: usize,
}

impl VecStats {
    /// Captures the stats of `v`.
    pub fn of<T>(v: &Vec<T>) -> Self {
        Self {
            size: v.len(),
            max_size: max_size::<T>(),
            capacity: v.capacity(),
        }
    }

    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "size:     {}", self.size)?;
        writeln!(out, "maxsize:  {}", self.max_size)?;
        writeln!(out, "capacity: {}", self.capacity)
    }
}

/// Allocations are capped at `isize::MAX` bytes.
fn max_size<T>() -> usize {
    isize::MAX.unsigned_abs() / std::mem::size_of::<T>().max(1)
}

fn write_words<W: Write + ?Sized>(out: &mut W, words: &[String]) -> std::io::Result<()> {
    for word in words {
        write!(out, "{word} ")?;
    }
    writeln!(out)
}

/// Runs the tour over `words`.
///
/// The swap is skipped when the vector is too short to hold both indices.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_vector_tour<W: Write + ?Sized>(out: &mut W, words: &[&str]) -> Result<()> {
    let mut words_vec: Vec<String> = Vec::with_capacity(words.len());
    words_vec.extend(words.iter().map(ToString::to_string));

    write_heading(out, "Executing the Vec operations:")?;

    writeln!(out, "Vector elements:")?;
    write_words(out, &words_vec)?;
    writeln!(out)?;

    writeln!(out, "Vector statistics:")?;
    VecStats::of(&words_vec).write_to(out)?;

    writeln!(out)?;
    writeln!(
        out,
        "Vector elements after swapping the {}th and {}th elements:",
        SWAP.0, SWAP.1
    )?;
    if words_vec.len() > SWAP.1 {
        words_vec.swap(SWAP.0, SWAP.1);
    } else {
        debug!(len = words_vec.len(), "vector too short to swap");
    }
    write_words(out, &words_vec)?;
    writeln!(out)?;

    let at = words_vec
        .iter()
        .position(|w| w == INSERT_BEFORE)
        .unwrap_or(words_vec.len());
    words_vec.insert(at, INSERTED_WORD.to_string());

    writeln!(out, "Vector elements after inserting the new elements:")?;
    write_words(out, &words_vec)?;
    writeln!(out)?;

    writeln!(out, "Vector statistics with new elements:")?;
    VecStats::of(&words_vec).write_to(out)?;

    words_vec.clear();
    debug!(capacity = words_vec.capacity(), "vector cleared");
    Ok(())
}
