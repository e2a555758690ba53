//! Factorial table.

use std::io::Write;
use std::time::Duration;

use tracing::debug;

use crate::error::{DemoError, Result};

/// Computes `n!`.
///
/// # Errors
///
/// Returns [`DemoError::FactorialOverflow`] when `n!` does not fit in a
/// `u64` (any `n > 20`).
pub fn factorial(n: u32) -> std::result::Result<u64, DemoError> {
    (1..=u64::from(n))
        .try_fold(1u64, u64::checked_mul)
        .ok_or(DemoError::FactorialOverflow(n))
}

/// Prints `factorial of i=i!` for `i` in `0..count`, pausing `delay` after
/// each line, followed by a blank line.
///
/// # Errors
///
/// Returns an error if a factorial overflows or writing to `out` fails.
pub async fn write_factorial_table<W>(out: &mut W, count: u32, delay: Duration) -> Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "Executing the factorial program: ")?;
    for i in 0..count {
        let value = factorial(i)?;
        writeln!(out, "factorial of {i}={value}")?;
        out.flush()?;
        debug!(i, value, "factorial written");
        tokio::time::sleep(delay).await;
    }
    writeln!(out)?;
    Ok(())
}
