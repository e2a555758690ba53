//! Wall-clock ticker.
//!
//! Prints the local date and time in `ctime` layout, e.g.
//! `Thu Oct 16 09:05:03 2026`.

use std::io::Write;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::error::Result;

/// `ctime` layout: day-of-month is space padded to two columns.
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Source of the current local time.
pub trait Clock {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// The system's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDateTime,
{
    fn now(&self) -> NaiveDateTime {
        self()
    }
}

/// Formats a timestamp the way C's `ctime` does, without the trailing newline.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(CTIME_FORMAT).to_string()
}

/// Prints `ticks` timestamps, sleeping `interval` after each one.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub async fn run_clock<W, C>(out: &mut W, clock: &C, ticks: u32, interval: Duration) -> Result<()>
where
    W: Write + ?Sized,
    C: Clock + ?Sized,
{
    for tick in 0..ticks {
        writeln!(
            out,
            "Today's date and time : {}",
            format_timestamp(&clock.now())
        )?;
        out.flush()?;
        debug!(tick, "clock tick written");
        tokio::time::sleep(interval).await;
    }
    Ok(())
}
