//! Counting operation.
//!
//! Prints an 8-bit counter once per iteration, in decimal and hexadecimal,
//! from iteration 0 up to an inclusive limit. The counter wraps from 255 to 0
//! exactly like the target's `unsigned char`.

use std::io::{Read, Write};

use tracing::debug;

use crate::common::LabResult;
use crate::common::constants::{COUNT_HEADER, CRLF};
use crate::console::Console;
use crate::lab::LabState;
use crate::sim::SimLink;

/// 8-bit wrapping counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter(u8);

impl Counter {
    /// Creates a counter holding `value`.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Current value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Sets the counter back to 0.
    pub const fn reset(&mut self) {
        self.0 = 0;
    }

    /// Adds one, wrapping at 256.
    pub const fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Formats one data line: iteration, decimal value, `0x`-prefixed upper-case hex.
pub fn format_count_line(iteration: u32, value: u8) -> String {
    format!("{iteration}\t{value}\t0x{value:X}{CRLF}")
}

/// Runs a counting operation up to `limit` inclusive.
///
/// Prints the column header, then `limit + 1` data lines. The link is
/// synchronised before every line. The counter is not reset here; callers
/// decide where a run starts.
///
/// # Errors
///
/// Propagates console write failures.
pub fn count_to<R, W, L>(
    limit: u32,
    state: &mut LabState,
    link: &mut L,
    console: &mut Console<R, W>,
) -> LabResult<()>
where
    R: Read,
    W: Write,
    L: SimLink + ?Sized,
{
    debug!(limit, start = state.counts.value(), "counting");
    console.print(COUNT_HEADER)?;
    for itr in 0..=limit {
        link.update();
        console.print(&format_count_line(itr, state.counts.value()))?;
        state.counts.increment();
    }
    debug!(limit, end = state.counts.value(), "counting done");
    Ok(())
}
