//! Lab program logic.
//!
//! This module contains the program the students extend:
//! 1. **Commands:** Decoding of the single-character commands.
//! 2. **Counting:** The 8-bit counter and the bounded counting operation.
//! 3. **Session:** The command loop that ties console, link, and state together.

/// Command decoding.
pub mod command;

/// Counter and counting operation.
pub mod counter;

/// Command loop.
pub mod session;

pub use command::Command;
pub use counter::{Counter, count_to, format_count_line};
pub use session::{Session, Step};

/// State owned by the command loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabState {
    /// 8-bit counter; reset at the start of every counting operation.
    pub counts: Counter,
    /// Completed counting operations; never reset.
    pub loops: u32,
    /// Most recently read command character.
    pub command: Option<char>,
}
