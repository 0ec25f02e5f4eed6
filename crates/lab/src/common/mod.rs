//! Common types and constants shared by the lab program.
//!
//! This module provides:
//! 1. **Constants:** Command characters, counting limits, console text, and clock rate.
//! 2. **Error Handling:** The crate error type and result alias.

/// Program-wide constants.
pub mod constants;

/// Error types.
pub mod error;

pub use constants::{CRLF, LONG_COUNT_LIMIT, SHORT_COUNT_LIMIT, SYSCLK_HZ};
pub use error::{LabError, LabResult};
