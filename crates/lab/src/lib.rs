//! LITEC lab template program.
//!
//! This crate implements the course's template exercise for an 8051-class
//! microcontroller, decoupled from the hardware it normally runs on:
//! 1. **Lab:** Command loop, single-character command decoding, and the 8-bit counting operation.
//! 2. **Console:** Character input and CRLF text output, with an optional transcript file.
//! 3. **Simulation:** The [`SimLink`] collaborator synchronised every loop iteration, a simulated clock, and a detached no-op link.
//! 4. **Configuration:** Student details and run options, loaded from JSON.
//! 5. **Statistics:** End-of-run summary.

/// Common types and constants (command characters, limits, errors).
pub mod common;
/// Program configuration (defaults, student details, simulation settings).
pub mod config;
/// Text console over arbitrary readers and writers.
pub mod console;
/// Command loop and counting operation.
pub mod lab;
/// Simulation links (trait, simulated clock, no-op link).
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Crate error type.
pub use crate::common::LabError;
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Console type; construct with `Console::new`.
pub use crate::console::Console;
/// Command-loop type; construct with `Session::new`.
pub use crate::lab::Session;
/// Simulation link trait.
pub use crate::sim::SimLink;
