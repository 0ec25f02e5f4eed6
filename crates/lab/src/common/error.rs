//! Error definitions for the lab program.
//!
//! Unrecognised command input is not an error: it is reported on the console
//! and the loop continues. This module covers the failures that do stop a run:
//! 1. **Console I/O:** Reading the next command or writing output failed.
//! 2. **Configuration:** A JSON configuration was malformed or unreadable.
//! 3. **Simulation link:** The environment was initialised more than once.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the lab program and its collaborators.
#[derive(Debug, Error)]
pub enum LabError {
    /// Reading from or writing to the console (or transcript file) failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("cannot read configuration file {}: {source}", .path.display())]
    ConfigFile {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The environment initializer was invoked a second time.
    #[error("simulation environment is already initialised")]
    AlreadyInitialized,
}

/// Convenience alias for results produced by this crate.
pub type LabResult<T> = Result<T, LabError>;
