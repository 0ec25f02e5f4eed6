//! Configuration for the lab program.
//!
//! This module replaces the template's compile-time switches with a runtime
//! configuration. It provides:
//! 1. **Defaults:** Placeholder student details and simulated-clock parameters.
//! 2. **Structures:** Student identity, general run options, and simulation settings.
//! 3. **Loading:** JSON parsing from a string or a file.
//!
//! Use `Config::default()` when no file is supplied; the CLI overlays its flags on top.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::{LabError, LabResult};

/// Default configuration values.
mod defaults {
    /// Name placeholder shipped with the template.
    pub const STUDENT_NAME: &str = "REPLACE_WITH_YOUR_NAME";

    /// RIN placeholder.
    pub const RIN: u32 = 0;

    /// System clock of the simulated C8051 (22.1184 MHz).
    pub const SYSCLK_HZ: u64 = crate::common::SYSCLK_HZ;

    /// System-clock cycles the simulated model advances per synchronisation.
    ///
    /// Roughly the cost of one iteration of the template's loops including
    /// the `printf` call on real hardware.
    pub const CYCLES_PER_UPDATE: u64 = 1000;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use litec_lab::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.student.name, "REPLACE_WITH_YOUR_NAME");
/// assert!(!config.general.no_sim);
/// ```
///
/// Sections and fields that are missing from JSON fall back to their defaults:
///
/// ```
/// use litec_lab::config::Config;
///
/// let json = r#"{
///     "student": { "name": "Ada Lovelace", "rin": 661234567 },
///     "sim": { "cycles_per_update": 250 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.student.rin, 661234567);
/// assert_eq!(config.sim.cycles_per_update, 250);
/// assert_eq!(config.sim.sysclk_hz, 22_118_400);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Details printed in the startup banner
    pub student: StudentConfig,
    /// Run options
    pub general: GeneralConfig,
    /// Simulated clock parameters
    pub sim: SimConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Config`] if the document is not valid JSON or
    /// contains unknown or mistyped fields.
    pub fn from_json_str(json: &str) -> LabResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::ConfigFile`] if the file cannot be read and
    /// [`LabError::Config`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> LabResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LabError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// Identity of the student running the lab.
///
/// Both values only appear in the startup banner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudentConfig {
    /// Display name
    pub name: String,
    /// Numeric identifier (RIN)
    pub rin: u32,
}

impl Default for StudentConfig {
    fn default() -> Self {
        Self {
            name: defaults::STUDENT_NAME.to_string(),
            rin: defaults::RIN,
        }
    }
}

/// General run options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// Run without a simulator: synchronisation becomes a no-op.
    pub no_sim: bool,

    /// Mirror all console output into this file.
    pub print_to_file: Option<PathBuf>,
}

/// Parameters of the in-process simulated clock.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// System clock frequency in Hz.
    pub sysclk_hz: u64,

    /// Clock cycles the model advances on every synchronisation.
    pub cycles_per_update: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            sysclk_hz: defaults::SYSCLK_HZ,
            cycles_per_update: defaults::CYCLES_PER_UPDATE,
        }
    }
}
