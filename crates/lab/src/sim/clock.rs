//! Simulated system clock.
//!
//! Models the passage of time on the C8051 board. Each synchronisation
//! advances the clock by a fixed number of system-clock cycles, so simulated
//! time is proportional to how much work the program has done rather than to
//! host wall-clock time.

use std::time::Duration;

use tracing::{info, trace};

use crate::common::{LabError, LabResult};
use crate::config::SimConfig;
use crate::sim::SimLink;

/// Nanoseconds per second.
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// In-process simulated clock.
#[derive(Debug, Clone)]
pub struct SimClock {
    /// System clock frequency in Hz (never zero).
    sysclk_hz: u64,
    /// Cycles added per `update`.
    cycles_per_update: u64,
    /// Total cycles elapsed since `init`.
    cycles: u64,
    /// Number of `update` calls since `init`.
    updates: u64,
    /// Set once `init` has run.
    initialized: bool,
}

impl SimClock {
    /// Creates a clock from the simulation settings.
    ///
    /// A zero clock frequency is treated as 1 Hz.
    pub const fn new(config: &SimConfig) -> Self {
        Self {
            sysclk_hz: if config.sysclk_hz == 0 {
                1
            } else {
                config.sysclk_hz
            },
            cycles_per_update: config.cycles_per_update,
            cycles: 0,
            updates: 0,
            initialized: false,
        }
    }

    /// Total system-clock cycles elapsed.
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Number of synchronisations performed.
    pub const fn updates(&self) -> u64 {
        self.updates
    }

    /// Whether `init` has been called.
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Simulated elapsed time, truncated to whole nanoseconds.
    pub fn elapsed(&self) -> Duration {
        let nanos = u128::from(self.cycles) * NANOS_PER_SEC / u128::from(self.sysclk_hz);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

impl SimLink for SimClock {
    fn name(&self) -> &str {
        "SimClock"
    }

    /// Resets the clock. A second call fails with [`LabError::AlreadyInitialized`].
    fn init(&mut self) -> LabResult<()> {
        if self.initialized {
            return Err(LabError::AlreadyInitialized);
        }
        self.cycles = 0;
        self.updates = 0;
        self.initialized = true;
        info!(
            sysclk_hz = self.sysclk_hz,
            cycles_per_update = self.cycles_per_update,
            "simulated clock initialised"
        );
        Ok(())
    }

    fn update(&mut self) {
        self.updates += 1;
        self.cycles = self.cycles.saturating_add(self.cycles_per_update);
        trace!(update = self.updates, cycles = self.cycles, "sim update");
    }

    fn sim_time(&self) -> Option<Duration> {
        Some(self.elapsed())
    }
}
