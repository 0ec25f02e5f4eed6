//! Simulation links.
//!
//! Provides the [`SimLink`] trait and its implementations: the in-process
//! [`SimClock`], the no-op [`NoSim`] used when no simulator is attached, and
//! [`LinkDispatch`] which selects between them from configuration.

use std::time::Duration;

use tracing::debug;

use crate::common::LabResult;
use crate::config::Config;

/// Simulated system clock.
pub mod clock;

/// Simulation link trait.
pub mod traits;

pub use clock::SimClock;
pub use traits::SimLink;

/// Link used when running without a simulator; every call is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSim;

impl SimLink for NoSim {
    fn name(&self) -> &str {
        "NoSim"
    }

    fn update(&mut self) {}
}

/// Static dispatch over the links selectable at run time.
#[derive(Debug, Clone)]
pub enum LinkDispatch {
    /// Simulated clock.
    Clock(SimClock),
    /// No simulator attached.
    Detached(NoSim),
}

impl LinkDispatch {
    /// Picks the link described by `config`.
    pub fn from_config(config: &Config) -> Self {
        let link = if config.general.no_sim {
            Self::Detached(NoSim)
        } else {
            Self::Clock(SimClock::new(&config.sim))
        };
        debug!(link = link.name(), "simulation link selected");
        link
    }
}

impl SimLink for LinkDispatch {
    fn name(&self) -> &str {
        match self {
            Self::Clock(clock) => clock.name(),
            Self::Detached(none) => none.name(),
        }
    }

    fn init(&mut self) -> LabResult<()> {
        match self {
            Self::Clock(clock) => clock.init(),
            Self::Detached(none) => none.init(),
        }
    }

    fn update(&mut self) {
        match self {
            Self::Clock(clock) => clock.update(),
            Self::Detached(none) => none.update(),
        }
    }

    fn sim_time(&self) -> Option<Duration> {
        match self {
            Self::Clock(clock) => clock.sim_time(),
            Self::Detached(none) => none.sim_time(),
        }
    }
}
