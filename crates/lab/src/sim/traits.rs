//! Simulation link trait.
//!
//! The lab program never touches hardware directly. Everything it needs from
//! the (simulated) microcontroller environment goes through [`SimLink`]:
//! 1. **Initialisation:** One-time environment setup before the command loop.
//! 2. **Synchronisation:** A per-iteration call that keeps the simulated model
//!    advancing in step with program logic.
//! 3. **Reporting:** Optional simulated elapsed time for the end-of-run summary.

use std::time::Duration;

use crate::common::LabResult;

/// Collaborator that keeps a simulated hardware model in step with the program.
///
/// `update` must be called once per iteration of every loop the program runs,
/// including each step of a counting operation. Skipping it desynchronises
/// the simulated environment.
pub trait SimLink {
    /// Returns a short name for this link (e.g., `"SimClock"`).
    fn name(&self) -> &str;

    /// Sets up the environment. Called exactly once, before the first `update`.
    ///
    /// # Errors
    ///
    /// Implementations may reject repeated initialisation.
    fn init(&mut self) -> LabResult<()> {
        Ok(())
    }

    /// Advances the simulated model by one step.
    fn update(&mut self);

    /// Simulated time elapsed since `init`, if the link models time.
    fn sim_time(&self) -> Option<Duration> {
        None
    }
}
