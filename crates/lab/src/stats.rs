//! Run statistics collection and reporting.
//!
//! Tracks what a session did so it can be summarised on exit:
//! 1. **Commands:** Completed counting operations and rejected inputs.
//! 2. **Output:** Data lines printed by counting operations.
//! 3. **Synchronisation:** Simulation link updates and simulated time.
//! 4. **Host time:** Wall-clock duration of the run.

use std::fmt::Write as _;
use std::time::{Duration, Instant};

/// Statistics for one session.
#[derive(Debug, Clone)]
pub struct RunStats {
    start_time: Instant,
    /// Wall-clock duration, fixed by [`RunStats::finish`].
    pub host_time: Option<Duration>,
    /// Completed counting operations.
    pub commands: u64,
    /// Characters rejected as unknown input.
    pub unknown_inputs: u64,
    /// Data lines printed by counting operations.
    pub lines: u64,
    /// Calls made to the simulation link's `update`.
    pub sim_updates: u64,
    /// Simulated time reported by the link, if it models time.
    pub sim_time: Option<Duration>,
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStats {
    /// Starts collecting; the host clock starts now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            host_time: None,
            commands: 0,
            unknown_inputs: 0,
            lines: 0,
            sim_updates: 0,
            sim_time: None,
        }
    }

    /// Records a completed counting operation of `limit + 1` lines.
    pub fn record_count(&mut self, limit: u32) {
        let lines = u64::from(limit) + 1;
        self.commands += 1;
        self.lines += lines;
        self.sim_updates += lines;
    }

    /// Stops the host clock and stores the link's simulated time.
    pub fn finish(&mut self, sim_time: Option<Duration>) {
        self.host_time = Some(self.start_time.elapsed());
        self.sim_time = sim_time;
    }

    /// Renders the summary table.
    pub fn summary(&self) -> String {
        let host = self
            .host_time
            .unwrap_or_else(|| self.start_time.elapsed())
            .as_secs_f64();
        let mut out = String::new();
        let _ = writeln!(out, "\n==========================================================");
        let _ = writeln!(out, "LAB SESSION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "host_seconds             {host:.4} s");
        let _ = writeln!(out, "commands                 {}", self.commands);
        let _ = writeln!(out, "unknown_inputs           {}", self.unknown_inputs);
        let _ = writeln!(out, "count_lines              {}", self.lines);
        let _ = writeln!(out, "sim_updates              {}", self.sim_updates);
        match self.sim_time {
            Some(t) => {
                let _ = writeln!(out, "sim_seconds              {:.6} s", t.as_secs_f64());
            }
            None => {
                let _ = writeln!(out, "sim_seconds              n/a");
            }
        }
        let _ = writeln!(out, "----------------------------------------------------------");
        out
    }

    /// Prints the summary to stderr, keeping stdout for program output.
    pub fn print(&self) {
        eprint!("{}", self.summary());
    }
}
