//! Command loop.
//!
//! Owns the program state, the console, and the simulation link. Each
//! iteration synchronises the link, prompts, reads one character, and
//! dispatches it.

use std::io::{Read, Write};

use tracing::{debug, info, warn};

use crate::common::LabResult;
use crate::common::constants::{CRLF, PROMPT};
use crate::config::StudentConfig;
use crate::console::Console;
use crate::lab::{Command, LabState, count_to};
use crate::sim::SimLink;
use crate::stats::RunStats;

/// Outcome of one command-loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Prompt again.
    Continue,
    /// The loop has ended.
    Quit,
}

/// Interactive lab session.
#[derive(Debug)]
pub struct Session<R, W, L> {
    student: StudentConfig,
    console: Console<R, W>,
    link: L,
    state: LabState,
    stats: RunStats,
}

impl<R, W, L> Session<R, W, L>
where
    R: Read,
    W: Write,
    L: SimLink,
{
    /// Creates a session. Nothing is printed and the link is not initialised yet.
    pub fn new(student: StudentConfig, console: Console<R, W>, link: L) -> Self {
        Self {
            student,
            console,
            link,
            state: LabState::default(),
            stats: RunStats::new(),
        }
    }

    /// Initialises the simulation environment and prints the startup banner.
    ///
    /// # Errors
    ///
    /// Propagates link initialisation and console failures.
    pub fn start(&mut self) -> LabResult<()> {
        self.link.init()?;
        info!(
            link = self.link.name(),
            student = %self.student.name,
            rin = self.student.rin,
            "session started"
        );
        let banner = format!(
            "Student's Name: {}{CRLF}Student's RIN:  {}{CRLF}{CRLF}\n",
            self.student.name, self.student.rin
        );
        self.console.print(&banner)
    }

    /// Runs one iteration of the command loop.
    ///
    /// End of input is treated like `'q'`.
    ///
    /// # Errors
    ///
    /// Propagates console failures.
    pub fn step(&mut self) -> LabResult<Step> {
        self.link.update();
        self.stats.sim_updates += 1;
        self.console.print(PROMPT)?;

        let Some(c) = self.console.read_command()? else {
            info!("input closed");
            return Ok(Step::Quit);
        };
        self.state.command = Some(c);

        match Command::from_char(c) {
            Command::Quit => {
                debug!("quit requested");
                Ok(Step::Quit)
            }
            Command::Count(limit) => {
                self.run_count(limit)?;
                Ok(Step::Continue)
            }
            Command::Unknown(other) => {
                warn!(input = ?other, "unknown input");
                self.stats.unknown_inputs += 1;
                self.console
                    .print(&format!("{CRLF}unknown input: {other}{CRLF}\n"))?;
                Ok(Step::Continue)
            }
        }
    }

    /// Resets the counter, counts to `limit`, and reports the completed-run total.
    ///
    /// # Errors
    ///
    /// Propagates console failures.
    pub fn run_count(&mut self, limit: u32) -> LabResult<()> {
        self.state.counts.reset();
        count_to(limit, &mut self.state, &mut self.link, &mut self.console)?;
        self.stats.record_count(limit);
        self.state.loops = self.state.loops.wrapping_add(1);
        debug!(loops = self.state.loops, "count complete");
        self.console.print(&format!(
            "Times we've counted: {}{CRLF}\n",
            self.state.loops
        ))
    }

    /// Runs the whole program: `start`, then `step` until the loop ends.
    ///
    /// # Errors
    ///
    /// Propagates link initialisation and console failures.
    pub fn run(&mut self) -> LabResult<RunStats> {
        self.start()?;
        while self.step()? == Step::Continue {}
        self.console.flush()?;
        self.stats.finish(self.link.sim_time());
        info!(
            commands = self.stats.commands,
            unknown = self.stats.unknown_inputs,
            "session finished"
        );
        Ok(self.stats.clone())
    }

    /// Program state.
    pub const fn state(&self) -> &LabState {
        &self.state
    }

    /// Statistics collected so far.
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// The simulation link.
    pub const fn link(&self) -> &L {
        &self.link
    }

    /// The console.
    pub const fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Consumes the session, returning its console and link.
    pub fn into_parts(self) -> (Console<R, W>, L) {
        (self.console, self.link)
    }
}
