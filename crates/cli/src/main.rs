//! LITEC lab template CLI.
//!
//! Runs the template program against the real terminal. It performs:
//! 1. **Configuration:** Load an optional JSON config and overlay command-line flags.
//! 2. **Logging:** Install a `tracing` subscriber on stderr (`RUST_LOG` overrides `-v`).
//! 3. **Run:** Wire stdin/stdout and the selected simulation link into a session, then print statistics.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use litec_lab::config::Config;
use litec_lab::console::Console;
use litec_lab::lab::Session;
use litec_lab::sim::LinkDispatch;
use litec_lab::{LabError, common::LabResult};

#[derive(Parser, Debug)]
#[command(
    name = "lab",
    author,
    version,
    about = "LITEC 8051 lab template program",
    long_about = "Interactive counting program synchronised with a simulated C8051.\n\nPress '1' to count to 30, '2' to count to 300, 'q' to quit.\n\nExamples:\n  lab --name \"Ada Lovelace\" --rin 661234567\n  lab --config lab.json --print-to-file run.csv\n  lab --no-sim"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Student name shown at startup.
    #[arg(long)]
    name: Option<String>,

    /// Student RIN shown at startup.
    #[arg(long)]
    rin: Option<u32>,

    /// Run without a simulator connection.
    #[arg(long)]
    no_sim: bool,

    /// Also write all program output to this file.
    #[arg(long, value_name = "FILE")]
    print_to_file: Option<PathBuf>,

    /// Clock cycles the simulated board advances per synchronisation.
    #[arg(long, value_name = "N")]
    cycles_per_update: Option<u64>,

    /// Show statistics on exit.
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Loads the configuration file (if any) and applies flag overrides.
    fn resolve_config(&self) -> LabResult<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(name) = &self.name {
            config.student.name.clone_from(name);
        }
        if let Some(rin) = self.rin {
            config.student.rin = rin;
        }
        if self.no_sim {
            config.general.no_sim = true;
        }
        if let Some(path) = &self.print_to_file {
            config.general.print_to_file = Some(path.clone());
        }
        if let Some(cycles) = self.cycles_per_update {
            config.sim.cycles_per_update = cycles;
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Builds and runs the session against the process's stdin and stdout.
fn run(cli: &Cli) -> Result<(), LabError> {
    let config = cli.resolve_config()?;

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    if let Some(path) = &config.general.print_to_file {
        console = console.with_transcript(path)?;
    }
    let link = LinkDispatch::from_config(&config);

    let mut session = Session::new(config.student.clone(), console, link);
    let stats = session.run()?;
    if cli.stats {
        stats.print();
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "lab program failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
