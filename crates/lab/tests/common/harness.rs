use crate::common::mocks::RecordingLink;
use litec_lab::config::StudentConfig;
use litec_lab::console::Console;
use litec_lab::lab::Session;
use litec_lab::stats::RunStats;
use std::io::Cursor;

/// Session type driven by the harness: scripted input, captured output.
pub type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>, RecordingLink>;

pub struct TestContext {
    pub session: TestSession,
}

impl TestContext {
    /// Creates a session whose console reads `input` and writes to memory.
    pub fn new(input: &str) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("litec_lab=debug")
            .try_init();

        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let session = Session::new(test_student(), console, RecordingLink::new());
        Self { session }
    }

    /// Runs the session to completion.
    pub fn run(&mut self) -> RunStats {
        self.session.run().expect("session failed")
    }

    /// Everything the session printed so far.
    pub fn output(&self) -> String {
        String::from_utf8(self.session.console().output().clone()).expect("output is UTF-8")
    }

    /// Convenience accessor for the link.
    pub fn link(&self) -> &RecordingLink {
        self.session.link()
    }
}

pub fn test_student() -> StudentConfig {
    StudentConfig {
        name: "Test Student".to_string(),
        rin: 661000001,
    }
}

/// One parsed data line of a counting operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountLine {
    pub iteration: u32,
    pub decimal: u32,
    pub hex: String,
}

/// Extracts the data lines (`itr\tdec\t0xHEX`) from console output, in order.
pub fn count_lines(output: &str) -> Vec<CountLine> {
    output
        .split("\r\n")
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let iteration = fields.next()?.parse().ok()?;
            let decimal = fields.next()?.parse().ok()?;
            let hex = fields.next()?.to_string();
            fields.next().is_none().then_some(CountLine {
                iteration,
                decimal,
                hex,
            })
        })
        .collect()
}
