//! # Console Tests
//!
//! Character input (including line-terminator skipping and end of input),
//! verbatim output, and transcript mirroring.

use litec_lab::console::Console;
use pretty_assertions::assert_eq;
use std::fs;
use std::io::{self, Cursor, Read};

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Reader that fails with the given kind once, then yields `data`.
struct FlakyReader {
    failure: Option<io::ErrorKind>,
    data: Cursor<Vec<u8>>,
}

impl Read for FlakyReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.failure.take() {
            Some(kind) => Err(io::Error::new(kind, "flaky")),
            None => self.data.read(buf),
        }
    }
}

#[test]
fn test_reads_characters_in_order() {
    let mut c = console("12q");
    assert_eq!(c.read_command().unwrap(), Some('1'));
    assert_eq!(c.read_command().unwrap(), Some('2'));
    assert_eq!(c.read_command().unwrap(), Some('q'));
    assert_eq!(c.read_command().unwrap(), None);
}

#[test]
fn test_skips_line_terminators() {
    let mut c = console("1\r\n\n2\n");
    assert_eq!(c.read_command().unwrap(), Some('1'));
    assert_eq!(c.read_command().unwrap(), Some('2'));
    assert_eq!(c.read_command().unwrap(), None);
}

#[test]
fn test_keeps_other_whitespace() {
    let mut c = console(" \t");
    assert_eq!(c.read_command().unwrap(), Some(' '));
    assert_eq!(c.read_command().unwrap(), Some('\t'));
}

#[test]
fn test_empty_input_is_end() {
    let mut c = console("");
    assert_eq!(c.read_command().unwrap(), None);
}

#[test]
fn test_high_bytes_read_as_latin1() {
    let mut c = Console::new(Cursor::new(vec![0xE9]), Vec::new());
    assert_eq!(c.read_command().unwrap(), Some('\u{e9}'));
}

#[test]
fn test_interrupted_read_is_retried() {
    let reader = FlakyReader {
        failure: Some(io::ErrorKind::Interrupted),
        data: Cursor::new(b"q".to_vec()),
    };
    let mut c = Console::new(reader, Vec::new());
    assert_eq!(c.read_command().unwrap(), Some('q'));
}

#[test]
fn test_read_error_propagates() {
    let reader = FlakyReader {
        failure: Some(io::ErrorKind::BrokenPipe),
        data: Cursor::new(Vec::new()),
    };
    let mut c = Console::new(reader, Vec::new());
    assert!(matches!(c.read_command(), Err(litec_lab::LabError::Io(_))));
}

#[test]
fn test_print_is_verbatim() {
    let mut c = console("");
    c.print("a\tb\r\n").unwrap();
    c.print("c\r\n\n").unwrap();
    assert_eq!(c.output().as_slice(), b"a\tb\r\nc\r\n\n");
}

#[test]
fn test_transcript_mirrors_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.csv");

    let mut c = console("").with_transcript(&path).unwrap();
    c.print("0\t0\t0x0\r\n").unwrap();
    c.print("1\t1\t0x1\r\n").unwrap();
    let output = c.into_output().unwrap();

    let transcript = fs::read(&path).unwrap();
    assert_eq!(transcript, output);
}

#[test]
fn test_transcript_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("run.csv");
    assert!(console("").with_transcript(&path).is_err());
}
