//! Tests for the session loop
//!
//! Sessions run over in-memory input and output, so what is asserted is the
//! exact text a user would see.

use std::io::{self, Cursor, Read, Write};

use roster::RosterError;
use roster::config::InputConfig;
use roster::input::LinePolicy;
use roster::output::{OutputMode, Renderer};
use roster::shell::{SessionEnd, Shell};

use crate::common::{MemoryStore, TestDir, ids};

fn session(input: &str) -> (String, SessionEnd) {
    let mut shell = Shell::new(MemoryStore::new(), Renderer::default(), InputConfig::default());
    let mut out = Vec::new();
    let end = shell.run(Cursor::new(input.as_bytes().to_vec()), &mut out).unwrap();
    (String::from_utf8(out).unwrap(), end)
}

#[test]
fn test_session_transcript() {
    let (out, end) = session(concat!(
        "A s1 Aalto Ilmari\n",
        "A s2 Berg Anna\n",
        "U s2 3 40\n",
        "L\n",
        "X\n",
        "L extra\n",
        "Q\n",
    ));

    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(
        out,
        concat!(
            "SUCCESS\n",
            "SUCCESS\n",
            "SUCCESS\n",
            "s2 Berg Anna 0 0 40 0 0 0 40\n",
            "s1 Aalto Ilmari 0 0 0 0 0 0 0\n",
            "SUCCESS\n",
            "Invalid command X\n",
            "ERROR (-21) ERR_TOO_MANY_ARGS: Too many arguments for the given command type.\n",
            "SUCCESS\n",
        )
    );
}

#[test]
fn test_lines_after_quit_are_not_processed() {
    let (out, end) = session("Q\nA s1 Aalto Ilmari\nL\n");
    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(out, "SUCCESS\n");
}

#[test]
fn test_end_of_input_without_quit() {
    let (out, end) = session("A s1 Aalto Ilmari");
    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(out, "SUCCESS\n");
}

#[test]
fn test_empty_input() {
    let (out, end) = session("");
    assert_eq!(end, SessionEnd::EndOfInput);
    assert!(out.is_empty());
}

#[test]
fn test_blank_line_and_crlf() {
    let (out, _) = session("\nL\r\n");
    assert_eq!(
        out,
        "ERROR (-20) ERR_EMPTY_INP: Input is empty.\nSUCCESS\n"
    );
}

#[test]
fn test_bare_crlf_is_empty_input() {
    let (out, end) = session("\r\nQ\r\n");
    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(out, "ERROR (-20) ERR_EMPTY_INP: Input is empty.\nSUCCESS\n");
}

#[test]
fn test_crlf_does_not_count_against_line_limit() {
    let input = InputConfig {
        max_line_length: 18,
        overlong_lines: LinePolicy::Reject,
    };
    let mut shell = Shell::new(MemoryStore::new(), Renderer::default(), input);
    let mut out = Vec::new();
    // 17 content bytes: exactly the limit
    shell.run(Cursor::new(b"A s1 Aalto Ilmari\r\n".to_vec()), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "SUCCESS\n");
}

#[test]
fn test_huge_line_without_newline_is_rejected() {
    let huge = std::io::repeat(b'A').take(8 * 1024 * 1024).chain(&b"\nL\n"[..]);
    let mut shell = Shell::new(MemoryStore::new(), Renderer::default(), InputConfig::default());
    let mut out = Vec::new();
    shell.run(std::io::BufReader::new(huge), &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "ERROR (-23) ERR_LINE_TOO_LONG: Input line is too long.\nSUCCESS\n"
    );
}

#[test]
fn test_overlong_line_reported_and_session_continues() {
    let input = InputConfig {
        max_line_length: 16,
        overlong_lines: LinePolicy::Reject,
    };
    let mut shell = Shell::new(MemoryStore::new(), Renderer::default(), input);
    let mut out = Vec::new();
    let end = shell
        .run(Cursor::new(b"A s1 Aaltonen-Virtanen Ilmari\nL\nQ\n".to_vec()), &mut out)
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].starts_with("ERROR (-23) ERR_LINE_TOO_LONG"));
    assert_eq!(&lines[1..], ["SUCCESS", "SUCCESS"]);
    assert_eq!(end, SessionEnd::Quit);
    assert!(shell.dispatcher().roster().is_empty());
}

#[test]
fn test_invalid_utf8_has_no_command() {
    let mut shell = Shell::new(MemoryStore::new(), Renderer::default(), InputConfig::default());
    let mut out = Vec::new();
    shell.run(Cursor::new(vec![0xff, b'\n']), &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("ERROR (-6) ERR_NO_CMND_CHAR"));
}

#[test]
fn test_json_session() {
    let mut shell = Shell::new(
        MemoryStore::new(),
        Renderer::new(OutputMode::Json, false),
        InputConfig::default(),
    );
    let mut out = Vec::new();
    shell.run(Cursor::new(b"A s1 Aalto Ilmari\nU s9 1 1\n".to_vec()), &mut out).unwrap();

    let values: Vec<serde_json::Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0]["status"], "success");
    assert_eq!(values[1]["error"]["name"], "ERR_STDNT_NOT_FND");
}

#[test]
fn test_session_writes_through_file_store() {
    let dir = TestDir::new();
    let mut shell = Shell::new(dir.store(), Renderer::default(), InputConfig::default());
    let mut out = Vec::new();
    shell
        .run(
            Cursor::new(b"A s1 Aalto Ilmari\nU s1 6 999\nW out.txt\nQ\n".to_vec()),
            &mut out,
        )
        .unwrap();

    assert_eq!(dir.read("out.txt"), "s1 Aalto Ilmari 0 0 0 0 0 999 999\n");
    assert_eq!(ids(shell.dispatcher().roster()), ["s1"]);
}

struct ClosedOutput;

impl Write for ClosedOutput {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_output_failure_is_critical() {
    let mut shell = Shell::new(MemoryStore::new(), Renderer::default(), InputConfig::default());
    let err = shell.run(Cursor::new(b"L\nQ\n".to_vec()), &mut ClosedOutput).unwrap_err();

    assert_eq!(err.downcast_ref::<RosterError>(), Some(&RosterError::Critical));
    assert!(format!("{err:#}").contains("Failed to write output"));
}
