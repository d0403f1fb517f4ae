//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

use fixtures::{MockIo, ROOT};
use rline::DefaultConsole;

/// Console type every helper works on.
pub type TestConsole = DefaultConsole<MockIo>;

// ============================================================================
// Console Creation Helpers
// ============================================================================

/// Create a console at `ROOT`, initialized, with the first prompt discarded.
pub fn create_console() -> DefaultConsole<MockIo> {
    let mut console = DefaultConsole::new(ROOT, MockIo::new());
    console.init().unwrap();
    console.io_mut().clear_output();
    console
}

// ============================================================================
// Input Helpers
// ============================================================================

/// Feed raw bytes.
pub fn feed(console: &mut DefaultConsole<MockIo>, bytes: &[u8]) {
    for &byte in bytes {
        console.process_byte(byte).unwrap();
    }
}

/// Type input without executing.
pub fn type_input(console: &mut DefaultConsole<MockIo>, input: &str) {
    feed(console, input.as_bytes());
}

/// Type a line, press enter, and return everything written meanwhile.
pub fn execute_command(console: &mut DefaultConsole<MockIo>, cmd: &str) -> String {
    console.io_mut().clear_output();
    type_input(console, cmd);
    press_enter(console);
    console.io().output()
}

/// Press Enter.
pub fn press_enter(console: &mut DefaultConsole<MockIo>) {
    feed(console, b"\r");
}

/// Press Tab.
pub fn press_tab(console: &mut DefaultConsole<MockIo>) {
    feed(console, b"\t");
}

/// Press a control key, e.g. `ctrl(console, b'a')` for Ctrl-A.
pub fn ctrl(console: &mut DefaultConsole<MockIo>, letter: u8) {
    feed(console, &[letter & 0x1f]);
}

/// Press the up arrow.
pub fn press_up(console: &mut DefaultConsole<MockIo>) {
    feed(console, b"\x1b[A");
}

/// Press the down arrow.
pub fn press_down(console: &mut DefaultConsole<MockIo>) {
    feed(console, b"\x1b[B");
}

/// Press the left arrow `n` times.
pub fn press_left_n(console: &mut DefaultConsole<MockIo>, n: usize) {
    for _ in 0..n {
        feed(console, b"\x1b[D");
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// The exact redraw sequence for `prompt`, `line` and `cursor`.
pub fn rendered(prompt: &str, line: &str, cursor: usize) -> String {
    format!("\r{}> {}\x1b[0K\r\x1b[{}C", prompt, line, prompt.len() + 2 + cursor)
}

/// Assert that output ends with a redraw of the given state.
pub fn assert_rendered(output: &str, prompt: &str, line: &str, cursor: usize) {
    let expected = rendered(prompt, line, cursor);
    assert!(
        output.ends_with(&expected),
        "Expected redraw {:?} at end of output, got: {:?}",
        expected,
        output
    );
}

/// Assert that output contains an ANSI escape sequence.
pub fn assert_contains_ansi(output: &str, sequence: &str) {
    assert!(
        output.contains(sequence),
        "Expected ANSI sequence '{}' in output, got: {:?}",
        sequence.escape_default(),
        output
    );
}

/// Assert that output contains all expected strings.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for exp in expected {
        assert!(
            output.contains(exp),
            "Expected '{}' in output, got: {:?}",
            exp,
            output
        );
    }
}

/// Assert that output does NOT contain any of the strings.
pub fn assert_contains_none(output: &str, forbidden: &[&str]) {
    for forbid in forbidden {
        assert!(
            !output.contains(forbid),
            "Did not expect '{}' in output, got: {:?}",
            forbid,
            output
        );
    }
}
