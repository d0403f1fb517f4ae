//! Test fixtures and utilities for rline testing.
//!
//! Provides:
//! - `MockIo`: Test implementation of ByteIo trait
//! - `ROOT`: Command tables with a `linux` namespace, as in the native demo
//! - Command handlers with observable output

#![allow(dead_code)]

use core::fmt::{self, Write};
use rline::{ByteIo, Command, Entry, Handler};
use std::collections::VecDeque;

// ============================================================================
// MockIo - Test I/O Implementation
// ============================================================================

/// Mock I/O for testing.
///
/// Provides in-memory byte I/O with input queue and output capture.
/// Uses `std` types (VecDeque, Vec) since tests run with std support.
#[derive(Debug, Default)]
pub struct MockIo {
    /// Input queue (simulates user typing)
    input: VecDeque<u8>,

    /// Output capture (collects all output)
    output: Vec<u8>,

    /// Fail every write once set
    broken: bool,
}

impl MockIo {
    /// Create new MockIo with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create MockIo with pre-loaded input.
    pub fn with_input(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Add input to queue (simulates user typing).
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    /// Get captured output as string.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Get captured output as bytes (useful for checking ANSI sequences).
    pub fn output_bytes(&self) -> &[u8] {
        &self.output
    }

    /// Clear output buffer.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Make every following write fail.
    pub fn break_output(&mut self) {
        self.broken = true;
    }

    /// Check if input queue is empty.
    pub fn input_empty(&self) -> bool {
        self.input.is_empty()
    }
}

/// Error returned by a broken `MockIo`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Disconnected;

impl ByteIo for MockIo {
    type Error = Disconnected;

    fn get_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(self.input.pop_front())
    }

    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if self.broken {
            return Err(Disconnected);
        }
        self.output.push(byte);
        Ok(())
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Prints `margorp`.
pub fn hegorp(out: &mut dyn Write, _args: &[&str]) -> fmt::Result {
    writeln!(out, "margorp")
}

/// Prints `uname` followed by its arguments.
pub fn uname(out: &mut dyn Write, args: &[&str]) -> fmt::Result {
    write!(out, "uname")?;
    for arg in args {
        write!(out, " {}", arg)?;
    }
    writeln!(out)
}

/// Prints its arguments joined by `|`, so token boundaries are visible.
pub fn echo(out: &mut dyn Write, args: &[&str]) -> fmt::Result {
    writeln!(out, "[{}]", args.join("|"))
}

/// Hexdumps the bytes of its first argument.
pub fn dump(out: &mut dyn Write, args: &[&str]) -> fmt::Result {
    let bytes = args.first().map_or(&[][..], |arg| arg.as_bytes());
    rline::dump::hexdump(out, 0, bytes)
}

/// Reports a formatting failure.
pub fn fail(out: &mut dyn Write, _args: &[&str]) -> fmt::Result {
    write!(out, "partial")?;
    Err(fmt::Error)
}

/// Prints `quit`.
pub fn quit(out: &mut dyn Write, _args: &[&str]) -> fmt::Result {
    writeln!(out, "bye")
}

/// Prints `net`.
pub fn net(out: &mut dyn Write, args: &[&str]) -> fmt::Result {
    writeln!(out, "net {}", args.len())
}

// ============================================================================
// Command tables
// ============================================================================

/// `linux/` namespace.
pub const LINUX: &[Entry] = &[
    Entry::prompt("linux"),
    Entry::command("hegorp", hegorp, ": hi"),
    Entry::command("uname", uname, ": kernel name"),
];

/// `net/` namespace, entered through a command that also has a handler.
pub const NET: &[Entry] = &[Entry::prompt("net"), Entry::command("ping", echo, ": ping")];

/// `raw/` namespace without a prompt entry.
pub const RAW: &[Entry] = &[Entry::command("peek", echo, ": peek")];

/// Root table.
pub const ROOT: &[Entry] = &[
    Entry::namespace("linux", ": linux...", LINUX),
    Entry::namespace("raw", ": no prompt", RAW),
    Entry::Command(Command {
        name: "net",
        handler: Some(Handler::Run(net)),
        help: ": net...",
        children: Some(NET),
    }),
    Entry::command("echo", echo, ": echo args"),
    Entry::command("dump", dump, ": hexdump"),
    Entry::command("fail", fail, ": always fails"),
    Entry::command("quit", quit, ": exit!"),
];
