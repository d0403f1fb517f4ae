//! Shared I/O implementation for native demos

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use rline::ByteIo;
use std::io::{self, Read, Write};

// =============================================================================
// Terminal Raw Mode Guard
// =============================================================================

/// RAII guard that enables raw terminal mode on creation and restores on drop.
///
/// Raw mode hands every key straight to the console: no local echo, no line
/// buffering, and Ctrl-C arrives as a byte instead of a signal.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        println!();
    }
}

// =============================================================================
// I/O Implementation
// =============================================================================

/// Byte I/O over stdin/stdout.
///
/// Reads block; output is flushed after every write so redraws show up at once.
pub struct StdioByteIo {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdioByteIo {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdioByteIo {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteIo for StdioByteIo {
    type Error = io::Error;

    fn get_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let mut buf = [0u8; 1];
        match self.stdin.lock().read(&mut buf) {
            Ok(0) => Ok(None), // EOF
            Ok(_) => Ok(Some(buf[0])),
            Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_bytes(&[byte])
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let mut handle = self.stdout.lock();
        handle.write_all(bytes)?;
        handle.flush()
    }
}
