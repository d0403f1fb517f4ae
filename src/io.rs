//! Byte I/O abstraction for platform-agnostic input/output.
//!
//! The `ByteIo` trait provides non-blocking byte-level I/O that can be
//! implemented for any transport (UART, USB CDC, raw-mode stdio, etc.).
//! [`Writer`] adapts it to `core::fmt::Write` so console messages and command
//! handlers can use `write!`.

use core::fmt;

/// Platform-agnostic byte I/O trait.
///
/// `put_byte()` and `write_bytes()` MUST NOT block indefinitely. Implementations
/// on async platforms should buffer to memory and flush after `process_byte()`.
pub trait ByteIo {
    /// Platform-specific error type
    type Error;

    /// Non-blocking byte read.
    ///
    /// Returns:
    /// - `Ok(Some(byte))` if a byte is available
    /// - `Ok(None)` if no byte is available (non-blocking)
    /// - `Err(Self::Error)` on I/O error
    fn get_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Write one byte to the output.
    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write a run of bytes.
    ///
    /// Default implementation uses `put_byte()` repeatedly.
    /// Override for more efficient bulk writes if needed.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            self.put_byte(byte)?;
        }
        Ok(())
    }

    /// Write a string.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.write_bytes(s.as_bytes())
    }
}

/// `core::fmt::Write` adapter over a [`ByteIo`].
///
/// A *cooked* writer emulates a terminal's cooked mode and emits `\r\n` for
/// every `\n`; a *raw* writer passes bytes through untouched. The first I/O
/// error is kept and surfaced by [`Writer::finish`], since `fmt::Error`
/// carries no payload.
pub struct Writer<'a, IO: ByteIo> {
    io: &'a mut IO,
    cooked: bool,
    error: Option<IO::Error>,
}

impl<'a, IO: ByteIo> Writer<'a, IO> {
    /// Writer that translates `\n` into `\r\n`.
    pub fn cooked(io: &'a mut IO) -> Self {
        Self {
            io,
            cooked: true,
            error: None,
        }
    }

    /// Writer that passes output through unchanged.
    pub fn raw(io: &'a mut IO) -> Self {
        Self {
            io,
            cooked: false,
            error: None,
        }
    }

    /// Consume the writer, returning the first I/O error encountered.
    pub fn finish(self) -> Result<(), IO::Error> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn put(&mut self, bytes: &[u8]) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }
        self.io.write_bytes(bytes).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

impl<IO: ByteIo> fmt::Write for Writer<'_, IO> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if !self.cooked {
            return self.put(s.as_bytes());
        }

        let mut lines = s.split('\n');
        if let Some(first) = lines.next() {
            self.put(first.as_bytes())?;
        }
        for line in lines {
            self.put(b"\r\n")?;
            self.put(line.as_bytes())?;
        }
        Ok(())
    }
}

impl<IO: ByteIo> fmt::Debug for Writer<'_, IO> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writer")
            .field("cooked", &self.cooked)
            .field("failed", &self.error.is_some())
            .finish_non_exhaustive()
    }
}
