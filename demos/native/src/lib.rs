//! Shared library code for native platform demos.

pub mod io;

pub use io::{RawModeGuard, StdioByteIo};
