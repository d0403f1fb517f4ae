//! # rline
//!
//! Line-editing debug console for embedded systems with zero heap allocation.
//!
//! **Key features:**
//! - **Byte-stream driven** - Feed one byte at a time from UART, USB CDC or a raw terminal
//! - **In-place editing** - Cursor movement, word delete, transpose, kill-to-end
//! - **Static command tables** - Nested namespaces with their own prompts, defined at compile time
//! - **Prefix matching** - Commands resolve from any unambiguous, case-insensitive prefix
//! - **Optional features** - Tab completion, history ring with `!n` / `!prefix` recall
//!
//! ## Optional Features
//!
//! - `completion` - Tab expands unambiguous command prefixes
//! - `history` - History ring with up/down browsing and bang recall
//!
//! ## Example
//!
//! ```rust,ignore
//! use core::fmt::Write;
//! use rline::{DefaultConsole, Entry};
//!
//! fn hello(out: &mut dyn Write, _args: &[&str]) -> core::fmt::Result {
//!     writeln!(out, "margorp")
//! }
//!
//! const LINUX: &[Entry] = &[Entry::prompt("linux"), Entry::command("hegorp", hello, ": hello")];
//! const ROOT: &[Entry] = &[Entry::namespace("linux", ": linux...", LINUX)];
//!
//! let mut console = DefaultConsole::new(ROOT, uart);
//! console.init()?;
//! loop {
//!     console.poll()?;
//! }
//! ```
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod console;
pub mod dump;
pub mod error;
pub mod io;
pub mod table;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Core I/O
pub use io::{ByteIo, Writer};

// Configuration
pub use config::{DefaultConsole, MinimalConsole};

// Error types
pub use error::CliError;

// Command tables
pub use table::{Builtin, Command, CommandFn, Entry, Handler};

// Console types
pub use console::{Console, HistoryDirection, Key, KeyDecoder, LineBuffer};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
