//! Buffer sizing and capacity limits.
//!
//! Capacities are const parameters of [`Console`], so every buffer is sized at
//! compile time with no runtime overhead. The constants below are the stock
//! values; the aliases bundle them into ready-to-use console types.

use crate::console::Console;

/// Maximum line length in bytes (default: 32)
pub const BUFFER_LENGTH: usize = 32;

/// Maximum number of tokens per line, command name included (default: 10)
pub const MAX_ARGC: usize = 10;

/// History ring capacity, 0 disables history (default: 10)
pub const HISTORY_LENGTH: usize = 10;

/// Maximum namespace nesting depth (default: 4)
pub const TABLE_STACK_LENGTH: usize = 4;

/// Console with the default capacities.
///
/// - line: 32 bytes
/// - arguments: 10 tokens
/// - history: 10 lines
/// - navigation depth: 4 tables
pub type DefaultConsole<IO> =
    Console<IO, BUFFER_LENGTH, MAX_ARGC, HISTORY_LENGTH, TABLE_STACK_LENGTH>;

/// Console for memory-limited devices.
///
/// - line: 16 bytes
/// - arguments: 4 tokens
/// - history: 4 lines
/// - navigation depth: 2 tables
pub type MinimalConsole<IO> = Console<IO, 16, 4, 4, 2>;
