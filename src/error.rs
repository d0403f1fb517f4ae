//! Error types for console operations.
//!
//! None of these abort anything: the console reports them (or logs them) and
//! keeps running. The `Display` text is the wording shown to the user.

use core::fmt;

/// Console error type.
///
/// Represents every recoverable condition met while editing or dispatching a line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CliError {
    /// No command matches the typed name
    CommandNotFound,

    /// More than one command matches the typed prefix
    Ambiguous,

    /// `!<n>` with trailing garbage after the digits
    Malformed,

    /// `!<n>` out of range or `!<prefix>` without a match
    NotInHistory,

    /// Bang recall used while history is compiled out
    NoHistory,

    /// Line would exceed its capacity
    BufferFull,

    /// Namespace nesting exceeds the navigation stack
    TableStackFull,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::CommandNotFound => write!(f, "not found"),
            CliError::Ambiguous => write!(f, "ambiguous"),
            CliError::Malformed => write!(f, "malformed"),
            CliError::NotInHistory => write!(f, "not found"),
            CliError::NoHistory => write!(f, "no history support"),
            CliError::BufferFull => write!(f, "buffer full"),
            CliError::TableStackFull => write!(f, "table stack overflow"),
        }
    }
}
