//! Tab completion of command names.
//!
//! Walks the words before the cursor through the command tables, the same way
//! dispatch would, and rewrites every uniquely resolved word to the full command
//! name. Nothing is executed and the navigation stack is untouched.
//! Uses stub function pattern - module always exists, function is inert when disabled.

#![cfg_attr(not(feature = "completion"), allow(unused_variables))]

use crate::console::LineBuffer;
use crate::table::Entry;

#[cfg(feature = "completion")]
use crate::error::CliError;
#[cfg(feature = "completion")]
use crate::table::lookup;

/// Where completion stopped.
#[derive(Debug, Clone)]
pub enum Completion<const N: usize> {
    /// Every word before the cursor resolved (or there was nothing to resolve)
    Done,

    /// A word matched no command
    NoMatch,

    /// A word matched several commands of `table`
    Ambiguous {
        /// Table the word was resolved against
        table: &'static [Entry],
        /// The word as typed
        prefix: heapless::String<N>,
    },
}

impl<const N: usize> PartialEq for Completion<N> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Completion::Done, Completion::Done) | (Completion::NoMatch, Completion::NoMatch) => true,
            (
                Completion::Ambiguous { table, prefix },
                Completion::Ambiguous {
                    table: other_table,
                    prefix: other_prefix,
                },
            ) => core::ptr::eq(*table, *other_table) && prefix == other_prefix,
            _ => false,
        }
    }
}

/// Expand command-name prefixes in `line`, starting from `table`.
///
/// Words are taken from a copy of the line up to the cursor, so a cursor in the
/// middle of the line leaves the rest alone. An expansion that would overflow
/// the line is skipped; completion still descends into that command's table.
///
/// # Examples
///
/// ```rust,ignore
/// // "li heg|" with linux/hegorp tables
/// complete(ROOT, &mut line);
/// assert_eq!(line.as_str(), "linux hegorp");
/// ```
#[cfg(feature = "completion")]
pub fn complete<const N: usize>(table: &'static [Entry], line: &mut LineBuffer<N>) -> Completion<N> {
    let mut scratch = line.clone();
    scratch.kill_to_end();

    let mut table = Some(table);
    let words = scratch.as_str().split(' ').filter(|word| !word.is_empty());
    for (index, word) in words.enumerate() {
        let Some(current) = table else {
            break;
        };

        match lookup(current, word) {
            Ok(command) => {
                if line.replace_word(index, command.name).is_err() {
                    log::debug!("no room to expand '{}' to '{}'", word, command.name);
                }
                table = command.children;
            }
            Err(CliError::Ambiguous) => {
                let mut prefix = heapless::String::new();
                let _ = prefix.push_str(word);
                return Completion::Ambiguous {
                    table: current,
                    prefix,
                };
            }
            Err(_) => return Completion::NoMatch,
        }
    }

    Completion::Done
}

/// Stub implementation when completion feature is disabled.
///
/// Leaves the line untouched.
#[cfg(not(feature = "completion"))]
pub fn complete<const N: usize>(_table: &'static [Entry], _line: &mut LineBuffer<N>) -> Completion<N> {
    Completion::Done
}
