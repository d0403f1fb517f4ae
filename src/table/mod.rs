//! Command table data structures and name resolution.
//!
//! Tables are plain `&'static [Entry]` slices, const-initializable and stored
//! in ROM. A table may open with a [`Entry::Prompt`] naming the namespace; every
//! other entry is a [`Command`], which may run a handler, open a child table,
//! or both.
//!
//! Names resolve by case-insensitive prefix against the active table and the
//! [`UNIVERSAL`] table of built-ins.

use crate::error::CliError;
use core::fmt;

// Sub-modules
pub mod completion;

/// Command handler signature.
///
/// Receives the console output (a cooked writer, `\n` becomes `\r\n`) and the
/// tokens that followed the command name.
pub type CommandFn = fn(out: &mut dyn fmt::Write, args: &[&str]) -> fmt::Result;

/// Console-internal commands, available from every namespace.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Builtin {
    /// List the active table and the universal commands
    Help,

    /// List the history ring
    History,

    /// Leave the current namespace
    Exit,
}

/// What a command does when it is the last word resolved.
#[derive(Copy, Clone)]
pub enum Handler {
    /// Host-supplied function
    Run(CommandFn),

    /// Console built-in
    Builtin(Builtin),
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Run(_) => f.write_str("Run(..)"),
            Handler::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
        }
    }
}

/// A named command.
#[derive(Debug, Copy, Clone)]
pub struct Command {
    /// Command name
    pub name: &'static str,

    /// Action run when this is the last resolved word
    pub handler: Option<Handler>,

    /// Help text (shown by `help`)
    pub help: &'static str,

    /// Namespace entered through this command
    pub children: Option<&'static [Entry]>,
}

/// Command table entry.
#[derive(Debug, Copy, Clone)]
pub enum Entry {
    /// Namespace prompt; only meaningful as the first entry of a table
    Prompt(&'static str),

    /// Named command
    Command(Command),
}

impl Entry {
    /// Prompt entry for a namespace table.
    pub const fn prompt(text: &'static str) -> Self {
        Entry::Prompt(text)
    }

    /// Command that runs `handler`.
    pub const fn command(name: &'static str, handler: CommandFn, help: &'static str) -> Self {
        Entry::Command(Command {
            name,
            handler: Some(Handler::Run(handler)),
            help,
            children: None,
        })
    }

    /// Command that enters the `children` namespace.
    pub const fn namespace(
        name: &'static str,
        help: &'static str,
        children: &'static [Entry],
    ) -> Self {
        Entry::Command(Command {
            name,
            handler: None,
            help,
            children: Some(children),
        })
    }

    const fn builtin(name: &'static str, builtin: Builtin, help: &'static str) -> Self {
        Entry::Command(Command {
            name,
            handler: Some(Handler::Builtin(builtin)),
            help,
            children: None,
        })
    }

    /// The command, unless this is a prompt entry.
    pub fn as_command(&self) -> Option<&Command> {
        match self {
            Entry::Command(command) => Some(command),
            Entry::Prompt(_) => None,
        }
    }
}

/// Commands available alongside every table.
pub static UNIVERSAL: [Entry; 4] = [
    Entry::builtin("help", Builtin::Help, ": help..."),
    Entry::builtin("?", Builtin::Help, ": help..."),
    Entry::builtin("history", Builtin::History, ": history..."),
    Entry::builtin("exit", Builtin::Exit, ": up"),
];

/// Declared prompt of `table`, if its first entry is a prompt.
pub fn declared_prompt(table: &[Entry]) -> Option<&'static str> {
    match table.first() {
        Some(Entry::Prompt(text)) => Some(*text),
        _ => None,
    }
}

/// Commands of `table`, skipping a leading prompt.
pub fn commands(table: &'static [Entry]) -> impl Iterator<Item = &'static Command> {
    table.iter().filter_map(Entry::as_command)
}

/// Every command of `table` and then of [`UNIVERSAL`] whose name starts with
/// `token`, ignoring ASCII case. Names shorter than `token` never match.
pub fn matches<'t>(
    table: &'static [Entry],
    token: &'t str,
) -> impl Iterator<Item = &'static Command> + 't {
    commands(table)
        .chain(commands(&UNIVERSAL))
        .filter(move |command| is_prefix(token, command.name))
}

/// Resolve `token` to a single command.
///
/// # Errors
///
/// - `CliError::CommandNotFound` when nothing matches
/// - `CliError::Ambiguous` when more than one command matches
pub fn lookup(table: &'static [Entry], token: &str) -> Result<&'static Command, CliError> {
    let mut found = matches(table, token);
    let first = found.next().ok_or(CliError::CommandNotFound)?;
    match found.next() {
        None => Ok(first),
        Some(_) => Err(CliError::Ambiguous),
    }
}

fn is_prefix(token: &str, name: &str) -> bool {
    let (token, name) = (token.as_bytes(), name.as_bytes());
    token.len() <= name.len() && name[..token.len()].eq_ignore_ascii_case(token)
}
