//! Console session: key handling, rendering and command dispatch.
//!
//! The `Console` struct ties the decoder, line buffer, history ring and
//! command tables to one byte stream. Feed it bytes with
//! [`Console::process_byte`] (or let [`Console::poll`] read them); every byte
//! is decoded, applied and rendered before the call returns.

use crate::error::CliError;
use crate::io::{ByteIo, Writer};
use crate::table::completion::{Completion, complete};
use crate::table::{Builtin, Entry, Handler, UNIVERSAL, commands, declared_prompt, lookup, matches};
use core::fmt::{self, Write};

// Sub-modules
pub mod decoder;
pub mod history;
pub mod line;

// Re-export key types
pub use decoder::{DecodeState, Key, KeyDecoder};
pub use history::{History, HistoryDirection};
pub use line::LineBuffer;

/// Interactive console over one byte stream.
///
/// Generic over:
/// - `IO`: byte transport
/// - `LINE`: line buffer capacity in bytes
/// - `ARGC`: maximum number of tokens dispatched per line
/// - `HISTORY`: history ring slots (0 disables history)
/// - `DEPTH`: namespace navigation depth
///
/// See [`crate::config`] for the usual capacities.
pub struct Console<IO, const LINE: usize, const ARGC: usize, const HISTORY: usize, const DEPTH: usize>
where
    IO: ByteIo,
{
    /// Root command table
    root: &'static [Entry],

    /// Entered namespaces, innermost last; empty at the root
    tables: heapless::Vec<&'static [Entry], DEPTH>,

    /// Prompt of the active table
    prompt: &'static str,

    /// Line being edited
    line: LineBuffer<LINE>,

    /// Escape sequence state machine
    decoder: KeyDecoder,

    /// Submitted lines
    #[cfg_attr(not(feature = "history"), allow(dead_code))]
    history: History<HISTORY, LINE>,

    /// I/O interface
    io: IO,
}

// ============================================================================
// Debug implementation
// ============================================================================

impl<IO, const LINE: usize, const ARGC: usize, const HISTORY: usize, const DEPTH: usize> fmt::Debug
    for Console<IO, LINE, ARGC, HISTORY, DEPTH>
where
    IO: ByteIo,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("prompt", &self.prompt)
            .field("line", &self.line.as_str())
            .field("cursor", &self.line.cursor())
            .field("depth", &self.tables.len())
            .field("decoder", &self.decoder.state())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Core methods
// ============================================================================

impl<IO, const LINE: usize, const ARGC: usize, const HISTORY: usize, const DEPTH: usize>
    Console<IO, LINE, ARGC, HISTORY, DEPTH>
where
    IO: ByteIo,
{
    /// Create a console at `root`.
    ///
    /// Nothing is written until [`Console::init`].
    pub fn new(root: &'static [Entry], io: IO) -> Self {
        Self {
            root,
            tables: heapless::Vec::new(),
            prompt: "",
            line: LineBuffer::new(),
            decoder: KeyDecoder::new(),
            history: History::new(),
            io,
        }
    }

    /// Take the root prompt and draw the first line.
    pub fn init(&mut self) -> Result<(), IO::Error> {
        self.refresh_prompt();
        self.render()
    }

    /// Process a single byte of input.
    ///
    /// Main entry point for byte-by-byte processing.
    /// Returns Ok(()) on success, Err on I/O error.
    pub fn process_byte(&mut self, byte: u8) -> Result<(), IO::Error> {
        let Some(key) = self.decoder.decode(byte) else {
            return Ok(());
        };

        match key {
            Key::Char(byte) => match self.line.insert(byte) {
                Ok(()) => self.render(),
                // Full line - drop the byte
                Err(_) => Ok(()),
            },

            Key::Enter => self.handle_enter(),

            Key::Tab => self.handle_tab(),

            Key::Backspace => self.edit(LineBuffer::backspace),
            Key::Delete => self.edit(LineBuffer::delete),
            Key::Left => self.edit(LineBuffer::move_left),
            Key::Right => self.edit(LineBuffer::move_right),
            Key::Home => self.edit(LineBuffer::move_home),
            Key::End => self.edit(LineBuffer::move_end),
            Key::KillToEnd => self.edit(LineBuffer::kill_to_end),
            Key::Transpose => self.edit(LineBuffer::transpose),
            Key::ClearLine => self.edit(LineBuffer::clear),
            Key::DeleteWord => self.edit(LineBuffer::delete_word),

            Key::Up => self.handle_history(HistoryDirection::Older),
            Key::Down => self.handle_history(HistoryDirection::Newer),

            Key::Interrupt => {
                self.io.write_str("\r\n")?;
                self.line.clear();
                self.render()
            }

            Key::EndOfFile => {
                if self.line.is_empty() {
                    self.pop_tables(1);
                    self.render()
                } else {
                    self.edit(LineBuffer::delete)
                }
            }

            Key::ClearScreen => {
                self.io.write_str("\x1b[H\x1b[2J")?;
                self.render()
            }
        }
    }

    /// Poll for one byte and process it.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if no byte available or byte processed successfully
    /// - `Err` on I/O error
    pub fn poll(&mut self) -> Result<(), IO::Error> {
        if let Some(byte) = self.io.get_byte()? {
            self.process_byte(byte)?;
        }
        Ok(())
    }

    /// Text of the line being edited.
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// Cursor offset in the line being edited.
    pub fn cursor(&self) -> usize {
        self.line.cursor()
    }

    /// Prompt of the active table.
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    /// Number of namespaces entered below the root.
    pub fn depth(&self) -> usize {
        self.tables.len()
    }

    /// Table commands currently resolve against.
    pub fn active_table(&self) -> &'static [Entry] {
        self.tables.last().copied().unwrap_or(self.root)
    }

    /// History ring.
    pub fn history(&self) -> &History<HISTORY, LINE> {
        &self.history
    }

    /// I/O interface.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Mutable I/O interface.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Redraw the prompt and line, then place the terminal cursor.
    fn render(&mut self) -> Result<(), IO::Error> {
        let column = self.prompt.len() + 2 + self.line.cursor();
        let mut out = Writer::raw(&mut self.io);
        let _ = write!(out, "\r{}> ", self.prompt);
        out.finish()?;

        // Raw bytes, so non-UTF-8 input is echoed as typed
        self.io.write_bytes(self.line.as_bytes())?;

        let mut out = Writer::raw(&mut self.io);
        let _ = write!(out, "\x1b[0K\r\x1b[{}C", column);
        out.finish()
    }

    /// Apply a line edit, redrawing only if it changed something.
    fn edit(&mut self, op: fn(&mut LineBuffer<LINE>) -> bool) -> Result<(), IO::Error> {
        if op(&mut self.line) {
            self.render()?;
        }
        Ok(())
    }

    /// Write a user-visible message with `\n` mapped to `\r\n`.
    fn message(&mut self, args: fmt::Arguments<'_>) -> Result<(), IO::Error> {
        let mut out = Writer::cooked(&mut self.io);
        let _ = out.write_fmt(args);
        out.finish()
    }

    // ========================================
    // Line submission
    // ========================================

    fn handle_enter(&mut self) -> Result<(), IO::Error> {
        // Dispatch works on a copy; handlers may not see the live line change
        // under them
        let mut text: heapless::String<LINE> = heapless::String::new();
        let _ = text.push_str(self.line.as_str());

        if text.is_empty() {
            self.io.write_str("\r\n")?;
        } else if let Some(request) = text.strip_prefix('!') {
            self.handle_bang(request)?;
        } else {
            self.submit(&text)?;
        }

        self.line.clear();
        self.render()
    }

    /// Record `text`, split it into tokens and dispatch them.
    fn submit(&mut self, text: &str) -> Result<(), IO::Error> {
        self.io.write_str("\r\n")?;
        self.history.record(text);

        let args: heapless::Vec<&str, ARGC> = text
            .split(' ')
            .filter(|token| !token.is_empty())
            .take(ARGC)
            .collect();
        self.dispatch(&args)
    }

    fn handle_bang(&mut self, request: &str) -> Result<(), IO::Error> {
        match self.recall(request) {
            Ok(recalled) => {
                let _ = self.line.set(&recalled);
                self.render()?;
                self.submit(&recalled)
            }
            // A malformed index is reported right after the echoed line.
            Err(CliError::Malformed) => self.message(format_args!("{}\n", CliError::Malformed)),
            Err(err) => self.message(format_args!("\n{}\n", err)),
        }
    }

    /// Look up `!n` (by number) or `!prefix` in the history ring.
    fn recall(&self, request: &str) -> Result<heapless::String<LINE>, CliError> {
        if !History::<HISTORY, LINE>::ENABLED {
            return Err(CliError::NoHistory);
        }

        let found = match request.as_bytes().first() {
            Some(first) if first.is_ascii_digit() => {
                let index = parse_index(request)?;
                self.history.get(index)
            }
            _ => self.history.find_prefix(request),
        };

        let mut recalled = heapless::String::new();
        recalled
            .push_str(found.ok_or(CliError::NotInHistory)?)
            .map_err(|_| CliError::BufferFull)?;
        Ok(recalled)
    }

    // ========================================
    // Dispatch
    // ========================================

    /// Resolve `args` word by word, starting from the active table.
    ///
    /// Namespaces entered on the way stay entered unless a handler runs or a
    /// word fails to resolve.
    fn dispatch(&mut self, args: &[&str]) -> Result<(), IO::Error> {
        let mut table = self.active_table();
        let mut pushed = 0;
        let mut rest = args;

        while let Some((&token, remaining)) = rest.split_first() {
            let command = match lookup(table, token) {
                Ok(command) => command,
                Err(err) => {
                    self.report(table, token, err)?;
                    self.pop_tables(pushed);
                    return Ok(());
                }
            };
            rest = remaining;

            if let Some(children) = command.children {
                table = children;
                if self.push_table(children) {
                    pushed += 1;
                }
            }

            match command.handler {
                Some(handler) => {
                    self.pop_tables(pushed);
                    return self.run(handler, rest);
                }
                None if command.children.is_none() => break,
                None => {}
            }
        }

        Ok(())
    }

    fn report(&mut self, table: &'static [Entry], token: &str, err: CliError) -> Result<(), IO::Error> {
        let mut out = Writer::cooked(&mut self.io);
        if err == CliError::Ambiguous {
            for candidate in matches(table, token) {
                let _ = writeln!(out, "  {}", candidate.name);
            }
        }
        let _ = writeln!(out, "command '{}': {}", token, err);
        out.finish()
    }

    fn run(&mut self, handler: Handler, args: &[&str]) -> Result<(), IO::Error> {
        match handler {
            Handler::Run(func) => {
                let mut out = Writer::cooked(&mut self.io);
                let result = func(&mut out, args);
                out.finish()?;
                if result.is_err() {
                    log::warn!("command handler reported a formatting error");
                }
                Ok(())
            }
            Handler::Builtin(Builtin::Help) => self.show_help(),
            Handler::Builtin(Builtin::History) => self.show_history(),
            Handler::Builtin(Builtin::Exit) => {
                self.pop_tables(1);
                Ok(())
            }
        }
    }

    fn show_help(&mut self) -> Result<(), IO::Error> {
        let table = self.active_table();
        let mut out = Writer::cooked(&mut self.io);
        for command in commands(table).chain(commands(&UNIVERSAL)) {
            let _ = writeln!(out, "{}\t{}", command.name, command.help);
        }
        out.finish()
    }

    fn show_history(&mut self) -> Result<(), IO::Error> {
        let mut out = Writer::cooked(&mut self.io);
        for (index, line) in self.history.iter().enumerate() {
            let _ = writeln!(out, "{}  {}", index, line);
        }
        out.finish()
    }

    // ========================================
    // Navigation stack
    // ========================================

    /// Enter `table`. Returns false (and stays put) when the stack is full.
    fn push_table(&mut self, table: &'static [Entry]) -> bool {
        if self.tables.push(table).is_err() {
            log::warn!("{}: depth {}", CliError::TableStackFull, DEPTH);
            return false;
        }
        self.refresh_prompt();
        true
    }

    /// Leave up to `count` namespaces; the root is never left.
    fn pop_tables(&mut self, count: usize) {
        let keep = self.tables.len().saturating_sub(count);
        self.tables.truncate(keep);
        self.refresh_prompt();
    }

    fn refresh_prompt(&mut self) {
        let table = self.active_table();
        self.prompt = match declared_prompt(table) {
            Some(prompt) => prompt,
            None if self.tables.is_empty() => "",
            None => {
                log::warn!("table missing prompt");
                ""
            }
        };
    }

    // ========================================
    // Completion and history keys
    // ========================================

    fn handle_tab(&mut self) -> Result<(), IO::Error> {
        self.io.write_str("\r\x1b[0K")?;

        let table = self.active_table();
        if let Completion::Ambiguous { table, prefix } = complete(table, &mut self.line) {
            let mut out = Writer::cooked(&mut self.io);
            for candidate in matches(table, &prefix) {
                let _ = writeln!(out, "  {}", candidate.name);
            }
            out.finish()?;
        }

        self.render()
    }

    fn handle_history(&mut self, direction: HistoryDirection) -> Result<(), IO::Error> {
        let Some(text) = self.history.browse(direction) else {
            return Ok(());
        };
        if self.line.set(text).is_err() {
            return Ok(());
        }
        self.render()
    }
}

/// Parse a `!n` index the way C's `strtoul(.., 0)` reads it: `0x` selects
/// hex, a leading `0` selects octal, anything else is decimal.
///
/// Trailing characters are malformed. A value too large for `usize` can
/// never name a history entry, so it is reported as not found.
fn parse_index(text: &str) -> Result<usize, CliError> {
    let (digits, radix) = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        (hex, 16)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(CliError::Malformed);
    }
    usize::from_str_radix(digits, radix).map_err(|_| CliError::NotInHistory)
}

// ============================================================================
// Tests
// ============================================================================
