//! Basic demo of rline on a native terminal.
//!
//! ```bash
//! cargo run --bin basic
//! ```
//!
//! Type `?` for help, `quit` to leave.

use core::fmt::{self, Write};
use native_demos::{RawModeGuard, StdioByteIo};
use rline::{ByteIo, DefaultConsole, Entry};
use std::sync::atomic::{AtomicBool, Ordering};

static QUIT: AtomicBool = AtomicBool::new(false);

// =============================================================================
// Command handlers
// =============================================================================

fn hello(out: &mut dyn Write, _args: &[&str]) -> fmt::Result {
    writeln!(out, "margorp")
}

fn quit(_out: &mut dyn Write, _args: &[&str]) -> fmt::Result {
    QUIT.store(true, Ordering::Relaxed);
    Ok(())
}

fn echo(out: &mut dyn Write, args: &[&str]) -> fmt::Result {
    writeln!(out, "{}", args.join(" "))
}

fn dump(out: &mut dyn Write, args: &[&str]) -> fmt::Result {
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        rline::dump::hexdump(out, 0, arg.as_bytes())?;
    }
    Ok(())
}

// =============================================================================
// Command tables
// =============================================================================

const LINUX: &[Entry] = &[
    Entry::prompt("linux"),
    Entry::command("hegorp", hello, ": hello"),
];

const ROOT: &[Entry] = &[
    Entry::namespace("linux", ": linux...", LINUX),
    Entry::command("echo", echo, ": print arguments"),
    Entry::command("dump", dump, ": hexdump arguments"),
    Entry::command("quit", quit, ": exit!"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{} {} native demo", rline::NAME, rline::VERSION);
    println!("Type '?' for help, 'quit' to exit.\n");

    let _raw = RawModeGuard::new()?;

    let mut console = DefaultConsole::new(ROOT, StdioByteIo::new());
    console.init()?;

    while !QUIT.load(Ordering::Relaxed) {
        match console.io_mut().get_byte()? {
            Some(byte) => console.process_byte(byte)?,
            None => break, // EOF
        }
    }

    Ok(())
}
