//! Hex dump formatting for command handlers.

use core::fmt;

const WIDTH: usize = 16;

/// Write `bytes` as a hex dump, 16 bytes per row.
///
/// Each row is `[addr] ` followed by the bytes in hex and their printable
/// ASCII rendering (`.` for anything outside 0x20..=0x7e). `base` is the
/// address printed for the first byte; addresses wrap past `usize::MAX`.
///
/// ```text
/// [0100] 68 65 6c 6c 6f 00                               hello.
/// ```
pub fn hexdump(out: &mut dyn fmt::Write, base: usize, bytes: &[u8]) -> fmt::Result {
    for (row, chunk) in bytes.chunks(WIDTH).enumerate() {
        write!(out, "[{:04x}] ", base.wrapping_add(row * WIDTH))?;

        for byte in chunk {
            write!(out, "{:02x} ", byte)?;
        }
        for _ in chunk.len()..WIDTH {
            out.write_str("   ")?;
        }

        for &byte in chunk {
            let shown = if (0x20..=0x7e).contains(&byte) {
                byte as char
            } else {
                '.'
            };
            out.write_char(shown)?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}
