//! Input decoder for terminal byte sequences.
//!
//! Provides the state machine that interprets ANSI/VT100 escape sequences
//! (arrows, home/end, delete) and maps control bytes to editing keys.
//!
//! This is a pure decoder - it doesn't manage buffers or I/O. It converts raw
//! bytes into logical keys; unknown sequences are logged and dropped.

/// Decoder state for escape sequence handling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecodeState {
    /// Normal input mode
    Idle,

    /// Saw ESC
    Escape,

    /// Saw ESC [
    Bracket,

    /// Saw ESC [ <digit>; the digit is kept for the final byte
    BracketExtended(u8),

    /// Saw ESC O
    Oh,
}

/// Logical key produced by the decoder.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    /// Printable ASCII byte, or any byte from 0x80 up (UTF-8 passes through)
    Char(u8),

    /// Carriage return or line feed
    Enter,

    /// Tab (completion)
    Tab,

    /// DEL or Ctrl-H
    Backspace,

    /// ESC [ 3 ~
    Delete,

    /// ESC [ A or Ctrl-P
    Up,

    /// ESC [ B or Ctrl-N
    Down,

    /// ESC [ C or Ctrl-F
    Right,

    /// ESC [ D or Ctrl-B
    Left,

    /// ESC [ H, ESC O H or Ctrl-A
    Home,

    /// ESC [ F, ESC O F or Ctrl-E
    End,

    /// Ctrl-C
    Interrupt,

    /// Ctrl-D
    EndOfFile,

    /// Ctrl-K
    KillToEnd,

    /// Ctrl-L
    ClearScreen,

    /// Ctrl-T
    Transpose,

    /// Ctrl-U
    ClearLine,

    /// Ctrl-W
    DeleteWord,
}

const ESC: u8 = 0x1b;

const fn ctrl(letter: u8) -> u8 {
    letter & 0x1f
}

/// Terminal key decoder.
///
/// Feed bytes one at a time; `None` means the byte was consumed as part of an
/// escape sequence still in progress, or dropped.
#[derive(Debug)]
pub struct KeyDecoder {
    state: DecodeState,
}

impl KeyDecoder {
    /// Create new decoder in Idle state.
    pub const fn new() -> Self {
        Self {
            state: DecodeState::Idle,
        }
    }

    /// Decode a single byte.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let mut decoder = KeyDecoder::new();
    /// assert_eq!(decoder.decode(0x1b), None);
    /// assert_eq!(decoder.decode(b'['), None);
    /// assert_eq!(decoder.decode(b'A'), Some(Key::Up));
    /// ```
    pub fn decode(&mut self, byte: u8) -> Option<Key> {
        match self.state {
            DecodeState::Idle => self.decode_idle(byte),
            DecodeState::Escape => self.decode_escape(byte),
            DecodeState::Bracket => self.decode_bracket(byte),
            DecodeState::BracketExtended(stored) => self.decode_extended(stored, byte),
            DecodeState::Oh => self.decode_oh(byte),
        }
    }

    fn decode_idle(&mut self, byte: u8) -> Option<Key> {
        let key = match byte {
            ESC => {
                self.state = DecodeState::Escape;
                return None;
            }
            b'\r' | b'\n' => Key::Enter,
            b'\t' => Key::Tab,
            0x7f => Key::Backspace,
            b if b == ctrl(b'H') => Key::Backspace,
            b if b == ctrl(b'A') => Key::Home,
            b if b == ctrl(b'E') => Key::End,
            b if b == ctrl(b'B') => Key::Left,
            b if b == ctrl(b'F') => Key::Right,
            b if b == ctrl(b'P') => Key::Up,
            b if b == ctrl(b'N') => Key::Down,
            b if b == ctrl(b'C') => Key::Interrupt,
            b if b == ctrl(b'D') => Key::EndOfFile,
            b if b == ctrl(b'K') => Key::KillToEnd,
            b if b == ctrl(b'L') => Key::ClearScreen,
            b if b == ctrl(b'T') => Key::Transpose,
            b if b == ctrl(b'U') => Key::ClearLine,
            b if b == ctrl(b'W') => Key::DeleteWord,
            0x20..=0x7e | 0x80..=0xff => Key::Char(byte),
            _ => {
                log::trace!("ignored byte 0x{:02x}", byte);
                return None;
            }
        };
        Some(key)
    }

    fn decode_escape(&mut self, byte: u8) -> Option<Key> {
        self.state = match byte {
            b'[' => DecodeState::Bracket,
            b'O' => DecodeState::Oh,
            _ => {
                log::debug!("unknown escape 0x{:02x}", byte);
                DecodeState::Idle
            }
        };
        None
    }

    fn decode_bracket(&mut self, byte: u8) -> Option<Key> {
        self.state = DecodeState::Idle;
        match byte {
            b'0'..=b'9' => {
                self.state = DecodeState::BracketExtended(byte);
                None
            }
            b'A' => Some(Key::Up),
            b'B' => Some(Key::Down),
            b'C' => Some(Key::Right),
            b'D' => Some(Key::Left),
            b'H' => Some(Key::Home),
            b'F' => Some(Key::End),
            _ => {
                log::debug!("unknown escape [ 0x{:02x}", byte);
                None
            }
        }
    }

    fn decode_extended(&mut self, stored: u8, byte: u8) -> Option<Key> {
        self.state = DecodeState::Idle;
        if stored == b'3' && byte == b'~' {
            return Some(Key::Delete);
        }
        log::debug!("unknown escape [ 0x{:02x} 0x{:02x}", stored, byte);
        None
    }

    fn decode_oh(&mut self, byte: u8) -> Option<Key> {
        self.state = DecodeState::Idle;
        match byte {
            b'H' => Some(Key::Home),
            b'F' => Some(Key::End),
            _ => {
                log::debug!("unknown escape O 0x{:02x}", byte);
                None
            }
        }
    }

    /// Reset decoder state to Idle.
    pub fn reset(&mut self) {
        self.state = DecodeState::Idle;
    }

    /// Current decoder state.
    pub fn state(&self) -> DecodeState {
        self.state
    }
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new()
    }
}
