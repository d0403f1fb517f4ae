//! Fixed-capacity line buffer with cursor.
//!
//! All editing happens in place. Operations that would overflow the buffer are
//! rejected whole; nothing is ever truncated. `cursor <= len() <= N` holds
//! after every call.
//!
//! Movement and deletion methods return `true` when the line must be redrawn.

use crate::error::CliError;

/// Editable line of at most `N` bytes.
#[derive(Debug, Clone)]
pub struct LineBuffer<const N: usize> {
    text: heapless::Vec<u8, N>,
    cursor: usize,
}

impl<const N: usize> LineBuffer<N> {
    /// Create an empty line.
    pub const fn new() -> Self {
        Self {
            text: heapless::Vec::new(),
            cursor: 0,
        }
    }

    /// Line content as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// Line content as text.
    ///
    /// Bytes from 0x80 up are stored as typed, so the buffer may hold an
    /// incomplete or invalid UTF-8 sequence; only the valid prefix is returned.
    pub fn as_str(&self) -> &str {
        match core::str::from_utf8(&self.text) {
            Ok(text) => text,
            Err(err) => core::str::from_utf8(&self.text[..err.valid_up_to()]).unwrap_or(""),
        }
    }

    /// Number of bytes in the line.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True if the line holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True if no further byte fits.
    pub fn is_full(&self) -> bool {
        self.text.is_full()
    }

    /// Cursor offset from the start of the line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert `byte` at the cursor and advance past it.
    ///
    /// # Errors
    ///
    /// `CliError::BufferFull` if the line is at capacity; the line is unchanged.
    pub fn insert(&mut self, byte: u8) -> Result<(), CliError> {
        self.text
            .insert(self.cursor, byte)
            .map_err(|_| CliError::BufferFull)?;
        self.cursor += 1;
        Ok(())
    }

    /// Move one byte left.
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move one byte right.
    pub fn move_right(&mut self) -> bool {
        if self.cursor == self.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move to the start of the line.
    pub fn move_home(&mut self) -> bool {
        self.cursor = 0;
        true
    }

    /// Move past the last byte.
    pub fn move_end(&mut self) -> bool {
        self.cursor = self.len();
        true
    }

    /// Delete the byte before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.text.remove(self.cursor);
        true
    }

    /// Delete the byte under the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor == self.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    /// Delete backward to the start of the previous word.
    ///
    /// Skips spaces, then non-spaces, and removes everything between there and
    /// the cursor.
    pub fn delete_word(&mut self) -> bool {
        let end = self.cursor;
        let mut start = end;
        while start > 0 && self.text[start - 1] == b' ' {
            start -= 1;
        }
        while start > 0 && self.text[start - 1] != b' ' {
            start -= 1;
        }
        self.remove_span(start, end);
        self.cursor = start;
        true
    }

    /// Swap the bytes before and under the cursor, then advance.
    pub fn transpose(&mut self) -> bool {
        if self.cursor == 0 || self.cursor >= self.len() {
            return false;
        }
        self.text.swap(self.cursor - 1, self.cursor);
        self.cursor += 1;
        true
    }

    /// Drop everything from the cursor on.
    pub fn kill_to_end(&mut self) -> bool {
        self.text.truncate(self.cursor);
        true
    }

    /// Empty the line.
    pub fn clear(&mut self) -> bool {
        self.text.clear();
        self.cursor = 0;
        true
    }

    /// Replace the whole line and put the cursor at its end.
    ///
    /// # Errors
    ///
    /// `CliError::BufferFull` if `line` is longer than `N`; the line is unchanged.
    pub fn set(&mut self, line: &str) -> Result<(), CliError> {
        let text = heapless::Vec::from_slice(line.as_bytes()).map_err(|_| CliError::BufferFull)?;
        self.text = text;
        self.cursor = self.len();
        Ok(())
    }

    /// Byte range `[start, end)` of the space-separated word number `word`.
    ///
    /// A word past the last one yields an empty span at the end of the line.
    pub fn word_span(&self, word: usize) -> (usize, usize) {
        let text = self.as_bytes();
        let skip = |mut pos: usize, space: bool| {
            while pos < text.len() && (text[pos] == b' ') == space {
                pos += 1;
            }
            pos
        };

        let mut start = skip(0, true);
        for _ in 0..word {
            start = skip(skip(start, false), true);
        }
        (start, skip(start, false))
    }

    /// Overwrite word number `word` with `replacement`.
    ///
    /// A cursor inside the word lands at the end of the replacement; a cursor
    /// further right shifts by the change in length.
    ///
    /// # Errors
    ///
    /// `CliError::BufferFull` if the result would not fit; the line is unchanged.
    pub fn replace_word(&mut self, word: usize, replacement: &str) -> Result<(), CliError> {
        let (start, end) = self.word_span(word);
        let old_len = self.len();
        let need = replacement.len();
        let new_len = old_len - (end - start) + need;
        if new_len > N {
            return Err(CliError::BufferFull);
        }

        if new_len > old_len {
            self.text
                .resize(new_len, 0)
                .map_err(|_| CliError::BufferFull)?;
            self.text.copy_within(end..old_len, start + need);
        } else {
            self.text.copy_within(end..old_len, start + need);
            self.text.truncate(new_len);
        }
        self.text[start..start + need].copy_from_slice(replacement.as_bytes());

        self.cursor = if self.cursor < end {
            start + need
        } else {
            self.cursor - (end - start) + need
        };
        Ok(())
    }

    fn remove_span(&mut self, start: usize, end: usize) {
        let len = self.len();
        self.text.copy_within(end..len, start);
        self.text.truncate(len - (end - start));
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
