//! Command history ring with browsing and bang recall.
//!
//! Uses stub type pattern - struct always exists, but behavior is feature-gated.
//! A ring of zero slots behaves like the stub.

#![cfg_attr(not(feature = "history"), allow(unused_variables))]

#[cfg(not(feature = "history"))]
use core::marker::PhantomData;

/// History browsing direction.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Up arrow key (towards older lines)
    Older = 0,

    /// Down arrow key (towards newer lines, then the empty line)
    Newer = 1,
}

/// Ring of the last `N` submitted lines, each at most `LINE` bytes.
///
/// `current` is the slot written last; `browse` is the slot shown while the
/// user walks the ring with up/down, `None` while editing a fresh line.
#[derive(Debug)]
pub struct History<const N: usize, const LINE: usize> {
    #[cfg(feature = "history")]
    slots: [heapless::String<LINE>; N],

    #[cfg(feature = "history")]
    current: usize,

    #[cfg(feature = "history")]
    browse: Option<usize>,

    #[cfg(not(feature = "history"))]
    _phantom: PhantomData<[u8; LINE]>,
}

impl<const N: usize, const LINE: usize> History<N, LINE> {
    /// True when lines are actually kept.
    pub const ENABLED: bool = cfg!(feature = "history") && N > 0;

    /// Create empty history.
    #[cfg(feature = "history")]
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| heapless::String::new()),
            current: 0,
            browse: None,
        }
    }

    /// Create empty history (stub version).
    #[cfg(not(feature = "history"))]
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    /// Store a submitted line.
    ///
    /// Empty lines and repeats of the most recent line are not stored. Always
    /// ends any browsing in progress.
    #[cfg(feature = "history")]
    pub fn record(&mut self, line: &str) {
        self.browse = None;
        if N == 0 || line.is_empty() || self.slots[self.current].as_str() == line {
            return;
        }

        let mut entry = heapless::String::new();
        if entry.push_str(line).is_err() {
            return;
        }
        self.current = (self.current + 1) % N;
        self.slots[self.current] = entry;
    }

    /// Store a submitted line (stub version - no-op).
    #[cfg(not(feature = "history"))]
    pub fn record(&mut self, _line: &str) {}

    /// Step through the ring.
    ///
    /// Returns the line to show, `Some("")` when stepping past the newest
    /// entry, or `None` when there is nowhere to go.
    #[cfg(feature = "history")]
    pub fn browse(&mut self, direction: HistoryDirection) -> Option<&str> {
        if N == 0 {
            return None;
        }

        let slot = match (direction, self.browse) {
            (HistoryDirection::Older, None) => self.current,
            (HistoryDirection::Older, Some(pos)) => {
                let older = (pos + N - 1) % N;
                if older == self.current {
                    // Wrapped all the way round a full ring
                    return None;
                }
                older
            }
            (HistoryDirection::Newer, None) => return None,
            (HistoryDirection::Newer, Some(pos)) if pos == self.current => {
                self.browse = None;
                return Some("");
            }
            (HistoryDirection::Newer, Some(pos)) => (pos + 1) % N,
        };

        if self.slots[slot].is_empty() {
            return None;
        }
        self.browse = Some(slot);
        Some(self.slots[slot].as_str())
    }

    /// Step through the ring (stub version - returns None).
    #[cfg(not(feature = "history"))]
    pub fn browse(&mut self, _direction: HistoryDirection) -> Option<&str> {
        None
    }

    /// Stored lines, oldest first.
    #[cfg(feature = "history")]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        (1..=N)
            .map(move |step| self.slots[(self.current + step) % N].as_str())
            .filter(|line| !line.is_empty())
    }

    /// Stored lines (stub version - always empty).
    #[cfg(not(feature = "history"))]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        core::iter::empty()
    }

    /// Line number `index` in oldest-first order, as shown by `history`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.iter().nth(index)
    }

    /// Latest line that starts with `prefix` and is longer than it.
    ///
    /// The search starts one before the most recent line and walks back to
    /// the oldest.
    #[cfg(feature = "history")]
    pub fn find_prefix(&self, prefix: &str) -> Option<&str> {
        (1..N)
            .map(|back| self.slots[(self.current + N - back) % N].as_str())
            .find(|line| line.len() > prefix.len() && line.starts_with(prefix))
    }

    /// Prefix search (stub version - returns None).
    #[cfg(not(feature = "history"))]
    pub fn find_prefix(&self, _prefix: &str) -> Option<&str> {
        None
    }

    /// True while a stored line is being shown.
    #[cfg(feature = "history")]
    pub fn is_browsing(&self) -> bool {
        self.browse.is_some()
    }

    /// True while a stored line is being shown (stub version - always false).
    #[cfg(not(feature = "history"))]
    pub fn is_browsing(&self) -> bool {
        false
    }
}

impl<const N: usize, const LINE: usize> Default for History<N, LINE> {
    fn default() -> Self {
        Self::new()
    }
}
