//! Classified view of a text for rule lookaround
//!
//! Rules look at more than the two characters around a position: word rules
//! skip ignorable characters in both directions, sentence rules walk back
//! over `Close* Sp*`, regional indicators count their run length. The window
//! pairs every character with its property value so those walks never
//! reclassify anything.

use std::cell::Cell;

/// Run length counted at one index, reused by the next count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunMemo {
    index: usize,
    prop: u8,
    count: usize,
}

/// Characters of one text together with their property values
#[derive(Debug, Clone, Copy)]
pub struct CharacterWindow<'a> {
    chars: &'a [char],
    props: &'a [u8],
    memo: Option<&'a Cell<Option<RunMemo>>>,
}

impl<'a> CharacterWindow<'a> {
    /// Create a window; `props` holds one value per character
    pub fn new(chars: &'a [char], props: &'a [u8]) -> Self {
        debug_assert_eq!(chars.len(), props.len());
        Self {
            chars,
            props,
            memo: None,
        }
    }

    /// Remember the last [`run_length`](Self::run_length) in `memo`
    ///
    /// A scan that counts runs at increasing indices then only walks the
    /// characters added since the previous count. The memo must belong to
    /// this text and to a single ignorable predicate.
    pub fn with_run_memo(mut self, memo: &'a Cell<Option<RunMemo>>) -> Self {
        self.memo = Some(memo);
        self
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the window is empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`
    #[inline]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Property value at `index`
    #[inline]
    pub fn prop_at(&self, index: usize) -> Option<u8> {
        self.props.get(index).copied()
    }

    /// All characters
    pub fn chars(&self) -> &'a [char] {
        self.chars
    }

    /// Index of the closest character before `index` whose property is not
    /// ignorable
    pub fn prev_significant(&self, index: usize, ignorable: impl Fn(u8) -> bool) -> Option<usize> {
        (0..index.min(self.len())).rev().find(|&i| !ignorable(self.props[i]))
    }

    /// Index of the closest character after `index` whose property is not
    /// ignorable
    pub fn next_significant(&self, index: usize, ignorable: impl Fn(u8) -> bool) -> Option<usize> {
        (index + 1..self.len()).find(|&i| !ignorable(self.props[i]))
    }

    /// Number of consecutive characters ending at `index` (inclusive) whose
    /// property is `prop`, skipping ignorables
    pub fn run_length(&self, index: usize, prop: u8, ignorable: impl Fn(u8) -> bool) -> usize {
        let cached = self
            .memo
            .and_then(Cell::get)
            .filter(|memo| memo.prop == prop && memo.index <= index);

        let mut count = 0;
        let mut i = (index + 1).min(self.len());
        while i > 0 {
            i -= 1;
            if let Some(memo) = cached.filter(|memo| memo.index == i) {
                count += memo.count;
                break;
            }
            let p = self.props[i];
            if p == prop {
                count += 1;
            } else if !ignorable(p) {
                break;
            }
        }

        if let Some(memo) = self.memo {
            memo.set(Some(RunMemo { index, prop, count }));
        }
        count
    }
}
