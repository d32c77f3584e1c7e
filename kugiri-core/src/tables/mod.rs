//! Boundary property tables
//!
//! Each boundary class assigns every character a small property value and
//! compiles a [`PairTable`] from its rule chain. The scanner looks up the
//! `(left, right)` property pair at every position; pairs whose outcome
//! depends on more than two characters are marked [`Pair::Context`] and are
//! resolved by the class-specific lookaround code.

pub mod abbreviation;
pub mod dictionary;
pub(crate) mod grapheme;
pub(crate) mod line;
pub(crate) mod ranges;
pub(crate) mod sentence;
pub mod sentence_starters;
pub(crate) mod word;

/// Outcome of a property pair lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pair {
    /// Always a boundary
    Break,
    /// Never a boundary
    Keep,
    /// Needs lookbehind or lookahead past the pair
    Context,
}

/// Dense `width x width` table of pair outcomes
#[derive(Debug, Clone)]
pub(crate) struct PairTable {
    width: usize,
    cells: Vec<Pair>,
}

impl PairTable {
    /// Evaluate `rule` for every property pair
    pub(crate) fn compile(width: usize, rule: impl Fn(u8, u8) -> Pair) -> Self {
        let mut cells = Vec::with_capacity(width * width);
        for left in 0..width {
            for right in 0..width {
                cells.push(rule(left as u8, right as u8));
            }
        }
        Self { width, cells }
    }

    #[inline]
    pub(crate) fn get(&self, left: u8, right: u8) -> Pair {
        // Out-of-table values only come from a broken classifier; breaking
        // keeps the scan moving forward.
        self.cells
            .get(left as usize * self.width + right as usize)
            .copied()
            .unwrap_or(Pair::Break)
    }
}
