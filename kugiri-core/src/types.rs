//! Core types shared by the rule tables and the scanner

use core::fmt;

use serde::{Deserialize, Serialize};

/// Offset in the 16-bit code-unit space the scanner operates in
pub type ScanIndex = usize;

/// Offset counted in Unicode scalar values, as exposed to callers
pub type NativeIndex = usize;

/// The four standard boundary classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryClass {
    /// Extended grapheme clusters
    Grapheme,
    /// Word boundaries
    Word,
    /// Sentence boundaries
    Sentence,
    /// Line-break opportunities
    Line,
}

impl BoundaryClass {
    /// All boundary classes, in declaration order
    pub const ALL: [BoundaryClass; 4] = [
        BoundaryClass::Grapheme,
        BoundaryClass::Word,
        BoundaryClass::Sentence,
        BoundaryClass::Line,
    ];

    /// Short lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            BoundaryClass::Grapheme => "grapheme",
            BoundaryClass::Word => "word",
            BoundaryClass::Sentence => "sentence",
            BoundaryClass::Line => "line",
        }
    }
}

impl fmt::Display for BoundaryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of break reported at a boundary
///
/// Only the line class distinguishes the two in the interior of a text;
/// every other class reports interior boundaries as discretionary. The
/// end of text is always mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakKind {
    /// A break opportunity the caller may take
    #[default]
    Discretionary,
    /// A hard break (end of text, line feed, paragraph separator, ...)
    Mandatory,
}

impl fmt::Display for BreakKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakKind::Discretionary => write!(f, "discretionary"),
            BreakKind::Mandatory => write!(f, "mandatory"),
        }
    }
}

/// A boundary produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// Scan (code-unit) offset of the boundary
    pub offset: ScanIndex,
    /// Whether the break is mandatory
    pub kind: BreakKind,
}

impl Boundary {
    /// Create a new boundary
    pub fn new(offset: ScanIndex, kind: BreakKind) -> Self {
        Self { offset, kind }
    }
}
