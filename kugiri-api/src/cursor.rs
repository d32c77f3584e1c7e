//! Pull cursors over segments and line breaks
//!
//! Cursors are lazy: each pull advances the scanner by exactly one boundary.
//! Dropping a cursor abandons the scan. A cursor that hits an invariant
//! violation yields the error once and is fused afterwards.

use std::iter::FusedIterator;
use std::sync::Arc;

use kugiri_core::{BoundaryClass, BoundaryScanner, IndexMapper, NativeIndex, RuleSet};

use crate::error::Result;
use crate::segment::{LineBreak, Segment, WordPolicy};

/// Lazy sequence of segments of one text
#[derive(Debug)]
pub struct Segments<'t> {
    mapper: IndexMapper<'t>,
    scanner: BoundaryScanner,
    start: NativeIndex,
    policy: WordPolicy,
    failed: bool,
}

impl<'t> Segments<'t> {
    pub(crate) fn new(rules: Arc<RuleSet>, text: &'t str, policy: WordPolicy) -> Self {
        Self {
            mapper: IndexMapper::new(text),
            scanner: BoundaryScanner::new(rules, text),
            start: 0,
            policy,
            failed: false,
        }
    }

    /// Boundary class being segmented
    pub fn class(&self) -> BoundaryClass {
        self.scanner.rules().class()
    }

    /// Pull the next segment
    pub fn try_next(&mut self) -> Result<Option<Segment<'t>>> {
        if self.failed {
            return Ok(None);
        }
        loop {
            let segment = match self.advance() {
                Ok(Some(segment)) => segment,
                Ok(None) => return Ok(None),
                Err(e) => {
                    self.failed = true;
                    log::error!("{} segmentation aborted: {e}", self.class());
                    return Err(e);
                }
            };
            if self.policy.keeps(&segment) {
                return Ok(Some(segment));
            }
        }
    }

    fn advance(&mut self) -> Result<Option<Segment<'t>>> {
        let Some(boundary) = self.scanner.next_boundary()? else {
            return Ok(None);
        };
        let end = self.mapper.to_native(boundary.offset)?;
        let text = self.mapper.slice(self.start, end)?;
        let word_like = self.class() == BoundaryClass::Word && text.chars().any(char::is_alphanumeric);

        let segment = Segment {
            start: self.start,
            end,
            text,
            word_like,
        };
        self.start = end;
        Ok(Some(segment))
    }
}

impl<'t> Iterator for Segments<'t> {
    type Item = Result<Segment<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().transpose()
    }
}

impl FusedIterator for Segments<'_> {}

/// Lazy sequence of line-break opportunities of one text
#[derive(Debug)]
pub struct LineBreaks<'t> {
    mapper: IndexMapper<'t>,
    scanner: BoundaryScanner,
    failed: bool,
}

impl<'t> LineBreaks<'t> {
    pub(crate) fn new(rules: Arc<RuleSet>, text: &'t str) -> Self {
        Self {
            mapper: IndexMapper::new(text),
            scanner: BoundaryScanner::new(rules, text),
            failed: false,
        }
    }

    /// Pull the next break opportunity
    pub fn try_next(&mut self) -> Result<Option<LineBreak>> {
        if self.failed {
            return Ok(None);
        }
        let result = self.advance();
        if let Err(e) = &result {
            self.failed = true;
            log::error!("line segmentation aborted: {e}");
        }
        result
    }

    fn advance(&mut self) -> Result<Option<LineBreak>> {
        let Some(boundary) = self.scanner.next_boundary()? else {
            return Ok(None);
        };
        Ok(Some(LineBreak {
            offset: self.mapper.to_native(boundary.offset)?,
            kind: boundary.kind,
        }))
    }

    /// Only the offsets
    pub fn offsets(self) -> LineOffsets<'t> {
        LineOffsets { breaks: self }
    }
}

impl Iterator for LineBreaks<'_> {
    type Item = Result<LineBreak>;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().transpose()
    }
}

impl FusedIterator for LineBreaks<'_> {}

/// Lazy sequence of line-break offsets
#[derive(Debug)]
pub struct LineOffsets<'t> {
    breaks: LineBreaks<'t>,
}

impl LineOffsets<'_> {
    /// Pull the next offset
    pub fn try_next(&mut self) -> Result<Option<NativeIndex>> {
        Ok(self.breaks.try_next()?.map(|b| b.offset))
    }
}

impl Iterator for LineOffsets<'_> {
    type Item = Result<NativeIndex>;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().transpose()
    }
}

impl FusedIterator for LineOffsets<'_> {}
