//! Boundary scanner
//!
//! A [`BoundaryScanner`] walks one text with one [`RuleSet`] and hands out
//! successive boundary offsets in the code-unit space. Each text character is
//! classified once up front; the pair rules are then evaluated lazily, one
//! boundary per pull. Runs of spaceless script are handed to the rule set's
//! lexicon the first time the scan enters them.

use std::cell::Cell;
use std::sync::Arc;

use crate::character_window::{CharacterWindow, RunMemo};
use crate::error::{CoreError, Result};
use crate::rules::RuleSet;
use crate::tables::dictionary::RunBreaks;
use crate::types::{Boundary, BreakKind, ScanIndex};

/// Scanner lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    /// No boundary handed out yet
    Ready,
    /// At least one boundary handed out, more may follow
    Scanning,
    /// The final boundary was handed out, or the scan aborted
    Exhausted,
}

/// Dictionary breaks of the run the scan is currently inside
#[derive(Debug)]
struct DictionaryRun {
    start: usize,
    end: usize,
    breaks: RunBreaks,
}

impl DictionaryRun {
    fn spans(&self, pos: usize) -> bool {
        self.start < pos && pos < self.end
    }
}

/// Per-text scan state
#[derive(Debug)]
pub struct BoundaryScanner {
    rules: Arc<RuleSet>,
    chars: Vec<char>,
    props: Vec<u8>,
    /// Scan offset of every character, plus the text length
    offsets: Vec<ScanIndex>,
    /// Character index of the last boundary
    cursor: usize,
    last: Option<ScanIndex>,
    phase: ScanPhase,
    run: Option<DictionaryRun>,
    /// Regional-indicator run counted at the previous position
    run_memo: Cell<Option<RunMemo>>,
}

impl BoundaryScanner {
    /// Create a scanner over `text`
    pub fn new(rules: Arc<RuleSet>, text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let props = chars.iter().map(|&ch| rules.property_of(ch)).collect();

        let mut offsets = Vec::with_capacity(chars.len() + 1);
        let mut scan = 0;
        for ch in &chars {
            offsets.push(scan);
            scan += ch.len_utf16();
        }
        offsets.push(scan);

        Self {
            rules,
            chars,
            props,
            offsets,
            cursor: 0,
            last: None,
            phase: ScanPhase::Ready,
            run: None,
            run_memo: Cell::new(None),
        }
    }

    /// Current phase
    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// Rules driving this scan
    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    /// Length of the text in code units
    pub fn scan_len(&self) -> ScanIndex {
        self.offsets[self.offsets.len() - 1]
    }

    /// Next boundary after the previous one
    ///
    /// The last boundary is the text length and is always mandatory. After
    /// it, or after an error, the scanner is exhausted and returns `None`.
    pub fn next_boundary(&mut self) -> Result<Option<Boundary>> {
        match self.phase {
            ScanPhase::Exhausted => return Ok(None),
            ScanPhase::Ready if self.chars.is_empty() => {
                self.phase = ScanPhase::Exhausted;
                return Ok(None);
            }
            ScanPhase::Ready => self.phase = ScanPhase::Scanning,
            ScanPhase::Scanning => {}
        }

        let len = self.chars.len();
        let mut pos = self.cursor + 1;
        let kind = loop {
            if pos >= len {
                pos = len;
                break BreakKind::Mandatory;
            }
            if let Some(kind) = self.break_before(pos) {
                break kind;
            }
            pos += 1;
        };

        let offset = self.offsets[pos];
        if let Some(previous) = self.last {
            if offset <= previous {
                self.phase = ScanPhase::Exhausted;
                log::error!(
                    "{} scan aborted: boundary {offset} after {previous}",
                    self.rules.class()
                );
                return Err(CoreError::NonMonotonic {
                    previous,
                    next: offset,
                });
            }
        }

        self.cursor = pos;
        self.last = Some(offset);
        if pos == len {
            self.phase = ScanPhase::Exhausted;
        }
        Ok(Some(Boundary::new(offset, kind)))
    }

    fn break_before(&mut self, pos: usize) -> Option<BreakKind> {
        if let Some(lexicon) = self.rules.lexicon() {
            if lexicon.covers(self.chars[pos - 1]) && lexicon.covers(self.chars[pos]) {
                if !self.run.as_ref().is_some_and(|run| run.spans(pos)) {
                    let mut start = pos - 1;
                    while start > 0 && lexicon.covers(self.chars[start - 1]) {
                        start -= 1;
                    }
                    let mut end = pos + 1;
                    while end < self.chars.len() && lexicon.covers(self.chars[end]) {
                        end += 1;
                    }
                    let breaks = lexicon
                        .segment(&self.chars[start..end], self.rules.properties())
                        .into_iter()
                        .map(|b| b + start)
                        .collect();
                    self.run = Some(DictionaryRun { start, end, breaks });
                }
                let is_break = self.run.as_ref().is_some_and(|run| run.breaks.binary_search(&pos).is_ok());
                return is_break.then_some(BreakKind::Discretionary);
            }
        }

        let window = CharacterWindow::new(&self.chars, &self.props).with_run_memo(&self.run_memo);
        self.rules.break_before(&window, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale;
    use crate::properties::UnicodeProperties;
    use crate::types::BoundaryClass;

    fn rules(class: BoundaryClass, code: &str) -> Arc<RuleSet> {
        let data = locale::embedded(code).unwrap();
        Arc::new(RuleSet::compile(class, &data, Arc::new(UnicodeProperties)).unwrap())
    }

    fn collect(scanner: &mut BoundaryScanner) -> Vec<Boundary> {
        let mut out = Vec::new();
        while let Some(boundary) = scanner.next_boundary().unwrap() {
            out.push(boundary);
        }
        out
    }

    fn offsets(class: BoundaryClass, code: &str, text: &str) -> Vec<ScanIndex> {
        let mut scanner = BoundaryScanner::new(rules(class, code), text);
        collect(&mut scanner).iter().map(|b| b.offset).collect()
    }

    #[test]
    fn test_empty_text_is_exhausted() {
        let mut scanner = BoundaryScanner::new(rules(BoundaryClass::Word, "root"), "");
        assert_eq!(scanner.phase(), ScanPhase::Ready);
        assert_eq!(scanner.next_boundary().unwrap(), None);
        assert_eq!(scanner.phase(), ScanPhase::Exhausted);
        assert_eq!(scanner.next_boundary().unwrap(), None);
    }

    #[test]
    fn test_phases() {
        let mut scanner = BoundaryScanner::new(rules(BoundaryClass::Word, "root"), "a b");
        assert_eq!(scanner.phase(), ScanPhase::Ready);
        assert_eq!(scanner.next_boundary().unwrap().map(|b| b.offset), Some(1));
        assert_eq!(scanner.phase(), ScanPhase::Scanning);
        collect(&mut scanner);
        assert_eq!(scanner.phase(), ScanPhase::Exhausted);
        assert_eq!(scanner.next_boundary().unwrap(), None);
    }

    #[test]
    fn test_final_boundary_is_mandatory() {
        let mut scanner = BoundaryScanner::new(rules(BoundaryClass::Grapheme, "root"), "ab");
        let boundaries = collect(&mut scanner);
        assert_eq!(
            boundaries,
            vec![
                Boundary::new(1, BreakKind::Discretionary),
                Boundary::new(2, BreakKind::Mandatory)
            ]
        );
    }

    #[test]
    fn test_offsets_are_code_units() {
        // U+1F600 takes two code units
        assert_eq!(offsets(BoundaryClass::Grapheme, "root", "a\u{1F600}b"), vec![1, 3, 4]);
        let scanner = BoundaryScanner::new(rules(BoundaryClass::Grapheme, "root"), "a\u{1F600}b");
        assert_eq!(scanner.scan_len(), 4);
    }

    #[test]
    fn test_grapheme_clusters() {
        assert_eq!(offsets(BoundaryClass::Grapheme, "root", "e\u{301}x"), vec![2, 3]);
        // flag: two regional indicators
        assert_eq!(offsets(BoundaryClass::Grapheme, "root", "\u{1F1EF}\u{1F1F5}"), vec![4]);
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(
            offsets(BoundaryClass::Word, "root", "Hello, world!"),
            vec![5, 6, 7, 12, 13]
        );
    }

    #[test]
    fn test_dictionary_overlay() {
        let text = "สวัสดีครับ";
        assert_eq!(offsets(BoundaryClass::Word, "root", text), vec![10]);
        assert_eq!(offsets(BoundaryClass::Word, "th", text), vec![6, 10]);
    }

    #[test]
    fn test_dictionary_run_ends_at_other_script() {
        assert_eq!(offsets(BoundaryClass::Word, "th", "ครับ ok"), vec![4, 5, 7]);
    }

    #[test]
    fn test_line_break_kinds() {
        let mut scanner = BoundaryScanner::new(rules(BoundaryClass::Line, "root"), "a b\nc");
        let boundaries = collect(&mut scanner);
        assert_eq!(
            boundaries,
            vec![
                Boundary::new(2, BreakKind::Discretionary),
                Boundary::new(4, BreakKind::Mandatory),
                Boundary::new(5, BreakKind::Mandatory)
            ]
        );
    }

    #[test]
    fn test_non_monotonic_aborts() {
        let mut scanner = BoundaryScanner::new(rules(BoundaryClass::Grapheme, "root"), "abc");
        scanner.last = Some(10);
        assert_eq!(
            scanner.next_boundary(),
            Err(CoreError::NonMonotonic {
                previous: 10,
                next: 1
            })
        );
        assert_eq!(scanner.phase(), ScanPhase::Exhausted);
        assert_eq!(scanner.next_boundary(), Ok(None));
    }
}
