//! Offset mapping between the native and scan index spaces
//!
//! Callers address text in Unicode scalar values ("native" offsets) while
//! the scanner counts 16-bit code units ("scan" offsets). For text that stays
//! inside the Basic Multilingual Plane both spaces coincide and no table is
//! ever built. Otherwise an offset table is built once, on first use, and
//! every later lookup is O(1).
//!
//! Rust strings are UTF-8, so slicing also needs byte offsets. That third
//! table is only built for non-ASCII text.

use std::cell::OnceCell;

use crate::error::{CoreError, Result};
use crate::types::{NativeIndex, ScanIndex};

/// Marks the scan offset of a low surrogate in `scan_to_native`
const INSIDE_PAIR: usize = usize::MAX;

#[derive(Debug)]
struct SupplementaryTables {
    /// scan offset -> native offset (`INSIDE_PAIR` between pair halves)
    scan_to_native: Vec<usize>,
    /// native offset -> scan offset
    native_to_scan: Vec<usize>,
}

/// Converts offsets for one text instance
#[derive(Debug)]
pub struct IndexMapper<'t> {
    text: &'t str,
    native_len: usize,
    scan_len: usize,
    supplementary: OnceCell<SupplementaryTables>,
    bytes: OnceCell<Vec<usize>>,
}

impl<'t> IndexMapper<'t> {
    /// Create a mapper for `text`; tables are built lazily
    pub fn new(text: &'t str) -> Self {
        let (native_len, scan_len) = text
            .chars()
            .fold((0, 0), |(n, s), ch| (n + 1, s + ch.len_utf16()));

        Self {
            text,
            native_len,
            scan_len,
            supplementary: OnceCell::new(),
            bytes: OnceCell::new(),
        }
    }

    /// The mapped text
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// Length in scalar values
    pub fn native_len(&self) -> usize {
        self.native_len
    }

    /// Length in 16-bit code units
    pub fn scan_len(&self) -> usize {
        self.scan_len
    }

    /// True when native and scan offsets are interchangeable
    pub fn is_bmp(&self) -> bool {
        self.native_len == self.scan_len
    }

    fn is_ascii(&self) -> bool {
        self.native_len == self.text.len()
    }

    /// Convert a scan offset to a native offset
    ///
    /// Offsets between the halves of a surrogate pair are rejected.
    pub fn to_native(&self, scan: ScanIndex) -> Result<NativeIndex> {
        if scan > self.scan_len {
            return Err(CoreError::OffsetOutOfRange {
                offset: scan,
                len: self.scan_len,
            });
        }
        if self.is_bmp() {
            return Ok(scan);
        }

        match self.supplementary_tables().scan_to_native[scan] {
            INSIDE_PAIR => Err(CoreError::SurrogateSplit { offset: scan }),
            native => Ok(native),
        }
    }

    /// Convert a native offset to a scan offset
    pub fn to_scan(&self, native: NativeIndex) -> Result<ScanIndex> {
        if native > self.native_len {
            return Err(CoreError::OffsetOutOfRange {
                offset: native,
                len: self.native_len,
            });
        }
        if self.is_bmp() {
            return Ok(native);
        }
        Ok(self.supplementary_tables().native_to_scan[native])
    }

    /// Byte offset into the UTF-8 text for a native offset
    pub fn byte_offset(&self, native: NativeIndex) -> Result<usize> {
        if native > self.native_len {
            return Err(CoreError::OffsetOutOfRange {
                offset: native,
                len: self.native_len,
            });
        }
        if self.is_ascii() {
            return Ok(native);
        }
        Ok(self.byte_table()[native])
    }

    /// Substring between two native offsets
    pub fn slice(&self, start: NativeIndex, end: NativeIndex) -> Result<&'t str> {
        if start > end {
            return Err(CoreError::NonMonotonic {
                previous: start,
                next: end,
            });
        }
        let from = self.byte_offset(start)?;
        let to = self.byte_offset(end)?;
        Ok(&self.text[from..to])
    }

    fn supplementary_tables(&self) -> &SupplementaryTables {
        self.supplementary.get_or_init(|| {
            let mut scan_to_native = Vec::with_capacity(self.scan_len + 1);
            let mut native_to_scan = Vec::with_capacity(self.native_len + 1);
            let mut scan = 0;

            for (native, ch) in self.text.chars().enumerate() {
                scan_to_native.push(native);
                native_to_scan.push(scan);
                if ch.len_utf16() == 2 {
                    scan_to_native.push(INSIDE_PAIR);
                }
                scan += ch.len_utf16();
            }
            scan_to_native.push(self.native_len);
            native_to_scan.push(self.scan_len);

            SupplementaryTables {
                scan_to_native,
                native_to_scan,
            }
        })
    }

    fn byte_table(&self) -> &[usize] {
        self.bytes.get_or_init(|| {
            let mut table: Vec<usize> = self.text.char_indices().map(|(i, _)| i).collect();
            table.push(self.text.len());
            table
        })
    }
}
