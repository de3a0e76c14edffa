//! Core types for the GS1 composite/DataBar Expanded encoder.
//!
//! This module defines all fundamental types used to represent symbol
//! variants, element-width rows, and the fully encoded output of a call
//! to the encoder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which symbol family a payload is being encoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolVariant {
    /// Composite Component A, linked to a DataBar Expanded primary.
    CcA,
    /// Composite Component B, linked to a DataBar Expanded primary.
    CcB,
    /// Composite Component C, linked to an EAN/UPC or DataBar primary.
    CcC,
    /// Standalone (or primary) GS1 DataBar Expanded / Expanded Stacked symbol.
    DataBarExpanded,
}

impl fmt::Display for SymbolVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymbolVariant::CcA => "CC-A",
            SymbolVariant::CcB => "CC-B",
            SymbolVariant::CcC => "CC-C",
            SymbolVariant::DataBarExpanded => "DataBar Expanded",
        };
        f.write_str(name)
    }
}

/// The column count selected for a CC-A/CC-B symbol, distinct from CC-C's
/// free column count because CC-A/CC-B columns gate a fixed capacity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CcColumns {
    Two,
    Three,
    Four,
}

impl CcColumns {
    pub fn count(self) -> usize {
        match self {
            CcColumns::Two => 2,
            CcColumns::Three => 3,
            CcColumns::Four => 4,
        }
    }
}

/// One element-width row of a symbol, ready for a [`crate::RowSink`].
///
/// Widths are module counts in `[1, 9]`; colour alternates starting from
/// `wht_first`. This mirrors the `sPrints` layout of the reference
/// encoder: left/right padding in modules, an optional guard bars flag,
/// a pixel height, and a reverse flag for mirrored finder rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Element widths in module units, alternating colour from `wht_first`.
    pub pattern: Vec<u8>,
    /// Quiet-zone/padding modules to the left of the first element.
    pub left_pad: u8,
    /// Quiet-zone/padding modules to the right of the last element.
    pub right_pad: u8,
    /// True if the first element is white (a quiet-zone-adjacent module).
    pub wht_first: bool,
    /// True if this row's finder set is mirrored (right-to-left read order).
    pub reverse: bool,
    /// True if start/stop guard bars should be drawn around this row.
    pub guards: bool,
    /// Row height in modules (rendered pixel height is the driver's concern).
    pub height: u16,
    /// True if this row is a generated "chex" separator, not a data row.
    pub is_separator: bool,
}

impl Row {
    pub fn width_modules(&self) -> u32 {
        self.pattern.iter().map(|&w| w as u32).sum::<u32>()
            + self.left_pad as u32
            + self.right_pad as u32
    }
}

/// A fully encoded symbol: its variant, dimensions, and row sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedSymbol {
    pub variant: SymbolVariant,
    /// Number of data+ecc codewords packed into this symbol.
    pub codeword_count: usize,
    /// Number of rows for a CC-A/B/C symbol, or segments for DataBar Expanded.
    pub row_count: usize,
    /// Number of unused bits left after padding, as reported by the sizer.
    pub unused_bits: usize,
    /// The packed codeword sequence (data followed by ECC for CC-A/B/C, or
    /// the check character followed by data symbol characters for DataBar
    /// Expanded), retained for debug/conformance dumps.
    pub codewords: Vec<u32>,
    pub rows: Vec<Row>,
}

impl EncodedSymbol {
    pub fn new(variant: SymbolVariant) -> Self {
        EncodedSymbol {
            variant,
            codeword_count: 0,
            row_count: 0,
            unused_bits: 0,
            codewords: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.row_count = rows.len();
        self.rows = rows;
        self
    }

    pub fn with_codeword_count(mut self, count: usize) -> Self {
        self.codeword_count = count;
        self
    }

    /// Attaches the packed codeword sequence and sets `codeword_count` from
    /// its length.
    pub fn with_codewords(mut self, codewords: Vec<u32>) -> Self {
        self.codeword_count = codewords.len();
        self.codewords = codewords;
        self
    }

    pub fn with_unused_bits(mut self, unused: usize) -> Self {
        self.unused_bits = unused;
        self
    }
}

impl fmt::Display for EncodedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} rows, {} codewords, {} unused bits)",
            self.variant, self.row_count, self.codeword_count, self.unused_bits
        )
    }
}

/// Tuning knobs that are genuinely optional at the call site.
#[derive(Debug, Clone)]
pub struct GsEncoderOptions {
    /// Preferred CC-C column count; the sizer may narrow it to satisfy the
    /// aspect-ratio constraint.
    pub cc_c_preferred_columns: usize,
    /// Minimum DataBar Expanded segment width in symbol characters.
    pub min_segment_width: usize,
    /// When set, a 2D composite component is paired with the linear primary.
    pub composite: Option<SymbolVariant>,
}

impl GsEncoderOptions {
    pub fn new() -> Self {
        GsEncoderOptions {
            cc_c_preferred_columns: 4,
            min_segment_width: 4,
            composite: None,
        }
    }

    /// Linear DataBar Expanded only, no paired composite.
    pub fn linear_only() -> Self {
        GsEncoderOptions::new()
    }

    /// Pair the linear primary with the given composite component.
    pub fn with_composite(mut self, variant: SymbolVariant) -> Self {
        self.composite = Some(variant);
        self
    }

    pub fn with_cc_c_columns(mut self, columns: usize) -> Self {
        self.cc_c_preferred_columns = columns;
        self
    }
}

impl Default for GsEncoderOptions {
    fn default() -> Self {
        GsEncoderOptions::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_width_modules() {
        let row = Row {
            pattern: vec![1, 2, 3],
            left_pad: 1,
            right_pad: 1,
            wht_first: true,
            reverse: false,
            guards: true,
            height: 34,
            is_separator: false,
        };
        assert_eq!(row.width_modules(), 8);
    }

    #[test]
    fn test_encoded_symbol_display() {
        let sym = EncodedSymbol::new(SymbolVariant::CcA)
            .with_codeword_count(12)
            .with_unused_bits(3);
        let s = sym.to_string();
        assert!(s.contains("CC-A"));
        assert!(s.contains('3'));
    }

    #[test]
    fn test_options_defaults() {
        let opts = GsEncoderOptions::new();
        assert_eq!(opts.min_segment_width, 4);
        assert!(opts.composite.is_none());
    }
}
