//! GS1 Composite Component & DataBar Expanded Symbol Encoder
//!
//! This library encodes GS1 Application Identifier payloads into
//! element-width row patterns for CC-A, CC-B, and CC-C composite
//! components, and for standalone GS1 DataBar Expanded symbols.
//!
//! # Features
//!
//! - **Composite components**: CC-A (base-928), CC-B and CC-C (base-900)
//!   codeword packing with GF(929) Reed–Solomon error correction
//! - **DataBar Expanded**: linear and stacked row layout with finder
//!   selection, running parity, and separator/"chex" row generation
//! - **Method selection**: the fixed-format headers (weight, date, GTIN)
//!   defined by the DataBar Expanded and composite symbologies
//! - **Driver-agnostic output**: a `RowSink` trait decouples row
//!   production from rasterization
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gs1_compositer::{encode_databar_expanded, GsEncoderOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let symbol = encode_databar_expanded(b"0195012345678903", &GsEncoderOptions::new())?;
//!     println!("{}", symbol);
//!     Ok(())
//! }
//! ```
//!
//! # Symbol Family Support
//!
//! - **CC-A / CC-B**: base-928 or base-900 codewords over a 2/3/4-column
//!   row grid with Row Address Pattern (RAP) addressing
//! - **CC-C**: base-900 codewords over a free-form row/column grid sized
//!   to an aspect-ratio constraint
//! - **DataBar Expanded**: linear or stacked double-segment rows with a
//!   leading check character

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]

pub mod base900;
pub mod base928;
pub mod bitbuf;
pub mod charclass;
pub mod compaction;
pub mod error;
pub mod formatter;
pub mod gf929;
pub mod layout_cc;
pub mod layout_cc_c;
pub mod layout_dbe;
pub mod method;
pub mod sizer;
pub mod tables;
pub mod types;

pub use error::{GsEncodeError, Result};
pub use formatter::{HumanFormatter, JsonFormatter, SymbolFormatter};
pub use types::{CcColumns, EncodedSymbol, GsEncoderOptions, Row, SymbolVariant};

use bitbuf::BitBuffer;
use charclass::{is_legal, FINI_CHAR};

/// Accepts fully formed rows as they are produced; a caller supplies an
/// implementation to rasterize, print, or collect the symbol. The library
/// does not rasterize to pixels itself (see the crate-level docs).
pub trait RowSink {
    fn accept(&mut self, row: Row);
}

/// An in-memory collecting sink sufficient for tests and library callers
/// that just want the row vector.
#[derive(Debug, Default)]
pub struct RowCollector {
    pub rows: Vec<Row>,
}

impl RowSink for RowCollector {
    fn accept(&mut self, row: Row) {
        self.rows.push(row);
    }
}

const CC_A_CAPACITY_BYTES: usize = 20;
const CC_B_CAPACITY_BYTES: usize = 148;
const CC_C_CAPACITY_BYTES: usize = 1033;
const DBE_CAPACITY_BYTES: usize = 24;

fn validate_payload(payload: &[u8], forbid_separator: bool) -> Result<()> {
    for (i, &b) in payload.iter().enumerate() {
        if b == FINI_CHAR {
            break;
        }
        if !is_legal(b) {
            return Err(GsEncodeError::IllegalCharacter { index: i, byte: b });
        }
        if forbid_separator && b == charclass::SYMBOL_SEPARATOR_CHAR {
            return Err(GsEncodeError::SeparatorNotPermitted {
                context: "GS1 DataBar Expanded",
            });
        }
    }
    Ok(())
}

/// Runs the 2D composite method selector (§4.F) ahead of the general
/// compaction automaton: writes the method header (and any AI data the
/// header consumes directly, such as a packed AI-11/17 date) into `buf`,
/// then hands the remainder of `payload` to the automaton starting in the
/// mode the selected method requires (NUM, or ALPH for the AI-90 path).
fn compact_composite(buf: &mut BitBuffer, payload: &[u8]) -> Result<()> {
    let (consumed, start_mode) = method::write_composite_header(buf, payload)?;
    compaction::compact_from(buf, &payload[consumed..], start_mode)
}

/// Compacts `payload` and packs it as CC-A codewords (base-928) with
/// Reed–Solomon error correction, then lays out the resulting rows.
pub fn encode_cc_a(payload: &[u8], options: &GsEncoderOptions) -> Result<EncodedSymbol> {
    validate_payload(payload, false)?;
    tracing::debug!(len = payload.len(), "encoding CC-A");

    let mut buf = BitBuffer::with_capacity(CC_A_CAPACITY_BYTES);
    compact_composite(&mut buf, payload)?;

    // §4.G's sizer picks the smallest size class that fits the compacted
    // stream; §4.E's pad rule then fills the remaining capacity with the
    // 00100 ALNU-latch pattern before the stream is packed into codewords,
    // so the packed codeword count matches that size class's row layout.
    let fit = sizer::size_cc_a(CcColumns::Two, buf.cursor())?;
    buf.pad_to(buf.cursor() + fit.unused)?;

    let bits: Vec<bool> = (0..buf.cursor()).map(|i| buf.get(i)).collect();
    let data_cws = base928::encode_928(&bits);

    let ecc_count = sizer::ecc_codewords_cc_ab(CcColumns::Two, fit.size_index);
    let codewords = gf929::generate_ecc(&data_cws, ecc_count);
    let _ = options;

    let local_idx = sizer::local_index_cc_ab(CcColumns::Two, fit);
    let rows = layout_cc::layout(CcColumns::Two, fit.is_cca, local_idx, &codewords);
    tracing::debug!(rows = rows.len(), "CC-A row layout complete");

    Ok(EncodedSymbol::new(SymbolVariant::CcA)
        .with_codewords(codewords)
        .with_unused_bits(fit.unused)
        .with_rows(rows))
}

/// Compacts `payload` and packs it as CC-B or CC-C codewords (base-900)
/// with Reed–Solomon error correction, then lays out the resulting rows.
pub fn encode_cc_b(payload: &[u8], columns: CcColumns, options: &GsEncoderOptions) -> Result<EncodedSymbol> {
    validate_payload(payload, false)?;
    tracing::debug!(len = payload.len(), ?columns, "encoding CC-B");

    let mut buf = BitBuffer::with_capacity(CC_B_CAPACITY_BYTES);
    compact_composite(&mut buf, payload)?;

    let fit = sizer::size_cc_b(columns, buf.cursor())?;
    buf.pad_to(buf.cursor() + fit.unused)?;

    // 920 (CC-B/C mode latch) + 924/901 (byte-mode indicator, picking 924
    // when the packed payload is a whole number of bytes) are prepended as
    // codewords ahead of the base-900-packed payload, not as bits in the
    // compacted stream.
    let bytes = buf.bit_slice_to_bytes(0, buf.cursor());
    let byte_mode_flag = if bytes.len() % 6 == 0 { 924 } else { 901 };
    let mut data_cws = vec![920, byte_mode_flag];
    data_cws.extend(base900::encode_900(&bytes));

    let ecc_count = sizer::ecc_codewords_cc_ab(columns, fit.size_index);
    let codewords = gf929::generate_ecc(&data_cws, ecc_count);
    let _ = options;

    let local_idx = sizer::local_index_cc_ab(columns, fit);
    let rows = layout_cc::layout(columns, fit.is_cca, local_idx, &codewords);

    Ok(EncodedSymbol::new(SymbolVariant::CcB)
        .with_codewords(codewords)
        .with_unused_bits(fit.unused)
        .with_rows(rows))
}

/// Compacts `payload` and packs it as CC-C codewords (base-900) with
/// Reed–Solomon error correction, then lays out the resulting rows across a
/// row/column grid sized to the aspect-ratio constraint.
pub fn encode_cc_c(payload: &[u8], options: &GsEncoderOptions) -> Result<EncodedSymbol> {
    validate_payload(payload, false)?;
    tracing::debug!(len = payload.len(), "encoding CC-C");

    let mut buf = BitBuffer::with_capacity(CC_C_CAPACITY_BYTES);
    compact_composite(&mut buf, payload)?;

    let (cols, rows, ecc_count, unused) = sizer::size_cc_c(options.cc_c_preferred_columns, buf.cursor())?;
    buf.pad_to(buf.cursor() + unused)?;

    let bytes = buf.bit_slice_to_bytes(0, buf.cursor());
    let byte_mode_flag = if bytes.len() % 6 == 0 { 924 } else { 901 };
    let mut data_payload = vec![920, byte_mode_flag];
    data_payload.extend(base900::encode_900(&bytes));

    let mut data_cws = vec![(cols * rows - 3 - ecc_count) as u32];
    data_cws.extend(data_payload);
    let codewords = gf929::generate_ecc(&data_cws, ecc_count);

    let laid_out = layout_cc_c::layout(&codewords, cols, rows, ecc_count);

    Ok(EncodedSymbol::new(SymbolVariant::CcC)
        .with_codewords(codewords)
        .with_unused_bits(unused)
        .with_rows(laid_out))
}

/// Compacts `payload` (optionally splitting a 2D secondary on `|`) and lays
/// out a GS1 DataBar Expanded symbol, including separator rows when the
/// symbol stacks to more than one row.
pub fn encode_databar_expanded(payload: &[u8], options: &GsEncoderOptions) -> Result<EncodedSymbol> {
    let primary = match memchr::memchr(charclass::COMPONENT_SEPARATOR_CHAR, payload) {
        Some(idx) => &payload[..idx],
        None => payload,
    };
    validate_payload(primary, true)?;
    tracing::debug!(len = primary.len(), "encoding DataBar Expanded");

    let method = method::select_linear_method(primary);
    tracing::trace!(?method, "linear method selected");

    let mut buf = BitBuffer::with_capacity(DBE_CAPACITY_BYTES);
    let has_secondary = options.composite.is_some();
    buf.push(1, has_secondary as u32)?;

    // `select_linear_method` may choose a fixed-format method while the
    // AI data it reads is shorter than the method's full field width (a
    // malformed/truncated AI — lexically legal but semantically short,
    // which §3 explicitly leaves unvalidated). Pad a working copy with
    // zero digits so the header writer can read its fixed offsets without
    // panicking; the caller gets an encoding of what was actually present,
    // zero-extended, rather than an index-out-of-bounds.
    let mut header_input = primary.to_vec();
    header_input.resize(header_input.len().max(40), b'0');
    let outcome = method::write_linear_header(&mut buf, &header_input, method)?;

    let vls_pos = outcome.vls_pos;
    let consumed = outcome.consumed.min(primary.len());
    compaction::compact(&mut buf, &primary[consumed..])?;

    let (size, unused) = sizer::size_databar_expanded(buf.cursor());
    if size < options.min_segment_width {
        return Err(GsEncodeError::SegmentTooNarrow { width: size });
    }
    if let Some(pos) = vls_pos {
        buf.put(pos, 2, method::vls_bits(size))?;
    }
    // Pad with the §4.E ALNU-latch pattern out to the chosen symbol
    // character count before chunking into 12-bit symbol values, rather
    // than appending zero-valued characters after the fact.
    buf.pad_to(size * 12)?;

    let bits: Vec<bool> = (0..buf.cursor()).map(|i| buf.get(i)).collect();
    let data: Vec<u32> = bits
        .chunks(12)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u32, |acc, &b| (acc << 1) | (b as u32))
        })
        .collect();

    let (check, segments) = layout_dbe::build_segments(&data);
    let mut all_chars = vec![check];
    all_chars.extend_from_slice(&data);

    // A single linear row holds up to 11 double-segments (22 characters);
    // a larger symbol stacks additional rows, each preceded by a chex
    // separator.
    const SEGMENTS_PER_ROW: usize = 11;
    let mut sink = RowCollector::default();
    for (seg_idx, row_segments) in segments.chunks(SEGMENTS_PER_ROW).enumerate() {
        let row = layout_dbe::assemble_row(row_segments);
        if seg_idx > 0 {
            sink.accept(layout_dbe::separator_row(&row));
        }
        sink.accept(row);
    }

    Ok(EncodedSymbol::new(SymbolVariant::DataBarExpanded)
        .with_codewords(all_chars)
        .with_unused_bits(unused)
        .with_rows(sink.rows))
}

/// Result of pairing a 2D composite component with a linear DataBar
/// Expanded primary (§4.K steps 2-4): the composite prints above the
/// linear symbol, separated by a single chex row.
#[derive(Debug, Clone)]
pub struct LinkedSymbol {
    /// The 2D composite component (CC-A, CC-B, or CC-C).
    pub composite: EncodedSymbol,
    /// The chex row printed between the composite and the linear symbol.
    pub separator: Row,
    /// The linear GS1 DataBar Expanded primary.
    pub linear: EncodedSymbol,
}

impl LinkedSymbol {
    /// All rows in top-to-bottom print order.
    pub fn rows(&self) -> Vec<Row> {
        let mut all = self.composite.rows.clone();
        all.push(self.separator.clone());
        all.extend(self.linear.rows.clone());
        all
    }
}

/// Encodes a 2D composite component (CC-A/B/C) paired with a linear GS1
/// DataBar Expanded primary, per §4.K steps 2-4: `payload` is split on a
/// single `|` into primary (linear) and secondary (2D) components — when
/// no `|` is present the whole payload serves as both, as GS1 composite
/// data commonly repeats across primary and secondary. The primary is
/// encoded with its 2D-linkage bit set; a chex separator row is generated
/// between the composite and the linear symbol.
pub fn encode_linked(payload: &[u8], composite: SymbolVariant, options: &GsEncoderOptions) -> Result<LinkedSymbol> {
    let (primary, secondary) = match memchr::memchr(charclass::COMPONENT_SEPARATOR_CHAR, payload) {
        Some(idx) => (&payload[..idx], &payload[idx + 1..]),
        None => (payload, payload),
    };

    let composite_symbol = match composite {
        SymbolVariant::CcA => encode_cc_a(secondary, options)?,
        SymbolVariant::CcB => encode_cc_b(secondary, CcColumns::Four, options)?,
        SymbolVariant::CcC => encode_cc_c(secondary, options)?,
        SymbolVariant::DataBarExpanded => return Err(GsEncodeError::MissingPrimary),
    };

    let mut linked_options = options.clone();
    linked_options.composite = Some(composite);
    let linear_symbol = encode_databar_expanded(primary, &linked_options)?;

    let separator = linear_symbol
        .rows
        .first()
        .map(layout_dbe::separator_row)
        .ok_or(GsEncodeError::MissingPrimary)?;

    Ok(LinkedSymbol {
        composite: composite_symbol,
        separator,
        linear: linear_symbol,
    })
}

/// Crate version, for CLI `--version` style output.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_cc_a_minimal_payload() {
        let symbol = encode_cc_a(b"0195012345678903", &GsEncoderOptions::new()).unwrap();
        assert!(symbol.row_count >= 3);
        assert!(symbol.codeword_count > 0);
    }

    #[test]
    fn test_encode_cc_b_minimal_payload() {
        let symbol = encode_cc_b(b"0195012345678903", CcColumns::Two, &GsEncoderOptions::new()).unwrap();
        assert!(symbol.row_count >= 3);
    }

    #[test]
    fn test_encode_cc_c_minimal_payload() {
        let symbol = encode_cc_c(b"0195012345678903", &GsEncoderOptions::new()).unwrap();
        assert!(symbol.row_count >= 3);
    }

    #[test]
    fn test_encode_databar_expanded_minimal() {
        let symbol = encode_databar_expanded(b"0195012345678903", &GsEncoderOptions::new()).unwrap();
        assert!(symbol.codeword_count >= 3);
        assert!(!symbol.rows.is_empty());
    }

    #[test]
    fn test_databar_expanded_rejects_separator() {
        let err = encode_databar_expanded(b"0195^012345678903", &GsEncoderOptions::new()).unwrap_err();
        assert!(matches!(err, GsEncodeError::SeparatorNotPermitted { .. }));
    }

    #[test]
    fn test_illegal_character_rejected() {
        let err = encode_cc_a(b"01950\x7F12345678903", &GsEncoderOptions::new()).unwrap_err();
        assert!(matches!(err, GsEncodeError::IllegalCharacter { .. }));
    }

    #[test]
    fn test_version_is_non_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_databar_expanded_weight_3103_method() {
        let mut payload = b"0195012345678903".to_vec();
        payload.extend_from_slice(b"3103001750");
        let symbol = encode_databar_expanded(&payload, &GsEncoderOptions::new()).unwrap();
        assert!(symbol.codeword_count >= 3);
    }

    #[test]
    fn test_databar_expanded_weight_3203_offset_method() {
        let mut payload = b"0195012345678903".to_vec();
        payload.extend_from_slice(b"3203010000");
        let symbol = encode_databar_expanded(&payload, &GsEncoderOptions::new()).unwrap();
        assert!(symbol.codeword_count >= 3);
    }

    #[test]
    fn test_composite_ai90_payload_via_cc_a() {
        // AI 90 data-identifier payload, exercising the composite method
        // selector's ALPH handoff inside a CC-A secondary component.
        let symbol = encode_cc_a(b"9012345", &GsEncoderOptions::new()).unwrap();
        assert!(symbol.row_count >= 3);
    }

    #[test]
    fn test_composite_date_payload_via_cc_b() {
        let symbol = encode_cc_b(b"11991231#10ABC123", CcColumns::Four, &GsEncoderOptions::new()).unwrap();
        assert!(symbol.row_count >= 3);
    }

    #[test]
    fn test_encode_linked_cc_a_with_shared_payload() {
        let linked = encode_linked(b"0195012345678903", SymbolVariant::CcA, &GsEncoderOptions::new()).unwrap();
        assert!(linked.composite.row_count >= 3);
        assert!(!linked.linear.rows.is_empty());
        assert!(linked.separator.is_separator);
        let all_rows = linked.rows();
        assert_eq!(
            all_rows.len(),
            linked.composite.rows.len() + 1 + linked.linear.rows.len()
        );
    }

    #[test]
    fn test_encode_linked_splits_primary_and_secondary() {
        let linked = encode_linked(
            b"0195012345678903|9012345",
            SymbolVariant::CcC,
            &GsEncoderOptions::new(),
        )
        .unwrap();
        assert!(linked.composite.row_count >= 3);
        assert!(!linked.linear.rows.is_empty());
    }

    #[test]
    fn test_encode_linked_rejects_databar_as_composite() {
        let err = encode_linked(
            b"0195012345678903",
            SymbolVariant::DataBarExpanded,
            &GsEncoderOptions::new(),
        )
        .unwrap_err();
        assert!(matches!(err, GsEncodeError::MissingPrimary));
    }
}
