//! Output formatters for encoded symbols.
//!
//! This module provides trait-based formatters for rendering an
//! [`EncodedSymbol`] in various output formats (human-readable, JSON).

use crate::types::EncodedSymbol;
use byteorder::{BigEndian, WriteBytesExt};

/// Trait for formatting an encoded symbol's summary.
///
/// Implementors provide a method to render the complete symbol; a default
/// implementation is not supplied because the two shipped formats (human,
/// JSON) have no shared structure worth factoring out.
pub trait SymbolFormatter {
    fn format_symbol(&self, symbol: &EncodedSymbol) -> String;
}

/// Multi-line, human-readable summary.
pub struct HumanFormatter {
    pub verbose: bool,
}

impl SymbolFormatter for HumanFormatter {
    fn format_symbol(&self, symbol: &EncodedSymbol) -> String {
        let mut out = String::new();
        out.push_str(&format!("Variant:      {}\n", symbol.variant));
        out.push_str(&format!("Rows:         {}\n", symbol.row_count));
        out.push_str(&format!("Codewords:    {}\n", symbol.codeword_count));
        out.push_str(&format!("Unused bits:  {}\n", symbol.unused_bits));

        if self.verbose {
            out.push_str(&format!("Codeword hex: {}\n", hex_dump_codewords(&symbol.codewords)));
            for (i, row) in symbol.rows.iter().enumerate() {
                out.push_str(&format!(
                    "  row {:>3}: {} elements, width {} modules{}\n",
                    i,
                    row.pattern.len(),
                    row.width_modules(),
                    if row.is_separator { " (separator)" } else { "" }
                ));
            }
        }
        out
    }
}

/// Renders a codeword sequence as a hex dump, each codeword packed as a
/// big-endian `u16` (codeword values never exceed 1023, per `gf929`'s field
/// size) before hex-encoding the resulting byte stream.
fn hex_dump_codewords(codewords: &[u32]) -> String {
    let mut bytes = Vec::with_capacity(codewords.len() * 2);
    for &cw in codewords {
        bytes.write_u16::<BigEndian>(cw as u16).expect("Vec<u8> writes are infallible");
    }
    hex::encode(bytes)
}

/// Pretty-printed JSON dump of the full symbol, rows included.
pub struct JsonFormatter;

impl SymbolFormatter for JsonFormatter {
    fn format_symbol(&self, symbol: &EncodedSymbol) -> String {
        serde_json::to_string_pretty(symbol).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SymbolVariant;

    #[test]
    fn test_human_formatter_includes_variant() {
        let symbol = EncodedSymbol::new(SymbolVariant::CcA).with_codeword_count(5);
        let formatter = HumanFormatter { verbose: false };
        let out = formatter.format_symbol(&symbol);
        assert!(out.contains("CC-A"));
        assert!(out.contains('5'));
    }

    #[test]
    fn test_json_formatter_is_valid_json() {
        let symbol = EncodedSymbol::new(SymbolVariant::DataBarExpanded);
        let out = JsonFormatter.format_symbol(&symbol);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["variant"], "data_bar_expanded");
    }

    #[test]
    fn test_verbose_human_formatter_dumps_codeword_hex() {
        let symbol = EncodedSymbol::new(SymbolVariant::CcB).with_codewords(vec![0x0102, 0x03FF]);
        let formatter = HumanFormatter { verbose: true };
        let out = formatter.format_symbol(&symbol);
        assert!(out.contains("010203ff"));
    }

    #[test]
    fn test_hex_dump_codewords_empty() {
        assert_eq!(hex_dump_codewords(&[]), "");
    }
}
