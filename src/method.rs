//! Linear DataBar Expanded and 2D composite method selection.
//!
//! Grounded on `cc.c`'s `doLinMethods`/`doMethods`: a lookahead over the
//! leading Application Identifiers chooses a compact fixed-format header
//! (weight, date, or GTIN payload) before handing the remainder of the
//! payload to the general compaction automaton in NUM mode.

use crate::bitbuf::BitBuffer;
use crate::compaction::Mode;
use crate::error::Result;

/// Linear (DataBar Expanded) header method, one of the fixed encodings
/// defined by the GS1 DataBar Expanded symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearMethod {
    /// `1` + GTIN-13 payload.
    Gtin,
    /// `00`, no recognised leading AI.
    General,
    /// `0100`, AI 3103 fixed-point weight.
    Weight3103,
    /// `0101`, AI 3202/3203 fixed-point weight.
    Weight320x,
    /// `01100`, AI 392x variable-measure with currency.
    Measure392x,
    /// `01101`, AI 393x variable-measure with currency and ISO code.
    Measure393x,
    /// `0111000`..`0111111`, AI 3x0x or date-qualified variant.
    WeightDate(u8),
}

/// 2D composite method, selected independently of the linear header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeMethod {
    /// `0`, general payload via NUM.
    General,
    /// `10`, AI 11/17 production/expiry date prefix.
    Date,
    /// `11`, AI 90 data-identifier payload via the ALPH path.
    Ai90,
}

fn starts_with(payload: &[u8], prefix: &[u8]) -> bool {
    payload.len() >= prefix.len() && &payload[..prefix.len()] == prefix
}

fn digits_value(payload: &[u8], start: usize, len: usize) -> Option<u64> {
    if payload.len() < start + len {
        return None;
    }
    let slice = &payload[start..start + len];
    if !slice.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    std::str::from_utf8(slice).ok()?.parse().ok()
}

/// Chooses the linear header method from the leading bytes of `payload`.
/// `payload` is expected to already have its `(` `)` AI delimiters and the
/// leading FNC1 stripped by the caller.
pub fn select_linear_method(payload: &[u8]) -> LinearMethod {
    if !starts_with(payload, b"01") {
        return LinearMethod::General;
    }
    if payload.len() < 16 || !payload[2..16].iter().all(|b| b.is_ascii_digit()) {
        return LinearMethod::Gtin;
    }
    let rest = &payload[16..];

    if starts_with(rest, b"3103") {
        if let Some(w) = digits_value(rest, 4, 6) {
            if w <= 32767 {
                return LinearMethod::Weight3103;
            }
        }
    }
    if starts_with(rest, b"3202") {
        if let Some(w) = digits_value(rest, 4, 6) {
            if w <= 9999 {
                return LinearMethod::Weight320x;
            }
        }
    }
    if starts_with(rest, b"3203") {
        if let Some(w) = digits_value(rest, 4, 6) {
            if w <= 22767 {
                return LinearMethod::Weight320x;
            }
        }
    }
    if rest.len() >= 10 && &rest[0..1] == b"3" && (rest[1] == b'1' || rest[1] == b'2') && rest[2] == b'0' {
        // The weight AI (4 chars: "3" + family "1"/"2" + "0" + a decimal-point
        // digit) and its 6-digit weight value occupy rest[0..10]; an optional
        // date AI + 6-digit date follows at rest[10..]. AI 3103/3202/3203's
        // fixed decimal point is handled by the dedicated branches above, so
        // only the remaining 310x/320x members reach this one.
        let after_weight = &rest[10..];
        if starts_with(after_weight, b"11")
            || starts_with(after_weight, b"13")
            || starts_with(after_weight, b"15")
            || starts_with(after_weight, b"17")
        {
            return LinearMethod::WeightDate(rest[1] - b'0');
        }
        if let Some(w) = digits_value(rest, 4, 6) {
            if w <= 99999 {
                return LinearMethod::WeightDate(rest[1] - b'0');
            }
        }
    }
    if starts_with(rest, b"392") {
        return LinearMethod::Measure392x;
    }
    if starts_with(rest, b"393") {
        return LinearMethod::Measure393x;
    }
    LinearMethod::Gtin
}

/// Chooses the 2D composite method from the leading bytes of `payload`.
pub fn select_composite_method(payload: &[u8]) -> CompositeMethod {
    if starts_with(payload, b"11") || starts_with(payload, b"17") {
        return CompositeMethod::Date;
    }
    if starts_with(payload, b"90") {
        return CompositeMethod::Ai90;
    }
    CompositeMethod::General
}

/// Packs `yymmdd` as the reference does: `(YY*12 + MM-1)*31 + DD`, realised
/// bitwise as `YY*384 + (MM-1)*32 + DD`.
pub fn pack_date(yy: u32, mm: u32, dd: u32) -> u32 {
    yy * 384 + (mm - 1) * 32 + dd
}

/// Writes the 2-bit variable-length-symbol field: bit 1 is the parity of
/// `size+1`, bit 0 is set when `size > 13`. `size` (the data symbol
/// character count) is only known after sizing, so the orchestrator calls
/// this to patch an already-reserved 2-bit field.
pub fn vls_bits(size: usize) -> u32 {
    let parity = ((size + 1) & 1) as u32;
    let wide = (size > 13) as u32;
    (parity << 1) | wide
}

/// Outcome of writing a linear header: how many leading bytes of the
/// payload the header consumed, and (for the VLS-bearing methods) the bit
/// offset of the reserved 2-bit variable-length-symbol field, which can
/// only be filled in once the orchestrator has sized the symbol.
#[derive(Debug, Clone, Copy)]
pub struct HeaderOutcome {
    pub consumed: usize,
    pub vls_pos: Option<usize>,
}

/// Packs 12 digits of a GTIN (already stripped of its packaging-indicator
/// digit and check digit) as four 10-bit groups of 3 decimal digits each,
/// matching the "40 bits (PID-12)" field shared by the weight/measure/date
/// methods.
fn write_pid12(buf: &mut BitBuffer, gtin14: &[u8]) -> Result<()> {
    // gtin14[0] is the packaging indicator, gtin14[13] the check digit;
    // the PID-12 field carries only the 12 digits in between.
    for group in gtin14[1..13].chunks(3) {
        let value = group.iter().fold(0u32, |acc, &b| acc * 10 + (b - b'0') as u32);
        buf.push(10, value)?;
    }
    Ok(())
}

/// Packs the full GTIN-13 field (`4 + 4*10` bits): the packaging-indicator
/// digit in 4 bits, followed by the same 12-digit PID-12 grouping. The
/// check digit is not carried; it is recomputable from the other 13.
fn write_gtin13(buf: &mut BitBuffer, gtin14: &[u8]) -> Result<()> {
    buf.push(4, (gtin14[0] - b'0') as u32)?;
    write_pid12(buf, gtin14)
}

/// Writes `len` bits of `value`, splitting into two calls when `len`
/// exceeds the bit buffer's 16-bit-per-write limit. Used for the 20-bit
/// weight field in the weight+date header, the only field wider than 16
/// bits this module writes.
fn push_wide(buf: &mut BitBuffer, len: usize, value: u32) -> Result<()> {
    if len <= 16 {
        return buf.push(len, value);
    }
    let hi_len = len - 16;
    buf.push(hi_len, value >> 16)?;
    buf.push(16, value & 0xFFFF)
}

/// Writes the linear DataBar Expanded header for `method`, reading any AI
/// data the header consumes directly from `payload`. Returns how many
/// leading bytes were consumed so the caller can hand the remainder to the
/// general compaction automaton (always starting in NUM).
pub fn write_linear_header(buf: &mut BitBuffer, payload: &[u8], method: LinearMethod) -> Result<HeaderOutcome> {
    match method {
        LinearMethod::Gtin => {
            buf.push(1, 1)?;
            let vls_pos = buf.cursor();
            buf.skip(2);
            write_gtin13(buf, &payload[2..16])?;
            Ok(HeaderOutcome { consumed: 16, vls_pos: Some(vls_pos) })
        }
        LinearMethod::General => {
            buf.push(2, 0b00)?;
            let vls_pos = buf.cursor();
            buf.skip(2);
            Ok(HeaderOutcome { consumed: 0, vls_pos: Some(vls_pos) })
        }
        LinearMethod::Weight3103 => {
            buf.push(4, 0b0100)?;
            write_pid12(buf, &payload[2..16])?;
            let w = digits_value(payload, 20, 6).unwrap_or(0) as u32;
            buf.push(15, w)?;
            Ok(HeaderOutcome { consumed: 26, vls_pos: None })
        }
        LinearMethod::Weight320x => {
            buf.push(4, 0b0101)?;
            write_pid12(buf, &payload[2..16])?;
            let is_3203 = starts_with(&payload[16..], b"3203");
            let mut w = digits_value(payload, 20, 6).unwrap_or(0) as u32;
            if is_3203 {
                w += 10000;
            }
            buf.push(15, w)?;
            Ok(HeaderOutcome { consumed: 26, vls_pos: None })
        }
        LinearMethod::Measure392x => {
            buf.push(5, 0b01100)?;
            let vls_pos = buf.cursor();
            buf.skip(2);
            write_pid12(buf, &payload[2..16])?;
            let dp = (payload[19] - b'0') as u32 & 0x3;
            buf.push(2, dp)?;
            Ok(HeaderOutcome { consumed: 20, vls_pos: Some(vls_pos) })
        }
        LinearMethod::Measure393x => {
            buf.push(5, 0b01101)?;
            let vls_pos = buf.cursor();
            buf.skip(2);
            write_pid12(buf, &payload[2..16])?;
            let dp = (payload[19] - b'0') as u32 & 0x3;
            buf.push(2, dp)?;
            let iso = digits_value(payload, 20, 3).unwrap_or(0) as u32;
            buf.push(10, iso)?;
            Ok(HeaderOutcome { consumed: 23, vls_pos: Some(vls_pos) })
        }
        LinearMethod::WeightDate(x) => {
            let rest = &payload[16..];
            let ai_rest = &rest[10..];
            let date_idx: Option<u32> = if starts_with(ai_rest, b"11") {
                Some(0)
            } else if starts_with(ai_rest, b"13") {
                Some(1)
            } else if starts_with(ai_rest, b"15") {
                Some(2)
            } else if starts_with(ai_rest, b"17") {
                Some(3)
            } else {
                None
            };
            buf.push(4, 0b0111)?;
            write_pid12(buf, &payload[2..16])?;
            let w = digits_value(rest, 4, 6).unwrap_or(0) as u32;
            push_wide(buf, 20, w)?;
            match date_idx {
                Some(idx) => {
                    buf.push(1, 1)?;
                    buf.push(2, idx)?;
                    let yy = digits_value(ai_rest, 2, 2).unwrap_or(0) as u32;
                    let mm = digits_value(ai_rest, 4, 2).unwrap_or(1).max(1) as u32;
                    let dd = digits_value(ai_rest, 6, 2).unwrap_or(0) as u32;
                    buf.push(16, pack_date(yy, mm, dd))?;
                    Ok(HeaderOutcome { consumed: 16 + 10 + 8, vls_pos: None })
                }
                None => {
                    buf.push(1, 0)?;
                    buf.push(2, (x as u32) & 0x3)?;
                    // "No date present" sentinel, per §4.F: a 16-bit field
                    // that cannot arise from a real packed date (max ~38399).
                    buf.push(16, 38400)?;
                    Ok(HeaderOutcome { consumed: 16 + 10, vls_pos: None })
                }
            }
        }
    }
}

/// Writes the 2D composite header and any AI data it consumes, returning
/// the number of leading bytes consumed and the compaction mode the
/// remainder should start in (NUM for General/Date, ALPH for the AI-90
/// data-identifier path).
pub fn write_composite_header(buf: &mut BitBuffer, payload: &[u8]) -> Result<(usize, Mode)> {
    match select_composite_method(payload) {
        CompositeMethod::General => {
            buf.push(1, 0b0)?;
            Ok((0, Mode::Num))
        }
        CompositeMethod::Date => {
            buf.push(2, 0b10)?;
            let is_ai17 = starts_with(payload, b"17");
            let yy = digits_value(payload, 2, 2).unwrap_or(0) as u32;
            let mm = digits_value(payload, 4, 2).unwrap_or(1).max(1) as u32;
            let dd = digits_value(payload, 6, 2).unwrap_or(0) as u32;
            buf.push(16, pack_date(yy, mm, dd))?;
            buf.push(1, is_ai17 as u32)?;
            Ok((8, Mode::Num))
        }
        CompositeMethod::Ai90 => {
            buf.push(2, 0b11)?;
            Ok((2, Mode::Alph))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_linear_gtin_default() {
        let payload = b"0110614141543217";
        assert_eq!(select_linear_method(payload), LinearMethod::Gtin);
    }

    #[test]
    fn test_select_linear_general_without_ai01() {
        let payload = b"99123456789";
        assert_eq!(select_linear_method(payload), LinearMethod::General);
    }

    #[test]
    fn test_select_linear_weight_3103() {
        let mut payload = b"0195012345678903".to_vec();
        payload.extend_from_slice(b"3103001750");
        assert_eq!(select_linear_method(&payload), LinearMethod::Weight3103);
    }

    #[test]
    fn test_select_linear_weight_3202() {
        let mut payload = b"0195012345678903".to_vec();
        payload.extend_from_slice(b"3202000100");
        assert_eq!(select_linear_method(&payload), LinearMethod::Weight320x);
    }

    #[test]
    fn test_select_composite_date() {
        assert_eq!(select_composite_method(b"11991231"), CompositeMethod::Date);
    }

    #[test]
    fn test_select_composite_ai90() {
        assert_eq!(select_composite_method(b"9012345"), CompositeMethod::Ai90);
    }

    #[test]
    fn test_pack_date() {
        assert_eq!(pack_date(99, 12, 31), 99 * 384 + 11 * 32 + 31);
    }

    #[test]
    fn test_vls_bits_parity_and_width() {
        assert_eq!(vls_bits(13), 0b00);
        assert_eq!(vls_bits(14), 0b11);
    }

    #[test]
    fn test_write_linear_header_gtin_consumes_full_ai01() {
        let payload = b"0110614141543217";
        let mut buf = BitBuffer::with_capacity(24);
        let outcome = write_linear_header(&mut buf, payload, LinearMethod::Gtin).unwrap();
        assert_eq!(outcome.consumed, 16);
        assert!(outcome.vls_pos.is_some());
        assert_eq!(buf.cursor(), 1 + 2 + 44);
    }

    #[test]
    fn test_write_linear_header_weight3103_consumes_ai_and_weight() {
        let mut payload = b"0195012345678903".to_vec();
        payload.extend_from_slice(b"3103001750");
        let mut buf = BitBuffer::with_capacity(24);
        let outcome = write_linear_header(&mut buf, &payload, LinearMethod::Weight3103).unwrap();
        assert_eq!(outcome.consumed, 26);
        assert!(outcome.vls_pos.is_none());
        assert_eq!(buf.cursor(), 4 + 40 + 15);
    }

    #[test]
    fn test_write_linear_header_weight_date_consumes_date_suffix() {
        // "3100" is the generic 310x weight family (rest[1] == '1'), not
        // one of the dedicated 3103/3202/3203 fast paths, so it falls
        // through to the generic 3x0x/date branch.
        let mut payload = b"0195012345678903".to_vec();
        payload.extend_from_slice(b"3100012340");
        payload.extend_from_slice(b"17260101");
        assert_eq!(select_linear_method(&payload), LinearMethod::WeightDate(1));
        let mut buf = BitBuffer::with_capacity(24);
        let outcome = write_linear_header(&mut buf, &payload, LinearMethod::WeightDate(1)).unwrap();
        assert_eq!(outcome.consumed, 34);
        assert_eq!(buf.cursor(), 4 + 40 + 20 + 1 + 2 + 16);
    }

    #[test]
    fn test_write_composite_header_general_mode_num() {
        let mut buf = BitBuffer::with_capacity(8);
        let (consumed, mode) = write_composite_header(&mut buf, b"21ABC123").unwrap();
        assert_eq!(consumed, 0);
        assert_eq!(mode, Mode::Num);
    }

    #[test]
    fn test_write_composite_header_ai90_switches_to_alph() {
        let mut buf = BitBuffer::with_capacity(8);
        let (consumed, mode) = write_composite_header(&mut buf, b"9012345").unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(mode, Mode::Alph);
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_write_composite_header_date_consumes_date_fields() {
        let mut buf = BitBuffer::with_capacity(8);
        let (consumed, mode) = write_composite_header(&mut buf, b"11991231ABC").unwrap();
        assert_eq!(consumed, 8);
        assert_eq!(mode, Mode::Num);
        assert_eq!(buf.cursor(), 2 + 16 + 1);
    }
}
