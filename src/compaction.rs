//! The mode-switched compaction automaton (NUM / ALNU / ISO / ALPH).
//!
//! Grounded on `cc.c`'s `procNUM`/`procALNU`/`procISO`/`procALPH`: a single
//! left-to-right pass over the payload that emits a packed bit stream,
//! switching mode when a lookahead window shows the next several bytes are
//! better served by a different mode. ALPH is only entered from the AI-90
//! method path (`crate::method`); the general entry point below always
//! starts in NUM, as the reference does for both linear and 2D payloads.

use crate::bitbuf::BitBuffer;
use crate::charclass::{classify, CharClass, FNC1_CHAR, SYMBOL_SEPARATOR_CHAR};
use crate::error::{GsEncodeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Num,
    Alnu,
    Iso,
    Alph,
}

/// Runs the compaction automaton over `payload` starting in NUM mode,
/// writing the emitted bits into `buf`. Returns the final mode (always
/// `Num` on success, since every mode transitions back to NUM before the
/// end-of-data pad).
pub fn compact(buf: &mut BitBuffer, payload: &[u8]) -> Result<()> {
    compact_from(buf, payload, Mode::Num)
}

/// Runs the compaction automaton starting in `start_mode` instead of NUM.
/// Used by the AI-90 composite method path (`crate::method`), which hands
/// off to ALPH after writing its own header and data-identifier prefix.
pub fn compact_from(buf: &mut BitBuffer, payload: &[u8], start_mode: Mode) -> Result<()> {
    let mut mode = start_mode;
    let mut i = 0usize;
    while i < payload.len() {
        let b = payload[i];
        let class = classify(b);
        if class.is_empty() {
            return Err(GsEncodeError::IllegalCharacter { index: i, byte: b });
        }
        mode = match mode {
            Mode::Num => proc_num(buf, payload, &mut i)?,
            Mode::Alnu => proc_alnu(buf, payload, &mut i)?,
            Mode::Iso => proc_iso(buf, payload, &mut i)?,
            Mode::Alph => proc_alph(buf, payload, &mut i)?,
        };
    }
    if mode == Mode::Alph {
        // ALPH has its own terminator shape: up to 5 bits of the all-ones
        // value 31, not the 3-bit NUM latch ALNU/ISO use.
        let unused = buf.unused_bits().min(5);
        if unused > 0 {
            buf.push(unused, 31)?;
        }
    } else if mode != Mode::Num {
        // end-of-data latch back to NUM so the pad below is well-defined
        buf.push(3, 0b000)?;
    }
    Ok(())
}

fn is_digit_or_fnc1(b: u8) -> bool {
    b.is_ascii_digit() || b == FNC1_CHAR
}

fn proc_num(buf: &mut BitBuffer, payload: &[u8], i: &mut usize) -> Result<Mode> {
    let b1 = payload[*i];
    if !is_digit_or_fnc1(b1) {
        buf.push(4, 0b0000)?;
        return Ok(Mode::Alnu);
    }
    let d1 = if b1 == FNC1_CHAR { 10 } else { (b1 - b'0') as u32 };
    let b2 = payload.get(*i + 1).copied();
    match b2 {
        Some(b2) if is_digit_or_fnc1(b2) => {
            let d2 = if b2 == FNC1_CHAR { 10 } else { (b2 - b'0') as u32 };
            buf.push(7, d1 * 11 + d2 + 8)?;
            *i += 2;
            Ok(Mode::Num)
        }
        None => {
            // The 4-bit single-trailing-digit shortcut never applies to a
            // trailing FNC1: it has no single-digit encoding to shorten to.
            let unused = buf.unused_bits();
            if b1 != FNC1_CHAR && (4..7).contains(&unused) {
                buf.push(4, d1 + 1)?;
            } else {
                buf.push(7, d1 * 11 + 10 + 8)?;
            }
            *i += 1;
            Ok(Mode::Num)
        }
        Some(_) => {
            buf.push(7, d1 * 11 + 10 + 8)?;
            *i += 1;
            buf.push(4, 0b0000)?;
            Ok(Mode::Alnu)
        }
    }
}

fn lookahead_all_digits(payload: &[u8], from: usize, window: usize) -> bool {
    let end = (from + window).min(payload.len());
    from < payload.len() && payload[from..end].iter().all(|&b| b.is_ascii_digit())
}

fn trailing_digit_run(payload: &[u8], from: usize) -> usize {
    payload[from..].iter().take_while(|&&b| b.is_ascii_digit()).count()
}

fn proc_alnu(buf: &mut BitBuffer, payload: &[u8], i: &mut usize) -> Result<Mode> {
    let b = payload[*i];

    if lookahead_all_digits(payload, *i, 6) {
        buf.push(3, 0b000)?;
        return Ok(Mode::Num);
    }
    if *i + trailing_digit_run(payload, *i) == payload.len() && trailing_digit_run(payload, *i) >= 4 {
        buf.push(3, 0b000)?;
        return Ok(Mode::Num);
    }

    let class = classify(b);
    if class.contains(CharClass::ISO) && !class.contains(CharClass::ALNU) {
        buf.push(5, 0b00100)?;
        return Ok(Mode::Iso);
    }

    match b {
        b'0'..=b'9' => {
            buf.push(5, (b - b'0') as u32 + 5)?;
            *i += 1;
        }
        FNC1_CHAR => {
            buf.push(5, 0x0F)?;
            *i += 1;
            return Ok(Mode::Num);
        }
        SYMBOL_SEPARATOR_CHAR => {
            buf.push(5, 0x1F)?;
            *i += 1;
            return Ok(Mode::Num);
        }
        b'A'..=b'Z' => {
            buf.push(6, 0x20 + (b - b'A') as u32)?;
            *i += 1;
        }
        b'*' => {
            buf.push(6, 0x20 + 0x1A)?;
            *i += 1;
        }
        b',' | b'-' | b'.' | b'/' => {
            buf.push(6, 0x20 + 0x1B + (b - b',') as u32)?;
            *i += 1;
        }
        _ => return Err(GsEncodeError::IllegalCharacter { index: *i, byte: b }),
    }
    Ok(Mode::Alnu)
}

fn proc_iso(buf: &mut BitBuffer, payload: &[u8], i: &mut usize) -> Result<Mode> {
    let b = payload[*i];

    if lookahead_all_digits(payload, *i, 4) {
        buf.push(3, 0b000)?;
        return Ok(Mode::Num);
    }
    let window_end = (*i + 10).min(payload.len());
    let stays_alnu = payload[*i..window_end]
        .iter()
        .all(|&c| classify(c).contains(CharClass::ALNU));
    if stays_alnu && window_end < payload.len() {
        buf.push(5, 0b00100)?;
        return Ok(Mode::Alnu);
    }

    match b {
        b'0'..=b'9' => {
            buf.push(5, (b - b'0') as u32 + 5)?;
        }
        FNC1_CHAR => {
            buf.push(5, 0x0F)?;
            *i += 1;
            return Ok(Mode::Num);
        }
        SYMBOL_SEPARATOR_CHAR => {
            buf.push(5, 0x1F)?;
            *i += 1;
            return Ok(Mode::Num);
        }
        b'A'..=b'Z' => {
            buf.push(7, 0x40 + (b - b'A') as u32)?;
        }
        b'a'..=b'z' => {
            buf.push(7, 0x5A + (b - b'a') as u32)?;
        }
        b' ' | b'!' | b'"' | b'%' | b'&' | b'\'' | b'(' | b')' | b'?' | b'_' | b':' | b';' | b'<' | b'=' | b'>' => {
            buf.push(8, iso_punctuation_code(b))?;
        }
        _ => return Err(GsEncodeError::IllegalCharacter { index: *i, byte: b }),
    }
    *i += 1;
    Ok(Mode::Iso)
}

fn iso_punctuation_code(b: u8) -> u32 {
    const TABLE: &[u8] = b" !\"%&'()?_:;<=>";
    let idx = TABLE.iter().position(|&c| c == b).unwrap_or(0);
    0x1D0 + idx as u32
}

/// Entered only from the AI-90 method path: alphanumeric-only compaction
/// used for free-form data-identifier payloads.
fn proc_alph(buf: &mut BitBuffer, payload: &[u8], i: &mut usize) -> Result<Mode> {
    let b = payload[*i];
    match b {
        b'A'..=b'Z' => {
            buf.push(5, (b - b'A') as u32)?;
            *i += 1;
            Ok(Mode::Alph)
        }
        b'0'..=b'9' => {
            buf.push(6, (b - b'0') as u32 + 4)?;
            *i += 1;
            Ok(Mode::Alph)
        }
        FNC1_CHAR => {
            buf.push(5, 31)?;
            *i += 1;
            Ok(Mode::Num)
        }
        _ => Err(GsEncodeError::IllegalCharacter { index: *i, byte: b }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_digit_pair() {
        let mut buf = BitBuffer::with_capacity(4);
        compact(&mut buf, b"12").unwrap();
        assert_eq!(buf.cursor(), 7);
    }

    #[test]
    fn test_compact_single_trailing_digit() {
        let mut buf = BitBuffer::with_capacity(4);
        compact(&mut buf, b"9").unwrap();
        assert!(buf.cursor() == 4 || buf.cursor() == 7);
    }

    #[test]
    fn test_compact_rejects_illegal_byte() {
        let mut buf = BitBuffer::with_capacity(4);
        let err = compact(&mut buf, b"1\x7F2").unwrap_err();
        assert!(matches!(err, GsEncodeError::IllegalCharacter { index: 1, .. }));
    }

    #[test]
    fn test_compact_alpha_switches_mode() {
        let mut buf = BitBuffer::with_capacity(8);
        compact(&mut buf, b"ABCDE12345").unwrap();
        assert!(buf.cursor() > 0);
    }

    #[test]
    fn test_compact_lowercase_requires_iso() {
        let mut buf = BitBuffer::with_capacity(8);
        compact(&mut buf, b"ABCabc").unwrap();
        assert!(buf.cursor() > 0);
    }
}
