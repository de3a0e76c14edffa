//! Legal-character classification table.
//!
//! Grounded on `cc.c`'s `iswhat[256]`: each input byte carries a set of
//! class flags consumed by the compaction automaton (`crate::compaction`)
//! to decide which mode can encode it, and by how many bits.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CharClass: u8 {
        const NUM  = 0b0001;
        const FNC1 = 0b0010;
        const ALNU = 0b0100;
        const ISO  = 0b1000;
    }
}

/// FNC1, the GS1 Application Identifier separator, written in payload text
/// as `#`.
pub const FNC1_CHAR: u8 = b'#';
/// The 2D composite symbol separator.
pub const SYMBOL_SEPARATOR_CHAR: u8 = b'^';
/// Splits a linear primary from a 2D composite secondary payload.
pub const COMPONENT_SEPARATOR_CHAR: u8 = b'|';
/// Terminates a payload (the reference encoder's `IS_FINI`).
pub const FINI_CHAR: u8 = 0x00;

fn iso_punctuation(b: u8) -> bool {
    matches!(
        b,
        b' ' | b'!' | b'"' | b'%' | b'&' | b'\'' | b'(' | b')' | b'?' | b'_' | b':' | b';' | b'<' | b'=' | b'>'
    )
}

fn alnu_punctuation(b: u8) -> bool {
    matches!(b, b'*' | b'+' | b',' | b'-' | b'.' | b'/')
}

/// Returns the class flags for `b`, or an empty set if the byte is illegal.
pub fn classify(b: u8) -> CharClass {
    let mut c = CharClass::empty();

    if b.is_ascii_digit() || b == FNC1_CHAR {
        c |= CharClass::NUM;
    }
    if b == FNC1_CHAR {
        c |= CharClass::FNC1;
    }
    if c.contains(CharClass::NUM) || b.is_ascii_uppercase() || alnu_punctuation(b) || b == SYMBOL_SEPARATOR_CHAR {
        c |= CharClass::ALNU;
    }
    if c.contains(CharClass::ALNU) || b.is_ascii_lowercase() || iso_punctuation(b) {
        c |= CharClass::ISO;
    }
    c
}

pub fn is_legal(b: u8) -> bool {
    b == FINI_CHAR || !classify(b).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_is_num_alnu_iso() {
        let c = classify(b'7');
        assert!(c.contains(CharClass::NUM));
        assert!(c.contains(CharClass::ALNU));
        assert!(c.contains(CharClass::ISO));
    }

    #[test]
    fn test_fnc1_flags() {
        let c = classify(FNC1_CHAR);
        assert!(c.contains(CharClass::NUM));
        assert!(c.contains(CharClass::FNC1));
    }

    #[test]
    fn test_symbol_separator_is_alnu() {
        let c = classify(SYMBOL_SEPARATOR_CHAR);
        assert!(c.contains(CharClass::ALNU));
        assert!(!c.contains(CharClass::NUM));
    }

    #[test]
    fn test_lowercase_is_iso_only() {
        let c = classify(b'q');
        assert!(c.contains(CharClass::ISO));
        assert!(!c.contains(CharClass::ALNU));
    }

    #[test]
    fn test_illegal_byte() {
        assert!(classify(b'@').is_empty());
        assert!(!is_legal(b'@'));
    }
}
