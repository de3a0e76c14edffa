//! Error types for the GS1 composite/DataBar Expanded encoder.
//!
//! This module defines all error types used throughout the encoder,
//! providing detailed error information for debugging and user feedback.

use thiserror::Error;

/// Primary error type for the GS1 symbol encoder.
#[derive(Debug, Error)]
pub enum GsEncodeError {
    /// A byte in the payload does not belong to any legal character class.
    #[error("illegal character {byte:#04x} at index {index}")]
    IllegalCharacter { index: usize, byte: u8 },

    /// The symbol separator `^` appeared where the target symbology forbids it.
    #[error("symbol separator '^' is not permitted in {context}")]
    SeparatorNotPermitted { context: &'static str },

    /// The compacted bit stream does not fit in the largest size of the requested variant.
    #[error("{variant} cannot hold {bits} bits (max {max_bits})")]
    SymbolTooLarge {
        variant: &'static str,
        bits: usize,
        max_bits: usize,
    },

    /// No row/column/ecc combination satisfies the CC-C layout constraints.
    #[error("no CC-C layout fits {codewords} data codewords")]
    NoLayoutFits { codewords: usize },

    /// A DataBar Expanded segment was narrower than the minimum of 4 characters.
    #[error("DataBar Expanded segment width {width} is narrower than the minimum of 4")]
    SegmentTooNarrow { width: usize },

    /// A 2D composite component was requested without a primary linear symbol.
    #[error("composite pairing requested but no linear primary was supplied")]
    MissingPrimary,

    /// A `put` on the bit buffer would overrun its capacity.
    #[error("bit buffer overrun: writing {len} bits at {pos} exceeds capacity of {capacity} bits")]
    BitBufferOverrun {
        pos: usize,
        len: usize,
        capacity: usize,
    },

    /// A bit field write was requested outside the 1..=16 bit range the buffer supports.
    #[error("bit field length {len} is out of range (expected 1..=16)")]
    InvalidFieldLength { len: usize },

    /// Internal invariant violation; should never trigger for input that passed lexical validation.
    #[error("internal encoder invariant violated: {message}")]
    Internal { message: String },
}

/// Result type alias for encoder operations.
pub type Result<T> = std::result::Result<T, GsEncodeError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Wrap an internal invariant failure with additional context.
    fn context(self, msg: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| GsEncodeError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GsEncodeError::SymbolTooLarge {
            variant: "CC-A-2",
            bits: 200,
            max_bits: 152,
        };
        assert!(err.to_string().contains("200"));
        assert!(err.to_string().contains("152"));
    }

    #[test]
    fn test_illegal_character() {
        let err = GsEncodeError::IllegalCharacter { index: 3, byte: b'@' };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains("40"));
    }
}
