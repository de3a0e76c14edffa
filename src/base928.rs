//! Base-928 codeword packer used by CC-A.
//!
//! Grounded on `cc.c`'s `init928`/`encode928`: the compacted bit stream is
//! split into chunks of up to 69 bits; each chunk becomes `floor(bits/10)+1`
//! base-928 codewords, read most-significant-bit-first. A 69-bit chunk fits
//! comfortably in a `u128`, so the positional conversion is done as plain
//! repeated division rather than the reference's digit-table doubling trick.

const CHUNK_BITS: usize = 69;
const BASE: u128 = 928;

/// Packs a bit stream (as a sequence of booleans, MSB-first) into base-928
/// codewords, chunking at 69 bits as the reference encoder does.
pub fn encode_928(bits: &[bool]) -> Vec<u32> {
    let mut out = Vec::new();
    let mut offset = 0;
    while offset < bits.len() {
        let take = CHUNK_BITS.min(bits.len() - offset);
        let chunk = &bits[offset..offset + take];
        out.extend(encode_chunk(chunk));
        offset += take;
    }
    out
}

fn encode_chunk(chunk: &[bool]) -> Vec<u32> {
    let digit_count = chunk.len() / 10 + 1;
    let mut value: u128 = 0;
    for &bit in chunk {
        value = (value << 1) | (bit as u128);
    }

    let mut digits = vec![0u32; digit_count];
    for digit in digits.iter_mut().rev() {
        *digit = (value % BASE) as u32;
        value /= BASE;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_928_single_chunk_length() {
        let bits = vec![true; 40];
        let codewords = encode_928(&bits);
        assert_eq!(codewords.len(), 40 / 10 + 1);
        assert!(codewords.iter().all(|&c| c < 928));
    }

    #[test]
    fn test_encode_928_multi_chunk() {
        let bits = vec![false; 140];
        let codewords = encode_928(&bits);
        // two chunks (69 + 69 + tail split at 69 boundaries) each contribute
        // at least 7 codewords
        assert!(codewords.len() >= 14);
    }

    #[test]
    fn test_encode_928_zero_chunk_all_zero() {
        let bits = vec![false; 20];
        let codewords = encode_928(&bits);
        assert!(codewords.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_encode_928_roundtrip_value() {
        // 10 bits of value 0b1111111111 (1023) should reconstruct to 1023
        // when the two resulting digits are read back as base-928.
        let bits: Vec<bool> = (0..10).map(|_| true).collect();
        let codewords = encode_928(&bits);
        assert_eq!(codewords.len(), 2);
        let reconstructed = codewords[0] as u128 * BASE + codewords[1] as u128;
        assert_eq!(reconstructed, 1023);
    }
}
