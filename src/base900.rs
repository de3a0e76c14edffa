//! Base-900 byte-to-codeword packer used by CC-B and CC-C.
//!
//! Grounded on `cc.c`'s `encode900`: the PDF417-style byte compaction rule
//! that turns each group of 6 bytes into 5 base-900 codewords, passing a
//! shorter tail through as raw codewords (one codeword per leftover byte).

const GROUP_BYTES: usize = 6;
const GROUP_CODEWORDS: usize = 5;
const BASE: u64 = 900;

/// Packs a byte string into base-900 codewords, 6 bytes -> 5 codewords per
/// full group, with any <6-byte tail passed through as raw byte values.
pub fn encode_900(data: &[u8]) -> Vec<u32> {
    let mut out = Vec::with_capacity(data.len() / GROUP_BYTES * GROUP_CODEWORDS + data.len() % GROUP_BYTES);
    let mut chunks = data.chunks_exact(GROUP_BYTES);
    for group in &mut chunks {
        out.extend(encode_group(group));
    }
    for &b in chunks.remainder() {
        out.push(b as u32);
    }
    out
}

fn encode_group(group: &[u8]) -> [u32; GROUP_CODEWORDS] {
    let mut value: u64 = 0;
    for &b in group {
        value = (value << 8) | b as u64;
    }
    let mut digits = [0u32; GROUP_CODEWORDS];
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
    fn test_encode_900_full_group_count() {
        let data = [0u8; 6];
        let out = encode_900(&data);
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|&c| c < 900));
    }

    #[test]
    fn test_encode_900_tail_passthrough() {
        let data = [1u8, 2, 3];
        let out = encode_900(&data);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_encode_900_mixed() {
        let mut data = vec![0xAAu8; 6];
        data.extend_from_slice(&[9, 8]);
        let out = encode_900(&data);
        assert_eq!(out.len(), 7);
        assert_eq!(&out[5..], &[9, 8]);
    }
}
