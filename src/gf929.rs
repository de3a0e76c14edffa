//! GF(929) arithmetic and Reed–Solomon error-correction generation.
//!
//! Grounded on `cc.c`'s `initLogTables`/`gfMul`/`genPoly`/`genECC`: a
//! multiplicative field of order 929 with generator 3, used to append
//! check codewords to a CC-A/B/C data codeword sequence.

use std::sync::OnceLock;

const FIELD_SIZE: u32 = 929;
const GENERATOR: u32 = 3;

struct LogTables {
    pwr: [u16; 928],
    log: [u16; 929],
}

fn log_tables() -> &'static LogTables {
    static TABLES: OnceLock<LogTables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut pwr = [0u16; 928];
        let mut log = [0u16; 929];
        let mut v: u32 = 1;
        for j in 0..928usize {
            pwr[j] = v as u16;
            log[v as usize] = j as u16;
            v = (v * GENERATOR) % FIELD_SIZE;
        }
        LogTables { pwr, log }
    })
}

/// Multiplies two values in GF(929).
pub fn gf_mul(a: u32, b: u32) -> u32 {
    if a == 0 || b == 0 {
        return 0;
    }
    let t = log_tables();
    let e = (t.log[a as usize] as u32 + t.log[b as usize] as u32) % 928;
    t.pwr[e as usize] as u32
}

/// Builds the generator polynomial for `ecc_count` check codewords:
/// `g(x) = prod_{i=1..ecc_count} (x - 3^i) mod 929`, stored ascending
/// (constant term first). The reference's `genPoly` builds the same
/// polynomial as `prod (x + 3^i)` and then negates every other
/// coefficient to flip it to `prod (x - 3^i)`; building it directly
/// here already carries the right signs, so no fold-in negate is
/// needed.
pub fn generator_polynomial(ecc_count: usize) -> Vec<u32> {
    let t = log_tables();
    let mut poly = vec![0u32; ecc_count + 1];
    poly[0] = 1;
    for i in 1..=ecc_count {
        let root = t.pwr[i % 928] as u32;
        for j in (1..=i).rev() {
            poly[j] = (poly[j] + FIELD_SIZE - gf_mul(poly[j - 1], root)) % FIELD_SIZE;
        }
    }
    // `poly` is descending (poly[0] is the leading, always-1 coefficient;
    // poly[ecc_count] is the constant term). `gpa` is the reference's
    // ascending, constant-term-first layout.
    let mut gpa = vec![0u32; ecc_count];
    for k in 0..ecc_count {
        gpa[k] = poly[ecc_count - k];
    }
    gpa
}

/// Appends `ecc_count` Reed–Solomon check codewords to `data`, returning the
/// full `data.len() + ecc_count` codeword sequence.
pub fn generate_ecc(data: &[u32], ecc_count: usize) -> Vec<u32> {
    let gpa = generator_polynomial(ecc_count);
    let d = data.len();
    let mut sym = vec![0u32; d + ecc_count];
    sym[..d].copy_from_slice(data);

    for n in 0..d {
        let t = (sym[d] + sym[n]) % FIELD_SIZE;
        for i in 0..ecc_count - 1 {
            sym[d + i] = (sym[d + i + 1] + FIELD_SIZE - gf_mul(t, gpa[ecc_count - 1 - i])) % FIELD_SIZE;
        }
        sym[d + ecc_count - 1] = (FIELD_SIZE - gf_mul(t, gpa[0])) % FIELD_SIZE;
    }
    for s in sym[d..].iter_mut() {
        *s = (FIELD_SIZE - *s) % FIELD_SIZE;
    }
    sym
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf_mul_identity() {
        assert_eq!(gf_mul(0, 42), 0);
        assert_eq!(gf_mul(42, 0), 0);
        assert_eq!(gf_mul(1, 42), 42);
    }

    #[test]
    fn test_generator_polynomial_length() {
        let gpa = generator_polynomial(8);
        assert_eq!(gpa.len(), 8);
    }

    #[test]
    fn test_generate_ecc_length() {
        let data = vec![1, 2, 3, 4, 5];
        let sym = generate_ecc(&data, 4);
        assert_eq!(sym.len(), 9);
        assert!(sym.iter().all(|&c| c < FIELD_SIZE));
    }

    #[test]
    fn test_generate_ecc_deterministic() {
        let data = vec![100, 200, 300];
        let a = generate_ecc(&data, 8);
        let b = generate_ecc(&data, 8);
        assert_eq!(a, b);
    }
}
