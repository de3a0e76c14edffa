//! Row layout for GS1 DataBar Expanded (RSS Expanded) symbols.
//!
//! Grounded on `rssexp.c`'s `symCharPat`/`RSS14Eenc`: symbol characters are
//! packed two at a time into "double segments" separated by a finder
//! pattern selected (and, for half the table, mirrored) from a fixed
//! per-symbol-size finder set, with a running parity accumulated element by
//! element across the whole symbol and folded into a leading check
//! character. The separator/"chex" row generator below is a direct port of
//! `rssutil.c`'s `gs1_cnvSeparator`.

use crate::tables::get_rss_widths;
use crate::types::Row;

const PARITY_MOD: i64 = 211;

/// Odd/even element-count, max-width and combination-count table for
/// splitting a 12-bit symbol character value into two 4-element halves.
/// Transcribed verbatim from `rssexp.c`'s `symCharPat::tbl174`.
const TBL174: [[i64; 6]; 5] = [
    [12, 7, 5, 2, 4, 348],
    [10, 5, 7, 4, 20, 1040],
    [8, 4, 9, 5, 52, 1560],
    [6, 3, 11, 6, 104, 1040],
    [4, 1, 13, 8, 204, 204],
];

/// The six 13-module finder patterns selected between each pair of symbol
/// characters in a double segment. Transcribed verbatim from `rssexp.c`'s
/// `RSS14Eenc::finders`.
const FINDERS: [[u8; 3]; 6] = [[1, 8, 4], [3, 6, 4], [3, 4, 6], [3, 2, 8], [2, 6, 5], [2, 2, 9]];

/// Per-symbol-size finder selection, indexed by `(size - 2) / 2` where
/// `size` is the total data-character count (check character excluded).
/// A positive entry `n` selects `finders[n-1]` in forward orientation; a
/// negative entry `-n` selects `finders[n-1]` reversed (the finder and the
/// data character on either side of it are all mirrored). Transcribed
/// verbatim from `rssexp.c`'s `RSS14Eenc::finderSets`.
const FINDER_SETS: [[i8; 11]; 10] = [
    [1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, -2, 2, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, -3, 2, -4, 0, 0, 0, 0, 0, 0, 0],
    [1, -5, 2, -4, 3, 0, 0, 0, 0, 0, 0],
    [1, -5, 2, -4, 4, -6, 0, 0, 0, 0, 0],
    [1, -5, 2, -4, 5, -6, 6, 0, 0, 0, 0],
    [1, -1, 2, -2, 3, -3, 4, -4, 0, 0, 0],
    [1, -1, 2, -2, 3, -3, 4, -5, 5, 0, 0],
    [1, -1, 2, -2, 3, -3, 4, -5, 6, -6, 0],
    [1, -1, 2, -2, 3, -4, 4, -5, 5, -6, 6],
];

/// Parity weight for the data character adjacent to a finder, indexed by
/// the finder's position in its double segment. Transcribed verbatim from
/// `rssexp.c`'s `RSS14Eenc::parWts`.
const PAR_WTS: [i64; 24] = [
    0, 1, 20, 189, 193, 62, 185, 113, 150, 46, 76, 43, 16, 109, 70, 134, 148, 6, 120, 79, 103, 161, 55, 45,
];

/// Maps one 12-bit symbol character value to its eight element widths,
/// folding its contribution into the running parity as it goes. `forward`
/// selects which half of the 8-element slot gets the odd group (positions
/// 0,2,4,6 forward; 7,5,3,1 reversed) exactly as `symCharPat` does.
/// Direct port of `rssexp.c`'s `symCharPat`.
fn symbol_char_pattern(value: i64, parity: i64, weight: i64, forward: bool) -> ([u8; 8], i64) {
    let mut wgt_odd = weight;
    let mut wgt_even = (weight * 3) % PARITY_MOD;
    let mut parity = parity;

    let mut sym_value = value;
    let mut idx = 0usize;
    while idx + 1 < TBL174.len() && sym_value >= TBL174[idx][5] {
        sym_value -= TBL174[idx][5];
        idx += 1;
    }
    let row = TBL174[idx];
    let (odd_n, odd_max, even_n, even_max, mul) = (row[0], row[1], row[2], row[3], row[4]);

    let odd_val = sym_value / mul;
    let odd_widths = get_rss_widths(odd_val, odd_n, 4, odd_max, false);

    let mut bars = [0u8; 8];
    for (i, &w) in odd_widths.iter().enumerate() {
        let pos = if forward { i * 2 } else { 7 - i * 2 };
        bars[pos] = w;
        parity = (parity + wgt_odd * w as i64) % PARITY_MOD;
        wgt_odd = (wgt_odd * 9) % PARITY_MOD;
    }

    let even_val = sym_value - mul * odd_val;
    let even_widths = get_rss_widths(even_val, even_n, 4, even_max, true);
    for (i, &w) in even_widths.iter().enumerate() {
        let pos = if forward { 1 + i * 2 } else { 6 - i * 2 };
        bars[pos] = w;
        parity = (parity + wgt_even * w as i64) % PARITY_MOD;
        wgt_even = (wgt_even * 9) % PARITY_MOD;
    }

    (bars, parity)
}

/// Builds every double segment of a GS1 DataBar Expanded symbol from
/// `data`, the packed 12-bit symbol character values (check character
/// excluded), returning the check character's value and each segment's
/// element-width pattern in print order (21 elements for a full double
/// segment, 13 for a trailing unpaired one). Direct port of `rssexp.c`'s
/// `RSS14Eenc`, with `size` taken as `data.len()` (the reference derives
/// the same value from its own bit-packing step).
pub fn build_segments(data: &[u32]) -> (u32, Vec<Vec<u8>>) {
    let size = data.len() as i64;
    let fndr_set_ndx = (((size - 2) / 2).max(0) as usize).min(FINDER_SETS.len() - 1);
    let seg_count = ((size + 2) / 2) as usize;

    let mut segments: Vec<Vec<u8>> = Vec::with_capacity(seg_count);
    let mut parity: i64 = 0;
    let mut weight: i64 = 0;

    for i in 0..seg_count {
        let fndr_ndx = FINDER_SETS[fndr_set_ndx][i.min(10)] as i64;
        // Only the bit-packing step's own data-sizing could ever select an
        // out-of-range finder set; for a well-formed symbol `fndr_ndx` is
        // never zero.
        let fndr_ndx = if fndr_ndx == 0 { 1 } else { fndr_ndx };
        let j = if fndr_ndx >= 0 { fndr_ndx * 2 } else { -fndr_ndx * 2 + 1 };

        let has_right = size > (i as i64) * 2;
        let mut seg = vec![0u8; if has_right { 21 } else { 13 }];

        if i > 0 {
            weight = PAR_WTS[(2 * (j - 2)) as usize];
            let value = data[i * 2 - 1] as i64;
            let (widths, new_parity) = symbol_char_pattern(value, parity, weight, true);
            seg[0..8].copy_from_slice(&widths);
            parity = new_parity;
        }

        let finder = FINDERS[(fndr_ndx.unsigned_abs() - 1) as usize];
        if fndr_ndx < 0 {
            seg[12] = finder[0];
            seg[11] = finder[1];
            seg[10] = finder[2];
            seg[9] = 1;
            seg[8] = 1;
        } else {
            seg[8] = finder[0];
            seg[9] = finder[1];
            seg[10] = finder[2];
            seg[11] = 1;
            seg[12] = 1;
        }

        if has_right {
            weight = PAR_WTS[(2 * (j - 2) + 1) as usize];
            let value = data[i * 2] as i64;
            let (widths, new_parity) = symbol_char_pattern(value, parity, weight, false);
            seg[13..21].copy_from_slice(&widths);
            parity = new_parity;
        }

        segments.push(seg);
    }

    let check_value = ((size - 3) * PARITY_MOD + parity).max(0);
    let (check_widths, _) = symbol_char_pattern(check_value, 0, weight, true);
    if let Some(first) = segments.first_mut() {
        first[0..8].copy_from_slice(&check_widths);
    }

    (check_value as u32, segments)
}

/// Concatenates up to `segments_per_row` consecutive double-segment
/// patterns into one printed row.
pub fn assemble_row(segments: &[Vec<u8>]) -> Row {
    let mut pattern = Vec::new();
    for seg in segments {
        pattern.extend_from_slice(seg);
    }
    Row {
        pattern,
        left_pad: 1,
        right_pad: 1,
        wht_first: true,
        reverse: false,
        guards: true,
        height: 2,
        is_separator: false,
    }
}

/// Generates a "chex" (checkerboard) separator row beneath `row`, inserting
/// nine narrow alternating elements inside each 13-module finder so that a
/// gap between stacked rows never closes a finder's wide dark bar against
/// the row above it. Direct port of `rssutil.c`'s `gs1_cnvSeparator`.
pub fn separator_row(row: &Row) -> Row {
    let prints = &row.pattern;
    let mut sep: Vec<u8> = Vec::with_capacity(prints.len() + 18);

    let mut i = 0usize;
    let mut k = 2i32;
    while k <= 4 {
        k += prints[i] as i32;
        i += 1;
    }
    let leading_dark = (row.wht_first && i % 2 == 1) || (!row.wht_first && i % 2 == 0);
    if leading_dark {
        sep.push(4);
        sep.push((k - 4) as u8);
    } else {
        sep.push(k as u8);
    }

    while i < prints.len() {
        if i + 2 < prints.len() && prints[i] as u32 + prints[i + 1] as u32 + prints[i + 2] as u32 == 13 {
            let e1 = prints[i] as usize;
            for _ in 0..e1 {
                sep.push(1);
            }
            i += 1;
            let e2 = prints[i] as usize;
            if e2 > 1 {
                for _ in 0..e2 {
                    sep.push(1);
                }
            } else {
                sep.push(10);
                sep.push(1);
                sep.push(2);
            }
            i += 1;
            let e3 = prints[i] as usize;
            for _ in 0..e3 {
                sep.push(1);
            }
            i += 1;
        } else {
            sep.push(prints[i]);
            i += 1;
        }
    }

    let mut j: i32 = sep.len() as i32 - 1;
    let mut k = 2i32;
    while k <= 4 {
        k += sep[j as usize] as i32;
        j -= 1;
    }
    if j % 2 == 0 {
        j += 2;
        sep.truncate(j as usize - 1);
        sep.push((k - 4) as u8);
        sep.push(4);
    } else {
        j += 1;
        sep.truncate(j as usize);
        sep.push(k as u8);
    }

    Row {
        pattern: sep,
        left_pad: row.left_pad,
        right_pad: row.right_pad,
        wht_first: true,
        reverse: row.reverse,
        guards: false,
        height: 1,
        is_separator: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_char_pattern_sums_to_modules() {
        let (pat, _) = symbol_char_pattern(500, 0, 1, true);
        let sum: i64 = pat.iter().map(|&w| w as i64).sum();
        assert_eq!(sum, 17);
    }

    #[test]
    fn test_symbol_char_pattern_reverse_mirrors_forward() {
        let (fwd, _) = symbol_char_pattern(1234, 0, 1, true);
        let (rev, _) = symbol_char_pattern(1234, 0, 1, false);
        let mut mirrored = fwd;
        mirrored.reverse();
        assert_eq!(mirrored, rev);
    }

    #[test]
    fn test_build_segments_single_double_segment() {
        let (check, segments) = build_segments(&[10, 20]);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].len(), 21);
        assert_eq!(segments[1].len(), 13);
        assert!(check < 929);
    }

    #[test]
    fn test_build_segments_full_row() {
        let data: Vec<u32> = (0..4).map(|i| 100 + i * 37).collect();
        let (_, segments) = build_segments(&data);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].len(), 21);
        assert_eq!(segments[1].len(), 21);
        assert_eq!(segments[2].len(), 13);
        for seg in &segments {
            let finder_sum: u32 = seg[8..11].iter().map(|&w| w as u32).sum();
            assert_eq!(finder_sum, 13);
        }
    }

    #[test]
    fn test_assemble_row_concatenates_segments() {
        let (_, segments) = build_segments(&[10, 20, 30, 40]);
        let row = assemble_row(&segments);
        let total: usize = segments.iter().map(|s| s.len()).sum();
        assert_eq!(row.pattern.len(), total);
        assert!(!row.is_separator);
    }

    #[test]
    fn test_separator_row_is_marked() {
        let (_, segments) = build_segments(&[10, 20]);
        let row = assemble_row(&segments);
        let sep = separator_row(&row);
        assert!(sep.is_separator);
        assert!(!sep.pattern.is_empty());
    }
}
