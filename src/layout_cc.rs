//! Row layout for CC-A and CC-B symbols.
//!
//! Grounded on `cc.c`'s `imgCCA2`/`imgCCB2`/`imgCCA3`/`imgCCB3`/`imgCCA4`/
//! `imgCCB4`: each row interleaves a left Row Address Pattern, one or more
//! data-cluster codewords, and a right RAP (3- and 4-column variants
//! additionally insert a centre RAP at the same RAP index as the left, on
//! the other `barRap` side). The three-column CC-A variant is the one
//! exception: its rows carry no left RAP at all, only a centre and a right
//! one. CC-A's right RAP always sits a fixed 32/64 index-steps from the
//! left, independent of size; CC-B's right RAP is rotated by a per-size
//! `rotate[]` table instead.

use crate::tables::{bar_data_pattern, rap_pattern};
use crate::types::{CcColumns, Row};

const QUIET: u8 = 1;
const RAP_MOD: usize = 52;

/// `imgCCA2.rows[]` / `imgCCA2.raps[]` — row counts and first-row left RAP
/// index per CC-A-2 size class.
const CCA2_ROWS: &[usize] = &[5, 6, 7, 8, 9, 10, 12];
const CCA2_RAPS: &[usize] = &[39, 1, 32, 8, 14, 43, 20];

/// `imgCCB2.rows[]` / `.raps[]` / `.rotate[]`.
const CCB2_ROWS: &[usize] = &[17, 20, 23, 26];
const CCB2_RAPS: &[usize] = &[36, 19, 9, 27];
const CCB2_ROTATE: &[usize] = &[0, 0, 8, 8];

/// `imgCCA3.rows[]` / `.raps[]`. This variant has no left RAP element.
const CCA3_ROWS: &[usize] = &[4, 5, 6, 7, 8];
const CCA3_RAPS: &[usize] = &[11, 1, 5, 15, 21];

const CCB3_ROWS: &[usize] = &[15, 20, 26, 32, 38, 44];
const CCB3_RAPS: &[usize] = &[37, 1, 1, 21, 15, 1];
const CCB3_ROTATE: &[usize] = &[0, 16, 8, 8, 16, 24];

const CCA4_ROWS: &[usize] = &[3, 4, 5, 6, 7];
const CCA4_RAPS: &[usize] = &[40, 43, 46, 34, 29];

const CCB4_ROWS: &[usize] = &[10, 12, 15, 20, 26, 32, 38, 44];
const CCB4_RAPS: &[usize] = &[15, 25, 37, 1, 1, 21, 15, 1];
const CCB4_ROTATE: &[usize] = &[0, 0, 0, 16, 8, 8, 16, 24];

/// The fixed index-step from a row's left RAP to its centre/right RAP in the
/// CC-A 3- and 4-column variants (`cc.c` hardcodes these rather than
/// tabulating a per-size rotation, unlike CC-B).
const CCA_CENTRE_STEP: usize = 32;
const CCA_RIGHT_STEP: usize = 64;

fn codeword_row(cluster: usize, codewords: &[u32]) -> Vec<u8> {
    let mut pattern = Vec::with_capacity(codewords.len() * 8);
    for &cw in codewords {
        pattern.extend_from_slice(&bar_data_pattern(cluster, cw));
    }
    pattern
}

fn finish_row(pattern: Vec<u8>) -> Row {
    Row {
        pattern,
        left_pad: QUIET,
        right_pad: QUIET,
        wht_first: true,
        reverse: false,
        guards: true,
        height: 2,
        is_separator: false,
    }
}

/// Lays out all rows of a CC-A/CC-B symbol.
///
/// `size_idx` is the per-variant size-class index (0-based within the
/// CC-A or CC-B portion of the relevant `CC2Sizes`/`CC3Sizes`/`CC4Sizes`
/// table, as returned by [`crate::sizer::size_cc_ab`]'s `CcFit`).
/// `codewords` must already include ECC.
pub fn layout(columns: CcColumns, is_cca: bool, size_idx: usize, codewords: &[u32]) -> Vec<Row> {
    match (columns, is_cca) {
        (CcColumns::Two, true) => layout_cca2(size_idx, codewords),
        (CcColumns::Two, false) => layout_ccb2(size_idx, codewords),
        (CcColumns::Three, true) => layout_cca3(size_idx, codewords),
        (CcColumns::Three, false) => layout_ccb3(size_idx, codewords),
        (CcColumns::Four, true) => layout_cca4(size_idx, codewords),
        (CcColumns::Four, false) => layout_ccb4(size_idx, codewords),
    }
}

/// Two-column CC-A: left RAP, two data codewords, right RAP (left index + 32).
pub fn layout_cca2(size_idx: usize, codewords: &[u32]) -> Vec<Row> {
    let row_count = CCA2_ROWS[size_idx % CCA2_ROWS.len()];
    let mut left_rap = CCA2_RAPS[size_idx % CCA2_RAPS.len()];
    let mut rows = Vec::with_capacity(row_count);
    for r in 0..row_count {
        let cluster = left_rap % 3;
        let start = r * 2;
        let row_cws = &codewords[start..(start + 2).min(codewords.len())];
        let mut pattern = rap_pattern(0, left_rap).to_vec();
        pattern.extend(codeword_row(cluster, row_cws));
        pattern.extend_from_slice(&rap_pattern(0, (left_rap + CCA_RIGHT_STEP) % RAP_MOD));
        rows.push(finish_row(pattern));
        left_rap = (left_rap + 1) % RAP_MOD;
    }
    rows
}

/// Two-column CC-B: left RAP, two data codewords, right RAP rotated by
/// `CCB2_ROTATE[size_idx]` index-steps from the left.
pub fn layout_ccb2(size_idx: usize, codewords: &[u32]) -> Vec<Row> {
    let row_count = CCB2_ROWS[size_idx % CCB2_ROWS.len()];
    let rotate = CCB2_ROTATE[size_idx % CCB2_ROTATE.len()];
    let mut left_rap = CCB2_RAPS[size_idx % CCB2_RAPS.len()];
    let mut rows = Vec::with_capacity(row_count);
    for r in 0..row_count {
        let cluster = left_rap % 3;
        let start = r * 2;
        let row_cws = &codewords[start..(start + 2).min(codewords.len())];
        let mut pattern = rap_pattern(0, left_rap).to_vec();
        pattern.extend(codeword_row(cluster, row_cws));
        pattern.extend_from_slice(&rap_pattern(0, (left_rap + rotate) % RAP_MOD));
        rows.push(finish_row(pattern));
        left_rap = (left_rap + 1) % RAP_MOD;
    }
    rows
}

/// Three-column CC-A: no left RAP. Centre RAP at left index + 32 (side 1),
/// one data codeword, right RAP at left index + 64 (side 0).
pub fn layout_cca3(size_idx: usize, codewords: &[u32]) -> Vec<Row> {
    let row_count = CCA3_ROWS[size_idx % CCA3_ROWS.len()];
    let mut left_rap = CCA3_RAPS[size_idx % CCA3_RAPS.len()];
    let mut rows = Vec::with_capacity(row_count);
    for r in 0..row_count {
        let cluster = left_rap % 3;
        let start = r * 3;
        let half = 2.min(codewords.len().saturating_sub(start));
        let row_cws = &codewords[start..(start + 3).min(codewords.len())];
        let (first, rest) = row_cws.split_at(half.min(row_cws.len()));
        let mut pattern = codeword_row(cluster, first);
        pattern.extend_from_slice(&rap_pattern(1, (left_rap + CCA_CENTRE_STEP) % RAP_MOD));
        pattern.extend(codeword_row(cluster, rest));
        pattern.extend_from_slice(&rap_pattern(0, (left_rap + CCA_RIGHT_STEP) % RAP_MOD));
        rows.push(finish_row(pattern));
        left_rap = (left_rap + 1) % RAP_MOD;
    }
    rows
}

/// Three-column CC-B: left RAP, data, centre RAP (same index, side 1),
/// data, right RAP rotated by `CCB3_ROTATE[size_idx]`.
pub fn layout_ccb3(size_idx: usize, codewords: &[u32]) -> Vec<Row> {
    let row_count = CCB3_ROWS[size_idx % CCB3_ROWS.len()];
    let rotate = CCB3_ROTATE[size_idx % CCB3_ROTATE.len()];
    let mut left_rap = CCB3_RAPS[size_idx % CCB3_RAPS.len()];
    let mut rows = Vec::with_capacity(row_count);
    for r in 0..row_count {
        let cluster = left_rap % 3;
        let start = r * 3;
        let row_cws = &codewords[start..(start + 3).min(codewords.len())];
        let half = row_cws.len().div_ceil(2);
        let (first, rest) = row_cws.split_at(half);
        let mut pattern = rap_pattern(0, left_rap).to_vec();
        pattern.extend(codeword_row(cluster, first));
        pattern.extend_from_slice(&rap_pattern(1, left_rap));
        pattern.extend(codeword_row(cluster, rest));
        pattern.extend_from_slice(&rap_pattern(0, (left_rap + rotate) % RAP_MOD));
        rows.push(finish_row(pattern));
        left_rap = (left_rap + 1) % RAP_MOD;
    }
    rows
}

/// Four-column CC-A: left RAP, two data codewords, centre RAP (left + 32,
/// side 1), two data codewords, right RAP (left + 64, side 0).
pub fn layout_cca4(size_idx: usize, codewords: &[u32]) -> Vec<Row> {
    let row_count = CCA4_ROWS[size_idx % CCA4_ROWS.len()];
    let mut left_rap = CCA4_RAPS[size_idx % CCA4_RAPS.len()];
    let mut rows = Vec::with_capacity(row_count);
    for r in 0..row_count {
        let cluster = left_rap % 3;
        let start = r * 4;
        let row_cws = &codewords[start..(start + 4).min(codewords.len())];
        let half = 2.min(row_cws.len());
        let (first, rest) = row_cws.split_at(half);
        let mut pattern = rap_pattern(0, left_rap).to_vec();
        pattern.extend(codeword_row(cluster, first));
        pattern.extend_from_slice(&rap_pattern(1, (left_rap + CCA_CENTRE_STEP) % RAP_MOD));
        pattern.extend(codeword_row(cluster, rest));
        pattern.extend_from_slice(&rap_pattern(0, (left_rap + CCA_RIGHT_STEP) % RAP_MOD));
        rows.push(finish_row(pattern));
        left_rap = (left_rap + 1) % RAP_MOD;
    }
    rows
}

/// Four-column CC-B: left RAP, data, centre RAP (same index, side 1),
/// data, right RAP rotated by `CCB4_ROTATE[size_idx]`.
pub fn layout_ccb4(size_idx: usize, codewords: &[u32]) -> Vec<Row> {
    let row_count = CCB4_ROWS[size_idx % CCB4_ROWS.len()];
    let rotate = CCB4_ROTATE[size_idx % CCB4_ROTATE.len()];
    let mut left_rap = CCB4_RAPS[size_idx % CCB4_RAPS.len()];
    let mut rows = Vec::with_capacity(row_count);
    for r in 0..row_count {
        let cluster = left_rap % 3;
        let start = r * 4;
        let row_cws = &codewords[start..(start + 4).min(codewords.len())];
        let half = row_cws.len().div_ceil(2);
        let (first, rest) = row_cws.split_at(half);
        let mut pattern = rap_pattern(0, left_rap).to_vec();
        pattern.extend(codeword_row(cluster, first));
        pattern.extend_from_slice(&rap_pattern(1, left_rap));
        pattern.extend(codeword_row(cluster, rest));
        pattern.extend_from_slice(&rap_pattern(0, (left_rap + rotate) % RAP_MOD));
        rows.push(finish_row(pattern));
        left_rap = (left_rap + 1) % RAP_MOD;
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cca2_row_count_matches_size_table() {
        let codewords: Vec<u32> = (0..10).collect();
        let rows = layout_cca2(0, &codewords);
        assert_eq!(rows.len(), CCA2_ROWS[0]);
    }

    #[test]
    fn test_cca2_row_pattern_is_left_data_right() {
        let codewords: Vec<u32> = (0..10).collect();
        let rows = layout_cca2(0, &codewords);
        // left RAP (6) + 2 data codewords (16) + right RAP (6)
        assert_eq!(rows[0].pattern.len(), 6 + 16 + 6);
    }

    #[test]
    fn test_cca3_has_no_left_rap_but_has_centre_and_right() {
        let codewords: Vec<u32> = (0..15).collect();
        let rows = layout_cca3(0, &codewords);
        // 2 data cws (16) + centre RAP (6) + 1 data cw (8) + right RAP (6)
        assert_eq!(rows[0].pattern.len(), 16 + 6 + 8 + 6);
    }

    #[test]
    fn test_ccb3_has_left_centre_and_right_raps() {
        let codewords: Vec<u32> = (0..45).collect();
        let rows = layout_ccb3(0, &codewords);
        // left RAP (6) + 2 data cws (16) + centre RAP (6) + 1 data cw (8) + right RAP (6)
        assert_eq!(rows[0].pattern.len(), 6 + 16 + 6 + 8 + 6);
    }

    #[test]
    fn test_cca4_row_count() {
        let codewords: Vec<u32> = (0..12).collect();
        let rows = layout_cca4(0, &codewords);
        assert_eq!(rows.len(), CCA4_ROWS[0]);
    }

    #[test]
    fn test_ccb4_rotation_differs_by_size() {
        let codewords: Vec<u32> = (0..176).collect();
        let small = layout_ccb4(0, &codewords);
        let large = layout_ccb4(3, &codewords);
        // Different rotate[] entries (0 vs 16) should produce different right RAPs.
        assert_ne!(small[0].pattern, large[0].pattern);
    }

    #[test]
    fn test_layout_dispatches_by_variant() {
        let codewords: Vec<u32> = (0..10).collect();
        let via_generic = layout(CcColumns::Two, true, 0, &codewords);
        let direct = layout_cca2(0, &codewords);
        assert_eq!(via_generic, direct);
    }
}
