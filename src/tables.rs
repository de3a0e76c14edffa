//! Combinatorial element-width generator and the pattern tables built on it.
//!
//! `combins`/`get_rss_widths` are a direct port of `rssutil.c`'s
//! `combins`/`gs1_getRSSwidths`: the stars-and-bars decomposition that turns
//! a linear index into a set of element widths summing to a fixed module
//! count. The reference encoder uses this routine for DataBar/DataBar
//! Expanded symbol characters. The Row Address Pattern table (`BAR_RAP`) is
//! ported verbatim from the reference's `barrap.h`; `barData` (the
//! `barData[cluster][codeword]` table referenced by `cc.c`) has no retrieved
//! source (`original_source/_INDEX.md` does not list a `bardata.h`) and is
//! instead *synthesized* with the same stars-and-bars generator, deterministic
//! per `(cluster, codeword)` (see `DESIGN.md`).

use std::sync::OnceLock;

/// `n! / (r! * (n-r)!)`, computed iteratively to avoid factorial overflow,
/// exactly as the reference's `combins`.
pub fn combins(n: i64, r: i64) -> i64 {
    let (min_denom, max_denom) = if n - r > r { (r, n - r) } else { (n - r, r) };
    let mut val: i64 = 1;
    let mut j: i64 = 1;
    let mut i = n;
    while i > max_denom {
        val *= i;
        if j <= min_denom {
            val /= j;
            j += 1;
        }
        i -= 1;
    }
    while j <= min_denom {
        val /= j;
        j += 1;
    }
    val
}

/// Generates the `elements` element widths (each in `1..=max_width`) of
/// module-count `n` that numeric value `val` selects, under the
/// `no_narrow` exclusion rule. Direct port of `gs1_getRSSwidths`.
pub fn get_rss_widths(val: i64, n: i64, elements: i64, max_width: i64, no_narrow: bool) -> Vec<u8> {
    let mut widths = vec![0u8; elements as usize];
    let mut val = val;
    let mut n = n;
    let mut narrow_mask: u32 = 0;

    for bar in 0..elements - 1 {
        let bar_bit = bar as u32;
        let mut elm_width = 1i64;
        narrow_mask |= 1 << bar_bit;
        let mut sub_val;
        loop {
            sub_val = combins(n - elm_width - 1, elements - bar - 2);
            if !no_narrow
                && narrow_mask == 0
                && n - elm_width - (elements - bar - 1) >= elements - bar - 1
            {
                sub_val -= combins(n - elm_width - (elements - bar), elements - bar - 2);
            }
            if elements - bar - 1 > 1 {
                let mut less_val = 0;
                let mut mxw_element = n - elm_width - (elements - bar - 2);
                while mxw_element > max_width {
                    less_val += combins(n - elm_width - mxw_element - 1, elements - bar - 3);
                    mxw_element -= 1;
                }
                sub_val -= less_val * (elements - 1 - bar);
            } else if n - elm_width > max_width {
                sub_val -= 1;
            }
            val -= sub_val;
            if val < 0 {
                break;
            }
            elm_width += 1;
            narrow_mask &= !(1 << bar_bit);
        }
        val += sub_val;
        n -= elm_width;
        widths[bar as usize] = elm_width as u8;
    }
    widths[(elements - 1) as usize] = n as u8;
    widths
}

const RAP_COUNT: usize = 52;
const RAP_ELEMENTS: usize = 6;

const BAR_DATA_CODEWORDS: u32 = 929;
const BAR_DATA_ELEMENTS: i64 = 8;
const BAR_DATA_MODULES: i64 = 17;
const BAR_DATA_MAX_WIDTH: i64 = 9;

/// `barRap[0]` (used for left and right RAPs) and `barRap[1]` (used for
/// centre RAPs), ported verbatim from the reference's `barrap.h`. Each entry
/// packs 6 element widths as 3-bit fields, MSB-first, in an 18-bit value.
const BAR_RAP: [[u32; RAP_COUNT]; 2] = [
    [
        74441, 103113, 103561, 74889, 71305, 71753, 75337, 104009, 107593, 136265, 139849, 111177, 82505, 78921,
        78473, 107145, 135817, 135761, 135754, 107082, 103498, 103050, 103057, 103001, 102994, 102987, 74315, 74322,
        74329, 74385, 74833, 103505, 107089, 78417, 78410, 74826, 71242, 70794, 70801, 70745, 70738, 70731, 70283,
        70227, 70234, 70241, 70297, 70290, 70346, 70353, 70409, 70857,
    ],
    [
        38041, 41625, 42073, 45657, 45713, 46161, 49745, 49801, 50249, 46665, 46217, 45769, 42185, 42633, 43081,
        39497, 39049, 38993, 42577, 42570, 42122, 42129, 41681, 41737, 38153, 38601, 38545, 38538, 38482, 42066,
        45650, 45643, 42059, 38475, 38027, 38034, 38090, 38097, 37649, 37593, 37586, 37530, 37523, 37467, 37460,
        37516, 37964, 41548, 41555, 41562, 37978, 37985,
    ],
];

/// Unpacks a `barRap`/`barData`-style packed value into `elements` 3-bit
/// widths, MSB-first, exactly as `cc.c`'s `(bars >> ((n-1-j)*3)) & 7` loop.
fn unpack_bars(bars: u32, elements: usize) -> Vec<u8> {
    (0..elements)
        .map(|j| ((bars >> ((elements - 1 - j) * 3)) & 7) as u8)
        .collect()
}

/// Returns the six element widths of RAP index `index` (0..52) on the given
/// side (0 = left/right, 1 = centre), per `cc.c`'s `barRap[side][index]`.
pub fn rap_pattern(side: usize, index: usize) -> [u8; RAP_ELEMENTS] {
    let bars = BAR_RAP[side % 2][index % RAP_COUNT];
    let widths = unpack_bars(bars, RAP_ELEMENTS);
    widths.try_into().unwrap()
}

struct BarDataTable(Vec<[u8; BAR_DATA_ELEMENTS as usize]>);

fn bar_data_table(cluster: usize) -> &'static [[u8; BAR_DATA_ELEMENTS as usize]] {
    static CLUSTERS: OnceLock<[BarDataTable; 3]> = OnceLock::new();
    &CLUSTERS
        .get_or_init(|| {
            std::array::from_fn(|c| {
                let mut rows = Vec::with_capacity(BAR_DATA_CODEWORDS as usize);
                for cw in 0..BAR_DATA_CODEWORDS {
                    let mut widths = get_rss_widths(
                        cw as i64,
                        BAR_DATA_MODULES,
                        BAR_DATA_ELEMENTS,
                        BAR_DATA_MAX_WIDTH,
                        false,
                    );
                    // 120-degree-equivalent cyclic rotation per cluster.
                    let shift = (c * BAR_DATA_ELEMENTS as usize) / 3;
                    widths.rotate_left(shift);
                    let arr: [u8; BAR_DATA_ELEMENTS as usize] = widths.try_into().unwrap();
                    rows.push(arr);
                }
                BarDataTable(rows)
            })
        })[cluster]
        .0
}

/// Returns the eight element widths for `codeword` (0..929) in the given
/// cluster (0, 1, or 2).
pub fn bar_data_pattern(cluster: usize, codeword: u32) -> [u8; BAR_DATA_ELEMENTS as usize] {
    bar_data_table(cluster % 3)[codeword as usize % BAR_DATA_CODEWORDS as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combins_basic() {
        assert_eq!(combins(5, 2), 10);
        assert_eq!(combins(4, 0), 1);
        assert_eq!(combins(6, 6), 1);
    }

    #[test]
    fn test_rss_widths_sum_to_n() {
        let widths = get_rss_widths(12, 17, 4, 8, false);
        let sum: i64 = widths.iter().map(|&w| w as i64).sum();
        assert_eq!(sum, 17);
    }

    #[test]
    fn test_rap_pattern_sums_to_module_count() {
        // Every `barRap` entry (both sides) sums to 10 modules across its 6
        // elements; verified against all 104 literal table entries.
        for side in 0..2 {
            for index in 0..RAP_COUNT {
                let widths = rap_pattern(side, index);
                let sum: i64 = widths.iter().map(|&w| w as i64).sum();
                assert_eq!(sum, 10, "side {side} index {index}");
            }
        }
    }

    #[test]
    fn test_bar_data_pattern_sums_to_module_count() {
        let widths = bar_data_pattern(1, 500);
        let sum: i64 = widths.iter().map(|&w| w as i64).sum();
        assert_eq!(sum, BAR_DATA_MODULES);
    }

    #[test]
    fn test_bar_data_clusters_differ() {
        let a = bar_data_pattern(0, 300);
        let b = bar_data_pattern(1, 300);
        assert_ne!(a, b);
    }
}
