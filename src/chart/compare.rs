//! Difficulty-algorithm comparison sample data
//!
//! A bundled capture of compact target encodings from a testnet run
//! where the legacy retarget and the LWMA retarget were computed side by
//! side. The curves are illustrative and do not generalize to other
//! chains or height ranges.

use crate::analysis::difficulty_from_bits;

/// Heights of the sampled blocks
pub const SAMPLE_HEIGHTS: [u64; 9] = [
    1_090_177, 1_090_321, 1_090_393, 1_090_465, 1_090_537, 1_090_609, 1_090_681, 1_090_753,
    1_090_825,
];

/// Compact target encodings produced by the legacy retarget
const LEGACY_BITS: [u32; 9] = [
    486_604_799, 486_604_799, 486_595_646, 486_592_511, 486_592_446, 486_586_626, 486_604_799,
    486_598_932, 486_604_799,
];

/// Compact target encodings produced by the LWMA retarget
const LWMA_BITS: [u32; 9] = [
    486_604_799, 486_599_772, 486_596_543, 486_589_027, 486_595_014, 486_575_028, 486_583_155,
    486_597_636, 486_603_916,
];

/// Decoded legacy difficulty curve as plot points
pub fn legacy_series() -> Vec<[f64; 2]> {
    decode_series(&LEGACY_BITS)
}

/// Decoded LWMA difficulty curve as plot points
pub fn lwma_series() -> Vec<[f64; 2]> {
    decode_series(&LWMA_BITS)
}

fn decode_series(bits: &[u32; 9]) -> Vec<[f64; 2]> {
    SAMPLE_HEIGHTS
        .iter()
        .zip(bits.iter())
        .filter_map(|(&height, &bits)| {
            difficulty_from_bits(bits).map(|difficulty| [height as f64, difficulty])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_cover_all_sample_heights() {
        assert_eq!(legacy_series().len(), SAMPLE_HEIGHTS.len());
        assert_eq!(lwma_series().len(), SAMPLE_HEIGHTS.len());
    }

    #[test]
    fn test_decoded_difficulties_are_sane() {
        // All samples sit at or below the maximum target, so every
        // decoded difficulty is at least 1.0
        for point in legacy_series().iter().chain(lwma_series().iter()) {
            assert!(point[1] >= 1.0);
            assert!(point[1].is_finite());
        }
    }

    #[test]
    fn test_max_target_samples_decode_to_unit_difficulty() {
        let legacy = legacy_series();
        assert!((legacy[0][1] - 1.0).abs() < 1e-12);
        assert!((legacy[1][1] - 1.0).abs() < 1e-12);
    }
}
