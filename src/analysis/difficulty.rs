//! Difficulty recomputation from the compact target encoding
//!
//! Block headers carry the proof-of-work threshold as a compact 32-bit
//! encoding: an 8-bit exponent in the top byte and a 24-bit mantissa in
//! the low bytes. Difficulty is the ratio of the maximum target to the
//! encoded target, normalized by repeated multiplication/division by 256
//! until the exponent reaches the reference value.

/// Compact encoding of the maximum target; decodes to difficulty 1.0
pub const MAX_TARGET_BITS: u32 = 486_604_799; // 0x1d00ffff

/// Exponent value the decoded ratio is normalized to
const REFERENCE_EXPONENT: u32 = 29;

/// Decode a compact target encoding into a floating-point difficulty
///
/// Returns `None` when the mantissa is zero, which encodes no valid
/// target and would otherwise divide by zero.
pub fn difficulty_from_bits(bits: u32) -> Option<f64> {
    let mut exponent = (bits >> 24) & 0xff;
    let mantissa = bits & 0x00ff_ffff;
    if mantissa == 0 {
        return None;
    }

    let mut difficulty = f64::from(0xffffu32) / f64::from(mantissa);
    while exponent < REFERENCE_EXPONENT {
        difficulty *= 256.0;
        exponent += 1;
    }
    while exponent > REFERENCE_EXPONENT {
        difficulty /= 256.0;
        exponent -= 1;
    }

    Some(difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_max_target_is_unit_difficulty() {
        let difficulty = difficulty_from_bits(MAX_TARGET_BITS).unwrap();
        assert!((difficulty - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_mantissa_is_undefined() {
        assert!(difficulty_from_bits(0x1d00_0000).is_none());
        assert!(difficulty_from_bits(0).is_none());
    }

    #[test]
    fn test_smaller_mantissa_means_higher_difficulty() {
        let easy = difficulty_from_bits(0x1d00_ffff).unwrap();
        let hard = difficulty_from_bits(0x1d00_00ff).unwrap();
        assert!(hard > easy);
    }

    #[test]
    fn test_exponent_step_scales_by_256() {
        let base = difficulty_from_bits(0x1d00_ffff).unwrap();
        let shifted = difficulty_from_bits(0x1c00_ffff).unwrap();
        assert!((shifted / base - 256.0).abs() < 1e-9);
    }

    proptest! {
        /// With identical exponents the difficulty ratio is the inverse
        /// mantissa ratio.
        #[test]
        fn prop_equal_exponent_inverse_mantissa_ratio(
            exponent in 3u32..=32,
            m1 in 1u32..=0x00ff_ffff,
            m2 in 1u32..=0x00ff_ffff,
        ) {
            let b1 = (exponent << 24) | m1;
            let b2 = (exponent << 24) | m2;
            let d1 = difficulty_from_bits(b1).unwrap();
            let d2 = difficulty_from_bits(b2).unwrap();

            let ratio = d1 / d2;
            let expected = f64::from(m2) / f64::from(m1);
            prop_assert!((ratio - expected).abs() <= expected * 1e-9);
        }

        #[test]
        fn prop_difficulty_is_finite_and_positive(
            exponent in 3u32..=32,
            mantissa in 1u32..=0x00ff_ffff,
        ) {
            let bits = (exponent << 24) | mantissa;
            let difficulty = difficulty_from_bits(bits).unwrap();
            prop_assert!(difficulty.is_finite());
            prop_assert!(difficulty > 0.0);
        }
    }
}
