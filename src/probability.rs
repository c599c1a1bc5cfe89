//! Probability of a target sum, with scientific-notation display strings.

use crate::combinatorics::count_ways;
use crate::constants::FACES;

/// Outcome of a probability query for one (dice_count, target_sum) pair.
pub struct ProbabilityResult {
    /// Ordered sequences summing to the target.
    pub ways: u128,
    /// face_count^dice_count possible ordered sequences.
    pub total_outcomes: u128,
    /// ways / total_outcomes.
    pub probability: f64,
    /// `ways` in one-decimal-digit scientific notation, e.g. "6.0e+0".
    pub ways_display: String,
    /// `total_outcomes` in the same format, e.g. "3.6e+1".
    pub total_display: String,
}

/// Probability of `dice_count` six-sided dice summing to `target_sum`.
///
/// Callers validate the [n, 6n] range first; out-of-range targets simply
/// come back with probability 0.
pub fn probability_of_sum(dice_count: u32, target_sum: u32) -> ProbabilityResult {
    let ways = count_ways(FACES, dice_count, target_sum);
    let total_outcomes = (FACES as u128).pow(dice_count);

    ProbabilityResult {
        ways,
        total_outcomes,
        probability: ways as f64 / total_outcomes as f64,
        ways_display: format_scientific(ways),
        total_display: format_scientific(total_outcomes),
    }
}

/// Format an integer as scientific notation with exactly one digit after
/// the decimal point: 15 -> "1.5e+1", 6 -> "6.0e+0".
///
/// Works on the decimal digit string, so no precision is lost for values
/// beyond f64 range. Ties round half-even (995 -> "1.0e+3",
/// 985 -> "9.8e+2").
pub fn format_scientific(value: u128) -> String {
    if value == 0 {
        return "0.0e+0".to_string();
    }

    let digits = value.to_string().into_bytes();
    let mut exponent = digits.len() - 1;

    // Two-digit mantissa d.d, then round on the discarded tail.
    let d0 = (digits[0] - b'0') as u32;
    let d1 = if digits.len() > 1 {
        (digits[1] - b'0') as u32
    } else {
        0
    };
    let mut mantissa = d0 * 10 + d1;

    if digits.len() > 2 {
        let head = digits[2] - b'0';
        let tail_nonzero = digits[3..].iter().any(|&b| b != b'0');
        if head > 5 || (head == 5 && (tail_nonzero || mantissa % 2 == 1)) {
            mantissa += 1;
        }
    }
    if mantissa == 100 {
        mantissa = 10;
        exponent += 1;
    }

    format!("{}.{}e+{}", mantissa / 10, mantissa % 10, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small_values() {
        assert_eq!(format_scientific(0), "0.0e+0");
        assert_eq!(format_scientific(1), "1.0e+0");
        assert_eq!(format_scientific(6), "6.0e+0");
        assert_eq!(format_scientific(15), "1.5e+1");
        assert_eq!(format_scientific(36), "3.6e+1");
        assert_eq!(format_scientific(100), "1.0e+2");
    }

    #[test]
    fn test_format_rounding_half_even() {
        assert_eq!(format_scientific(995), "1.0e+3");
        assert_eq!(format_scientific(985), "9.8e+2");
        assert_eq!(format_scientific(9951), "1.0e+4");
        assert_eq!(format_scientific(1249), "1.2e+3");
        assert_eq!(format_scientific(1250), "1.2e+3");
        assert_eq!(format_scientific(1251), "1.3e+3");
    }

    #[test]
    fn test_format_large_values() {
        // 6^49, the largest total the game can produce.
        let total = 6u128.pow(49);
        assert_eq!(format_scientific(total), "1.3e+38");
    }

    #[test]
    fn test_two_dice_seven() {
        let res = probability_of_sum(2, 7);
        assert_eq!(res.ways, 6);
        assert_eq!(res.total_outcomes, 36);
        assert_eq!(res.ways_display, "6.0e+0");
        assert_eq!(res.total_display, "3.6e+1");
        assert!((res.probability - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_unreachable_sum_is_zero() {
        let res = probability_of_sum(3, 2);
        assert_eq!(res.ways, 0);
        assert_eq!(res.probability, 0.0);
        assert_eq!(res.ways_display, "0.0e+0");
    }
}
