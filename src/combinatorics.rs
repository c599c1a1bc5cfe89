//! Counting ordered die-outcome sequences that reach a target sum.
//!
//! `count_ways` runs a DP over (dice used, partial sum). Order matters:
//! rolling 3-then-5 and 5-then-3 are distinct outcomes, so summing the
//! counts over all reachable targets recovers face_count^dice_count.

/// Number of ordered sequences of `dice_count` die results (faces
/// 1..=`face_count`) that sum to exactly `target_sum`.
///
/// table[i][j] = ways to reach partial sum j with i dice. Base case:
/// zero dice reach sum zero in exactly one way. Each die then adds
/// table[i-1][j-k] for every face k <= j.
///
/// Unreachable targets (below `dice_count` or above
/// `dice_count * face_count`) fall out of the DP as 0.
pub fn count_ways(face_count: u32, dice_count: u32, target_sum: u32) -> u128 {
    let dice = dice_count as usize;
    let target = target_sum as usize;

    // Fresh table per call; nothing is shared across requests.
    let mut table = vec![vec![0u128; target + 1]; dice + 1];
    table[0][0] = 1;

    for i in 1..=dice {
        for j in 1..=target {
            for k in 1..=face_count.min(j as u32) as usize {
                table[i][j] += table[i - 1][j - k];
            }
        }
    }

    table[dice][target]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{max_sum, min_sum, FACES};

    #[test]
    fn test_single_die() {
        for s in 1..=6 {
            assert_eq!(count_ways(FACES, 1, s), 1);
        }
        assert_eq!(count_ways(FACES, 1, 0), 0);
        assert_eq!(count_ways(FACES, 1, 7), 0);
    }

    #[test]
    fn test_two_dice_seven() {
        // 1+6, 2+5, 3+4, 4+3, 5+2, 6+1
        assert_eq!(count_ways(FACES, 2, 7), 6);
    }

    #[test]
    fn test_two_dice_extremes() {
        assert_eq!(count_ways(FACES, 2, 2), 1);
        assert_eq!(count_ways(FACES, 2, 12), 1);
        assert_eq!(count_ways(FACES, 2, 1), 0);
        assert_eq!(count_ways(FACES, 2, 13), 0);
    }

    #[test]
    fn test_zero_dice() {
        assert_eq!(count_ways(FACES, 0, 0), 1);
        assert_eq!(count_ways(FACES, 0, 3), 0);
    }

    #[test]
    fn test_total_outcomes_conserved() {
        for n in 1..=8u32 {
            let total: u128 = (min_sum(n)..=max_sum(n))
                .map(|s| count_ways(FACES, n, s))
                .sum();
            assert_eq!(total, (FACES as u128).pow(n), "n = {}", n);
        }
    }

    #[test]
    fn test_four_faces() {
        // 2d4 summing to 5: 1+4, 2+3, 3+2, 4+1
        assert_eq!(count_ways(4, 2, 5), 4);
    }

}
