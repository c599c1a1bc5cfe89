//! User-input validation for the form steps.
//!
//! None of these are fatal: every variant's message is shown on a
//! re-rendered prompt page and the player tries again.

use thiserror::Error;

use crate::constants::{max_sum, min_sum, MAX_DICE_COUNT};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid whole number.")]
    NotAnInteger,
    #[error("Please enter a positive number of dice.")]
    NonPositiveDiceCount,
    #[error("At most {MAX_DICE_COUNT} dice are supported.")]
    TooManyDice,
    #[error("The sum must be between {min} and {max}.")]
    TargetSumOutOfRange { min: u32, max: u32 },
}

/// Parse the dice-count form field: a positive integer up to the cap.
pub fn parse_dice_count(raw: &str) -> Result<u32, InputError> {
    let n: i64 = raw.trim().parse().map_err(|_| InputError::NotAnInteger)?;
    if n <= 0 {
        return Err(InputError::NonPositiveDiceCount);
    }
    if n > MAX_DICE_COUNT as i64 {
        return Err(InputError::TooManyDice);
    }
    Ok(n as u32)
}

/// Parse the target-sum form field against the [n, 6n] bounds for the
/// player's dice count. Runs before any combinatorics.
pub fn parse_target_sum(raw: &str, dice_count: u32) -> Result<u32, InputError> {
    let min = min_sum(dice_count);
    let max = max_sum(dice_count);
    let s: i64 = raw.trim().parse().map_err(|_| InputError::NotAnInteger)?;
    if s < min as i64 || s > max as i64 {
        return Err(InputError::TargetSumOutOfRange { min, max });
    }
    Ok(s as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_count_valid() {
        assert_eq!(parse_dice_count("3"), Ok(3));
        assert_eq!(parse_dice_count(" 49 "), Ok(49));
    }

    #[test]
    fn test_dice_count_invalid() {
        assert_eq!(parse_dice_count("abc"), Err(InputError::NotAnInteger));
        assert_eq!(parse_dice_count("2.5"), Err(InputError::NotAnInteger));
        assert_eq!(parse_dice_count(""), Err(InputError::NotAnInteger));
        assert_eq!(parse_dice_count("0"), Err(InputError::NonPositiveDiceCount));
        assert_eq!(parse_dice_count("-4"), Err(InputError::NonPositiveDiceCount));
        assert_eq!(parse_dice_count("50"), Err(InputError::TooManyDice));
    }

    #[test]
    fn test_target_sum_bounds() {
        assert_eq!(parse_target_sum("7", 2), Ok(7));
        assert_eq!(parse_target_sum("2", 2), Ok(2));
        assert_eq!(parse_target_sum("12", 2), Ok(12));
        assert_eq!(
            parse_target_sum("1", 2),
            Err(InputError::TargetSumOutOfRange { min: 2, max: 12 })
        );
        assert_eq!(
            parse_target_sum("13", 2),
            Err(InputError::TargetSumOutOfRange { min: 2, max: 12 })
        );
        assert_eq!(parse_target_sum("x", 2), Err(InputError::NotAnInteger));
    }

    #[test]
    fn test_messages() {
        let err = InputError::TargetSumOutOfRange { min: 2, max: 12 };
        assert_eq!(err.to_string(), "The sum must be between 2 and 12.");
    }
}
