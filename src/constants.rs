//! Game constants and sum-bound helpers.

/// Number of faces on each die. The whole game is six-sided.
pub const FACES: u32 = 6;

/// Largest supported dice count: 6^49 still fits in a u128, 6^50 does not.
pub const MAX_DICE_COUNT: u32 = 49;

/// Cookie carrying the player's chosen dice count between pages.
pub const DICE_COUNT_COOKIE: &str = "dice_count";

/// Default HTTP port when `DICE_ODDS_PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Smallest sum `dice_count` dice can roll (all ones).
#[inline(always)]
pub fn min_sum(dice_count: u32) -> u32 {
    dice_count
}

/// Largest sum `dice_count` dice can roll (all sixes).
#[inline(always)]
pub fn max_sum(dice_count: u32) -> u32 {
    dice_count * FACES
}
