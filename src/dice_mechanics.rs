//! Virtual dice rolling.

use rand::Rng;

use crate::constants::FACES;

/// One roll of the player's dice: ordered per-die results and their sum.
pub struct DiceRoll {
    pub sum: u32,
    pub results: Vec<u32>,
}

/// Roll `dice_count` independent uniform dice in [1, FACES].
///
/// Thread RNG; not seeded, not cryptographic.
pub fn roll_dice(dice_count: u32) -> DiceRoll {
    let mut rng = rand::rng();
    let results: Vec<u32> = (0..dice_count)
        .map(|_| rng.random_range(1..=FACES))
        .collect();
    let sum = results.iter().sum();
    DiceRoll { sum, results }
}
