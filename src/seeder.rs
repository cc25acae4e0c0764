use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Range of the uniform draw made for every cell.
pub const ALIVE_RANGE: RangeInclusive<u32> = 0..=5;
/// A cell is born alive iff its draw equals this value.
pub const ALIVE_VALUE: u32 = 1;

const DUMP_TOKEN_RANGE: RangeInclusive<u32> = 1_000_000..=9_999_999;

/// Source of random generations and snapshot tokens.
pub struct Seeder {
    rng: ChaCha8Rng,
}

impl Seeder {
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self { rng }
    }

    /// Independent draw per cell, roughly one in six alive.
    pub fn fill_random(&mut self, cells: &mut [bool]) {
        for cell in cells.iter_mut() {
            *cell = self.rng.gen_range(ALIVE_RANGE) == ALIVE_VALUE;
        }
    }

    pub fn fill_clear(&mut self, cells: &mut [bool]) {
        cells.fill(false);
    }

    /// Seven-digit decimal token used in dump file names.
    pub fn dump_token(&mut self) -> u32 {
        self.rng.gen_range(DUMP_TOKEN_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 42;

    #[test]
    fn same_seed_same_cells() {
        let (mut a, mut b) = (vec![false; 4096], vec![false; 4096]);
        Seeder::new(Some(SEED)).fill_random(&mut a);
        Seeder::new(Some(SEED)).fill_random(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn draws_are_per_cell() {
        let mut cells = vec![false; 6000];
        Seeder::new(Some(SEED)).fill_random(&mut cells);
        let alive = cells.iter().filter(|&&c| c).count();
        // one in six, with plenty of slack
        assert!((700..1300).contains(&alive), "alive = {alive}");
    }

    #[test]
    fn clear_kills_everything() {
        let mut cells = vec![true; 100];
        Seeder::new(Some(SEED)).fill_clear(&mut cells);
        assert!(cells.iter().all(|&c| !c));
    }

    #[test]
    fn tokens_have_seven_digits() {
        let mut seeder = Seeder::new(Some(SEED));
        for _ in 0..100 {
            assert_eq!(seeder.dump_token().to_string().len(), 7);
        }
    }
}
