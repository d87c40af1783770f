use rand::seq::IteratorRandom;

use crate::models::Grid;
use crate::utils::letters::ALPHABET;

/// Number of letters in a grid
pub const GRID_SIZE: usize = 5;

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a new grid of unique letters sampled from the alphabet
    pub fn generate() -> Grid {
        let mut rng = rand::rng();
        ALPHABET.chars().choose_multiple(&mut rng, GRID_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::letters::is_playable_letter;
    use std::collections::HashSet;

    #[test]
    fn test_grid_size() {
        for _ in 0..100 {
            assert_eq!(GridGenerator::generate().len(), GRID_SIZE);
        }
    }

    #[test]
    fn test_grid_letters_distinct() {
        for _ in 0..100 {
            let grid = GridGenerator::generate();
            let unique: HashSet<_> = grid.iter().collect();
            assert_eq!(
                unique.len(),
                GRID_SIZE,
                "grid {:?} contains repeated letters",
                grid
            );
        }
    }

    #[test]
    fn test_grid_letters_from_alphabet() {
        for _ in 0..100 {
            let grid = GridGenerator::generate();
            assert!(
                grid.iter().all(|&ch| is_playable_letter(ch)),
                "grid {:?} contains a letter outside the alphabet",
                grid
            );
        }
    }
}
