use ndarray::Array2;

use super::*;
use crate::AsIndex;

/// Uniform placement by rejection sampling: draw random positions and skip
/// the ones already mined until the requested count is reached. Termination
/// relies on the config guaranteeing at least one free cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield {
        use rand::prelude::*;

        let (rows, cols) = config.size;
        let mut mines: Array2<bool> = Array2::default(config.size.as_index());
        let mut placed = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        while placed < config.mines {
            let pos = (rng.random_range(0..rows), rng.random_range(0..cols));
            let cell = &mut mines[pos.as_index()];
            if !*cell {
                *cell = true;
                placed += 1;
            }
        }

        log::debug!("placed {} mines on a {}x{} board", placed, rows, cols);
        Minefield::from_mask(mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    #[test]
    fn places_the_exact_mine_count() {
        let config = GameConfig::new((9, 9), 10).unwrap();
        let field = RandomMinefieldGenerator::new(42).generate(config);
        assert_eq!(field.mine_count(), 10);
        assert_eq!(field.config(), config);
    }

    #[test]
    fn same_seed_generates_the_same_field() {
        let config = GameConfig::new((9, 9), 10).unwrap();
        let first = RandomMinefieldGenerator::new(7).generate(config);
        let second = RandomMinefieldGenerator::new(7).generate(config);
        assert_eq!(first, second);
    }

    #[test]
    fn handles_a_nearly_full_board() {
        let config = GameConfig::new((2, 2), 3).unwrap();
        let field = RandomMinefieldGenerator::new(3).generate(config);
        assert_eq!(field.mine_count(), 3);
        assert_eq!(field.safe_cells(), 1);
    }

    #[test]
    fn adjacency_counts_match_a_brute_force_scan() {
        let config = GameConfig::new((9, 9), 10).unwrap();
        let field = RandomMinefieldGenerator::new(1234).generate(config);
        let (rows, cols) = field.size();

        for row in 0..rows {
            for col in 0..cols {
                if field.contains_mine((row, col)) {
                    continue;
                }
                let mut expected: u8 = 0;
                for d_row in -1i32..=1 {
                    for d_col in -1i32..=1 {
                        if d_row == 0 && d_col == 0 {
                            continue;
                        }
                        let n_row = i32::from(row) + d_row;
                        let n_col = i32::from(col) + d_col;
                        if n_row < 0
                            || n_col < 0
                            || n_row >= i32::from(rows)
                            || n_col >= i32::from(cols)
                        {
                            continue;
                        }
                        if field.contains_mine((n_row as Coord, n_col as Coord)) {
                            expected += 1;
                        }
                    }
                }
                assert_eq!(field.adjacent_mines((row, col)), expected);
            }
        }
    }
}
