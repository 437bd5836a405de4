use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::ops::Index;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Pos,
    pub mines: CellCount,
}

impl GameConfig {
    /// Validates that the board has at least one cell and that at least one
    /// cell stays free of mines. A mine-free board is legal.
    pub fn new(size: Pos, mines: CellCount) -> Result<Self> {
        let (rows, cols) = size;
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines >= area(rows, cols) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self { size, mines })
    }

    /// The classic 9x9 board with 10 mines.
    pub const fn beginner() -> Self {
        Self {
            size: (9, 9),
            mines: 10,
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// Where the mines are. Kept separate from the player-facing grid so that
/// reveal logic reads mine data through one place only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    mines: Array2<bool>,
    count: CellCount,
}

impl Minefield {
    pub(crate) fn from_mask(mines: Array2<bool>) -> Self {
        let count = mines
            .iter()
            .filter(|&&mined| mined)
            .count()
            .try_into()
            .unwrap();
        Self { mines, count }
    }

    /// Builds a minefield with mines at exactly the given positions. Meant
    /// for fixed layouts; random boards go through a [`MinefieldGenerator`].
    pub fn from_mine_coords(size: Pos, mine_coords: &[Pos]) -> Result<Self> {
        let (rows, cols) = size;
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }

        let mut mines: Array2<bool> = Array2::default(size.as_index());
        for &pos in mine_coords {
            if pos.0 >= rows || pos.1 >= cols {
                return Err(GameError::MineOutOfBounds);
            }
            mines[pos.as_index()] = true;
        }

        Ok(Self::from_mask(mines))
    }

    pub fn config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            mines: self.count,
        }
    }

    pub fn size(&self) -> Pos {
        let dim = self.mines.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.mines.len().try_into().unwrap()
    }

    pub fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.count
    }

    pub fn mine_count(&self) -> CellCount {
        self.count
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        let (rows, cols) = self.size();
        pos.0 < rows && pos.1 < cols
    }

    pub fn contains_mine(&self, pos: Pos) -> bool {
        self[pos]
    }

    /// Number of mines among the Moore neighbors of `pos`.
    pub fn adjacent_mines(&self, pos: Pos) -> u8 {
        self.iter_neighbors(pos)
            .filter(|&neighbor| self[neighbor])
            .count()
            .try_into()
            .unwrap()
    }

    pub fn iter_neighbors(&self, pos: Pos) -> Neighbors {
        Neighbors::new(pos, self.size())
    }
}

impl Index<Pos> for Minefield {
    type Output = bool;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.mines[pos.as_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_boards() {
        assert_eq!(GameConfig::new((0, 5), 1), Err(GameError::EmptyBoard));
        assert_eq!(GameConfig::new((5, 0), 1), Err(GameError::EmptyBoard));
    }

    #[test]
    fn config_requires_at_least_one_safe_cell() {
        assert_eq!(GameConfig::new((3, 3), 9), Err(GameError::TooManyMines));
        assert!(GameConfig::new((3, 3), 8).is_ok());
        assert!(GameConfig::new((3, 3), 0).is_ok());
    }

    #[test]
    fn beginner_preset_is_valid() {
        let config = GameConfig::beginner();
        assert_eq!(GameConfig::new(config.size, config.mines), Ok(config));
        assert_eq!(config.total_cells(), 81);
        assert_eq!(config.safe_cells(), 71);
    }

    #[test]
    fn from_mine_coords_rejects_out_of_bounds_mines() {
        assert_eq!(
            Minefield::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::MineOutOfBounds)
        );
    }

    #[test]
    fn duplicate_mine_coords_collapse() {
        let field = Minefield::from_mine_coords((2, 2), &[(0, 0), (0, 0)]).unwrap();
        assert_eq!(field.mine_count(), 1);
        assert_eq!(field.safe_cells(), 3);
    }

    #[test]
    fn adjacent_mines_counts_the_moore_neighborhood() {
        let field = Minefield::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();
        assert_eq!(field.adjacent_mines((1, 1)), 2);
        assert_eq!(field.adjacent_mines((0, 1)), 1);
        assert_eq!(field.adjacent_mines((0, 2)), 0);
        assert!(field.contains_mine((0, 0)));
        assert!(!field.contains_mine((1, 1)));
    }

    #[test]
    fn in_bounds_matches_the_declared_size() {
        let field = Minefield::from_mine_coords((2, 3), &[]).unwrap();
        assert!(field.in_bounds((1, 2)));
        assert!(!field.in_bounds((2, 0)));
        assert!(!field.in_bounds((0, 3)));
    }
}
