use crate::{GameConfig, Minefield};

pub use random::*;

mod random;

/// Strategy seam for seeding a board with mines.
pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield;
}
