use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

use crate::{AsIndex, CellCount, CellState, CellView, Coord, GameConfig, Minefield, Pos};

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_final(self) -> bool {
        match self {
            Self::Playing => false,
            Self::Won => true,
            Self::Lost => true,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Outcome of a reveal. Winning is not reported here; callers poll
/// [`Board::check_win`] after every move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    Continue,
    Loss,
}

impl RevealOutcome {
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Loss)
    }
}

/// Outcome of toggling a flag
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Toggled,
}

/// One playthrough: the hidden minefield plus the player-facing grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    minefield: Minefield,
    grid: Array2<CellState>,
    revealed_count: CellCount,
    state: GameState,
}

impl Board {
    pub fn new(minefield: Minefield) -> Self {
        let size = minefield.size();
        Self {
            minefield,
            grid: Array2::default(size.as_index()),
            revealed_count: 0,
            state: Default::default(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.minefield.config()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn size(&self) -> Pos {
        self.minefield.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.minefield.mine_count()
    }

    pub fn cell_state(&self, pos: Pos) -> CellState {
        self.grid[pos.as_index()]
    }

    /// Reveal a covered cell. Out-of-bounds positions, non-covered cells and
    /// finished games are silently ignored.
    pub fn reveal(&mut self, pos: Pos) -> RevealOutcome {
        if self.state.is_final() || !self.minefield.in_bounds(pos) {
            return RevealOutcome::Continue;
        }
        if !self.grid[pos.as_index()].is_covered() {
            return RevealOutcome::Continue;
        }
        self.reveal_covered(pos)
    }

    /// `pos` must be in bounds and covered. The mine cell itself is left
    /// untouched on a loss; disclosure happens at render time.
    fn reveal_covered(&mut self, pos: Pos) -> RevealOutcome {
        if self.minefield[pos] {
            self.state = GameState::Lost;
            log::debug!("mine hit at {:?}", pos);
            return RevealOutcome::Loss;
        }

        let count = self.minefield.adjacent_mines(pos);
        self.grid[pos.as_index()] = CellState::Revealed(count);
        self.revealed_count += 1;
        log::debug!("revealed {:?}, mine count: {}", pos, count);

        if count == 0 {
            self.flood_fill(pos);
        }

        if self.revealed_count == self.minefield.safe_cells() {
            self.state = GameState::Won;
            log::debug!("all safe cells revealed");
        }
        RevealOutcome::Continue
    }

    /// Work-list cascade from a just-revealed zero-count cell. Only covered
    /// cells enter the list, and the list only grows from cells that are
    /// themselves zero-count; a cell bordering a mine has a non-zero count,
    /// so the cascade can never pop a mine.
    fn flood_fill(&mut self, start: Pos) {
        let mut visited = HashSet::from([start]);
        let mut to_visit: VecDeque<_> = self
            .minefield
            .iter_neighbors(start)
            .filter(|&pos| self.grid[pos.as_index()].is_covered())
            .collect();
        log::trace!(
            "flood fill from {:?}, initial neighbors: {:?}",
            start,
            to_visit
        );

        while let Some(pos) = to_visit.pop_front() {
            if !visited.insert(pos) {
                continue;
            }

            // flagged or already revealed cells stay as they are
            if !self.grid[pos.as_index()].is_covered() {
                continue;
            }

            let count = self.minefield.adjacent_mines(pos);
            self.grid[pos.as_index()] = CellState::Revealed(count);
            self.revealed_count += 1;
            log::trace!("flood revealed {:?}, mine count: {}", pos, count);

            if count == 0 {
                to_visit.extend(
                    self.minefield
                        .iter_neighbors(pos)
                        .filter(|&neighbor| self.grid[neighbor.as_index()].is_covered())
                        .filter(|neighbor| !visited.contains(neighbor)),
                );
            }
        }
    }

    /// True iff every non-mine cell has been revealed. Pure query.
    pub fn check_win(&self) -> bool {
        self.grid.indexed_iter().all(|((row, col), cell)| {
            matches!(cell, CellState::Revealed(_)) || self.minefield[(row as Coord, col as Coord)]
        })
    }

    /// Toggle a flag on a covered cell. Like [`Board::reveal`], anything
    /// else is silently ignored.
    pub fn toggle_flag(&mut self, pos: Pos) -> FlagOutcome {
        if self.state.is_final() || !self.minefield.in_bounds(pos) {
            return FlagOutcome::NoChange;
        }

        match self.grid[pos.as_index()] {
            CellState::Covered => {
                self.grid[pos.as_index()] = CellState::Flagged;
                FlagOutcome::Toggled
            }
            CellState::Flagged => {
                self.grid[pos.as_index()] = CellState::Covered;
                FlagOutcome::Toggled
            }
            CellState::Revealed(_) => FlagOutcome::NoChange,
        }
    }

    /// Render projection of a single cell. With `disclose_mines` set,
    /// covered mine cells show up as [`CellView::Mine`].
    pub fn cell_view(&self, pos: Pos, disclose_mines: bool) -> CellView {
        match self.grid[pos.as_index()] {
            CellState::Revealed(count) => CellView::Revealed(count),
            CellState::Flagged => CellView::Flagged,
            CellState::Covered if disclose_mines && self.minefield[pos] => CellView::Mine,
            CellState::Covered => CellView::Covered,
        }
    }

    /// Whole-board snapshot for rendering. `view(true)` discloses the full
    /// board once the game ends; the board itself is never mutated.
    pub fn view(&self, disclose_mines: bool) -> Array2<CellView> {
        let (rows, cols) = self.size();
        Array2::from_shape_fn((rows as usize, cols as usize), |(row, col)| {
            self.cell_view((row as Coord, col as Coord), disclose_mines)
        })
    }
}
