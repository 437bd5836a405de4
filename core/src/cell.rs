use serde::{Deserialize, Serialize};

/// Player-visible state of one grid cell. A revealed cell carries its
/// adjacent-mine count; mines themselves never reach the revealed state.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellState {
    Covered,
    Revealed(u8),
    Flagged,
}

impl CellState {
    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Covered)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Covered
    }
}

/// Render-facing projection of a cell. `Mine` only shows up for covered
/// mine cells when the caller asks for full disclosure; flagged cells keep
/// their flag either way.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CellView {
    Covered,
    Flagged,
    Revealed(u8),
    Mine,
}
