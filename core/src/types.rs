use serde::{Deserialize, Serialize};

/// Single coordinate axis, used for category and clue positions.
pub type Coord = u8;

/// Position of one cell on the board.
///
/// Carried as the payload of click events, so the cell never has to be
/// recovered from element ids or other string encodings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    /// Column, index into the board's categories.
    pub category: Coord,
    /// Row, index into that category's clues.
    pub clue: Coord,
}

impl CellCoord {
    pub const fn new(category: Coord, clue: Coord) -> Self {
        Self { category, clue }
    }
}
