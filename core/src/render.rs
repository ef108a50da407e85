//! Board rendering as plain data.
//!
//! [`render`] maps a populated board to a [`BoardDisplay`] without touching any
//! UI toolkit; front ends only translate the tree into their own widgets.

use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellDisplay {
    pub coord: CellCoord,
    pub showing: Showing,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardDisplay {
    /// One header per category, in board order.
    pub titles: Vec<String>,
    /// `rows[clue][category]`, one row per clue index.
    pub rows: Vec<Vec<CellDisplay>>,
}

impl BoardDisplay {
    /// Swaps in a freshly rendered cell, leaving the rest of the tree untouched.
    pub fn replace_cell(&mut self, cell: CellDisplay) {
        let coord = cell.coord;
        self.rows[usize::from(coord.clue)][usize::from(coord.category)] = cell;
    }
}

pub fn render_cell(board: &CategoryStore, coord: CellCoord) -> CellDisplay {
    let clue = board.clue(coord);
    CellDisplay {
        coord,
        showing: clue.showing(),
        text: clue.displayed_text().into(),
    }
}

/// Header row plus one body row per clue index.
///
/// Expects a complete board, see [`CategoryStore::is_complete`].
pub fn render(board: &CategoryStore) -> BoardDisplay {
    debug_assert!(board.is_complete(), "rendering a partially populated board");

    let config = board.config();
    let titles = board
        .categories()
        .iter()
        .map(|category| category.title().into())
        .collect();
    let rows = (0..config.clues_per_category)
        .map(|clue| {
            (0..config.categories)
                .map(|category| render_cell(board, CellCoord::new(category, clue)))
                .collect()
        })
        .collect();

    BoardDisplay { titles, rows }
}

/// Click handler: advances the clue and returns only the cell that changed.
pub fn on_cell_activated(board: &mut CategoryStore, coord: CellCoord) -> (RevealOutcome, CellDisplay) {
    let outcome = board.reveal(coord);
    log::trace!("cell {:?}: {:?}", coord, outcome);
    (outcome, render_cell(board, coord))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::full_board;
    use alloc::vec;

    fn math_board() -> CategoryStore {
        let mut board = CategoryStore::new(GameConfig::new(1, 2, 1));
        board
            .append(Category::new(
                "Math",
                vec![Clue::new("2+2", "4"), Clue::new("1+1", "2")],
            ))
            .unwrap();
        board
    }

    #[test]
    fn grid_has_header_and_placeholder_rows() {
        let board = full_board(GameConfig::default());
        let display = render(&board);

        assert_eq!(display.titles.len(), NUM_CATEGORIES);
        assert_eq!(display.titles[0], "cat 0");
        assert_eq!(display.rows.len(), NUM_QUESTIONS_PER_CATEGORY);
        for (y, row) in display.rows.iter().enumerate() {
            assert_eq!(row.len(), NUM_CATEGORIES);
            for (x, cell) in row.iter().enumerate() {
                assert_eq!(cell.coord, CellCoord::new(x as Coord, y as Coord));
                assert_eq!(cell.showing, Showing::Hidden);
                assert_eq!(cell.text, PLACEHOLDER);
            }
        }
    }

    #[test]
    fn rendering_twice_gives_the_same_grid() {
        let mut board = full_board(GameConfig::default());
        board.reveal(CellCoord::new(1, 1));
        assert_eq!(render(&board), render(&board));
    }

    #[test]
    fn clicking_a_cell_shows_question_then_answer() {
        let mut board = math_board();
        let mut display = render(&board);
        let coord = CellCoord::new(0, 0);

        let (outcome, cell) = on_cell_activated(&mut board, coord);
        assert_eq!(outcome, RevealOutcome::ShowedQuestion);
        assert_eq!((cell.showing, cell.text.as_str()), (Showing::Question, "2+2"));
        display.replace_cell(cell);

        let (outcome, cell) = on_cell_activated(&mut board, coord);
        assert_eq!(outcome, RevealOutcome::ShowedAnswer);
        assert_eq!((cell.showing, cell.text.as_str()), (Showing::Answer, "4"));
        display.replace_cell(cell);

        let (outcome, cell) = on_cell_activated(&mut board, coord);
        assert_eq!(outcome, RevealOutcome::NoChange);
        assert_eq!(cell.text, "4");
        display.replace_cell(cell);

        assert_eq!(display, render(&board));
        assert_eq!(display.rows[1][0].text, PLACEHOLDER);
    }
}
