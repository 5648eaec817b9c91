use std::fmt;

use crate::error::{GameError, Result};
use super::types::{CELL_COUNT, Cell, Side};

/// 3x3 grid stored row-major: 0,1,2 / 3,4,5 / 6,7,8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds any grid, reachable or not.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell_at(&self, index: usize) -> Result<Cell> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::OutOfRange { index })
    }

    pub fn with_move(&self, index: usize, side: Side) -> Result<Board> {
        if self.cell_at(index)? != Cell::Empty {
            return Err(GameError::CellOccupied { index });
        }
        let mut next = *self;
        next.cells[index] = Cell::Mark(side);
        Ok(next)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub(crate) fn place(&mut self, index: usize, side: Side) {
        self.cells[index] = Cell::Mark(side);
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in chunk.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Mark(side) => side.symbol(),
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

/// Empty cell indices in ascending order.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let mut cells = [Cell::Empty; CELL_COUNT];
    let symbols: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(symbols.len(), CELL_COUNT, "layout must have 9 cells: {layout}");
    for (index, symbol) in symbols.into_iter().enumerate() {
        cells[index] = match symbol {
            'X' => Cell::Mark(Side::First),
            'O' => Cell::Mark(Side::Second),
            _ => Cell::Empty,
        };
    }
    Board::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
        assert_eq!(legal_moves(&board), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell_at(9), Err(GameError::OutOfRange { index: 9 }));
        assert_eq!(board.cell_at(8), Ok(Cell::Empty));
    }

    #[test]
    fn test_with_move_returns_new_board() {
        let board = Board::new();
        let next = board.with_move(4, Side::First).unwrap();
        assert_eq!(board.cell_at(4), Ok(Cell::Empty));
        assert_eq!(next.cell_at(4), Ok(Cell::Mark(Side::First)));
        assert_eq!(next.occupied_count(), 1);
    }

    #[test]
    fn test_with_move_rejects_occupied_and_out_of_range() {
        let board = board_from_str("X.. ... ...");
        assert_eq!(
            board.with_move(0, Side::Second),
            Err(GameError::CellOccupied { index: 0 })
        );
        assert_eq!(
            board.with_move(12, Side::Second),
            Err(GameError::OutOfRange { index: 12 })
        );
    }

    #[test]
    fn test_legal_moves_ascending() {
        let board = board_from_str("X.O .X. O..");
        assert_eq!(legal_moves(&board), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_full_board() {
        let board = board_from_str("XOX OXO OXO");
        assert!(board.is_full());
        assert!(legal_moves(&board).is_empty());
    }

    #[test]
    fn test_display_grid() {
        let board = board_from_str("X.O .X. ..O");
        assert_eq!(board.to_string(), "X . O\n. X .\n. . O");
    }
}
