use super::board::Board;
use super::types::{Cell, Side, Verdict, WINNING_LINES, WinLine};

pub fn evaluate(board: &Board) -> Verdict {
    if let Some((side, _)) = find_winning_line(board) {
        return Verdict::Win(side);
    }

    if board.is_full() {
        Verdict::Draw
    } else {
        Verdict::InProgress
    }
}

pub fn evaluate_with_line(board: &Board) -> Option<WinLine> {
    find_winning_line(board).map(|(_, line)| line)
}

/// First line in scan order holding three equal marks. Does not assume the
/// board was reached legally.
fn find_winning_line(board: &Board) -> Option<(Side, WinLine)> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        match cells[a] {
            Cell::Mark(side) if cells[b] == cells[a] && cells[c] == cells[a] => Some((side, *line)),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from_str;
    use crate::games::tictactoe::types::CELL_COUNT;

    fn decode(mut code: usize) -> Board {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for cell in cells.iter_mut() {
            *cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::Mark(Side::First),
                _ => Cell::Mark(Side::Second),
            };
            code /= 3;
        }
        Board::from_cells(cells)
    }

    fn has_line(board: &Board, side: Side) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.cells().iter().all(|&i| board.cells()[i] == Cell::Mark(side)))
    }

    #[test]
    fn test_all_configurations_match_brute_force() {
        for code in 0..3usize.pow(9) {
            let board = decode(code);
            let first = has_line(&board, Side::First);
            let second = has_line(&board, Side::Second);
            let verdict = evaluate(&board);

            match verdict {
                Verdict::Win(side) => assert!(has_line(&board, side), "{board}"),
                Verdict::Draw => {
                    assert!(board.is_full() && !first && !second, "{board}")
                }
                Verdict::InProgress => {
                    assert!(!board.is_full() && !first && !second, "{board}")
                }
            }

            if first || second {
                assert!(matches!(verdict, Verdict::Win(_)), "{board}");
            }
        }
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Unreachable grid with two winners; the top row is scanned first.
        let board = board_from_str("OOO XXX ...");
        assert_eq!(evaluate(&board), Verdict::Win(Side::Second));
        assert_eq!(evaluate_with_line(&board), Some(WinLine([0, 1, 2])));
    }

    #[test]
    fn test_diagonal_win() {
        let board = board_from_str("..X .XO XOO");
        assert_eq!(evaluate(&board), Verdict::Win(Side::First));
        assert_eq!(evaluate_with_line(&board), Some(WinLine([2, 4, 6])));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from_str("XOX XOO OXX");
        assert_eq!(evaluate(&board), Verdict::Draw);
        assert_eq!(evaluate_with_line(&board), None);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board = board_from_str("XXX OOX XOO");
        assert_eq!(evaluate(&board), Verdict::Win(Side::First));
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Verdict::InProgress);
    }
}
