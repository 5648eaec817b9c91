use crate::error::{GameError, Result};
use crate::games::SessionRng;
use super::board::{Board, legal_moves};
use super::minimax::calculate_minimax_move;
use super::types::{CENTER, CORNERS, Cell, Difficulty, Side, WINNING_LINES};

/// Chance that the medium bot plays its strategic policy instead of a random cell.
pub const STRATEGIC_PROBABILITY: f64 = 0.7;

pub struct BotInput {
    pub board: Board,
    pub side_to_move: Side,
}

impl BotInput {
    pub fn new(board: Board, side_to_move: Side) -> Self {
        Self { board, side_to_move }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(&input.board, rng),
        Difficulty::Medium => calculate_heuristic_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<usize> {
    let available_moves = legal_moves(board);
    rng.pick(&available_moves).ok_or(GameError::NoLegalMove)
}

pub fn calculate_heuristic_move(input: &BotInput, rng: &mut SessionRng) -> Result<usize> {
    if legal_moves(&input.board).is_empty() {
        return Err(GameError::NoLegalMove);
    }

    if rng.chance(STRATEGIC_PROBABILITY) {
        return strategic_move(input, rng);
    }

    calculate_random_move(&input.board, rng)
}

/// Win, block, centre, corner, anything: the first rule that applies decides.
pub(crate) fn strategic_move(input: &BotInput, rng: &mut SessionRng) -> Result<usize> {
    let board = &input.board;
    let side = input.side_to_move;

    if let Some(index) = find_winning_move(board, side) {
        return Ok(index);
    }

    if let Some(index) = find_winning_move(board, side.opponent()) {
        return Ok(index);
    }

    if board.cells()[CENTER].is_empty() {
        return Ok(CENTER);
    }

    let open_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&index| board.cells()[index].is_empty())
        .collect();
    if let Some(index) = rng.pick(&open_corners) {
        return Ok(index);
    }

    calculate_random_move(board, rng)
}

/// Empty cell of the first line where `side` already holds the other two.
pub fn find_winning_move(board: &Board, side: Side) -> Option<usize> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|line| {
        let line_cells = line.cells();
        let mut empty = None;
        let mut owned = 0;
        for &index in &line_cells {
            match cells[index] {
                Cell::Empty if empty.is_none() => empty = Some(index),
                Cell::Mark(mark) if mark == side => owned += 1,
                _ => return None,
            }
        }
        if owned == 2 { empty } else { None }
    })
}
