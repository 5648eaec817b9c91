use crate::error::{GameError, Result};
use super::board::{Board, legal_moves};
use super::bot_controller::BotInput;
use super::types::{Side, Verdict};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the searched board is already terminal.
    pub best_index: Option<usize>,
    pub score: i32,
}

pub fn calculate_minimax_move(input: &BotInput) -> Result<usize> {
    let available_moves = legal_moves(&input.board);
    if available_moves.is_empty() {
        return Err(GameError::NoLegalMove);
    }

    search(&input.board, input.side_to_move)
        .best_index
        .or_else(|| available_moves.first().copied())
        .ok_or(GameError::NoLegalMove)
}

/// Full-depth search with `side_to_move` as the maximising side. Explores a
/// private copy, so the caller's board is never touched.
pub fn search(board: &Board, side_to_move: Side) -> SearchResult {
    let mut scratch = *board;
    search_node(&mut scratch, side_to_move, side_to_move)
}

fn search_node(board: &mut Board, to_move: Side, bot_side: Side) -> SearchResult {
    let terminal_score = match evaluate(board) {
        Verdict::Win(side) if side == bot_side => Some(WIN_SCORE),
        Verdict::Win(_) => Some(LOSS_SCORE),
        Verdict::Draw => Some(DRAW_SCORE),
        Verdict::InProgress => None,
    };
    if let Some(score) = terminal_score {
        return SearchResult { best_index: None, score };
    }

    let maximizing = to_move == bot_side;
    let mut best = SearchResult {
        best_index: None,
        score: if maximizing { i32::MIN } else { i32::MAX },
    };

    for index in legal_moves(board) {
        board.place(index, to_move);
        let score = search_node(board, to_move.opponent(), bot_side).score;
        board.clear(index);

        // Strict comparison keeps the lowest index among equal scores.
        let improves = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if improves {
            best = SearchResult {
                best_index: Some(index),
                score,
            };
        }
    }

    best
}
