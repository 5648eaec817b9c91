mod board;
mod bot_controller;
mod game_state;
mod messages;
mod minimax;
mod session;
mod types;
mod win_detector;

pub use board::{Board, legal_moves};
pub use bot_controller::{
    BotInput, STRATEGIC_PROBABILITY, calculate_heuristic_move, calculate_move,
    calculate_random_move, find_winning_move,
};
pub use game_state::{GameState, MoveOutcome, new_game};
pub use messages::{outcome_message, turn_message};
pub use minimax::{SearchResult, calculate_minimax_move, search};
pub use session::{DEFAULT_BOT_MOVE_DELAY, GameSession, ScheduledMove};
pub use types::{
    CELL_COUNT, CENTER, CORNERS, Cell, Difficulty, GameMode, Side, Verdict, WINNING_LINES,
    WinLine,
};
pub use win_detector::{evaluate, evaluate_with_line};
