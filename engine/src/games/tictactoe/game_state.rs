use crate::error::{GameError, Result};
use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::types::{Difficulty, GameMode, Side, Verdict, WinLine};
use super::win_detector::{evaluate, evaluate_with_line};

/// Result of one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub index: usize,
    pub side: Side,
    pub verdict: Verdict,
}

/// Canonical match state. Every mutation goes through one applied move or a
/// restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    move_count: usize,
    verdict: Verdict,
    locked: bool,
    mode: GameMode,
    difficulty: Difficulty,
    last_move: Option<usize>,
    winning_line: Option<WinLine>,
    epoch: u64,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            move_count: 0,
            verdict: Verdict::InProgress,
            locked: false,
            mode,
            difficulty: mode.difficulty().unwrap_or_default(),
            last_move: None,
            winning_line: None,
            epoch: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Last selected computer difficulty. Survives two-player games so a
    /// switch back to `VsComputer` can reuse it.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Number of resets since creation.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn side_to_move(&self) -> Side {
        Side::for_move_count(self.move_count)
    }

    pub fn is_automated_turn(&self) -> bool {
        !self.locked && self.mode.automated_side() == Some(self.side_to_move())
    }

    pub fn apply_human_move(&mut self, index: usize) -> Result<MoveOutcome> {
        if self.locked {
            return Err(GameError::GameOver);
        }

        let side = self.side_to_move();
        if self.mode.automated_side() == Some(side) {
            return Err(GameError::WrongTurn { side: side.opponent() });
        }

        self.apply_move(index, side)
    }

    pub fn trigger_automated_move(&mut self, rng: &mut SessionRng) -> Result<MoveOutcome> {
        if self.locked {
            return Err(GameError::GameOver);
        }

        let GameMode::VsComputer(difficulty) = self.mode else {
            return Err(GameError::NotAutomatedTurn);
        };
        let side = self.side_to_move();
        if self.mode.automated_side() != Some(side) {
            return Err(GameError::NotAutomatedTurn);
        }

        let input = BotInput::new(self.board, side);
        let index = calculate_move(difficulty, &input, rng);
        debug_assert!(
            index.is_ok(),
            "strategy found no move on an unlocked board:\n{}",
            self.board
        );
        let index = index?;

        log!("Computer ({}) plays {} at cell {}", difficulty, side, index);
        self.apply_move(index, side)
    }

    pub fn restart(&mut self) {
        let (mode, difficulty) = (self.mode, self.difficulty);
        let epoch = self.epoch + 1;
        *self = Self::new(mode);
        self.difficulty = difficulty;
        self.epoch = epoch;
    }

    pub fn change_mode(&mut self, mode: GameMode) {
        if let Some(difficulty) = mode.difficulty() {
            self.difficulty = difficulty;
        }
        self.mode = mode;
        self.restart();
    }

    /// In two-player games the choice is only remembered for the next
    /// computer game.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if let GameMode::VsComputer(_) = self.mode {
            self.mode = GameMode::VsComputer(difficulty);
        }
        self.restart();
    }

    fn apply_move(&mut self, index: usize, side: Side) -> Result<MoveOutcome> {
        self.board = self.board.with_move(index, side)?;
        self.move_count += 1;
        self.last_move = Some(index);
        self.verdict = evaluate(&self.board);

        if self.verdict.is_terminal() {
            self.locked = true;
            self.winning_line = evaluate_with_line(&self.board);
            log!("Game over after {} moves: {:?}", self.move_count, self.verdict);
        }

        Ok(MoveOutcome {
            index,
            side,
            verdict: self.verdict,
        })
    }
}

pub fn new_game(mode: GameMode) -> GameState {
    GameState::new(mode)
}
