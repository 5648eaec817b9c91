use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::{AbortHandle, JoinHandle};

use crate::error::Result;
use crate::games::SessionRng;
use crate::log;
use super::game_state::{GameState, MoveOutcome};
use super::types::{Difficulty, GameMode};

pub const DEFAULT_BOT_MOVE_DELAY: Duration = Duration::from_millis(500);

/// Handle to an automated move waiting for its delay to elapse.
pub struct ScheduledMove {
    handle: JoinHandle<Option<MoveOutcome>>,
    cancelled: Arc<AtomicBool>,
}

impl ScheduledMove {
    /// The owning session stops counting the move as pending right away,
    /// before the runtime has processed the abort.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// `None` if the move was cancelled, went stale or was rejected.
    pub async fn wait(self) -> Option<MoveOutcome> {
        self.handle.await.ok().flatten()
    }
}

struct PendingMove {
    abort: AbortHandle,
    cancelled: Arc<AtomicBool>,
}

impl PendingMove {
    fn is_live(&self) -> bool {
        !self.cancelled.load(Ordering::Acquire) && !self.abort.is_finished()
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.abort.abort();
    }
}

/// Owns the live game and paces the computer's replies.
pub struct GameSession {
    pub game_state: Arc<Mutex<GameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    bot_move_delay: Duration,
    pending: Option<PendingMove>,
}

impl GameSession {
    pub fn new(mode: GameMode, rng: SessionRng, bot_move_delay: Duration) -> Self {
        log!("New {} session, seed {}", mode, rng.seed());
        Self {
            game_state: Arc::new(Mutex::new(GameState::new(mode))),
            rng: Arc::new(Mutex::new(rng)),
            bot_move_delay,
            pending: None,
        }
    }

    pub fn bot_move_delay(&self) -> Duration {
        self.bot_move_delay
    }

    pub async fn snapshot(&self) -> GameState {
        self.game_state.lock().await.clone()
    }

    pub fn has_pending_move(&self) -> bool {
        self.pending.as_ref().is_some_and(PendingMove::is_live)
    }

    pub async fn apply_human_move(&self, index: usize) -> Result<MoveOutcome> {
        let mut state = self.game_state.lock().await;
        let result = state.apply_human_move(index);
        if let Err(e) = &result {
            log!("Rejected move at cell {}: {}", index, e);
        }
        result
    }

    /// Schedules the computer's reply if it is its turn and nothing is pending.
    /// The spawned task re-checks the reset epoch when it fires, so a move
    /// scheduled before a restart never lands on the new board.
    pub async fn maybe_schedule_automated_move(&mut self) -> Option<ScheduledMove> {
        if self.has_pending_move() {
            return None;
        }

        let (epoch, move_count) = {
            let state = self.game_state.lock().await;
            if !state.is_automated_turn() {
                return None;
            }
            (state.epoch(), state.move_count())
        };

        let game_state = Arc::clone(&self.game_state);
        let rng = Arc::clone(&self.rng);
        let delay = self.bot_move_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut state = game_state.lock().await;
            if state.epoch() != epoch || state.move_count() != move_count {
                log!("Dropping stale automated move (epoch {})", epoch);
                return None;
            }

            let mut rng = rng.lock().await;
            match state.trigger_automated_move(&mut rng) {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    log!("Automated move failed: {}", e);
                    None
                }
            }
        });

        let cancelled = Arc::new(AtomicBool::new(false));
        self.pending = Some(PendingMove {
            abort: handle.abort_handle(),
            cancelled: Arc::clone(&cancelled),
        });
        Some(ScheduledMove { handle, cancelled })
    }

    pub async fn restart(&mut self) {
        self.cancel_scheduled();
        self.game_state.lock().await.restart();
    }

    pub async fn change_mode(&mut self, mode: GameMode) {
        self.cancel_scheduled();
        self.game_state.lock().await.change_mode(mode);
    }

    pub async fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.cancel_scheduled();
        self.game_state.lock().await.change_difficulty(difficulty);
    }

    /// Drops the pending automated move, if any, without touching the game.
    pub fn cancel_scheduled(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}
