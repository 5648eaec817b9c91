use super::game_state::GameState;
use super::types::{GameMode, Side, Verdict};

fn player_number(side: Side) -> u8 {
    match side {
        Side::First => 1,
        Side::Second => 2,
    }
}

pub fn outcome_message(verdict: Verdict, mode: GameMode) -> Option<String> {
    match (verdict, mode) {
        (Verdict::InProgress, _) => None,
        (Verdict::Draw, _) => Some("It's a draw!".to_string()),
        (Verdict::Win(side), GameMode::TwoPlayer) => {
            Some(format!("Player {} wins!", player_number(side)))
        }
        (Verdict::Win(side), GameMode::VsComputer(_)) => {
            if mode.automated_side() == Some(side) {
                Some("Computer wins!".to_string())
            } else {
                Some("You win!".to_string())
            }
        }
    }
}

pub fn turn_message(state: &GameState) -> Option<String> {
    if state.is_locked() {
        return None;
    }

    let side = state.side_to_move();
    match state.mode() {
        GameMode::TwoPlayer => Some(format!("Player {}'s turn", player_number(side))),
        GameMode::VsComputer(_) if state.is_automated_turn() => {
            Some("Computer thinking...".to_string())
        }
        GameMode::VsComputer(_) => Some("Your turn".to_string()),
    }
}
