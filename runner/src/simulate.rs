use std::fmt;

use tictactoe_engine::Result;
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{
    BotInput, Difficulty, GameMode, GameState, Side, Verdict, calculate_move,
};
use tictactoe_engine::log;

/// Results from the computer's point of view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSummary {
    pub games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: {} computer wins, {} draws, {} computer losses",
            self.games, self.wins, self.draws, self.losses
        )
    }
}

/// Plays `games` matches where the scripted opponent (First) uses `opponent`
/// and the computer (Second) uses `difficulty`.
pub fn simulate(
    games: u32,
    difficulty: Difficulty,
    opponent: Difficulty,
    rng: &mut SessionRng,
) -> Result<SimulationSummary> {
    let mut summary = SimulationSummary::default();

    for game in 0..games {
        let verdict = play_one(difficulty, opponent, rng)?;
        summary.games += 1;
        match verdict {
            Verdict::Win(Side::Second) => summary.wins += 1,
            Verdict::Win(Side::First) => summary.losses += 1,
            Verdict::Draw | Verdict::InProgress => summary.draws += 1,
        }
        log!("Game {} finished: {:?}", game + 1, verdict);
    }

    Ok(summary)
}

fn play_one(difficulty: Difficulty, opponent: Difficulty, rng: &mut SessionRng) -> Result<Verdict> {
    let mut state = GameState::new(GameMode::VsComputer(difficulty));

    while !state.is_locked() {
        if state.is_automated_turn() {
            state.trigger_automated_move(rng)?;
        } else {
            let input = BotInput::new(*state.board(), state.side_to_move());
            let index = calculate_move(opponent, &input, rng)?;
            state.apply_human_move(index)?;
        }
    }

    Ok(state.verdict())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_against_hard_always_draws() {
        let mut rng = SessionRng::new(1);
        let summary = simulate(5, Difficulty::Hard, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(
            summary,
            SimulationSummary {
                games: 5,
                wins: 0,
                draws: 5,
                losses: 0
            }
        );
    }

    #[test]
    fn test_hard_never_loses_to_random() {
        let mut rng = SessionRng::new(2024);
        let summary = simulate(50, Difficulty::Hard, Difficulty::Easy, &mut rng).unwrap();
        assert_eq!(summary.games, 50);
        assert_eq!(summary.losses, 0);
        assert_eq!(summary.wins + summary.draws, 50);
    }

    #[test]
    fn test_summary_display() {
        let summary = SimulationSummary {
            games: 3,
            wins: 1,
            draws: 1,
            losses: 1,
        };
        assert_eq!(
            summary.to_string(),
            "3 games: 1 computer wins, 1 draws, 1 computer losses"
        );
    }
}
