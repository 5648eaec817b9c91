use tokio::io::{AsyncBufReadExt, BufReader};

use tictactoe_engine::config::EngineConfig;
use tictactoe_engine::games::tictactoe::{GameMode, GameSession, outcome_message, turn_message};

const HELP: &str = "Enter a cell 0-8 (row-major), r to restart, q to quit";

pub async fn run_play(config: &EngineConfig, mode: GameMode) -> std::io::Result<()> {
    let mut session = GameSession::new(mode, config.make_rng(), config.bot_move_delay());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);
    print_state(&session).await;

    loop {
        if session.snapshot().await.is_automated_turn() {
            let Some(scheduled) = session.maybe_schedule_automated_move().await else {
                break;
            };
            scheduled.wait().await;
            print_state(&session).await;
            continue;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "q" | "quit" => break,
            "r" | "restart" => session.restart().await,
            input => match input.parse::<usize>() {
                Ok(index) => {
                    if let Err(e) = session.apply_human_move(index).await {
                        println!("{}", e);
                        continue;
                    }
                }
                Err(_) => {
                    println!("{}", HELP);
                    continue;
                }
            },
        }

        print_state(&session).await;
    }

    Ok(())
}

async fn print_state(session: &GameSession) {
    let state = session.snapshot().await;
    println!();
    println!("{}", state.board());

    if let Some(message) = outcome_message(state.verdict(), state.mode()) {
        println!("{} (r to restart, q to quit)", message);
    } else if let Some(message) = turn_message(&state) {
        println!("{}", message);
    }
}
