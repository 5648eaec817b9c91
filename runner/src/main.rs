mod play;
mod simulate;

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::config::{ConfigManager, EngineConfig, FileContentConfigProvider};
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{Difficulty, GameMode};
use tictactoe_engine::{log, logger};

const CONFIG_FILE: &str = "tictactoe_config.yaml";

#[derive(Parser)]
#[command(name = "tictactoe_runner")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// YAML engine config; defaults apply when the file does not exist.
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play in the terminal against a friend or the computer.
    Play {
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        #[arg(long, value_enum)]
        difficulty: Option<DifficultyArg>,
    },
    /// Pit the computer against a scripted opponent and report the results.
    Simulate {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long, value_enum, default_value = "hard")]
        difficulty: DifficultyArg,
        #[arg(long, value_enum, default_value = "easy")]
        opponent: DifficultyArg,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    TwoPlayer,
    VsComputer,
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

fn resolve_mode(
    config: &EngineConfig,
    mode: Option<ModeArg>,
    difficulty: Option<DifficultyArg>,
) -> GameMode {
    let difficulty = difficulty
        .map(Difficulty::from)
        .unwrap_or(config.default_difficulty);
    match mode {
        Some(ModeArg::TwoPlayer) => GameMode::TwoPlayer,
        Some(ModeArg::VsComputer) => GameMode::VsComputer(difficulty),
        None => match config.game_mode() {
            GameMode::VsComputer(_) => GameMode::VsComputer(difficulty),
            GameMode::TwoPlayer => GameMode::TwoPlayer,
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<FileContentConfigProvider, EngineConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let config = config_manager.get_config()?;

    match args.command {
        Command::Play { mode, difficulty } => {
            let mode = resolve_mode(&config, mode, difficulty);
            log!("Starting {} game", mode);
            play::run_play(&config, mode).await?;
        }
        Command::Simulate {
            games,
            difficulty,
            opponent,
            seed,
        } => {
            let mut rng = match seed.or(config.seed) {
                Some(seed) => SessionRng::new(seed),
                None => SessionRng::from_random(),
            };
            log!("Simulating {} games with seed {}", games, rng.seed());
            let summary =
                simulate::simulate(games, difficulty.into(), opponent.into(), &mut rng)?;
            println!("{}", summary);
        }
    }

    Ok(())
}
