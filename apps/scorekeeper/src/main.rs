//! Scorekeeper CLI - keep score for a game of Up and Down the River.
//!
//! Each invocation loads the game from the configured store, applies one
//! command and saves the result, so a game can be played across many calls.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use scorekeeper::domain::input::{parse_entries, EntryKind};
use scorekeeper::domain::rules::RoundPattern;
use scorekeeper::domain::scoring::ScoringRuleType;
use scorekeeper::domain::snapshot::Phase;
use scorekeeper::domain::state::Game;
use scorekeeper::domain::trump::Trump;
use scorekeeper::telemetry::init_tracing;
use scorekeeper::{
    AppError, FileBackend, GameFlowService, GameSession, GameSetup, GameStore, GamesService,
    KvGameStore, LogFormat, MaxCardsSetting, MemoryBackend, StorageConfig, StoreKind,
    UuidIdGenerator,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Score keeper for Up and Down the River")]
struct Args {
    /// Storage backend (overrides SCOREKEEPER_STORE)
    #[arg(long, global = true)]
    store: Option<StoreArg>,

    /// Directory for saved games (overrides SCOREKEEPER_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log output format (overrides SCOREKEEPER_LOG_FORMAT)
    #[arg(long, global = true)]
    log_format: Option<LogFormatArg>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a new game and make it the current game
    New {
        /// Player name, in seating order (3 to 7)
        #[arg(long = "player", required = true)]
        players: Vec<String>,

        #[arg(long, default_value = "standard")]
        scoring: ScoringArg,

        /// Maximum cards per player
        #[arg(long, conflicts_with = "total_rounds")]
        max_cards: Option<u8>,

        /// Desired number of rounds
        #[arg(long)]
        total_rounds: Option<u16>,

        #[arg(long, default_value = "down-up")]
        pattern: PatternArg,
    },
    /// Show a game; the current game when no id is given
    Show { game_id: Option<String> },
    /// Choose trump for the current round (hearts, diamonds, clubs, spades, no-trump)
    Trump { game_id: String, suit: String },
    /// Enter bids in seating order, e.g. "2,1,1"
    Bid { game_id: String, bids: String },
    /// Enter tricks taken in seating order, e.g. "2,1,7"
    Tricks { game_id: String, tricks: String },
    /// List saved games, most recent first
    History,
    /// Delete a game from history
    Delete { game_id: String },
    /// Delete every saved game
    Clear,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StoreArg {
    File,
    Memory,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScoringArg {
    Standard,
    Simple,
    Common,
    Penalty,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PatternArg {
    DownUp,
    UpDown,
}

impl From<StoreArg> for StoreKind {
    fn from(arg: StoreArg) -> Self {
        match arg {
            StoreArg::File => StoreKind::File,
            StoreArg::Memory => StoreKind::Memory,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Pretty => LogFormat::Pretty,
        }
    }
}

impl From<ScoringArg> for ScoringRuleType {
    fn from(arg: ScoringArg) -> Self {
        match arg {
            ScoringArg::Standard => ScoringRuleType::Standard,
            ScoringArg::Simple => ScoringRuleType::Simple,
            ScoringArg::Common => ScoringRuleType::Common,
            ScoringArg::Penalty => ScoringRuleType::Penalty,
        }
    }
}

impl From<PatternArg> for RoundPattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::DownUp => RoundPattern::DownUp,
            PatternArg::UpDown => RoundPattern::UpDown,
        }
    }
}

type Store = Arc<dyn GameStore>;

fn main() -> ExitCode {
    let args = Args::parse();

    let log_format = match args.log_format {
        Some(arg) => Ok(LogFormat::from(arg)),
        None => LogFormat::from_env(),
    };
    let log_format = match log_format {
        Ok(format) => format,
        Err(e) => return fail(&e),
    };
    init_tracing(log_format);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn fail(e: &AppError) -> ExitCode {
    eprintln!("error: {e}");
    ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
}

fn open_store(args: &Args) -> Result<Store, AppError> {
    let mut config = StorageConfig::from_env()?;
    if let Some(store) = args.store {
        config.kind = store.into();
    }
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    debug!(kind = ?config.kind, data_dir = %config.data_dir.display(), "Opening store");

    let store: Store = match config.kind {
        StoreKind::File => Arc::new(KvGameStore::new(FileBackend::new(config.data_dir))),
        StoreKind::Memory => Arc::new(KvGameStore::new(MemoryBackend::new())),
    };
    Ok(store)
}

fn run(args: Args) -> Result<(), AppError> {
    let store = open_store(&args)?;
    let games = GamesService::new(store.clone(), UuidIdGenerator);
    let flow = GameFlowService::new(store);
    let json = args.json;

    match args.command {
        Command::New {
            players,
            scoring,
            max_cards,
            total_rounds,
            pattern,
        } => {
            let setup = GameSetup {
                player_names: players,
                scoring: scoring.into(),
                custom_scoring: None,
                max_cards: match (max_cards, total_rounds) {
                    (Some(cards), _) => MaxCardsSetting::Cards(cards),
                    (None, Some(rounds)) => MaxCardsSetting::Rounds(rounds),
                    (None, None) => MaxCardsSetting::Default,
                },
                round_pattern: pattern.into(),
            };
            let game = games.create_game(&setup)?;
            let session = flow.load(&game.id)?;
            print_session(&session, json)
        }
        Command::Show { game_id } => {
            let session = match game_id {
                Some(id) => flow.load(&id)?,
                None => flow
                    .load_current()
                    .ok_or_else(|| AppError::not_found("No current game".to_string()))?,
            };
            print_session(&session, json)
        }
        Command::Trump { game_id, suit } => {
            let trump: Trump = suit.parse()?;
            let mut session = flow.load(&game_id)?;
            flow.set_trump(&mut session, trump)?;
            print_session(&session, json)
        }
        Command::Bid { game_id, bids } => {
            let bids = parse_entries(&bids, EntryKind::Bids)?;
            let mut session = flow.load(&game_id)?;
            let outcome = flow.submit_bids(&mut session, &bids)?;
            if outcome.hook && !json {
                println!("Note: bids add up to the cards dealt (the hook).");
            }
            print_session(&session, json)
        }
        Command::Tricks { game_id, tricks } => {
            let tricks = parse_entries(&tricks, EntryKind::Tricks)?;
            let mut session = flow.load(&game_id)?;
            flow.submit_tricks(&mut session, &tricks)?;
            print_session(&session, json)
        }
        Command::History => print_history(&games.history(), json),
        Command::Delete { game_id } => {
            games.delete_game(&game_id);
            Ok(())
        }
        Command::Clear => {
            games.clear_all();
            Ok(())
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::internal(e.to_string()))
}

fn print_session(session: &GameSession, json: bool) -> Result<(), AppError> {
    let view = session.snapshot();
    if json {
        println!("{}", to_json(&view)?);
        return Ok(());
    }

    println!("Game {}", view.game_id);
    match view.phase {
        Phase::Complete => match &view.winner {
            Some(winner) => println!("Game over. Winner: {}", winner.name),
            None => println!("Game over. No winner."),
        },
        phase => {
            let trump = view
                .trump
                .map(|t| t.to_string())
                .unwrap_or_else(|| "not chosen".to_string());
            println!(
                "Round {}/{}: {} cards, trump {}, next step {}",
                view.round_no,
                view.max_rounds,
                view.cards_per_player,
                trump,
                phase_label(phase)
            );
        }
    }

    for standing in &view.standings {
        let marker = if standing.is_leader { "*" } else { " " };
        println!(
            "{marker} {:<16} {:>5}",
            standing.player.name, standing.total_score
        );
    }
    Ok(())
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::TrumpSelection => "choose trump",
        Phase::Bidding => "enter bids",
        Phase::TrickEntry => "enter tricks",
        Phase::Complete => "done",
    }
}

fn print_history(history: &[Game], json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", to_json(&history)?);
        return Ok(());
    }
    if history.is_empty() {
        println!("No saved games.");
        return Ok(());
    }
    for game in history {
        let names: Vec<&str> = game.players.iter().map(|p| p.name.as_str()).collect();
        let status = if game.is_complete {
            "complete".to_string()
        } else {
            format!("round {}/{}", game.current_round, game.max_rounds)
        };
        println!("{}  {}  {}", game.id, status, names.join(", "));
    }
    Ok(())
}
