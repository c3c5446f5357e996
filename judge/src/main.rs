use std::path::PathBuf;

use clap::Parser;
use judge::{load_start_position, replay, Config, GameResult, Transcript};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to a JSON file with the list of move requests
    transcript: PathBuf,

    /// Path to a JSON snapshot to start from instead of the standard position
    #[arg(long)]
    start: Option<PathBuf>,

    /// Stop replaying as soon as one move is rejected
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// Print the board after every accepted move
    #[arg(long, default_value_t = false)]
    show_board: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut game = load_start_position(args.start.as_deref())?;
    let transcript = Transcript::load(&args.transcript)?;
    info!(num_moves = transcript.requests.len(), "Loaded transcript");

    let config = Config {
        stop_on_illegal_move: args.stop_on_illegal_move,
        show_board: args.show_board,
    };
    let outcome = replay(&mut game, &transcript.requests, &config);

    for err in &outcome.illegal_moves {
        let mut err_dyn = err as &dyn std::error::Error;
        while let Some(src_err) = err_dyn.source() {
            info!("{}", err_dyn);
            err_dyn = src_err;
        }
        info!("{}", err_dyn);
    }

    let result = match outcome.result {
        GameResult::WonByPlayer { player } => format!("{} has won", player),
        GameResult::Unfinished => format!("{} to move", game.current_player()),
        GameResult::StoppedOnIllegalMove => String::from("stopped on an illegal move"),
    };
    eprintln!(
        "End result:\n- {} moves played\n- {} illegal moves\n- {}",
        outcome.moves_played,
        outcome.illegal_moves.len(),
        result
    );

    println!("{}", serde_json::to_string_pretty(&game.serialize())?);

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
