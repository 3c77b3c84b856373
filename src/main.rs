use std::env;
use std::io::Write;
use std::process;

use chess_core::{search_with_outcome, GameBoard, SearchConfig, SearchState, TurnTimer};

const USAGE: &str = "usage: chess_core [--depth N] [--movetime MS] [FEN]";

/// Depth used when neither a depth nor a move time is given.
const ANALYSIS_DEPTH: u32 = 6;

struct Args {
    depth: Option<u32>,
    movetime_ms: Option<u64>,
    fen: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        depth: None,
        movetime_ms: None,
        fen: None,
    };
    let mut fen_parts: Vec<String> = Vec::new();
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--depth" => {
                let value = iter.next().ok_or("--depth needs a value")?;
                let depth = value.parse().map_err(|_| format!("bad depth: {value}"))?;
                args.depth = Some(depth);
            }
            "--movetime" => {
                let value = iter.next().ok_or("--movetime needs a value")?;
                let ms = value.parse().map_err(|_| format!("bad movetime: {value}"))?;
                args.movetime_ms = Some(ms);
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ => fen_parts.push(arg),
        }
    }
    if !fen_parts.is_empty() {
        args.fen = Some(fen_parts.join(" "));
    }
    Ok(args)
}

fn run(args: Args) -> chess_core::Result<()> {
    let mut board = match &args.fen {
        Some(fen) => GameBoard::from_fen(fen)?,
        None => GameBoard::startpos(),
    };
    // A decision may use 1/30 of the remaining time, so hand the searcher
    // thirty times the requested move time.
    let clock = match args.movetime_ms {
        Some(ms) => TurnTimer::new(ms.saturating_mul(SearchConfig::default().time_divisor)),
        None => TurnTimer::unlimited(),
    };
    let depth = match (args.depth, args.movetime_ms) {
        (Some(depth), _) => depth,
        (None, Some(_)) => SearchConfig::default().max_depth,
        (None, None) => ANALYSIS_DEPTH,
    };
    let mut state = SearchState::new(SearchConfig::default().with_max_depth(depth));

    let outcome = search_with_outcome(&mut board, &clock, &mut state)?;
    let score = outcome
        .score
        .map_or_else(|| "none".to_string(), |s| s.to_string());
    println!(
        "bestmove {} score {} depth {} nodes {}",
        outcome.best_move, score, outcome.depth, outcome.nodes
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"))
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
        .target(env_logger::Target::Stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        log::error!("{e}");
        process::exit(1);
    }
}
