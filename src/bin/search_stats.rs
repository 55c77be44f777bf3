//! Baseline search runner over a small position suite.
//!
//! Usage:
//! `cargo run --release --bin search_stats`
//! `cargo run --release --bin search_stats -- --depth 5 --threads 4`
//!
//! Per-depth progress is logged at debug level; set `RUST_LOG=debug` to see it.

use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use mailbox_chess::chess_errors::EngineResult;
use mailbox_chess::search::board_scoring::StandardScorer;
use mailbox_chess::search::iterative_deepening::{SearchConfig, Searcher};
use mailbox_chess::search::threading::{parallel_best_move, ThreadingConfig};
use mailbox_chess::utils::fen_parser::parse_fen;

fn parse_arg<T: std::str::FromStr>(flag: &str, default: T) -> T {
    let args: Vec<String> = std::env::args().collect();
    args.windows(2)
        .find(|pair| pair[0] == flag)
        .and_then(|pair| pair[1].parse::<T>().ok())
        .unwrap_or(default)
}

fn run_case(name: &str, fen: &str, depth: u8, threads: usize) -> EngineResult<()> {
    let (mut game, side) = parse_fen(fen)?;
    let config = SearchConfig {
        max_depth: depth,
        ..SearchConfig::default()
    };

    let result = if threads > 1 {
        parallel_best_move(
            &game,
            depth,
            side,
            StandardScorer,
            config,
            ThreadingConfig {
                requested_threads: threads,
            },
        )?
    } else {
        Searcher::new(StandardScorer, config).iterative_search(
            &mut game,
            depth,
            side,
            Duration::from_secs(600),
        )?
    };

    let stats = result.stats;
    let elapsed_ms = result.elapsed.as_millis() as u64;
    let nps = (stats.nodes + stats.quiescence_nodes) * 1000 / elapsed_ms.max(1);
    info!(
        case = name,
        depth = result.reached_depth,
        best_move = ?result.best_move.map(|mv| mv.to_string()),
        best_score = result.best_score,
        nodes = stats.nodes,
        quiescence_nodes = stats.quiescence_nodes,
        branches = stats.branches,
        pruned = stats.pruned,
        cache_hits = stats.cache_hits,
        elapsed_ms,
        nps,
        "search finished"
    );
    Ok(())
}

fn main() -> EngineResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let depth = parse_arg("--depth", 4u8).max(1);
    let threads = parse_arg("--threads", 1usize);
    let suite = [
        (
            "startpos",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ),
        (
            "classical_mid",
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        ),
        (
            "tactical",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        ),
        ("end_kpk", "8/8/8/8/8/4k3/4P3/4K3 w - - 0 1"),
    ];

    info!(depth, threads, "search baseline run");
    for (name, fen) in suite {
        run_case(name, fen, depth, threads)?;
    }
    Ok(())
}
