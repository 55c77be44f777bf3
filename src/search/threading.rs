//! Root-split parallel search.
//!
//! Workers each own a clone of the position, take a stripe of the ordered
//! root moves, and score every move with a full window. They share one
//! mutex-sharded fingerprint cache and a stop flag. Merging is
//! deterministic: best score wins, ties go to the earliest move in root
//! order, which matches what the serial searcher would pick.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};
use std::time::Instant;

use tracing::debug;

use crate::chess_errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::board_scoring::{BoardScorer, Score};
use crate::search::iterative_deepening::{SearchConfig, SearchResult, SearchStats, Searcher};
use crate::search::move_ordering::order_moves;
use crate::search::transposition_table::{slot_hash, TTEntry, TTStats, TranspositionTable};

/// Threading configuration owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadingConfig {
    pub requested_threads: usize,
}

impl Default for ThreadingConfig {
    fn default() -> Self {
        Self {
            requested_threads: 1,
        }
    }
}

impl ThreadingConfig {
    #[inline]
    pub fn normalized_threads(self) -> usize {
        self.requested_threads.max(1)
    }
}

/// Stop flag and node accounting shared by the workers of one search.
#[derive(Debug, Default)]
pub struct SharedSearchState {
    stop: AtomicBool,
    pub nodes_visited: AtomicU64,
}

impl SharedSearchState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    #[inline]
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn add_nodes(&self, n: u64) {
        self.nodes_visited.fetch_add(n, Ordering::Relaxed);
    }
}

/// Thread-safe cache façade for shared worker access, one mutex per shard.
#[derive(Debug)]
pub struct SharedTranspositionTable {
    shards: Vec<Mutex<TranspositionTable>>,
}

impl SharedTranspositionTable {
    pub fn new_with_mb(total_mb: usize, shard_count: usize) -> Arc<Self> {
        let shards = shard_count.max(1);
        let mb_per_shard = (total_mb.max(1) / shards).max(1);
        let mut vec = Vec::with_capacity(shards);
        for _ in 0..shards {
            vec.push(Mutex::new(TranspositionTable::new_with_mb(mb_per_shard)));
        }
        Arc::new(Self { shards: vec })
    }

    #[inline]
    fn shard_idx(&self, key: u64, side: Color) -> usize {
        // High bits pick the shard; the table indexes with the low bits.
        ((slot_hash(key, side) >> 32) % self.shards.len() as u64) as usize
    }

    pub fn probe(&self, key: u64, side: Color) -> Option<TTEntry> {
        let idx = self.shard_idx(key, side);
        let Ok(mut guard) = self.shards[idx].lock() else {
            return None;
        };
        guard.probe(key, side)
    }

    pub fn store(&self, entry: TTEntry) {
        let idx = self.shard_idx(entry.key, entry.side);
        if let Ok(mut guard) = self.shards[idx].lock() {
            guard.store(entry);
        }
    }

    pub fn new_generation(&self) {
        for shard in &self.shards {
            if let Ok(mut guard) = shard.lock() {
                guard.new_generation();
            }
        }
    }

    pub fn stats(&self) -> TTStats {
        let mut merged = TTStats::default();
        for shard in &self.shards {
            if let Ok(guard) = shard.lock() {
                let s = guard.stats();
                merged.probes += s.probes;
                merged.hits += s.hits;
                merged.stores += s.stores;
            }
        }
        merged
    }
}

struct WorkerOutcome {
    scores: Vec<(usize, Score)>,
    stats: SearchStats,
}

/// Fixed-depth search for `side` with the root moves spread over workers.
///
/// Falls back to the serial searcher for a single thread, depth 0, or fewer
/// than two root moves.
pub fn parallel_best_move<S: BoardScorer + Clone>(
    game_state: &GameState,
    depth: u8,
    side: Color,
    scorer: S,
    config: SearchConfig,
    threading: ThreadingConfig,
) -> EngineResult<SearchResult> {
    let started = Instant::now();
    let mut root = game_state.clone();
    let mut moves = legal_moves(&mut root, side)?;
    if config.order_moves {
        order_moves(&mut moves);
    }

    let workers = threading.normalized_threads().min(moves.len());
    if workers <= 1 || depth == 0 {
        return Searcher::new(scorer, config).search(&mut root, depth, side);
    }

    let table = SharedTranspositionTable::new_with_mb(config.cache_size_mb, workers);
    let shared = SharedSearchState::new();
    let moves = &moves;

    let outcomes = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker_id| {
                let mut local = game_state.clone();
                let mut searcher =
                    Searcher::with_shared_cache(scorer.clone(), config, Arc::clone(&table));
                let shared = Arc::clone(&shared);
                scope.spawn(move || -> EngineResult<WorkerOutcome> {
                    let mut scores = Vec::new();
                    for (idx, mv) in moves.iter().enumerate().skip(worker_id).step_by(workers) {
                        if shared.should_stop() {
                            break;
                        }
                        match searcher.score_root_move(&mut local, *mv, depth, side) {
                            Ok(score) => scores.push((idx, score)),
                            Err(err) => {
                                shared.request_stop();
                                return Err(err);
                            }
                        }
                    }
                    let stats = searcher.stats();
                    shared.add_nodes(stats.nodes + stats.quiescence_nodes);
                    Ok(WorkerOutcome { scores, stats })
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| EngineError::WorkerPanicked)
                    .and_then(|outcome| outcome)
            })
            .collect::<EngineResult<Vec<_>>>()
    })?;

    let mut stats = SearchStats::default();
    let mut scored = Vec::with_capacity(moves.len());
    for outcome in outcomes {
        stats.merge(outcome.stats);
        scored.extend(outcome.scores);
    }
    scored.sort_by_key(|&(idx, _)| idx);

    let maximizing = side == Color::Light;
    let mut best: Option<(usize, Score)> = None;
    for (idx, score) in scored {
        let better = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if better {
            best = Some((idx, score));
        }
    }

    debug!(
        workers,
        depth,
        nodes = shared.nodes_visited.load(Ordering::Relaxed),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "parallel search finished"
    );

    Ok(SearchResult {
        best_move: best.map(|(idx, _)| moves[idx]),
        best_score: best.map_or(0, |(_, score)| score),
        reached_depth: depth,
        stats,
        elapsed: started.elapsed(),
    })
}
