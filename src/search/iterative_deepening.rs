//! Alpha-beta minimax with quiescence, a fingerprint cache and iterative
//! deepening.
//!
//! The searcher mutates one `GameState` in place. Every `apply` on the way
//! down is matched by an `undo` before any result, error or abort is
//! propagated, so the caller always gets its position back unchanged.
//!
//! Minimax scores are absolute (positive favors Light). Quiescence works in
//! side-relative negamax form and is converted at the leaf.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::chess_errors::EngineResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{capture_subset, legal_moves};
use crate::search::board_scoring::{BoardScorer, Score};
use crate::search::move_ordering::{move_to_front, order_moves};
use crate::search::threading::SharedTranspositionTable;
use crate::search::transposition_table::{Bound, TTEntry, TranspositionTable};

/// Score of delivering mate at the root; mates found deeper score less.
pub const MATE_SCORE: Score = 1_000_000;
/// Window bound strictly outside every reachable score.
pub const INFINITY: Score = MATE_SCORE + 1_000;
const MATE_THRESHOLD: Score = MATE_SCORE - 1_000;
const DEADLINE_CHECK_INTERVAL: u64 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Ceiling on the depth iterative deepening will reach.
    pub max_depth: u8,
    /// Capture plies searched past the horizon.
    pub quiescence_depth: u8,
    pub order_moves: bool,
    pub use_cache: bool,
    pub cache_size_mb: usize,
    /// Check the clock inside the descent and abandon an overrunning depth.
    pub strict_deadline: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            quiescence_depth: 4,
            order_moves: true,
            use_cache: true,
            cache_size_mb: 16,
            strict_deadline: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Minimax nodes entered.
    pub nodes: u64,
    /// Moves applied by minimax.
    pub branches: u64,
    /// Cutoffs, from either the window or the cache.
    pub pruned: u64,
    pub cache_hits: u64,
    pub quiescence_nodes: u64,
}

impl SearchStats {
    pub fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.branches += other.branches;
        self.pruned += other.pruned;
        self.cache_hits += other.cache_hits;
        self.quiescence_nodes += other.quiescence_nodes;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: Score,
    pub reached_depth: u8,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

#[derive(Debug)]
enum SearchCache {
    Disabled,
    Local(TranspositionTable),
    Shared(Arc<SharedTranspositionTable>),
}

impl SearchCache {
    fn probe(&mut self, key: u64, side: Color) -> Option<TTEntry> {
        match self {
            SearchCache::Disabled => None,
            SearchCache::Local(table) => table.probe(key, side),
            SearchCache::Shared(table) => table.probe(key, side),
        }
    }

    fn store(&mut self, entry: TTEntry) {
        match self {
            SearchCache::Disabled => {}
            SearchCache::Local(table) => table.store(entry),
            SearchCache::Shared(table) => table.store(entry),
        }
    }

    fn new_generation(&mut self) {
        match self {
            SearchCache::Disabled => {}
            SearchCache::Local(table) => table.new_generation(),
            SearchCache::Shared(table) => table.new_generation(),
        }
    }
}

#[inline]
fn relative(side: Color, score: Score) -> Score {
    match side {
        Color::Light => score,
        Color::Dark => -score,
    }
}

#[inline]
fn side_for(maximizing: bool) -> Color {
    if maximizing {
        Color::Light
    } else {
        Color::Dark
    }
}

// Mate scores are stored relative to the node so they stay valid when the
// same position is reached at a different ply.
#[inline]
fn score_to_cache(score: Score, ply: u8) -> Score {
    if score >= MATE_THRESHOLD {
        score + Score::from(ply)
    } else if score <= -MATE_THRESHOLD {
        score - Score::from(ply)
    } else {
        score
    }
}

#[inline]
fn score_from_cache(score: Score, ply: u8) -> Score {
    if score >= MATE_THRESHOLD {
        score - Score::from(ply)
    } else if score <= -MATE_THRESHOLD {
        score + Score::from(ply)
    } else {
        score
    }
}

pub struct Searcher<S: BoardScorer> {
    scorer: S,
    config: SearchConfig,
    cache: SearchCache,
    stats: SearchStats,
    deadline: Option<Instant>,
    aborted: bool,
}

impl<S: BoardScorer> Searcher<S> {
    pub fn new(scorer: S, config: SearchConfig) -> Self {
        let cache = if config.use_cache {
            SearchCache::Local(TranspositionTable::new_with_mb(config.cache_size_mb))
        } else {
            SearchCache::Disabled
        };
        Self::with_cache(scorer, config, cache)
    }

    /// Searcher probing and filling a cache shared with other workers.
    /// `config.use_cache` still decides whether the cache is consulted.
    pub fn with_shared_cache(
        scorer: S,
        config: SearchConfig,
        table: Arc<SharedTranspositionTable>,
    ) -> Self {
        let cache = if config.use_cache {
            SearchCache::Shared(table)
        } else {
            SearchCache::Disabled
        };
        Self::with_cache(scorer, config, cache)
    }

    fn with_cache(scorer: S, config: SearchConfig, cache: SearchCache) -> Self {
        Self {
            scorer,
            config,
            cache,
            stats: SearchStats::default(),
            deadline: None,
            aborted: false,
        }
    }

    /// Counters from the most recent search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn reset(&mut self) {
        self.stats = SearchStats::default();
        self.deadline = None;
        self.aborted = false;
    }

    /// Fixed-depth search for `side`.
    pub fn search(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        side: Color,
    ) -> EngineResult<SearchResult> {
        let started = Instant::now();
        self.reset();
        self.cache.new_generation();

        let (best_score, best_move) =
            self.minimax(game_state, depth, side == Color::Light, -INFINITY, INFINITY)?;

        Ok(SearchResult {
            best_move,
            best_score,
            reached_depth: depth,
            stats: self.stats,
            elapsed: started.elapsed(),
        })
    }

    /// `None` when `side` has no legal move.
    pub fn best_move(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        side: Color,
    ) -> EngineResult<Option<Move>> {
        Ok(self.search(game_state, depth, side)?.best_move)
    }

    /// Search depths `1..=max_depth`, keeping the deepest completed result.
    /// `max_depth` is capped by `config.max_depth`.
    ///
    /// The budget is checked before each new depth, so one slow depth may
    /// overrun it unless `config.strict_deadline` is set. Depth 1 always
    /// completes.
    pub fn iterative_search(
        &mut self,
        game_state: &mut GameState,
        max_depth: u8,
        side: Color,
        time_budget: Duration,
    ) -> EngineResult<SearchResult> {
        let started = Instant::now();
        self.reset();
        let mut result = SearchResult::default();
        let max_depth = max_depth.min(self.config.max_depth);

        for depth in 1..=max_depth {
            if depth > 1 && started.elapsed() >= time_budget {
                break;
            }
            if self.config.strict_deadline && depth > 1 {
                self.deadline = Some(started + time_budget);
            }
            self.cache.new_generation();

            let (score, best_move) =
                self.minimax(game_state, depth, side == Color::Light, -INFINITY, INFINITY)?;

            if self.aborted {
                warn!(
                    depth,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "search deadline reached, discarding unfinished depth"
                );
                break;
            }

            result.best_score = score;
            result.reached_depth = depth;
            if best_move.is_some() {
                result.best_move = best_move;
            }
            debug!(
                depth,
                score,
                best_move = ?best_move.map(|mv| mv.to_string()),
                nodes = self.stats.nodes,
                quiescence_nodes = self.stats.quiescence_nodes,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "completed depth"
            );

            if best_move.is_none() {
                break;
            }
        }

        self.deadline = None;
        result.stats = self.stats;
        result.elapsed = started.elapsed();
        Ok(result)
    }

    pub fn best_move_iterative(
        &mut self,
        game_state: &mut GameState,
        max_depth: u8,
        side: Color,
        time_budget: Duration,
    ) -> EngineResult<Option<Move>> {
        Ok(self
            .iterative_search(game_state, max_depth, side, time_budget)?
            .best_move)
    }

    /// Alpha-beta minimax from the root; Light maximizes.
    pub fn minimax(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        maximizing: bool,
        alpha: Score,
        beta: Score,
    ) -> EngineResult<(Score, Option<Move>)> {
        self.minimax_at(game_state, depth, maximizing, alpha, beta, 0)
    }

    /// Exact score of a single root move, searched with a full window.
    pub(crate) fn score_root_move(
        &mut self,
        game_state: &mut GameState,
        mv: Move,
        depth: u8,
        side: Color,
    ) -> EngineResult<Score> {
        let record = game_state.apply(mv.from, mv.to)?;
        let child = self.minimax_at(
            game_state,
            depth.saturating_sub(1),
            side != Color::Light,
            -INFINITY,
            INFINITY,
            1,
        );
        game_state.undo(record);
        Ok(child?.0)
    }

    #[inline]
    fn should_abort(&mut self) -> bool {
        if self.aborted {
            return true;
        }
        if let Some(deadline) = self.deadline {
            let visited = self.stats.nodes + self.stats.quiescence_nodes;
            if visited % DEADLINE_CHECK_INTERVAL == 0 && Instant::now() >= deadline {
                self.aborted = true;
            }
        }
        self.aborted
    }

    fn minimax_at(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
        ply: u8,
    ) -> EngineResult<(Score, Option<Move>)> {
        self.stats.nodes += 1;
        if self.should_abort() {
            return Ok((0, None));
        }

        let side = side_for(maximizing);
        if depth == 0 {
            let limit = self.config.quiescence_depth;
            let score = if maximizing {
                self.quiescence(game_state, alpha, beta, side, limit)?
            } else {
                -self.quiescence(game_state, -beta, -alpha, side, limit)?
            };
            return Ok((score, None));
        }

        let original_alpha = alpha;
        let original_beta = beta;
        let key = game_state.fingerprint();
        let mut hash_move = None;

        if let Some(entry) = self.cache.probe(key, side) {
            hash_move = entry.best_move;
            if ply > 0 && entry.depth >= depth {
                let cached = score_from_cache(entry.score, ply);
                match entry.bound {
                    Bound::Exact => {
                        self.stats.cache_hits += 1;
                        return Ok((cached, entry.best_move));
                    }
                    Bound::Lower => alpha = alpha.max(cached),
                    Bound::Upper => beta = beta.min(cached),
                }
                if alpha >= beta {
                    self.stats.cache_hits += 1;
                    self.stats.pruned += 1;
                    return Ok((cached, entry.best_move));
                }
            }
        }

        let mut moves = legal_moves(game_state, side)?;
        if moves.is_empty() {
            // No move at all counts as a loss; sooner is worse.
            let mate = MATE_SCORE - Score::from(ply);
            return Ok((if maximizing { -mate } else { mate }, None));
        }
        if self.config.order_moves {
            order_moves(&mut moves);
            if let Some(mv) = hash_move {
                move_to_front(&mut moves, mv);
            }
        }

        let mut best_score = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = None;

        for mv in moves {
            self.stats.branches += 1;
            let record = game_state.apply(mv.from, mv.to)?;
            let child = self.minimax_at(game_state, depth - 1, !maximizing, alpha, beta, ply + 1);
            game_state.undo(record);
            let (score, _) = child?;

            if self.aborted {
                return Ok((best_score, best_move));
            }

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if alpha >= beta {
                self.stats.pruned += 1;
                break;
            }
        }

        let bound = if best_score <= original_alpha {
            Bound::Upper
        } else if best_score >= original_beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        trace!(key, depth, score = best_score, ?bound, "cache store");
        self.cache.store(TTEntry {
            key,
            side,
            depth,
            score: score_to_cache(best_score, ply),
            bound,
            best_move,
        });

        Ok((best_score, best_move))
    }

    /// Capture-only negamax; scores are relative to `side`.
    ///
    /// Fail-hard: the result always lies in `[alpha, beta]`.
    pub fn quiescence(
        &mut self,
        game_state: &mut GameState,
        mut alpha: Score,
        beta: Score,
        side: Color,
        depth_left: u8,
    ) -> EngineResult<Score> {
        self.stats.quiescence_nodes += 1;
        if self.should_abort() {
            return Ok(alpha);
        }

        let stand_pat = relative(side, self.scorer.score(game_state)?);
        if stand_pat >= beta {
            return Ok(beta);
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }
        if depth_left == 0 {
            return Ok(alpha);
        }

        let mut captures = capture_subset(&legal_moves(game_state, side)?);
        order_moves(&mut captures);

        for mv in captures {
            let record = game_state.apply(mv.from, mv.to)?;
            let child = self.quiescence(game_state, -beta, -alpha, side.opposite(), depth_left - 1);
            game_state.undo(record);
            let score = -child?;

            if self.aborted {
                return Ok(alpha);
            }
            if score >= beta {
                return Ok(beta);
            }
            if score > alpha {
                alpha = score;
            }
        }

        Ok(alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::{MaterialScorer, StandardScorer};
    use crate::utils::fen_parser::parse_fen;
    use crate::utils::long_algebraic::squares_to_long_algebraic;

    fn config(depth: u8) -> SearchConfig {
        SearchConfig {
            max_depth: depth,
            ..SearchConfig::default()
        }
    }

    fn lan(mv: Move) -> String {
        squares_to_long_algebraic(mv.from, mv.to)
    }

    #[test]
    fn search_depth_zero_returns_eval_only() {
        let mut game = GameState::new_game();
        let mut searcher = Searcher::new(MaterialScorer, config(0));
        let result = searcher
            .search(&mut game, 0, Color::Light)
            .expect("search should run");
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, 0);
        assert_eq!(result.reached_depth, 0);
    }

    #[test]
    fn quiescence_without_captures_returns_clamped_eval() {
        let mut game = GameState::new_game();
        let mut searcher = Searcher::new(StandardScorer, SearchConfig::default());
        let open = searcher
            .quiescence(&mut game, -INFINITY, INFINITY, Color::Light, 4)
            .expect("quiescence should run");
        assert_eq!(open, 0);

        let raised = searcher
            .quiescence(&mut game, 50, 100, Color::Light, 4)
            .expect("quiescence should run");
        assert_eq!(raised, 50);

        let capped = searcher
            .quiescence(&mut game, -100, -50, Color::Dark, 4)
            .expect("quiescence should run");
        assert_eq!(capped, -50);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn quiescence_resolves_a_hanging_piece() {
        // Dark to move wins the undefended queen on d4.
        let (mut game, _) = parse_fen("4k3/8/8/4p3/3Q4/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let mut searcher = Searcher::new(MaterialScorer, SearchConfig::default());
        let score = searcher
            .quiescence(&mut game, -INFINITY, INFINITY, Color::Dark, 4)
            .expect("quiescence should run");
        assert_eq!(score, 100);
    }

    #[test]
    fn depth_one_is_greedy_one_ply_lookahead() {
        let fens = [
            "r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R b KQkq - 0 1",
            "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1",
        ];
        for fen in fens {
            let (mut game, side) = parse_fen(fen).expect("FEN should parse");
            let scorer = StandardScorer;
            let mut best = None;
            for mv in legal_moves(&mut game, side).expect("generation should run") {
                let record = game.apply(mv.from, mv.to).expect("move should apply");
                let eval = scorer.score(&mut game).expect("eval should run");
                game.undo(record);
                best = Some(match (best, side) {
                    (None, _) => eval,
                    (Some(b), Color::Light) => eval.max(b),
                    (Some(b), Color::Dark) => eval.min(b),
                });
            }

            let mut searcher = Searcher::new(
                StandardScorer,
                SearchConfig {
                    quiescence_depth: 0,
                    ..config(1)
                },
            );
            let result = searcher.search(&mut game, 1, side).expect("search should run");
            assert_eq!(Some(result.best_score), best, "{fen}");
            let chosen = result.best_move.expect("a move should be chosen");
            let record = game.apply(chosen.from, chosen.to).expect("move should apply");
            assert_eq!(scorer.score(&mut game).ok(), best);
            game.undo(record);
        }
    }

    #[test]
    fn finds_back_rank_mate_for_either_side() {
        let (mut game, _) = parse_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let mut searcher = Searcher::new(MaterialScorer, config(2));
        let result = searcher.search(&mut game, 2, Color::Light).expect("search should run");
        assert_eq!(result.best_move.map(lan).as_deref(), Some("a1a8"));
        assert_eq!(result.best_score, MATE_SCORE - 1);

        let (mut game, _) = parse_fen("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1").expect("FEN should parse");
        let mut searcher = Searcher::new(MaterialScorer, config(2));
        let result = searcher.search(&mut game, 2, Color::Dark).expect("search should run");
        let mate = result.best_move.expect("mate should be found");
        assert_eq!(lan(mate), "a8a1");
        assert_eq!(result.best_score, -(MATE_SCORE - 1));

        let record = game.apply(mate.from, mate.to).expect("mate should apply");
        assert!(game.is_king_in_check(Color::Light));
        assert!(legal_moves(&mut game, Color::Light).expect("generation should run").is_empty());
        game.undo(record);
    }

    #[test]
    fn prefers_the_quicker_mate() {
        let (mut game, _) = parse_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let mut searcher = Searcher::new(MaterialScorer, config(4));
        let result = searcher.search(&mut game, 4, Color::Light).expect("search should run");
        assert_eq!(result.best_move.map(lan).as_deref(), Some("a1a8"));
        assert_eq!(result.best_score, MATE_SCORE - 1);
    }

    #[test]
    fn no_legal_moves_yields_no_move() {
        let (mut game, _) = parse_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        let mut searcher = Searcher::new(MaterialScorer, config(3));
        assert_eq!(
            searcher.best_move(&mut game, 3, Color::Dark).expect("search should run"),
            None
        );
        assert_eq!(
            searcher
                .best_move_iterative(&mut game, 3, Color::Dark, Duration::from_secs(5))
                .expect("search should run"),
            None
        );
    }

    #[test]
    fn cache_does_not_change_the_best_score() {
        let cases = [
            ("r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R b KQkq - 0 1", 3),
            ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 2),
            ("4k3/8/8/3q4/4P3/2N5/8/4K3 w - - 0 1", 3),
        ];
        for (fen, max_depth) in cases {
            let (mut game, side) = parse_fen(fen).expect("FEN should parse");
            let before = game.clone();
            for depth in 1..=max_depth {
                let mut cached = Searcher::new(MaterialScorer, config(depth));
                let mut plain = Searcher::new(
                    MaterialScorer,
                    SearchConfig {
                        use_cache: false,
                        ..config(depth)
                    },
                );
                let with_cache = cached.search(&mut game, depth, side).expect("search should run");
                let without = plain.search(&mut game, depth, side).expect("search should run");
                assert_eq!(with_cache.best_score, without.best_score, "{fen} at depth {depth}");
                assert_eq!(without.stats.cache_hits, 0);
            }
            assert_eq!(game, before);
        }
    }

    #[test]
    fn unordered_search_agrees_with_ordered_search() {
        let (mut game, side) =
            parse_fen("4k3/8/8/3q4/4P3/2N5/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut ordered = Searcher::new(MaterialScorer, config(3));
        let mut unordered = Searcher::new(
            MaterialScorer,
            SearchConfig {
                order_moves: false,
                use_cache: false,
                ..config(3)
            },
        );
        let a = ordered.search(&mut game, 3, side).expect("search should run");
        let b = unordered.search(&mut game, 3, side).expect("search should run");
        assert_eq!(a.best_score, b.best_score);
    }

    #[test]
    fn wins_the_hanging_queen() {
        let (mut game, side) =
            parse_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut searcher = Searcher::new(StandardScorer, config(2));
        let result = searcher.search(&mut game, 2, side).expect("search should run");
        assert_eq!(result.best_move.map(lan).as_deref(), Some("e4d5"));
    }

    #[test]
    fn iterative_search_reports_each_completed_depth() {
        let mut game = GameState::new_game();
        let mut searcher = Searcher::new(MaterialScorer, config(3));
        let result = searcher
            .iterative_search(&mut game, 3, Color::Light, Duration::from_secs(60))
            .expect("search should run");
        assert_eq!(result.reached_depth, 3);
        assert!(result.best_move.is_some());
        assert!(result.stats.nodes > 0);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn iterative_search_stops_at_configured_max_depth() {
        let mut game = GameState::new_game();
        let mut searcher = Searcher::new(MaterialScorer, config(2));
        let result = searcher
            .iterative_search(&mut game, 6, Color::Light, Duration::from_secs(60))
            .expect("search should run");
        assert_eq!(result.reached_depth, 2);
        assert!(result.best_move.is_some());
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn zero_budget_still_completes_depth_one() {
        let mut game = GameState::new_game();
        let mut searcher = Searcher::new(StandardScorer, config(5));
        let result = searcher
            .iterative_search(&mut game, 5, Color::Light, Duration::ZERO)
            .expect("search should run");
        assert_eq!(result.reached_depth, 1);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn strict_deadline_keeps_completed_move_and_restores_board() {
        let (mut game, side) = parse_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");
        let before = game.clone();
        let mut searcher = Searcher::new(
            StandardScorer,
            SearchConfig {
                strict_deadline: true,
                ..config(8)
            },
        );
        let result = searcher
            .iterative_search(&mut game, 8, side, Duration::from_millis(50))
            .expect("search should run");
        assert!(result.reached_depth >= 1);
        assert!(result.reached_depth < 8);
        let mv = result.best_move.expect("a completed depth leaves a move");
        assert!(legal_moves(&mut game, side).expect("generation should run").contains(&mv));
        assert_eq!(game, before);
    }

    #[test]
    fn mate_scores_survive_the_cache_round_trip() {
        let stored = score_to_cache(MATE_SCORE - 5, 3);
        assert_eq!(score_from_cache(stored, 1), MATE_SCORE - 3);
        let stored = score_to_cache(-(MATE_SCORE - 4), 2);
        assert_eq!(score_from_cache(stored, 2), -(MATE_SCORE - 4));
        assert_eq!(score_to_cache(250, 7), 250);
    }
}
