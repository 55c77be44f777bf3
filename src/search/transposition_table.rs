//! Fixed-size transposition table keyed by position fingerprint and side.
//!
//! This table uses direct indexing with depth-preferred replacement and
//! generation aging to evict stale entries.

use crate::game_state::chess_types::{Color, Move};
use crate::search::board_scoring::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub side: Color,
    pub depth: u8,
    pub score: Score,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    generations: Vec<u8>,
    current_generation: u8,
    stats: TTStats,
}

/// Slot hash for a (fingerprint, side) pair; fingerprints ignore side to move.
#[inline]
pub(crate) fn slot_hash(key: u64, side: Color) -> u64 {
    match side {
        Color::Light => key,
        Color::Dark => key ^ 0xD6E8_FEB8_6659_FD93,
    }
}

impl TranspositionTable {
    const AGE_REPLACE_THRESHOLD: u8 = 4;
    const DEPTH_REPLACE_MARGIN: u8 = 2;

    pub fn new_with_mb(size_mb: usize) -> Self {
        let bytes = size_mb.max(1) * 1024 * 1024;
        let entry_size = std::mem::size_of::<Option<TTEntry>>().max(1);
        let count = (bytes / entry_size).max(1);
        Self {
            entries: vec![None; count],
            generations: vec![0; count],
            current_generation: 0,
            stats: TTStats::default(),
        }
    }

    /// Advance the generation, once per iterative-deepening iteration.
    #[inline]
    pub fn new_generation(&mut self) {
        self.current_generation = self.current_generation.wrapping_add(1);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    #[inline]
    fn idx(&self, key: u64, side: Color) -> usize {
        (slot_hash(key, side) % self.entries.len() as u64) as usize
    }

    pub fn probe(&mut self, key: u64, side: Color) -> Option<TTEntry> {
        self.stats.probes += 1;
        let idx = self.idx(key, side);
        let hit = self.entries[idx].filter(|e| e.key == key && e.side == side);
        if hit.is_some() {
            self.stats.hits += 1;
            self.generations[idx] = self.current_generation;
        }
        hit
    }

    pub fn store(&mut self, entry: TTEntry) {
        self.stats.stores += 1;
        let idx = self.idx(entry.key, entry.side);
        match self.entries[idx] {
            None => {
                self.entries[idx] = Some(entry);
                self.generations[idx] = self.current_generation;
            }
            Some(existing) => {
                let same_position = existing.key == entry.key && existing.side == entry.side;
                let age = self.current_generation.wrapping_sub(self.generations[idx]);
                let stale = age >= Self::AGE_REPLACE_THRESHOLD;

                let replace = if same_position {
                    entry.depth >= existing.depth
                } else {
                    stale
                        || entry.depth.saturating_add(Self::DEPTH_REPLACE_MARGIN) >= existing.depth
                };

                if replace {
                    self.entries[idx] = Some(entry);
                    self.generations[idx] = self.current_generation;
                }
            }
        }
    }
}
