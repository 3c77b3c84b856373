//! Transposition cache for search results.
//!
//! A fixed-size table indexed by the low bits of the position key. Each
//! slot keeps the full key so a probe only answers for the exact position
//! it was written for. Writes always replace the slot; the table is an
//! in-memory accelerator that a caller may keep across decisions or clear.

use std::mem;

/// How a stored score relates to the true value of the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Score is the exact value
    Exact,
    /// Score is at least this value (failed high: score >= beta)
    LowerBound,
    /// Score is at most this value (failed low: score <= alpha)
    UpperBound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheEntry<M> {
    pub key: u64,
    pub best_move: Option<M>,
    /// Remaining depth the entry was searched to. Quiescence nodes store <= 0.
    pub depth: i32,
    pub score: i32,
    pub bound: Bound,
}

impl<M> CacheEntry<M> {
    /// Whether this entry settles a node searched to `depth` with window
    /// `[alpha, beta]` without further search.
    #[must_use]
    pub fn cuts_off(&self, depth: i32, alpha: i32, beta: i32) -> bool {
        self.depth >= depth
            && match self.bound {
                Bound::Exact => true,
                Bound::LowerBound => self.score >= beta,
                Bound::UpperBound => self.score <= alpha,
            }
    }
}

/// Position-keyed cache of search results.
pub struct PositionCache<M> {
    slots: Vec<Option<CacheEntry<M>>>,
    mask: usize,
}

impl<M: Copy> PositionCache<M> {
    /// Create a cache using roughly `size_mb` megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let slot_size = mem::size_of::<Option<CacheEntry<M>>>().max(1);
        let mut num_slots = (size_mb * 1024 * 1024) / slot_size;
        num_slots = num_slots.next_power_of_two() / 2;
        if num_slots == 0 {
            num_slots = 1024;
        }
        PositionCache {
            slots: vec![None; num_slots],
            mask: num_slots - 1,
        }
    }

    /// A cache that stores nothing. Every probe misses.
    #[must_use]
    pub fn disabled() -> Self {
        PositionCache {
            slots: Vec::new(),
            mask: 0,
        }
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// Entry stored for exactly `key`, if any.
    #[must_use]
    pub fn probe(&self, key: u64) -> Option<&CacheEntry<M>> {
        if self.is_disabled() {
            return None;
        }
        self.slots[self.index(key)]
            .as_ref()
            .filter(|entry| entry.key == key)
    }

    /// Store an entry, replacing whatever occupied the slot.
    pub fn store(&mut self, key: u64, best_move: Option<M>, depth: i32, score: i32, bound: Bound) {
        if self.is_disabled() {
            return;
        }
        let idx = self.index(key);
        self.slots[idx] = Some(CacheEntry {
            key,
            best_move,
            depth,
            score,
            bound,
        });
    }

    /// Table fullness in per mille, sampled over the first 1000 slots.
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        let sample = self.slots.len().min(1000);
        if sample == 0 {
            return 0;
        }
        let occupied = self.slots[..sample].iter().filter(|s| s.is_some()).count();
        ((occupied * 1000) / sample) as u32
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        log::trace!("position cache cleared ({} slots)", self.slots.len());
    }
}
