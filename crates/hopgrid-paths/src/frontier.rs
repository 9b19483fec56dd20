use std::collections::BinaryHeap;

use crate::config::TieBreak;

/// Heap entry referring into the node arena.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the smallest `f` first,
/// then the smallest `rank`. `idx` settles the rest so that ordering agrees
/// with equality.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    rank: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.rank.cmp(&self.rank))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The open set: a min-priority queue keyed by `(f, tie-break rank)`.
///
/// The authoritative cost of every open coordinate lives in the node arena.
/// A cost improvement pushes a new entry instead of sifting the old one, so
/// the heap can hold outdated entries; [`pop`](Self::pop) callers compare
/// `Entry::f` against the arena and drop the ones that no longer match.
#[derive(Debug)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
    tie_break: TieBreak,
}

impl Frontier {
    pub(crate) fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            tie_break,
        }
    }

    /// Empty the queue and restart numbering for a new search.
    pub(crate) fn reset(&mut self, tie_break: TieBreak) {
        self.heap.clear();
        self.next_seq = 0;
        self.tie_break = tie_break;
    }

    /// Allocate the insertion sequence number for a newly discovered node.
    pub(crate) fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Queue `idx` with priority `f`. `seq` is the node's original insertion
    /// number, so an updated node keeps its place among equal-`f` peers.
    pub(crate) fn push(&mut self, idx: usize, f: i32, seq: u64) {
        let rank = match self.tie_break {
            TieBreak::Fifo => seq,
            TieBreak::Lifo => u64::MAX - seq,
        };
        self.heap.push(Entry { idx, f, rank });
    }

    /// Remove the entry with the lowest `(f, rank)`.
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
