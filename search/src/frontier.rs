//! Best-first frontier (open list).
//!
//! Two implementations behind one [`Frontier`] trait:
//!
//! - [`HeapFrontier`]: binary min-heap, O(log n) insert and extract. Default.
//! - [`SortedListFrontier`]: insertion-sorted `Vec`, O(n) insert. Reference
//!   implementation for cross-checking the heap on small boards only.
//!
//! Both assign a monotonically increasing insertion number to every node, so
//! equal scores pop in FIFO order and the two implementations pop identical
//! sequences for identical input.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::node::{FrontierKey, SearchNode};

/// Ordered, mutable collection of scored nodes awaiting expansion.
pub trait Frontier {
    /// Add a scored node.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnscoredNode`] if the node has no score.
    fn insert(&mut self, node: Rc<SearchNode>) -> Result<(), SearchError>;

    /// Remove and return a node with the smallest score.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] if no nodes remain.
    fn extract_min(&mut self) -> Result<Rc<SearchNode>, SearchError>;

    /// Number of nodes waiting.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    fn high_water(&self) -> usize;
}

/// Which [`Frontier`] implementation the driver uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierKind {
    #[default]
    BinaryHeap,
    SortedList,
}

impl FrontierKind {
    /// Build an empty frontier of this kind.
    #[must_use]
    pub fn build(self) -> Box<dyn Frontier> {
        match self {
            Self::BinaryHeap => Box::new(HeapFrontier::new()),
            Self::SortedList => Box::new(SortedListFrontier::new()),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BinaryHeap => "binary_heap",
            Self::SortedList => "sorted_list",
        }
    }
}

/// A frontier entry wrapping a node with its ordering key.
#[derive(Debug)]
struct FrontierEntry<K> {
    key: K,
    node: Rc<SearchNode>,
}

impl<K: PartialEq> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq> Eq for FrontierEntry<K> {}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Hands out insertion numbers and tracks the size high-water mark.
#[derive(Debug, Default)]
struct Sequencer {
    next_insertion: u64,
    high_water: usize,
}

impl Sequencer {
    fn key_for(&mut self, node: &SearchNode) -> Result<FrontierKey, SearchError> {
        let f_cost = node.score().ok_or(SearchError::UnscoredNode)?;
        let insertion = self.next_insertion;
        self.next_insertion += 1;
        Ok(FrontierKey { f_cost, insertion })
    }

    fn observe(&mut self, len: usize) {
        self.high_water = self.high_water.max(len);
    }
}

/// Binary min-heap frontier.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse` to pop the
/// lowest `f_cost` first.
#[derive(Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<FrontierEntry<Reverse<FrontierKey>>>,
    seq: Sequencer,
}

impl HeapFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for HeapFrontier {
    fn insert(&mut self, node: Rc<SearchNode>) -> Result<(), SearchError> {
        let key = self.seq.key_for(&node)?;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        self.seq.observe(self.heap.len());
        Ok(())
    }

    fn extract_min(&mut self) -> Result<Rc<SearchNode>, SearchError> {
        self.heap
            .pop()
            .map(|entry| entry.node)
            .ok_or(SearchError::EmptyFrontier)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> usize {
        self.seq.high_water
    }
}

/// Insertion-sorted list frontier.
///
/// Entries are kept in descending key order so the minimum is always last and
/// extraction is a `Vec::pop`.
#[derive(Debug, Default)]
pub struct SortedListFrontier {
    entries: Vec<FrontierEntry<FrontierKey>>,
    seq: Sequencer,
}

impl SortedListFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for SortedListFrontier {
    fn insert(&mut self, node: Rc<SearchNode>) -> Result<(), SearchError> {
        let key = self.seq.key_for(&node)?;
        let at = self.entries.partition_point(|entry| entry.key > key);
        self.entries.insert(at, FrontierEntry { key, node });
        self.seq.observe(self.entries.len());
        Ok(())
    }

    fn extract_min(&mut self) -> Result<Rc<SearchNode>, SearchError> {
        self.entries
            .pop()
            .map(|entry| entry.node)
            .ok_or(SearchError::EmptyFrontier)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn high_water(&self) -> usize {
        self.seq.high_water
    }
}
