//! Search node and frontier ordering key.
//!
//! A node wraps a grid with its path cost, its score, and a shared link to
//! the node it was expanded from. The links form a singly-linked chain back to
//! the start node: children own their parent, never the other way round, so
//! an ancestor lives exactly as long as some frontier entry or live path
//! still reaches it.

use std::rc::Rc;

use slide_kernel::board::Grid;
use slide_kernel::moves::{successors, Direction};

/// An immutable search node.
///
/// Lifecycle: created unscored by [`SearchNode::expand`], scored once with
/// [`SearchNode::with_heuristic`], then shared through `Rc` by the frontier
/// and by its own children.
#[derive(Debug)]
pub struct SearchNode {
    grid: Grid,
    depth: u32,
    h_cost: Option<u32>,
    producing_move: Option<Direction>,
    parent: Option<Rc<SearchNode>>,
}

impl SearchNode {
    /// Unscored start node (depth 0, no parent).
    #[must_use]
    pub fn root(grid: Grid) -> Self {
        Self {
            grid,
            depth: 0,
            h_cost: None,
            producing_move: None,
            parent: None,
        }
    }

    /// Attach the heuristic estimate, fixing `score = depth + h`.
    #[must_use]
    pub fn with_heuristic(mut self, h_cost: u32) -> Self {
        self.h_cost = Some(h_cost);
        self
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of moves from the start node (g-cost).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Heuristic estimate (h-cost), `None` until scored.
    #[must_use]
    pub fn h_cost(&self) -> Option<u32> {
        self.h_cost
    }

    /// `f = g + h`, `None` until scored.
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        self.h_cost.map(|h| self.depth.saturating_add(h))
    }

    /// The slide that produced this node from its parent.
    #[must_use]
    pub fn producing_move(&self) -> Option<Direction> {
        self.producing_move
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Rc<SearchNode>> {
        self.parent.as_ref()
    }

    /// Unscored children, one per legal slide, in up/down/left/right order.
    #[must_use]
    pub fn expand(self: &Rc<Self>) -> Vec<SearchNode> {
        successors(&self.grid)
            .into_iter()
            .map(|(dir, grid)| SearchNode {
                grid,
                depth: self.depth + 1,
                h_cost: None,
                producing_move: Some(dir),
                parent: Some(Rc::clone(self)),
            })
            .collect()
    }

    /// This node followed by each ancestor up to the start node.
    pub fn lineage(&self) -> impl Iterator<Item = &SearchNode> {
        std::iter::successors(Some(self), |node| node.parent.as_deref())
    }

    /// Board states from the start node to this node, inclusive.
    #[must_use]
    pub fn path(&self) -> Vec<Grid> {
        let mut states: Vec<Grid> = self.lineage().map(|node| node.grid.clone()).collect();
        states.reverse();
        states
    }

    /// Slides from the start node to this node.
    #[must_use]
    pub fn moves(&self) -> Vec<Direction> {
        let mut moves: Vec<Direction> = self.lineage().filter_map(|n| n.producing_move).collect();
        moves.reverse();
        moves
    }
}

impl Drop for SearchNode {
    // Unlink the ancestor chain iteratively; the default drop recurses once
    // per ancestor.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut inner) => next = inner.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// The frontier ordering key: `(f_cost, insertion)`.
///
/// Lower `f_cost` first; ties go to the node inserted earlier (FIFO), which
/// keeps the search reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u32,
    pub insertion: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.insertion.cmp(&other.insertion))
    }
}
