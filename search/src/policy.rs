//! Search policy: the single configuration object handed to the driver.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::frontier::FrontierKind;
use crate::heuristic::HeuristicKind;

/// Largest board the sorted-list frontier may be used on.
pub const SORTED_LIST_MAX_SIZE: usize = 3;

/// Heuristic, frontier and bound configuration for one solve.
///
/// Every field has a serde default, so a config file only lists what it
/// changes. See [`crate::config`] for loading from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// h-cost function.
    pub heuristic: HeuristicKind,
    /// Open-list implementation.
    pub frontier: FrontierKind,
    /// Whether already-expanded states are skipped.
    pub dedup: DedupPolicy,
    /// Stop after this many expansions. `None` = unbounded.
    pub max_iterations: Option<u64>,
    /// Stop once this much wall-clock time has passed. `None` = unbounded.
    pub time_limit_ms: Option<u64>,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            heuristic: HeuristicKind::Manhattan,
            frontier: FrontierKind::BinaryHeap,
            dedup: DedupPolicy::ClosedSet,
            max_iterations: None,
            time_limit_ms: None,
        }
    }
}

impl SearchPolicy {
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[must_use]
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    #[must_use]
    pub fn with_dedup(mut self, dedup: DedupPolicy) -> Self {
        self.dedup = dedup;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_ms = Some(u64::try_from(limit.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// The wall-clock bound, if configured.
    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Check that this policy can be used on a `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedPolicy`] if the sorted-list frontier
    /// is selected for a board larger than [`SORTED_LIST_MAX_SIZE`].
    pub fn validate_for(&self, size: usize) -> Result<(), SearchError> {
        if self.frontier == FrontierKind::SortedList && size > SORTED_LIST_MAX_SIZE {
            return Err(SearchError::UnsupportedPolicy {
                detail: format!(
                    "sorted_list frontier is limited to {SORTED_LIST_MAX_SIZE}x{SORTED_LIST_MAX_SIZE} boards, got {size}x{size}"
                ),
            });
        }
        Ok(())
    }
}

/// Duplicate-state handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    /// Every popped node is expanded, even if its state was expanded before.
    Disabled,
    /// A state is expanded at most once. Optimal under a consistent heuristic.
    #[default]
    ClosedSet,
}

impl DedupPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::ClosedSet => "closed_set",
        }
    }
}
