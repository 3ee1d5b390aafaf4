//! Policy configuration and bounded outcomes.
//!
//! - A TOML policy file drives a solve end to end.
//! - Hitting the iteration bound is reported separately from "no solution".
//! - Disabling the closed set changes counters, not move counts.
//! - Solves run with a `tracing` subscriber installed and `RUST_LOG` honored.

use std::io::Write;
use std::time::Duration;

use lock_tests::fixtures::{puzzle_3x3, HARDEST_3X3, SHUFFLED_3X3, TRANSPOSED_3X3};
use slide_search::config::ConfigError;
use slide_search::error::SearchError;
use slide_search::frontier::FrontierKind;
use slide_search::heuristic::HeuristicKind;
use slide_search::policy::{DedupPolicy, SearchPolicy};
use slide_search::search::{NoSolutionReason, SolveOutcome};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn policy_file_drives_solve() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
heuristic = "hamming"
frontier = "sorted_list"
max_iterations = 50000
"#
    )
    .unwrap();

    let policy = SearchPolicy::load(file.path()).unwrap();
    assert_eq!(policy.heuristic, HeuristicKind::Hamming);
    assert_eq!(policy.frontier, FrontierKind::SortedList);
    assert_eq!(policy.dedup, DedupPolicy::ClosedSet);

    let mut puzzle = puzzle_3x3(&SHUFFLED_3X3);
    let outcome = puzzle.solve_with(&policy).unwrap();
    assert_eq!(outcome.solution().unwrap().move_count(), 14);
}

#[test]
fn invalid_policy_files_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("policy.toml");

    std::fs::write(&path, "max_iterations = 0\n").unwrap();
    assert!(matches!(SearchPolicy::load(&path), Err(ConfigError::Invalid(_))));

    std::fs::write(&path, "frontier = \"skip_list\"\n").unwrap();
    assert!(matches!(SearchPolicy::load(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn sorted_list_policy_refused_for_4x4() {
    let mut puzzle = lock_tests::fixtures::to_solved(lock_tests::fixtures::scrambled(4, 10, 3));
    let policy = SearchPolicy::default().with_frontier(FrontierKind::SortedList);
    let err = puzzle.solve_with(&policy).unwrap_err();
    assert!(matches!(err, SearchError::UnsupportedPolicy { .. }), "got {err:?}");
}

#[test]
fn iteration_limit_is_not_no_solution() {
    init_tracing();
    let mut bounded = puzzle_3x3(&HARDEST_3X3);
    let outcome = bounded.solve(Some(100)).unwrap();
    assert!(
        matches!(outcome, SolveOutcome::IterationLimitExceeded { .. }),
        "got {outcome:?}"
    );
    assert_eq!(outcome.stats().iterations, 100);
    assert_eq!(bounded.iterations(), 100);

    // The same board is solvable once the bound is lifted.
    let outcome = bounded.solve(None).unwrap();
    assert!(outcome.is_solved());
    assert!(bounded.iterations() > 100);

    let mut unsolvable = puzzle_3x3(&TRANSPOSED_3X3);
    match unsolvable.solve(Some(100)).unwrap() {
        SolveOutcome::NoSolution { reason, .. } => assert_eq!(reason, NoSolutionReason::Unsolvable),
        other => panic!("expected NoSolution, got {other:?}"),
    }
}

#[test]
fn zero_time_limit_stops_immediately() {
    let mut puzzle = puzzle_3x3(&HARDEST_3X3);
    let policy = SearchPolicy::default().with_time_limit(Duration::ZERO);
    let outcome = puzzle.solve_with(&policy).unwrap();
    assert!(
        matches!(outcome, SolveOutcome::TimeLimitExceeded { .. }),
        "got {outcome:?}"
    );
    assert_eq!(puzzle.iterations(), 0);
}

#[test]
fn closed_set_changes_counters_not_length() {
    let mut with_closed = puzzle_3x3(&SHUFFLED_3X3);
    let mut without = puzzle_3x3(&SHUFFLED_3X3);
    let closed = with_closed.solve_with(&SearchPolicy::default()).unwrap();
    let open = without
        .solve_with(&SearchPolicy::default().with_dedup(DedupPolicy::Disabled))
        .unwrap();
    assert_eq!(
        closed.solution().unwrap().move_count(),
        open.solution().unwrap().move_count()
    );
    assert_eq!(open.stats().duplicates_skipped, 0);
    assert!(closed.stats().iterations <= open.stats().iterations);
}
