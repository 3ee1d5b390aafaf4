//! Property tests over random walks from the solved board.
//!
//! A walk from the goal always yields a solvable start, so these exercise
//! the full solve path on arbitrary reachable boards.

use lock_tests::fixtures::{to_solved, walk};
use proptest::prelude::*;
use slide_kernel::board::{GoalLookup, Grid};
use slide_kernel::moves::{successors, Direction};
use slide_kernel::proof::replay::replay_verify;
use slide_kernel::solvability::is_solvable;
use slide_search::frontier::FrontierKind;
use slide_search::heuristic::{hamming, manhattan, HeuristicKind};
use slide_search::policy::SearchPolicy;

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn walked(size: usize, max_len: usize) -> impl Strategy<Value = (Grid, usize)> {
    prop::collection::vec(direction(), 0..max_len)
        .prop_map(move |dirs| walk(&Grid::solved(size).unwrap(), &dirs))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn walks_stay_solvable((grid, _) in walked(4, 60)) {
        prop_assert!(is_solvable(&grid, &Grid::solved(4).unwrap()));
    }

    #[test]
    fn expand_yields_two_to_four_children_differing_in_two_cells((grid, _) in walked(4, 40)) {
        let children = successors(&grid);
        prop_assert!((2..=4).contains(&children.len()));
        for (_, child) in &children {
            let differing = grid
                .cells()
                .iter()
                .zip(child.cells())
                .filter(|(a, b)| a != b)
                .count();
            prop_assert_eq!(differing, 2);
        }
    }

    #[test]
    fn manhattan_moves_by_exactly_one_per_slide((grid, _) in walked(3, 40)) {
        let goal = GoalLookup::new(&Grid::solved(3).unwrap());
        let here = i64::from(manhattan(&grid, &goal));
        for (_, child) in successors(&grid) {
            let there = i64::from(manhattan(&child, &goal));
            prop_assert_eq!((here - there).abs(), 1);
        }
    }

    #[test]
    fn heuristics_are_zero_only_on_the_goal((grid, _) in walked(3, 20)) {
        let goal_grid = Grid::solved(3).unwrap();
        let goal = GoalLookup::new(&goal_grid);
        let at_goal = grid == goal_grid;
        prop_assert_eq!(manhattan(&grid, &goal) == 0, at_goal);
        prop_assert_eq!(hamming(&grid, &goal) == 0, at_goal);
        prop_assert!(manhattan(&grid, &goal) >= hamming(&grid, &goal));
    }

    #[test]
    fn solution_is_no_longer_than_the_walk((grid, taken) in walked(3, 30)) {
        let mut puzzle = to_solved(grid);
        let outcome = puzzle.solve(Some(200_000)).unwrap();
        let solution = outcome.solution().expect("walked boards are solvable");
        let moves = solution.move_count() as usize;
        prop_assert!(moves <= taken);
        // Every path between two fixed states has the same length parity.
        prop_assert_eq!(moves % 2, taken % 2);
        let replayed = replay_verify(puzzle.start(), puzzle.goal(), &solution.path());
        prop_assert_eq!(replayed, Ok(solution.moves()));
    }

    #[test]
    fn hamming_and_manhattan_agree_on_length((grid, _) in walked(3, 16)) {
        let mut a = to_solved(grid.clone());
        let mut b = to_solved(grid);
        let manhattan_len = a.solve(None).unwrap().solution().unwrap().move_count();
        let hamming_len = b
            .solve_with(&SearchPolicy::default().with_heuristic(HeuristicKind::Hamming))
            .unwrap()
            .solution()
            .unwrap()
            .move_count();
        prop_assert_eq!(manhattan_len, hamming_len);
    }

    #[test]
    fn frontiers_agree_on_random_boards((grid, _) in walked(3, 30)) {
        let mut a = to_solved(grid.clone());
        let mut b = to_solved(grid);
        let heap = a.solve(None).unwrap();
        let list = b
            .solve_with(&SearchPolicy::default().with_frontier(FrontierKind::SortedList))
            .unwrap();
        prop_assert_eq!(heap.solution().unwrap().moves(), list.solution().unwrap().moves());
        prop_assert_eq!(heap.stats().iterations, list.stats().iterations);
    }
}
