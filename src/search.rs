use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::state::{State, StateId, Vehicles};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The frontier emptied without reaching a solved state. Distinct from a
    /// solved root, which yields a valid one-element path.
    #[error("puzzle has no solution")]
    NoSolution,
}

/// A cost-optimal path from the root to a solved state, plus counters for
/// how much of the configuration space the search had to touch.
#[derive(Debug)]
pub struct Solution {
    /// States from the root to the solved configuration, inclusive.
    pub path: Vec<State>,
    /// States expanded (popped and not already visited).
    pub expanded: usize,
    /// Children generated across all expansions.
    pub generated: usize,
}

impl Solution {
    /// Moves taken, i.e. one less than the number of states on the path.
    pub fn moves(&self) -> usize {
        self.path.len() - 1
    }
}

/// Frontier entry. Ordered by estimated total cost ascending, ties broken by
/// insertion order, on top of `BinaryHeap`'s max-heap (hence the reversal).
#[derive(PartialEq, Eq)]
struct Entry {
    cost: usize,
    seq: usize,
    id: StateId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search from `root` to any solved configuration.
///
/// Pops the cheapest frontier entry; a solved state ends the search with the
/// path reconstructed through parent handles. Otherwise the state is
/// expanded once (the visited set is keyed on the vehicle list) and its
/// not-yet-visited children are pushed. The frontier may hold stale entries
/// for states visited after they were pushed; those are discarded on pop
/// rather than deduplicated on insertion. Terminates on every input: the
/// reachable configuration space is finite and nothing is expanded twice.
pub fn solve(root: State) -> Result<Solution, SolveError> {
    let mut arena: Vec<State> = vec![root];
    let mut frontier: BinaryHeap<Entry> = BinaryHeap::new();
    let mut visited: FxHashSet<Vehicles> = FxHashSet::default();
    let mut seq = 0;
    let mut expanded = 0;
    let mut generated = 0;

    frontier.push(Entry {
        cost: arena[0].cost(),
        seq,
        id: 0,
    });

    while let Some(Entry { id, .. }) = frontier.pop() {
        if arena[id].is_solved() {
            return Ok(Solution {
                path: path_to(&arena, id),
                expanded,
                generated,
            });
        }
        if !visited.insert(arena[id].vehicles().clone()) {
            continue; // stale duplicate of an already-expanded state
        }
        expanded += 1;

        let children = arena[id].children(id);
        generated += children.len();
        for child in children {
            if visited.contains(child.vehicles()) {
                continue;
            }
            seq += 1;
            let entry = Entry {
                cost: child.cost(),
                seq,
                id: arena.len(),
            };
            arena.push(child);
            frontier.push(entry);
        }
    }

    Err(SolveError::NoSolution)
}

/// Walk parent handles back to the root and reverse.
fn path_to(arena: &[State], solved: StateId) -> Vec<State> {
    let mut path = Vec::new();
    let mut current = solved;
    loop {
        path.push(arena[current].clone());
        match arena[current].parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vehicle::{Direction, Vehicle};
    use smallvec::smallvec;

    fn goal(row: usize, column: usize, length: usize) -> Vehicle {
        Vehicle::new(row, column, length, Direction::Horizontal)
    }

    #[test]
    fn solved_root_is_a_one_state_path() {
        let root = State::root(6, 6, smallvec![goal(2, 4, 2)]);
        let solution = solve(root).expect("already solved");
        assert_eq!(solution.path.len(), 1);
        assert_eq!(solution.moves(), 0);
        assert_eq!(solution.path[0].path_length(), 0);
        assert_eq!(solution.path[0].heuristic(), 0);
        assert_eq!(solution.expanded, 0);
    }

    #[test]
    fn single_blocker_board_frees_the_goal() {
        // 6x6, goal at row 2 columns (0,1), one vertical blocker of length 2
        // at column 4 covering rows (1,2).
        let blocker = Vehicle::new(1, 4, 2, Direction::Vertical);
        let root = State::root(6, 6, smallvec![goal(2, 0, 2), blocker]);
        let solution = solve(root).expect("solvable");

        let last = solution.path.last().expect("non-empty");
        assert!(last.is_solved());
        assert_eq!(last.vehicles()[0].column_bound(), 5);
        // The blocker had to get out of the lane at some point.
        assert!(solution
            .path
            .iter()
            .any(|state| state.vehicles()[1] != blocker));
        // One move clears the lane, one slides the goal out.
        assert_eq!(solution.moves(), 2);
    }

    #[test]
    fn path_length_increases_by_one_per_step() {
        let root = State::root(
            6,
            6,
            smallvec![
                goal(2, 0, 2),
                Vehicle::new(1, 4, 2, Direction::Vertical),
                Vehicle::new(3, 2, 2, Direction::Vertical),
            ],
        );
        let solution = solve(root).expect("solvable");
        for (step, state) in solution.path.iter().enumerate() {
            assert_eq!(state.path_length(), step);
        }
        for pair in solution.path.windows(2) {
            let moved = pair[0]
                .vehicles()
                .iter()
                .zip(pair[1].vehicles())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(moved, 1);
        }
    }

    #[test]
    fn repeated_runs_agree_on_total_cost() {
        let vehicles: Vehicles = smallvec![
            goal(2, 0, 2),
            Vehicle::new(0, 3, 3, Direction::Vertical),
            Vehicle::new(3, 4, 2, Direction::Vertical),
            Vehicle::new(4, 0, 3, Direction::Horizontal),
        ];
        let first = solve(State::root(6, 6, vehicles.clone())).expect("solvable");
        let second = solve(State::root(6, 6, vehicles)).expect("solvable");
        assert_eq!(first.moves(), second.moves());
    }

    #[test]
    fn boxed_in_goal_reports_no_solution() {
        // 1x3 strip: the goal at columns (0,1) and an immovable length-1
        // vehicle at column 2. Nothing can move at all.
        let root = State::root(
            1,
            3,
            smallvec![goal(0, 0, 2), Vehicle::new(0, 2, 1, Direction::Horizontal)],
        );
        assert_eq!(solve(root).unwrap_err(), SolveError::NoSolution);
    }

    #[test]
    fn full_column_wall_reports_no_solution() {
        // A vertical vehicle spanning the whole board can never move, and
        // the goal cannot pass through it.
        let root = State::root(
            3,
            3,
            smallvec![goal(1, 0, 2), Vehicle::new(0, 2, 3, Direction::Vertical)],
        );
        assert_eq!(solve(root).unwrap_err(), SolveError::NoSolution);
    }

    #[test]
    fn four_move_board_is_solved_optimally() {
        // Hand-checked fixture: clearing the lane takes E up, G left and C
        // down before S can slide out, so four moves is optimal.
        let root = State::root(
            6,
            6,
            smallvec![
                goal(2, 1, 2),
                Vehicle::new(0, 0, 2, Direction::Horizontal), // A
                Vehicle::new(0, 2, 2, Direction::Vertical),   // B
                Vehicle::new(0, 5, 3, Direction::Vertical),   // C
                Vehicle::new(1, 0, 3, Direction::Vertical),   // D
                Vehicle::new(2, 3, 2, Direction::Vertical),   // E
                Vehicle::new(4, 0, 2, Direction::Vertical),   // F
                Vehicle::new(4, 3, 3, Direction::Horizontal), // G
                Vehicle::new(5, 2, 2, Direction::Horizontal), // H
            ],
        );
        let solution = solve(root).expect("solvable");
        assert_eq!(solution.moves(), 4);
        assert!(solution.path.last().expect("non-empty").is_solved());
    }
}
