use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use crate::vehicle::{Direction, Vehicle};

/// Vehicle lists are short (a classic 6×6 board holds at most a dozen or so
/// vehicles), so keep them inline.
pub type Vehicles = SmallVec<[Vehicle; 16]>;

/// Handle into the state arena owned by the running search. Parent links are
/// plain indices rather than references, since many children share a parent.
pub type StateId = usize;

/// One immutable puzzle configuration. The vehicle at index 0 is always the
/// goal vehicle; the puzzle is solved once it touches the right edge.
///
/// Equality and hashing derive solely from the vehicle list: two states
/// reached along different paths are the same configuration.
#[derive(Clone, Debug)]
pub struct State {
    vehicles: Vehicles,
    rows: usize,
    columns: usize,
    path_length: usize,
    heuristic: usize,
    parent: Option<StateId>,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.vehicles == other.vehicles
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.vehicles.hash(hasher);
    }
}

impl State {
    /// The initial configuration. Callers (the loader) are responsible for
    /// the structural invariants: in-bounds, non-overlapping vehicles and a
    /// single horizontal goal vehicle at index 0. The search trusts them.
    pub fn root(rows: usize, columns: usize, vehicles: Vehicles) -> State {
        debug_assert!(!vehicles.is_empty());
        debug_assert_eq!(vehicles[0].direction(), Direction::Horizontal);
        let heuristic = heuristic_for(&vehicles, columns);
        State {
            vehicles,
            rows,
            columns,
            path_length: 0,
            heuristic,
            parent: None,
        }
    }

    pub fn vehicles(&self) -> &Vehicles {
        &self.vehicles
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of moves from the root to this state.
    pub fn path_length(&self) -> usize {
        self.path_length
    }

    pub fn heuristic(&self) -> usize {
        self.heuristic
    }

    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    /// Estimated total cost, the frontier's ordering key.
    pub fn cost(&self) -> usize {
        self.path_length + self.heuristic
    }

    pub fn is_solved(&self) -> bool {
        self.vehicles[0].column_bound() == self.columns - 1
    }

    /// All configurations reachable from here in a single move, tagged with
    /// `own_id` as their parent. One child per vehicle per free offset:
    /// sliding several cells at once is one move, and each scan stops at the
    /// first obstruction or edge. Generation order is deterministic (vehicle
    /// index, then each scan nearest-first).
    pub fn children(&self, own_id: StateId) -> Vec<State> {
        let occupancy = Occupancy::from_state(self);
        let mut children = Vec::new();
        for (index, vehicle) in self.vehicles.iter().enumerate() {
            match vehicle.direction() {
                Direction::Horizontal => {
                    self.horizontal_moves(&occupancy, index, own_id, &mut children)
                }
                Direction::Vertical => {
                    self.vertical_moves(&occupancy, index, own_id, &mut children)
                }
            }
        }
        children
    }

    fn horizontal_moves(
        &self,
        occupancy: &Occupancy,
        index: usize,
        parent: StateId,
        out: &mut Vec<State>,
    ) {
        let vehicle = self.vehicles[index];
        // scan left
        for offset in 1..=vehicle.column() {
            if occupancy.is_occupied(vehicle.row(), vehicle.column() - offset) {
                break; // blocked by another vehicle
            }
            out.push(self.child(index, vehicle.shifted(-(offset as isize)), parent));
        }
        // scan right
        for offset in 1..self.columns - vehicle.column_bound() {
            if occupancy.is_occupied(vehicle.row(), vehicle.column_bound() + offset) {
                break; // blocked by another vehicle
            }
            out.push(self.child(index, vehicle.shifted(offset as isize), parent));
        }
    }

    fn vertical_moves(
        &self,
        occupancy: &Occupancy,
        index: usize,
        parent: StateId,
        out: &mut Vec<State>,
    ) {
        let vehicle = self.vehicles[index];
        // scan up
        for offset in 1..=vehicle.row() {
            if occupancy.is_occupied(vehicle.row() - offset, vehicle.column()) {
                break;
            }
            out.push(self.child(index, vehicle.shifted(-(offset as isize)), parent));
        }
        // scan down
        for offset in 1..self.rows - vehicle.row_bound() {
            if occupancy.is_occupied(vehicle.row_bound() + offset, vehicle.column()) {
                break;
            }
            out.push(self.child(index, vehicle.shifted(offset as isize), parent));
        }
    }

    fn child(&self, index: usize, moved: Vehicle, parent: StateId) -> State {
        let mut vehicles = self.vehicles.clone();
        vehicles[index] = moved;
        let heuristic = heuristic_for(&vehicles, self.columns);
        State {
            vehicles,
            rows: self.rows,
            columns: self.columns,
            path_length: self.path_length + 1,
            heuristic,
            parent: Some(parent),
        }
    }
}

/// Count of vertical vehicles parked across the goal vehicle's exit lane,
/// plus one if the goal vehicle still has to move. Kept exactly as-is: it is
/// not proven admissible, and changing it changes which equal-cost path the
/// solver happens to return.
fn heuristic_for(vehicles: &Vehicles, columns: usize) -> usize {
    let goal = vehicles[0];
    let blocking = vehicles[1..]
        .iter()
        .filter(|vehicle| blocks_exit_lane(&goal, vehicle))
        .count();
    if goal.column_bound() == columns - 1 {
        blocking
    } else {
        blocking + 1
    }
}

fn blocks_exit_lane(goal: &Vehicle, other: &Vehicle) -> bool {
    match other.direction() {
        Direction::Vertical => other.row() <= goal.row() && goal.row() <= other.row_bound(),
        Direction::Horizontal => false,
    }
}

/// Transient occupancy raster, rebuilt once per expanded state so collision
/// queries during move generation are O(1) instead of a per-cell scan over
/// the vehicle list.
struct Occupancy {
    columns: usize,
    cells: Vec<bool>,
}

impl Occupancy {
    fn from_state(state: &State) -> Occupancy {
        let mut occupancy = Occupancy {
            columns: state.columns,
            cells: vec![false; state.rows * state.columns],
        };
        for vehicle in &state.vehicles {
            for (row, column) in vehicle.cells() {
                occupancy.cells[row * occupancy.columns + column] = true;
            }
        }
        occupancy
    }

    fn is_occupied(&self, row: usize, column: usize) -> bool {
        self.cells[row * self.columns + column]
    }
}
