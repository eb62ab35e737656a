use itertools::Itertools;

use crate::state::State;

/// Render one state as a labeled grid: vehicle names in their cells, `_`
/// for empty cells, cells separated by spaces.
pub fn render_state(state: &State, names: &[String]) -> String {
    let mut grid = vec![vec![None; state.columns()]; state.rows()];
    for (index, vehicle) in state.vehicles().iter().enumerate() {
        for (row, column) in vehicle.cells() {
            grid[row][column] = Some(index);
        }
    }
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Some(index) => names[*index].as_str(),
                    None => "_",
                })
                .join(" ")
        })
        .join("\n")
}

/// Render a root-to-solved path as one grid per step, separated by rules.
pub fn render_path(path: &[State], names: &[String]) -> String {
    path.iter()
        .map(|state| render_state(state, names))
        .join("\n===========\n")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vehicle::{Direction, Vehicle};
    use smallvec::smallvec;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn labels_every_occupied_cell() {
        let state = State::root(
            3,
            4,
            smallvec![
                Vehicle::new(1, 0, 2, Direction::Horizontal),
                Vehicle::new(0, 3, 2, Direction::Vertical),
            ],
        );
        let rendered = render_state(&state, &names(&["S", "A"]));
        assert_eq!(rendered, "_ _ _ A\nS S _ A\n_ _ _ _");
    }

    #[test]
    fn path_steps_are_separated_by_rules() {
        let state = State::root(
            1,
            3,
            smallvec![Vehicle::new(0, 0, 2, Direction::Horizontal)],
        );
        let next = state
            .children(0)
            .into_iter()
            .find(|child| child.is_solved())
            .expect("can slide to the edge");
        let rendered = render_path(&[state, next], &names(&["S"]));
        assert_eq!(rendered, "S S _\n===========\n_ S S");
    }
}
