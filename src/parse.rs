use itertools::Itertools;
use smallvec::smallvec;
use thiserror::Error;

use crate::search::{solve, Solution, SolveError};
use crate::state::{State, Vehicles};
use crate::vehicle::{Direction, Vehicle};

/// Reserved name marking the goal vehicle in puzzle files.
pub const GOAL_NAME: &str = "S";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing board dimensions line")]
    MissingDimensions,
    #[error("invalid board dimensions: {0:?}")]
    InvalidDimensions(String),
    #[error("invalid vehicle line: {0:?}")]
    InvalidVehicle(String),
    #[error("vehicle {name:?} does not fit on a {rows}x{columns} board")]
    OutOfBounds {
        name: String,
        rows: usize,
        columns: usize,
    },
    #[error("vehicles {first:?} and {second:?} overlap")]
    Overlap { first: String, second: String },
    #[error("expected exactly one goal vehicle \"S\", found {0}")]
    GoalCount(usize),
    #[error("goal vehicle must be horizontal")]
    VerticalGoal,
}

/// A validated puzzle: the root state plus the vehicle names needed to
/// render states back out. Validation happens exactly once, here; the
/// search itself trusts the invariants and never re-checks them.
#[derive(Debug, Clone)]
pub struct Puzzle {
    root: State,
    names: Vec<String>,
}

impl Puzzle {
    /// Parse the textual puzzle format: a `rows columns` line followed by
    /// one `name length row column direction` line per vehicle. The vehicle
    /// named `S` is the goal vehicle and is moved to index 0.
    pub fn parse(input: &str) -> Result<Puzzle, ParseError> {
        let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());

        let dimensions = lines.next().ok_or(ParseError::MissingDimensions)?;
        let (rows, columns) = parse_dimensions(dimensions)?;

        let mut vehicles: Vehicles = smallvec![];
        let mut names: Vec<String> = Vec::new();
        let mut goal_count = 0;
        for line in lines {
            let (name, vehicle) = parse_vehicle(line)?;
            if name == GOAL_NAME {
                goal_count += 1;
                if vehicle.direction() != Direction::Horizontal {
                    return Err(ParseError::VerticalGoal);
                }
                vehicles.insert(0, vehicle);
                names.insert(0, name);
            } else {
                vehicles.push(vehicle);
                names.push(name);
            }
        }
        if goal_count != 1 {
            return Err(ParseError::GoalCount(goal_count));
        }

        validate(rows, columns, &vehicles, &names)?;

        Ok(Puzzle {
            root: State::root(rows, columns, vehicles),
            names,
        })
    }

    pub fn root(&self) -> &State {
        &self.root
    }

    /// Vehicle names in the same order as the state's vehicle list.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn solve(&self) -> Result<Solution, SolveError> {
        solve(self.root.clone())
    }
}

fn parse_dimensions(line: &str) -> Result<(usize, usize), ParseError> {
    let invalid = || ParseError::InvalidDimensions(line.to_string());
    let (rows, columns) = line
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(invalid)?;
    let rows: usize = rows.parse().map_err(|_| invalid())?;
    let columns: usize = columns.parse().map_err(|_| invalid())?;
    if rows == 0 || columns == 0 {
        return Err(invalid());
    }
    Ok((rows, columns))
}

fn parse_vehicle(line: &str) -> Result<(String, Vehicle), ParseError> {
    let invalid = || ParseError::InvalidVehicle(line.to_string());
    let (name, length, row, column, direction) = line
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(invalid)?;
    let length: usize = length.parse().map_err(|_| invalid())?;
    if length == 0 {
        return Err(invalid());
    }
    let row: usize = row.parse().map_err(|_| invalid())?;
    let column: usize = column.parse().map_err(|_| invalid())?;
    let direction = match direction.to_ascii_lowercase().as_str() {
        "horizontal" | "h" => Direction::Horizontal,
        "vertical" | "v" => Direction::Vertical,
        _ => return Err(invalid()),
    };
    Ok((name.to_string(), Vehicle::new(row, column, length, direction)))
}

fn validate(
    rows: usize,
    columns: usize,
    vehicles: &Vehicles,
    names: &[String],
) -> Result<(), ParseError> {
    for (vehicle, name) in vehicles.iter().zip(names) {
        if vehicle.column_bound() >= columns || vehicle.row_bound() >= rows {
            return Err(ParseError::OutOfBounds {
                name: name.clone(),
                rows,
                columns,
            });
        }
    }
    for ((a, first), (b, second)) in vehicles.iter().zip(names).tuple_combinations() {
        if a.intersects(b) {
            return Err(ParseError::Overlap {
                first: first.clone(),
                second: second.clone(),
            });
        }
    }
    Ok(())
}
