/// Axis a vehicle is allowed to slide along. Fixed for the vehicle's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// A rectangular vehicle occupying `length` contiguous cells along its
/// direction, starting at (`row`, `column`). Values are immutable; "moving"
/// a vehicle produces a new one via [`Vehicle::shifted`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vehicle {
    row: usize,
    column: usize,
    length: usize,
    direction: Direction,
}

impl Vehicle {
    pub fn new(row: usize, column: usize, length: usize, direction: Direction) -> Vehicle {
        debug_assert!(length >= 1);
        Vehicle {
            row,
            column,
            length,
            direction,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Last column this vehicle occupies.
    pub fn column_bound(&self) -> usize {
        match self.direction {
            Direction::Horizontal => self.column + self.length - 1,
            Direction::Vertical => self.column,
        }
    }

    /// Last row this vehicle occupies.
    pub fn row_bound(&self) -> usize {
        match self.direction {
            Direction::Horizontal => self.row,
            Direction::Vertical => self.row + self.length - 1,
        }
    }

    /// Axis-aligned overlap test. Only used while validating a freshly
    /// loaded puzzle; the search relies on the occupancy grid instead.
    pub fn intersects(&self, other: &Vehicle) -> bool {
        !(other.column_bound() < self.column
            || other.column > self.column_bound()
            || other.row_bound() < self.row
            || other.row > self.row_bound())
    }

    /// A copy of this vehicle translated by `amount` cells along its own
    /// direction. Performs no bounds or collision checks; callers must
    /// validate the target cells first.
    pub fn shifted(&self, amount: isize) -> Vehicle {
        let mut moved = *self;
        match self.direction {
            Direction::Horizontal => moved.column = (moved.column as isize + amount) as usize,
            Direction::Vertical => moved.row = (moved.row as isize + amount) as usize,
        }
        moved
    }

    /// Cells occupied by this vehicle as (row, column), in axis order.
    #[auto_enums::auto_enum(Iterator)]
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        match self.direction {
            Direction::Horizontal => {
                let row = self.row;
                (self.column..=self.column_bound()).map(move |column| (row, column))
            }
            Direction::Vertical => {
                let column = self.column;
                (self.row..=self.row_bound()).map(move |row| (row, column))
            }
        }
    }
}
