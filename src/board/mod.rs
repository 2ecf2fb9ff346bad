pub mod frame;
pub mod growable_grid;
pub mod player;

use std::fmt;

pub use frame::Frame;
pub use growable_grid::GrowableGrid;
pub use player::{Cell, Player};

/// Side length of the square a fresh grid allocates around the origin.
pub const INITIAL_GRID_SIZE: i32 = 51;

/// Chebyshev distance from a stone within which empty cells become playable.
pub const FRONTIER_RADIUS: i32 = 2;

/// Stones in a row needed to win.
pub const WINNING_LENGTH: usize = 5;

/// A cell coordinate, in the same space as the grids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Action {
    pub x: i32,
    pub y: i32,
}

impl Action {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
