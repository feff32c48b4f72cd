// grid.rs - Cell and index types for the toggle grid

use std::fmt;

// Compile-time defaults (overridable from the command line)
pub const DEFAULT_GRID_SIZE: usize = 5;                       // 5x5 = 25 cells
pub const DEFAULT_INITIAL_ALIVE: &[usize] = &[0, 11, 23];     // In-range part of the historic 0,11,23,25,26,29,30,31 list
pub const MAX_GRID_SIZE: usize = 256;                         // Largest accepted edge length
pub const GRID_SELECTOR: &str = "#grid";                      // Sole write target for markup

/// Row-major position of a cell in the flat cell sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex(pub usize);

impl CellIndex {
    pub fn from_row_col(row: usize, col: usize, size: usize) -> Self {
        Self(row * size + col)
    }

    pub fn row(self, size: usize) -> usize {
        self.0 / size
    }

    pub fn col(self, size: usize) -> usize {
        self.0 % size
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Class markers carried by a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Cell,
    Alive,
}

impl Marker {
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Cell => "cell",
            Marker::Alive => "alive",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn toggled(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }

    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

/// Handle to one cell element, created dead when the grid is built.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    state: CellState,
    bound: bool,
}

impl Cell {
    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn has_marker(&self, marker: Marker) -> bool {
        match marker {
            Marker::Cell => true,
            Marker::Alive => self.state.is_alive(),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub(crate) fn bind(&mut self) {
        self.bound = true;
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Flips the alive marker and returns the state read back afterwards.
    pub(crate) fn toggle(&mut self) -> CellState {
        self.state = self.state.toggled();
        self.state
    }
}
