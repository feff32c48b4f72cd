use thiserror::Error;

/// Errors raised by the grid controller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Grid size is zero, or an initial alive index falls outside the grid.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// An operation ran before the state it depends on exists.
    #[error("{0}")]
    Precondition(&'static str),

    /// A click addressed a cell the grid does not have.
    #[error("given index ({index}) exceeds the grid of {cell_count} cells")]
    IndexOutOfRange { index: usize, cell_count: usize },
}
