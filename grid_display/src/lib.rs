// lib.rs - Clickable toggle grid: cells, controller, markup and egui front end

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod markup;
pub mod patterns;
pub mod ui;

pub use config::{CliArgs, GridConfig};
pub use controller::GridController;
pub use error::GridError;
pub use grid::{Cell, CellIndex, CellState, Marker};
