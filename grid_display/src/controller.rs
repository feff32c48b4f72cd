// controller.rs - Owns the cells, their click bindings and the alive set

use std::collections::BTreeSet;
use std::fmt;

use crate::config::GridConfig;
use crate::error::GridError;
use crate::grid::{Cell, CellIndex, CellState, GRID_SELECTOR, Marker};
use crate::markup::{Container, build_markup, render_markup};
use crate::patterns::Pattern;

const ERR_NOT_BUILT: &str = "grid has not been built";
const ERR_NOT_BOUND: &str = "click handlers are not bound";

pub struct GridController {
    config: GridConfig,
    container: Container,
    cell_count: usize,         // size², checked when the config is accepted
    cells: Option<Vec<Cell>>,  // None until build_grid runs
    alive: BTreeSet<CellIndex>,
}

impl GridController {
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        let cell_count = config.cell_count().ok_or_else(|| {
            GridError::Configuration(format!("grid size {} is too large", config.size))
        })?;
        Ok(Self {
            config,
            cell_count,
            container: Container::new(GRID_SELECTOR),
            cells: None,
            alive: BTreeSet::new(),
        })
    }

    // Host ready: build, bind, then seed
    pub fn setup(&mut self) -> Result<(), GridError> {
        self.build_grid();
        let bound = self.bind_click_handlers()?;
        let seed = self.config.initial_alive.clone();
        self.apply_initial_alive(&seed)?;
        log::info!(
            "Grid ready: {} cells bound, {} seeded alive",
            bound,
            self.alive.len()
        );
        Ok(())
    }

    pub fn build_grid(&mut self) {
        let size = self.config.size;
        self.container.replace_content(build_markup(self.cell_count));
        self.cells = Some(vec![Cell::default(); self.cell_count]);
        self.alive.clear();
        log::debug!("Built {}x{} grid into {}", size, size, self.container.selector());
    }

    pub fn bind_click_handlers(&mut self) -> Result<usize, GridError> {
        let cells = self.cells.as_mut().ok_or(GridError::Precondition(ERR_NOT_BUILT))?;
        for cell in cells.iter_mut() {
            cell.bind();
        }
        Ok(cells.len())
    }

    pub fn click(&mut self, index: CellIndex) -> Result<CellState, GridError> {
        let cells = self.cells.as_mut().ok_or(GridError::Precondition(ERR_NOT_BUILT))?;
        let cell_count = cells.len();
        let cell = cells.get_mut(index.0).ok_or(GridError::IndexOutOfRange {
            index: index.0,
            cell_count,
        })?;
        if !cell.is_bound() {
            return Err(GridError::Precondition(ERR_NOT_BOUND));
        }

        let state = cell.toggle();
        if cell.has_marker(Marker::Alive) {
            self.alive.insert(index);
        } else {
            self.alive.remove(&index);
        }
        log::debug!("Cell {} toggled to {:?}", index, state);

        self.refresh_container();
        Ok(state)
    }

    /// Marks each listed cell alive. Every index is checked before any cell changes.
    pub fn apply_initial_alive(&mut self, indices: &[usize]) -> Result<(), GridError> {
        let size = self.config.size;
        let cells = self.cells.as_mut().ok_or(GridError::Precondition(ERR_NOT_BUILT))?;
        let cell_count = cells.len();

        if let Some(&index) = indices.iter().find(|&&i| i >= cell_count) {
            log::error!("Rejected initial alive index {} for {} cells", index, cell_count);
            return Err(GridError::Configuration(format!(
                "initial alive index {} exceeds the {}x{} grid ({} cells)",
                index, size, size, cell_count
            )));
        }

        for &index in indices {
            cells[index].set_state(CellState::Alive);
            self.alive.insert(CellIndex(index));
        }

        self.refresh_container();
        Ok(())
    }

    pub fn apply_pattern(&mut self, pattern: Pattern) -> Result<(), GridError> {
        let size = self.config.size;
        let cells = self.cells.as_mut().ok_or(GridError::Precondition(ERR_NOT_BUILT))?;

        for cell in cells.iter_mut() {
            cell.set_state(CellState::Dead);
        }
        self.alive.clear();

        for index in pattern.alive_cells(size) {
            cells[index.0].set_state(CellState::Alive);
            self.alive.insert(index);
        }
        log::info!("Applied pattern {}", pattern.name());

        self.refresh_container();
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), GridError> {
        self.apply_pattern(Pattern::Clear)
    }

    pub fn reset(&mut self) -> Result<(), GridError> {
        log::info!("Resetting grid");
        self.setup()
    }

    pub fn alive_indices(&self) -> &BTreeSet<CellIndex> {
        &self.alive
    }

    pub fn is_alive(&self, index: CellIndex) -> bool {
        self.cell(index).is_some_and(|c| c.has_marker(Marker::Alive))
    }

    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.as_ref()?.get(index.0)
    }

    pub fn cells(&self) -> &[Cell] {
        self.cells.as_deref().unwrap_or(&[])
    }

    pub fn is_built(&self) -> bool {
        self.cells.is_some()
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    pub fn cell_count(&self) -> usize {
        self.cells().len()
    }

    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    pub fn dead_count(&self) -> usize {
        self.cell_count() - self.alive_count()
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    fn refresh_container(&mut self) {
        let html = render_markup(self.cells());
        self.container.replace_content(html);
    }
}

impl fmt::Display for GridController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid size is {} x {} cells.", self.config.size, self.config.size)
    }
}
