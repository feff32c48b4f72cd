// config.rs - Grid configuration and command-line overrides

use clap::Parser;

use crate::error::GridError;
use crate::grid::{DEFAULT_GRID_SIZE, DEFAULT_INITIAL_ALIVE, MAX_GRID_SIZE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub size: usize,                // Cells along each edge
    pub initial_alive: Vec<usize>,  // Row-major indices seeded on startup
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            initial_alive: DEFAULT_INITIAL_ALIVE.to_vec(),
        }
    }
}

impl GridConfig {
    /// `size²`, or `None` when it does not fit in a `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        self.size.checked_mul(self.size)
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.size == 0 {
            return Err(GridError::Configuration(
                "grid size must be at least 1".to_string(),
            ));
        }

        let cell_count = match self.cell_count() {
            Some(count) if self.size <= MAX_GRID_SIZE => count,
            _ => {
                return Err(GridError::Configuration(format!(
                    "grid size {} exceeds the maximum of {}",
                    self.size, MAX_GRID_SIZE
                )));
            }
        };

        if let Some(&index) = self.initial_alive.iter().find(|&&i| i >= cell_count) {
            return Err(GridError::Configuration(format!(
                "initial alive index {} exceeds the {}x{} grid ({} cells)",
                index, self.size, self.size, cell_count
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Clickable grid of toggle cells", long_about = None)]
pub struct CliArgs {
    /// Number of cells along each edge of the square grid.
    #[arg(
        short = 's',
        long = "size",
        value_name = "CELLS",
        default_value_t = DEFAULT_GRID_SIZE as u32,
        value_parser = clap::value_parser!(u32).range(1..=MAX_GRID_SIZE as i64)
    )]
    pub size: u32,

    /// Row-major indices of the cells seeded alive, comma separated (for example 0,11,23).
    #[arg(short = 'a', long = "alive", value_name = "INDICES", value_delimiter = ',')]
    pub alive: Option<Vec<usize>>,
}

impl CliArgs {
    pub fn into_config(self) -> Result<GridConfig, GridError> {
        let config = GridConfig {
            size: self.size as usize,
            initial_alive: self
                .alive
                .unwrap_or_else(|| DEFAULT_INITIAL_ALIVE.to_vec()),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GridConfig::default();
        assert_eq!(config.size, 5);
        assert_eq!(config.cell_count(), Some(25));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = GridConfig { size: 0, initial_alive: vec![] };
        assert!(matches!(config.validate(), Err(GridError::Configuration(_))));
    }

    #[test]
    fn test_index_one_past_last_rejected() {
        let config = GridConfig { size: 5, initial_alive: vec![0, 25] };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GridError::Configuration(ref msg) if msg.contains("25")));
    }

    #[test]
    fn test_historic_seed_list_rejected_for_5x5() {
        // 25, 26, 29, 30 and 31 all lie outside a 25-cell grid
        let config = GridConfig {
            size: 5,
            initial_alive: vec![0, 11, 23, 25, 26, 29, 30, 31],
        };
        assert!(config.validate().is_err());

        let config = GridConfig { size: 6, ..config };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        for size in [MAX_GRID_SIZE + 1, 1 << 20, usize::MAX] {
            let config = GridConfig { size, initial_alive: vec![] };
            assert!(matches!(config.validate(), Err(GridError::Configuration(_))), "size {}", size);
        }

        let config = GridConfig { size: MAX_GRID_SIZE, initial_alive: vec![MAX_GRID_SIZE * MAX_GRID_SIZE - 1] };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_cell_count_overflow_is_none() {
        let config = GridConfig { size: usize::MAX, initial_alive: vec![] };
        assert_eq!(config.cell_count(), None);
    }

    #[test]
    fn test_cli_size_bounds() {
        let too_big = (MAX_GRID_SIZE + 1).to_string();
        for size in ["0", too_big.as_str(), "4294967296"] {
            assert!(CliArgs::try_parse_from(["grid_display", "--size", size]).is_err(), "size {}", size);
        }

        let max = MAX_GRID_SIZE.to_string();
        let args = CliArgs::try_parse_from(["grid_display", "--size", max.as_str()]).unwrap();
        assert_eq!(args.into_config().unwrap().size, MAX_GRID_SIZE);
    }

    #[test]
    fn test_cli_defaults() {
        let args = CliArgs::try_parse_from(["grid_display"]).unwrap();
        assert_eq!(args.into_config().unwrap(), GridConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs::try_parse_from(["grid_display", "--size", "4", "--alive", "3,5,15"]).unwrap();
        let config = args.into_config().unwrap();
        assert_eq!(config.size, 4);
        assert_eq!(config.initial_alive, vec![3, 5, 15]);
    }

    #[test]
    fn test_cli_out_of_range_seed_rejected() {
        let args = CliArgs::try_parse_from(["grid_display", "-s", "2", "-a", "4"]).unwrap();
        assert!(matches!(args.into_config(), Err(GridError::Configuration(_))));
    }
}
