use crate::grid::CellIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Clear,
    Fill,
    Checkerboard,
    Diagonal,
}

pub const PATTERNS: &[Pattern] = &[
    Pattern::Clear,
    Pattern::Fill,
    Pattern::Checkerboard,
    Pattern::Diagonal,
];

impl Pattern {
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Clear => "Clear All",
            Pattern::Fill => "Fill All",
            Pattern::Checkerboard => "Checkerboard",
            Pattern::Diagonal => "Diagonal",
        }
    }

    /// Cells this pattern sets alive on a `size x size` grid; every other cell ends up dead.
    pub fn alive_cells(self, size: usize) -> Vec<CellIndex> {
        let all = (0..size).flat_map(|row| (0..size).map(move |col| (row, col)));
        all.filter(|&(row, col)| match self {
            Pattern::Clear => false,
            Pattern::Fill => true,
            Pattern::Checkerboard => (row + col) % 2 == 0,
            Pattern::Diagonal => row == col,
        })
        .map(|(row, col)| CellIndex::from_row_col(row, col, size))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_cell_counts() {
        assert!(Pattern::Clear.alive_cells(5).is_empty());
        assert_eq!(Pattern::Fill.alive_cells(5).len(), 25);
        assert_eq!(Pattern::Checkerboard.alive_cells(5).len(), 13);
        assert_eq!(Pattern::Diagonal.alive_cells(5).len(), 5);
    }

    #[test]
    fn test_checkerboard_starts_alive_in_corner() {
        let cells = Pattern::Checkerboard.alive_cells(3);
        assert_eq!(
            cells,
            vec![CellIndex(0), CellIndex(2), CellIndex(4), CellIndex(6), CellIndex(8)]
        );
    }

    #[test]
    fn test_diagonal_indices() {
        let cells = Pattern::Diagonal.alive_cells(4);
        assert_eq!(cells, vec![CellIndex(0), CellIndex(5), CellIndex(10), CellIndex(15)]);
    }
}
