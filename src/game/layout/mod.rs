
const SINGLE_ROW_MAX_OPTIONS: usize = 5;
const MAX_COLUMNS: usize = 6;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridDimensions {
    fn default() -> Self {
        GridDimensions { rows: 1, cols: 1 }
    }
}

impl GridDimensions {
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    // An empty option list keeps whatever grid was there before
    pub fn fit(&mut self, num_options: usize) {
        if let Some(dimensions) = compute_grid_dimensions(num_options) {
            *self = dimensions;
        }
    }
}

/// Picks a roughly square grid for `num_options` cells.
///
/// Up to five options sit on a single row, and from 36 options on the grid
/// is capped at six columns and grows downward. Returns `None` for zero.
pub fn compute_grid_dimensions(num_options: usize) -> Option<GridDimensions> {
    if num_options == 0 {
        return None;
    }

    if num_options <= SINGLE_ROW_MAX_OPTIONS {
        return Some(GridDimensions {
            rows: 1,
            cols: num_options,
        });
    }

    if num_options >= MAX_COLUMNS * MAX_COLUMNS {
        let cols = MAX_COLUMNS;
        let rows = (num_options + cols - 1) / cols;
        return Some(GridDimensions { rows, cols });
    }

    let mut cols = 1;
    while cols * cols < num_options {
        cols += 1;
    }

    let mut rows = cols;
    while !(cols * rows == num_options
        || cols * (rows - 1) < num_options
        || cols - rows >= 3)
    {
        rows -= 1;
    }

    Some(GridDimensions { rows, cols })
}
