//! Flat row-major cell storage with bounded or toroidal addressing

use thiserror::Error;

/// The eight (row, col) offsets surrounding a cell
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// State of a single grid position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// The opposite state
    pub fn toggled(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    fn weight(self) -> u8 {
        self.is_alive() as u8
    }
}

pub type GridResult<T> = Result<T, GridError>;

/// Error raised by grid addressing
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfRange {
        row: isize,
        col: isize,
        width: usize,
        height: usize,
    },
}

/// The cell field: dimensions, row-major buffer and wrap mode.
///
/// `cells.len() == width * height` holds after every public operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    wrap: bool,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(width: usize, height: usize, wrap: bool) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
            wrap,
        }
    }

    /// A 0x0 grid, the state before the first dimension report
    pub fn empty(wrap: bool) -> Self {
        Self::new(0, 0, wrap)
    }

    /// Fresh all-dead grid with new dimensions and the same wrap mode.
    /// Nothing from the current buffer is carried over.
    pub fn resized(&self, width: usize, height: usize) -> Self {
        Self::new(width, height, self.wrap)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable view of the buffer; a slice so the length cannot change
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Whether (row, col) lies inside the grid, ignoring wrap mode
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Resolve a coordinate to a buffer index.
    ///
    /// In wrap mode each axis is reduced independently into range, so one
    /// past an edge lands on the opposite edge. An empty grid has no cells
    /// to wrap onto and always fails.
    fn index(&self, row: isize, col: isize) -> GridResult<usize> {
        let out_of_range = GridError::OutOfRange {
            row,
            col,
            width: self.width,
            height: self.height,
        };
        if self.width == 0 || self.height == 0 {
            return Err(out_of_range);
        }

        let (r, c) = if self.wrap {
            (
                row.rem_euclid(self.height as isize) as usize,
                col.rem_euclid(self.width as isize) as usize,
            )
        } else if self.contains(row, col) {
            (row as usize, col as usize)
        } else {
            return Err(out_of_range);
        };

        Ok(r * self.width + c)
    }

    pub fn get(&self, row: isize, col: isize) -> GridResult<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, row: isize, col: isize, cell: Cell) -> GridResult<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Number of live cells among the eight surrounding positions.
    ///
    /// Positions off the edge of a bounded grid contribute nothing. On a
    /// wrapped grid narrower than three cells an offset can land back on
    /// (row, col) itself; such positions are skipped so a cell is never its
    /// own neighbor.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let (row, col) = (row as isize, col as isize);
        let own = self.index(row, col).ok();

        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| self.index(row + dr, col + dc).ok())
            .filter(|&idx| Some(idx) != own)
            .map(|idx| self.cells[idx].weight())
            .sum()
    }

    /// Same dimensions and wrap mode around a replacement buffer
    pub(crate) fn with_cells(&self, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), self.width * self.height);
        Self {
            width: self.width,
            height: self.height,
            cells,
            wrap: self.wrap,
        }
    }
}

#[cfg(test)]
impl Grid {
    /// Build a grid from text rows: `#` is alive, anything else dead
    pub(crate) fn parse(rows: &[&str], wrap: bool) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let cells: Vec<Cell> = rows
            .iter()
            .flat_map(|r| r.chars())
            .map(|ch| if ch == '#' { Cell::Alive } else { Cell::Dead })
            .collect();
        assert_eq!(cells.len(), width * height, "ragged test grid");
        Self { width, height, cells, wrap }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(7, 4, false);
        assert_eq!(grid.cells().len(), 28);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn resized_discards_content_and_keeps_wrap() {
        let mut grid = Grid::new(3, 3, true);
        grid.set(1, 1, Cell::Alive).unwrap();
        let grid = grid.resized(5, 2);
        assert_eq!((grid.width(), grid.height()), (5, 2));
        assert_eq!(grid.cells().len(), 10);
        assert_eq!(grid.live_count(), 0);
        assert!(grid.wrap());
    }

    #[test]
    fn bounded_get_rejects_outside_coordinates() {
        let grid = Grid::new(4, 3, false);
        let err = GridError::OutOfRange { row: 3, col: 0, width: 4, height: 3 };
        assert_eq!(grid.get(3, 0), Err(err));
        assert!(grid.get(-1, 0).is_err());
        assert!(grid.get(0, -1).is_err());
        assert!(grid.get(0, 4).is_err());
        assert_eq!(grid.get(2, 3), Ok(Cell::Dead));
    }

    #[test]
    fn bounded_set_rejects_outside_coordinates() {
        let mut grid = Grid::new(2, 2, false);
        assert!(grid.set(2, 0, Cell::Alive).is_err());
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn wrapped_access_crosses_to_opposite_edge() {
        let mut grid = Grid::new(5, 3, true);
        grid.set(-1, -1, Cell::Alive).unwrap();
        assert_eq!(grid.get(2, 4), Ok(Cell::Alive));

        grid.set(3, 5, Cell::Alive).unwrap();
        assert_eq!(grid.get(0, 0), Ok(Cell::Alive));
        assert_eq!(grid.live_count(), 2);
    }

    #[test]
    fn empty_grid_fails_even_when_wrapped() {
        let grid = Grid::empty(true);
        assert!(grid.get(0, 0).is_err());
        assert!(Grid::new(0, 5, true).get(1, 0).is_err());
    }

    #[test]
    fn error_message_names_coordinate_and_size() {
        let err = Grid::new(2, 2, false).get(5, -1).unwrap_err();
        assert_eq!(err.to_string(), "cell (5, -1) is outside the 2x2 grid");
    }

    #[test]
    fn bounded_corner_skips_missing_neighbors() {
        let grid = Grid::parse(&["###", "###", "###"], false);
        assert_eq!(grid.neighbor_count(0, 0), 3);
        assert_eq!(grid.neighbor_count(0, 1), 5);
        assert_eq!(grid.neighbor_count(1, 1), 8);
    }

    #[test]
    fn wrapped_3x3_sees_every_other_cell_once() {
        let expected = [(2, 2), (2, 0), (2, 1), (0, 2), (0, 1), (1, 2), (1, 0), (1, 1)];
        let mut grid = Grid::new(3, 3, true);
        grid.set(0, 0, Cell::Alive).unwrap();
        assert_eq!(grid.neighbor_count(0, 0), 0);

        for (n, &(row, col)) in expected.iter().enumerate() {
            grid.set(row, col, Cell::Alive).unwrap();
            assert_eq!(grid.neighbor_count(0, 0) as usize, n + 1);
        }
    }

    #[test]
    fn wrapped_neighbors_use_per_axis_arithmetic() {
        // 5 wide, 3 tall: the up-left neighbor of (0, 0) is (2, 4)
        let mut grid = Grid::new(5, 3, true);
        grid.set(2, 4, Cell::Alive).unwrap();
        assert_eq!(grid.neighbor_count(0, 0), 1);
        assert_eq!(grid.neighbor_count(1, 4), 1);
        assert_eq!(grid.neighbor_count(1, 1), 0);
    }

    #[test]
    fn single_wrapped_cell_is_not_its_own_neighbor() {
        let grid = Grid::parse(&["#"], true);
        assert_eq!(grid.neighbor_count(0, 0), 0);
    }

    proptest! {
        #[test]
        fn wrapped_get_matches_euclidean_reduction(
            width in 1..12usize,
            height in 1..12usize,
            row in -40..40isize,
            col in -40..40isize,
        ) {
            let mut grid = Grid::new(width, height, true);
            grid.set(row, col, Cell::Alive).unwrap();
            let r = row.rem_euclid(height as isize);
            let c = col.rem_euclid(width as isize);
            prop_assert_eq!(grid.get(r, c), Ok(Cell::Alive));
            prop_assert_eq!(grid.live_count(), 1);
        }
    }
}
