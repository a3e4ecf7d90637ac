use anyhow::{ensure, Result};

use crate::{Cell, PixelInt};

/// Board geometry: pixel extent of the display and the side of one square cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: PixelInt,
    height: PixelInt,
    cell_size: PixelInt,
}

impl Grid {
    pub fn new(width: PixelInt, height: PixelInt, cell_size: PixelInt) -> Result<Self> {
        ensure!(cell_size > 0, "cell size must be positive");
        ensure!(width > 0 && height > 0, "board size must be positive, got {}x{}", width, height);
        ensure!(
            width % cell_size == 0 && height % cell_size == 0,
            "board size {}x{} is not a multiple of the cell size {}",
            width, height, cell_size
        );

        Ok(Grid { width, height, cell_size })
    }

    pub fn columns(&self) -> i32 {
        (self.width / self.cell_size) as i32
    }

    pub fn rows(&self) -> i32 {
        (self.height / self.cell_size) as i32
    }

    pub fn cell_size(&self) -> PixelInt {
        self.cell_size
    }

    /// The cell containing the middle pixel of the board.
    pub fn center(&self) -> Cell {
        self.cell_at_pixel(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.columns()).contains(&cell.0) && (0..self.rows()).contains(&cell.1)
    }

    /// Toroidal wrap: any cell coordinate is folded back onto the board.
    pub fn wrap(&self, cell: Cell) -> Cell {
        (cell.0.rem_euclid(self.columns()), cell.1.rem_euclid(self.rows()))
    }

    /// Top-left pixel of a cell.
    pub fn to_pixels(&self, cell: Cell) -> (PixelInt, PixelInt) {
        let cell = self.wrap(cell);
        (cell.0 as PixelInt * self.cell_size, cell.1 as PixelInt * self.cell_size)
    }

    pub fn cell_at_pixel(&self, x: PixelInt, y: PixelInt) -> Cell {
        self.wrap(((x / self.cell_size) as i32, (y / self.cell_size) as i32))
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (columns, rows) = (self.columns(), self.rows());
        (0..rows).flat_map(move |y| (0..columns).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_grid() -> Grid {
        Grid::new(640, 480, 20).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let grid = default_grid();
        assert_eq!(grid.columns(), 32);
        assert_eq!(grid.rows(), 24);
        assert_eq!(grid.cells().count(), 32 * 24);
    }

    #[test]
    fn test_center_is_middle_pixel() {
        let grid = default_grid();
        assert_eq!(grid.center(), (16, 12));
        assert_eq!(grid.to_pixels(grid.center()), (320, 240));
    }

    #[test]
    fn test_wrap_both_edges() {
        let grid = default_grid();
        assert_eq!(grid.wrap((32, 5)), (0, 5));
        assert_eq!(grid.wrap((-1, 5)), (31, 5));
        assert_eq!(grid.wrap((3, 24)), (3, 0));
        assert_eq!(grid.wrap((3, -1)), (3, 23));
        assert_eq!(grid.wrap((7, 7)), (7, 7));
    }

    #[test]
    fn test_pixel_conversion() {
        let grid = default_grid();
        assert_eq!(grid.cell_at_pixel(620, 240), (31, 12));
        assert_eq!(grid.to_pixels((31, 12)), (620, 240));
        assert_eq!(grid.cell_at_pixel(19, 19), (0, 0));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        assert!(Grid::new(640, 480, 0).is_err());
        assert!(Grid::new(0, 480, 20).is_err());
        assert!(Grid::new(650, 480, 20).is_err());
        assert!(Grid::new(640, 490, 20).is_err());
    }
}
