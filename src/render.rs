use anyhow::Result;

use crate::grid::Grid;
use crate::{Cell, PixelInt};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub food: Color,
    pub snake: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color::rgb(0, 0, 0),
            food: Color::rgb(255, 0, 0),
            snake: Color::rgb(0, 255, 0),
        }
    }
}

/// A rectangle in display pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: PixelInt,
    pub y: PixelInt,
    pub width: PixelInt,
    pub height: PixelInt,
}

impl Rect {
    pub fn of_cell(grid: &Grid, cell: Cell) -> Self {
        let (x, y) = grid.to_pixels(cell);
        Rect { x, y, width: grid.cell_size(), height: grid.cell_size() }
    }
}

/// What the game needs from a display: paint rectangles, wipe, show the frame.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    fn clear(&mut self, color: Color) -> Result<()>;

    fn present(&mut self) -> Result<()>;

    fn fill_cell(&mut self, grid: &Grid, cell: Cell, color: Color) -> Result<()> {
        self.fill_rect(Rect::of_cell(grid, cell), color)
    }
}

/// Anything that knows how to paint itself on a [`Surface`].
pub trait Draw {
    fn draw(&self, surface: &mut dyn Surface, grid: &Grid, palette: &Palette) -> Result<()>;
}

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Op {
        Fill(Rect, Color),
        Clear(Color),
        Present,
    }

    /// In-memory surface that remembers every call, for tests.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn fills_of(&self, color: Color) -> Vec<Rect> {
            self.ops.iter()
                .filter_map(|op| match op {
                    Op::Fill(rect, c) if *c == color => Some(*rect),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
            self.ops.push(Op::Fill(rect, color));
            Ok(())
        }

        fn clear(&mut self, color: Color) -> Result<()> {
            self.ops.push(Op::Clear(color));
            Ok(())
        }

        fn present(&mut self) -> Result<()> {
            self.ops.push(Op::Present);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::{Op, RecordingSurface};
    use super::*;

    #[test]
    fn test_rect_of_cell() {
        let grid = Grid::new(640, 480, 20).unwrap();
        assert_eq!(Rect::of_cell(&grid, (31, 12)), Rect { x: 620, y: 240, width: 20, height: 20 });
    }

    #[test]
    fn test_fill_cell_goes_through_fill_rect() {
        let grid = Grid::new(640, 480, 20).unwrap();
        let mut surface = RecordingSurface::default();
        let red = Palette::default().food;

        surface.fill_cell(&grid, (1, 2), red).unwrap();

        assert_eq!(surface.ops, vec![Op::Fill(Rect { x: 20, y: 40, width: 20, height: 20 }, red)]);
    }
}
