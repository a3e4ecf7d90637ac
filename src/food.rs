use std::collections::HashSet;

use anyhow::Result;
use rand::Rng;

use crate::grid::Grid;
use crate::render::{Draw, Palette, Surface};
use crate::Cell;

pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new(position: Cell) -> Self {
        Food { position }
    }

    /// Food somewhere on the board that no forbidden cell covers.
    pub fn spawn<'a, R, I>(grid: &Grid, forbidden: I, rng: &mut R) -> Self
    where
        R: Rng,
        I: IntoIterator<Item = &'a Cell>,
    {
        let mut food = Food::new(grid.center());
        food.randomize_position(grid, forbidden, rng);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Rejection-samples uniformly random cells until one is not forbidden.
    ///
    /// Returns `None`, leaving the food where it was, when the forbidden cells
    /// already cover the whole board.
    pub fn randomize_position<'a, R, I>(&mut self, grid: &Grid, forbidden: I, rng: &mut R) -> Option<Cell>
    where
        R: Rng,
        I: IntoIterator<Item = &'a Cell>,
    {
        let forbidden: HashSet<Cell> = forbidden.into_iter()
            .copied()
            .filter(|cell| grid.contains(*cell))
            .collect();

        if grid.cells().all(|cell| forbidden.contains(&cell)) {
            return None;
        }

        loop {
            let candidate = (rng.gen_range(0..grid.columns()), rng.gen_range(0..grid.rows()));
            if !forbidden.contains(&candidate) {
                self.position = candidate;
                return Some(candidate);
            }
        }
    }
}

impl Draw for Food {
    fn draw(&self, surface: &mut dyn Surface, grid: &Grid, palette: &Palette) -> Result<()> {
        surface.fill_cell(grid, self.position, palette.food)
    }
}
