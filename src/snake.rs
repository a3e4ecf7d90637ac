use std::collections::VecDeque;

use anyhow::Result;

use crate::grid::Grid;
use crate::render::{Draw, Palette, Surface};
use crate::Cell;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

pub struct MoveResult {
    pub new_head: Cell,
    pub old_tail: Option<Cell>,
}

pub struct Snake {
    start: Cell,
    initial_length: usize,
    positions: VecDeque<Cell>,
    length: usize,
    direction: Direction,
    next_direction: Option<Direction>,
    last: Option<Cell>,
}

impl Snake {
    /// A one-cell snake at `start` that will stretch out to `length` cells.
    pub fn new(start: Cell, direction: Direction, length: usize) -> Self {
        let length = length.max(1);
        Snake {
            start,
            initial_length: length,
            positions: VecDeque::from(vec![start]),
            length,
            direction,
            next_direction: None,
            last: None,
        }
    }

    pub fn positions(&self) -> &VecDeque<Cell> {
        &self.positions
    }

    pub fn head(&self) -> Cell {
        self.positions[0]
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    /// Tail cell vacated by the last move, still painted on screen.
    pub fn last(&self) -> Option<Cell> {
        self.last
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.positions.contains(&cell)
    }

    /// Queues a turn for the next move. Reversing straight into the neck is ignored.
    pub fn update_direction(&mut self, requested: Direction) {
        if requested != self.direction.opposite() {
            self.next_direction = Some(requested);
        }
    }

    pub fn move_step(&mut self, grid: &Grid) -> MoveResult {
        if let Some(dir) = self.next_direction.take() {
            self.direction = dir;
        }

        let (dx, dy) = self.direction.delta();
        let old_head = self.head();
        let new_head = grid.wrap((old_head.0 + dx, old_head.1 + dy));

        self.positions.push_front(new_head);

        self.last = if self.positions.len() > self.length {
            self.positions.pop_back()
        } else {
            None
        };

        MoveResult { new_head, old_tail: self.last }
    }

    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.positions.iter().skip(1).any(|pos| *pos == head)
    }

    /// Takes back the tail dropped by the last move so the body is one cell longer right away.
    pub fn grow(&mut self) {
        self.length += 1;
        if let Some(tail) = self.last.take() {
            self.positions.push_back(tail);
        }
    }

    pub fn reset(&mut self) {
        self.positions.clear();
        self.positions.push_back(self.start);
        self.length = self.initial_length;
        self.direction = Right;
        self.next_direction = None;
        self.last = None;
    }
}

impl Draw for Snake {
    fn draw(&self, surface: &mut dyn Surface, grid: &Grid, palette: &Palette) -> Result<()> {
        for pos in &self.positions {
            surface.fill_cell(grid, *pos, palette.snake)?;
        }

        if let Some(tail) = self.last() {
            surface.fill_cell(grid, tail, palette.background)?;
        }

        Ok(())
    }
}
