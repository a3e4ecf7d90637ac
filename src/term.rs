use crate::grid::Grid;
use crate::render::{self, Rect, Surface};
use crate::TermInt;
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{ensure, Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

/// Every board cell is two terminal columns wide so it comes out roughly square.
const COLUMNS_PER_CELL: u32 = 2;

/// Owns the terminal for the lifetime of the game. Dropping it gives the terminal back.
pub struct TermManager {
    stdout: Stdout,
    cell_size: u32,
    origin: (TermInt, TermInt),
    active: bool,
}

impl TermManager {
    pub fn acquire(grid: &Grid) -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        let needed = (grid.columns() as u32 * COLUMNS_PER_CELL, grid.rows() as u32);

        ensure!(
            width as u32 >= needed.0 && height as u32 >= needed.1,
            "terminal is {}x{}, the board needs at least {}x{}",
            width, height, needed.0, needed.1
        );

        let origin = (
            ((width as u32 - needed.0) / 2) as TermInt,
            ((height as u32 - needed.1) / 2) as TermInt,
        );

        let mut term = TermManager { stdout: stdout(), cell_size: grid.cell_size(), origin, active: false };
        term.setup()?;
        Ok(term)
    }

    fn setup(&mut self) -> Result<()> {
        // Flag first so a half-finished setup is still undone on drop
        self.active = true;
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        self.set_raw_mode(true)?;
        self.set_cursor_visibility(false)?;
        self.set_cursor_blink(false)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        self.set_raw_mode(false)?;
        self.set_cursor_visibility(true)?;
        self.set_cursor_blink(true)?;
        execute!(self.stdout, style::ResetColor, LeaveAlternateScreen).context("Error leaving alt screen")?;
        Ok(())
    }

    /// Everything typed since the last call, without blocking.
    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::ZERO).context("Error polling input")? {
            if let Event::Key(ev) = read().context("Error reading input")? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    ///////////////////////////////////////////////////////////////////////////

    /// Terminal character cells covered by a pixel rectangle, as (column, row, columns, rows).
    fn to_term_area(&self, rect: Rect) -> (TermInt, TermInt, TermInt, TermInt) {
        let scale_x = |px: u32| px * COLUMNS_PER_CELL / self.cell_size;
        let scale_y = |px: u32| px / self.cell_size;

        let (x0, y0) = (scale_x(rect.x), scale_y(rect.y));
        let x1 = scale_x(rect.x + rect.width).max(x0 + 1);
        let y1 = scale_y(rect.y + rect.height).max(y0 + 1);

        (
            self.origin.0 + x0 as TermInt,
            self.origin.1 + y0 as TermInt,
            (x1 - x0) as TermInt,
            (y1 - y0) as TermInt,
        )
    }

    fn set_raw_mode(&self, option: bool) -> Result<()> {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.context("Error setting raw mode")
    }

    fn set_cursor_blink(&mut self, option: bool) -> Result<()> {
        let res = if option {
            execute!(self.stdout, cursor::EnableBlinking)
        } else {
            execute!(self.stdout, cursor::DisableBlinking)
        };

        res.context("Error setting cursor blink")
    }

    fn set_cursor_visibility(&mut self, option: bool) -> Result<()> {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.context("Error setting cursor visibility")
    }
}

impl Surface for TermManager {
    fn fill_rect(&mut self, rect: Rect, color: render::Color) -> Result<()> {
        let (x, y, width, height) = self.to_term_area(rect);
        let blank = " ".repeat(width as usize);

        queue!(self.stdout, style::SetBackgroundColor(to_term_color(color))).context("Error setting color")?;
        for row in y..y + height {
            queue!(self.stdout, cursor::MoveTo(x, row), style::Print(&blank)).context("Error drawing")?;
        }

        Ok(())
    }

    fn clear(&mut self, color: render::Color) -> Result<()> {
        queue!(self.stdout, style::SetBackgroundColor(to_term_color(color)), terminal::Clear(ClearType::All))
            .context("Error clearing")
    }

    fn present(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::error!("Could not restore the terminal: {:#}", e);
        }
    }
}

fn to_term_color(color: render::Color) -> style::Color {
    style::Color::Rgb { r: color.r, g: color.g, b: color.b }
}
