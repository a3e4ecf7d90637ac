use anyhow::{ensure, Result};
use crossterm::event::KeyEvent;
use log::{debug, info, trace, warn};
use rand::Rng;

use crate::clock::Clock;
use crate::food::Food;
use crate::grid::Grid;
use crate::input::{command_for, Command};
use crate::render::{Draw, Palette, Surface};
use crate::snake::{Direction::Right, Snake};
use crate::term::TermManager;

pub const DEFAULT_TICKS_PER_SECOND: u32 = 10;
const INITIAL_SNAKE_LENGTH: usize = 1;

/// Everything the game needs to know up front.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub grid: Grid,
    pub ticks_per_second: u32,
    pub palette: Palette,
}

impl GameConfig {
    pub fn new(grid: Grid, ticks_per_second: u32) -> Result<Self> {
        ensure!(ticks_per_second > 0, "speed must be at least one tick per second");
        Ok(GameConfig { grid, ticks_per_second, palette: Palette::default() })
    }
}

/// What happened to the snake during one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    Crashed,
}

pub struct SnakeGame<R: Rng> {
    config: GameConfig,
    snake: Snake,
    food: Food,
    rng: R,
}

impl<R: Rng> SnakeGame<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let snake = Snake::new(config.grid.center(), Right, INITIAL_SNAKE_LENGTH);
        let food = Food::spawn(&config.grid, snake.positions(), &mut rng);
        SnakeGame { config, snake, food, rng }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Runs until the player quits. The only way out short of an error.
    pub fn run(&mut self, term: &mut TermManager) -> Result<()> {
        let mut clock = Clock::new(self.config.ticks_per_second);
        debug!("Ticking every {:?}", clock.period());

        term.clear(self.config.palette.background)?;
        self.render(term)?;

        loop {
            let elapsed = clock.tick();
            trace!("Tick after {:?}", elapsed);

            let keys = term.read_key_events_queue()?;
            if self.tick(&keys, term)? == Command::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }
    }

    /// One full iteration: input, update, render.
    pub fn tick(&mut self, keys: &[KeyEvent], surface: &mut dyn Surface) -> Result<Command> {
        if self.handle_keys(keys) == Command::Quit {
            return Ok(Command::Quit);
        }

        if self.step() == TickOutcome::Crashed {
            surface.clear(self.config.palette.background)?;
        }
        self.render(surface)?;

        Ok(Command::Ignore)
    }

    /// Feeds queued key presses to the snake. Stops at the first quit.
    pub fn handle_keys(&mut self, keys: &[KeyEvent]) -> Command {
        for key in keys {
            match command_for(key) {
                Command::Turn(dir) => self.snake.update_direction(dir),
                Command::Quit => return Command::Quit,
                Command::Ignore => {}
            }
        }

        Command::Ignore
    }

    /// Advances the world by one tick: move, then eat or crash.
    pub fn step(&mut self) -> TickOutcome {
        let grid = self.config.grid;
        let res = self.snake.move_step(&grid);
        trace!("Head at {:?} going {:?}, vacated {:?}", res.new_head, self.snake.get_direction(), res.old_tail);

        if res.new_head == self.food.position() {
            self.snake.grow();
            if self.food.randomize_position(&grid, self.snake.positions(), &mut self.rng).is_none() {
                warn!("No free cell left for food, leaving it at {:?}", self.food.position());
            }
            debug!("Ate food, length is now {}", self.snake.length());
            TickOutcome::Ate
        } else if self.snake.collides_with_self() {
            info!("Snake ran into itself at length {}", self.snake.length());
            // Food stays put, even if it now sits on the restart cell
            self.snake.reset();
            if self.snake.occupies(self.food.position()) {
                debug!("Food at {:?} is under the restarted snake", self.food.position());
            }
            TickOutcome::Crashed
        } else {
            TickOutcome::Moved
        }
    }

    /// Paints food, snake and the erased tail, then shows the frame.
    pub fn render(&self, surface: &mut dyn Surface) -> Result<()> {
        let GameConfig { grid, palette, .. } = &self.config;

        self.food.draw(surface, grid, palette)?;
        self.snake.draw(surface, grid, palette)?;
        surface.present()
    }
}
