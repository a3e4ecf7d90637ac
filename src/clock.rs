use std::{thread::sleep, time::{Duration, Instant}};

/// Paces the game loop at a fixed number of ticks per second.
pub struct Clock {
    period: Duration,
    last_tick: Option<Instant>,
}

impl Clock {
    pub fn new(ticks_per_second: u32) -> Self {
        Clock { period: Duration::from_secs(1) / ticks_per_second.max(1), last_tick: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Blocks until one period has passed since the previous call, returns the time actually elapsed.
    /// The first call returns immediately.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();

        let elapsed = match self.last_tick {
            Some(last) => {
                let elapsed = now.duration_since(last);
                if let Some(remaining) = self.period.checked_sub(elapsed) {
                    sleep(remaining);
                }
                last.elapsed()
            }
            None => Duration::ZERO,
        };

        self.last_tick = Some(Instant::now());
        elapsed
    }
}
