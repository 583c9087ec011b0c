use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use log::error;

use crate::paths::Level;
use crate::pin::PinControl;

/// Two-state output toggler, starting low.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blinker {
    level: Level,
}

impl Blinker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Flip to the other level and return it.
    pub fn advance(&mut self) -> Level {
        self.level = !self.level;
        self.level
    }

    /// Write the current level to `value`, wait `interval`, then flip.
    ///
    /// Write failures are logged and otherwise ignored; the next step writes
    /// the following level regardless.
    pub fn step<P: PinControl>(&mut self, pins: &mut P, value: &Path, interval: Duration) {
        if let Err(e) = pins.set_pin(value, self.level.as_str()) {
            error!("could not set LED {}: {e}", self.level);
        }
        thread::sleep(interval);
        self.advance();
    }

    /// Blink until `running` is cleared, returning the number of steps taken.
    pub fn run<P: PinControl>(
        &mut self,
        pins: &mut P,
        value: &Path,
        interval: Duration,
        running: &AtomicBool,
    ) -> u64 {
        let mut steps = 0;
        while running.load(Ordering::SeqCst) {
            self.step(pins, value, interval);
            steps += 1;
        }
        steps
    }
}
