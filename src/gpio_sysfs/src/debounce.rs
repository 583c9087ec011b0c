//! Debounced switch sampling.
//!
//! A switch is only classified when every sample in a full window agrees.
//! Mixed windows are treated as bounce and leave the LED alone.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use log::{debug, error, warn};

use crate::paths::Level;
use crate::pin::PinControl;
use crate::Result;

/// Number of samples that must agree before the switch state is accepted.
pub const SAMPLE_WINDOW: usize = 10;

/// The debounced state of the switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchState {
    Pressed,
    Released,
}

impl SwitchState {
    /// The LED level mirroring this state.
    pub fn level(self) -> Level {
        match self {
            SwitchState::Pressed => Level::High,
            SwitchState::Released => Level::Low,
        }
    }

    pub fn notice(self) -> &'static str {
        match self {
            SwitchState::Pressed => "Switch pressed!",
            SwitchState::Released => "Switch released!",
        }
    }
}

/// The result of one sampling cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    Pressed,
    Released,
    /// The window was mixed, so nothing was written.
    Bouncing,
    /// A sample could not be read and the cycle was dropped.
    SampleFailed,
}

impl From<SwitchState> for CycleOutcome {
    fn from(state: SwitchState) -> Self {
        match state {
            SwitchState::Pressed => CycleOutcome::Pressed,
            SwitchState::Released => CycleOutcome::Released,
        }
    }
}

/// The most recent full window of switch samples and its tally.
///
/// Each cycle overwrites the whole window rather than sliding it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebounceWindow {
    samples: [u8; SAMPLE_WINDOW],
    high_count: usize,
    low_count: usize,
}

impl DebounceWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// A window preloaded with samples, already tallied.
    pub fn from_samples(samples: [u8; SAMPLE_WINDOW]) -> Self {
        let mut window = DebounceWindow {
            samples,
            ..Default::default()
        };
        window.tally();
        window
    }

    pub fn samples(&self) -> &[u8; SAMPLE_WINDOW] {
        &self.samples
    }

    pub fn high_count(&self) -> usize {
        self.high_count
    }

    pub fn low_count(&self) -> usize {
        self.low_count
    }

    /// Read a full window of samples from `path`, one open/read/close each.
    ///
    /// Each byte is stored as its offset from `b'0'`. The first failed read
    /// aborts the fill and leaves the tally from the previous cycle in place.
    pub fn fill<P: PinControl>(&mut self, pins: &mut P, path: &Path) -> Result<()> {
        for slot in self.samples.iter_mut() {
            let byte = pins.read_pin(path)?;
            *slot = byte.wrapping_sub(b'0');
            if *slot > 1 {
                debug!("unexpected byte {byte:#04x} from {}, counted as low", path.display());
            }
        }
        Ok(())
    }

    /// Recount the window from scratch.
    ///
    /// Anything other than 1 counts as low, including bytes that were not
    /// '0' in the first place.
    pub fn tally(&mut self) {
        self.high_count = self.samples.iter().filter(|&&s| s == 1).count();
        self.low_count = SAMPLE_WINDOW - self.high_count;
    }

    /// Classify a tallied window, or `None` if the samples disagree.
    pub fn classify(&self) -> Option<SwitchState> {
        if self.high_count == SAMPLE_WINDOW {
            Some(SwitchState::Pressed)
        } else if self.low_count == SAMPLE_WINDOW {
            Some(SwitchState::Released)
        } else {
            None
        }
    }
}

/// Run one sampling cycle: fill the window, classify it, and drive the LED.
///
/// A failed LED write is logged but does not change the outcome.
pub fn poll_once<P: PinControl>(
    pins: &mut P,
    window: &mut DebounceWindow,
    switch_value: &Path,
    led_value: &Path,
) -> CycleOutcome {
    if let Err(e) = window.fill(pins, switch_value) {
        warn!("could not read switch values: {e}");
        return CycleOutcome::SampleFailed;
    }
    window.tally();
    let Some(state) = window.classify() else {
        return CycleOutcome::Bouncing;
    };
    println!("{}", state.notice());
    if let Err(e) = pins.set_pin(led_value, state.level().as_str()) {
        error!("could not write LED value: {e}");
    }
    state.into()
}

/// Poll the switch until `running` is cleared, returning the number of cycles run.
///
/// `poll_interval` is slept between cycles; zero polls back to back.
pub fn run<P: PinControl>(
    pins: &mut P,
    window: &mut DebounceWindow,
    switch_value: &Path,
    led_value: &Path,
    poll_interval: Duration,
    running: &AtomicBool,
) -> u64 {
    let mut cycles = 0;
    while running.load(Ordering::SeqCst) {
        poll_once(pins, window, switch_value, led_value);
        cycles += 1;
        if !poll_interval.is_zero() {
            thread::sleep(poll_interval);
        }
    }
    cycles
}
