//! Drive Raspberry Pi GPIO pins through the `/sys/class/gpio` files.
//!
//! Every pin operation is a short open/write/close (or open/read/close) of a
//! text file, performed through the [`PinControl`] trait so the loops can be
//! run against a fake in tests.

pub mod blink;
pub mod debounce;
mod error;
pub mod paths;
pub mod pin;

pub use blink::Blinker;
pub use debounce::{CycleOutcome, DebounceWindow, SAMPLE_WINDOW, SwitchState};
pub use error::{Error, Result};
pub use paths::{Direction, GpioPaths, Level, SYSFS_GPIO_ROOT};
pub use pin::{PinControl, SysfsPins, export_pin, unexport_pin};
