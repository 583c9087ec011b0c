use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use log::debug;

use crate::paths::{Direction, GpioPaths};
use crate::{Error, Result};

/// Access to the pin control files.
///
/// The callers encode everything (pin number, direction, level) in the value
/// string; implementations only move text in and out of files.
pub trait PinControl {
    /// Write `value` and a newline to `path`, flush, and close it.
    fn set_pin(&mut self, path: &Path, value: &str) -> Result<()>;

    /// Open `path`, read a single raw byte, and close it.
    fn read_pin(&mut self, path: &Path) -> Result<u8>;
}

/// [`PinControl`] over the real filesystem.
///
/// Each call opens and closes the file, so the kernel sees every write
/// immediately and every read samples the pin afresh.
#[derive(Clone, Copy, Debug, Default)]
pub struct SysfsPins;

impl PinControl for SysfsPins {
    fn set_pin(&mut self, path: &Path, value: &str) -> Result<()> {
        debug!("writing {value:?} to {}", path.display());
        let mut file = File::create(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let line = format!("{value}\n");
        match file.write_all(line.as_bytes()) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::WriteZero => {
                return Err(Error::ShortWrite(path.to_path_buf()));
            }
            Err(source) => {
                return Err(Error::Write {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
        file.flush().map_err(|source| Error::Flush {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_pin(&mut self, path: &Path) -> Result<u8> {
        let mut file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut buf = [0u8; 1];
        let n = loop {
            match file.read(&mut buf) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(Error::Read {
                        path: path.to_path_buf(),
                        source,
                    });
                }
            }
        };
        if n == 0 {
            return Err(Error::EmptyRead(path.to_path_buf()));
        }
        debug!("read {:?} from {}", buf[0] as char, path.display());
        Ok(buf[0])
    }
}

/// Enable `pin` and set its direction.
///
/// Writes the pin number to `export`, then the direction to the pin's
/// `direction` file. Stops at the first failure.
pub fn export_pin<P: PinControl>(
    pins: &mut P,
    paths: &GpioPaths,
    pin: u8,
    direction: Direction,
) -> Result<()> {
    pins.set_pin(&paths.export(), &pin.to_string())?;
    pins.set_pin(&paths.direction(pin), direction.as_str())
}

/// Release `pin` back to the kernel.
pub fn unexport_pin<P: PinControl>(pins: &mut P, paths: &GpioPaths, pin: u8) -> Result<()> {
    pins.set_pin(&paths.unexport(), &pin.to_string())
}
