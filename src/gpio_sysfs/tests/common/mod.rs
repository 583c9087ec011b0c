#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gpio_sysfs::{Error, PinControl, Result};

pub const SWITCH_VALUE: &str = "/fake/gpio17/value";
pub const LED_VALUE: &str = "/fake/gpio4/value";

/// A scripted stand-in for the sysfs files.
///
/// Reads are served from a queue of bytes and injected failures. Once the
/// queue is drained, or the write limit is reached, the running flag is
/// cleared so loops under test finish their current cycle and stop.
pub struct FakePins {
    reads: VecDeque<Option<u8>>,
    pub read_paths: Vec<PathBuf>,
    pub writes: Vec<(PathBuf, String)>,
    write_attempts: usize,
    write_limit: Option<usize>,
    fail_writes: bool,
    running: Arc<AtomicBool>,
}

impl FakePins {
    pub fn new() -> Self {
        FakePins {
            reads: VecDeque::new(),
            read_paths: Vec::new(),
            writes: Vec::new(),
            write_attempts: 0,
            write_limit: None,
            fail_writes: false,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn with_reads(bytes: &[u8]) -> Self {
        let mut pins = FakePins::new();
        pins.push_reads(bytes);
        pins
    }

    pub fn push_reads(&mut self, bytes: &[u8]) {
        self.reads.extend(bytes.iter().copied().map(Some));
    }

    pub fn push_read_failure(&mut self) {
        self.reads.push_back(None);
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn stop_after_writes(mut self, n: usize) -> Self {
        self.write_limit = Some(n);
        self
    }

    pub fn running(&self) -> Arc<AtomicBool> {
        self.running.clone()
    }

    pub fn reads_left(&self) -> usize {
        self.reads.len()
    }

    pub fn write_attempts(&self) -> usize {
        self.write_attempts
    }

    /// Values successfully written to `path`, newline stripped.
    pub fn written_to(&self, path: &str) -> Vec<&str> {
        self.writes
            .iter()
            .filter(|(p, _)| p == Path::new(path))
            .map(|(_, v)| v.trim_end_matches('\n'))
            .collect()
    }
}

impl PinControl for FakePins {
    fn set_pin(&mut self, path: &Path, value: &str) -> Result<()> {
        self.write_attempts += 1;
        if self.write_limit == Some(self.write_attempts) {
            self.running.store(false, Ordering::SeqCst);
        }
        if self.fail_writes {
            return Err(Error::Write {
                path: path.to_path_buf(),
                source: io::Error::other("injected write failure"),
            });
        }
        self.writes.push((path.to_path_buf(), format!("{value}\n")));
        Ok(())
    }

    fn read_pin(&mut self, path: &Path) -> Result<u8> {
        self.read_paths.push(path.to_path_buf());
        let step = self.reads.pop_front();
        if self.reads.is_empty() && self.write_limit.is_none() {
            self.running.store(false, Ordering::SeqCst);
        }
        match step {
            Some(Some(byte)) => Ok(byte),
            Some(None) => Err(Error::Read {
                path: path.to_path_buf(),
                source: io::Error::other("injected read failure"),
            }),
            None => Err(Error::EmptyRead(path.to_path_buf())),
        }
    }
}

/// Ten identical samples.
pub fn steady(byte: u8) -> [u8; 10] {
    [byte; 10]
}
