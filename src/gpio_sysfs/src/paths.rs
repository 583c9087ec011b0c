use std::fmt;
use std::ops::Not;
use std::path::{Path, PathBuf};

/// Where the kernel exposes the GPIO control files.
pub const SYSFS_GPIO_ROOT: &str = "/sys/class/gpio";

/// The control file layout under a sysfs GPIO root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GpioPaths {
    root: PathBuf,
}

impl GpioPaths {
    /// Lay out paths under an arbitrary root, e.g. a scratch directory in tests.
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        GpioPaths { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn export(&self) -> PathBuf {
        self.root.join("export")
    }

    pub fn unexport(&self) -> PathBuf {
        self.root.join("unexport")
    }

    pub fn pin_dir(&self, pin: u8) -> PathBuf {
        self.root.join(format!("gpio{pin}"))
    }

    pub fn direction(&self, pin: u8) -> PathBuf {
        self.pin_dir(pin).join("direction")
    }

    pub fn value(&self, pin: u8) -> PathBuf {
        self.pin_dir(pin).join("value")
    }
}

impl Default for GpioPaths {
    fn default() -> Self {
        GpioPaths::with_root(SYSFS_GPIO_ROOT)
    }
}

/// The direction written to a pin's `direction` file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An output level, as written to a pin's `value` file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Low => "0",
            Level::High => "1",
        }
    }
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let paths = GpioPaths::default();
        assert_eq!(paths.export(), Path::new("/sys/class/gpio/export"));
        assert_eq!(paths.unexport(), Path::new("/sys/class/gpio/unexport"));
        assert_eq!(
            paths.direction(17),
            Path::new("/sys/class/gpio/gpio17/direction")
        );
        assert_eq!(paths.value(4), Path::new("/sys/class/gpio/gpio4/value"));
    }

    #[test]
    fn custom_root() {
        let paths = GpioPaths::with_root("/tmp/fake");
        assert_eq!(paths.root(), Path::new("/tmp/fake"));
        assert_eq!(paths.value(4), Path::new("/tmp/fake/gpio4/value"));
    }

    #[test]
    fn level_strings() {
        assert_eq!(Level::default(), Level::Low);
        assert_eq!(Level::Low.as_str(), "0");
        assert_eq!(Level::High.to_string(), "1");
        assert_eq!(!Level::Low, Level::High);
        assert_eq!(!!Level::Low, Level::Low);
    }

    #[test]
    fn direction_strings() {
        assert_eq!(Direction::In.as_str(), "in");
        assert_eq!(Direction::Out.to_string(), "out");
    }
}
