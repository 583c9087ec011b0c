use std::io;
use std::path::PathBuf;

/// Errors returned by pin file operations.
///
/// Every variant names the control file involved.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The control file could not be opened.
    #[error("could not open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the value failed.
    #[error("error writing to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The write transferred no bytes.
    #[error("no bytes written to {0}")]
    ShortWrite(PathBuf),

    /// Flushing the written value failed.
    #[error("error flushing {path}")]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the value failed.
    #[error("error reading from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was empty.
    #[error("no data read from {0}")]
    EmptyRead(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
