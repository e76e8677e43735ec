//! Error taxonomy for hostfile operations.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Supplied path resolves to a directory, not a file.
    #[error("path is a directory: {}", .0.display())]
    PathIsDirectory(PathBuf),

    /// Supplied path does not exist.
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// Stat of the supplied path failed for another reason.
    #[error("could not stat {}: {source}", .path.display())]
    Path { path: PathBuf, source: io::Error },

    /// Read or write of file contents failed after path validation.
    #[error("could not {op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
