//! Output error types.

use std::io;
use thiserror::Error;

/// Errors that can occur while streaming combination lines.
///
/// Both variants record how many complete lines reached the underlying
/// writer before the failure. A line that was only partly written is not
/// counted.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed writing combination line {line}: {source}")]
    Write {
        /// One-based number of the line being written
        line: u64,
        delivered: u64,
        #[source]
        source: io::Error,
    },

    #[error("Failed flushing output: {source}")]
    Flush {
        delivered: u64,
        #[source]
        source: io::Error,
    },
}

impl OutputError {
    /// The underlying I/O failure.
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Write { source, .. } | Self::Flush { source, .. } => source,
        }
    }

    /// Complete lines the writer accepted before the failure.
    pub fn delivered(&self) -> u64 {
        match self {
            Self::Write { delivered, .. } | Self::Flush { delivered, .. } => *delivered,
        }
    }

    /// Whether the reader on the other end went away.
    pub fn is_broken_pipe(&self) -> bool {
        self.io_error().kind() == io::ErrorKind::BrokenPipe
    }
}
