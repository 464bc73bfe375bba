use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading word lists.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open word list `{}`", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read word list at line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
