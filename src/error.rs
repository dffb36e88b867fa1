use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DvError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    // Matches perror(3): "<path>: <reason>"
    #[error("{}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Table Length Mismatch: qwerty has {qwerty} entries, dvorak has {dvorak}")]
    TableLengthMismatch { qwerty: usize, dvorak: usize },

    #[error("Duplicate Entry: {layout} table repeats {byte:#04x} at positions {first} and {second}")]
    DuplicateEntry {
        layout: &'static str,
        byte: u8,
        first: usize,
        second: usize,
    },

    #[error("unknown mode flag: '{0}'")]
    UnknownMode(String),

    #[error("missing mode flag <-e|-d>, got: '{0}'")]
    MissingMode(String),

    #[error("usage: {0} <-e|-d> [file]")]
    Usage(String),

    /// Rendered clap error for option problems such as a missing value.
    #[error("{0}")]
    InvalidArguments(String),
}

impl DvError {
    /// Process exit status reported by the `dv` binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) | Self::TableLengthMismatch { .. } | Self::DuplicateEntry { .. } => 1,
            Self::UnknownMode(_) => 2,
            Self::MissingMode(_) => 3,
            Self::Usage(_) | Self::InvalidArguments(_) => 4,
            Self::Open { .. } => 5,
        }
    }
}

pub type DvResult<T> = Result<T, DvError>;
