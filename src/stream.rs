use crate::error::{DvError, DvResult};
use crate::transcoder::{Direction, Transcoder};
use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::PathBuf;
use tracing::debug;

pub const CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `None` and `"-"` both select standard input.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Self::Stdin,
            Some(path) => Self::File(PathBuf::from(path)),
        }
    }

    pub fn open(&self) -> DvResult<Box<dyn Read>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| DvError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(file))
            }
        }
    }
}

/// Copies `reader` to `writer`, substituting every byte in `direction`.
///
/// Exactly one byte is written per byte read, in the same order. Returns the
/// number of bytes processed.
pub fn transcode_stream<R: Read, W: Write>(
    codec: &Transcoder,
    direction: Direction,
    mut reader: R,
    mut writer: W,
) -> DvResult<u64> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total: u64 = 0;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        let chunk = &mut buf[..n];
        codec.transcode_in_place(direction, chunk);
        writer.write_all(chunk)?;
        total += n as u64;
    }

    writer.flush()?;
    debug!("{} complete: {} bytes", direction, total);
    Ok(total)
}
