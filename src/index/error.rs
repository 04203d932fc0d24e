use std::path::PathBuf;

use crate::types::{Offset, Position};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Cannot open index file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read failed at offset {offset}: {source}")]
    Read {
        offset: Offset,
        #[source]
        source: std::io::Error,
    },

    #[error("Truncated record at offset {offset}: {len} trailing byte(s) {bytes:02x?}, expected 8")]
    TruncatedRecord {
        offset: Offset,
        len: usize,
        bytes: Vec<u8>,
    },

    #[error("Record position {position} is out of range, file holds {count} record(s)")]
    RecordOutOfRange { position: Position, count: u64 },
}
