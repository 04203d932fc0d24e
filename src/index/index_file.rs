use std::{
    fs::File,
    io::{self, BufReader, Read, Seek, SeekFrom},
    iter::FusedIterator,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use super::{Error, IndexRecord, Result};
use crate::types::{Offset, Position, RECORD_SIZE};

pub struct IndexFile {
    path: PathBuf,
    reader: BufReader<File>,
    len: u64,
    moved: bool,
}

impl IndexFile {
    pub fn open(path: &Path) -> Result<Self> {
        let open_error = |source: io::Error| Error::Open {
            path: path.to_owned(),
            source,
        };

        let file = File::open(path).map_err(open_error)?;
        let metadata = file.metadata().map_err(open_error)?;

        if metadata.is_dir() {
            return Err(open_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "path is a directory",
            )));
        }

        let len = metadata.len();
        debug!("Opened index file {:?}: {} byte(s)", path, len);

        let trailing = len % RECORD_SIZE as u64;
        if trailing != 0 {
            info!(
                "Index file {:?} ends with a partial record: {} trailing byte(s)",
                path, trailing
            );
        }

        Ok(Self {
            path: path.to_owned(),
            reader: BufReader::new(file),
            len,
            moved: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record_count(&self) -> u64 {
        self.len / RECORD_SIZE as u64
    }

    /// Sequential iterator over every record, starting from the beginning of the file.
    ///
    /// A fresh handle is read without seeking, so pipes and FIFOs work here.
    pub fn records(&mut self) -> Result<Records<&mut BufReader<File>>> {
        if self.moved {
            self.reader
                .rewind()
                .map_err(|source| Error::Read { offset: 0, source })?;
        }
        self.moved = true;

        Ok(Records::new(&mut self.reader))
    }

    pub fn record_at(&mut self, position: Position) -> Result<IndexRecord> {
        let count = self.record_count();
        if position >= count {
            return Err(Error::RecordOutOfRange { position, count });
        }

        let offset = IndexRecord::index_offset(position);
        self.moved = true;
        self.reader
            .seek(SeekFrom::Start(offset))
            .map_err(|source| Error::Read { offset, source })?;

        Records::starting_at(&mut self.reader, offset)
            .next()
            .unwrap_or(Err(Error::RecordOutOfRange { position, count }))
    }
}

/// Reads fixed-size records until the stream is exhausted.
///
/// A short tail (1 to 7 bytes) yields a single `TruncatedRecord` error and ends
/// the iteration, as does any read failure.
pub struct Records<R> {
    reader: R,
    offset: Offset,
    done: bool,
}

impl<R: Read> Records<R> {
    pub fn new(reader: R) -> Self {
        Self::starting_at(reader, 0)
    }

    pub fn starting_at(reader: R, offset: Offset) -> Self {
        Self {
            reader,
            offset,
            done: false,
        }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    fn fill_chunk(&mut self, chunk: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;

        while filled < chunk.len() {
            match self.reader.read(&mut chunk[filled..]) {
                Ok(0) => break,
                Ok(read) => filled += read,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(filled)
    }
}

impl<R: Read> Iterator for Records<R> {
    type Item = Result<IndexRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut chunk = [0u8; RECORD_SIZE];
        let filled = match self.fill_chunk(&mut chunk) {
            Ok(filled) => filled,
            Err(source) => {
                self.done = true;
                return Some(Err(Error::Read {
                    offset: self.offset,
                    source,
                }));
            }
        };

        match filled {
            0 => {
                self.done = true;
                None
            }
            RECORD_SIZE => {
                self.offset += RECORD_SIZE as Offset;
                Some(Ok(IndexRecord::from_bytes(&chunk)))
            }
            len => {
                self.done = true;
                Some(Err(Error::TruncatedRecord {
                    offset: self.offset,
                    len,
                    bytes: chunk[..len].to_vec(),
                }))
            }
        }
    }
}

impl<R: Read> FusedIterator for Records<R> {}
