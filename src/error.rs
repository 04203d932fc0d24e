use std::path::PathBuf;

use crate::{index, output};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid index file '{path}': {source}")]
    IndexFile {
        path: PathBuf,
        #[source]
        source: index::Error,
    },

    #[error(transparent)]
    Index(#[from] index::Error),

    #[error(transparent)]
    Output(#[from] output::Error),
}

impl Error {
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Output(e) if e.is_broken_pipe())
    }
}
