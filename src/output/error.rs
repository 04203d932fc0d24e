pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Cannot write to standard output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot serialize record: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
