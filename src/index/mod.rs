mod error;
mod index_file;
mod record;

pub use error::{Error, Result};
pub use index_file::IndexFile;
pub use record::IndexRecord;
