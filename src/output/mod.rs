mod error;
mod printer;

pub use error::{Error, Result};
pub use printer::{OutputFormat, Printer};
