use thiserror::Error;

use crate::analyzer::ParseError;
use crate::formatter::error::FormatterError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Format error: {0}")]
    Format(#[from] FormatterError),
}

pub type InternalResult<T> = Result<T, Error>;
