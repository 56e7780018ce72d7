use thiserror::Error;

use crate::sequence::ParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0} line(s) could not be parsed")]
    Rejected(usize),
}
