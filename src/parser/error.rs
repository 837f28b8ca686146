use crate::vector::DimIndex;
use thiserror::Error;

/// Failure inside a single line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("Index {index} is followed by non-numeric value '{token}'")]
    InvalidValue { index: DimIndex, token: String },
}

/// Fatal error for a whole parse, tagged with the 1-based line number
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Error while reading line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Error while parsing line {line}: {source}")]
    Format {
        line: usize,
        #[source]
        source: LineError,
    },
}

impl ParseError {
    /// Line number that triggered the failure
    pub fn line(&self) -> usize {
        match self {
            ParseError::Io { line, .. } | ParseError::Format { line, .. } => *line,
        }
    }
}
