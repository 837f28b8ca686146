mod classify;
mod config;
mod error;
mod sparse_label;

#[cfg(test)]
mod tests;

pub use classify::{MAX_INDEX, TokenClass, classify, parse_value};
pub use config::{DEFAULT_COMMENT_MARKER, ParserConfig};
pub use error::{LineError, ParseError};
pub use sparse_label::SparseLabelParser;

use crate::dataset::{ParseSession, Record};

/// Core trait for turning one line of text into a record
///
/// The assembler only hands over lines that are neither blank nor
/// comments. Any index resolved while parsing must be reported to the
/// session so the dataset dimensionality can be fixed afterwards.
pub trait LineParser {
    /// Parse a single data line
    ///
    /// # Arguments
    /// * `line` - Raw line without its terminator
    /// * `session` - Running state of the current parse
    fn parse_line(&self, line: &str, session: &mut ParseSession) -> Result<Record, LineError>;

    /// Prefix that marks a line as a comment
    fn comment_marker(&self) -> &str {
        DEFAULT_COMMENT_MARKER
    }
}

/// Plain functions and closures work as parsers with the default comment marker
impl<F> LineParser for F
where
    F: Fn(&str, &mut ParseSession) -> Result<Record, LineError>,
{
    fn parse_line(&self, line: &str, session: &mut ParseSession) -> Result<Record, LineError> {
        self(line, session)
    }
}
