use super::{Dataset, ParseSession};
use crate::parser::{LineParser, ParseError};
use std::io::BufRead;

/// Drives a line parser over a whole input and finalizes the dataset
pub struct DatasetAssembler<P> {
    parser: P,
}

impl<P: LineParser> DatasetAssembler<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Parse every line of `reader` into a dataset
    ///
    /// Blank lines and comment lines are skipped. The first read or format
    /// failure aborts the parse; no partial dataset is returned.
    pub fn assemble<R: BufRead>(&self, reader: R) -> Result<Dataset, ParseError> {
        let mut session = ParseSession::new();
        let mut records = Vec::new();
        let marker = self.parser.comment_marker();

        for (offset, line) in reader.lines().enumerate() {
            let line_number = offset + 1;
            let line = line.map_err(|source| ParseError::Io {
                line: line_number,
                source,
            })?;

            if is_skipped(&line, marker) {
                session.skip_line();
                continue;
            }

            let record = self
                .parser
                .parse_line(&line, &mut session)
                .map_err(|source| ParseError::Format {
                    line: line_number,
                    source,
                })?;

            tracing::trace!(
                "Line {}: {} coordinates, {} labels",
                line_number,
                record.vector.nnz(),
                record.labels.len()
            );
            records.push(record);
        }

        Ok(session.finish(records))
    }

    /// Parse an in-memory document
    pub fn assemble_str(&self, text: &str) -> Result<Dataset, ParseError> {
        self.assemble(text.as_bytes())
    }
}

/// Whitespace-only lines count as blank; an empty marker disables comments
fn is_skipped(line: &str, comment_marker: &str) -> bool {
    line.trim().is_empty() || (!comment_marker.is_empty() && line.starts_with(comment_marker))
}
