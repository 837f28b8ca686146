use super::{Dataset, Record};
use crate::vector::DimIndex;

/// State of a single parse, created fresh for every input
///
/// Tracks the largest dimension index seen so far. Finishing the session
/// consumes it, so state never leaks into the next parse.
#[derive(Debug, Default)]
pub struct ParseSession {
    max_index: Option<DimIndex>,
    skipped_lines: usize,
}

impl ParseSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `index` was resolved on the current line
    pub fn observe_index(&mut self, index: DimIndex) {
        if self.max_index.map_or(true, |max| index > max) {
            self.max_index = Some(index);
        }
    }

    /// Largest index observed so far
    pub fn max_index(&self) -> Option<DimIndex> {
        self.max_index
    }

    pub(crate) fn skip_line(&mut self) {
        self.skipped_lines += 1;
    }

    /// Stamp the global maximum on every vector and hand out the dataset
    pub(crate) fn finish(self, mut records: Vec<Record>) -> Dataset {
        for record in &mut records {
            record.vector.set_dimensionality(self.max_index);
        }

        tracing::info!(
            "Parsed {} records ({} lines skipped), dimensionality {:?}",
            records.len(),
            self.skipped_lines,
            self.max_index
        );

        Dataset::from_records(records)
    }
}
