use super::{LineError, LineParser, ParserConfig, TokenClass, classify, parse_value};
use crate::dataset::{ParseSession, Record};
use crate::vector::SparseVector;

/// Parser for one labelled sparse vector per line
///
/// Line layout: the first token is the declared number of non-zero
/// attributes, followed by `index value` pairs interleaved with labels.
/// A token that is not an integer index is a label. The configured label
/// position is always a label.
#[derive(Debug, Clone, Default)]
pub struct SparseLabelParser {
    config: ParserConfig,
}

impl SparseLabelParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Human-readable description of the accepted line format
    pub fn describe_format(&self) -> String {
        let mut description = String::from(
            "A single line provides a single point. Entries are separated by whitespace. \
             The first entry of each line is the number of attributes with coordinate value \
             not zero. Subsequent entries are of the form (index, value), where index is the \
             number of the corresponding dimension and value is the value of that attribute. \
             An entry that is not parseable as a non-negative integer index is appended to \
             the labels of the point. If the value following an index is not parseable as a \
             float, parsing fails. Empty lines",
        );
        if !self.config.comment_marker.is_empty() {
            description.push_str(&format!(
                " and lines beginning with \"{}\"",
                self.config.comment_marker
            ));
        }
        description.push_str(
            " are ignored. After the input is parsed completely, the maximum occurring \
             index is set as dimensionality of every vector.",
        );
        if let Some(label_index) = self.config.label_index {
            description.push_str(&format!(
                " The entry at position {} (counting all entries from 0) is always a label.",
                label_index
            ));
        }
        description
    }
}

impl LineParser for SparseLabelParser {
    fn parse_line(&self, line: &str, session: &mut ParseSession) -> Result<Record, LineError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let mut record = Record::default();

        let Some(first) = tokens.first() else {
            return Ok(record);
        };

        // Advisory only; never checked against the content
        let declared = first.parse::<usize>().ok();

        let mut vector = SparseVector::new();
        let last = tokens.len() - 1;
        let mut i = 1;

        while i < tokens.len() {
            let token = tokens[i];

            // A pair needs a following value, so the final token can only be a label
            if Some(i) == self.config.label_index || i == last {
                record.labels.push(token.to_string());
                i += 1;
                continue;
            }

            match classify(token) {
                TokenClass::Index(index) => {
                    let raw = tokens[i + 1];
                    let value = parse_value(raw).ok_or_else(|| LineError::InvalidValue {
                        index,
                        token: raw.to_string(),
                    })?;
                    session.observe_index(index);
                    vector.insert(index, value);
                    i += 2;
                }
                TokenClass::Label => {
                    record.labels.push(token.to_string());
                    i += 1;
                }
            }
        }

        if let Some(declared) = declared {
            if declared != vector.nnz() {
                tracing::debug!(
                    "Declared {} non-zero attributes, found {}",
                    declared,
                    vector.nnz()
                );
            }
        }

        record.vector = vector;
        Ok(record)
    }

    fn comment_marker(&self) -> &str {
        &self.config.comment_marker
    }
}
