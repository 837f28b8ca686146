use crate::vector::{DimIndex, SparseVector};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One parsed line: its vector and labels in encounter order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub vector: SparseVector,
    pub labels: Vec<String>,
}

/// Finalized records in input order, all sharing one dimensionality
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub(crate) fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Dimensionality shared by every vector
    ///
    /// `None` for an empty dataset or when no line carried an index.
    pub fn dimensionality(&self) -> Option<DimIndex> {
        self.records
            .first()
            .and_then(|record| record.vector.dimensionality())
    }

    /// Distinct labels in first-seen order
    pub fn label_set(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .flat_map(|record| record.labels.iter())
            .map(String::as_str)
            .filter(|label| seen.insert(*label))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
