use super::DimIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse float vector: only non-default coordinates are stored
///
/// `dimensionality` stays `None` while the vector is being built and is
/// stamped once the whole dataset has been scanned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    values: BTreeMap<DimIndex, f32>,
    dimensionality: Option<DimIndex>,
}

impl SparseVector {
    /// Create an empty vector with unresolved dimensionality
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vector from `(index, value)` pairs
    ///
    /// Later entries win when an index repeats.
    pub fn from_entries(entries: impl IntoIterator<Item = (DimIndex, f32)>) -> Self {
        Self {
            values: entries.into_iter().collect(),
            dimensionality: None,
        }
    }

    /// Store a coordinate, replacing any previous value at `index`
    pub fn insert(&mut self, index: DimIndex, value: f32) {
        self.values.insert(index, value);
    }

    /// Coordinate at `index`; absent indices are zero
    pub fn get(&self, index: DimIndex) -> f32 {
        self.values.get(&index).copied().unwrap_or(0.0)
    }

    /// Number of stored coordinates
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored coordinates in ascending index order
    pub fn entries(&self) -> impl Iterator<Item = (DimIndex, f32)> + '_ {
        self.values.iter().map(|(&i, &v)| (i, v))
    }

    /// Largest index stored in this vector alone
    pub fn max_index(&self) -> Option<DimIndex> {
        self.values.keys().next_back().copied()
    }

    pub fn dimensionality(&self) -> Option<DimIndex> {
        self.dimensionality
    }

    pub(crate) fn set_dimensionality(&mut self, dimensionality: Option<DimIndex>) {
        self.dimensionality = dimensionality;
    }

    /// Expand into a dense vector covering indices `0..=dimensionality`
    ///
    /// `None` while the dimensionality is unresolved or when `0..=dimensionality`
    /// has no representable length.
    pub fn to_dense(&self) -> Option<Vec<f32>> {
        let len = self.dimensionality?.checked_add(1)?;

        let mut out = vec![0.0; len];
        for (i, v) in self.entries() {
            if let Some(slot) = out.get_mut(i) {
                *slot = v;
            }
        }
        Some(out)
    }
}
