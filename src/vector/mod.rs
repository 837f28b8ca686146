mod sparse;


pub use sparse::SparseVector;

/// Index of a single dimension in a sparse vector
pub type DimIndex = usize;
