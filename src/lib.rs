// Public API exports
pub mod dataset;
pub mod model;
pub mod parser;
pub mod vector;

// Re-export main types for convenience
pub use dataset::{Dataset, DatasetAssembler, ParseSession, Record};
pub use model::{MeanModel, Prototype};
pub use parser::{
    DEFAULT_COMMENT_MARKER, LineError, LineParser, MAX_INDEX, ParseError, ParserConfig,
    SparseLabelParser, TokenClass, classify,
};
pub use vector::{DimIndex, SparseVector};
