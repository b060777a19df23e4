use thiserror::Error;

/// Errors surfaced by the tabular store and the graph builder.
///
/// Every error propagates synchronously to the caller; a failed graph
/// operation never corrupts the underlying store or a previously built
/// graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("unknown category '{0}'")]
    InvalidCategory(String),

    #[error("categories must differ, got '{0}' twice")]
    DuplicateCategory(String),

    #[error("unknown node-type grouping '{0}'")]
    UnknownGrouping(String),

    #[error("cannot parse '{value}' in column '{column}' as a number")]
    Parse { column: String, value: String },

    #[error("bin boundaries must be strictly increasing with at least two entries")]
    InvalidBoundaries,

    #[error("{0} requires a non-empty graph")]
    EmptyGraph(&'static str),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
