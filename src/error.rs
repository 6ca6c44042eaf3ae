//! Error types for matrix access and feature ranking

use thiserror::Error;

/// Errors raised by the weighted matrix and the feature ranker
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    /// Row index past the end of the matrix
    #[error("Row {row} out of range for matrix with {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    /// Score vector and vocabulary lengths disagree
    #[error("Shape mismatch: expected {expected} scores, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Matrix entry outside the declared shape
    #[error("Entry ({row}, {col}) outside matrix of shape {rows}x{cols}")]
    EntryOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Negative or non-finite weight
    #[error("Invalid weight {value} at ({row}, {col})")]
    InvalidWeight { row: usize, col: usize, value: f64 },

    /// Dense row whose width differs from the matrix width
    #[error("Row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Vocabulary term listed twice
    #[error("Duplicate vocabulary term: {0}")]
    DuplicateTerm(String),

    /// Mean requested over zero rows
    #[error("Cannot average an empty row selection")]
    EmptySelection,
}

/// Result type for ranking operations
pub type Result<T> = std::result::Result<T, RankError>;
