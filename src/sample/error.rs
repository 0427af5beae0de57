//! Errors raised while assembling a [`Dataset`](crate::Dataset).
use std::io;

/// Validation errors of datasets and attribute lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// The attribute list is empty.
    #[error("a dataset needs at least one attribute")]
    NoAttribute,

    /// Two attributes share a name.
    #[error("attribute `{0}` is declared more than once")]
    DuplicateAttribute(String),

    /// An example does not have one value per attribute.
    #[error("example {row} has {got} attribute values, expected {expected}")]
    LengthMismatch {
        /// Zero-based position of the offending example.
        row: usize,
        /// Number of declared attributes.
        expected: usize,
        /// Number of values the example carries.
        got: usize,
    },

    /// The attribute name is not declared in the dataset.
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),

    /// A record lacks a value for a declared attribute.
    #[error("no value is given for attribute `{0}`")]
    MissingAttribute(String),

    /// The tree was configured for other attributes.
    #[error("the attributes of the dataset differ from the ones the tree was built for")]
    SchemaMismatch,
}


/// Errors raised while reading a [`Dataset`](crate::Dataset) from CSV.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input has no header row.
    #[error("the CSV input has no header row")]
    NoHeader,

    /// The header lacks an attribute column or the target column.
    #[error("the CSV header needs an attribute column and a target column")]
    NoTarget,

    /// A row does not have one field per header column.
    #[error("line {line} has {got} columns, expected {expected}")]
    ColumnMismatch {
        /// One-based line number in the input.
        line: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of fields on the line.
        got: usize,
    },

    /// The rows do not form a valid dataset.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
