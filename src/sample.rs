//! Categorical training examples and the validated `Dataset` type.
mod example;
mod dataset;
mod error;
mod writer;
mod reader;

/// The supplier-selection toy problem.
pub mod supplier;


pub use example::Example;
pub use dataset::Dataset;
pub use error::{DatasetError, ReadError};
