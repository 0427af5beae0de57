//! This directory provides some features for research.
//! - Holdout split of a sample into training and test parts
//! - Accuracy, zero-one loss and F1 score of a classifier
//! - A comparison of the splitting criteria on a holdout split
//! - A console report of the whole pipeline

/// Defines the seeded train/test split.
pub mod holdout;

/// Defines loss functions and scores.
pub mod loss_functions;

/// Defines the comparison of splitting criteria.
pub mod comparison;

/// Defines the console report.
pub mod report;


pub use holdout::{
    train_test_split,
    DEFAULT_SEED,
    DEFAULT_TEST_SIZE,
};

pub use loss_functions::{
    accuracy,
    accuracy_with_default,
    zero_one_loss,
    f1_score,
    f1_score_with_default,
};

pub use comparison::{
    Evaluation,
    compare_criteria,
    to_summary_csv,
    write_summary,
};

pub use report::Report;
