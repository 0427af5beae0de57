//! Exports the standard types and traits.
//!
pub use crate::sample::{
    Dataset,
    DatasetError,
    Example,
    ReadError,
};


pub use crate::classifier::{
    Classifier,
    Outcome,
};


pub use crate::decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    SplitBy,
};


pub use crate::research::{
    Report,
    train_test_split,
    accuracy,
    f1_score,
};
