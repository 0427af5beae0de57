//! The ID3 decision tree:
//! impurity measures, the tree builder and the classifier it outputs.

/// Defines the ID3 algorithm.
pub mod id3;
/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the classifier produced by `DecisionTree`.
pub mod classifier;
/// Defines the nodes of `DecisionTreeClassifier`.
pub mod node;
/// Defines the splitting criteria.
pub mod split_by;


pub use id3::{DecisionTree, build_tree, majority_label};
pub use builder::DecisionTreeBuilder;
pub use classifier::DecisionTreeClassifier;
pub use node::Node;
pub use split_by::{
    SplitBy,
    LabelFrequencies,
    label_frequencies,
    entropy,
    gini_impurity,
    split_by_attribute,
    information_gain,
    split_information,
    gain_ratio,
    gini_gain,
    chi_square_score,
};
