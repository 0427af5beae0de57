#![warn(missing_docs)]

//!
//! A crate that grows ID3 decision trees over categorical examples.
//!
//! The pipeline has three parts.
//!
//! - The entropy/gain engine
//!     measures the impurity of a set of labeled examples
//!     and the gain of splitting it on an attribute.
//!     See [`decision_tree::split_by`].
//!
//! - The tree builder
//!     recursively picks the attribute of maximal information gain
//!     and grows one subtree per observed attribute value.
//!     See [`DecisionTreeBuilder`] and [`DecisionTree`].
//!
//! - The classifier
//!     walks the tree along the values of a new example.
//!     See [`DecisionTreeClassifier`].
//!
//! The supplier-selection problem shipped in [`sample::supplier`]
//! is a small example of such a dataset.
//!
//! ```
//! use supplier_id3::prelude::*;
//! use supplier_id3::sample::supplier::{supplier_dataset, new_supplier};
//!
//! let sample = supplier_dataset();
//! let f = DecisionTreeBuilder::new(&sample)
//!     .build()
//!     .and_then(|tree| tree.fit(&sample))
//!     .unwrap();
//!
//! println!("{f}");
//! let record = sample.record(&new_supplier()).unwrap();
//! println!("New supplier: {}", f.predict(&record));
//! ```

pub mod constants;
pub mod sample;
pub mod classifier;
pub mod decision_tree;
pub mod research;
pub mod prelude;


pub use sample::{Dataset, DatasetError, Example, ReadError};
pub use classifier::{Classifier, Outcome};

pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    SplitBy,
};
