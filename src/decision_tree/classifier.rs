//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::{Classifier, Outcome};
use super::node::Node;


/// Decision tree classifier.
/// This struct is just a wrapper of [`Node`]
/// that remembers the attribute names it was grown on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
    attribute_names: Vec<String>,
}


impl DecisionTreeClassifier {
    /// Wrap a tree grown by [`build_tree`](super::build_tree)
    /// over examples with the given attribute names.
    ///
    /// # Example
    /// ```
    /// use supplier_id3::prelude::*;
    /// use supplier_id3::decision_tree::build_tree;
    ///
    /// let names = vec!["Price".to_string()];
    /// let examples = vec![
    ///     Example::new(["low"], "Yes"),
    ///     Example::new(["high"], "No"),
    /// ];
    /// let root = build_tree(&examples, &names, &[0]);
    ///
    /// let f = DecisionTreeClassifier::from_parts(root, names);
    /// assert_eq!(f.predict(&["high"]).as_str(), "No");
    /// ```
    #[inline]
    pub fn from_parts(root: Node, attribute_names: Vec<String>) -> Self {
        Self { root, attribute_names }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the attribute names of the training dataset.
    #[inline]
    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names[..]
    }


    /// Returns the number of branches on the longest root-to-leaf path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Returns the number of nodes, branches and leaves together.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;
        f.flush()
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict<S: AsRef<str>>(&self, values: &[S]) -> Outcome {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { label } => {
                    return Outcome::Label(label.clone());
                },
                Node::Branch { attribute, children, .. } => {
                    let child = values.get(*attribute)
                        .and_then(|value| children.get(value.as_ref()));
                    match child {
                        Some(child) => { node = child; },
                        None => { return Outcome::UnknownPath; },
                    }
                },
            }
        }
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
