use std::fmt;
use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::{Dataset, DatasetError, Example};
use crate::constants::NO_DATA_LABEL;

use super::{
    node::Node,
    split_by::*,
    classifier::DecisionTreeClassifier,
};


/// The ID3 decision tree algorithm.
/// Given a set of categorical training examples,
/// [`DecisionTree`] outputs a decision tree classifier
/// named [`DecisionTreeClassifier`].
///
/// At each node, the attribute of the largest score
/// (information gain by default) is chosen
/// and one child is grown per observed value of that attribute.
/// An attribute is tested at most once on a root-to-leaf path.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
///
/// # Example
/// ```
/// use supplier_id3::prelude::*;
/// use supplier_id3::sample::supplier::{supplier_dataset, new_supplier};
///
/// let sample = supplier_dataset();
/// let tree = DecisionTreeBuilder::new(&sample)
///     .split_by(SplitBy::InformationGain)
///     .build()
///     .unwrap();
///
/// let f = tree.fit(&sample).unwrap();
///
/// let record = sample.record(&new_supplier()).unwrap();
/// assert_eq!(f.predict(&record).as_str(), "No");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    attribute_names: Vec<String>,
    available: Vec<usize>,
    split_by: SplitBy,
    min_gain: Option<f64>,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(
        attribute_names: Vec<String>,
        available: Vec<usize>,
        split_by: SplitBy,
        min_gain: Option<f64>,
    ) -> Self
    {
        Self { attribute_names, available, split_by, min_gain, }
    }


    /// Returns the splitting criterion.
    #[inline]
    pub fn split_by(&self) -> SplitBy {
        self.split_by
    }


    /// Returns the positions of the candidate attributes.
    #[inline]
    pub fn available(&self) -> &[usize] {
        &self.available[..]
    }


    /// Returns the name of this algorithm.
    pub fn name(&self) -> &str {
        "ID3 Decision Tree"
    }


    /// Returns the parameters as `(key, value)` pairs.
    pub fn info(&self) -> Vec<(&str, String)> {
        let attributes = self.available.iter()
            .map(|&i| self.attribute_names[i].as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let min_gain = self.min_gain
            .map(|gain| format!("{gain}"))
            .unwrap_or_else(|| "None".to_string());

        Vec::from([
            ("Split by", format!("{}", self.split_by)),
            ("Min. gain", min_gain),
            ("Attributes", attributes),
        ])
    }


    /// Grow a tree on `sample`.
    ///
    /// Returns `Err` if the attributes of `sample` differ from the ones
    /// this [`DecisionTree`] was built for.
    pub fn fit(&self, sample: &Dataset)
        -> Result<DecisionTreeClassifier, DatasetError>
    {
        if sample.attribute_names() != &self.attribute_names[..] {
            return Err(DatasetError::SchemaMismatch);
        }

        let examples = sample.examples().iter().collect::<Vec<&Example>>();
        let grower = Grower {
            names: &self.attribute_names,
            split_by: self.split_by,
            min_gain: self.min_gain,
        };
        let root = grower.grow(&examples, &self.available);

        Ok(DecisionTreeClassifier::from_parts(root, self.attribute_names.clone()))
    }
}


/// Grow an ID3 tree over `examples`,
/// splitting only on the attributes in `available`.
///
/// The attribute names label the branch nodes;
/// `available` fixes the order in which score ties are resolved.
pub fn build_tree<E>(
    examples: &[E],
    attribute_names: &[String],
    available: &[usize],
) -> Node
    where E: Borrow<Example>,
{
    let examples = examples.iter()
        .map(Borrow::borrow)
        .collect::<Vec<&Example>>();
    let grower = Grower {
        names: attribute_names,
        split_by: SplitBy::default(),
        min_gain: None,
    };
    grower.grow(&examples, available)
}


/// Returns the most frequent label of `examples`.
/// Ties are won by the label that appears first.
/// Returns `None` for no example.
pub fn majority_label<E>(examples: &[E]) -> Option<&str>
    where E: Borrow<Example>,
{
    label_frequencies(examples).majority()
}


struct Grower<'a> {
    names: &'a [String],
    split_by: SplitBy,
    min_gain: Option<f64>,
}


impl Grower<'_> {
    fn grow(&self, examples: &[&Example], available: &[usize]) -> Node {
        let Some(first) = examples.first() else {
            return Node::leaf(NO_DATA_LABEL);
        };

        // All examples share one label.
        let label = first.label();
        if examples.iter().all(|example| example.label() == label) {
            return Node::leaf(label);
        }

        let majority = majority_label(examples).unwrap_or(NO_DATA_LABEL);

        let best = self.split_by.best_attribute(examples, available);
        let Some((attribute, score)) = best else {
            return Node::leaf(majority);
        };
        if self.min_gain.is_some_and(|gain| score < gain) {
            return Node::leaf(majority);
        }

        let rest = available.iter()
            .copied()
            .filter(|&a| a != attribute)
            .collect::<Vec<_>>();

        let children = split_by_attribute(examples, attribute)
            .into_iter()
            .map(|(value, part)| {
                let child = if part.is_empty() {
                    Node::leaf(majority)
                } else {
                    self.grow(&part, &rest)
                };
                (value.to_string(), child)
            })
            .collect::<BTreeMap<_, _>>();

        // No example has a value at `attribute`.
        if children.is_empty() {
            return Node::leaf(majority);
        }

        let name = self.names.get(attribute)
            .cloned()
            .unwrap_or_else(|| format!("Attr. [{attribute}]"));
        Node::branch(attribute, name, children)
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------\n# {}\n", self.name())?;
        for (key, value) in self.info() {
            writeln!(f, "- {key}: {value}")?;
        }
        write!(f, "----------")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("a{i}")).collect()
    }


    #[test]
    fn empty_sample_gives_sentinel_leaf() {
        let tree = build_tree::<Example>(&[], &names(1), &[0]);
        assert_eq!(tree, Node::leaf(NO_DATA_LABEL));
    }


    #[test]
    fn pure_sample_gives_single_leaf() {
        let examples = vec![
            Example::new(["x"], "Yes"),
            Example::new(["y"], "Yes"),
            Example::new(["z"], "Yes"),
        ];
        let tree = build_tree(&examples, &names(1), &[0]);
        assert_eq!(tree, Node::leaf("Yes"));
    }


    #[test]
    fn no_attribute_left_gives_majority_leaf() {
        let examples = vec![
            Example::new(["x"], "Yes"),
            Example::new(["y"], "No"),
            Example::new(["z"], "Yes"),
            Example::new(["x"], "Yes"),
        ];
        let tree = build_tree(&examples, &names(1), &[]);
        assert_eq!(tree, Node::leaf("Yes"));
    }


    #[test]
    fn conflicting_duplicates_end_in_majority_leaf() {
        let examples = vec![
            Example::new(["x"], "No"),
            Example::new(["x"], "Yes"),
            Example::new(["x"], "No"),
            Example::new(["y"], "Yes"),
        ];
        let tree = build_tree(&examples, &names(1), &[0]);

        let children = tree.children().unwrap();
        assert_eq!(children["x"], Node::leaf("No"));
        assert_eq!(children["y"], Node::leaf("Yes"));
    }


    #[test]
    fn majority_ties_follow_first_appearance() {
        let examples = vec![
            Example::new(["x"], "No"),
            Example::new(["y"], "Yes"),
        ];
        assert_eq!(majority_label(&examples), Some("No"));
        assert_eq!(majority_label::<Example>(&[]), None);
    }


    #[test]
    fn uninformative_attribute_is_still_split_without_threshold() {
        // XOR: no single attribute has a positive gain.
        let examples = vec![
            Example::new(["0", "0"], "No"),
            Example::new(["0", "1"], "Yes"),
            Example::new(["1", "0"], "Yes"),
            Example::new(["1", "1"], "No"),
        ];
        let tree = build_tree(&examples, &names(2), &[0, 1]);
        assert_eq!(tree.name(), "a0");
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.n_leaves(), 4);
    }
}
