use crate::{Dataset, DatasetError};
use super::{
    id3::DecisionTree,
    split_by::SplitBy,
};


/// A struct that builds [`DecisionTree`].
/// [`DecisionTreeBuilder`] keeps parameters for constructing
/// [`DecisionTree`].
///
/// # Example
///
/// ```
/// use supplier_id3::prelude::*;
/// use supplier_id3::sample::supplier::supplier_dataset;
///
/// let sample = supplier_dataset();
/// let tree = DecisionTreeBuilder::new(&sample)
///     .split_by(SplitBy::GainRatio)
///     .attributes(&["Price", "Quality"])
///     .build()
///     .unwrap();
/// assert_eq!(tree.available(), &[0, 1]);
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    sample: &'a Dataset,
    split_by: SplitBy,
    min_gain: Option<f64>,
    attributes: Option<Vec<String>>,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// split_by: SplitBy::InformationGain,
    /// min_gain: None (always split an impure node),
    /// attributes: all attributes of `sample`, in column order.
    /// ```
    pub fn new(sample: &'a Dataset) -> Self {
        Self {
            sample,
            split_by: SplitBy::default(),
            min_gain: None,
            attributes: None,
        }
    }


    /// Set the node splitting rule.
    /// Default value is `SplitBy::InformationGain`.
    #[inline]
    pub fn split_by(mut self, split_by: SplitBy) -> Self {
        self.split_by = split_by;
        self
    }


    /// Stop splitting a node whose best score is below `gain`;
    /// such a node becomes a leaf of its majority label.
    /// By default every impure node with a remaining attribute is split.
    pub fn min_gain(mut self, gain: f64) -> Self {
        assert!(
            gain.is_finite() && gain >= 0f64,
            "The minimal gain must be a non-negative number. got {gain}."
        );
        self.min_gain = Some(gain);
        self
    }


    /// Restrict the candidate attributes to `names`.
    /// Score ties are won by the attribute listed first.
    pub fn attributes<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        let names = names.iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        self.attributes = Some(names);
        self
    }


    /// Build a [`DecisionTree`].
    /// This method consumes `self`.
    ///
    /// Returns `Err` if a name passed to
    /// [`DecisionTreeBuilder::attributes`] is not an attribute
    /// of the sample.
    pub fn build(self) -> Result<DecisionTree, DatasetError> {
        let available = match self.attributes {
            None => (0..self.sample.shape().1).collect(),
            Some(names) => {
                let mut available = Vec::with_capacity(names.len());
                for name in names {
                    let index = self.sample.attribute_index(&name)
                        .ok_or(DatasetError::UnknownAttribute(name))?;
                    if !available.contains(&index) {
                        available.push(index);
                    }
                }
                available
            },
        };

        let tree = DecisionTree::new(
            self.sample.attribute_names().to_vec(),
            available,
            self.split_by,
            self.min_gain,
        );

        Ok(tree)
    }
}
