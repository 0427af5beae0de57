use serde::Serialize;

use std::collections::HashSet;

use super::{Example, DatasetError};


/// A validated set of categorical examples.
///
/// Every example of a [`Dataset`] carries exactly one value
/// per declared attribute, and the attribute names are distinct.
/// Both conditions are checked by [`Dataset::new`],
/// so that the tree construction never meets a malformed example.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    attribute_names: Vec<String>,
    examples: Vec<Example>,
}


impl Dataset {
    /// Construct a new [`Dataset`] from the attribute names
    /// and the examples.
    ///
    /// Returns `Err` if no attribute is given,
    /// if an attribute name appears twice,
    /// or if an example does not have one value per attribute.
    pub fn new<I, S>(attribute_names: I, examples: Vec<Example>)
        -> Result<Self, DatasetError>
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let attribute_names = attribute_names.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();

        if attribute_names.is_empty() {
            return Err(DatasetError::NoAttribute);
        }

        let mut seen = HashSet::new();
        for name in attribute_names.iter() {
            if !seen.insert(name.as_str()) {
                return Err(DatasetError::DuplicateAttribute(name.clone()));
            }
        }

        let expected = attribute_names.len();
        let malformed = examples.iter()
            .position(|example| example.len() != expected);
        if let Some(row) = malformed {
            let got = examples[row].len();
            return Err(DatasetError::LengthMismatch { row, expected, got });
        }

        Ok(Self { attribute_names, examples })
    }


    /// Construct a [`Dataset`] whose shape is known to be valid.
    pub(super) fn new_unchecked(
        attribute_names: Vec<String>,
        examples: Vec<Example>,
    ) -> Self
    {
        debug_assert!(
            examples.iter().all(|ex| ex.len() == attribute_names.len())
        );
        Self { attribute_names, examples }
    }


    /// Returns the attribute names.
    #[inline]
    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names[..]
    }


    /// Returns the examples in their original order.
    #[inline]
    pub fn examples(&self) -> &[Example] {
        &self.examples[..]
    }


    /// Returns the pair `(# of examples, # of attributes)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.examples.len(), self.attribute_names.len())
    }


    /// Returns the number of examples.
    #[inline]
    pub fn len(&self) -> usize {
        self.examples.len()
    }


    /// Returns `true` if the dataset holds no example.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }


    /// Returns the position of the attribute named `name`.
    pub fn attribute_index<S: AsRef<str>>(&self, name: S) -> Option<usize> {
        let name = name.as_ref();
        self.attribute_names.iter()
            .position(|attribute| attribute == name)
    }


    /// Returns the distinct labels in the order of first appearance.
    pub fn unique_labels(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        for example in self.examples.iter() {
            let label = example.label();
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        labels
    }


    /// Arrange `(attribute, value)` pairs in the attribute order
    /// of this dataset.
    /// The result can be passed to
    /// [`Classifier::predict`](crate::Classifier::predict).
    ///
    /// ```
    /// use supplier_id3::{Dataset, Example};
    ///
    /// let dataset = Dataset::new(
    ///     ["Price", "Quality"],
    ///     vec![Example::new(["low", "high"], "Yes")],
    /// ).unwrap();
    /// let record = dataset.record(&[("Quality", "low"), ("Price", "high")])
    ///     .unwrap();
    /// assert_eq!(record, ["high", "low"]);
    /// ```
    pub fn record<S, T>(&self, pairs: &[(S, T)])
        -> Result<Vec<String>, DatasetError>
        where S: AsRef<str>,
              T: AsRef<str>,
    {
        let mut values = vec![None; self.attribute_names.len()];
        for (name, value) in pairs {
            let name = name.as_ref();
            let index = self.attribute_index(name)
                .ok_or_else(|| DatasetError::UnknownAttribute(name.to_string()))?;
            values[index] = Some(value.as_ref().to_string());
        }

        values.into_iter()
            .zip(self.attribute_names.iter())
            .map(|(value, name)| {
                value.ok_or_else(|| {
                    DatasetError::MissingAttribute(name.clone())
                })
            })
            .collect()
    }


    /// Returns a new dataset that holds the examples at `indices`,
    /// in the given order.
    /// Indices out of range are ignored.
    pub fn subset(&self, indices: &[usize]) -> Self {
        let examples = indices.iter()
            .filter_map(|&i| self.examples.get(i))
            .cloned()
            .collect::<Vec<_>>();

        Self {
            attribute_names: self.attribute_names.clone(),
            examples,
        }
    }
}
