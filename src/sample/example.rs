use serde::{Serialize, Deserialize};


/// A single labeled example.
/// The attribute values are positional:
/// the `i`-th value belongs to the `i`-th attribute of the owning
/// [`Dataset`](crate::Dataset).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Example {
    values: Vec<String>,
    label: String,
}


impl Example {
    /// Construct a new instance of [`Example`].
    ///
    /// ```
    /// use supplier_id3::Example;
    ///
    /// let example = Example::new(["low", "high", "fast", "high"], "Yes");
    /// assert_eq!(example.value(2), Some("fast"));
    /// assert_eq!(example.label(), "Yes");
    /// ```
    pub fn new<I, S, L>(values: I, label: L) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
              L: Into<String>,
    {
        let values = values.into_iter()
            .map(Into::into)
            .collect::<Vec<_>>();
        let label = label.into();

        Self { values, label }
    }


    /// Returns the attribute values.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values[..]
    }


    /// Returns the value at position `attribute`, if any.
    #[inline]
    pub fn value(&self, attribute: usize) -> Option<&str> {
        self.values.get(attribute).map(String::as_str)
    }


    /// Returns the target label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }


    /// Returns the number of attribute values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if the example carries no attribute value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
