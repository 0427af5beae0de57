//! The core of the classifiers.
use std::fmt;

use crate::{Dataset, Example};
use crate::constants::UNKNOWN_LABEL;


/// The result of classifying one example.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The predicted label.
    Label(String),
    /// The example reached a branch that has no child
    /// for its attribute value, or lacks the tested attribute.
    UnknownPath,
}


impl Outcome {
    /// Returns the predicted label, if any.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Label(label) => Some(label),
            Self::UnknownPath => None,
        }
    }


    /// Returns the predicted label,
    /// or `default` for [`Outcome::UnknownPath`].
    #[inline]
    pub fn label_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.label().unwrap_or(default)
    }


    /// Returns the predicted label,
    /// or `"unknown"` for [`Outcome::UnknownPath`].
    #[inline]
    pub fn as_str(&self) -> &str {
        self.label().unwrap_or(UNKNOWN_LABEL)
    }


    /// Returns `true` if the classification failed.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::UnknownPath)
    }
}


impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}


/// A trait that defines the behavior of classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predict the label of an example given by its attribute values.
    fn predict<S: AsRef<str>>(&self, values: &[S]) -> Outcome;


    /// Predict the label of `example`, ignoring its own label.
    fn predict_example(&self, example: &Example) -> Outcome {
        self.predict(example.values())
    }


    /// Predict the labels of all examples in `sample`.
    fn predict_all(&self, sample: &Dataset) -> Vec<Outcome> {
        sample.examples()
            .iter()
            .map(|example| self.predict_example(example))
            .collect()
    }
}
