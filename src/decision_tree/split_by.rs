//! Impurity measures over labeled examples,
//! and the splitting criteria built on them.
//!
//! Every function takes a slice of anything that borrows an [`Example`],
//! so that the tree builder can work on `&[&Example]` views
//! without copying the examples.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::Example;
use crate::constants::TIE_TOLERANCE;


/// Number of occurrences of each distinct label.
/// The labels are kept in the order of their first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFrequencies<'a> {
    counts: Vec<(&'a str, usize)>,
}


impl<'a> LabelFrequencies<'a> {
    /// Returns the count of `label`, if the label occurs.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.counts.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, count)| *count)
    }


    /// Iterate over `(label, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.counts.iter().copied()
    }


    /// Returns the number of distinct labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }


    /// Returns `true` if no label is counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }


    /// Returns the sum of the counts.
    #[inline]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }


    /// Returns the most frequent label.
    /// Among labels with the same count, the one seen first wins.
    pub fn majority(&self) -> Option<&'a str> {
        let mut best: Option<(&'a str, usize)> = None;
        for &(label, count) in self.counts.iter() {
            match best {
                Some((_, top)) if top >= count => {},
                _ => { best = Some((label, count)); },
            }
        }
        best.map(|(label, _)| label)
    }
}


/// Count the occurrences of each label in `examples`.
pub fn label_frequencies<E>(examples: &[E]) -> LabelFrequencies<'_>
    where E: Borrow<Example>,
{
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for example in examples {
        let example: &Example = example.borrow();
        let label = example.label();
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => { *count += 1; },
            None => { counts.push((label, 1)); },
        }
    }
    LabelFrequencies { counts }
}


/// Shannon entropy (base 2) of the label distribution of `examples`.
/// The entropy of no example is `0`.
pub fn entropy<E>(examples: &[E]) -> f64
    where E: Borrow<Example>,
{
    let freq = label_frequencies(examples);
    let total = freq.total() as f64;
    if total <= 0f64 { return 0f64; }

    let h = freq.iter()
        .map(|(_, count)| count as f64 / total)
        .filter(|&p| p > 0f64)
        .map(|p| -p * p.log2())
        .sum::<f64>();

    h.max(0f64)
}


/// Gini impurity `1 - Σ p^2` of the label distribution of `examples`.
/// The impurity of no example is `0`.
pub fn gini_impurity<E>(examples: &[E]) -> f64
    where E: Borrow<Example>,
{
    let freq = label_frequencies(examples);
    let total = freq.total() as f64;
    if total <= 0f64 { return 0f64; }

    let correct = freq.iter()
        .map(|(_, count)| (count as f64 / total).powi(2))
        .sum::<f64>();

    (1f64 - correct).max(0f64)
}


/// Partition `examples` by their value at position `attribute`.
///
/// Each part keeps the relative order of `examples`.
/// Examples that have no value at `attribute` are skipped.
pub fn split_by_attribute<E>(examples: &[E], attribute: usize)
    -> BTreeMap<&str, Vec<&Example>>
    where E: Borrow<Example>,
{
    let mut parts: BTreeMap<&str, Vec<&Example>> = BTreeMap::new();
    for example in examples {
        let example: &Example = example.borrow();
        if let Some(value) = example.value(attribute) {
            parts.entry(value).or_default().push(example);
        }
    }
    parts
}


/// Weighted sum `Σ |S_v| / |S| · impurity(S_v)` over the parts
/// produced by [`split_by_attribute`].
fn conditional<E, F>(examples: &[E], attribute: usize, impurity: F) -> f64
    where E: Borrow<Example>,
          F: Fn(&[&Example]) -> f64,
{
    let n_examples = examples.len() as f64;
    split_by_attribute(examples, attribute)
        .values()
        .map(|part| part.len() as f64 / n_examples * impurity(&part[..]))
        .sum::<f64>()
}


/// Information gain of splitting `examples` on `attribute`:
/// `H(S) - Σ |S_v| / |S| · H(S_v)`.
pub fn information_gain<E>(examples: &[E], attribute: usize) -> f64
    where E: Borrow<Example>,
{
    if examples.is_empty() { return 0f64; }

    let rest = conditional(examples, attribute, |part| entropy(part));
    entropy(examples) - rest
}


/// Entropy of the partition itself,
/// `-Σ |S_v| / |S| · log2(|S_v| / |S|)`.
pub fn split_information<E>(examples: &[E], attribute: usize) -> f64
    where E: Borrow<Example>,
{
    if examples.is_empty() { return 0f64; }

    let n_examples = examples.len() as f64;
    split_by_attribute(examples, attribute)
        .values()
        .map(|part| part.len() as f64 / n_examples)
        .filter(|&p| p > 0f64)
        .map(|p| -p * p.log2())
        .sum::<f64>()
}


/// Information gain normalized by the split information.
/// Returns `0` when the split information vanishes,
/// i.e., when all examples share one value.
pub fn gain_ratio<E>(examples: &[E], attribute: usize) -> f64
    where E: Borrow<Example>,
{
    let info = split_information(examples, attribute);
    if info <= 0f64 { return 0f64; }

    information_gain(examples, attribute) / info
}


/// Decrease of the Gini impurity achieved by splitting on `attribute`.
pub fn gini_gain<E>(examples: &[E], attribute: usize) -> f64
    where E: Borrow<Example>,
{
    if examples.is_empty() { return 0f64; }

    let rest = conditional(examples, attribute, |part| gini_impurity(part));
    gini_impurity(examples) - rest
}


/// Pearson's chi-square statistic of the contingency table
/// between the values of `attribute` and the labels:
/// `Σ_v Σ_y (O_vy - E_vy)² / E_vy`, where `E_vy = |S_v| · |S_y| / |S|`.
/// Cells with no expected count are skipped.
pub fn chi_square_score<E>(examples: &[E], attribute: usize) -> f64
    where E: Borrow<Example>,
{
    if examples.is_empty() { return 0f64; }

    let n_examples = examples.len() as f64;
    let totals = label_frequencies(examples);
    split_by_attribute(examples, attribute)
        .values()
        .map(|part| {
            let observed = label_frequencies(&part[..]);
            let n_part = part.len() as f64;
            totals.iter()
                .map(|(label, count)| {
                    let expected = count as f64 * n_part / n_examples;
                    if expected <= 0f64 { return 0f64; }
                    let o = observed.get(label).unwrap_or(0) as f64;
                    (o - expected).powi(2) / expected
                })
                .sum::<f64>()
        })
        .sum::<f64>()
}


/// Splitting criteria for growing decision tree.
/// The attribute of the largest score is chosen at each node.
///
/// * `SplitBy::InformationGain` is the criterion of ID3 (default).
/// * `SplitBy::GainRatio` is the criterion of C4.5.
/// * `SplitBy::Gini` is the Gini gain, as in CART.
/// * `SplitBy::ChiSquare` is the chi-square statistic, as in CHAID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitBy {
    /// Information gain.
    #[default]
    InformationGain,
    /// Information gain over split information.
    GainRatio,
    /// Decrease of the Gini impurity.
    Gini,
    /// Chi-square statistic between attribute values and labels.
    ChiSquare,
}


impl fmt::Display for SplitBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InformationGain => "Information gain",
            Self::GainRatio => "Gain ratio",
            Self::Gini => "Gini gain",
            Self::ChiSquare => "Chi-square",
        };

        write!(f, "{name}")
    }
}


impl SplitBy {
    /// Every criterion, in the order ID3, C4.5, CART, CHAID.
    pub const ALL: [SplitBy; 4] = [
        Self::InformationGain,
        Self::GainRatio,
        Self::Gini,
        Self::ChiSquare,
    ];


    /// Returns the name of the classic algorithm that grows trees
    /// with this criterion.
    pub fn algorithm(&self) -> &'static str {
        match self {
            Self::InformationGain => "ID3",
            Self::GainRatio => "C4.5",
            Self::Gini => "CART",
            Self::ChiSquare => "CHAID",
        }
    }


    /// Returns the score of splitting `examples` on `attribute`.
    pub fn score<E>(&self, examples: &[E], attribute: usize) -> f64
        where E: Borrow<Example>,
    {
        match self {
            Self::InformationGain => information_gain(examples, attribute),
            Self::GainRatio => gain_ratio(examples, attribute),
            Self::Gini => gini_gain(examples, attribute),
            Self::ChiSquare => chi_square_score(examples, attribute),
        }
    }


    /// Returns the attribute in `available` of the largest score,
    /// together with the score.
    /// Scores within `TIE_TOLERANCE` of each other are ties,
    /// won by the attribute that comes first in `available`.
    pub fn best_attribute<E>(&self, examples: &[E], available: &[usize])
        -> Option<(usize, f64)>
        where E: Borrow<Example>,
    {
        let scores = available.iter()
            .map(|&attribute| (attribute, self.score(examples, attribute)));
        first_maximum(scores)
    }
}


/// Returns the first `(attribute, score)` pair whose score
/// exceeds every earlier score by more than `TIE_TOLERANCE`.
fn first_maximum<I>(scores: I) -> Option<(usize, f64)>
    where I: IntoIterator<Item = (usize, f64)>,
{
    let mut best: Option<(usize, f64)> = None;
    for (attribute, score) in scores {
        match best {
            Some((_, top)) if score <= top + TIE_TOLERANCE => {},
            _ => { best = Some((attribute, score)); },
        }
    }
    best
}
