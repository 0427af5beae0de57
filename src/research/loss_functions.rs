use crate::{Classifier, Dataset, Outcome};


/// Fraction of the examples in `sample` whose label `f` predicts.
/// An [`Outcome::UnknownPath`] counts as a mistake.
/// Returns `0` for an empty sample.
pub fn accuracy<C>(sample: &Dataset, f: &C) -> f64
    where C: Classifier
{
    accuracy_of(sample, &f.predict_all(sample), None)
}


/// Same as [`accuracy`], but an [`Outcome::UnknownPath`]
/// is read as a prediction of `default`,
/// typically the majority label of the training sample.
pub fn accuracy_with_default<C>(sample: &Dataset, f: &C, default: &str)
    -> f64
    where C: Classifier
{
    accuracy_of(sample, &f.predict_all(sample), Some(default))
}


/// Zero-one loss, i.e., `1 - accuracy`.
/// Returns `0` for an empty sample.
pub fn zero_one_loss<C>(sample: &Dataset, f: &C) -> f64
    where C: Classifier
{
    if sample.is_empty() { return 0f64; }
    1f64 - accuracy(sample, f)
}


/// F1 score of `f` on `sample`, taking `positive` as the positive label.
/// An [`Outcome::UnknownPath`] never predicts `positive`.
/// Returns `0` when `f` finds no true positive.
pub fn f1_score<C>(sample: &Dataset, f: &C, positive: &str) -> f64
    where C: Classifier
{
    f1_of(sample, &f.predict_all(sample), positive, None)
}


/// Same as [`f1_score`], but an [`Outcome::UnknownPath`]
/// is read as a prediction of `default`.
pub fn f1_score_with_default<C>(
    sample: &Dataset,
    f: &C,
    positive: &str,
    default: &str,
) -> f64
    where C: Classifier
{
    f1_of(sample, &f.predict_all(sample), positive, Some(default))
}


fn accuracy_of(sample: &Dataset, predictions: &[Outcome], default: Option<&str>)
    -> f64
{
    let n_sample = sample.len();
    if n_sample == 0 { return 0f64; }

    let n_correct = predictions.iter()
        .zip(sample.examples())
        .filter(|(hx, example)| hx.label().or(default) == Some(example.label()))
        .count();

    n_correct as f64 / n_sample as f64
}


fn f1_of(
    sample: &Dataset,
    predictions: &[Outcome],
    positive: &str,
    default: Option<&str>,
) -> f64
{
    let mut tp = 0_usize;
    let mut fp = 0_usize;
    let mut fn_ = 0_usize;

    for (hx, example) in predictions.iter().zip(sample.examples()) {
        let predicted = hx.label().or(default) == Some(positive);
        let actual = example.label() == positive;
        match (predicted, actual) {
            (true, true) => { tp += 1; },
            (true, false) => { fp += 1; },
            (false, true) => { fn_ += 1; },
            (false, false) => {},
        }
    }

    if tp == 0 { return 0f64; }

    let precision = tp as f64 / (tp + fp) as f64;
    let recall = tp as f64 / (tp + fn_) as f64;
    2f64 * precision * recall / (precision + recall)
}
