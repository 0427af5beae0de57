use rand::prelude::*;

use crate::Dataset;


/// Seed used by the supplier report.
pub const DEFAULT_SEED: u64 = 42;
/// Number of test examples used by the supplier report.
pub const DEFAULT_TEST_SIZE: usize = 4;


/// Split `sample` into a training and a test part.
///
/// The example positions are shuffled with a generator seeded by `seed`,
/// and the first `test_size` shuffled positions form the test part.
/// At least one example is kept for training
/// whenever `sample` is non-empty.
/// Both parts keep the original relative order of the examples.
///
/// # Example
/// ```
/// use supplier_id3::research::train_test_split;
/// use supplier_id3::sample::supplier::supplier_dataset;
///
/// let sample = supplier_dataset();
/// let (train, test) = train_test_split(&sample, 4, 42);
/// assert_eq!(train.len(), 10);
/// assert_eq!(test.len(), 4);
/// ```
pub fn train_test_split(sample: &Dataset, test_size: usize, seed: u64)
    -> (Dataset, Dataset)
{
    let n_sample = sample.len();
    let test_size = test_size.min(n_sample.saturating_sub(1));

    let mut ix = (0..n_sample).collect::<Vec<usize>>();
    let mut rng = StdRng::seed_from_u64(seed);
    ix.shuffle(&mut rng);

    let mut is_test = vec![false; n_sample];
    ix[..test_size].iter()
        .for_each(|&i| { is_test[i] = true; });

    let (test, train): (Vec<usize>, Vec<usize>) = (0..n_sample)
        .partition(|&i| is_test[i]);

    (sample.subset(&train), sample.subset(&test))
}
