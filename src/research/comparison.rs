//! Grows one tree per splitting criterion on a training sample
//! and scores each on a test sample.
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::{Dataset, DatasetError, DecisionTreeBuilder, SplitBy};
use crate::constants::{CSV_SEPARATOR, NO_DATA_LABEL};
use crate::decision_tree::majority_label;
use super::{accuracy_with_default, f1_score_with_default};


const HEADER: &str = "Algorithm;Accuracy;F1-Score;Time (s);Nodes\n";


/// Test scores of the tree grown with one criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The splitting criterion.
    pub split_by: SplitBy,
    /// Accuracy on the test sample.
    pub accuracy: f64,
    /// F1 score of the positive label on the test sample.
    pub f1: f64,
    /// Time spent growing the tree.
    pub elapsed: Duration,
    /// Number of nodes of the tree.
    pub n_nodes: usize,
}


/// Grow a tree on `train` with every criterion in [`SplitBy::ALL`]
/// and score it on `test`.
///
/// Test examples that leave the learned paths are predicted
/// as the majority label of `train`.
pub fn compare_criteria(train: &Dataset, test: &Dataset, positive: &str)
    -> Result<Vec<Evaluation>, DatasetError>
{
    let default = majority_label(train.examples())
        .unwrap_or(NO_DATA_LABEL);

    SplitBy::ALL.into_iter()
        .map(|split_by| -> Result<Evaluation, DatasetError> {
            let tree = DecisionTreeBuilder::new(train)
                .split_by(split_by)
                .build()?;

            let now = Instant::now();
            let f = tree.fit(train)?;
            let elapsed = now.elapsed();

            Ok(Evaluation {
                split_by,
                accuracy: accuracy_with_default(test, &f, default),
                f1: f1_score_with_default(test, &f, positive, default),
                elapsed,
                n_nodes: f.n_nodes(),
            })
        })
        .collect()
}


/// Write the evaluations to the CSV file at `path`,
/// creating the missing parent directories.
pub fn to_summary_csv<P>(path: P, rows: &[Evaluation]) -> io::Result<()>
    where P: AsRef<Path>
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write_summary(&mut writer, rows)?;
    writer.flush()
}


/// Write the evaluations as `;`-separated rows, one per criterion.
pub fn write_summary<W: Write>(writer: &mut W, rows: &[Evaluation])
    -> io::Result<()>
{
    writer.write_all(HEADER.as_bytes())?;
    for row in rows {
        let sep = CSV_SEPARATOR;
        writeln!(
            writer,
            "{}{sep}{:.4}{sep}{:.4}{sep}{:.6}{sep}{}",
            row.split_by.algorithm(),
            row.accuracy,
            row.f1,
            row.elapsed.as_secs_f64(),
            row.n_nodes,
        )?;
    }
    Ok(())
}
