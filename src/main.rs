//! Grows an ID3 tree on the supplier-selection problem
//! and classifies a new supplier.
//!
//! Usage: `supplier-id3 [OUTPUT_DIR]` (default `data`).
//! The training table, the tree and the comparison of the splitting
//! criteria are written to `OUTPUT_DIR/supplier_dataset.csv`,
//! `OUTPUT_DIR/supplier_tree.dot` and `OUTPUT_DIR/algorithms_summary.csv`.
use colored::Colorize;

use supplier_id3::prelude::*;
use supplier_id3::research::{
    compare_criteria,
    to_summary_csv,
    DEFAULT_SEED,
    DEFAULT_TEST_SIZE,
};
use supplier_id3::sample::supplier::{supplier_dataset, new_supplier};

use std::env;
use std::error::Error;
use std::path::PathBuf;


const DEFAULT_OUTPUT_DIR: &str = "data";


fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let sample = supplier_dataset();

    let csv = out_dir.join("supplier_dataset.csv");
    sample.to_csv(&csv)?;
    println!("{} {}", "[SAVE]".bold().cyan(), csv.display());

    let tree = DecisionTreeBuilder::new(&sample)
        .split_by(SplitBy::InformationGain)
        .build()?;

    let report = Report::new(&sample, &tree);
    report.print_stats();
    report.print_scores();

    let f = tree.fit(&sample)?;
    report.print_tree(&f);

    let dot = out_dir.join("supplier_tree.dot");
    f.to_dot_file(&dot)?;
    println!("{} {}\n", "[SAVE]".bold().cyan(), dot.display());

    let pairs = new_supplier();
    let record = sample.record(&pairs)?;
    let outcome = f.predict(&record);
    report.print_prediction(&pairs, &outcome);

    let (train, test) = train_test_split(&sample, DEFAULT_TEST_SIZE, DEFAULT_SEED);
    let g = tree.fit(&train)?;
    println!();
    report.print_holdout(&g, &train, &test);

    let positive = sample.unique_labels()
        .first()
        .map(|label| label.to_string())
        .unwrap_or_default();
    let rows = compare_criteria(&train, &test, &positive)?;
    report.print_comparison(&rows);

    let summary = out_dir.join("algorithms_summary.csv");
    to_summary_csv(&summary, &rows)?;
    println!("{} {}", "[SAVE]".bold().cyan(), summary.display());

    Ok(())
}
