use colored::Colorize;

use crate::{
    Classifier,
    Dataset,
    DecisionTree,
    DecisionTreeClassifier,
    Outcome,
};
use crate::constants::NO_DATA_LABEL;
use crate::decision_tree::majority_label;
use super::Evaluation;

const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const WIDTH: usize = 14;
const PREC_WIDTH: usize = 4;


/// Struct `Report` prints the steps of growing a tree on a sample
/// to the standard output:
/// the settings, the attribute scores at the root,
/// the learned tree and the classification of new examples.
pub struct Report<'a> {
    sample: &'a Dataset,
    tree: &'a DecisionTree,
}


impl<'a> Report<'a> {
    /// Create a new instance of `Report`.
    pub fn new(sample: &'a Dataset, tree: &'a DecisionTree) -> Self {
        Self { sample, tree }
    }


    /// Print the sample shape and the tree settings.
    pub fn print_stats(&self) {
        let (n_examples, n_attributes) = self.sample.shape();
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "# of examples".bold(),
            n_examples.to_string().bold().green(),
            "# of attributes".bold(),
            n_attributes.to_string().bold().green(),
            "Algorithm".bold(),
            self.tree.name().bold().green(),
        );

        let line = self.tree.info()
            .into_iter()
            .map(|(key, val)| stat_line(key, &val))
            .collect::<Vec<_>>()
            .join("\n");
        println!("{line}\n{:=^FULL_WIDTH$}\n", "".bold());
    }


    /// Print the score of each candidate attribute on the whole sample.
    /// The attribute chosen for the root is marked.
    pub fn print_scores(&self) {
        let split_by = self.tree.split_by();
        let examples = self.sample.examples();
        let names = self.sample.attribute_names();

        let scores = self.tree.available()
            .iter()
            .map(|&i| (i, split_by.score(examples, i)))
            .collect::<Vec<_>>();
        let best = split_by.best_attribute(examples, self.tree.available())
            .map(|(i, _)| i);

        println!(
            "{} {:>WIDTH$}\t{:>WIDTH$}",
            "     ".bold(),
            "ATTRIBUTE".bold().red(),
            split_by.to_string().to_uppercase().bold().blue(),
        );
        for (i, score) in scores {
            let tag = if Some(i) == best {
                "[BEST]".bold().bright_green()
            } else {
                "      ".normal()
            };
            println!(
                "{tag} {}\t{}",
                format!("{:>WIDTH$}", names[i]).red(),
                format!("{:>WIDTH$.PREC_WIDTH$}", score).blue(),
            );
        }
        println!();
    }


    /// Print the learned tree.
    pub fn print_tree(&self, f: &DecisionTreeClassifier) {
        println!(
            "{} {} {}, {} {}",
            "[TREE]".bold().magenta(),
            "depth".bold(),
            f.depth().to_string().bold().cyan(),
            "leaves".bold(),
            f.n_leaves().to_string().bold().cyan(),
        );
        println!("{f}");
    }


    /// Print the prediction for an example given
    /// as `(attribute, value)` pairs.
    pub fn print_prediction<S, T>(&self, pairs: &[(S, T)], outcome: &Outcome)
        where S: AsRef<str>,
              T: AsRef<str>,
    {
        let example = pairs.iter()
            .map(|(name, value)| format!("{}={}", name.as_ref(), value.as_ref()))
            .collect::<Vec<_>>()
            .join(", ");
        let outcome = match outcome {
            Outcome::Label(label) => label.bold().bright_green(),
            Outcome::UnknownPath => outcome.as_str().bold().bright_red(),
        };
        println!("{} ({example}) => {outcome}", "[PRED]".bold().yellow());
    }


    /// Print the training and test scores of `f`.
    /// Examples that leave the learned paths are predicted
    /// as the majority label of `train`.
    pub fn print_holdout<C>(&self, f: &C, train: &Dataset, test: &Dataset)
        where C: Classifier
    {
        let positive = self.positive_label();
        let default = majority_label(train.examples())
            .unwrap_or(NO_DATA_LABEL);

        let rows = [
            ("TRAIN", train),
            ("TEST", test),
        ];
        for (name, sample) in rows {
            let acc = super::accuracy_with_default(sample, f, default);
            let f1 = super::f1_score_with_default(sample, f, &positive, default);
            println!(
                "{} {}\t{}\t{}",
                format!("[{name:>5}]").bold().red(),
                format!("{:>4} examples", sample.len()).green(),
                format!("acc. {:>WIDTH$.PREC_WIDTH$}", acc).blue(),
                format!("F1({positive}) {:>WIDTH$.PREC_WIDTH$}", f1).cyan(),
            );
        }
        println!();
    }


    /// Print one row per splitting criterion.
    pub fn print_comparison(&self, rows: &[Evaluation]) {
        let positive = self.positive_label();
        println!(
            "{:>6}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>6}",
            "ALGO".bold().red(),
            "ACCURACY".bold().blue(),
            format!("F1({positive})").bold().cyan(),
            "TIME (s)".bold().green(),
            "NODES".bold().yellow(),
        );
        for row in rows {
            println!(
                "{}\t{}\t{}\t{}\t{}",
                format!("{:>6}", row.split_by.algorithm()).red(),
                format!("{:>WIDTH$.PREC_WIDTH$}", row.accuracy).blue(),
                format!("{:>WIDTH$.PREC_WIDTH$}", row.f1).cyan(),
                format!("{:>WIDTH$.6}", row.elapsed.as_secs_f64()).green(),
                format!("{:>6}", row.n_nodes).yellow(),
            );
        }
        println!();
    }


    // The label of the first example is taken as the positive one.
    fn positive_label(&self) -> String {
        self.sample.unique_labels()
            .first()
            .map(|label| label.to_string())
            .unwrap_or_default()
    }
}


fn stat_line(key: &str, val: &str) -> String {
    format!(
        "    + {:<STAT_WIDTH$}\t{:>width$}",
        key,
        val.bold().yellow(),
        width = STAT_WIDTH - 8
    )
}
