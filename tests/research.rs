use supplier_id3::prelude::*;
use supplier_id3::research::{
    accuracy_with_default,
    compare_criteria,
    write_summary,
    zero_one_loss,
    DEFAULT_SEED,
    DEFAULT_TEST_SIZE,
};
use supplier_id3::sample::supplier::supplier_dataset;


#[test]
fn holdout_split_sizes() {
    let sample = supplier_dataset();
    let (train, test) = train_test_split(&sample, DEFAULT_TEST_SIZE, DEFAULT_SEED);
    assert_eq!(train.len(), 10);
    assert_eq!(test.len(), 4);
    assert_eq!(train.attribute_names(), sample.attribute_names());

    // Asking for too many test examples keeps one for training.
    let (train, test) = train_test_split(&sample, 100, DEFAULT_SEED);
    assert_eq!(train.len(), 1);
    assert_eq!(test.len(), 13);
}


#[test]
fn holdout_split_is_a_partition() {
    let sample = supplier_dataset();
    let (train, test) = train_test_split(&sample, 5, 7);

    let mut all = train.examples().to_vec();
    all.extend_from_slice(test.examples());
    assert_eq!(all.len(), sample.len());
    for example in sample.examples() {
        assert!(all.contains(example));
    }
}


#[test]
fn holdout_split_is_reproducible() {
    let sample = supplier_dataset();
    let first = train_test_split(&sample, 4, 2024);
    let second = train_test_split(&sample, 4, 2024);
    assert_eq!(first, second);
}


#[test]
fn holdout_split_of_nothing() {
    let sample = Dataset::new(["a"], Vec::new()).unwrap();
    let (train, test) = train_test_split(&sample, 4, 0);
    assert!(train.is_empty());
    assert!(test.is_empty());
}


#[test]
fn scores_of_a_leaf_classifier() {
    let sample = supplier_dataset();
    // A tree without candidate attributes always answers `No`.
    let f = DecisionTreeBuilder::new(&sample)
        .attributes::<&str>(&[])
        .build()
        .unwrap()
        .fit(&sample)
        .unwrap();
    assert_eq!(f.root(), &Node::leaf("No"));

    let acc = accuracy(&sample, &f);
    assert!((acc - 8f64 / 14f64).abs() < 1e-12);
    assert!((zero_one_loss(&sample, &f) - 6f64 / 14f64).abs() < 1e-12);

    assert_eq!(f1_score(&sample, &f, "Yes"), 0f64);
    // precision 8/14, recall 1
    let f1 = f1_score(&sample, &f, "No");
    assert!((f1 - 16f64 / 22f64).abs() < 1e-12);
}


#[test]
fn unknown_paths_count_as_mistakes() {
    let train = Dataset::new(
        ["Color"],
        vec![
            Example::new(["red"], "Yes"),
            Example::new(["blue"], "No"),
        ],
    ).unwrap();
    let test = Dataset::new(
        ["Color"],
        vec![
            Example::new(["red"], "Yes"),
            Example::new(["green"], "Yes"),
        ],
    ).unwrap();

    let f = DecisionTreeBuilder::new(&train)
        .build()
        .unwrap()
        .fit(&train)
        .unwrap();
    let outcomes = f.predict_all(&test);
    assert_eq!(outcomes[1], Outcome::UnknownPath);
    assert_eq!(accuracy(&test, &f), 0.5);
}


#[test]
fn unknown_paths_take_the_training_majority() {
    let train = Dataset::new(
        ["Color"],
        vec![
            Example::new(["red"], "Yes"),
            Example::new(["blue"], "No"),
            Example::new(["blue"], "No"),
        ],
    ).unwrap();
    let test = Dataset::new(
        ["Color"],
        vec![
            Example::new(["green"], "No"),
            Example::new(["green"], "Yes"),
        ],
    ).unwrap();

    let f = DecisionTreeBuilder::new(&train)
        .build()
        .unwrap()
        .fit(&train)
        .unwrap();
    assert_eq!(accuracy(&test, &f), 0f64);
    assert_eq!(accuracy_with_default(&test, &f, "No"), 0.5);
}


#[test]
fn every_criterion_is_compared() {
    let sample = supplier_dataset();
    let rows = compare_criteria(&sample, &sample, "Yes").unwrap();

    let criteria = rows.iter().map(|row| row.split_by).collect::<Vec<_>>();
    assert_eq!(criteria, SplitBy::ALL);
    for row in rows.iter() {
        // Each criterion grows the 10-node tree rooted at `Price`.
        assert_eq!(row.n_nodes, 10, "{}", row.split_by);
        assert_eq!(row.accuracy, 1f64);
        assert_eq!(row.f1, 1f64);
    }
}


#[test]
fn comparison_on_the_holdout_split() {
    let sample = supplier_dataset();
    let (train, test) = train_test_split(&sample, DEFAULT_TEST_SIZE, DEFAULT_SEED);
    let rows = compare_criteria(&train, &test, "Yes").unwrap();
    assert_eq!(rows.len(), 4);
    for row in rows {
        assert!((0f64..=1f64).contains(&row.accuracy));
        assert!((0f64..=1f64).contains(&row.f1));
        assert!(row.n_nodes >= 1);
    }

    let mut buf = Vec::new();
    let rows = compare_criteria(&sample, &sample, "Yes").unwrap();
    write_summary(&mut buf, &rows).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Algorithm;Accuracy;F1-Score;Time (s);Nodes");
    assert!(lines[1].starts_with("ID3;1.0000;1.0000;"));
    assert!(lines[4].starts_with("CHAID;"));
    assert!(lines[4].ends_with(";10"));
}
