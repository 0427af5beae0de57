use rand::prelude::*;

use supplier_id3::prelude::*;
use supplier_id3::decision_tree::{
    build_tree,
    entropy,
    gain_ratio,
    gini_gain,
    information_gain,
    label_frequencies,
    majority_label,
};


const TOLERANCE: f64 = 1e-9;


/// Random categorical examples: `n_attributes` attributes
/// with up to `n_values` values each and up to `n_labels` labels.
fn random_examples(
    rng: &mut StdRng,
    n_examples: usize,
    n_attributes: usize,
    n_values: usize,
    n_labels: usize,
) -> Vec<Example>
{
    (0..n_examples).map(|_| {
            let values = (0..n_attributes)
                .map(|_| format!("v{}", rng.gen_range(0..n_values)))
                .collect::<Vec<_>>();
            let label = format!("y{}", rng.gen_range(0..n_labels));
            Example::new(values, label)
        })
        .collect()
}


#[test]
fn entropy_of_balanced_labels_is_one_bit() {
    for n in 1..=10 {
        let examples = (0..2 * n)
            .map(|i| Example::new(["x"], if i < n { "Yes" } else { "No" }))
            .collect::<Vec<_>>();
        assert!((entropy(&examples) - 1f64).abs() < TOLERANCE);
    }
}


#[test]
fn entropy_of_pure_sets_is_zero() {
    for n in 1..=10 {
        let examples = vec![Example::new(["x"], "Yes"); n];
        assert_eq!(entropy(&examples), 0f64);
    }
    assert_eq!(entropy::<Example>(&[]), 0f64);
}


#[test]
fn gains_are_never_negative() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..200 {
        let n_examples = rng.gen_range(0..30);
        let examples = random_examples(&mut rng, n_examples, 3, 4, 3);

        for attribute in 0..3 {
            let ig = information_gain(&examples, attribute);
            let gr = gain_ratio(&examples, attribute);
            let gg = gini_gain(&examples, attribute);
            assert!(ig >= -TOLERANCE, "information gain {ig}");
            assert!(gr >= -TOLERANCE, "gain ratio {gr}");
            assert!(gg >= -TOLERANCE, "gini gain {gg}");
            assert!(ig <= entropy(&examples) + TOLERANCE);
        }
    }
}


#[test]
fn random_trees_are_well_formed() {
    fn check(node: &Node, depth_left: usize) {
        match node {
            Node::Leaf { .. } => {},
            Node::Branch { children, .. } => {
                assert!(depth_left > 0);
                assert!(!children.is_empty());
                children.values()
                    .for_each(|child| check(child, depth_left - 1));
            },
        }
    }

    let names = ["a", "b", "c", "d"].map(String::from);
    let mut rng = StdRng::seed_from_u64(777);
    for _ in 0..100 {
        let n_examples = rng.gen_range(1..40);
        let examples = random_examples(&mut rng, n_examples, 4, 3, 2);
        let tree = build_tree(&examples, &names, &[0, 1, 2, 3]);

        check(&tree, names.len());
    }
}


#[test]
fn consistent_samples_are_fitted_exactly() {
    let names = ["a", "b", "c"].map(String::from);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let n_examples = rng.gen_range(1..30);
        let mut examples = random_examples(&mut rng, n_examples, 3, 3, 2);

        // Drop examples whose values already appeared with a label,
        // so that the sample has no contradiction.
        let mut seen = Vec::new();
        examples.retain(|example| {
            let values = example.values().to_vec();
            if seen.contains(&values) { return false; }
            seen.push(values);
            true
        });

        let sample = Dataset::new(names.clone(), examples).unwrap();
        let f = DecisionTreeBuilder::new(&sample)
            .build()
            .unwrap()
            .fit(&sample)
            .unwrap();
        assert_eq!(accuracy(&sample, &f), 1f64, "{f}");
    }
}


#[test]
fn exhausted_attributes_vote_for_majority() {
    let examples = vec![
        Example::new(["x"], "Yes"),
        Example::new(["x"], "No"),
        Example::new(["x"], "Yes"),
        Example::new(["x"], "Yes"),
    ];
    let names = ["a".to_string()];

    let tree = build_tree(&examples, &names, &[]);
    assert_eq!(tree, Node::leaf("Yes"));

    let freq = label_frequencies(&examples);
    assert_eq!(freq.get("Yes"), Some(3));
    assert_eq!(freq.get("No"), Some(1));
    assert_eq!(majority_label(&examples), Some("Yes"));
}
