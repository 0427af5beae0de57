//! The supplier-selection problem:
//! fourteen suppliers described by four categorical attributes,
//! each labeled `Yes` (choose) or `No` (reject).
use crate::{Dataset, Example};


/// Names of the four attributes, in column order.
pub const ATTRIBUTE_NAMES: [&str; 4] = [
    "Price",
    "Quality",
    "DeliveryTime",
    "Reliability",
];


const TABLE: [([&str; 4], &str); 14] = [
    (["low",    "high",   "fast",   "high"  ], "Yes"),
    (["medium", "high",   "normal", "high"  ], "Yes"),
    (["high",   "high",   "fast",   "high"  ], "No" ),
    (["low",    "medium", "slow",   "medium"], "Yes"),
    (["low",    "low",    "slow",   "low"   ], "No" ),
    (["medium", "medium", "normal", "medium"], "Yes"),
    (["high",   "medium", "slow",   "medium"], "No" ),
    (["medium", "low",    "fast",   "high"  ], "No" ),
    (["low",    "high",   "slow",   "medium"], "Yes"),
    (["medium", "high",   "slow",   "low"   ], "No" ),
    (["high",   "high",   "normal", "medium"], "No" ),
    (["low",    "medium", "normal", "high"  ], "Yes"),
    (["medium", "medium", "fast",   "low"   ], "No" ),
    (["low",    "low",    "normal", "medium"], "No" ),
];


/// Returns the 14 labeled suppliers.
pub fn supplier_dataset() -> Dataset {
    let examples = TABLE.iter()
        .map(|(values, label)| Example::new(*values, *label))
        .collect::<Vec<_>>();

    let names = ATTRIBUTE_NAMES.iter()
        .map(|name| name.to_string())
        .collect();
    Dataset::new_unchecked(names, examples)
}


/// Returns the supplier to be classified, as `(attribute, value)` pairs.
pub fn new_supplier() -> [(&'static str, &'static str); 4] {
    [
        ("Price",        "medium"),
        ("Quality",      "high"),
        ("DeliveryTime", "fast"),
        ("Reliability",  "high"),
    ]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_passes_validation() {
        let sample = supplier_dataset();
        let checked = Dataset::new(
            sample.attribute_names().to_vec(),
            sample.examples().to_vec(),
        );
        assert_eq!(checked, Ok(sample));
    }
}
