//! Constants shared across the crate.

/// Label of the leaf grown from a node that received no example.
pub const NO_DATA_LABEL: &str = "no data";

/// Label reported when a classified example leaves the learned paths.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Header of the target column in CSV exports.
pub const TARGET_HEADER: &str = "Decision";

/// Column separator of CSV exports.
pub const CSV_SEPARATOR: char = ';';

/// Two split scores closer than this are considered equal.
/// The attribute seen first wins such a tie.
pub const TIE_TOLERANCE: f64 = 1e-12;
