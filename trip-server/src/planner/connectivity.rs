//! Line connectivity between two stops.

use crate::domain::Stop;

/// Line codes serving both `a` and `b`, in ascending lexical order.
///
/// An empty result means there is no through service between the stops.
pub fn shared_lines<'a>(a: &'a Stop, b: &Stop) -> Vec<&'a str> {
    // BTreeSet iteration is already sorted
    a.served_lines
        .iter()
        .filter(|line| b.served_lines.contains(*line))
        .map(String::as_str)
        .collect()
}
