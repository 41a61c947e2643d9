use serde::{Deserialize, Serialize};

/// External representation of the suitcase to be packed.
///
/// Numeric fields are kept as `f64` so non-integral input is seen and
/// rejected during import instead of being coerced.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSuitcase {
    /// Total volume available
    pub volume: f64,
}

/// External representation of a [`Part`](crate::entities::Part).
/// The parts source is a bare JSON array of these.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPart {
    /// Unique identifier of the part
    pub id: String,
    pub volume: f64,
    pub value: f64,
}

/// The final report: ids of the selected parts and the total value packed.
/// `part_ids` is `null` and `value` is `0` when nothing could be packed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtSolution {
    pub part_ids: Option<Vec<String>>,
    pub value: u64,
}
