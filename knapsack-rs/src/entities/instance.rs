use crate::entities::Part;
use crate::util::assertions;

/// Instance of the 0-1 knapsack problem: a set of parts to be packed into a
/// single suitcase with a fixed volume capacity.
#[derive(Debug, Clone)]
pub struct PackInstance {
    /// The candidate parts, in input order
    pub parts: Vec<Part>,
    /// Total volume available in the suitcase
    pub capacity: usize,
}

impl PackInstance {
    pub fn new(parts: Vec<Part>, capacity: usize) -> Self {
        assert!(
            assertions::instance_part_ids_unique(&parts),
            "All parts should have unique ids"
        );
        Self { parts, capacity }
    }

    /// Combined volume of all candidate parts, regardless of whether they fit.
    pub fn total_part_volume(&self) -> usize {
        self.parts.iter().map(|p| p.volume).sum()
    }

    pub fn part(&self, idx: usize) -> &Part {
        &self.parts[idx]
    }

    /// Number of cells the DP table spans for this instance.
    pub fn n_table_cells(&self) -> usize {
        self.parts.len() * (self.capacity + 1)
    }
}
