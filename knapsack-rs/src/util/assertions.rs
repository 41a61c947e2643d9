use crate::entities::{PackInstance, PackSolution, Part};
use itertools::Itertools;

pub fn instance_part_ids_unique(parts: &[Part]) -> bool {
    parts.iter().map(|p| &p.id).all_unique()
}

/// The selected parts fit in the suitcase.
pub fn solution_is_feasible(instance: &PackInstance, sol: &PackSolution) -> bool {
    sol.volume_used(instance) <= instance.capacity
}

/// The reported total value matches the sum of the selected parts' values.
pub fn solution_value_consistent(instance: &PackInstance, sol: &PackSolution) -> bool {
    sol.total_value == sol.value_sum(instance)
}

/// Every index is in bounds and no index appears more than once.
pub fn solution_indices_valid(instance: &PackInstance, sol: &PackSolution) -> bool {
    sol.indices.iter().all(|&i| i < instance.parts.len()) && sol.indices.iter().all_unique()
}
