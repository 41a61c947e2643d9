use crate::entities::{PackInstance, PackSolution};
use crate::io::ext_repr::ExtSolution;

/// Exports a solution out of the library, mapping the selected indices back
/// to their part ids.
pub fn export(instance: &PackInstance, solution: &PackSolution) -> ExtSolution {
    match solution.indices.is_empty() {
        true => ExtSolution {
            part_ids: None,
            value: 0,
        },
        false => ExtSolution {
            part_ids: Some(
                solution
                    .indices
                    .iter()
                    .map(|&i| instance.parts[i].id.clone())
                    .collect(),
            ),
            value: solution.total_value,
        },
    }
}
