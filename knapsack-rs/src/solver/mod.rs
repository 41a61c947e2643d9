use crate::entities::{PackInstance, PackSolution};
use crate::util::assertions;
use log::info;
use ndarray::Array2;
use std::time::Instant;
use thousands::Separable;

/// Exact solver for the 0-1 knapsack problem.
///
/// Builds the classic value table row by row (one row per part, one column per
/// unit of remaining capacity), keeping only the previous and current value
/// rows in memory. Which alternative each cell chose is recorded in a compact
/// decision matrix, from which the selected indices are reconstructed with a
/// single backward walk once the table is complete. O(n·C) time, O(C) space
/// for values and one bool per cell for decisions.
pub struct DPSolver {
    pub instance: PackInstance,
}

impl DPSolver {
    pub fn new(instance: PackInstance) -> Self {
        Self { instance }
    }

    pub fn solve(&self) -> PackSolution {
        let n = self.instance.parts.len();

        // no parts or no room means nothing to pack
        if n == 0 || self.instance.capacity == 0 {
            return PackSolution::empty();
        }

        let start = Instant::now();

        let mut table = CapacityTable::new(n, self.instance.capacity);
        for part in &self.instance.parts {
            table.push_row(part.volume, part.value);
        }
        let solution = table.extract(&self.instance);

        info!(
            "[DP] {} cell table built and walked in {:.3}ms",
            self.instance.n_table_cells().separate_with_commas(),
            start.elapsed().as_secs_f64() * 1000.0,
        );
        info!(
            "[DP] selected {}/{} parts with value {} at {:.1}% volume use",
            solution.indices.len(),
            n,
            solution.total_value,
            solution.density(&self.instance) * 100.0,
        );

        debug_assert!(assertions::solution_is_feasible(&self.instance, &solution));
        debug_assert!(assertions::solution_value_consistent(&self.instance, &solution));
        debug_assert!(assertions::solution_indices_valid(&self.instance, &solution));

        solution
    }
}

/// Rolling state of the dynamic program: the best-achievable values of the
/// last completed row, plus one decision bit per visited cell.
///
/// Cell `(i, col)` of the conceptual full table holds the best value using
/// only parts `0..i` with `col` capacity available. Row 0 and column 0 are
/// all zero and never materialized.
struct CapacityTable {
    /// Best value per remaining capacity, over all parts considered so far
    values: Vec<u64>,
    /// Scratch buffer the next row is written into
    scratch: Vec<u64>,
    /// `decisions[[i, col]]`: part `i` is included in the best solution at `col`
    decisions: Array2<bool>,
    /// Number of completed rows, i.e. parts considered so far
    row: usize,
}

impl CapacityTable {
    fn new(n: usize, capacity: usize) -> Self {
        Self {
            values: vec![0; capacity + 1],
            scratch: vec![0; capacity + 1],
            decisions: Array2::from_elem((n, capacity + 1), false),
            row: 0,
        }
    }

    /// Completes the next row of the table: best values considering one more part.
    fn push_row(&mut self, volume: usize, value: u64) {
        // column 0 stays untouched: zero capacity holds nothing
        for col in 1..self.values.len() {
            self.scratch[col] = if volume <= col {
                let value_with = value + self.values[col - volume];
                let value_without = self.values[col];
                // a tie is broken in favor of including the part
                if value_with >= value_without {
                    self.decisions[[self.row, col]] = true;
                    value_with
                } else {
                    value_without
                }
            } else {
                // the part cannot fit, the best solution without it carries over
                self.values[col]
            };
        }
        std::mem::swap(&mut self.values, &mut self.scratch);
        self.row += 1;
    }

    /// Reads the final cell and walks the decisions back to row 0, collecting
    /// the index of every included part.
    fn extract(&self, instance: &PackInstance) -> PackSolution {
        debug_assert_eq!(self.row, instance.parts.len());

        let capacity = self.values.len() - 1;
        let total_value = self.values[capacity];

        let mut indices = vec![];
        let mut col = capacity;
        for i in (0..self.row).rev() {
            if self.decisions[[i, col]] {
                indices.push(i);
                col -= instance.parts[i].volume;
            }
        }
        indices.reverse();

        PackSolution {
            total_value,
            indices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Part;

    fn instance(parts: &[(usize, u64)], capacity: usize) -> PackInstance {
        let parts = parts
            .iter()
            .enumerate()
            .map(|(i, &(volume, value))| Part::new(format!("part-{}", i + 1), volume, value))
            .collect();
        PackInstance::new(parts, capacity)
    }

    #[test]
    fn no_parts_yields_empty_solution() {
        let sol = DPSolver::new(instance(&[], 100)).solve();
        assert_eq!(sol, PackSolution::empty());
    }

    #[test]
    fn no_capacity_yields_empty_solution() {
        let sol = DPSolver::new(instance(&[(1, 10), (2, 20)], 0)).solve();
        assert_eq!(sol, PackSolution::empty());
    }

    #[test]
    fn exactly_fitting_part_is_taken() {
        let sol = DPSolver::new(instance(&[(5, 10)], 5)).solve();
        assert_eq!(sol.total_value, 10);
        assert_eq!(sol.indices, vec![0]);
    }

    #[test]
    fn tie_between_equal_value_alternatives_prefers_inclusion() {
        // a free filler of the same value competes with the exact fit,
        // the later part must still win its take-it branch on the tie
        let sol = DPSolver::new(instance(&[(0, 10), (5, 10)], 5)).solve();
        assert_eq!(sol.total_value, 10);
        assert_eq!(sol.indices, vec![1]);
    }

    #[test]
    fn zero_volume_part_is_included_alongside_others() {
        let sol = DPSolver::new(instance(&[(0, 7), (3, 5)], 4)).solve();
        assert_eq!(sol.total_value, 12);
        assert_eq!(sol.indices, vec![0, 1]);
    }

    #[test]
    fn oversized_parts_are_never_selected() {
        let sol = DPSolver::new(instance(&[(50, 100), (60, 100)], 10)).solve();
        assert_eq!(sol, PackSolution::empty());
    }

    #[test]
    fn four_part_suitcase_scenario() {
        let inst = instance(&[(81, 48), (71, 32), (42, 17), (44, 39)], 120);
        let sol = DPSolver::new(inst.clone()).solve();
        assert_eq!(sol.indices, vec![1, 3]);
        assert_eq!(sol.total_value, sol.value_sum(&inst));
        assert_eq!(sol.total_value, 71);
        assert!(sol.volume_used(&inst) <= 120);
    }
}
