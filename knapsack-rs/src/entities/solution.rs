use crate::entities::PackInstance;

/// Solution to a [`PackInstance`]: the best achievable total value and the
/// indices of the parts attaining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSolution {
    pub total_value: u64,
    /// Indices into [`PackInstance::parts`], unique, in ascending order
    pub indices: Vec<usize>,
}

impl PackSolution {
    /// The empty selection, for trivial instances.
    pub fn empty() -> Self {
        Self {
            total_value: 0,
            indices: vec![],
        }
    }

    /// Sum of the values of the selected parts.
    pub fn value_sum(&self, instance: &PackInstance) -> u64 {
        self.indices.iter().map(|&i| instance.parts[i].value).sum()
    }

    /// Combined volume of the selected parts.
    pub fn volume_used(&self, instance: &PackInstance) -> usize {
        self.indices.iter().map(|&i| instance.parts[i].volume).sum()
    }

    /// Fraction of the suitcase volume occupied by the selection.
    pub fn density(&self, instance: &PackInstance) -> f64 {
        match instance.capacity {
            0 => 0.0,
            c => self.volume_used(instance) as f64 / c as f64,
        }
    }
}
