use knapsack_rs::entities::PackInstance;

/// Shrinks an instance for testing: the capacity is divided by the factor and
/// the parts list truncated to the first `1 + n / factor` parts, both with
/// integer floor division. A factor of 1 leaves the instance untouched.
pub fn apply_reduction(mut instance: PackInstance, factor: usize) -> PackInstance {
    if factor > 1 {
        instance.capacity /= factor;
        let n_kept = 1 + instance.parts.len() / factor;
        instance.parts.truncate(n_kept);
    }
    instance
}
