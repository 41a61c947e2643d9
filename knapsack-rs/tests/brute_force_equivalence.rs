use knapsack_rs::entities::{PackInstance, PackSolution, Part};
use knapsack_rs::solver::DPSolver;
use knapsack_rs::util::assertions;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

const N_RANDOM_INSTANCES: usize = 64;

/// Exhaustive recursive reference solver, only usable for small part counts.
/// Shares the solver's tie-break: on equal value the part is taken.
fn brute_force(parts: &[Part], n_considered: usize, available: usize) -> (u64, Vec<usize>) {
    if available == 0 || n_considered == 0 {
        return (0, vec![]);
    }
    let current = n_considered - 1;
    let part = &parts[current];

    if part.volume > available {
        return brute_force(parts, current, available);
    }

    let (value_without, excluded_set) = brute_force(parts, current, available);
    let (mut value_with, mut included_set) = brute_force(parts, current, available - part.volume);
    value_with += part.value;

    if value_without > value_with {
        (value_without, excluded_set)
    } else {
        included_set.push(current);
        (value_with, included_set)
    }
}

fn random_instance(rng: &mut SmallRng) -> PackInstance {
    let n = rng.random_range(1..=14);
    let parts = (0..n)
        .map(|i| {
            Part::new(
                format!("part-{}", i + 1),
                rng.random_range(0..=30),
                rng.random_range(0..=50),
            )
        })
        .collect();
    PackInstance::new(parts, rng.random_range(0..=100))
}

fn assert_invariants(instance: &PackInstance, sol: &PackSolution) {
    assert!(assertions::solution_is_feasible(instance, sol));
    assert!(assertions::solution_value_consistent(instance, sol));
    assert!(assertions::solution_indices_valid(instance, sol));
}

#[test]
fn dp_matches_brute_force_on_random_instances() {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..N_RANDOM_INSTANCES {
        let instance = random_instance(&mut rng);
        let sol = DPSolver::new(instance.clone()).solve();
        assert_invariants(&instance, &sol);

        let (bf_value, mut bf_indices) =
            brute_force(&instance.parts, instance.parts.len(), instance.capacity);
        bf_indices.sort_unstable();

        assert_eq!(
            sol.total_value, bf_value,
            "dp and brute force disagree on {instance:?}"
        );
        assert_eq!(
            sol.indices, bf_indices,
            "dp and brute force picked different parts on {instance:?}"
        );
    }
}

#[test]
fn profiled_workload_scale_completes() {
    // the shape of the workload the solver was sized for
    let mut rng = SmallRng::seed_from_u64(1);
    let parts = (0..40)
        .map(|i| {
            Part::new(
                format!("part-{}", i + 1),
                rng.random_range(1..=100),
                rng.random_range(1..=100),
            )
        })
        .collect();
    let instance = PackInstance::new(parts, 1584);

    let sol = DPSolver::new(instance.clone()).solve();
    assert_invariants(&instance, &sol);
    assert!(sol.total_value > 0);
}

#[test]
fn independent_solves_share_no_state() {
    let parts = vec![
        Part::new("part-1".into(), 81, 48),
        Part::new("part-2".into(), 71, 32),
        Part::new("part-3".into(), 42, 17),
        Part::new("part-4".into(), 44, 39),
    ];
    let instance = PackInstance::new(parts, 120);

    let first = DPSolver::new(instance.clone()).solve();
    let second = DPSolver::new(instance.clone()).solve();
    assert_eq!(first, second);
    assert_eq!(first.indices, vec![1, 3]);
    assert_eq!(first.total_value, 71);
}
