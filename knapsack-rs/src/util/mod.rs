/// Checks to verify solver invariants, used in `debug_assert!` and tests
pub mod assertions;
