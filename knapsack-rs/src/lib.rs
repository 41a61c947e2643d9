//! An exact solver for the 0-1 knapsack problem: select a value-maximizing
//! subset of indivisible parts subject to a single volume capacity.
//!
//! The core is a dynamic program over a rolling two-row capacity table with a
//! compact decision matrix for selection reconstruction. Everything around it
//! (external JSON representations, import validation, report export) lives in
//! [`io`].

/// Entities to model a single packing problem: parts, instance and solution
pub mod entities;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// The dynamic-programming solver: capacity table construction and selection extraction
pub mod solver;

/// Helper functions which do not belong to any specific module
pub mod util;
