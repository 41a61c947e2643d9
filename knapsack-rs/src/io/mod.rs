mod export;
mod import;

/// External (serializable) representations of suitcases, parts and reports.
pub mod ext_repr;

/// Exports a solution out of the library as a final report.
pub use export::export;

/// Imports and validates a suitcase/parts pair into the library.
pub use import::import;
