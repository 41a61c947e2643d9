mod instance;
mod part;
mod solution;

pub use instance::PackInstance;
pub use part::Part;
pub use solution::PackSolution;
