// Reusable library API: visible to both CLI and WASM builds
pub mod assignment;
pub mod backtrack;
pub mod errors;
pub mod generator;
mod layout;
pub mod letters;
pub mod log;
pub mod operation;
pub mod puzzle;
pub mod solver;
pub mod unique;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use assignment::Assignment;
pub use errors::ParseError;
pub use letters::MAX_LETTERS;
pub use operation::Operation;
pub use puzzle::Puzzle;
pub use solver::{SolveResult, SolveStatus, SolverError};
pub use unique::{get_unique_solution, has_unique_solution, solve_add_unique, solve_sub_unique};
