pub mod optimize;
pub use optimize::{solve, Solve};

mod problem;
mod solution;
