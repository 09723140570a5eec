pub mod plot;
pub use plot::{plot, Plot};

mod points;
mod svg;
