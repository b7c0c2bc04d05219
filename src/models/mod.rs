pub mod stats;
pub mod upstream;

pub use stats::*;
pub use upstream::*;
