pub mod orchestrator;
pub mod state;

pub use orchestrator::Pipeline;
pub use state::{RunOptions, RunSummary};
