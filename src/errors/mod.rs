pub mod types;

pub use types::HardblameError;
