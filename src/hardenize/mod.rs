//! Hardenize upstream: login scraping, the HTTP client and the source seam
//! the pipeline reads through.

pub mod client;
pub mod login;
pub mod source;

pub use client::HardenizeClient;
pub use source::{Connector, HardenizeConnector, ScoreSource};
