//! Review analysis

pub mod analyzer;
pub mod mock;
pub mod remote;
pub mod intake;

pub use analyzer::{analyzer_from_config, ReviewAnalyzer};
