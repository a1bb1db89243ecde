mod analyzer;
mod duration;
mod failures;
mod section;
mod state;
mod summary;

pub use analyzer::GradleAnalyzer;
