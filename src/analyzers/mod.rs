mod gradle;

pub use gradle::GradleAnalyzer;
