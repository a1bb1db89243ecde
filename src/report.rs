use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Test insights extracted from one build log.
///
/// The three `num_tests_*` counters are `None` when no failure or summary
/// pattern ever matched ("no test evidence found"), which is distinct
/// from `Some(0)`, zero tests executed.
#[derive(Debug, Serialize, Deserialize)]
pub struct TestReport {
    /// Analyzer that produced this report (e.g. "java-gradle")
    pub analyzer: String,
    /// Build system the log came from (e.g. "Gradle")
    pub build_system: String,
    /// Whether any evidence of a test run was found
    pub tests_run: bool,
    /// Detected test frameworks, in detection order
    pub frameworks: Vec<String>,
    pub num_tests_run: Option<u64>,
    pub num_tests_failed: Option<u64>,
    pub num_tests_skipped: Option<u64>,
    /// Fully-qualified failing test identifiers, in detection order
    pub tests_failed: Vec<String>,
    pub did_tests_fail: bool,
    /// Build/test phase duration in seconds, from the last duration line
    pub pure_build_duration: Option<u64>,
}

impl TestReport {
    /// Serializes the report to JSON, compact or pretty-printed.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
