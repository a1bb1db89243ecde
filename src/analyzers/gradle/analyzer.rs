use log::info;

use super::section::extract_test_lines;
use super::state::AnalysisState;
use super::summary::analyze_test_lines;
use crate::report::TestReport;

const ANALYZER_NAME: &str = "java-gradle";
const BUILD_SYSTEM: &str = "Gradle";

/// Analyzer for Gradle build logs.
///
/// Runs two sequential passes over the log: the section extractor bounds
/// the test/task execution region, then the line analyzer scans that
/// region for failing tests, per-framework summary lines, and the build
/// duration. Both passes are best-effort pattern recognition over
/// semi-structured text; lines that match nothing contribute nothing.
pub struct GradleAnalyzer {
    state: AnalysisState,
}

impl GradleAnalyzer {
    pub fn new() -> Self {
        Self {
            state: AnalysisState::default(),
        }
    }

    /// Analyzes one build log, consuming the analyzer.
    pub fn analyze(mut self, lines: &[String]) -> TestReport {
        let test_lines = extract_test_lines(lines, &mut self.state);
        analyze_test_lines(&test_lines, &mut self.state);

        info!(
            "analysis complete: tests_run={}, failing tests={}",
            self.state.tests_run,
            self.state.tests_failed.len()
        );
        self.into_report()
    }

    fn into_report(self) -> TestReport {
        let did_tests_fail = self.state.did_tests_fail();
        let counts = self.state.counters.counts();

        TestReport {
            analyzer: ANALYZER_NAME.to_string(),
            build_system: BUILD_SYSTEM.to_string(),
            tests_run: self.state.tests_run,
            frameworks: self.state.frameworks.into_iter().collect(),
            num_tests_run: counts.map(|c| c.run),
            num_tests_failed: counts.map(|c| c.failed),
            num_tests_skipped: counts.map(|c| c.skipped),
            tests_failed: self.state.tests_failed,
            did_tests_fail,
            pure_build_duration: self.state.pure_build_duration,
        }
    }
}

impl Default for GradleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
