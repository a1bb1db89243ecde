use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::duration::convert_gradle_time_to_seconds;
use super::failures::match_failed_test;
use super::state::AnalysisState;

lazy_static! {
    // Gradle's JUnit report, e.g. "42 tests completed, 3 failed, 1 skipped"
    static ref JUNIT_SUMMARY_RE: Regex =
        Regex::new(r"(\d+) tests completed(?:, (\d+) failed)?(?:, (\d+) skipped)?").unwrap();
    // TestNG's report, e.g. "Total tests run: 10, Failures: 2, Skips: 0"
    static ref TESTNG_SUMMARY_RE: Regex =
        Regex::new(r"^Total tests run: (\d+), Failures: (\d+), Skips: (\d+)").unwrap();
    // Maven/Ant style duration, also printed by older Gradle versions
    static ref TOTAL_TIME_RE: Regex = Regex::new(r"Total time: (.*)").unwrap();
    static ref BUILD_RESULT_TIME_RE: Regex =
        Regex::new(r"BUILD (?:FAILED|SUCCESSFUL) in (.*)").unwrap();
}

fn capture_count(caps: &Captures<'_>, index: usize) -> u64 {
    caps.get(index)
        .and_then(|group| group.as_str().parse().ok())
        .unwrap_or(0)
}

/// Scans the extracted test lines in order, accumulating failure, summary,
/// and duration evidence into the analysis state.
///
/// Summary counters are summed across every matching line; the build
/// duration is overwritten on each match, so the last duration line wins.
pub(super) fn analyze_test_lines(lines: &[&str], state: &mut AnalysisState) {
    for line in lines {
        match_failed_test(line, state);

        if let Some(caps) = JUNIT_SUMMARY_RE.captures(line) {
            state.mark_tests_run();
            state.add_framework("JUnit");
            state.add_counts(
                capture_count(&caps, 1),
                capture_count(&caps, 2),
                capture_count(&caps, 3),
            );
            continue;
        }

        if let Some(caps) = TESTNG_SUMMARY_RE.captures(line) {
            state.mark_tests_run();
            state.add_framework("testng");
            state.add_counts(
                capture_count(&caps, 1),
                capture_count(&caps, 2),
                capture_count(&caps, 3),
            );
            continue;
        }

        if let Some(caps) = TOTAL_TIME_RE.captures(line) {
            state.pure_build_duration = Some(convert_gradle_time_to_seconds(&caps[1]));
        }

        if let Some(caps) = BUILD_RESULT_TIME_RE.captures(line) {
            state.pure_build_duration = Some(convert_gradle_time_to_seconds(&caps[1]));
        }
    }

    state.finalize();
}
