use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::state::AnalysisState;

lazy_static! {
    // Legacy Gradle task marker, e.g. ":compileJava"
    static ref LEGACY_TASK_RE: Regex = Regex::new(r"^:\S+").unwrap();
    // A bare colon at line start closes a legacy section
    static ref LEGACY_BOUNDARY_RE: Regex = Regex::new(r"^:").unwrap();
    // Newer Gradle task marker, e.g. "> Task :test"
    static ref NEW_TASK_RE: Regex = Regex::new(r"^> Task").unwrap();
    static ref BUILD_RESULT_RE: Regex = Regex::new(r"^BUILD (SUCCESSFUL|FAILED) in ").unwrap();
}

/// Where the extractor currently is relative to the test/task execution
/// region of the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    InLegacyTask,
    InNewTask,
}

impl Section {
    fn inside(self) -> bool {
        self != Section::Outside
    }
}

/// Collects the lines belonging to the test/task execution region.
///
/// Gradle emits no explicit test-start marker, so the first task line is
/// taken as the start of the region. Legacy task markers (`:name`) also
/// record that tests ran and that JUnit is a candidate framework; the
/// newer `> Task` markers defer that determination to section content.
///
/// The boundary handling is intentionally asymmetric: a bare `:` closing
/// a legacy section is excluded from the result, while the terminal
/// `BUILD SUCCESSFUL/FAILED in ...` line of a newer-format section is
/// included before the section closes. Downstream statistics depend on
/// the terminal line being visible to the line analyzer.
pub(super) fn extract_test_lines<'a>(
    lines: &'a [String],
    state: &mut AnalysisState,
) -> Vec<&'a str> {
    let mut section = Section::Outside;
    let mut test_lines: Vec<&str> = Vec::new();

    for line in lines {
        if LEGACY_TASK_RE.is_match(line) {
            section = Section::InLegacyTask;
            state.mark_tests_run();
            state.add_framework("JUnit");
        } else if LEGACY_BOUNDARY_RE.is_match(line) && section.inside() {
            // Boundary line itself is dropped
            section = Section::Outside;
        } else if NEW_TASK_RE.is_match(line) {
            section = Section::InNewTask;
        } else if BUILD_RESULT_RE.is_match(line) && section.inside() {
            // The terminal line carries the build duration; keep it
            test_lines.push(line);
            section = Section::Outside;
        }

        if section.inside() {
            test_lines.push(line);
        }
    }

    debug!(
        "extracted {} test lines from {} log lines",
        test_lines.len(),
        lines.len()
    );
    test_lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| (*line).to_string()).collect()
    }

    #[cfg(test)]
    mod legacy_markers {
        use super::*;

        #[test]
        fn task_marker_opens_section_and_includes_itself() {
            let log = lines(&[":compileJava", "some output", "more output"]);
            let mut state = AnalysisState::default();

            let test_lines = extract_test_lines(&log, &mut state);

            assert_eq!(
                test_lines,
                vec![":compileJava", "some output", "more output"],
                "The marker line and everything after it should be included"
            );
        }

        #[test]
        fn task_marker_records_tests_run_and_junit() {
            let log = lines(&[":test"]);
            let mut state = AnalysisState::default();

            extract_test_lines(&log, &mut state);

            assert!(state.tests_run, "Legacy markers imply tests ran");
            assert!(
                state.frameworks.contains("JUnit"),
                "Legacy markers register JUnit as a candidate framework"
            );
        }

        #[test]
        fn bare_colon_closes_section_and_is_excluded() {
            let log = lines(&[":test", "task output", ":", "outside output"]);
            let mut state = AnalysisState::default();

            let test_lines = extract_test_lines(&log, &mut state);

            assert_eq!(
                test_lines,
                vec![":test", "task output"],
                "The closing colon and lines after it should be excluded"
            );
        }

        #[test]
        fn second_task_marker_keeps_section_open() {
            let log = lines(&[":compileJava", ":test", "output"]);
            let mut state = AnalysisState::default();

            let test_lines = extract_test_lines(&log, &mut state);

            assert_eq!(
                test_lines,
                vec![":compileJava", ":test", "output"],
                "Consecutive task markers should not close the section"
            );
        }

        #[test]
        fn bare_colon_outside_section_is_ignored() {
            let log = lines(&["preamble", ":", "still preamble"]);
            let mut state = AnalysisState::default();

            let test_lines = extract_test_lines(&log, &mut state);

            assert!(
                test_lines.is_empty(),
                "A boundary line with no open section should contribute nothing"
            );
        }
    }

    #[cfg(test)]
    mod new_markers {
        use super::*;

        #[test]
        fn task_marker_opens_section_without_side_effects() {
            let log = lines(&["> Task :test", "task output"]);
            let mut state = AnalysisState::default();

            let test_lines = extract_test_lines(&log, &mut state);

            assert_eq!(test_lines, vec!["> Task :test", "task output"]);
            assert!(
                !state.tests_run,
                "Newer markers defer the tests-run determination to section content"
            );
            assert!(
                state.frameworks.is_empty(),
                "Newer markers register no framework"
            );
        }

        #[test]
        fn build_result_line_is_included_then_closes_section() {
            let log = lines(&[
                "> Task :test",
                "output",
                "BUILD SUCCESSFUL in 5s",
                "outside output",
            ]);
            let mut state = AnalysisState::default();

            let test_lines = extract_test_lines(&log, &mut state);

            assert_eq!(
                test_lines,
                vec!["> Task :test", "output", "BUILD SUCCESSFUL in 5s"],
                "The terminal build-result line should be the last included line"
            );
        }

        #[test]
        fn build_result_line_outside_section_is_excluded() {
            let log = lines(&["BUILD FAILED in 2m 3s"]);
            let mut state = AnalysisState::default();

            let test_lines = extract_test_lines(&log, &mut state);

            assert!(
                test_lines.is_empty(),
                "A build-result line with no open section should be excluded"
            );
        }

        #[test]
        fn build_result_closes_legacy_section_too() {
            let log = lines(&[":test", "BUILD SUCCESSFUL in 5s", "after"]);
            let mut state = AnalysisState::default();

            let test_lines = extract_test_lines(&log, &mut state);

            assert_eq!(
                test_lines,
                vec![":test", "BUILD SUCCESSFUL in 5s"],
                "Legacy sections also end at the build-result line"
            );
        }
    }

    #[test]
    fn preamble_lines_before_any_marker_are_excluded() {
        let log = lines(&["Downloading gradle", "Welcome to Gradle", ":build", "output"]);
        let mut state = AnalysisState::default();

        let test_lines = extract_test_lines(&log, &mut state);

        assert_eq!(test_lines, vec![":build", "output"]);
    }

    #[test]
    fn empty_input_yields_empty_subsequence() {
        let log: Vec<String> = vec![];
        let mut state = AnalysisState::default();

        let test_lines = extract_test_lines(&log, &mut state);

        assert!(test_lines.is_empty());
        assert!(!state.tests_run, "No lines should mean no test evidence");
    }
}
