use indexmap::IndexSet;

/// Aggregate test counts extracted from failure and summary lines.
///
/// `NotStarted` means no failure or summary pattern ever matched (the
/// "no test evidence found" state), which is distinct from counters that
/// were initialized and stayed at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestCounters {
    #[default]
    NotStarted,
    Started(TestCounts),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestCounts {
    /// Tests executed, summed across every matching summary line
    pub run: u64,
    /// Tests failed, summed the same way
    pub failed: u64,
    /// Tests skipped, summed the same way
    pub skipped: u64,
}

impl TestCounters {
    /// Returns the accumulated counts, or `None` when no test evidence
    /// was ever recorded.
    pub fn counts(self) -> Option<TestCounts> {
        match self {
            TestCounters::NotStarted => None,
            TestCounters::Started(counts) => Some(counts),
        }
    }
}

/// Mutable state accumulated across one analysis run.
///
/// Owned exclusively by a single [`GradleAnalyzer`](super::GradleAnalyzer)
/// run; both scan passes mutate it in place.
#[derive(Debug, Default)]
pub struct AnalysisState {
    /// True once any task marker, failure, or summary pattern is observed.
    /// Monotonic: never reset to false.
    pub tests_run: bool,
    /// Fully-qualified failing test identifiers, in detection order.
    /// Duplicates are permitted.
    pub tests_failed: Vec<String>,
    pub counters: TestCounters,
    /// Seconds reported by the last duration line seen, if any.
    pub pure_build_duration: Option<u64>,
    /// Test frameworks with detected evidence, de-duplicated, in
    /// detection order.
    pub frameworks: IndexSet<String>,
}

impl AnalysisState {
    pub fn mark_tests_run(&mut self) {
        self.tests_run = true;
    }

    /// Moves the counters out of `NotStarted` exactly once. Idempotent:
    /// later calls never re-zero accumulated values.
    pub fn ensure_counters_initialized(&mut self) {
        if self.counters == TestCounters::NotStarted {
            self.counters = TestCounters::Started(TestCounts::default());
        }
    }

    /// Records one failing test identifier.
    pub fn record_failed_test(&mut self, id: String) {
        self.mark_tests_run();
        self.ensure_counters_initialized();
        self.tests_failed.push(id);
    }

    /// Adds one summary line's counts to the running totals.
    pub fn add_counts(&mut self, run: u64, failed: u64, skipped: u64) {
        self.ensure_counters_initialized();
        if let TestCounters::Started(counts) = &mut self.counters {
            counts.run += run;
            counts.failed += failed;
            counts.skipped += skipped;
        }
    }

    pub fn add_framework(&mut self, name: &str) {
        self.frameworks.insert(name.to_string());
    }

    /// Final normalization pass. Counters only become `Started` alongside
    /// test evidence, so a state with no evidence keeps its first-class
    /// `NotStarted` value. Idempotent: running it again changes nothing.
    pub fn finalize(&mut self) {
        if !self.tests_run {
            self.counters = TestCounters::NotStarted;
        }
    }

    /// True when at least one failing test identifier was recorded, or
    /// when the initialized failed-counter is positive. A state whose
    /// counters were never initialized never reports failure.
    pub fn did_tests_fail(&self) -> bool {
        if !self.tests_failed.is_empty() {
            return true;
        }
        self.counters.counts().is_some_and(|counts| counts.failed > 0)
    }
}
