use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::state::AnalysisState;

lazy_static! {
    // Matches the likes of
    //   co.paralleluniverse.fibers.FiberTest > testSerializationWithThreadLocals[0] FAILED
    //   DownloadExtensionTest > downloadSingleFileError() FAILED
    static ref SIMPLE_FAILED_RE: Regex =
        Regex::new(r"(\S+) > ([^\s.\[(]+(?:\[.+\]|\(\))?) FAILED$").unwrap();
    // Matches nested suite breadcrumbs like
    //   ProtocolCompatibilityTest > serviceTalkToServiceTalkClientTimeout(boolean, boolean, String)
    //   > io.servicetalk.grpc.netty.ProtocolCompatibilityTest.serviceTalkToServiceTalkClientTimeout
    //   (boolean, boolean, String)[10] FAILED
    static ref BREADCRUMB_FAILED_RE: Regex =
        Regex::new(r"(?:\S+(?:\(.*\))? > )+([^\s\[(]+(?:\(.*\))?(?:\[.+\]|\(\))?) FAILED").unwrap();
    // Matches TestNG suite chains like
    //   TestNG > Regression2 > test.groupinvocation.GroupSuiteTest.Regression2 FAILED
    static ref TESTNG_FAILED_RE: Regex =
        Regex::new(r"(?:.* >)+ ([^\s\[(]+\.[^\[(]+(?:\[.+\])?) FAILED$").unwrap();
}

type FailureMatcher = fn(&str) -> Option<String>;

/// Matchers in strict priority order; the first one that matches a line
/// wins and the rest are not tried.
const FAILURE_MATCHERS: [FailureMatcher; 3] = [match_simple, match_breadcrumb, match_testng];

fn match_simple(line: &str) -> Option<String> {
    SIMPLE_FAILED_RE
        .captures(line)
        .map(|caps| format!("{}.{}", &caps[1], &caps[2]))
}

fn match_breadcrumb(line: &str) -> Option<String> {
    BREADCRUMB_FAILED_RE
        .captures(line)
        .map(|caps| caps[1].to_string())
}

fn match_testng(line: &str) -> Option<String> {
    TESTNG_FAILED_RE
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Tries the failure matchers against one line, recording the first
/// match. Returns whether a failing test was recorded.
pub(super) fn match_failed_test(line: &str, state: &mut AnalysisState) -> bool {
    for matcher in FAILURE_MATCHERS {
        if let Some(id) = matcher(line) {
            debug!("failing test detected: {id}");
            state.record_failed_test(id);
            return true;
        }
    }
    false
}
