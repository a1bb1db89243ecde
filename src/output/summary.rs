use std::fmt::Write;

use comfy_table::Cell;

use crate::report::TestReport;

use super::styling::{accent, dim, fail, heading, pass, warn};
use super::tables::{
    color_coded_duration_cell, color_coded_failed_cell, color_coded_skipped_cell, create_table,
};

/// Prints a human-readable summary of a build-log analysis to stdout.
///
/// Displays an overview (build system, detected frameworks, duration), a
/// color-coded test-counts table, and the list of failing tests. Counters
/// that were never populated render as "no test evidence found" rather
/// than zeroes.
pub fn print_summary(report: &TestReport) {
    println!("{}", render_summary(report));
}

// Helper functions

fn add_section_header(output: &mut String, emoji: &str, title: &str) {
    let _ = writeln!(output, "{} {}", heading(emoji), heading(title).underlined());
}

fn format_duration(seconds: u64) -> String {
    if seconds >= 60 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else {
        format!("{seconds}s")
    }
}

fn render_summary(report: &TestReport) -> String {
    let mut output = String::new();

    // Overview section
    add_section_header(&mut output, "📊", "Overview");

    let tests_run_display = if report.tests_run {
        pass("yes")
    } else {
        warn("no")
    };
    let frameworks_display = if report.frameworks.is_empty() {
        "none detected".to_string()
    } else {
        report.frameworks.join(", ")
    };
    let duration_display = match report.pure_build_duration {
        Some(seconds) => format_duration(seconds),
        None => "unknown".to_string(),
    };

    let _ = writeln!(
        output,
        "  {} {}\n  {} {}\n  {} {}\n  {} {}\n",
        dim("Build system:"),
        accent(&report.build_system),
        dim("Tests run:"),
        tests_run_display,
        dim("Frameworks:"),
        accent(frameworks_display),
        dim("Build duration:"),
        accent(duration_display),
    );

    // Test results section
    add_section_header(&mut output, "🧪", "Test Results");

    match (
        report.num_tests_run,
        report.num_tests_failed,
        report.num_tests_skipped,
    ) {
        (Some(run), Some(failed), Some(skipped)) => {
            let mut table = create_table();
            table.set_header(vec![
                Cell::new("Run"),
                Cell::new("Failed"),
                Cell::new("Skipped"),
                Cell::new("Duration"),
            ]);
            let duration_cell = match report.pure_build_duration {
                Some(seconds) => color_coded_duration_cell(seconds),
                None => Cell::new("unknown"),
            };
            table.add_row(vec![
                Cell::new(run.to_string()),
                color_coded_failed_cell(failed),
                color_coded_skipped_cell(skipped),
                duration_cell,
            ]);
            let _ = writeln!(output, "{table}\n");
        }
        _ => {
            let _ = writeln!(output, "  {}\n", dim("No test evidence found in this log"));
        }
    }

    // Failed tests section
    if !report.tests_failed.is_empty() {
        add_section_header(&mut output, "❌", "Failed Tests");

        let mut table = create_table();
        table.set_header(vec![Cell::new("Test")]);
        for test in &report.tests_failed {
            table.add_row(vec![Cell::new(test)]);
        }
        let _ = writeln!(output, "{table}\n");

        let _ = writeln!(
            output,
            "  {} {}",
            fail(report.tests_failed.len()),
            dim("failing test(s) detected"),
        );
    } else if report.did_tests_fail {
        let _ = writeln!(
            output,
            "  {} {}",
            fail("✗"),
            dim("tests failed (no individual identifiers recovered)"),
        );
    } else if report.tests_run {
        let _ = writeln!(output, "  {} {}", pass("✓"), dim("no failing tests"));
    }

    output
}
