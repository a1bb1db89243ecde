mod styling;
mod summary;
mod tables;

use console::style;

pub use summary::print_summary;

/// Prints the `BuildLens` banner to stderr.
///
/// Displays the tool name, version, and description at the start of execution.
pub fn print_banner() {
    eprintln!(
        r"
{} {}
  {}
",
        style("🔍 BuildLens").magenta().bold(),
        style(env!("CARGO_PKG_VERSION")).dim(),
        style("Build Log Insights Tool").dim()
    );
}
