use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::analyzers::GradleAnalyzer;
use crate::error;
use crate::output;

#[derive(Parser)]
#[command(name = "buildlens")]
#[command(author, version, about = "Build Log Insights Tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,

    #[arg(short, long, global = true, default_value_t = false)]
    summary: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a Gradle build log
    Gradle {
        /// Path to the log file, or '-' to read from stdin
        log: PathBuf,
    },
}

impl Cli {
    fn execute_gradle(&self, log: &Path) -> Result<()> {
        info!("Analyzing Gradle build log: {}", log.display());

        let lines = read_log_lines(log)?;
        let report = GradleAnalyzer::new().analyze(&lines);

        if self.summary {
            output::print_summary(&report);
            return Ok(());
        }

        let json_output = report.to_json(self.pretty)?;

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, json_output)?;
            info!("Report written to: {}", output_path.display());
        } else {
            println!("{}", json_output);
        }

        Ok(())
    }

    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Gradle { log } => self.execute_gradle(log),
        }
    }
}

/// Reads a build log into lines. `-` reads from stdin. CRLF line endings
/// are handled by `str::lines`.
fn read_log_lines(path: &Path) -> error::Result<Vec<String>> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };

    Ok(raw.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_log_lines_splits_on_newlines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ":test").unwrap();
        writeln!(file, "BUILD SUCCESSFUL in 5s").unwrap();

        let lines = read_log_lines(file.path()).unwrap();

        assert_eq!(lines, vec![":test", "BUILD SUCCESSFUL in 5s"]);
    }

    #[test]
    fn read_log_lines_strips_crlf() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b":test\r\nBUILD SUCCESSFUL in 5s\r\n").unwrap();

        let lines = read_log_lines(file.path()).unwrap();

        assert_eq!(
            lines,
            vec![":test", "BUILD SUCCESSFUL in 5s"],
            "Carriage returns should not leak into the analyzed lines"
        );
    }

    #[test]
    fn read_log_lines_reports_missing_file() {
        let result = read_log_lines(Path::new("/definitely/not/a/real/log.txt"));

        assert!(result.is_err());
    }

    #[test]
    fn file_analysis_matches_in_memory_analysis() {
        let content = ":test\nco.paralleluniverse.fibers.FiberTest > testSerializationWithThreadLocals[0] FAILED\nBUILD FAILED in 45s\n";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let from_file = GradleAnalyzer::new().analyze(&read_log_lines(file.path()).unwrap());
        let in_memory: Vec<String> = content.lines().map(str::to_string).collect();
        let from_memory = GradleAnalyzer::new().analyze(&in_memory);

        assert_eq!(from_file.tests_failed, from_memory.tests_failed);
        assert_eq!(from_file.pure_build_duration, from_memory.pure_build_duration);
        assert_eq!(from_file.did_tests_fail, from_memory.did_tests_fail);
    }
}
