//! Diagnostics for the invoking pipeline and for humans
//!
//! Failures surface on two channels: workflow commands (`::error::` lines
//! on stdout) that GitHub Actions picks up as annotations, and styled
//! stderr messages for anyone running the binary by hand.

use console::style;

use crate::domain::IncrementedVersion;

/// Emits a GitHub workflow error command on standard output
pub fn emit_workflow_error(message: &str) {
    println!("::error::{}", message);
}

/// Format and print an error message in red
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Display the computed result for dry-run mode
pub fn display_dry_run(current: &str, next: &IncrementedVersion) {
    println!(
        "{} {} {} {}",
        style(current).dim(),
        style("->").dim(),
        style(&next.prefixed).green().bold(),
        style("(dry run, nothing written)").dim()
    );
}
