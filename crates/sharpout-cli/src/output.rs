//! Output formatting and reporting

use colored::*;

/// Summary statistics for a print run
#[derive(Debug, Clone)]
pub struct PrintSummary {
    pub files_checked: usize,
    pub written: usize,
    pub unchanged: usize,
    pub mismatched: usize,
    pub failed: usize,
}

impl PrintSummary {
    pub fn new(files_checked: usize) -> Self {
        Self {
            files_checked,
            written: 0,
            unchanged: 0,
            mismatched: 0,
            failed: 0,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Human-readable summary; `check` selects the wording of a `--check` run
    pub fn print(&self, check: bool) {
        println!("\n{}", "Summary:".bold());
        println!("  Files checked: {}", self.files_checked);

        if check {
            if self.mismatched > 0 {
                println!(
                    "  Would reformat: {}",
                    self.mismatched.to_string().yellow()
                );
            } else if !self.has_failures() {
                println!("  {} All files match", "✓".green());
            }
        } else if self.written > 0 {
            println!(
                "  Written: {} file{}",
                self.written.to_string().green(),
                plural(self.written)
            );
        }

        if self.has_failures() {
            println!("  Failed: {}", self.failed.to_string().red());
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Utility functions for output formatting
pub mod utils {
    /// Format duration in human-readable format
    pub fn format_duration(duration: std::time::Duration) -> String {
        let total_ms = duration.as_millis();

        if total_ms < 1000 {
            format!("{total_ms}ms")
        } else if total_ms < 60_000 {
            format!("{:.1}s", total_ms as f64 / 1000.0)
        } else {
            let minutes = total_ms / 60_000;
            let seconds = (total_ms % 60_000) as f64 / 1000.0;
            format!("{minutes}m {seconds:.1}s")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_duration() {
        assert_eq!(utils::format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(utils::format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(utils::format_duration(Duration::from_secs(90)), "1m 30.0s");
    }

    #[test]
    fn test_summary_failures() {
        let mut summary = PrintSummary::new(3);
        assert!(!summary.has_failures());
        summary.failed = 1;
        assert!(summary.has_failures());
        assert_eq!(plural(1), "");
        assert_eq!(plural(2), "s");
    }
}
