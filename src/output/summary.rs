use std::path::Path;

use crate::generator::RunReport;

/// One-line result of a `generate` run.
#[must_use]
pub fn format_summary(report: &RunReport, total: usize, cache: &Path) -> String {
    let files = plural(report.files_scanned, "file", "files");
    if report.written {
        format!(
            "Scanned {files}: {} new, {total} total, written to {}",
            report.added,
            cache.display()
        )
    } else {
        format!(
            "Scanned {files}: cache {} is up to date ({total} total)",
            cache.display()
        )
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
