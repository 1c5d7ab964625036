//! CLI presentation: header and summary text for a validation run.

use crate::report::ValidationReport;

const SEPARATOR: &str = "================================";

/// Printed before the first progress line.
pub fn format_header() -> String {
    "Validating profiles...\n\n".to_string()
}

/// Summary block printed after the walk completes.
pub fn format_summary(report: &ValidationReport) -> String {
    let mut s = String::new();
    s.push('\n');
    s.push_str(SEPARATOR);
    s.push_str("\nValidation Summary\n");
    s.push_str(SEPARATOR);
    s.push('\n');
    s.push_str(&format!("Profiles checked: {}\n", report.checked));
    s.push_str(&format!("✅ Passed: {}\n", report.passed));

    if !report.warnings.is_empty() {
        s.push_str(&format!("⚠️  Warnings: {}\n\n", report.warnings.len()));
        for w in &report.warnings {
            s.push_str(&format!("  {}: {}\n", w.file, w.message));
        }
    }

    if !report.errors.is_empty() {
        s.push_str(&format!("❌ Failed: {}\n\n", report.failed));
        for e in &report.errors {
            s.push_str(&format!("  {}: {}\n", e.file, e.message));
        }
    } else {
        s.push_str("\n✅ All profiles are valid!\n");
    }

    s
}
