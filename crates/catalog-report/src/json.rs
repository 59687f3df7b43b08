//! Machine-readable report.

use catalog_model::RunReport;

/// Pretty-printed JSON of the full report.
pub fn render_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
