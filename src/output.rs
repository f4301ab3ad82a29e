//! @ai:module:intent Format run reports for different formats (JSON, text)
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_run_report
//! @ai:module:depends_on runner
//! @ai:module:stateless true

use crate::runner::RunReport;
use colored::Colorize;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format a run report as a string
/// @ai:effects pure
pub fn format_run_report(report: &RunReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(report).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(report).unwrap_or_default(),
        OutputFormat::Text => format_run_report_text(report),
    }
}

/// @ai:intent Format a run report as human-readable text
/// @ai:effects pure
fn format_run_report_text(report: &RunReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} Processed {} files\n",
        "OK".green().bold(),
        report.files_processed
    ));

    if report.annotations_inserted > 0 {
        output.push_str(&format!(
            "  {} annotations inserted\n",
            report.annotations_inserted.to_string().green()
        ));
    }

    if report.annotations_removed > 0 {
        output.push_str(&format!(
            "  {} annotations removed\n",
            report.annotations_removed.to_string().yellow()
        ));
    }

    if report.imports_replaced > 0 {
        output.push_str(&format!(
            "  {} imports replaced\n",
            report.imports_replaced.to_string().cyan()
        ));
    }

    output
}
