/*!
 * Reporting functionality for ProjDump
 *
 * Renders the end-of-run summary as a console table using the tabled
 * library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::dumper::DumpSummary;

/// Result of a dump run, ready for presentation
#[derive(Debug, Clone)]
pub struct DumpReport {
    /// Output file path
    pub output_file: String,
    /// Time taken by the run
    pub duration: Duration,
    /// Counters accumulated during the run
    pub summary: DumpSummary,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
    // JSON, HTML, etc.
}

/// Report generator for dump results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string for a dump run
    pub fn generate_report(&self, report: &DumpReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
            // Additional formats could be added here
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &DumpReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &DumpReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let summary = &report.summary;
        let rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Scanned".to_string(),
                value: self.format_number(summary.total_scanned),
            },
            SummaryRow {
                key: "📁 Skipped by Folder".to_string(),
                value: self.format_number(summary.skipped_by_folder),
            },
            SummaryRow {
                key: "🏷️ Skipped by Extension".to_string(),
                value: self.format_number(summary.skipped_by_extension),
            },
            SummaryRow {
                key: "📝 Files Included".to_string(),
                value: self.format_number(summary.included),
            },
            SummaryRow {
                key: "⚠️ Read Errors".to_string(),
                value: self.format_number(summary.errored),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &DumpReport) -> String {
        let summary_table = self.create_summary_table(report);
        format!("✅  DUMP COMPLETE\n{}", summary_table)
    }
}
