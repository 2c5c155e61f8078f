//! Plain-text report export.

use crate::category::FeedbackCategory;
use crate::session::FeedbackSession;

/// Title line of the exported document.
pub const REPORT_TITLE: &str = "# Packaging Design Sentiment Analysis Report";

/// Heading of the combined-insights section.
pub const COMBINED_HEADING: &str = "## Combined Insights";

/// Placeholder rendered when no combined synthesis exists.
pub const COMBINED_PLACEHOLDER: &str = "No combined insights generated.";

/// Fixed filename offered for download.
pub const REPORT_FILENAME: &str = "packaging_sentiment_analysis.txt";

/// MIME type of the export artifact.
pub const REPORT_MIME: &str = "text/plain";

/// Assembles the three per-category results plus the combined synthesis into
/// one document with fixed section headings. Missing categories render an
/// explicit placeholder rather than being omitted, so the document structure
/// is always the same four sections.
pub fn render_report(session: &FeedbackSession) -> String {
    let mut report = String::new();
    report.push_str(REPORT_TITLE);
    report.push('\n');

    for category in FeedbackCategory::ALL {
        report.push('\n');
        report.push_str(category.report_heading());
        report.push('\n');
        match session.results.get(category) {
            Some(analysis) => report.push_str(analysis),
            None => report.push_str(category.report_placeholder()),
        }
        report.push('\n');
    }

    report.push('\n');
    report.push_str(COMBINED_HEADING);
    report.push('\n');
    match &session.combined {
        Some(combined) => report.push_str(combined),
        None => report.push_str(COMBINED_PLACEHOLDER),
    }
    report.push('\n');

    report
}
