//! Plain-text report printed by the command line tool

use std::fmt::Write;
use std::path::Path;

use crate::sleep_chart::timeline::Timeline;

/// Number of stage changes printed by default.
pub const DEFAULT_REPORT_LIMIT: usize = 50;

const SEPARATOR_WIDTH: usize = 30;

/// Renders the report for `timeline`, listing at most `limit` stage changes.
///
/// The total duration line is always taken from the last change, even when the listing
/// is truncated.
pub fn render(input_path: &Path, timeline: &Timeline, limit: usize) -> String {
    let mut out = String::new();
    let separator = "-".repeat(SEPARATOR_WIDTH);

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Processing: {}", input_path.display());
    let _ = writeln!(out, "{separator}");

    for change in timeline.iter().take(limit) {
        let _ = writeln!(out, "{} min: {}", change.minute, change.stage);
    }

    if let Some(total) = timeline.total_duration() {
        let _ = writeln!(out, "{separator}");
        let _ = writeln!(out, "Total Duration: {total} min");
    }

    out
}
