//! Short and full statistics reports.
//!
//! A report is a read-only snapshot of [`Statistics`]. Numbers are rendered to
//! their exact decimal strings up front, so the JSON form never loses digits
//! and the text form matches it value for value.

use super::Statistics;
use crate::config::StatsFormat;
use crate::errors::Result;
use serde::Serialize;
use std::fmt::{self, Display, Write};

const UNSET: &str = "-";

/// Per-category counts plus, for full reports, the detailed summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    pub integer_count: u64,
    pub float_count: u64,
    pub string_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<FullStats>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullStats {
    pub integers: NumericSummary,
    pub floats: NumericSummary,
    pub strings: LengthSummary,
}

/// Min/max/sum/average of a numeric category. `min` and `max` stay `None`
/// until the category has members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumericSummary {
    pub min: Option<String>,
    pub max: Option<String>,
    pub sum: String,
    pub average: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthSummary {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl StatsReport {
    pub fn short(stats: &Statistics) -> Self {
        Self {
            integer_count: stats.integers.count,
            float_count: stats.floats.count,
            string_count: stats.strings.count,
            full: None,
        }
    }

    pub fn full(stats: &Statistics) -> Self {
        let full = FullStats {
            integers: NumericSummary {
                min: render_opt(&stats.integers.min),
                max: render_opt(&stats.integers.max),
                sum: stats.integers.sum.to_string(),
                average: stats.integers.average.to_string(),
            },
            floats: NumericSummary {
                min: render_opt(&stats.floats.min),
                max: render_opt(&stats.floats.max),
                sum: stats.floats.sum.to_string(),
                average: stats.floats.average.to_string(),
            },
            strings: LengthSummary {
                min_length: stats.strings.min_length,
                max_length: stats.strings.max_length,
            },
        };
        Self {
            full: Some(full),
            ..Self::short(stats)
        }
    }

    /// Render the counts section.
    pub fn short_text(&self) -> String {
        format!(
            "Short statistics:\nIntegers: {}\nFloats: {}\nStrings: {}\n",
            self.integer_count, self.float_count, self.string_count
        )
    }

    /// Render the detailed section, `None` for short reports.
    pub fn full_text(&self) -> Option<String> {
        let full = self.full.as_ref()?;
        let mut out = String::from("Full statistics:\n");
        write_numeric_line(&mut out, "Integers", self.integer_count, &full.integers);
        write_numeric_line(&mut out, "Floats", self.float_count, &full.floats);
        let _ = writeln!(
            out,
            "Strings: {} (Min Length: {}, Max Length: {})",
            self.string_count,
            display_or_unset(&full.strings.min_length),
            display_or_unset(&full.strings.max_length),
        );
        Some(out)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render the statistics requested by the short/full flags.
///
/// In text form both sections are printed when both flags are set. In JSON
/// form a single document is produced, detailed if `full` is set. Returns
/// `None` when no statistics were requested.
pub fn render_statistics(
    stats: &Statistics,
    short: bool,
    full: bool,
    format: StatsFormat,
) -> Result<Option<String>> {
    if !short && !full {
        return Ok(None);
    }

    let rendered = match format {
        StatsFormat::Json => {
            let report = if full {
                StatsReport::full(stats)
            } else {
                StatsReport::short(stats)
            };
            let mut json = report.to_json()?;
            json.push('\n');
            json
        }
        StatsFormat::Text => {
            let report = StatsReport::full(stats);
            let mut text = String::new();
            if short {
                text.push_str(&report.short_text());
            }
            if full {
                text.push_str(&report.full_text().unwrap_or_default());
            }
            text
        }
    };
    Ok(Some(rendered))
}

fn write_numeric_line(out: &mut String, label: &str, count: u64, summary: &NumericSummary) {
    let _ = writeln!(
        out,
        "{}: {} (Min: {}, Max: {}, Sum: {}, Avg: {})",
        label,
        count,
        summary.min.as_deref().unwrap_or(UNSET),
        summary.max.as_deref().unwrap_or(UNSET),
        summary.sum,
        summary.average,
    );
}

fn render_opt<T: Display>(value: &Option<T>) -> Option<String> {
    value.as_ref().map(ToString::to_string)
}

fn display_or_unset<T: Display>(value: &Option<T>) -> DisplayOrUnset<'_, T> {
    DisplayOrUnset(value)
}

struct DisplayOrUnset<'a, T>(&'a Option<T>);

impl<T: Display> Display for DisplayOrUnset<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => Display::fmt(value, f),
            None => f.write_str(UNSET),
        }
    }
}
