//! Horizontal bar charts rendered with Unicode block characters.

use crate::format::{display_width, format_amount, pad_right};

/// Default bar width in character cells.
const DEFAULT_WIDTH: usize = 40;

/// A titled horizontal bar chart over labelled values.
///
/// Bars scale linearly to the maximum row value; zero and negative
/// values render an empty bar. Each row prints its value after the bar
/// with the standard 2-decimal formatting.
///
/// # Example
///
/// ```
/// use tethys_report::BarChart;
///
/// let mut chart = BarChart::new("Cost Comparison").with_width(20);
/// chart.push("Manual", 400.0);
/// chart.push("Auto", 100.0);
///
/// let text = chart.render();
/// assert!(text.starts_with("Cost Comparison\n"));
/// ```
#[derive(Debug, Clone)]
pub struct BarChart {
    title: String,
    rows: Vec<(String, f64)>,
    width: usize,
}

impl BarChart {
    /// Creates an empty chart with the default bar width.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
            width: DEFAULT_WIDTH,
        }
    }

    /// Sets the bar width in character cells.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Appends a labelled row.
    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.rows.push((label.into(), value));
    }

    /// Renders the chart: title line, then one aligned row per value.
    ///
    /// Labels are padded in display cells so localized labels with
    /// combining marks do not shift the bar border.
    pub fn render(&self) -> String {
        let lw = self
            .rows
            .iter()
            .map(|(label, _)| display_width(label))
            .max()
            .unwrap_or(0);
        let bw = self.width;
        let max = self.rows.iter().map(|&(_, v)| v).fold(0.0_f64, f64::max);

        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        for (label, value) in &self.rows {
            let filled = if max > 0.0 && *value > 0.0 {
                ((value / max) * bw as f64).round() as usize
            } else {
                0
            };
            let bar = "█".repeat(filled);
            let amount = format_amount(*value);
            out.push_str(&format!(
                "  {} │{bar:<bw$}│ {amount}\n",
                pad_right(label, lw)
            ));
        }
        out
    }
}
