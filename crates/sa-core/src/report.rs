//! Report assembly and rendering.
//!
//! The report carries every statistic the control chart exposes; rendering
//! is a pure function of the report, so text and JSON output stay in
//! agreement.

use sa_chart::{ControlChart, Observation};
use sa_common::{OutputFormat, Result};
use serde::Serialize;

/// All report fields for one analyzed series.
///
/// Undefined statistics (degenerate series) are NaN, which serializes to
/// `null` in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ChartReport {
    pub median: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub lower_control_limit: f64,
    pub upper_control_limit: f64,
    pub points_outside_lcl: Vec<Observation>,
    pub points_outside_ucl: Vec<Observation>,
    pub count: usize,
}

impl ChartReport {
    /// Capture every report field from the chart.
    pub fn from_chart(chart: &ControlChart) -> Self {
        ChartReport {
            median: chart.median(),
            mean: chart.mean(),
            std_dev: chart.std_dev(),
            lower_control_limit: chart.lower_control_limit(),
            upper_control_limit: chart.upper_control_limit(),
            points_outside_lcl: chart.points_outside_lcl(),
            points_outside_ucl: chart.points_outside_ucl(),
            count: chart.count(),
        }
    }

    /// Render the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("median: {}\n", self.median));
        out.push_str(&format!("mean: {}\n", self.mean));
        out.push_str(&format!("std dev: {}\n", self.std_dev));
        out.push_str(&format!(
            "lower control limit: {}\n",
            self.lower_control_limit
        ));
        out.push_str(&format!(
            "upper control limit: {}\n",
            self.upper_control_limit
        ));
        out.push_str(&format_points("lcl", &self.points_outside_lcl));
        out.push('\n');
        out.push_str(&format_points("ucl", &self.points_outside_ucl));
        out
    }
}

/// List the points outside one control limit, or an explicit "none".
fn format_points(name_of_cl: &str, points: &[Observation]) -> String {
    if points.is_empty() {
        return format!("points outside of {}: none", name_of_cl);
    }
    let rendered: Vec<String> = points.iter().map(|p| p.to_string()).collect();
    format!("points outside of {}: {}", name_of_cl, rendered.join(", "))
}
