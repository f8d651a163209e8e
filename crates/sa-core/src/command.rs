//! Command orchestration: read the series, analyze it, report the outcome.
//!
//! Configuration is resolved once from the CLI surface into an explicit
//! [`AnalyzeConfig`] value and passed into [`execute`]; no state is
//! mutated between configuration and execution.

use std::io::BufRead;

use sa_chart::ControlChart;
use sa_common::OutputFormat;
use tracing::{debug, info, warn};

use crate::exit_codes::ExitCode;
use crate::input::InputSource;
use crate::report::ChartReport;

/// Configuration for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Where the series is read from.
    pub input: InputSource,
    /// Fail with [`ExitCode::AssertionFailed`] when the most recent
    /// observation is out of control.
    pub assert_last_point_in_control: bool,
    /// Report rendering format.
    pub format: OutputFormat,
}

/// Outcome of one analysis run: process status plus diagnostic message.
///
/// The message is empty on success; non-empty messages belong on the
/// error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub status: ExitCode,
    pub message: String,
}

impl AnalysisResult {
    fn success() -> Self {
        AnalysisResult {
            status: ExitCode::Success,
            message: String::new(),
        }
    }

    fn failed(status: ExitCode, message: String) -> Self {
        AnalysisResult { status, message }
    }
}

/// Read one numeric observation per line.
///
/// Surrounding whitespace is stripped; integers, decimals, and signed
/// values all parse. A line that fails to parse is skipped with a warning
/// naming the line and the parse error; reading continues. Only an I/O
/// failure from the underlying reader aborts the read.
pub fn read_series<R: BufRead>(reader: R) -> std::io::Result<Vec<f64>> {
    let mut series = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        match trimmed.parse::<f64>() {
            Ok(value) => series.push(value),
            Err(err) => {
                warn!("could not convert '{}' to a number: {}", trimmed, err);
            }
        }
    }
    Ok(series)
}

/// Run the full analysis pipeline for one invocation.
///
/// The report is printed to stdout whenever reading succeeds, even when
/// the in-control assertion subsequently fails. On I/O failure nothing is
/// printed and no statistics are computed.
pub fn execute(config: &AnalyzeConfig) -> AnalysisResult {
    info!("analyzing series defined in {}", config.input.name());

    let series = match load_series(&config.input) {
        Ok(series) => series,
        Err(err) => {
            return AnalysisResult::failed(
                ExitCode::IoError,
                format!("failed to read {}: {}", config.input.name(), err),
            );
        }
    };
    info!("series data: {:?}", series);

    let chart = ControlChart::new(series);
    let report = ChartReport::from_chart(&chart);
    match report.render(config.format) {
        Ok(rendered) => println!("{}", rendered),
        Err(err) => {
            return AnalysisResult::failed(
                ExitCode::IoError,
                format!("failed to render report: {}", err),
            );
        }
    }

    if config.assert_last_point_in_control && !chart.is_last_point_in_control() {
        let message = match chart.get_last_point() {
            Some(point) => format!(
                "last point (index={}, value={}) is out of control",
                point.index, point.value
            ),
            None => "series is empty; there is no last point to assert on".to_string(),
        };
        debug!("assertion failed: {}", message);
        return AnalysisResult::failed(ExitCode::AssertionFailed, message);
    }

    AnalysisResult::success()
}

fn load_series(input: &InputSource) -> sa_common::Result<Vec<f64>> {
    let reader = input.open()?;
    Ok(read_series(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;
    use std::path::PathBuf;

    fn read_str(input: &str) -> Vec<f64> {
        read_series(Cursor::new(input)).expect("in-memory read cannot fail")
    }

    // ========================================================================
    // read_series
    // ========================================================================

    #[test]
    fn reads_integers_decimals_and_signed_values() {
        let series = read_str("10\n-3.5\n+2.25\n0\n");
        assert_eq!(series, vec![10.0, -3.5, 2.25, 0.0]);
    }

    #[test]
    fn strips_surrounding_whitespace() {
        let series = read_str("  1.5  \n\t-2\t\n");
        assert_eq!(series, vec![1.5, -2.0]);
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() {
        let series = read_str("1\ntwo\n3\n");
        assert_eq!(series, vec![1.0, 3.0]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let series = read_str("1\n\n2\n   \n3\n");
        assert_eq!(series, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(read_str("").is_empty());
    }

    #[test]
    fn rendered_series_reads_back_identically() {
        let original = vec![10.0, -9.75, 0.125, 1e-3, 12345.6789];
        let rendered: String = original
            .iter()
            .map(|v| format!("{}\n", v))
            .collect();

        let series = read_str(&rendered);
        assert_eq!(series.len(), original.len());
        for (read, expected) in series.iter().zip(&original) {
            assert!((read - expected).abs() < 1e-12);
        }
    }

    // ========================================================================
    // execute
    // ========================================================================

    fn temp_series_file(lines: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(lines.as_bytes()).expect("write temp file");
        file
    }

    fn config_for(input: InputSource, assert_in_control: bool) -> AnalyzeConfig {
        AnalyzeConfig {
            input,
            assert_last_point_in_control: assert_in_control,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn missing_file_maps_to_io_error() {
        let config = config_for(
            InputSource::File(PathBuf::from("/nonexistent/series.txt")),
            false,
        );

        let result = execute(&config);
        assert_eq!(result.status, ExitCode::IoError);
        assert!(result.message.contains("/nonexistent/series.txt"));
    }

    #[test]
    fn in_control_series_succeeds_with_empty_message() {
        let file = temp_series_file("10.0\n9.0\n8.5\n11.5\n10.25\n9.75\n10.1\n9.9\n11\n10.5\n");
        let config = config_for(InputSource::File(file.path().to_path_buf()), true);

        let result = execute(&config);
        assert_eq!(result.status, ExitCode::Success);
        assert!(result.message.is_empty());
    }

    #[test]
    fn assertion_names_the_out_of_control_point() {
        let mut lines = "-1\n0\n1\n".repeat(9);
        lines.push_str("4\n");
        let file = temp_series_file(&lines);
        let config = config_for(InputSource::File(file.path().to_path_buf()), true);

        let result = execute(&config);
        assert_eq!(result.status, ExitCode::AssertionFailed);
        assert_eq!(
            result.message,
            "last point (index=27, value=4) is out of control"
        );
    }

    #[test]
    fn out_of_control_point_is_reported_not_asserted_without_flag() {
        let mut lines = "-1\n0\n1\n".repeat(9);
        lines.push_str("4\n");
        let file = temp_series_file(&lines);
        let config = config_for(InputSource::File(file.path().to_path_buf()), false);

        let result = execute(&config);
        assert_eq!(result.status, ExitCode::Success);
    }

    #[test]
    fn empty_series_fails_assertion_with_explanation() {
        let file = temp_series_file("");
        let config = config_for(InputSource::File(file.path().to_path_buf()), true);

        let result = execute(&config);
        assert_eq!(result.status, ExitCode::AssertionFailed);
        assert!(result.message.contains("empty"));
    }
}
