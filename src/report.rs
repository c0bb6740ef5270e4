//! JSON report structures for the analysis output.

use serde::Serialize;

use darcy_derivative::DerivativeSeries;
use darcy_regime::FlowRegimeSegment;
use darcy_validate::ValidationReport;

/// Top-level analysis report.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// Summary of the effective configuration.
    pub config: ConfigSummary,
    /// Validation outcome for the input rows.
    pub validation: ValidationReport,
    /// The derivative curve, one entry per retained point.
    pub derivative: Vec<DerivativeEntry>,
    /// Identified flow regime segments, time-ordered.
    pub regimes: Vec<FlowRegimeSegment>,
}

/// Effective configuration echoed into the report.
#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub n_input_rows: usize,
    pub n_points: usize,
    pub l: f64,
    pub smoothing_enabled: bool,
    pub n_exclusions: usize,
}

/// One point of the derivative curve.
#[derive(Debug, Serialize)]
pub struct DerivativeEntry {
    pub time: f64,
    pub pressure: f64,
    pub rate: f64,
    pub derivative: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivative_smoothed: Option<f64>,
}

/// Flattens the derivative series into report entries.
pub fn derivative_entries(series: &DerivativeSeries) -> Vec<DerivativeEntry> {
    (0..series.len())
        .map(|i| DerivativeEntry {
            time: series.time()[i],
            pressure: series.pressure()[i],
            rate: series.rate()[i],
            derivative: series.derivative()[i],
            derivative_smoothed: series.derivative_smoothed().and_then(|col| col[i]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivative_entries_flatten() {
        let series = DerivativeSeries::new(
            vec![1.0, 2.0],
            vec![10.0, 20.0],
            vec![120.0, 120.0],
            vec![None, Some(3.0)],
        )
        .unwrap();
        let entries = derivative_entries(&series);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].derivative, None);
        assert_eq!(entries[0].rate, 120.0);
        assert_eq!(entries[1].derivative, Some(3.0));
        assert_eq!(entries[1].derivative_smoothed, None);
    }

    #[test]
    fn test_report_serializes() {
        let report = AnalysisReport {
            config: ConfigSummary {
                n_input_rows: 10,
                n_points: 8,
                l: 0.2,
                smoothing_enabled: false,
                n_exclusions: 1,
            },
            validation: darcy_validate::validate(&[darcy_series::RawRow::new(1.0, 10.0)]),
            derivative: Vec::new(),
            regimes: Vec::new(),
        };
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"n_points\": 8"));
        assert!(json.contains("\"is_valid\": true"));
    }
}
