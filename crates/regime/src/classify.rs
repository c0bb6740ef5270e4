//! Sliding-window slope estimation and segment assembly.

use tracing::debug;

use crate::config::ClassifyConfig;
use crate::segment::{FlowRegime, FlowRegimeSegment};

/// Log-log slope between two derivative points, or `None` when either
/// derivative is missing or non-positive (log10 undefined — treated as "no
/// signal", not an error).
pub(crate) fn log_log_slope(t1: f64, d1: Option<f64>, t2: f64, d2: Option<f64>) -> Option<f64> {
    let d1 = d1.filter(|&d| d > 0.0)?;
    let d2 = d2.filter(|&d| d > 0.0)?;
    // t2 > t1 > 0 in a valid series, so the denominator is positive.
    Some((d2.log10() - d1.log10()) / (t2.log10() - t1.log10()))
}

/// Maps a slope to a regime. Thresholds are evaluated in priority order;
/// the first match wins.
pub(crate) fn regime_for_slope(slope: f64, late: bool) -> FlowRegime {
    if (slope - 1.0).abs() < 0.2 {
        FlowRegime::WellboreStorage
    } else if slope.abs() < 0.1 {
        FlowRegime::InfiniteActingRadialFlow
    } else if (slope - 0.5).abs() < 0.15 {
        FlowRegime::LinearFlow
    } else if slope > 0.8 && late {
        FlowRegime::BoundaryClosed
    } else if slope < -0.8 && late {
        FlowRegime::BoundaryConstantPressure
    } else {
        FlowRegime::Transition
    }
}

/// A labeled anchor window covering series indices `start..=end`.
pub(crate) struct LabeledWindow {
    pub regime: FlowRegime,
    pub start: usize,
    pub end: usize,
}

/// Labels every anchor window of the series.
pub(crate) fn label_windows(
    time: &[f64],
    derivative: &[Option<f64>],
    config: &ClassifyConfig,
) -> Vec<LabeledWindow> {
    let n = time.len();
    let mut windows = Vec::new();
    let mut i = 0;
    while i + config.window() < n {
        let end = i + config.window();
        let regime = match log_log_slope(time[i], derivative[i], time[end], derivative[end]) {
            Some(slope) => regime_for_slope(slope, config.boundary().is_late(i, n)),
            None => FlowRegime::Transition,
        };
        debug!(anchor = i, end, ?regime, "window labeled");
        windows.push(LabeledWindow {
            regime,
            start: i,
            end,
        });
        i += config.step();
    }
    windows
}

/// Merges contiguous same-label windows into segments.
///
/// A run of `Transition` windows closes the preceding segment but is never
/// emitted itself.
pub(crate) fn merge_windows(windows: &[LabeledWindow], time: &[f64]) -> Vec<FlowRegimeSegment> {
    let mut segments = Vec::new();
    let mut current: Option<(FlowRegime, usize, usize)> = None;

    for window in windows {
        match current {
            Some((regime, start, end)) if regime == window.regime => {
                current = Some((regime, start, window.end.max(end)));
            }
            _ => {
                if let Some((regime, start, end)) = current.take() {
                    if regime != FlowRegime::Transition {
                        segments.push(make_segment(regime, start, end, time));
                    }
                }
                current = Some((window.regime, window.start, window.end));
            }
        }
    }
    if let Some((regime, start, end)) = current {
        if regime != FlowRegime::Transition {
            segments.push(make_segment(regime, start, end, time));
        }
    }
    segments
}

fn make_segment(
    regime: FlowRegime,
    start: usize,
    end: usize,
    time: &[f64],
) -> FlowRegimeSegment {
    FlowRegimeSegment {
        regime,
        start_index: start,
        end_index: end,
        start_time: time[start],
        end_time: time[end],
    }
}
