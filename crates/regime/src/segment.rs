//! Flow regime labels and output segments.

use std::fmt;

use serde::Serialize;

/// A named flow regime, identified by the log-log slope of the pressure
/// derivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowRegime {
    /// Early-time unit slope: fluid compression/decompression in the
    /// wellbore.
    WellboreStorage,
    /// Middle-time flat derivative: radial flow with no boundary effects.
    InfiniteActingRadialFlow,
    /// Half slope: linear flow, e.g. into a fracture or channel.
    LinearFlow,
    /// Late-time steep upward slope: a closed (no-flow) boundary.
    BoundaryClosed,
    /// Late-time steep downward slope: a constant-pressure boundary.
    BoundaryConstantPressure,
    /// No recognized regime. Never emitted as a standalone segment.
    Transition,
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowRegime::WellboreStorage => "wellbore storage",
            FlowRegime::InfiniteActingRadialFlow => "infinite-acting radial flow",
            FlowRegime::LinearFlow => "linear flow",
            FlowRegime::BoundaryClosed => "closed boundary",
            FlowRegime::BoundaryConstantPressure => "constant-pressure boundary",
            FlowRegime::Transition => "transition",
        };
        f.write_str(name)
    }
}

/// A contiguous time interval attributed to a single flow regime.
///
/// Segments are non-overlapping and time-ordered; indices refer to the
/// derivative series the classifier ran on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowRegimeSegment {
    /// The identified regime.
    pub regime: FlowRegime,
    /// First series index covered by the segment.
    pub start_index: usize,
    /// Last series index covered by the segment (inclusive).
    pub end_index: usize,
    /// Time at `start_index`, hours.
    pub start_time: f64,
    /// Time at `end_index`, hours.
    pub end_time: f64,
}

impl FlowRegimeSegment {
    /// Returns the time span of the segment in hours.
    pub fn span(&self) -> f64 {
        self.end_time - self.start_time
    }
}
