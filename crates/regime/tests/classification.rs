use darcy_derivative::DerivativeSeries;
use darcy_regime::{BoundaryPolicy, ClassifyConfig, FlowRegime, classify};

/// Log-spaced times covering `[1, 100]` hours with `n` points, plus a
/// derivative column `d(t) = scale * t^exponent`.
fn power_law_series(n: usize, scale: f64, exponent: f64) -> DerivativeSeries {
    let time: Vec<f64> = (0..n)
        .map(|i| 10f64.powf(2.0 * i as f64 / (n - 1) as f64))
        .collect();
    let pressure = vec![2000.0; n];
    let rate = vec![0.0; n];
    let derivative: Vec<Option<f64>> = time.iter().map(|t| Some(scale * t.powf(exponent))).collect();
    DerivativeSeries::new(time, pressure, rate, derivative).unwrap()
}

#[test]
fn test_flat_derivative_is_single_radial_flow_segment() {
    let series = power_law_series(41, 10.0, 0.0);
    let segments = classify(&series, &ClassifyConfig::default()).unwrap();

    assert_eq!(segments.len(), 1);
    let segment = &segments[0];
    assert_eq!(segment.regime, FlowRegime::InfiniteActingRadialFlow);
    // spans approximately [1, 100]: starts at the first point, ends within
    // one window of the last
    assert_eq!(segment.start_index, 0);
    assert!((segment.start_time - 1.0).abs() < 1e-9);
    assert!(segment.end_time > 60.0);
}

#[test]
fn test_unit_slope_derivative_is_wellbore_storage() {
    let series = power_law_series(41, 1.0, 1.0);
    let segments = classify(&series, &ClassifyConfig::default()).unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].regime, FlowRegime::WellboreStorage);
}

#[test]
fn test_half_slope_derivative_is_linear_flow() {
    let series = power_law_series(41, 2.0, 0.5);
    let segments = classify(&series, &ClassifyConfig::default()).unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].regime, FlowRegime::LinearFlow);
}

#[test]
fn test_steep_late_slope_is_closed_boundary_in_second_half_only() {
    // Slope 1.2 is outside every early-time bucket, so the first half is
    // all Transition and only the late windows form a segment.
    let series = power_law_series(41, 1.0, 1.2);
    let segments = classify(&series, &ClassifyConfig::default()).unwrap();

    assert_eq!(segments.len(), 1);
    let segment = &segments[0];
    assert_eq!(segment.regime, FlowRegime::BoundaryClosed);
    assert!(segment.start_index >= 20);
}

#[test]
fn test_steep_negative_late_slope_is_constant_pressure_boundary() {
    let series = power_law_series(41, 1000.0, -1.0);
    let segments = classify(&series, &ClassifyConfig::default()).unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].regime, FlowRegime::BoundaryConstantPressure);
}

#[test]
fn test_always_policy_extends_boundary_to_early_time() {
    let series = power_law_series(41, 1.0, 1.2);
    let config = ClassifyConfig::default().with_boundary(BoundaryPolicy::Always);
    let segments = classify(&series, &config).unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].regime, FlowRegime::BoundaryClosed);
    assert_eq!(segments[0].start_index, 0);
}

#[test]
fn test_regime_change_produces_two_segments() {
    // Unit slope up to t = 10, flat after: wellbore storage into radial flow.
    let n = 61;
    let time: Vec<f64> = (0..n)
        .map(|i| 10f64.powf(2.0 * i as f64 / (n - 1) as f64))
        .collect();
    let derivative: Vec<Option<f64>> = time
        .iter()
        .map(|&t| Some(if t < 10.0 { t } else { 10.0 }))
        .collect();
    let series = DerivativeSeries::new(time, vec![0.0; n], vec![0.0; n], derivative).unwrap();

    let segments = classify(&series, &ClassifyConfig::default()).unwrap();

    assert!(segments.len() >= 2, "expected >= 2 segments, got {segments:?}");
    assert_eq!(segments[0].regime, FlowRegime::WellboreStorage);
    assert_eq!(
        segments.last().unwrap().regime,
        FlowRegime::InfiniteActingRadialFlow
    );
    // time-ordered and non-overlapping
    for pair in segments.windows(2) {
        assert!(pair[0].end_time <= pair[1].start_time + 1e-9 || pair[0].end_index <= pair[1].start_index + 5);
        assert!(pair[0].start_time < pair[1].start_time);
    }
}

#[test]
fn test_min_span_filter_drops_noise_segments() {
    // One window's worth of flat derivative inside a long unit-slope curve
    // spans far less than 5% of the time range once merged.
    let n = 81;
    let time: Vec<f64> = (0..n)
        .map(|i| 10f64.powf(2.0 * i as f64 / (n - 1) as f64))
        .collect();
    let derivative: Vec<Option<f64>> = (0..n)
        .map(|i| {
            if i == 30 {
                None // breaks the run without forming a rival segment
            } else {
                Some(time[i])
            }
        })
        .collect();
    let series = DerivativeSeries::new(time, vec![0.0; n], vec![0.0; n], derivative).unwrap();

    let strict = classify(&series, &ClassifyConfig::default()).unwrap();
    assert!(strict.iter().all(|s| s.regime == FlowRegime::WellboreStorage));

    // with the filter disabled the same input may keep shorter segments
    let lax = classify(
        &series,
        &ClassifyConfig::default().with_min_span_fraction(0.0),
    )
    .unwrap();
    assert!(lax.len() >= strict.len());
}

#[test]
fn test_classification_is_deterministic() {
    let series = power_law_series(41, 3.0, 0.5);
    let config = ClassifyConfig::default();
    let first = classify(&series, &config).unwrap();
    let second = classify(&series, &config).unwrap();
    assert_eq!(first, second);
}
