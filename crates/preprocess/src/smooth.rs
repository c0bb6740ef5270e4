//! Simple moving-average smoothing.

/// Centred moving average over a symmetric window, clipped to the slice
/// bounds near the ends.
///
/// For each index `i` the output is the mean of `values[i - w/2 ..= i + w/2]`
/// intersected with the slice. The window is assumed odd (enforced by
/// `SmoothingConfig::validate`).
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let half = window / 2;
    let n = values.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let lo = i.saturating_sub(half);
        let hi = (i + half).min(n.saturating_sub(1));
        let slice = &values[lo..=hi];
        out.push(slice.iter().sum::<f64>() / slice.len() as f64);
    }
    out
}

/// Null-skipping variant of [`moving_average`] for optional-valued columns
/// (used to smooth the derivative column, where endpoints are `None`).
///
/// A `None` input stays `None`; a `Some` input is replaced by the mean of
/// the `Some` values within its window.
pub fn moving_average_opt(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let half = window / 2;
    let n = values.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        if values[i].is_none() {
            out.push(None);
            continue;
        }
        let lo = i.saturating_sub(half);
        let hi = (i + half).min(n.saturating_sub(1));
        let mut sum = 0.0;
        let mut count = 0usize;
        for v in values[lo..=hi].iter().flatten() {
            sum += v;
            count += 1;
        }
        // count >= 1: values[i] itself is Some
        out.push(Some(sum / count as f64));
    }
    out
}
