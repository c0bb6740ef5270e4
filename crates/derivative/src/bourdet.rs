//! Bourdet weighted central difference in log-time.

/// Minimum number of points for any derivative to be computed.
pub(crate) const MIN_POINTS: usize = 3;

/// Finds the nearest index `j < i` with `log_t[i] - log_t[j] >= l`.
///
/// `log_t` is sorted ascending (the series time column is strictly
/// increasing), so the candidates form a prefix of `log_t[..i]` and the
/// rightmost one is found by binary search rather than a linear scan.
pub(crate) fn neighbor_left(log_t: &[f64], i: usize, l: f64) -> Option<usize> {
    let cutoff = log_t[i] - l;
    let count = log_t[..i].partition_point(|&v| v <= cutoff);
    count.checked_sub(1)
}

/// Finds the nearest index `j > i` with `log_t[j] - log_t[i] >= l`.
pub(crate) fn neighbor_right(log_t: &[f64], i: usize, l: f64) -> Option<usize> {
    let cutoff = log_t[i] + l;
    let j = i + 1 + log_t[i + 1..].partition_point(|&v| v < cutoff);
    if j < log_t.len() {
        Some(j)
    } else {
        None
    }
}

/// Computes the derivative magnitude at index `i`, or `None` when neither
/// neighbor exists.
///
/// With both neighbors the two one-sided slopes in `(pressure, ln time)`
/// space are combined with the opposite-side log-spacing as weight. The
/// cross-weighting keeps the estimate unbiased when sampling is denser on
/// one side, which is the defining property of the Bourdet scheme. With a
/// single neighbor the one-sided slope magnitude is used.
pub(crate) fn derivative_at(
    log_t: &[f64],
    pressure: &[f64],
    i: usize,
    l: f64,
) -> Option<f64> {
    let left = neighbor_left(log_t, i, l);
    let right = neighbor_right(log_t, i, l);

    match (left, right) {
        (Some(j), Some(k)) => {
            // Spacings are >= l > 0 by construction, so no division by zero.
            let w_left = log_t[i] - log_t[j];
            let w_right = log_t[k] - log_t[i];
            let m1 = (pressure[i] - pressure[j]) / w_left;
            let m2 = (pressure[k] - pressure[i]) / w_right;
            Some(((m1 * w_right + m2 * w_left) / (w_left + w_right)).abs())
        }
        (Some(j), None) => Some(((pressure[i] - pressure[j]) / (log_t[i] - log_t[j])).abs()),
        (None, Some(k)) => Some(((pressure[k] - pressure[i]) / (log_t[k] - log_t[i])).abs()),
        (None, None) => None,
    }
}
