//! Trend extraction via ordinary least-squares regression.

use crossdock_types::{Metric, TrendSummary};

/// Fit a trend over a timestamp-sorted series.
///
/// The sample index `0..n-1` is the independent variable; sampling cadence
/// is treated as uniform, so irregular timestamp gaps under- or overstate
/// the slope. `current_value` is the last point's value.
///
/// Returns `None` for series shorter than two points, and for a zero
/// denominator (cannot happen for n >= 2 with integer indices, but a
/// degenerate fit must never leak a NaN or infinite slope). Callers skip
/// such keys rather than treating a default slope as a real signal.
pub fn compute_trend(series: &[Metric]) -> Option<TrendSummary> {
    let n = series.len();
    if n < 2 {
        return None;
    }

    let n_f = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;

    for (i, metric) in series.iter().enumerate() {
        let x = i as f64;
        let y = metric.value;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let denominator = n_f * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    let slope = (n_f * sum_xy - sum_x * sum_y) / denominator;
    let current_value = series[n - 1].value;

    Some(TrendSummary::new(current_value, slope))
}

/// Sort a series by timestamp ascending and fit a trend over it.
pub fn trend_of(series: &mut Vec<Metric>) -> Option<TrendSummary> {
    series.sort_by_key(|m| m.timestamp);
    compute_trend(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use crossdock_types::SourceDomain;

    fn series(values: &[f64]) -> Vec<Metric> {
        let base = Utc::now();
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                Metric::instant(
                    "order_volume_p-1",
                    v,
                    "count",
                    SourceDomain::SocialCommerce,
                    "order-service",
                )
                .at(base + Duration::hours(i as i64))
            })
            .collect()
    }

    #[test]
    fn test_strictly_increasing_series_has_unit_slope() {
        let trend = compute_trend(&series(&[1.0, 2.0, 3.0, 4.0, 5.0])).unwrap();
        assert!((trend.slope - 1.0).abs() < 1e-12);
        assert_eq!(trend.current_value, 5.0);
    }

    #[test]
    fn test_constant_series_has_zero_slope() {
        let trend = compute_trend(&series(&[5.0, 5.0, 5.0])).unwrap();
        assert_eq!(trend.slope, 0.0);
        assert_eq!(trend.current_value, 5.0);
    }

    #[test]
    fn test_decreasing_series_has_negative_slope() {
        let trend = compute_trend(&series(&[10.0, 8.0, 6.0, 4.0])).unwrap();
        assert!((trend.slope + 2.0).abs() < 1e-12);
        assert_eq!(trend.current_value, 4.0);
    }

    #[test]
    fn test_insufficient_data_yields_none() {
        assert!(compute_trend(&series(&[])).is_none());
        assert!(compute_trend(&series(&[42.0])).is_none());
    }

    #[test]
    fn test_two_point_series() {
        let trend = compute_trend(&series(&[10.0, 14.0])).unwrap();
        assert!((trend.slope - 4.0).abs() < 1e-12);
        assert_eq!(trend.current_value, 14.0);
    }

    #[test]
    fn test_trend_of_sorts_before_fitting() {
        let base = Utc::now();
        let make = |v: f64, h: i64| {
            Metric::instant(
                "order_volume_p-1",
                v,
                "count",
                SourceDomain::SocialCommerce,
                "order-service",
            )
            .at(base + Duration::hours(h))
        };

        // Delivered out of order; sorted it is [1, 2, 3].
        let mut unsorted = vec![make(3.0, 2), make(1.0, 0), make(2.0, 1)];
        let trend = trend_of(&mut unsorted).unwrap();
        assert!((trend.slope - 1.0).abs() < 1e-12);
        assert_eq!(trend.current_value, 3.0);
    }
}
