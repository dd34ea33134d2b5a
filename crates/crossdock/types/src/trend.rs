//! Derived trend and correlation values.

use serde::{Deserialize, Serialize};

/// Trend fitted over an ordered metric series.
///
/// `slope` is the ordinary least-squares slope with the sample index as
/// the independent variable, so it is change per collection interval,
/// not per unit of wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Value of the most recent point in the series.
    pub current_value: f64,

    /// Least-squares slope over the index-ordered series.
    pub slope: f64,
}

impl TrendSummary {
    /// Create a trend summary.
    pub fn new(current_value: f64, slope: f64) -> Self {
        Self {
            current_value,
            slope,
        }
    }

    /// Whether the series is rising.
    pub fn is_rising(&self) -> bool {
        self.slope > 0.0
    }

    /// Whether the series is falling.
    pub fn is_falling(&self) -> bool {
        self.slope < 0.0
    }
}

/// Per-region fulfillment/delivery correlation, built only when both a
/// fulfillment-time and a delivery-time value exist for the region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Region the correlation applies to.
    pub region: String,

    /// Logistics efficiency score for the region.
    pub score: f64,

    /// Combined fulfillment + delivery time in hours.
    pub total_time: f64,

    /// Share of total time spent in fulfillment, as a percentage.
    pub fulfillment_share_pct: f64,

    /// Share of total time spent in delivery, as a percentage.
    pub delivery_share_pct: f64,
}

impl CorrelationResult {
    /// Name the stage contributing the larger share of total time.
    pub fn bottleneck_stage(&self) -> &'static str {
        if self.fulfillment_share_pct > self.delivery_share_pct {
            "fulfillment"
        } else {
            "delivery"
        }
    }
}
