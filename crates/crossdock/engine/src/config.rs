//! Engine configuration and rule thresholds.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Thresholds for the correlation rules.
///
/// The defaults are the engine's observable contract; tests pin them.
/// Comparisons are strict (`>` / `<`), so a value sitting exactly on a
/// threshold does not fire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleThresholds {
    /// Trend score above which a product counts as trending.
    pub trending_score: f64,

    /// Inventory level below which stock counts as low.
    pub low_inventory_level: f64,

    /// Logistics score below which a region is a bottleneck.
    pub bottleneck_score: f64,

    /// Numerator of the logistics score formula, in hours.
    pub logistics_baseline_hours: f64,

    /// Performance-minus-satisfaction gap that flags an experience gap.
    pub experience_gap: f64,

    /// Order-volume slope above which demand counts as rising.
    pub rising_order_slope: f64,

    /// Fulfillment-efficiency slope below which fulfillment counts as
    /// degrading.
    pub degrading_fulfillment_slope: f64,

    /// Composite score below which an optimization insight fires.
    pub optimization_score: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            trending_score: 80.0,
            low_inventory_level: 20.0,
            bottleneck_score: 70.0,
            logistics_baseline_hours: 48.0,
            experience_gap: 15.0,
            rising_order_slope: 0.1,
            degrading_fulfillment_slope: -0.05,
            optimization_score: 65.0,
        }
    }
}

/// Configuration for the insight orchestrator.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Rule thresholds.
    pub thresholds: RuleThresholds,

    /// Optional per-provider collection deadline.
    ///
    /// With `None` (the default) a hung provider stalls the cycle
    /// indefinitely. When set, a timed-out provider fails the cycle the
    /// same way an erroring one does.
    pub provider_timeout: Option<Duration>,
}

impl EngineConfig {
    /// Config with a per-provider collection deadline.
    pub fn with_provider_timeout(timeout: Duration) -> Self {
        Self {
            thresholds: RuleThresholds::default(),
            provider_timeout: Some(timeout),
        }
    }
}
