//! Correlation rules: pure functions from a metric snapshot to insights.
//!
//! Each rule joins two or three extracted family maps on a parsed key
//! (product id or region) and fires a typed insight when its threshold
//! condition holds. All joins are inner joins: a key missing any required
//! input is skipped silently, with no insight and no error. Rules are
//! independent and side-effect-free; the set runs them in a fixed order so
//! output is deterministic.

mod bottleneck;
mod experience;
mod inventory;
mod optimization;
mod supply_chain;

pub use bottleneck::LogisticsBottleneckRule;
pub use experience::CustomerExperienceGapRule;
pub use inventory::InventoryRiskRule;
pub use optimization::EndToEndOptimizationRule;
pub use supply_chain::SupplyChainRiskRule;

use std::collections::HashMap;

use crossdock_types::families;
use crossdock_types::{Insight, TrendSummary};

use crate::config::RuleThresholds;
use crate::extract::MetricSnapshot;
use crate::trend::trend_of;

/// A pairwise or triple-wise correlation rule.
pub trait CorrelationRule: Send + Sync {
    /// Rule name for logging.
    fn name(&self) -> &'static str;

    /// Evaluate the rule against one cycle's merged metrics.
    fn evaluate(&self, snapshot: &MetricSnapshot, thresholds: &RuleThresholds) -> Vec<Insight>;
}

/// The fixed rule set, in evaluation order.
pub struct RuleSet {
    rules: Vec<Box<dyn CorrelationRule>>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create the default rule set with all five correlation rules.
    pub fn default_set() -> Self {
        let mut set = Self::new();
        set.add_rule(Box::new(InventoryRiskRule));
        set.add_rule(Box::new(LogisticsBottleneckRule));
        set.add_rule(Box::new(CustomerExperienceGapRule));
        set.add_rule(Box::new(SupplyChainRiskRule));
        set.add_rule(Box::new(EndToEndOptimizationRule));
        set
    }

    /// Add a rule to the set.
    pub fn add_rule(&mut self, rule: Box<dyn CorrelationRule>) {
        self.rules.push(rule);
    }

    /// All rules in evaluation order.
    pub fn rules(&self) -> &[Box<dyn CorrelationRule>] {
        &self.rules
    }

    /// Evaluate every rule against the snapshot, concatenating outputs.
    pub fn evaluate_all(
        &self,
        snapshot: &MetricSnapshot,
        thresholds: &RuleThresholds,
    ) -> Vec<Insight> {
        let mut insights = Vec::new();
        for rule in &self.rules {
            let fired = rule.evaluate(snapshot, thresholds);
            if !fired.is_empty() {
                tracing::debug!(rule = rule.name(), count = fired.len(), "Rule fired");
            }
            insights.extend(fired);
        }
        insights
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::default_set()
    }
}

/// Per-product order/fulfillment/delivery trend triple.
///
/// Shared by the supply-chain-risk and end-to-end-optimization rules. A
/// product appears only when all three families yield a fittable series
/// (at least two points each).
pub(crate) fn product_trend_triples(
    snapshot: &MetricSnapshot,
) -> Vec<(String, TrendSummary, TrendSummary, TrendSummary)> {
    let mut order_series = snapshot.extract_series(families::ORDER_VOLUME);
    let mut fulfillment_series = snapshot.extract_series(families::FULFILLMENT_EFFICIENCY);
    let mut delivery_series = snapshot.extract_series(families::PRODUCT_DELIVERY_TIME);

    let mut products: Vec<String> = order_series.keys().cloned().collect();
    products.sort();

    let mut triples = Vec::new();
    for product in products {
        let order = order_series.get_mut(&product).and_then(trend_of);
        let fulfillment = fulfillment_series.get_mut(&product).and_then(trend_of);
        let delivery = delivery_series.get_mut(&product).and_then(trend_of);

        if let (Some(order), Some(fulfillment), Some(delivery)) = (order, fulfillment, delivery) {
            triples.push((product, order, fulfillment, delivery));
        }
    }
    triples
}

/// Keys of a map in sorted order, for deterministic per-rule output.
pub(crate) fn sorted_keys(map: &HashMap<String, f64>) -> Vec<&String> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    keys
}
