//! Supply-chain risk: rising demand against degrading fulfillment.

use crossdock_types::families;
use crossdock_types::{Insight, InsightSeverity, InsightType, SourceDomain};

use crate::config::RuleThresholds;
use crate::extract::MetricSnapshot;

use super::{product_trend_triples, CorrelationRule};

/// Fires per product when the order-volume trend rises while the
/// fulfillment-efficiency trend degrades. Requires all three product
/// trend series (order, fulfillment, delivery) to exist.
pub struct SupplyChainRiskRule;

impl CorrelationRule for SupplyChainRiskRule {
    fn name(&self) -> &'static str {
        "supply_chain_risk"
    }

    fn evaluate(&self, snapshot: &MetricSnapshot, thresholds: &RuleThresholds) -> Vec<Insight> {
        product_trend_triples(snapshot)
            .into_iter()
            .filter(|(_, order, fulfillment, _)| {
                order.slope > thresholds.rising_order_slope
                    && fulfillment.slope < thresholds.degrading_fulfillment_slope
            })
            .map(|(product, order, fulfillment, _)| {
                Insight::builder(InsightType::SupplyChainRisk)
                    .title(format!("Supply chain risk for product {}", product))
                    .description(format!(
                        "Orders for {} are rising (slope {:.3}) while fulfillment \
                         efficiency degrades (slope {:.3})",
                        product, order.slope, fulfillment.slope
                    ))
                    .severity(InsightSeverity::High)
                    .source_domain(SourceDomain::SocialCommerce)
                    .source_domain(SourceDomain::Warehousing)
                    .source_domain(SourceDomain::CourierServices)
                    .related_metric(families::metric_key(families::ORDER_VOLUME, &product))
                    .related_metric(families::metric_key(
                        families::FULFILLMENT_EFFICIENCY,
                        &product,
                    ))
                    .related_metric(families::metric_key(
                        families::PRODUCT_DELIVERY_TIME,
                        &product,
                    ))
                    .build()
            })
            .collect()
    }
}
