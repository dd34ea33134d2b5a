//! End-to-end optimization: products whose composite score sags.

use crossdock_types::families;
use crossdock_types::{Insight, InsightSeverity, InsightType, SourceDomain};

use crate::config::RuleThresholds;
use crate::extract::MetricSnapshot;
use crate::score::end_to_end_score;

use super::{product_trend_triples, CorrelationRule};

/// Fires per product when the composite end-to-end efficiency score over
/// the order/fulfillment/delivery trend triple falls below the
/// optimization threshold.
pub struct EndToEndOptimizationRule;

impl CorrelationRule for EndToEndOptimizationRule {
    fn name(&self) -> &'static str {
        "end_to_end_optimization"
    }

    fn evaluate(&self, snapshot: &MetricSnapshot, thresholds: &RuleThresholds) -> Vec<Insight> {
        product_trend_triples(snapshot)
            .into_iter()
            .filter_map(|(product, order, fulfillment, delivery)| {
                let score = end_to_end_score(&order, &fulfillment, &delivery);
                if score < thresholds.optimization_score {
                    Some((product, score))
                } else {
                    None
                }
            })
            .map(|(product, score)| {
                Insight::builder(InsightType::EndToEndOptimization)
                    .title(format!("End-to-end optimization for product {}", product))
                    .description(format!(
                        "Product {} scores {:.1} end-to-end across ordering, \
                         fulfillment, and delivery",
                        product, score
                    ))
                    .severity(InsightSeverity::Medium)
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
