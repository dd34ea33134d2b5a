//! Inventory risk: trending products running low on stock.

use crossdock_types::families;
use crossdock_types::{Insight, InsightSeverity, InsightType, SourceDomain};

use crate::config::RuleThresholds;
use crate::extract::MetricSnapshot;

use super::{sorted_keys, CorrelationRule};

/// Fires when a product's social trend score is high while its warehouse
/// inventory level is low, joined by product id.
pub struct InventoryRiskRule;

impl CorrelationRule for InventoryRiskRule {
    fn name(&self) -> &'static str {
        "inventory_risk"
    }

    fn evaluate(&self, snapshot: &MetricSnapshot, thresholds: &RuleThresholds) -> Vec<Insight> {
        let trend_scores = snapshot.extract_values(families::PRODUCT_TREND_SCORE);
        let inventory_levels = snapshot.extract_values(families::INVENTORY_LEVEL);

        let mut insights = Vec::new();
        for product in sorted_keys(&trend_scores) {
            let trend_score = trend_scores[product];
            let Some(&inventory_level) = inventory_levels.get(product) else {
                continue;
            };

            if trend_score > thresholds.trending_score
                && inventory_level < thresholds.low_inventory_level
            {
                insights.push(
                    Insight::builder(InsightType::InventoryRisk)
                        .title(format!("Inventory risk for trending product {}", product))
                        .description(format!(
                            "Product {} is trending (score {:.1}) but only {:.1} units \
                             remain in inventory",
                            product, trend_score, inventory_level
                        ))
                        .severity(InsightSeverity::High)
                        .source_domain(SourceDomain::SocialCommerce)
                        .source_domain(SourceDomain::Warehousing)
                        .related_metric(families::metric_key(families::PRODUCT_TREND_SCORE, product))
                        .related_metric(families::metric_key(families::INVENTORY_LEVEL, product))
                        .build(),
                );
            }
        }
        insights
    }
}
