//! Logistics bottleneck: regions where combined fulfillment and delivery
//! time drags the logistics score below the efficiency bar.

use crossdock_types::families;
use crossdock_types::{CorrelationResult, Insight, InsightSeverity, InsightType, SourceDomain};

use crate::config::RuleThresholds;
use crate::extract::MetricSnapshot;

use super::{sorted_keys, CorrelationRule};

/// Fires per region when the logistics score computed from fulfillment and
/// delivery times falls below the bottleneck threshold. The insight names
/// whichever stage contributes the larger share of total time.
pub struct LogisticsBottleneckRule;

impl LogisticsBottleneckRule {
    /// Correlate fulfillment and delivery time for every region with both
    /// values. Regions with a non-positive total time are dropped so the
    /// score can never be NaN or infinite.
    pub fn correlate(
        snapshot: &MetricSnapshot,
        thresholds: &RuleThresholds,
    ) -> Vec<CorrelationResult> {
        let fulfillment_times = snapshot.extract_values(families::FULFILLMENT_TIME);
        let delivery_times = snapshot.extract_values(families::DELIVERY_TIME);

        let mut results = Vec::new();
        for region in sorted_keys(&fulfillment_times) {
            let fulfillment = fulfillment_times[region];
            let Some(&delivery) = delivery_times.get(region) else {
                continue;
            };

            let total = fulfillment + delivery;
            if total <= 0.0 {
                continue;
            }

            results.push(CorrelationResult {
                region: region.clone(),
                score: thresholds.logistics_baseline_hours / total * 100.0,
                total_time: total,
                fulfillment_share_pct: fulfillment / total * 100.0,
                delivery_share_pct: delivery / total * 100.0,
            });
        }
        results
    }
}

impl CorrelationRule for LogisticsBottleneckRule {
    fn name(&self) -> &'static str {
        "logistics_bottleneck"
    }

    fn evaluate(&self, snapshot: &MetricSnapshot, thresholds: &RuleThresholds) -> Vec<Insight> {
        Self::correlate(snapshot, thresholds)
            .into_iter()
            .filter(|result| result.score < thresholds.bottleneck_score)
            .map(|result| {
                Insight::builder(InsightType::LogisticsBottleneck)
                    .title(format!("Logistics bottleneck in {}", result.region))
                    .description(format!(
                        "Region {} scores {:.1} with {:.1}h end-to-end; {} is the \
                         bottleneck ({:.1}% of total time)",
                        result.region,
                        result.score,
                        result.total_time,
                        result.bottleneck_stage(),
                        result
                            .fulfillment_share_pct
                            .max(result.delivery_share_pct),
                    ))
                    .severity(InsightSeverity::Medium)
                    .source_domain(SourceDomain::Warehousing)
                    .source_domain(SourceDomain::CourierServices)
                    .related_metric(families::metric_key(families::FULFILLMENT_TIME, &result.region))
                    .related_metric(families::metric_key(families::DELIVERY_TIME, &result.region))
                    .build()
            })
            .collect()
    }
}
