//! Customer experience gap: delivery performance outrunning satisfaction.

use crossdock_types::families;
use crossdock_types::{Insight, InsightSeverity, InsightType, SourceDomain};

use crate::config::RuleThresholds;
use crate::extract::MetricSnapshot;

use super::{sorted_keys, CorrelationRule};

/// Fires per region when courier delivery performance exceeds social
/// customer satisfaction by more than the gap threshold. Operationally the
/// deliveries look fine, but customers disagree.
pub struct CustomerExperienceGapRule;

impl CorrelationRule for CustomerExperienceGapRule {
    fn name(&self) -> &'static str {
        "customer_experience_gap"
    }

    fn evaluate(&self, snapshot: &MetricSnapshot, thresholds: &RuleThresholds) -> Vec<Insight> {
        let performance = snapshot.extract_values(families::DELIVERY_PERFORMANCE);
        let satisfaction = snapshot.extract_values(families::CUSTOMER_SATISFACTION);

        let mut insights = Vec::new();
        for region in sorted_keys(&performance) {
            let performance_score = performance[region];
            let Some(&satisfaction_score) = satisfaction.get(region) else {
                continue;
            };

            let gap = performance_score - satisfaction_score;
            if gap > thresholds.experience_gap {
                insights.push(
                    Insight::builder(InsightType::CustomerExperienceGap)
                        .title(format!("Customer experience gap in {}", region))
                        .description(format!(
                            "Delivery performance in {} is {:.1} but customer \
                             satisfaction is only {:.1} (gap {:.1})",
                            region, performance_score, satisfaction_score, gap
                        ))
                        .severity(InsightSeverity::Medium)
                        .source_domain(SourceDomain::CourierServices)
                        .source_domain(SourceDomain::SocialCommerce)
                        .related_metric(families::metric_key(
                            families::DELIVERY_PERFORMANCE,
                            region,
                        ))
                        .related_metric(families::metric_key(
                            families::CUSTOMER_SATISFACTION,
                            region,
                        ))
                        .build(),
                );
            }
        }
        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossdock_types::Metric;

    fn snapshot(regions: &[(&str, f64, f64)]) -> MetricSnapshot {
        let mut metrics = Vec::new();
        for (region, performance, satisfaction) in regions {
            metrics.push(Metric::instant(
                format!("{}{}", families::DELIVERY_PERFORMANCE, region),
                *performance,
                "score",
                SourceDomain::CourierServices,
                "delivery-service",
            ));
            metrics.push(Metric::instant(
                format!("{}{}", families::CUSTOMER_SATISFACTION, region),
                *satisfaction,
                "score",
                SourceDomain::SocialCommerce,
                "review-service",
            ));
        }
        MetricSnapshot::new(metrics)
    }

    #[test]
    fn test_fires_on_wide_gap() {
        let insights = CustomerExperienceGapRule
            .evaluate(&snapshot(&[("us-east", 92.0, 70.0)]), &RuleThresholds::default());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].insight_type, InsightType::CustomerExperienceGap);
        assert_eq!(insights[0].severity, InsightSeverity::Medium);
    }

    #[test]
    fn test_gap_boundary_is_strict() {
        // Gap of exactly 15.0 does not fire.
        let insights = CustomerExperienceGapRule
            .evaluate(&snapshot(&[("us-east", 85.0, 70.0)]), &RuleThresholds::default());
        assert!(insights.is_empty());
    }

    #[test]
    fn test_satisfaction_above_performance_is_quiet() {
        let insights = CustomerExperienceGapRule
            .evaluate(&snapshot(&[("us-east", 60.0, 90.0)]), &RuleThresholds::default());
        assert!(insights.is_empty());
    }

    #[test]
    fn test_missing_satisfaction_skips_region() {
        let snapshot = MetricSnapshot::new(vec![Metric::instant(
            format!("{}eu-west", families::DELIVERY_PERFORMANCE),
            95.0,
            "score",
            SourceDomain::CourierServices,
            "delivery-service",
        )]);
        let insights =
            CustomerExperienceGapRule.evaluate(&snapshot, &RuleThresholds::default());
        assert!(insights.is_empty());
    }
}
