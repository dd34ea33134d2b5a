//! Simulated social-commerce provider.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tokio::sync::RwLock;
use tracing::debug;

use crossdock_engine::{MetricProvider, ProviderError};
use crossdock_types::{families, Metric, SourceDomain};

/// Emits per-product trend scores, a per-product order-volume history, and
/// per-region customer satisfaction scores.
pub struct SocialCommerceMetricsProvider {
    regions: Vec<String>,
    products: Vec<String>,
    history_points: usize,
    last_collected: RwLock<Option<DateTime<Utc>>>,
}

impl SocialCommerceMetricsProvider {
    /// Create a provider for the given regions and products.
    pub fn new(regions: Vec<String>, products: Vec<String>) -> Self {
        Self {
            regions,
            products,
            history_points: 5,
            last_collected: RwLock::new(None),
        }
    }

    /// Number of history points per product series.
    pub fn with_history_points(mut self, points: usize) -> Self {
        self.history_points = points;
        self
    }

    /// When this provider last completed a collection.
    pub async fn last_collected(&self) -> Option<DateTime<Utc>> {
        *self.last_collected.read().await
    }
}

#[async_trait]
impl MetricProvider for SocialCommerceMetricsProvider {
    fn domain(&self) -> SourceDomain {
        SourceDomain::SocialCommerce
    }

    fn source_service(&self) -> &str {
        "storefront-service"
    }

    async fn collect_metrics(&self) -> Result<Vec<Metric>, ProviderError> {
        let now = Utc::now();
        let metrics = self.generate(now);

        *self.last_collected.write().await = Some(now);
        debug!(count = metrics.len(), "Social commerce metrics collected");
        Ok(metrics)
    }
}

impl SocialCommerceMetricsProvider {
    // ThreadRng is not Send, so generation stays synchronous and out of
    // the async path.
    fn generate(&self, now: DateTime<Utc>) -> Vec<Metric> {
        let mut rng = rand::thread_rng();
        let mut metrics = Vec::new();

        for product in &self.products {
            metrics.push(
                Metric::instant(
                    families::metric_key(families::PRODUCT_TREND_SCORE, product),
                    rng.gen_range(0.0..100.0),
                    "score",
                    SourceDomain::SocialCommerce,
                    self.source_service(),
                )
                .at(now),
            );

            for i in 0..self.history_points {
                let age = (self.history_points - 1 - i) as i64;
                metrics.push(
                    Metric::instant(
                        families::metric_key(families::ORDER_VOLUME, product),
                        rng.gen_range(50.0..200.0),
                        "count",
                        SourceDomain::SocialCommerce,
                        self.source_service(),
                    )
                    .at(now - Duration::hours(age)),
                );
            }
        }

        for region in &self.regions {
            metrics.push(
                Metric::instant(
                    families::metric_key(families::CUSTOMER_SATISFACTION, region),
                    rng.gen_range(50.0..100.0),
                    "score",
                    SourceDomain::SocialCommerce,
                    self.source_service(),
                )
                .with_region(region.clone())
                .at(now),
            );
        }

        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_emits_all_families() {
        let provider = SocialCommerceMetricsProvider::new(
            vec!["us-east".to_string()],
            vec!["p-1".to_string(), "p-2".to_string()],
        )
        .with_history_points(3);

        let metrics = provider.collect_metrics().await.unwrap();
        // 2 trend scores + 2 * 3 order-volume points + 1 satisfaction
        assert_eq!(metrics.len(), 9);
        assert!(metrics.iter().any(|m| m.name == "product_trend_score_p-1"));
        assert!(metrics.iter().any(|m| m.name == "product_trend_score_p-2"));
        assert!(metrics.iter().any(|m| m.name == "customer_satisfaction_us-east"));
    }

    #[tokio::test]
    async fn test_last_collected_advances() {
        let provider =
            SocialCommerceMetricsProvider::new(Vec::new(), vec!["p-1".to_string()]);

        provider.collect_metrics().await.unwrap();
        let first = provider.last_collected().await.unwrap();

        provider.collect_metrics().await.unwrap();
        let second = provider.last_collected().await.unwrap();

        assert!(second >= first);
    }
}
