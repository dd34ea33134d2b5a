//! Simulated courier-services provider.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tokio::sync::RwLock;
use tracing::debug;

use crossdock_engine::{MetricProvider, ProviderError};
use crossdock_types::{families, Metric, SourceDomain};

/// Emits per-region delivery time and performance scores plus a short
/// per-product delivery-time history for the trend rules.
///
/// The provider owns its collection state explicitly: `last_collected` is
/// a field on this struct, not hidden global state.
pub struct CourierMetricsProvider {
    regions: Vec<String>,
    products: Vec<String>,
    history_points: usize,
    last_collected: RwLock<Option<DateTime<Utc>>>,
}

impl CourierMetricsProvider {
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
impl MetricProvider for CourierMetricsProvider {
    fn domain(&self) -> SourceDomain {
        SourceDomain::CourierServices
    }

    fn source_service(&self) -> &str {
        "delivery-service"
    }

    async fn collect_metrics(&self) -> Result<Vec<Metric>, ProviderError> {
        let now = Utc::now();
        let metrics = self.generate(now);

        *self.last_collected.write().await = Some(now);
        debug!(count = metrics.len(), "Courier metrics collected");
        Ok(metrics)
    }
}

impl CourierMetricsProvider {
    // ThreadRng is not Send, so generation stays synchronous and out of
    // the async path.
    fn generate(&self, now: DateTime<Utc>) -> Vec<Metric> {
        let mut rng = rand::thread_rng();
        let mut metrics = Vec::new();

        for region in &self.regions {
            metrics.push(
                Metric::instant(
                    families::metric_key(families::DELIVERY_TIME, region),
                    rng.gen_range(8.0..48.0),
                    "hours",
                    SourceDomain::CourierServices,
                    self.source_service(),
                )
                .with_region(region.clone())
                .at(now),
            );
            metrics.push(
                Metric::instant(
                    families::metric_key(families::DELIVERY_PERFORMANCE, region),
                    rng.gen_range(60.0..100.0),
                    "score",
                    SourceDomain::CourierServices,
                    self.source_service(),
                )
                .with_region(region.clone())
                .at(now),
            );
        }

        for product in &self.products {
            for i in 0..self.history_points {
                let age = (self.history_points - 1 - i) as i64;
                metrics.push(
                    Metric::instant(
                        families::metric_key(families::PRODUCT_DELIVERY_TIME, product),
                        rng.gen_range(24.0..40.0),
                        "hours",
                        SourceDomain::CourierServices,
                        self.source_service(),
                    )
                    .at(now - Duration::hours(age)),
                );
            }
        }

        metrics
    }
}
