//! Simulated warehousing provider.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tokio::sync::RwLock;
use tracing::debug;

use crossdock_engine::{MetricProvider, ProviderError};
use crossdock_types::{families, Metric, SourceDomain};

/// Emits per-product inventory levels, per-region fulfillment times, and a
/// per-product fulfillment-efficiency history for the trend rules.
pub struct WarehouseMetricsProvider {
    regions: Vec<String>,
    products: Vec<String>,
    history_points: usize,
    last_collected: RwLock<Option<DateTime<Utc>>>,
}

impl WarehouseMetricsProvider {
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
impl MetricProvider for WarehouseMetricsProvider {
    fn domain(&self) -> SourceDomain {
        SourceDomain::Warehousing
    }

    fn source_service(&self) -> &str {
        "inventory-service"
    }

    async fn collect_metrics(&self) -> Result<Vec<Metric>, ProviderError> {
        let now = Utc::now();
        let metrics = self.generate(now);

        *self.last_collected.write().await = Some(now);
        debug!(count = metrics.len(), "Warehouse metrics collected");
        Ok(metrics)
    }
}

impl WarehouseMetricsProvider {
    // ThreadRng is not Send, so generation stays synchronous and out of
    // the async path.
    fn generate(&self, now: DateTime<Utc>) -> Vec<Metric> {
        let mut rng = rand::thread_rng();
        let mut metrics = Vec::new();

        for product in &self.products {
            metrics.push(
                Metric::instant(
                    families::metric_key(families::INVENTORY_LEVEL, product),
                    rng.gen_range(0.0..200.0),
                    "count",
                    SourceDomain::Warehousing,
                    self.source_service(),
                )
                .at(now),
            );

            for i in 0..self.history_points {
                let age = (self.history_points - 1 - i) as i64;
                metrics.push(
                    Metric::instant(
                        families::metric_key(families::FULFILLMENT_EFFICIENCY, product),
                        rng.gen_range(20.0..60.0),
                        "hours",
                        SourceDomain::Warehousing,
                        self.source_service(),
                    )
                    .at(now - Duration::hours(age)),
                );
            }
        }

        for region in &self.regions {
            metrics.push(
                Metric::instant(
                    families::metric_key(families::FULFILLMENT_TIME, region),
                    rng.gen_range(4.0..40.0),
                    "hours",
                    SourceDomain::Warehousing,
                    self.source_service(),
                )
                .with_region(region.clone())
                .at(now),
            );
        }

        metrics
    }
}
