//! Provider over loosely-typed JSON metric documents.

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crossdock_engine::{MetricProvider, ProviderError};
use crossdock_types::{Metric, SourceDomain};

/// Adapts an externally-produced JSON document into typed metrics.
///
/// Expected shape:
///
/// ```json
/// {"metrics": [{"name": "inventory_level_p-1", "value": 12, "unit": "count",
///               "region": "us-east"}]}
/// ```
///
/// Typed `Metric`s are populated once here at the boundary; downstream code
/// never re-checks value types. Non-numeric or missing values degrade to
/// `0.0` so one malformed entry cannot abort the cycle, while entries
/// without a name are dropped (there is nothing to correlate them under).
pub struct JsonMetricsProvider {
    domain: SourceDomain,
    source_service: String,
    document: Value,
}

impl JsonMetricsProvider {
    /// Wrap a JSON document for the given domain.
    pub fn new(domain: SourceDomain, source_service: impl Into<String>, document: Value) -> Self {
        Self {
            domain,
            source_service: source_service.into(),
            document,
        }
    }
}

#[async_trait]
impl MetricProvider for JsonMetricsProvider {
    fn domain(&self) -> SourceDomain {
        self.domain
    }

    fn source_service(&self) -> &str {
        &self.source_service
    }

    async fn collect_metrics(&self) -> Result<Vec<Metric>, ProviderError> {
        let entries = self
            .document
            .get("metrics")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ProviderError::Malformed("document has no \"metrics\" array".to_string())
            })?;

        let mut metrics = Vec::with_capacity(entries.len());
        for entry in entries {
            let Some(name) = entry.get("name").and_then(Value::as_str) else {
                warn!(domain = %self.domain, "Dropping metric entry without a name");
                continue;
            };

            let raw_value = entry.get("value").unwrap_or(&Value::Null);
            let unit = entry.get("unit").and_then(Value::as_str).unwrap_or("");

            let mut metric = Metric::from_raw(
                name,
                raw_value,
                unit,
                self.domain,
                self.source_service.clone(),
            );
            if let Some(region) = entry.get("region").and_then(Value::as_str) {
                metric = metric.with_region(region);
            }
            metrics.push(metric);
        }

        Ok(metrics)
    }
}
