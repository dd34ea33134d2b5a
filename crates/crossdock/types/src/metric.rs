//! Metric observations and their source domains.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Business vertical that produced a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceDomain {
    /// Package delivery and last-mile logistics.
    CourierServices,
    /// Inventory and order fulfillment.
    Warehousing,
    /// Social commerce storefronts and customer signals.
    SocialCommerce,
}

impl std::fmt::Display for SourceDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceDomain::CourierServices => write!(f, "courier_services"),
            SourceDomain::Warehousing => write!(f, "warehousing"),
            SourceDomain::SocialCommerce => write!(f, "social_commerce"),
        }
    }
}

/// How a metric value relates to time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricPointType {
    /// A point-in-time observation.
    Instant,
    /// A monotonically accumulating counter.
    Cumulative,
}

/// A single observation produced by a domain provider.
///
/// The name encodes a family prefix plus an entity or region suffix
/// (e.g. `product_trend_score_p-1001`). Metrics are immutable once
/// produced and consumed read-only by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    /// Metric name: family prefix + entity/region suffix.
    pub name: String,

    /// Observed value.
    pub value: f64,

    /// Unit label (e.g. "hours", "percent", "count").
    pub unit: String,

    /// Domain that produced the metric.
    pub source_domain: SourceDomain,

    /// Service label within the domain.
    pub source_service: String,

    /// Optional region the observation applies to.
    pub region: Option<String>,

    /// Observation time.
    pub timestamp: DateTime<Utc>,

    /// Point type.
    pub point_type: MetricPointType,
}

impl Metric {
    /// Create an instant metric stamped with the current time.
    pub fn instant(
        name: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        source_domain: SourceDomain,
        source_service: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
            source_domain,
            source_service: source_service.into(),
            region: None,
            timestamp: Utc::now(),
            point_type: MetricPointType::Instant,
        }
    }

    /// Attach a region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Override the observation time.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Create an instant metric from a loosely-typed value.
    ///
    /// Providers that decode external payloads populate typed metrics once
    /// at the boundary; non-numeric values degrade to `0.0` so a single
    /// malformed entry cannot abort a collection cycle.
    pub fn from_raw(
        name: impl Into<String>,
        raw: &serde_json::Value,
        unit: impl Into<String>,
        source_domain: SourceDomain,
        source_service: impl Into<String>,
    ) -> Self {
        Self::instant(name, coerce_value(raw), unit, source_domain, source_service)
    }
}

/// Coerce a loosely-typed value into a finite `f64`.
///
/// Numbers pass through, numeric strings parse, booleans map to 1/0, and
/// everything else (null, objects, arrays, non-numeric strings, NaN/Inf)
/// degrades to `0.0`.
pub fn coerce_value(raw: &serde_json::Value) -> f64 {
    let value = match raw {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        serde_json::Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    };

    if value.is_finite() {
        value
    } else {
        0.0
    }
}
