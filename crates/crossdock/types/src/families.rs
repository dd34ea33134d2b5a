//! Metric family prefixes shared by providers and the engine.
//!
//! A family groups observations of one kind across entities or regions;
//! the entity/region key is the name remainder after the prefix. Keeping
//! the prefixes here keeps providers and correlation rules agreeing on
//! names without a registry.

/// Per-product trend score from social commerce (0-100).
pub const PRODUCT_TREND_SCORE: &str = "product_trend_score_";

/// Per-product inventory level from warehousing (units on hand).
pub const INVENTORY_LEVEL: &str = "inventory_level_";

/// Per-region order fulfillment time from warehousing (hours).
pub const FULFILLMENT_TIME: &str = "fulfillment_time_";

/// Per-region delivery time from courier services (hours).
pub const DELIVERY_TIME: &str = "delivery_time_";

/// Per-region delivery performance score from courier services (0-100).
pub const DELIVERY_PERFORMANCE: &str = "delivery_performance_";

/// Per-region customer satisfaction score from social commerce (0-100).
pub const CUSTOMER_SATISFACTION: &str = "customer_satisfaction_";

/// Per-product order volume series from social commerce (count).
pub const ORDER_VOLUME: &str = "order_volume_";

/// Per-product fulfillment efficiency series from warehousing (hours).
pub const FULFILLMENT_EFFICIENCY: &str = "fulfillment_efficiency_";

/// Per-product delivery time series from courier services (hours).
pub const PRODUCT_DELIVERY_TIME: &str = "product_delivery_time_";

/// Re-derive the full metric name for a family prefix and key.
pub fn metric_key(prefix: &str, key: &str) -> String {
    format!("{}{}", prefix, key)
}
