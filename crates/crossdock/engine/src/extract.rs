//! Metric extraction: pulling a named family out of a flat metric list.

use std::collections::HashMap;

use crossdock_types::Metric;

/// The merged metric list for one collection cycle.
///
/// Snapshots are cycle-scoped: rules read them, nothing mutates them, and
/// they are discarded once the caller has its insights.
#[derive(Debug, Clone, Default)]
pub struct MetricSnapshot {
    metrics: Vec<Metric>,
}

impl MetricSnapshot {
    /// Wrap a merged metric list.
    pub fn new(metrics: Vec<Metric>) -> Self {
        Self { metrics }
    }

    /// All metrics in the snapshot.
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Number of metrics in the snapshot.
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Extract a family into a keyed scalar map.
    ///
    /// A metric belongs to the family iff its name starts with exactly
    /// `prefix` (case-sensitive); the key is the name remainder. Duplicate
    /// keys resolve last-wins, though duplicates should not occur within
    /// one cycle.
    pub fn extract_values(&self, prefix: &str) -> HashMap<String, f64> {
        let mut values = HashMap::new();
        for metric in &self.metrics {
            if let Some(key) = metric.name.strip_prefix(prefix) {
                values.insert(key.to_string(), metric.value);
            }
        }
        values
    }

    /// Extract a family into a keyed series map, retaining every matching
    /// metric per key. Series are unsorted; the trend path sorts them by
    /// timestamp before fitting.
    pub fn extract_series(&self, prefix: &str) -> HashMap<String, Vec<Metric>> {
        let mut series: HashMap<String, Vec<Metric>> = HashMap::new();
        for metric in &self.metrics {
            if let Some(key) = metric.name.strip_prefix(prefix) {
                series.entry(key.to_string()).or_default().push(metric.clone());
            }
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use crossdock_types::SourceDomain;

    fn metric(name: &str, value: f64) -> Metric {
        Metric::instant(
            name,
            value,
            "count",
            SourceDomain::Warehousing,
            "inventory-service",
        )
    }

    #[test]
    fn test_extract_values_roundtrip() {
        let snapshot = MetricSnapshot::new(vec![
            metric("inventory_level_p-1", 15.0),
            metric("inventory_level_p-2", 120.0),
            metric("fulfillment_time_us-east", 20.0),
        ]);

        let levels = snapshot.extract_values("inventory_level_");
        assert_eq!(levels.len(), 2);
        assert_eq!(levels["p-1"], 15.0);
        assert_eq!(levels["p-2"], 120.0);

        // Every key reconstructs the original metric name
        for key in levels.keys() {
            let name = format!("inventory_level_{}", key);
            assert!(snapshot.metrics().iter().any(|m| m.name == name));
        }
    }

    #[test]
    fn test_extract_is_case_sensitive_prefix_match() {
        let snapshot = MetricSnapshot::new(vec![
            metric("Inventory_level_p-1", 1.0),
            metric("inventory_level", 2.0),
            metric("inventory_level_", 3.0),
        ]);

        let levels = snapshot.extract_values("inventory_level_");
        // Wrong case and too-short names do not match; an empty suffix does.
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[""], 3.0);
    }

    #[test]
    fn test_extract_values_last_wins_on_duplicates() {
        let snapshot = MetricSnapshot::new(vec![
            metric("inventory_level_p-1", 10.0),
            metric("inventory_level_p-1", 30.0),
        ]);

        let levels = snapshot.extract_values("inventory_level_");
        assert_eq!(levels.len(), 1);
        assert_eq!(levels["p-1"], 30.0);
    }

    #[test]
    fn test_extract_series_retains_all_points() {
        let base = Utc::now();
        let snapshot = MetricSnapshot::new(vec![
            metric("order_volume_p-1", 100.0).at(base),
            metric("order_volume_p-1", 110.0).at(base + Duration::hours(1)),
            metric("order_volume_p-1", 120.0).at(base + Duration::hours(2)),
            metric("order_volume_p-2", 5.0).at(base),
        ]);

        let series = snapshot.extract_series("order_volume_");
        assert_eq!(series["p-1"].len(), 3);
        assert_eq!(series["p-2"].len(), 1);
    }

    #[test]
    fn test_extract_from_empty_snapshot() {
        let snapshot = MetricSnapshot::default();
        assert!(snapshot.is_empty());
        assert!(snapshot.extract_values("inventory_level_").is_empty());
        assert!(snapshot.extract_series("order_volume_").is_empty());
    }
}
