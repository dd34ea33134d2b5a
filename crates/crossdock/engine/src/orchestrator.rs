//! Collection orchestration: concurrent fan-out to the domain providers,
//! fan-in at a join barrier, then sequential rule evaluation.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, error, info, instrument, warn};

use crossdock_types::{Insight, InsightSeverity, InsightType, SourceDomain};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult, ProviderError};
use crate::extract::MetricSnapshot;
use crate::provider::MetricProvider;
use crate::rules::RuleSet;

/// Events emitted over the orchestrator's broadcast stream.
#[derive(Debug, Clone)]
pub enum CycleEvent {
    /// One provider finished collecting.
    ProviderCollected { domain: SourceDomain, count: usize },

    /// The cycle failed; no insights were produced.
    CycleFailed { reason: String },

    /// Rule evaluation finished.
    InsightsGenerated { count: usize },
}

/// Orchestrates one collection-and-correlation cycle.
///
/// `collect` fans out to every registered provider concurrently and joins
/// on their combined completion; the correlation phase then runs
/// single-threaded over the merged snapshot. No state outlives a cycle
/// except the provider handles and configuration.
pub struct InsightOrchestrator {
    /// Registered providers, one per domain.
    providers: Vec<Arc<dyn MetricProvider>>,

    /// Engine configuration.
    config: EngineConfig,

    /// Correlation rules, in fixed evaluation order.
    rules: RuleSet,

    /// Event broadcaster.
    event_tx: broadcast::Sender<CycleEvent>,
}

impl InsightOrchestrator {
    /// Create an orchestrator with the default rule set.
    pub fn new(config: EngineConfig) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        Self {
            providers: Vec::new(),
            config,
            rules: RuleSet::default_set(),
            event_tx,
        }
    }

    /// Replace the rule set.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Register a domain provider.
    pub fn register_provider(&mut self, provider: Arc<dyn MetricProvider>) {
        info!(domain = %provider.domain(), service = provider.source_service(),
            "Registering metric provider");
        self.providers.push(provider);
    }

    /// Subscribe to cycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<CycleEvent> {
        self.event_tx.subscribe()
    }

    /// Registered provider domains, in registration order.
    pub fn registered_domains(&self) -> Vec<SourceDomain> {
        self.providers.iter().map(|p| p.domain()).collect()
    }

    /// Collect one cycle's metrics from every provider concurrently.
    ///
    /// The call blocks no longer than the slowest provider. Fail-fast: the
    /// first provider error fails the whole cycle and results already
    /// obtained from the other providers are discarded.
    #[instrument(skip(self))]
    pub async fn collect(&self) -> EngineResult<MetricSnapshot> {
        let timeout = self.config.provider_timeout;

        let handles: Vec<_> = self
            .providers
            .iter()
            .map(|provider| {
                let provider = Arc::clone(provider);
                tokio::spawn(async move {
                    let domain = provider.domain();
                    let outcome = match timeout {
                        Some(deadline) => {
                            match tokio::time::timeout(deadline, provider.collect_metrics()).await
                            {
                                Ok(result) => result,
                                Err(_) => Err(ProviderError::Timeout { domain }),
                            }
                        }
                        None => provider.collect_metrics().await,
                    };
                    (domain, outcome)
                })
            })
            .collect();

        let mut merged = Vec::new();
        for handle in handles {
            let (domain, outcome) = handle
                .await
                .map_err(|e| EngineError::Collection(e.to_string()))?;
            let metrics = outcome.map_err(|source| EngineError::Provider { domain, source })?;

            debug!(domain = %domain, count = metrics.len(), "Provider collected");
            let _ = self.event_tx.send(CycleEvent::ProviderCollected {
                domain,
                count: metrics.len(),
            });
            merged.extend(metrics);
        }

        Ok(MetricSnapshot::new(merged))
    }

    /// Run one full cycle: collect, correlate, score.
    ///
    /// A failed collection yields an empty insight list; the failure is
    /// logged and reported on the event stream, never raised to the caller.
    /// The caller retries on its own schedule.
    #[instrument(skip(self))]
    pub async fn generate_insights(&self) -> Vec<Insight> {
        match self.collect().await {
            Ok(snapshot) => self.generate_insights_from(&snapshot),
            Err(e) => {
                error!(error = %e, "Collection cycle failed; dropping partial results");
                let _ = self.event_tx.send(CycleEvent::CycleFailed {
                    reason: e.to_string(),
                });
                Vec::new()
            }
        }
    }

    /// Run the rule engine over pre-collected metrics.
    pub fn generate_insights_from(&self, snapshot: &MetricSnapshot) -> Vec<Insight> {
        if snapshot.is_empty() {
            warn!("Empty metric snapshot; no insights to derive");
        }

        let insights = self.rules.evaluate_all(snapshot, &self.config.thresholds);

        info!(
            metrics = snapshot.len(),
            insights = insights.len(),
            "Cycle complete"
        );
        let _ = self.event_tx.send(CycleEvent::InsightsGenerated {
            count: insights.len(),
        });
        insights
    }
}

/// Counts of insights by type and severity for one cycle.
#[derive(Debug, Clone, Default)]
pub struct InsightSummary {
    /// Total insights in the cycle.
    pub total: usize,

    /// Insights per type.
    pub by_type: HashMap<InsightType, usize>,

    /// Insights per severity.
    pub by_severity: HashMap<InsightSeverity, usize>,
}

impl InsightSummary {
    /// Summarize a cycle's insight list.
    pub fn from_insights(insights: &[Insight]) -> Self {
        let mut summary = Self {
            total: insights.len(),
            ..Self::default()
        };
        for insight in insights {
            *summary.by_type.entry(insight.insight_type).or_default() += 1;
            *summary.by_severity.entry(insight.severity).or_default() += 1;
        }
        summary
    }

    /// Number of high-severity insights.
    pub fn high_severity(&self) -> usize {
        self.by_severity
            .get(&InsightSeverity::High)
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crossdock_types::Metric;
    use std::time::Duration;

    struct StaticProvider {
        domain: SourceDomain,
        metrics: Vec<Metric>,
    }

    #[async_trait]
    impl MetricProvider for StaticProvider {
        fn domain(&self) -> SourceDomain {
            self.domain
        }

        fn source_service(&self) -> &str {
            "static"
        }

        async fn collect_metrics(&self) -> Result<Vec<Metric>, ProviderError> {
            Ok(self.metrics.clone())
        }
    }

    struct FailingProvider {
        domain: SourceDomain,
    }

    #[async_trait]
    impl MetricProvider for FailingProvider {
        fn domain(&self) -> SourceDomain {
            self.domain
        }

        fn source_service(&self) -> &str {
            "failing"
        }

        async fn collect_metrics(&self) -> Result<Vec<Metric>, ProviderError> {
            Err(ProviderError::Unavailable("boom".to_string()))
        }
    }

    struct SlowProvider {
        domain: SourceDomain,
        delay: Duration,
    }

    #[async_trait]
    impl MetricProvider for SlowProvider {
        fn domain(&self) -> SourceDomain {
            self.domain
        }

        fn source_service(&self) -> &str {
            "slow"
        }

        async fn collect_metrics(&self) -> Result<Vec<Metric>, ProviderError> {
            tokio::time::sleep(self.delay).await;
            Ok(Vec::new())
        }
    }

    fn static_provider(domain: SourceDomain, names: &[(&str, f64)]) -> Arc<dyn MetricProvider> {
        Arc::new(StaticProvider {
            domain,
            metrics: names
                .iter()
                .map(|(name, value)| Metric::instant(*name, *value, "count", domain, "static"))
                .collect(),
        })
    }

    #[tokio::test]
    async fn test_collect_merges_all_providers() {
        let mut orchestrator = InsightOrchestrator::new(EngineConfig::default());
        orchestrator.register_provider(static_provider(
            SourceDomain::SocialCommerce,
            &[("product_trend_score_p-1", 90.0)],
        ));
        orchestrator.register_provider(static_provider(
            SourceDomain::Warehousing,
            &[("inventory_level_p-1", 10.0)],
        ));

        let snapshot = orchestrator.collect().await.unwrap();
        assert_eq!(snapshot.len(), 2);
    }

    #[tokio::test]
    async fn test_fail_fast_discards_partial_results() {
        let mut orchestrator = InsightOrchestrator::new(EngineConfig::default());
        // Courier and social succeed and would fire inventory risk...
        orchestrator.register_provider(static_provider(
            SourceDomain::SocialCommerce,
            &[("product_trend_score_p-1", 90.0)],
        ));
        orchestrator.register_provider(static_provider(
            SourceDomain::CourierServices,
            &[("delivery_time_us-east", 30.0)],
        ));
        // ...but warehousing fails, so the whole cycle fails.
        orchestrator.register_provider(Arc::new(FailingProvider {
            domain: SourceDomain::Warehousing,
        }));

        assert!(orchestrator.collect().await.is_err());

        let mut events = orchestrator.subscribe();
        let insights = orchestrator.generate_insights().await;
        assert!(insights.is_empty());

        // The failure is reported on the event stream, and no event claims
        // insights were generated from the surviving domains.
        let mut saw_failure = false;
        while let Ok(event) = events.try_recv() {
            match event {
                CycleEvent::CycleFailed { reason } => {
                    assert!(reason.contains("warehousing"));
                    saw_failure = true;
                }
                CycleEvent::InsightsGenerated { .. } => {
                    panic!("failed cycle must not report insights")
                }
                CycleEvent::ProviderCollected { .. } => {}
            }
        }
        assert!(saw_failure);
    }

    #[tokio::test]
    async fn test_generate_insights_end_to_end() {
        let mut orchestrator = InsightOrchestrator::new(EngineConfig::default());
        orchestrator.register_provider(static_provider(
            SourceDomain::SocialCommerce,
            &[("product_trend_score_p-1", 85.0), ("customer_satisfaction_us-east", 70.0)],
        ));
        orchestrator.register_provider(static_provider(
            SourceDomain::Warehousing,
            &[("inventory_level_p-1", 12.0), ("fulfillment_time_us-east", 50.0)],
        ));
        orchestrator.register_provider(static_provider(
            SourceDomain::CourierServices,
            &[("delivery_time_us-east", 30.0), ("delivery_performance_us-east", 92.0)],
        ));

        let insights = orchestrator.generate_insights().await;
        let summary = InsightSummary::from_insights(&insights);

        // Inventory risk (85 > 80, 12 < 20), bottleneck (48/80*100 = 60 < 70),
        // experience gap (92 - 70 = 22 > 15). No trend series, so neither
        // triple rule fires.
        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_type[&InsightType::InventoryRisk], 1);
        assert_eq!(summary.by_type[&InsightType::LogisticsBottleneck], 1);
        assert_eq!(summary.by_type[&InsightType::CustomerExperienceGap], 1);
        assert_eq!(summary.high_severity(), 1);
    }

    #[tokio::test]
    async fn test_provider_timeout_fails_cycle() {
        let config = EngineConfig::with_provider_timeout(Duration::from_millis(20));
        let mut orchestrator = InsightOrchestrator::new(config);
        orchestrator.register_provider(Arc::new(SlowProvider {
            domain: SourceDomain::CourierServices,
            delay: Duration::from_secs(5),
        }));

        let err = orchestrator.collect().await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::Provider {
                domain: SourceDomain::CourierServices,
                source: ProviderError::Timeout { .. },
            }
        ));
    }

    #[tokio::test]
    async fn test_no_timeout_by_default_slow_provider_completes() {
        let mut orchestrator = InsightOrchestrator::new(EngineConfig::default());
        orchestrator.register_provider(Arc::new(SlowProvider {
            domain: SourceDomain::CourierServices,
            delay: Duration::from_millis(10),
        }));

        let snapshot = orchestrator.collect().await.unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let insights = vec![
            Insight::builder(InsightType::InventoryRisk)
                .severity(InsightSeverity::High)
                .build(),
            Insight::builder(InsightType::InventoryRisk)
                .severity(InsightSeverity::High)
                .build(),
            Insight::builder(InsightType::LogisticsBottleneck)
                .severity(InsightSeverity::Medium)
                .build(),
        ];
        let summary = InsightSummary::from_insights(&insights);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_type[&InsightType::InventoryRisk], 2);
        assert_eq!(summary.high_severity(), 2);
    }
}
