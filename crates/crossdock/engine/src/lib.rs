//! # Crossdock Engine - Cross-Domain Metric Correlation & Insights
//!
//! This crate derives cross-domain insights from time-stamped metrics
//! produced independently by three operational domains: courier services,
//! warehousing, and social commerce.
//!
//! ## Overview
//!
//! One cycle runs in two phases:
//!
//! 1. **Collection** fans out to every registered [`MetricProvider`]
//!    concurrently and joins on their combined completion. A single
//!    provider failure fails the whole cycle; partial results are
//!    discarded, not served.
//! 2. **Correlation** runs single-threaded over the merged
//!    [`MetricSnapshot`]: each rule in the fixed [`RuleSet`] joins two or
//!    three extracted metric families on a product or region key and fires
//!    typed [`Insight`]s when its threshold condition holds.
//!
//! Trend-based rules fit an ordinary least-squares slope over each key's
//! timestamp-ordered series ([`compute_trend`]); the composite
//! [`end_to_end_score`] folds the order, fulfillment, and delivery trends
//! into one 0-100 efficiency score.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use crossdock_engine::{EngineConfig, InsightOrchestrator, MetricProvider};
//!
//! # async fn example(courier: Arc<dyn MetricProvider>,
//! #                  warehouse: Arc<dyn MetricProvider>,
//! #                  social: Arc<dyn MetricProvider>) {
//! let mut orchestrator = InsightOrchestrator::new(EngineConfig::default());
//! orchestrator.register_provider(courier);
//! orchestrator.register_provider(warehouse);
//! orchestrator.register_provider(social);
//!
//! // One cycle: concurrent collection, then sequential rule evaluation.
//! let insights = orchestrator.generate_insights().await;
//! for insight in &insights {
//!     println!("[{}] {}", insight.severity, insight.title);
//! }
//! # }
//! ```
//!
//! ## Failure Policy
//!
//! Only collection failures surface, and only as far as the cycle
//! boundary: [`InsightOrchestrator::generate_insights`] logs the failure,
//! reports it on the event stream, and returns an empty list. Malformed
//! metric values degrade to `0.0` at the provider boundary; series too
//! short to fit and keys missing a join partner are skipped silently.
//! Callers therefore cannot distinguish "no risk found" from "data was
//! incomplete" within a cycle.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod extract;
pub mod orchestrator;
pub mod provider;
pub mod rules;
pub mod score;
pub mod trend;

// Re-export main types
pub use config::{EngineConfig, RuleThresholds};
pub use error::{EngineError, EngineResult, ProviderError};
pub use extract::MetricSnapshot;
pub use orchestrator::{CycleEvent, InsightOrchestrator, InsightSummary};
pub use provider::MetricProvider;
pub use rules::{
    CorrelationRule, CustomerExperienceGapRule, EndToEndOptimizationRule, InventoryRiskRule,
    LogisticsBottleneckRule, RuleSet, SupplyChainRiskRule,
};
pub use score::end_to_end_score;
pub use trend::{compute_trend, trend_of};

// Re-export the data model for downstream convenience
pub use crossdock_types::{
    CorrelationResult, Insight, InsightSeverity, InsightType, Metric, MetricPointType,
    SourceDomain, TrendSummary,
};
