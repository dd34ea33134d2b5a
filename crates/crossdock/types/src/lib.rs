//! Crossdock Types - Core types for cross-domain metric correlation
//!
//! Crossdock correlates time-stamped metrics produced independently by three
//! operational domains (courier services, warehousing, social commerce) and
//! derives cross-domain insights from them.
//!
//! ## Architectural Boundaries
//!
//! - **Providers** own: metric production, per-domain collection state
//! - **Engine** owns: extraction, trend fitting, correlation rules, scoring
//! - **Downstream** owns: persistence and serving of insights (out of scope)
//!
//! ## Key Concepts
//!
//! - **Metric**: A single named observation from one domain
//! - **Family**: A metric name prefix grouping observations by entity/region
//! - **TrendSummary**: `{current_value, slope}` fitted over an ordered series
//! - **Insight**: A classified finding fired by a correlation rule

#![deny(unsafe_code)]

pub mod families;
pub mod insight;
pub mod metric;
pub mod trend;

// Re-export main types
pub use insight::{Insight, InsightBuilder, InsightSeverity, InsightType};
pub use metric::{Metric, MetricPointType, SourceDomain};
pub use trend::{CorrelationResult, TrendSummary};
