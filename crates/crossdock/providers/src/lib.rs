//! Crossdock Providers - Reference metric providers
//!
//! Three simulated domain providers (courier services, warehousing, social
//! commerce) that emit every metric family the correlation rules consume,
//! plus a JSON-document provider that populates typed metrics from
//! loosely-typed payloads at the boundary.
//!
//! Each simulated provider keeps its collection state as an explicit
//! `last_collected` field on the provider struct; nothing is shared between
//! providers.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use crossdock_engine::{EngineConfig, InsightOrchestrator};
//! use crossdock_providers::{
//!     CourierMetricsProvider, SocialCommerceMetricsProvider, WarehouseMetricsProvider,
//! };
//!
//! # async fn example() {
//! let regions = vec!["us-east".to_string(), "eu-west".to_string()];
//! let products = vec!["p-1001".to_string(), "p-1002".to_string()];
//!
//! let mut orchestrator = InsightOrchestrator::new(EngineConfig::default());
//! orchestrator.register_provider(Arc::new(CourierMetricsProvider::new(
//!     regions.clone(),
//!     products.clone(),
//! )));
//! orchestrator.register_provider(Arc::new(WarehouseMetricsProvider::new(
//!     regions.clone(),
//!     products.clone(),
//! )));
//! orchestrator.register_provider(Arc::new(SocialCommerceMetricsProvider::new(
//!     regions, products,
//! )));
//!
//! let insights = orchestrator.generate_insights().await;
//! # let _ = insights;
//! # }
//! ```

#![deny(unsafe_code)]

pub mod courier;
pub mod json;
pub mod social;
pub mod warehouse;

// Re-export main types
pub use courier::CourierMetricsProvider;
pub use json::JsonMetricsProvider;
pub use social::SocialCommerceMetricsProvider;
pub use warehouse::WarehouseMetricsProvider;
