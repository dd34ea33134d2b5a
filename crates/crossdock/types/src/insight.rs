//! Insights fired by correlation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metric::SourceDomain;

/// Classification of a cross-domain finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsightType {
    /// Demand is trending up while inventory runs low.
    InventoryRisk,
    /// Combined fulfillment + delivery time drags the logistics score down.
    LogisticsBottleneck,
    /// Delivery performance outruns customer satisfaction.
    CustomerExperienceGap,
    /// Order volume rises while fulfillment efficiency degrades.
    SupplyChainRisk,
    /// End-to-end efficiency score below the optimization threshold.
    EndToEndOptimization,
}

impl std::fmt::Display for InsightType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightType::InventoryRisk => write!(f, "inventory_risk"),
            InsightType::LogisticsBottleneck => write!(f, "logistics_bottleneck"),
            InsightType::CustomerExperienceGap => write!(f, "customer_experience_gap"),
            InsightType::SupplyChainRisk => write!(f, "supply_chain_risk"),
            InsightType::EndToEndOptimization => write!(f, "end_to_end_optimization"),
        }
    }
}

/// Severity of an insight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum InsightSeverity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for InsightSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightSeverity::Low => write!(f, "low"),
            InsightSeverity::Medium => write!(f, "medium"),
            InsightSeverity::High => write!(f, "high"),
        }
    }
}

/// A classified, human-readable finding produced when a correlation rule's
/// threshold condition holds across two or more domains.
///
/// Insights are created only by the rule engine, never mutated after
/// creation, and handed to the caller for persistence or serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    /// Unique insight id.
    pub id: String,

    /// Classification.
    pub insight_type: InsightType,

    /// Short human-readable title.
    pub title: String,

    /// Detailed description with the observed values.
    pub description: String,

    /// Severity.
    pub severity: InsightSeverity,

    /// Domains whose metrics contributed, in rule-defined order, deduped.
    pub source_domains: Vec<SourceDomain>,

    /// Creation time.
    pub timestamp: DateTime<Utc>,

    /// Full names of the source metrics involved, for cross-referencing.
    pub related_metric_keys: Vec<String>,
}

impl Insight {
    /// Start building an insight of the given type.
    pub fn builder(insight_type: InsightType) -> InsightBuilder {
        InsightBuilder::new(insight_type)
    }
}

/// Builder for insights.
#[derive(Debug)]
pub struct InsightBuilder {
    insight_type: InsightType,
    title: Option<String>,
    description: Option<String>,
    severity: InsightSeverity,
    source_domains: Vec<SourceDomain>,
    related_metric_keys: Vec<String>,
}

impl InsightBuilder {
    /// Create a new builder.
    pub fn new(insight_type: InsightType) -> Self {
        Self {
            insight_type,
            title: None,
            description: None,
            severity: InsightSeverity::Low,
            source_domains: Vec::new(),
            related_metric_keys: Vec::new(),
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the severity.
    pub fn severity(mut self, severity: InsightSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Add a contributing domain. Duplicates are ignored.
    pub fn source_domain(mut self, domain: SourceDomain) -> Self {
        if !self.source_domains.contains(&domain) {
            self.source_domains.push(domain);
        }
        self
    }

    /// Add a related metric name.
    pub fn related_metric(mut self, name: impl Into<String>) -> Self {
        self.related_metric_keys.push(name.into());
        self
    }

    /// Build the insight.
    pub fn build(self) -> Insight {
        Insight {
            id: Uuid::new_v4().to_string(),
            insight_type: self.insight_type,
            title: self.title.unwrap_or_else(|| self.insight_type.to_string()),
            description: self.description.unwrap_or_default(),
            severity: self.severity,
            source_domains: self.source_domains,
            timestamp: Utc::now(),
            related_metric_keys: self.related_metric_keys,
        }
    }
}
