//! Provider trait at the engine's inbound boundary.

use async_trait::async_trait;
use crossdock_types::{Metric, SourceDomain};

use crate::error::ProviderError;

/// A domain metric provider.
///
/// Each provider supplies a flat, unordered list of named metrics for one
/// business vertical. The engine consumes the list read-only; providers own
/// any per-collection state (such as a last-collected timestamp) as explicit
/// fields on the implementing type.
#[async_trait]
pub trait MetricProvider: Send + Sync {
    /// Domain this provider reports for.
    fn domain(&self) -> SourceDomain;

    /// Service label recorded on emitted metrics.
    fn source_service(&self) -> &str;

    /// Collect the current metric list.
    ///
    /// An error here fails the whole collection cycle; partial results from
    /// other providers are discarded.
    async fn collect_metrics(&self) -> Result<Vec<Metric>, ProviderError>;
}
