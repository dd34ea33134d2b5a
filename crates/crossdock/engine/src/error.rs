//! Error types for the insight engine.

use crossdock_types::SourceDomain;
use thiserror::Error;

/// Errors raised by metric providers.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider's backing service could not be reached.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The provider produced a payload it could not decode.
    #[error("malformed provider payload: {0}")]
    Malformed(String),

    /// The provider did not answer within the configured deadline.
    #[error("provider for {domain} timed out")]
    Timeout { domain: SourceDomain },
}

/// Errors surfaced by a collection cycle.
///
/// Only collection failures reach the caller; malformed values, short
/// series, and missing join partners are absorbed inside the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A domain provider failed; the whole cycle fails with it.
    #[error("collection failed for {domain}: {source}")]
    Provider {
        domain: SourceDomain,
        #[source]
        source: ProviderError,
    },

    /// A collection task could not be joined.
    #[error("collection task failed: {0}")]
    Collection(String),
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::Provider {
            domain: SourceDomain::Warehousing,
            source: ProviderError::Unavailable("connection refused".to_string()),
        };
        let message = err.to_string();
        assert!(message.contains("warehousing"));
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn test_timeout_display() {
        let err = ProviderError::Timeout {
            domain: SourceDomain::CourierServices,
        };
        assert!(err.to_string().contains("courier_services"));
    }
}
