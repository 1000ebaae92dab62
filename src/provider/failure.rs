//! Dispatch failures
//!
//! Every way a real lookup can fail. These never reach the caller of the
//! engine; they decide whether to fall back and what to log.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchFailure {
    #[error("Tool has no live provider")]
    NotIntegrated,

    #[error("Credential {0} is not set")]
    MissingCredential(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Provider returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl DispatchFailure {
    /// Short stable name for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotIntegrated => "not_integrated",
            Self::MissingCredential(_) => "missing_credential",
            Self::Transport(_) => "transport",
            Self::HttpStatus(_) => "http_status",
            Self::ProviderError(_) => "provider_error",
            Self::MalformedPayload(_) => "malformed_payload",
        }
    }

    /// True when no request was attempted
    pub fn is_advisory(&self) -> bool {
        matches!(self, Self::NotIntegrated | Self::MissingCredential(_))
    }
}
