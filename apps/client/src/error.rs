use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network failure during {op}: {detail}")]
    Network { op: &'static str, detail: String },
    #[error("Server rejected {op} with status {status}: {detail}")]
    ServerRejected {
        op: &'static str,
        status: u16,
        detail: String,
    },
    #[error("Malformed response to {op}: {detail}")]
    Decode { op: &'static str, detail: String },
    #[error("Data integrity failure: {detail}")]
    DataIntegrity { detail: String },
    #[error("Selection cancelled")]
    UserCancelled,
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Session closed")]
    SessionClosed,
}

impl ClientError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::Network { .. } => ErrorCode::NetworkFailure,
            ClientError::ServerRejected { .. } => ErrorCode::ServerRejected,
            ClientError::Decode { .. } => ErrorCode::MalformedResponse,
            ClientError::DataIntegrity { .. } => ErrorCode::DataIntegrity,
            ClientError::UserCancelled => ErrorCode::UserCancelled,
            ClientError::Domain(e) => match e {
                DomainError::InvalidRank(_) => ErrorCode::InvalidRank,
                DomainError::RankTypeMismatch { .. } => ErrorCode::RankTypeMismatch,
                DomainError::EmptyHand => ErrorCode::EmptyHand,
                DomainError::NoCardAtIndex(_) => ErrorCode::NoCardAtIndex,
                DomainError::TargetNotEligible(_) => ErrorCode::TargetNotEligible,
                DomainError::GuessOutOfRange(_) => ErrorCode::GuessOutOfRange,
                DomainError::PhaseMismatch { .. } => ErrorCode::PhaseMismatch,
            },
            ClientError::Config { .. } => ErrorCode::ConfigError,
            ClientError::SessionClosed => ErrorCode::SessionClosed,
        }
    }

    /// Transport-level failures: the request did not produce a usable answer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Network { .. }
                | ClientError::ServerRejected { .. }
                | ClientError::Decode { .. }
        )
    }

    /// Failures worth repeating for an idempotent read.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClientError::Network { .. } | ClientError::ServerRejected { .. }
        )
    }

    pub fn network(op: &'static str, detail: impl Into<String>) -> Self {
        Self::Network {
            op,
            detail: detail.into(),
        }
    }

    pub fn rejected(op: &'static str, status: u16, detail: impl Into<String>) -> Self {
        Self::ServerRejected {
            op,
            status,
            detail: detail.into(),
        }
    }

    pub fn decode(op: &'static str, detail: impl Into<String>) -> Self {
        Self::Decode {
            op,
            detail: detail.into(),
        }
    }

    /// An entity the snapshot must contain is absent.
    pub fn missing(entity: &'static str, id: impl std::fmt::Display) -> Self {
        Self::DataIntegrity {
            detail: format!("{entity} {id} is not in the snapshot's player list"),
        }
    }

    pub fn integrity(detail: impl Into<String>) -> Self {
        Self::DataIntegrity {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<std::env::VarError> for ClientError {
    fn from(e: std::env::VarError) -> Self {
        ClientError::config(format!("env var error: {e}"))
    }
}
