//! Error codes for the table client.
//!
//! Every failure the client reports carries one of these codes; presenters
//! and logs key on the string form. Add new codes here; never pass ad-hoc
//! strings as error codes.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Transport
    /// Request could not be sent or timed out
    NetworkFailure,
    /// Server answered with a non-success status
    ServerRejected,
    /// Server answered with a body we could not decode
    MalformedResponse,

    // Snapshot integrity
    /// An expected player is missing from the snapshot
    DataIntegrity,

    // Local input
    /// The player abandoned a target or guess selection
    UserCancelled,
    /// Card rank outside 1..=8
    InvalidRank,
    /// Card rank disagrees with card type
    RankTypeMismatch,
    /// Draw produced no playable cards
    EmptyHand,
    /// Selected card index does not exist
    NoCardAtIndex,
    /// Target is not eligible for the selected card
    TargetNotEligible,
    /// Guess outside the legal range
    GuessOutOfRange,
    /// Input arrived in the wrong pipeline stage
    PhaseMismatch,

    // Session
    /// Configuration error
    ConfigError,
    /// Session was torn down or its input channel closed
    SessionClosed,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NetworkFailure => "NETWORK_FAILURE",
            Self::ServerRejected => "SERVER_REJECTED",
            Self::MalformedResponse => "MALFORMED_RESPONSE",

            Self::DataIntegrity => "DATA_INTEGRITY",

            Self::UserCancelled => "USER_CANCELLED",
            Self::InvalidRank => "INVALID_RANK",
            Self::RankTypeMismatch => "RANK_TYPE_MISMATCH",
            Self::EmptyHand => "EMPTY_HAND",
            Self::NoCardAtIndex => "NO_CARD_AT_INDEX",
            Self::TargetNotEligible => "TARGET_NOT_ELIGIBLE",
            Self::GuessOutOfRange => "GUESS_OUT_OF_RANGE",
            Self::PhaseMismatch => "PHASE_MISMATCH",

            Self::ConfigError => "CONFIG_ERROR",
            Self::SessionClosed => "SESSION_CLOSED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
