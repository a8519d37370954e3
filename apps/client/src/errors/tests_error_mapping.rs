// Unit tests for error mapping - no transport involved
use crate::domain::ids::PlayerId;
use crate::errors::domain::DomainError;
use crate::{ClientError, ErrorCode};

#[test]
fn maps_domain_errors_to_their_codes() {
    let err: ClientError = DomainError::GuessOutOfRange(1).into();
    assert_eq!(err.code(), ErrorCode::GuessOutOfRange);
    assert_eq!(err.code().as_str(), "GUESS_OUT_OF_RANGE");

    let err: ClientError = DomainError::TargetNotEligible(PlayerId::from("cpu-1")).into();
    assert_eq!(err.code(), ErrorCode::TargetNotEligible);

    let err: ClientError = DomainError::phase("Drawn", "Submitting").into();
    assert_eq!(err.code().as_str(), "PHASE_MISMATCH");
    assert!(err.to_string().contains("expected pipeline stage Drawn"));
}

#[test]
fn transport_errors_are_classified() {
    let net = ClientError::network("draw", "connection refused");
    assert!(net.is_transport());
    assert!(net.is_retryable());
    assert_eq!(net.code(), ErrorCode::NetworkFailure);

    let rejected = ClientError::rejected("play", 400, "");
    assert!(rejected.is_transport());
    assert!(rejected.is_retryable());

    let decode = ClientError::decode("fetch state", "missing field `players`");
    assert!(decode.is_transport());
    assert!(!decode.is_retryable());
    assert_eq!(decode.code().as_str(), "MALFORMED_RESPONSE");
}

#[test]
fn integrity_failures_name_the_missing_entity() {
    let err = ClientError::missing("round winner", "cpu-2");
    assert_eq!(err.code(), ErrorCode::DataIntegrity);
    assert!(!err.is_transport());
    assert_eq!(
        err.to_string(),
        "Data integrity failure: round winner cpu-2 is not in the snapshot's player list"
    );
}

#[test]
fn error_codes_are_unique() {
    let codes = [
        ErrorCode::NetworkFailure,
        ErrorCode::ServerRejected,
        ErrorCode::MalformedResponse,
        ErrorCode::DataIntegrity,
        ErrorCode::UserCancelled,
        ErrorCode::InvalidRank,
        ErrorCode::RankTypeMismatch,
        ErrorCode::EmptyHand,
        ErrorCode::NoCardAtIndex,
        ErrorCode::TargetNotEligible,
        ErrorCode::GuessOutOfRange,
        ErrorCode::PhaseMismatch,
        ErrorCode::ConfigError,
        ErrorCode::SessionClosed,
    ];
    let mut seen = std::collections::HashSet::new();
    for code in codes {
        assert!(seen.insert(code.as_str()), "duplicate code {code}");
    }
}
