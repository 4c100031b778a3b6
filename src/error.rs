//! Error types for EWS client operations.
//!
//! The taxonomy separates the three ways a protocol exchange can fail as a
//! whole: invalid input caught before the network ([`ValidationError`]),
//! transport failure ([`TransportError`]), and a response that violates the
//! protocol contract ([`EwsError::MalformedResponse`]). Per-object failures
//! inside an otherwise successful batch are different: they are represented
//! as [`ErrorKind`] values in the aligned outcome sequence and never abort
//! sibling objects.

/// Main error type for whole-call failures.
///
/// Per-object failures inside a batch are *not* errors at this level; they
/// are delivered as outcomes so that callers always receive the full aligned
/// response sequence.
#[derive(Debug, thiserror::Error)]
pub enum EwsError {
    /// Request rejected locally before any transport call was attempted
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The transport capability failed to complete the exchange
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server (or an intermediary) returned a document that violates
    /// the protocol contract
    #[error("Malformed response: {detail}")]
    MalformedResponse { detail: String },
}

impl EwsError {
    /// Create a malformed-response error.
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            detail: detail.into(),
        }
    }
}

/// A request that violates the schema registry's rules for the stated
/// operation kind.
///
/// Always raised before the request document reaches the network, and always
/// recoverable by fixing the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field '{field}': {reason}")]
pub struct ValidationError {
    /// The offending field, or a pseudo-field like `operation` or `items`
    /// for request-level violations
    pub field: String,
    /// Why the field was rejected
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Reject a field that is missing but required for the operation.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "required field is missing")
    }

    /// Reject a field that must not be present for the operation.
    pub fn forbidden(field: impl Into<String>, operation: &str) -> Self {
        let field = field.into();
        let reason = format!("field is not allowed on {operation}");
        Self { field, reason }
    }
}

/// Failure of the transport capability to complete a request/response
/// exchange.
///
/// Surfaced as-is and never retried by this layer: the dispatcher cannot
/// know whether a mutating operation already committed server-side, so retry
/// policy belongs to the caller.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub detail: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn timeout(detail: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Timeout, detail)
    }

    pub fn connection_failed(detail: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::ConnectionFailed, detail)
    }

    pub fn auth_rejected(detail: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::AuthRejected, detail)
    }
}

/// Coarse classification of transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The exchange did not complete within the transport's deadline
    Timeout,
    /// Connecting to or conversing with the server failed
    ConnectionFailed,
    /// The server refused the configured credentials
    AuthRejected,
    /// Anything else the transport wants to surface
    Other,
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Timeout => "timeout",
            Self::ConnectionFailed => "connection failed",
            Self::AuthRejected => "authentication rejected",
            Self::Other => "transport failure",
        };
        f.write_str(name)
    }
}

/// Classification of a per-object server failure inside a batch.
///
/// The server's response-code vocabulary is open-ended; codes without a
/// local classification are preserved in [`ErrorKind::Unknown`] rather than
/// dropped, so callers can still branch on the raw code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The supplied change key is no longer the server's current one;
    /// re-fetch the object and retry with the fresh identity
    Conflict,
    /// The addressed object (or its parent) does not exist
    NotFound,
    /// The authenticated account may not perform this operation
    PermissionDenied,
    /// A server-side quota or store limit was hit
    QuotaExceeded,
    /// Any response code without a local classification, preserved verbatim
    Unknown(String),
}

impl ErrorKind {
    /// Whether a retry with a re-fetched identity can succeed.
    pub fn is_retriable_after_refetch(&self) -> bool {
        matches!(self, Self::Conflict)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conflict => f.write_str("conflict"),
            Self::NotFound => f.write_str("not found"),
            Self::PermissionDenied => f.write_str("permission denied"),
            Self::QuotaExceeded => f.write_str("quota exceeded"),
            Self::Unknown(code) => write!(f, "unknown ({code})"),
        }
    }
}

// Result type aliases for convenience
pub type EwsResult<T> = Result<T, EwsError>;
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::forbidden("ItemId", "create");
        assert_eq!(
            error.to_string(),
            "field 'ItemId': field is not allowed on create"
        );
    }

    #[test]
    fn test_validation_error_wraps_into_ews_error() {
        let error = EwsError::from(ValidationError::missing("Subject"));
        assert!(error.to_string().contains("Subject"));
        assert!(matches!(error, EwsError::Validation(_)));
    }

    #[test]
    fn test_transport_error_display() {
        let error = TransportError::timeout("no response after 30s");
        assert_eq!(error.to_string(), "timeout: no response after 30s");
    }

    #[test]
    fn test_unknown_kind_preserves_code() {
        let kind = ErrorKind::Unknown("ErrorInvalidSmtpAddress".into());
        assert!(kind.to_string().contains("ErrorInvalidSmtpAddress"));
        assert!(!kind.is_retriable_after_refetch());
        assert!(ErrorKind::Conflict.is_retriable_after_refetch());
    }
}
