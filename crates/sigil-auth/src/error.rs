//! Token verification error types.
//!
//! This module defines the typed failures the token engine can return.
//! Issuance has no failure mode; every variant here describes a way an
//! incoming token can be rejected.

use std::fmt;

/// Errors that can occur while verifying a session token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// No token was presented at all.
    #[error("Missing token")]
    MissingToken,

    /// The token is structurally invalid: wrong segment count, undecodable
    /// base64url, unparsable JSON, or missing required fields.
    #[error("Malformed token: {message}")]
    MalformedToken {
        /// Description of the structural defect.
        message: String,
    },

    /// The token's header names a signing algorithm other than the single
    /// supported one.
    #[error("Unsupported algorithm: {alg}")]
    UnsupportedAlgorithm {
        /// The algorithm the token declared.
        alg: String,
    },

    /// The token's signature does not match the recomputed value.
    #[error("Invalid signature")]
    InvalidSignature,

    /// The token's expiry timestamp is in the past.
    #[error("Token expired")]
    TokenExpired,
}

impl TokenError {
    /// Creates a new `MalformedToken` error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedToken {
            message: message.into(),
        }
    }

    /// Creates a new `UnsupportedAlgorithm` error.
    #[must_use]
    pub fn unsupported_algorithm(alg: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm { alg: alg.into() }
    }

    /// Returns `true` if the failure happened before any cryptographic
    /// check ran (absent or structurally invalid input).
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::MissingToken | Self::MalformedToken { .. })
    }

    /// Returns `true` if the token parsed but failed a cryptographic or
    /// temporal check.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedAlgorithm { .. } | Self::InvalidSignature | Self::TokenExpired
        )
    }

    /// Returns the failure kind as a short static label for logging.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingToken => ErrorKind::Missing,
            Self::MalformedToken { .. } => ErrorKind::Malformed,
            Self::UnsupportedAlgorithm { .. } => ErrorKind::UnsupportedAlgorithm,
            Self::InvalidSignature => ErrorKind::InvalidSignature,
            Self::TokenExpired => ErrorKind::Expired,
        }
    }

    /// Returns the OAuth 2.0 error code for this error.
    ///
    /// Every verification failure maps to the same `invalid_token` code, so
    /// a production response built from this value does not reveal which
    /// check rejected the token. The distinct variant stays available for
    /// internal logging and tests.
    #[must_use]
    pub fn oauth_error_code(&self) -> &'static str {
        "invalid_token"
    }
}

/// Short labels for verification failures, used in diagnostic events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No token presented.
    Missing,
    /// Structurally invalid token.
    Malformed,
    /// Unsupported signing algorithm.
    UnsupportedAlgorithm,
    /// Signature mismatch.
    InvalidSignature,
    /// Expired token.
    Expired,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Malformed => write!(f, "malformed"),
            Self::UnsupportedAlgorithm => write!(f, "unsupported_algorithm"),
            Self::InvalidSignature => write!(f, "invalid_signature"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TokenError::MissingToken;
        assert_eq!(err.to_string(), "Missing token");

        let err = TokenError::malformed("expected 3 segments, got 2");
        assert_eq!(err.to_string(), "Malformed token: expected 3 segments, got 2");

        let err = TokenError::unsupported_algorithm("none");
        assert_eq!(err.to_string(), "Unsupported algorithm: none");

        let err = TokenError::InvalidSignature;
        assert_eq!(err.to_string(), "Invalid signature");

        let err = TokenError::TokenExpired;
        assert_eq!(err.to_string(), "Token expired");
    }

    #[test]
    fn test_error_predicates() {
        assert!(TokenError::MissingToken.is_structural());
        assert!(TokenError::malformed("bad json").is_structural());
        assert!(!TokenError::InvalidSignature.is_structural());

        assert!(TokenError::unsupported_algorithm("RS256").is_rejection());
        assert!(TokenError::InvalidSignature.is_rejection());
        assert!(TokenError::TokenExpired.is_rejection());
        assert!(!TokenError::MissingToken.is_rejection());
    }

    #[test]
    fn test_error_kind_labels() {
        assert_eq!(TokenError::MissingToken.kind(), ErrorKind::Missing);
        assert_eq!(TokenError::malformed("x").kind(), ErrorKind::Malformed);
        assert_eq!(
            TokenError::unsupported_algorithm("none").kind(),
            ErrorKind::UnsupportedAlgorithm
        );
        assert_eq!(TokenError::InvalidSignature.kind(), ErrorKind::InvalidSignature);
        assert_eq!(TokenError::TokenExpired.kind(), ErrorKind::Expired);

        assert_eq!(ErrorKind::UnsupportedAlgorithm.to_string(), "unsupported_algorithm");
        assert_eq!(ErrorKind::Expired.to_string(), "expired");
    }

    #[test]
    fn test_oauth_error_code_is_uniform() {
        // Production responses must not reveal which check failed.
        let failures = [
            TokenError::MissingToken,
            TokenError::malformed("x"),
            TokenError::unsupported_algorithm("none"),
            TokenError::InvalidSignature,
            TokenError::TokenExpired,
        ];
        for err in &failures {
            assert_eq!(err.oauth_error_code(), "invalid_token");
        }
    }
}
