//! Token header and claims types.
//!
//! These are the two JSON documents a token carries. Field declaration
//! order is load-bearing: compact serialization of [`Header`] must produce
//! exactly `{"alg":"HS256","typ":"JWT"}`, the byte sequence the signature
//! covers.

use serde::{Deserialize, Serialize};

/// The single supported signing algorithm identifier.
pub const ALGORITHM: &str = "HS256";

/// The token-type identifier marking the format.
pub const TOKEN_TYPE: &str = "JWT";

/// Token header: algorithm and token-type identifiers.
///
/// Both fields are engine constants on the issue path. On the verify path
/// the decoded `alg` must exactly match [`ALGORITHM`]; accepting any other
/// value would let a token name a weaker or unkeyed algorithm and have the
/// verifier honor it (algorithm confusion). `typ` must be present but its
/// value is not pinned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    /// Signing algorithm identifier.
    pub alg: String,

    /// Token-type identifier.
    pub typ: String,
}

impl Header {
    /// Creates the fixed header every issued token carries.
    #[must_use]
    pub fn hs256() -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }

    /// Returns `true` if this header names the supported algorithm.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.alg == ALGORITHM
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::hs256()
    }
}

/// The facts a token asserts about its subject and validity window.
///
/// Timestamps are integer Unix seconds (UTC). Both are generated by the
/// engine from the injected clock value, never supplied by the caller, so
/// a caller cannot mint a long-lived token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject display name.
    pub sub: String,

    /// Stable subject identifier.
    pub uid: String,

    /// Authorization tag.
    pub role: String,

    /// Issued-at (Unix seconds).
    pub iat: i64,

    /// Expires-at (Unix seconds).
    pub exp: i64,
}
