//! Session-token issuance and verification.
//!
//! The engine builds and checks the three-segment wire format
//! `base64url(header) + "." + base64url(payload) + "." + base64url(signature)`
//! directly from an HMAC-SHA256 primitive; no pre-built token library sits
//! behind it. The signature covers the two *encoded* segments, so
//! verification is purely string-based and immune to JSON re-serialization
//! differences (key order, whitespace).
//!
//! Both operations take the current time as an argument rather than reading
//! a global clock, which keeps expiry behavior deterministic under test;
//! [`TokenEngine::issue_now`] and [`TokenEngine::verify_now`] wrap them for
//! callers that want the real clock.
//!
//! # Example
//!
//! ```
//! use sigil_auth::token::{SigningKey, TokenEngine};
//!
//! let engine = TokenEngine::new(SigningKey::from_secret(
//!     "an-example-secret-of-at-least-32-bytes!",
//! ));
//!
//! let token = engine.issue("admin", "1", "admin", 1_700_000_000);
//! let claims = engine.verify(&token, 1_700_000_000).unwrap();
//! assert_eq!(claims.sub, "admin");
//! assert_eq!(claims.exp, 1_700_003_600);
//! ```

use std::fmt;
use std::time::Duration;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use time::OffsetDateTime;

use crate::config::{ConfigError, TokenConfig};
use crate::encoding;
use crate::error::TokenError;

use super::claims::{Claims, Header};

type HmacSha256 = Hmac<Sha256>;

/// Default validity window for issued tokens.
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

// =============================================================================
// Signing Key
// =============================================================================

/// The secret key a token engine signs and verifies with.
///
/// Immutable after construction and shared read-only across any number of
/// concurrent callers. The buffer is zeroed on drop, and `Debug` output
/// never contains key material.
#[derive(Clone)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Creates a key from raw bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Creates a key from a secret string's UTF-8 bytes.
    #[must_use]
    pub fn from_secret(secret: &str) -> Self {
        Self(secret.as_bytes().to_vec())
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        // Zeroize on drop
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

// =============================================================================
// Constant-Time Comparison
// =============================================================================

/// Compares two strings in time independent of the position of the first
/// mismatching byte.
///
/// The language's `==` on strings short-circuits at the first difference,
/// which lets an attacker submitting forged signatures measure how many
/// leading characters were right. This routine inspects every byte
/// regardless. Unequal lengths compare unequal immediately; length is not
/// secret here, since every well-formed signature segment has the same
/// length.
#[must_use]
fn constant_time_str_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

// =============================================================================
// Token Engine
// =============================================================================

/// Issues and verifies signed session tokens.
///
/// Stateless apart from the immutable signing key and lifetime; `Send +
/// Sync` and safe to share across threads without locking. Separate engines
/// with separate keys can coexist: a token verifies only under the key
/// that issued it.
pub struct TokenEngine {
    key: SigningKey,
    lifetime: Duration,
}

impl TokenEngine {
    /// Creates an engine with the default one-hour token lifetime.
    #[must_use]
    pub fn new(key: SigningKey) -> Self {
        Self {
            key,
            lifetime: DEFAULT_TOKEN_LIFETIME,
        }
    }

    /// Creates an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation
    /// (empty or too-short secret, zero lifetime).
    pub fn from_config(config: &TokenConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            key: SigningKey::from_secret(&config.secret),
            lifetime: config.token_lifetime,
        })
    }

    /// Overrides the token lifetime.
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Returns the configured token lifetime.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    // -------------------------------------------------------------------------
    // Issue
    // -------------------------------------------------------------------------

    /// Issues a signed token for an already-authenticated principal.
    ///
    /// `now` is the issuance time in Unix seconds; the token expires
    /// `lifetime` later. Credential checking belongs to the caller; this
    /// method asserts whatever it is given.
    #[must_use]
    pub fn issue(&self, subject: &str, subject_id: &str, role: &str, now: i64) -> String {
        let header = Header::hs256();
        let claims = Claims {
            sub: subject.to_string(),
            uid: subject_id.to_string(),
            role: role.to_string(),
            iat: now,
            exp: now + self.lifetime.as_secs() as i64,
        };

        // Serialization of structs holding only strings and integers cannot
        // fail.
        let header_json =
            serde_json::to_string(&header).expect("header serializes to JSON");
        let claims_json =
            serde_json::to_string(&claims).expect("claims serialize to JSON");

        let encoded_header = encoding::encode(header_json);
        let encoded_payload = encoding::encode(claims_json);

        let signing_input = format!("{encoded_header}.{encoded_payload}");
        let encoded_signature = encoding::encode(self.sign(&signing_input));

        format!("{signing_input}.{encoded_signature}")
    }

    /// Issues a token stamped with the current UTC time.
    #[must_use]
    pub fn issue_now(&self, subject: &str, subject_id: &str, role: &str) -> String {
        self.issue(
            subject,
            subject_id,
            role,
            OffsetDateTime::now_utc().unix_timestamp(),
        )
    }

    // -------------------------------------------------------------------------
    // Verify
    // -------------------------------------------------------------------------

    /// Verifies a token string and returns its claims.
    ///
    /// Checks run cheapest-first and terminate on the first failure:
    /// structure (presence, segment count, decodability), then the
    /// algorithm pin, then the signature, then expiry. The signature
    /// comparison never runs on input that is structurally invalid or names
    /// a foreign algorithm. Expiry is strict: a token whose `exp` equals
    /// `now` is still valid, and no clock-skew allowance is applied.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] naming the first failed check.
    pub fn verify(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        if token.is_empty() {
            return Err(rejected(TokenError::MissingToken));
        }

        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
            return Err(rejected(TokenError::malformed(format!(
                "expected 3 non-empty segments, got {}",
                segments.len()
            ))));
        }

        let header_bytes = encoding::decode(segments[0])
            .map_err(|e| rejected(TokenError::malformed(e.to_string())))?;
        let header: Header = serde_json::from_slice(&header_bytes)
            .map_err(|e| rejected(TokenError::malformed(format!("header: {e}"))))?;

        let payload_bytes = encoding::decode(segments[1])
            .map_err(|e| rejected(TokenError::malformed(e.to_string())))?;
        let claims: Claims = serde_json::from_slice(&payload_bytes)
            .map_err(|e| rejected(TokenError::malformed(format!("payload: {e}"))))?;

        if !header.is_supported() {
            return Err(rejected(TokenError::unsupported_algorithm(header.alg)));
        }

        let signing_input = format!("{}.{}", segments[0], segments[1]);
        let expected_signature = encoding::encode(self.sign(&signing_input));
        if !constant_time_str_eq(&expected_signature, segments[2]) {
            return Err(rejected(TokenError::InvalidSignature));
        }

        if now > claims.exp {
            return Err(rejected(TokenError::TokenExpired));
        }

        Ok(claims)
    }

    /// Verifies a token against the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] naming the first failed check.
    pub fn verify_now(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify(token, OffsetDateTime::now_utc().unix_timestamp())
    }

    fn sign(&self, signing_input: &str) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.key.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(signing_input.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

/// Emits a leak-free diagnostic event for a rejected token.
///
/// Only the failure kind is recorded, never token contents, signatures, or
/// key material.
fn rejected(err: TokenError) -> TokenError {
    tracing::debug!(kind = %err.kind(), "token rejected");
    err
}

// =============================================================================
// Tests
// =============================================================================
