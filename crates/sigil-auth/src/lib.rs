//! # sigil-auth
//!
//! Self-contained signed session-token engine for the Sigil server.
//!
//! This crate issues and verifies compact, HMAC-SHA256-signed session
//! tokens (JWT wire format) built directly from cryptographic primitives;
//! no pre-built token library sits behind it. It owns the full trust
//! boundary of the scheme: segment encoding, signature computation and
//! constant-time checking, algorithm pinning, and strict expiry.
//!
//! The surrounding request-handling layer is a collaborator, not part of
//! this crate: it authenticates credentials, calls
//! [`TokenEngine::issue`](token::TokenEngine::issue), and later feeds
//! presented tokens through [`extract_bearer`](token::extract_bearer) and
//! [`TokenEngine::verify`](token::TokenEngine::verify).
//!
//! ## Modules
//!
//! - [`config`] - Signing secret and lifetime configuration
//! - [`encoding`] - URL-safe, unpadded base64 codec for token segments
//! - [`error`] - Typed verification failures
//! - [`token`] - The token engine, claims types, and bearer extraction
//!
//! ## Example
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
//! assert_eq!(claims.role, "admin");
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod token;

pub use config::{ConfigError, MIN_SECRET_BYTES, TokenConfig};
pub use encoding::EncodingError;
pub use error::{ErrorKind, TokenError};
pub use token::{
    ALGORITHM, Claims, DEFAULT_TOKEN_LIFETIME, Header, SigningKey, TOKEN_TYPE, TokenEngine,
    extract_bearer,
};

/// Type alias for token verification results.
pub type TokenResult<T> = Result<T, TokenError>;

/// Prelude module for convenient imports.
///
/// ```
/// use sigil_auth::prelude::*;
/// ```
pub mod prelude {
    pub use crate::TokenResult;
    pub use crate::config::{ConfigError, TokenConfig};
    pub use crate::error::{ErrorKind, TokenError};
    pub use crate::token::{Claims, Header, SigningKey, TokenEngine, extract_bearer};
}
