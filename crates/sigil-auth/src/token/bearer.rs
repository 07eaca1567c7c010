//! Authorization-header bearer token extraction.
//!
//! The request-handling layer hands the raw `Authorization` header value to
//! [`extract_bearer`] and passes the result to the engine's verify path.
//! Kept as a pure string helper so it carries no HTTP framework with it.

use crate::error::TokenError;

/// The scheme prefix a bearer credential must carry, matched
/// case-insensitively.
const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the bearer token from an `Authorization` header value.
///
/// The header must consist of the literal prefix `"Bearer "`
/// (case-insensitive) followed by the token; surrounding whitespace around
/// the token is trimmed.
///
/// # Errors
///
/// - [`TokenError::MissingToken`] if the header is absent, empty, or the
///   prefix is followed by nothing.
/// - [`TokenError::MalformedToken`] if the header does not start with the
///   bearer prefix.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, TokenError> {
    let header = match header {
        Some(value) if !value.is_empty() => value,
        _ => return Err(TokenError::MissingToken),
    };

    let prefix_len = BEARER_PREFIX.len();
    let has_prefix = header.len() >= prefix_len
        && header.as_bytes()[..prefix_len].eq_ignore_ascii_case(BEARER_PREFIX.as_bytes());
    if !has_prefix {
        return Err(TokenError::malformed(
            "authorization header must be of the form 'Bearer {token}'",
        ));
    }

    // The matched prefix is pure ASCII, so the byte offset is a char boundary.
    let token = header[prefix_len..].trim();
    if token.is_empty() {
        return Err(TokenError::MissingToken);
    }

    Ok(token)
}
