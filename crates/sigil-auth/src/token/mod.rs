//! Token issuance, verification, and bearer extraction.
//!
//! This module provides:
//!
//! - The signed session-token engine (issue and verify)
//! - The header and claims types the wire format carries
//! - The `Authorization` header bearer-extraction helper

pub mod bearer;
pub mod claims;
pub mod engine;

pub use bearer::extract_bearer;
pub use claims::{ALGORITHM, Claims, Header, TOKEN_TYPE};
pub use engine::{DEFAULT_TOKEN_LIFETIME, SigningKey, TokenEngine};
