//! URL-safe, unpadded base64 codec for token segments.
//!
//! Every segment of a token (header, payload, signature) is carried in this
//! encoding: the standard base64 alphabet with `+` and `/` replaced by `-`
//! and `_`, and trailing `=` padding removed. Those three characters are
//! unsafe or redundant wherever a token ends up in a URL or header.
//!
//! The alphabet mapping and padding arithmetic live here rather than behind
//! a URL-safe engine so the decode path can reject a padding-impossible
//! length itself (see [`decode`]).
//!
//! # Example
//!
//! ```
//! use sigil_auth::encoding;
//!
//! let encoded = encoding::encode(b"sigil");
//! assert_eq!(encoded, "c2lnaWw");
//! assert_eq!(encoding::decode(&encoded).unwrap(), b"sigil");
//! ```

use base64::{Engine, engine::general_purpose::STANDARD};

/// Errors that can occur while decoding a token segment.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// The input is not valid unpadded URL-safe base64.
    #[error("Malformed encoding: {message}")]
    MalformedEncoding {
        /// Description of why the input is undecodable.
        message: String,
    },
}

impl EncodingError {
    /// Creates a new `MalformedEncoding` error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedEncoding {
            message: message.into(),
        }
    }
}

/// Encodes a byte sequence as unpadded URL-safe base64.
///
/// Total, pure function: every byte sequence (including the empty one) has
/// an encoding.
#[must_use]
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    STANDARD
        .encode(bytes.as_ref())
        .replace('+', "-")
        .replace('/', "_")
        .trim_end_matches('=')
        .to_string()
}

/// Decodes an unpadded URL-safe base64 string back into bytes.
///
/// Restores the standard alphabet (`-` to `+`, `_` to `/`) and recomputes
/// the exact `=` padding from `len % 4` before decoding. A remainder of 1
/// is impossible for any valid encoding and is rejected without attempting
/// a decode.
///
/// # Errors
///
/// Returns [`EncodingError::MalformedEncoding`] if the input is not a valid
/// encoding of any byte sequence.
pub fn decode(input: &str) -> Result<Vec<u8>, EncodingError> {
    let restored = input.replace('-', "+").replace('_', "/");

    let padding = match restored.len() % 4 {
        0 => 0,
        2 => 2,
        3 => 1,
        // A block of 1 base64 character encodes fewer than 8 bits.
        _ => {
            return Err(EncodingError::malformed(format!(
                "length {} is not a possible base64 length",
                input.len()
            )));
        }
    };

    let padded = format!("{}{}", restored, "=".repeat(padding));
    STANDARD
        .decode(&padded)
        .map_err(|e| EncodingError::malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "Zg");
        assert_eq!(encode(b"fo"), "Zm8");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b"foob"), "Zm9vYg");
        assert_eq!(encode(b"fooba"), "Zm9vYmE");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_encode_uses_url_safe_alphabet() {
        // 0xfb 0xff encodes to "+/8=" in standard base64.
        let encoded = encode([0xfb, 0xff]);
        assert_eq!(encoded, "-_8");
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
    }

    #[test]
    fn test_round_trip_all_length_residues() {
        // One input for each value of len % 3, plus empty.
        let inputs: [&[u8]; 4] = [b"", b"abc", b"a", b"ab"];
        for input in inputs {
            let decoded = decode(&encode(input)).unwrap();
            assert_eq!(decoded, input);
        }
    }

    #[test]
    fn test_round_trip_all_byte_values() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_decode_restores_padding() {
        // len % 4 == 2 needs two '=', len % 4 == 3 needs one.
        assert_eq!(decode("Zg").unwrap(), b"f");
        assert_eq!(decode("Zm8").unwrap(), b"fo");
        assert_eq!(decode("Zm9v").unwrap(), b"foo");
    }

    #[test]
    fn test_decode_rejects_impossible_length() {
        // len % 4 == 1 cannot be produced by any encoding.
        let result = decode("Z");
        assert!(matches!(
            result.unwrap_err(),
            EncodingError::MalformedEncoding { .. }
        ));

        let result = decode("Zm9vY");
        assert!(matches!(
            result.unwrap_err(),
            EncodingError::MalformedEncoding { .. }
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_characters() {
        let result = decode("not base64!");
        assert!(matches!(
            result.unwrap_err(),
            EncodingError::MalformedEncoding { .. }
        ));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }
}
