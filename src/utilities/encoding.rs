// src/utilities/encoding.rs
//
// Base64 helpers for embedding arbitrary byte sequences in text.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::EaselError;

/// Encode an arbitrary byte sequence as standard base64.
pub fn encode_base64(input: impl AsRef<[u8]>) -> String {
    STANDARD.encode(input)
}

/// Decode a standard base64 string back into bytes.
pub fn decode_base64(input: impl AsRef<[u8]>) -> Result<Vec<u8>, EaselError> {
    Ok(STANDARD.decode(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_vector() {
        assert_eq!(encode_base64("hello world"), "aGVsbG8gd29ybGQ=");
        assert_eq!(encode_base64([]), "");
    }

    #[test]
    fn round_trips_arbitrary_bytes() {
        let bytes: Vec<u8> = (0..=255).collect();
        let encoded = encode_base64(&bytes);
        assert_eq!(decode_base64(encoded).unwrap(), bytes);
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(decode_base64("not valid base64!!!").is_err());
    }
}
