//! Binary/base64url transcoding for ceremony fields
//!
//! The backend transports every binary `WebAuthn` field as base64url text
//! (RFC 4648 §5, padding stripped); the platform credential subsystem wants
//! raw byte buffers. This module is the single conversion point between the
//! two representations.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::errors::PasskeyError;

/// Decode a base64url-encoded challenge or credential id into raw bytes
///
/// The backend strips padding before transmission, so padded input is
/// rejected along with the standard-base64 alphabet (`+`, `/`); a field in
/// either shape indicates a protocol mismatch and is never silently coerced.
///
/// # Errors
/// Returns `PasskeyError::Encoding` if the input is not valid unpadded
/// base64url.
pub fn decode_challenge(value: &str) -> Result<Vec<u8>, PasskeyError> {
    URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|e| PasskeyError::Encoding(format!("invalid base64url field: {e}")))
}

/// Encode raw bytes as padding-free base64url text
///
/// The output alphabet is `A-Za-z0-9-_`; `+`, `/`, and `=` never appear.
#[must_use]
pub fn encode_to_base64url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Canonicalize an ordered sequence of numeric byte values into a buffer
///
/// Embedding applications occasionally hand credential material around as
/// plain number sequences (e.g. decoded from JSON arrays); every value must
/// fit in a single byte, with no truncation or sign extension.
///
/// # Errors
/// Returns `PasskeyError::Encoding` if any value falls outside `0..=255`.
pub fn buffer_from_values(values: &[u64]) -> Result<Vec<u8>, PasskeyError> {
    values
        .iter()
        .map(|&value| {
            u8::try_from(value).map_err(|_| {
                PasskeyError::Encoding(format!("value {value} does not fit in a byte"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_lengths() {
        for len in 0..=64usize {
            let bytes: Vec<u8> = (0..len).map(|i| u8::try_from(i * 37 % 256).unwrap()).collect();
            let encoded = encode_to_base64url(&bytes);
            let decoded = decode_challenge(&encoded).unwrap();
            assert_eq!(decoded, bytes, "round trip failed for length {len}");
        }
    }

    #[test]
    fn test_known_vector() {
        // "AQID" is the base64url form of [1, 2, 3]
        assert_eq!(decode_challenge("AQID").unwrap(), vec![1, 2, 3]);
        assert_eq!(encode_to_base64url(&[1, 2, 3]), "AQID");
    }

    #[test]
    fn test_encoding_uses_url_safe_alphabet() {
        let bytes: Vec<u8> = (0..=255).collect();
        let encoded = encode_to_base64url(&bytes);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
        assert!(encoded.contains('-') || encoded.contains('_'));
    }

    #[test]
    fn test_decoding_rejects_standard_alphabet() {
        // "++" and "//" are valid standard base64 but not base64url
        assert!(decode_challenge("+/").is_err());
        assert!(decode_challenge("ab+c").is_err());
        assert!(decode_challenge("ab/c").is_err());
    }

    #[test]
    fn test_decoding_rejects_padding() {
        assert!(decode_challenge("AQ==").is_err());
    }

    #[test]
    fn test_decoding_accepts_url_safe_characters() {
        // 0xfb 0xff decodes only under the url-safe alphabet
        assert!(decode_challenge("-_8").is_ok());
    }

    #[test]
    fn test_decode_error_kind() {
        let err = decode_challenge("not valid!").unwrap_err();
        assert!(matches!(err, PasskeyError::Encoding(_)));
    }

    #[test]
    fn test_buffer_from_values() {
        assert_eq!(buffer_from_values(&[0, 127, 255]).unwrap(), vec![0, 127, 255]);
        assert_eq!(buffer_from_values(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_buffer_from_values_rejects_out_of_range() {
        let err = buffer_from_values(&[1, 256, 3]).unwrap_err();
        assert!(matches!(err, PasskeyError::Encoding(_)));
    }

    #[test]
    fn test_empty_round_trip() {
        assert_eq!(encode_to_base64url(&[]), "");
        assert_eq!(decode_challenge("").unwrap(), Vec::<u8>::new());
    }
}
