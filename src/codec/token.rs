//! Token Transform
//!
//! Content <-> token: UTF-8 bytes, standard padded base64, then
//! `encodeURIComponent`-style percent-encoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::error::{DecodingError, EncodingError};

/// Encode document content into a URL query-safe token
pub fn encode_token(content: &str) -> String {
    let encoded = STANDARD.encode(content.as_bytes());
    let token = urlencoding::encode(&encoded).into_owned();
    log::debug!(
        "encoded {} content bytes into {} token bytes",
        content.len(),
        token.len()
    );
    token
}

/// Encode editor text held as UTF-16 code units
///
/// Fails on the first unpaired surrogate; well-formed input produces the
/// same token as [`encode_token`] on the equivalent `str`.
pub fn encode_utf16(units: &[u16]) -> Result<String, EncodingError> {
    let content = utf16_to_string(units)?;
    Ok(encode_token(&content))
}

/// Decode a token back into document content
pub fn decode_token(token: &str) -> Result<String, DecodingError> {
    let unescaped = urlencoding::decode(token).map_err(DecodingError::Percent)?;
    let bytes = STANDARD.decode(unescaped.as_bytes())?;
    let content = String::from_utf8(bytes).map_err(DecodingError::Utf8)?;
    log::debug!(
        "decoded {} token bytes into {} content bytes",
        token.len(),
        content.len()
    );
    Ok(content)
}

fn utf16_to_string(units: &[u16]) -> Result<String, EncodingError> {
    let mut content = String::with_capacity(units.len());
    let mut index = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                index += c.len_utf16();
                content.push(c);
            }
            Err(e) => {
                return Err(EncodingError::LoneSurrogate {
                    index,
                    unit: e.unpaired_surrogate(),
                });
            }
        }
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_token_value() {
        // "hi?" -> "aGk/" -> slash escaped
        assert_eq!(encode_token("hi?"), "aGk%2F");
        assert_eq!(encode_token("hello"), "aGVsbG8%3D");
    }

    #[test]
    fn test_plus_is_escaped() {
        // "~~~" -> "fn5+"
        let token = encode_token("~~~");
        assert_eq!(token, "fn5%2B");
        assert_eq!(decode_token(&token).unwrap(), "~~~");
    }

    #[test]
    fn test_multibyte_round_trip() {
        let content = "héllo 👋";
        let token = encode_token(content);
        assert_eq!(decode_token(&token).unwrap(), content);
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(encode_token(""), "");
        assert_eq!(decode_token("").unwrap(), "");
    }

    #[test]
    fn test_reencode_is_stable() {
        let content = "fn main() {\n    println!(\"{}\", 1 + 2);\n}\n";
        let first = encode_token(content);
        let decoded = decode_token(&first).unwrap();
        assert_eq!(encode_token(&decoded), first);
    }

    #[test]
    fn test_unescaped_token_also_decodes() {
        assert_eq!(decode_token("aGVsbG8=").unwrap(), "hello");
    }

    #[test]
    fn test_bad_padding_is_error() {
        assert!(matches!(
            decode_token("aGVsbG8"),
            Err(DecodingError::Base64(_))
        ));
        assert!(matches!(
            decode_token("aGVsbG8=="),
            Err(DecodingError::Base64(_))
        ));
    }

    #[test]
    fn test_percent_signs_are_error() {
        // %25%25%25 -> "%%%", not base64
        assert!(matches!(
            decode_token("%25%25%25"),
            Err(DecodingError::Base64(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_payload() {
        // "//4=" -> 0xFF 0xFF
        assert!(matches!(decode_token("%2F%2F4%3D"), Err(DecodingError::Utf8(_))));
    }

    #[test]
    fn test_invalid_percent_utf8() {
        assert!(matches!(decode_token("%FF"), Err(DecodingError::Percent(_))));
    }

    #[test]
    fn test_utf16_input() {
        let units: Vec<u16> = "héllo 👋".encode_utf16().collect();
        assert_eq!(encode_utf16(&units).unwrap(), encode_token("héllo 👋"));
    }

    #[test]
    fn test_lone_surrogate() {
        let units = [0x0061, 0x0062, 0xD83D, 0x0063];
        assert_eq!(
            encode_utf16(&units),
            Err(EncodingError::LoneSurrogate {
                index: 2,
                unit: 0xD83D
            })
        );
    }
}
