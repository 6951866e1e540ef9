//! Share Links
//!
//! Embedding tokens into page URLs and pulling them back out.

use url::Url;

use super::error::{DecodingError, EncodingError};
use super::token::{decode_token, encode_token, encode_utf16};

/// Query parameter carrying the shared code
pub const CODE_PARAM: &str = "code";

/// Build a share URL for `content` on top of the current page URL
///
/// Origin and path are kept; an existing query or fragment is replaced.
pub fn share_url(base: &Url, content: &str) -> Result<Url, EncodingError> {
    check_base(base)?;
    Ok(with_token(base, &encode_token(content)))
}

/// Same as [`share_url`] for UTF-16 editor text
pub fn share_url_utf16(base: &Url, units: &[u16]) -> Result<Url, EncodingError> {
    check_base(base)?;
    let token = encode_utf16(units)?;
    Ok(with_token(base, &token))
}

/// Raw (still percent-encoded) value of the first `code` parameter
pub fn extract_token(url: &Url) -> Option<&str> {
    url.query()?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == CODE_PARAM).then_some(value)
    })
}

/// Decode the shared content of a URL, `None` when it carries no link
pub fn decode_url(url: &Url) -> Option<Result<String, DecodingError>> {
    extract_token(url).map(decode_token)
}

/// Parse a textual page URL
pub fn parse_url(input: &str) -> Result<Url, DecodingError> {
    Ok(Url::parse(input.trim())?)
}

fn check_base(base: &Url) -> Result<(), EncodingError> {
    match base.scheme() {
        "http" | "https" => Ok(()),
        other => Err(EncodingError::UnsupportedBase(other.to_string())),
    }
}

fn with_token(base: &Url, token: &str) -> Url {
    let mut url = base.clone();
    url.set_query(Some(&format!("{CODE_PARAM}={token}")));
    url.set_fragment(None);
    url
}
