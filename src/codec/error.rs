//! Codec Errors

use std::string::FromUtf8Error;

/// Content could not be turned into a shareable token or URL
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// UTF-16 input contained an unpaired surrogate
    #[error("unpaired surrogate 0x{unit:04X} at code unit {index}")]
    LoneSurrogate { index: usize, unit: u16 },

    /// The page URL cannot carry a share link
    #[error("cannot build a share link on a '{0}' URL")]
    UnsupportedBase(String),
}

/// A token could not be turned back into content
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodingError {
    #[error("percent-decoded token is not valid UTF-8: {0}")]
    Percent(#[source] FromUtf8Error),

    #[error("token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded content is not valid UTF-8: {0}")]
    Utf8(#[source] FromUtf8Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
