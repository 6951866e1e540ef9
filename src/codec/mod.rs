//! Link Codec
//!
//! Stateless transform between document content and shareable links.

pub mod error;
pub mod link;
pub mod token;

pub use error::{DecodingError, EncodingError};
pub use link::{decode_url, extract_token, parse_url, share_url, share_url_utf16, CODE_PARAM};
pub use token::{decode_token, encode_token, encode_utf16};
