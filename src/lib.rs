//! SourceShare
//!
//! Shareable code links: editor content travels inside the `code` query
//! parameter of a URL as percent-encoded base64.
//!
//! This library provides:
//! - The link codec (token transform and share URL handling)
//! - Editor document state and the supported language set
//! - Clipboard, download and notification ports
//! - Editor and viewer page sessions
//! - Configuration management

pub mod codec;
pub mod config;
pub mod document;
pub mod ports;
pub mod session;

// Re-exports for clean public API
pub use codec::{decode_token, encode_token, share_url, DecodingError, EncodingError};
pub use config::Config;
pub use document::{EditableDocument, Language};
pub use session::{EditorSession, SessionError, ViewerSession};
