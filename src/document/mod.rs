//! Documents
//!
//! Editor document state and the supported language set.

pub mod editable;
pub mod language;

pub use editable::{EditableDocument, Visibility, DEFAULT_CONTENT, DEFAULT_FILENAME};
pub use language::Language;
