//! Editable Document
//!
//! The in-memory text, language tag and filename loaded into the editor.

use serde::{Deserialize, Serialize};

use super::language::Language;

/// Built-in content shown when no shared code is supplied
pub const DEFAULT_CONTENT: &str = r#"// Welcome to SourceShare Editor!
// Start writing your code here...

function fibonacci(n: number): number {
  if (n <= 1) return n;
  return fibonacci(n - 1) + fibonacci(n - 2);
}

// Calculate first 10 Fibonacci numbers
const results = Array.from({ length: 10 }, (_, i) => fibonacci(i));
console.log("Fibonacci sequence:", results);

// Try sharing this code with a single click! ✨
"#;

pub const DEFAULT_FILENAME: &str = "fibonacci";

/// Public/private switch of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn toggle(self) -> Self {
        match self {
            Visibility::Public => Visibility::Private,
            Visibility::Private => Visibility::Public,
        }
    }
}

/// Document held by the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableDocument {
    pub content: String,
    pub language: Language,
    /// Base name without extension
    pub filename: String,
    #[serde(default)]
    pub visibility: Visibility,
}

impl Default for EditableDocument {
    fn default() -> Self {
        Self {
            content: DEFAULT_CONTENT.to_string(),
            language: Language::default(),
            filename: DEFAULT_FILENAME.to_string(),
            visibility: Visibility::default(),
        }
    }
}

impl EditableDocument {
    pub fn new(content: impl Into<String>, language: Language, filename: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            language,
            filename: filename.into(),
            visibility: Visibility::default(),
        }
    }

    /// Default document with its content replaced
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// `<filename><extension>` used for downloads
    pub fn download_name(&self) -> String {
        format!("{}{}", self.filename, self.language.extension())
    }
}
