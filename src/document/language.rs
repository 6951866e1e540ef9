//! Supported Languages
//!
//! The fixed set of language tags the editor can highlight and download as.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language tag of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    #[default]
    TypeScript,
    Python,
    Java,
    Html,
    Css,
    Json,
    Markdown,
    Sql,
    Go,
    Rust,
    Cpp,
}

impl Language {
    /// All supported languages in menu order
    pub const ALL: [Language; 12] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
        Language::Java,
        Language::Html,
        Language::Css,
        Language::Json,
        Language::Markdown,
        Language::Sql,
        Language::Go,
        Language::Rust,
        Language::Cpp,
    ];

    /// Editor language id (e.g. `typescript`)
    pub fn id(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::Sql => "sql",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Cpp => "cpp",
        }
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Json => "JSON",
            Language::Markdown => "Markdown",
            Language::Sql => "SQL",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Cpp => "C++",
        }
    }

    /// Download extension, including the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            Language::JavaScript => ".js",
            Language::TypeScript => ".ts",
            Language::Python => ".py",
            Language::Java => ".java",
            Language::Html => ".html",
            Language::Css => ".css",
            Language::Json => ".json",
            Language::Markdown => ".md",
            Language::Sql => ".sql",
            Language::Go => ".go",
            Language::Rust => ".rs",
            Language::Cpp => ".cpp",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.id() == id)
    }

    /// Look up by id, falling back to the default language
    pub fn from_id_or_default(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            log::debug!("unknown language id '{}', using {}", id, Self::default().id());
            Self::default()
        })
    }

    /// Look up by file extension, with or without the leading dot
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        Self::ALL
            .into_iter()
            .find(|lang| lang.extension()[1..].eq_ignore_ascii_case(ext))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
