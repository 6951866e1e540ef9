//! Editor Session
//!
//! State and actions of the code editor page.

use url::Url;

use super::{toasts, SessionError};
use crate::codec::{self, DecodingError};
use crate::document::{EditableDocument, Language, Visibility};
use crate::ports::{ClipboardWriter, FileDownloader, Notifier};

/// What the page load found in the `code` parameter
#[derive(Debug, Clone, PartialEq)]
pub enum LinkLoad {
    /// No parameter or an empty one, default document
    Missing,
    /// Shared content was restored
    Decoded,
    /// Parameter present but undecodable, default document
    Invalid(DecodingError),
}

/// One open editor page
#[derive(Debug)]
pub struct EditorSession<C, D, N> {
    document: EditableDocument,
    page_url: Url,
    load: LinkLoad,
    clipboard: C,
    downloader: D,
    notifier: N,
}

impl<C, D, N> EditorSession<C, D, N>
where
    C: ClipboardWriter,
    D: FileDownloader,
    N: Notifier,
{
    /// Load the editor page at `page_url`
    ///
    /// This is the only point where a share link is decoded. An empty
    /// `code` value counts as no link at all.
    pub fn open(page_url: Url, clipboard: C, downloader: D, mut notifier: N) -> Self {
        let token = codec::extract_token(&page_url).filter(|token| !token.is_empty());
        let (document, load) = match token.map(codec::decode_token) {
            None => (EditableDocument::default(), LinkLoad::Missing),
            Some(Ok(content)) => {
                log::info!("Loaded {} bytes of shared code", content.len());
                (EditableDocument::with_content(content), LinkLoad::Decoded)
            }
            Some(Err(e)) => {
                log::warn!("Failed to decode code from URL: {}", e);
                notifier.notify(toasts::invalid_link());
                (EditableDocument::default(), LinkLoad::Invalid(e))
            }
        };

        Self {
            document,
            page_url,
            load,
            clipboard,
            downloader,
            notifier,
        }
    }

    pub fn document(&self) -> &EditableDocument {
        &self.document
    }

    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    pub fn load(&self) -> &LinkLoad {
        &self.load
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.document.content = content.into();
    }

    pub fn set_language(&mut self, language: Language) {
        self.document.language = language;
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.document.filename = filename.into();
    }

    pub fn toggle_visibility(&mut self) -> Visibility {
        self.document.visibility = self.document.visibility.toggle();
        self.document.visibility
    }

    /// Copy the raw content to the clipboard
    pub fn copy(&mut self) -> Result<(), SessionError> {
        self.clipboard.write(&self.document.content)?;
        self.notifier.notify(toasts::copied());
        Ok(())
    }

    /// Save the content as `<filename><extension>`
    pub fn download(&mut self) -> Result<String, SessionError> {
        let name = self.document.download_name();
        self.downloader
            .save(self.document.content.as_bytes(), &name)?;
        self.notifier.notify(toasts::downloaded(&name));
        Ok(name)
    }

    /// Copy a share link for the current content to the clipboard
    pub fn share(&mut self) -> Result<Url, SessionError> {
        let url = match codec::share_url(&self.page_url, &self.document.content) {
            Ok(url) => url,
            Err(e) => {
                log::error!("Failed to encode code for sharing: {}", e);
                self.notifier.notify(toasts::share_failed());
                return Err(e.into());
            }
        };
        self.clipboard.write(url.as_str())?;
        self.notifier.notify(toasts::link_copied());
        Ok(url)
    }

    /// Acknowledge a save; there is no storage behind it
    pub fn save(&mut self) {
        self.notifier.notify(toasts::saved());
    }

    pub fn into_document(self) -> EditableDocument {
        self.document
    }
}
