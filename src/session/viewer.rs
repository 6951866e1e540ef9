//! Viewer Session
//!
//! Read-only code view. Its filename already carries the extension.

use url::Url;

use super::{toasts, SessionError};
use crate::document::EditableDocument;
use crate::ports::{ClipboardWriter, FileDownloader, Notifier};

#[derive(Debug)]
pub struct ViewerSession<C, D, N> {
    document: EditableDocument,
    page_url: Url,
    clipboard: C,
    downloader: D,
    notifier: N,
}

impl<C, D, N> ViewerSession<C, D, N>
where
    C: ClipboardWriter,
    D: FileDownloader,
    N: Notifier,
{
    pub fn new(
        document: EditableDocument,
        page_url: Url,
        clipboard: C,
        downloader: D,
        notifier: N,
    ) -> Self {
        Self {
            document,
            page_url,
            clipboard,
            downloader,
            notifier,
        }
    }

    pub fn document(&self) -> &EditableDocument {
        &self.document
    }

    pub fn copy(&mut self) -> Result<(), SessionError> {
        self.clipboard.write(&self.document.content)?;
        self.notifier.notify(toasts::copied());
        Ok(())
    }

    pub fn download(&mut self) -> Result<(), SessionError> {
        self.downloader
            .save(self.document.content.as_bytes(), &self.document.filename)?;
        self.notifier.notify(toasts::downloaded(&self.document.filename));
        Ok(())
    }

    /// Copy the current page URL as-is
    pub fn share(&mut self) -> Result<(), SessionError> {
        self.clipboard.write(self.page_url.as_str())?;
        self.notifier.notify(toasts::link_copied());
        Ok(())
    }
}
