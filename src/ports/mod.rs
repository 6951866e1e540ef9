//! Side-Effect Ports
//!
//! Clipboard, download and notification capabilities injected into the
//! page sessions, keeping the codec itself free of I/O.

pub mod clipboard;
pub mod download;
pub mod notify;

pub use clipboard::WriterClipboard;
pub use download::DirectoryDownloader;
pub use notify::LogNotifier;

/// Failure of a side-effecting port
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid download filename '{0}'")]
    InvalidFilename(String),
}

/// Destination for copied text
pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> Result<(), PortError>;
}

/// Destination for downloaded files
pub trait FileDownloader {
    fn save(&mut self, bytes: &[u8], filename: &str) -> Result<(), PortError>;
}

/// Toast surface
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// Short title/description notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

impl<T: ClipboardWriter + ?Sized> ClipboardWriter for &mut T {
    fn write(&mut self, text: &str) -> Result<(), PortError> {
        (**self).write(text)
    }
}

impl<T: FileDownloader + ?Sized> FileDownloader for &mut T {
    fn save(&mut self, bytes: &[u8], filename: &str) -> Result<(), PortError> {
        (**self).save(bytes, filename)
    }
}

impl<T: Notifier + ?Sized> Notifier for &mut T {
    fn notify(&mut self, toast: Toast) {
        (**self).notify(toast)
    }
}
