//! Page Sessions
//!
//! Editor and viewer actions wired to the link codec and the side-effect
//! ports. Each session belongs to exactly one page view.

pub mod editor;
pub mod viewer;

pub use editor::{EditorSession, LinkLoad};
pub use viewer::ViewerSession;

use crate::codec::EncodingError;
use crate::ports::PortError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to build share link: {0}")]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Port(#[from] PortError),
}

pub(crate) mod toasts {
    use crate::ports::Toast;

    pub fn copied() -> Toast {
        Toast::new("Copied!", "Code copied to clipboard")
    }

    pub fn downloaded(name: &str) -> Toast {
        Toast::new("Downloaded!", format!("{name} saved"))
    }

    pub fn link_copied() -> Toast {
        Toast::new("Link Copied!", "Share link copied to clipboard")
    }

    pub fn share_failed() -> Toast {
        Toast::destructive("Share Failed", "Unable to share code due to encoding error")
    }

    pub fn saved() -> Toast {
        Toast::new("Saved!", "Your code has been saved")
    }

    pub fn invalid_link() -> Toast {
        Toast::destructive("Invalid Link", "Shared code could not be decoded")
    }
}
