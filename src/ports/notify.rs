//! Log Notifications

use super::{Notifier, Toast};

/// Forwards toasts to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, toast: Toast) {
        if toast.is_destructive() {
            log::error!("{}: {}", toast.title, toast.description);
        } else {
            log::info!("{}: {}", toast.title, toast.description);
        }
    }
}
