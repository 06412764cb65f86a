//! User-facing notifications for the command-line host.

use pathmenu_kernel::Notifier;

/// Messages go to stderr, next to the log.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("pathmenu: {message}");
    }
}
