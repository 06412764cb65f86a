//! Outbound collaborators owned by the host application.

use std::error::Error;
use std::sync::Arc;

/// Shows a short message to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Records a failure, whether or not the user is told about it.
pub trait ErrorLog: Send + Sync {
    fn log_error(&self, message: &str, error: &dyn Error, origin: &'static str);
}

/// Error log that forwards to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorLog;

impl ErrorLog for TracingErrorLog {
    fn log_error(&self, message: &str, error: &dyn Error, origin: &'static str) {
        tracing::error!(origin, error = %error, "{message}");
    }
}

/// Notifier for headless hosts: messages only reach the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(target: "pathmenu::notify", "{message}");
    }
}

/// The pair of collaborators every executor call reports through.
///
/// Cheap to clone so background jobs can carry their own copy.
#[derive(Clone)]
pub struct Host {
    notifier: Arc<dyn Notifier>,
    log: Arc<dyn ErrorLog>,
}

impl Host {
    pub fn new(notifier: Arc<dyn Notifier>, log: Arc<dyn ErrorLog>) -> Self {
        Self { notifier, log }
    }

    /// Host that reports only through `tracing`.
    pub fn headless() -> Self {
        Self::new(Arc::new(LogNotifier), Arc::new(TracingErrorLog))
    }

    pub fn notify(&self, message: &str) {
        self.notifier.notify(message);
    }

    pub fn log_error(&self, message: &str, error: &dyn Error, origin: &'static str) {
        self.log.log_error(message, error, origin);
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}
