//! Fire-and-forget submission of background work.
//!
//! Submitters never get a handle back. Nothing about ordering or completion
//! relative to the submitter's return may be assumed.

use tokio::runtime::{Builder, Handle, Runtime};

/// A unit of background work.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

pub trait Dispatch: Send + Sync {
    fn submit(&self, job: Job);
}

/// Runs jobs on tokio's blocking pool.
pub struct TokioDispatcher {
    handle: Handle,
    runtime: Option<Runtime>,
}

impl TokioDispatcher {
    /// Dispatch onto an existing runtime.
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            runtime: None,
        }
    }

    /// Dispatch onto the runtime of the calling context, if any.
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }

    /// Own a small dedicated runtime, for hosts that do not run tokio.
    pub fn new_runtime() -> std::io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .max_blocking_threads(4)
            .thread_name("pathmenu-dispatch")
            .enable_all()
            .build()?;
        Ok(Self {
            handle: runtime.handle().clone(),
            runtime: Some(runtime),
        })
    }
}

impl Dispatch for TokioDispatcher {
    fn submit(&self, job: Job) {
        // Detached: nobody waits on dispatched work.
        drop(self.handle.spawn_blocking(job));
    }
}

impl Drop for TokioDispatcher {
    fn drop(&mut self) {
        // Dropping a runtime from async context panics; detach instead.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl std::fmt::Debug for TokioDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioDispatcher")
            .field("owns_runtime", &self.runtime.is_some())
            .finish()
    }
}

/// Runs each job immediately on the submitting thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineDispatcher;

impl Dispatch for InlineDispatcher {
    fn submit(&self, job: Job) {
        job();
    }
}
