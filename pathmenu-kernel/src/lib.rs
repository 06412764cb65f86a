//! Pathmenu Kernel - The context-action resolver.
//!
//! Given a located filesystem entry, this crate decides which follow-up
//! actions apply and performs the one the user picks:
//! - Classifier (lexical file/folder detection, marker files)
//! - Eligibility rules (elevation, buildable projects, containing folder)
//! - Catalog (fixed, ordered action list)
//! - Executor (clipboard, process launch, reveal-in-folder, console)
//!
//! Resolution is synchronous and cheap. Elevated launches and IDE launches
//! are handed to a dispatcher and never awaited.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod dispatch;
pub mod executor;
pub mod host;
pub mod platform;
pub mod probe;
pub mod rules;

mod error;

#[cfg(test)]
mod test_utils;

pub use catalog::build_actions;
pub use classifier::{classify, extension_of, has_marker_file};
pub use config::{Config, Environment, SystemEnvironment};
pub use dispatch::{Dispatch, InlineDispatcher, TokioDispatcher};
pub use error::{ActionError, Result};
pub use executor::{Executor, Visibility};
pub use host::{ErrorLog, Host, Notifier, TracingErrorLog};
pub use platform::{LaunchRequest, Platform, SystemPlatform};
pub use probe::{MarkerProbe, RealProbe};

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;

use pathmenu_api::{Action, ActionKind, Entry};

/// The resolver - builds action lists and executes the chosen one.
///
/// Holds no mutable state: resolving the same entry twice yields the same
/// list, and concurrent calls never interact.
#[derive(Clone)]
pub struct Resolver {
    executor: Executor,
    probe: Arc<dyn MarkerProbe>,
}

impl Resolver {
    pub fn new(
        config: Config,
        host: Host,
        platform: Arc<dyn Platform>,
        dispatcher: Arc<dyn Dispatch>,
        env: Arc<dyn Environment>,
        probe: Arc<dyn MarkerProbe>,
    ) -> Self {
        let executor = Executor::new(
            Arc::new(config),
            host,
            platform,
            dispatcher,
            env,
            probe.clone(),
        );
        Self { executor, probe }
    }

    /// Resolver wired to the real OS, configured from the environment.
    pub fn system(host: Host, dispatcher: Arc<dyn Dispatch>) -> Self {
        let env = SystemEnvironment;
        Self::new(
            Config::from_env(&env),
            host,
            Arc::new(SystemPlatform),
            dispatcher,
            Arc::new(env),
            Arc::new(RealProbe),
        )
    }

    /// Ordered actions for `entry`. The host's single entry point.
    pub fn resolve_actions(&self, entry: &Entry) -> Vec<Action> {
        build_actions(entry, self.probe.as_ref())
    }

    /// Classify `path`, then resolve.
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> Vec<Action> {
        self.resolve_actions(&classify(path))
    }

    /// Execute one action. Never panics; false means it failed and was reported.
    pub fn execute(&self, action: &Action) -> bool {
        self.execute_kind(action.kind, &action.entry)
    }

    /// Execute `kind` against `entry`, isolating any panic in the side effect.
    pub fn execute_kind(&self, kind: ActionKind, entry: &Entry) -> bool {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.executor.execute(kind, entry)));
        outcome.unwrap_or_else(|payload| {
            let reason = panic_message(payload.as_ref());
            tracing::error!(action = %kind, path = %entry.full_path().display(), %reason, "action panicked");
            false
        })
    }

    /// Run a one-shot command line through the command shell. Never panics.
    pub fn run_command(&self, command_line: &str, work_dir: Option<&Path>) -> bool {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.executor.run_command(command_line, work_dir)
        }));
        outcome.unwrap_or_else(|payload| {
            let reason = panic_message(payload.as_ref());
            tracing::error!(command = command_line, %reason, "command panicked");
            false
        })
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("executor", &self.executor)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::TestRig;

    #[test]
    fn test_resolve_path_classifies() {
        let rig = TestRig::new();
        let actions = rig.resolver().resolve_path("/opt/app/run.bat");
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[1].kind, ActionKind::RunAsAdmin);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let rig = TestRig::new().with_files(["/src/app/pom.xml"]);
        let resolver = rig.resolver();
        let entry = classify("/src/app");
        assert_eq!(resolver.resolve_actions(&entry), resolver.resolve_actions(&entry));
    }

    #[test]
    fn test_execute_reports_failure_as_false() {
        let rig = TestRig::new();
        rig.platform.fail_clipboard("no display");
        let resolver = rig.resolver();
        let actions = resolver.resolve_path("/tmp/notes.txt");
        let copy = actions
            .iter()
            .find(|a| a.kind == ActionKind::CopyPath)
            .unwrap();
        assert!(!resolver.execute(copy));
        assert_eq!(rig.notifier.messages().len(), 1);
        assert_eq!(rig.log.records().len(), 1);
    }

    #[test]
    fn test_panic_message_variants() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(boxed.as_ref()), "boom");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(boxed.as_ref()), "bang");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(boxed.as_ref()), "unknown panic");
    }
}
