//! Action execution: one dispatch function over `ActionKind`.
//!
//! Every side effect is wrapped so failures come back as `false` plus a log
//! record. Clipboard and reveal-in-folder failures are also shown to the
//! user; the background and console actions only log.

mod requests;

pub use requests::{ide_command_line, Quoting};

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pathmenu_api::{ActionKind, Entry};

use crate::config::{Config, Environment};
use crate::dispatch::Dispatch;
use crate::error::{ActionError, Result};
use crate::host::Host;
use crate::platform::Platform;
use crate::probe::MarkerProbe;

const ORIGIN: &str = module_path!();

/// Who gets told when an action fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Notify the user and log.
    User,
    /// Log only.
    LogOnly,
}

/// Failure visibility for each action kind.
pub fn visibility(kind: ActionKind) -> Visibility {
    match kind {
        ActionKind::OpenContainingFolder | ActionKind::CopyPath => Visibility::User,
        ActionKind::RunAsAdmin | ActionKind::OpenInIde | ActionKind::OpenInConsole => {
            Visibility::LogOnly
        }
    }
}

/// Performs side effects against the platform, reporting through the host.
#[derive(Clone)]
pub struct Executor {
    effects: Effects,
    dispatcher: Arc<dyn Dispatch>,
}

/// The parts of an executor a background job carries with it.
///
/// Never holds the dispatcher: a job must not keep its own worker pool alive.
#[derive(Clone)]
struct Effects {
    config: Arc<Config>,
    host: Host,
    platform: Arc<dyn Platform>,
    env: Arc<dyn Environment>,
    probe: Arc<dyn MarkerProbe>,
}

impl Executor {
    pub fn new(
        config: Arc<Config>,
        host: Host,
        platform: Arc<dyn Platform>,
        dispatcher: Arc<dyn Dispatch>,
        env: Arc<dyn Environment>,
        probe: Arc<dyn MarkerProbe>,
    ) -> Self {
        Self {
            effects: Effects {
                config,
                host,
                platform,
                env,
                probe,
            },
            dispatcher,
        }
    }

    pub fn config(&self) -> &Config {
        &self.effects.config
    }

    /// Run the side effect for `kind` against `entry`. True on success.
    pub fn execute(&self, kind: ActionKind, entry: &Entry) -> bool {
        let path = entry.full_path();
        let result = match kind {
            ActionKind::OpenContainingFolder => self.reveal_in_folder(path),
            ActionKind::RunAsAdmin => self.elevate_run(path),
            ActionKind::OpenInIde => self.launch_in_ide(path),
            ActionKind::CopyPath => self.copy_to_clipboard(&path.to_string_lossy()),
            ActionKind::OpenInConsole => self.open_console_at(entry),
        };

        match result {
            Ok(()) => {
                tracing::info!(action = %kind, path = %path.display(), "action executed");
                true
            }
            Err(e) => {
                self.effects
                    .report(visibility(kind), &failure_message(kind, path), &e);
                false
            }
        }
    }

    /// Open a file manager with `path` selected.
    pub fn reveal_in_folder(&self, path: &Path) -> Result<()> {
        self.effects
            .platform
            .spawn(&requests::reveal(path))
            .map_err(|source| ActionError::ShellRequestFailed {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Dispatch an elevated launch of `path` and return immediately.
    ///
    /// Launch failures happen on the worker and are logged there.
    pub fn elevate_run(&self, path: &Path) -> Result<()> {
        let effects = self.effects.clone();
        let path = path.to_path_buf();
        self.dispatcher.submit(Box::new(move || effects.elevate_now(&path)));
        Ok(())
    }

    /// Dispatch the IDE launch for `path` and return immediately.
    pub fn launch_in_ide(&self, path: &Path) -> Result<()> {
        let effects = self.effects.clone();
        let path = path.to_path_buf();
        self.dispatcher.submit(Box::new(move || effects.ide_now(&path)));
        Ok(())
    }

    /// Put `text` on the system clipboard.
    pub fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        self.effects
            .platform
            .set_clipboard(text)
            .map_err(ActionError::ClipboardUnavailable)
    }

    /// Start an interactive console in the entry's directory.
    pub fn open_console_at(&self, entry: &Entry) -> Result<()> {
        let dir = console_dir(entry)?;
        let request = requests::console(&self.effects.config.console, &dir);
        self.effects
            .platform
            .spawn(&request)
            .map_err(|source| ActionError::launch(request.program, source))
    }

    /// Feed `command_line` to a hidden command shell and wait briefly.
    ///
    /// An existing file as `work_dir` is replaced by its directory; no hint
    /// means the root of the current directory. Failures are logged only.
    pub fn run_command(&self, command_line: &str, work_dir: Option<&Path>) -> bool {
        self.effects.run_command(command_line, work_dir)
    }
}

impl Effects {
    fn elevate_now(&self, path: &Path) {
        let request = requests::elevate(path);
        if let Err(source) = self.platform.spawn(&request) {
            let e = ActionError::launch(request.program, source);
            self.host
                .log_error(&failure_message(ActionKind::RunAsAdmin, path), &e, ORIGIN);
        }
    }

    fn ide_now(&self, path: &Path) {
        match self.config.resolve_ide(self.env.as_ref()) {
            Some(ide) => {
                let line = ide_command_line(&self.config.command_shell, &ide, path);
                self.run_command(&line, Some(path));
            }
            None => {
                let e = ActionError::launch(
                    self.config.ide_command.clone(),
                    io::Error::new(io::ErrorKind::NotFound, "not set and not on PATH"),
                );
                self.host
                    .log_error(&failure_message(ActionKind::OpenInIde, path), &e, ORIGIN);
            }
        }
    }

    fn run_command(&self, command_line: &str, work_dir: Option<&Path>) -> bool {
        match self.try_run_command(command_line, work_dir) {
            Ok(()) => true,
            Err(e) => {
                self.host
                    .log_error(&format!("Unable to run {command_line}"), &e, ORIGIN);
                false
            }
        }
    }

    fn try_run_command(&self, command_line: &str, work_dir: Option<&Path>) -> Result<()> {
        let dir = match work_dir {
            Some(hint) if self.probe.is_file(hint) => parent_dir(hint)?,
            Some(hint) => hint.to_path_buf(),
            None => current_root()?,
        };
        let request = requests::command(
            &self.config.command_shell,
            &dir,
            command_line,
            self.config.command_grace,
        );
        tracing::debug!(command = command_line, cwd = %dir.display(), "running command");
        self.platform
            .spawn(&request)
            .map_err(|source| ActionError::launch(request.program, source))
    }

    fn report(&self, visibility: Visibility, message: &str, error: &ActionError) {
        if visibility == Visibility::User {
            self.host.notify(message);
        }
        self.host.log_error(message, error, ORIGIN);
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("config", &self.effects.config)
            .finish_non_exhaustive()
    }
}

/// Working directory for the console: a file's parent, or the folder itself.
pub fn console_dir(entry: &Entry) -> Result<PathBuf> {
    if entry.is_file() {
        parent_dir(entry.full_path())
    } else {
        Ok(entry.full_path().to_path_buf())
    }
}

fn parent_dir(path: &Path) -> Result<PathBuf> {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            ActionError::io(
                path,
                io::Error::new(io::ErrorKind::NotFound, "no containing directory"),
            )
        })
}

fn current_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| ActionError::io(".", e))?;
    Ok(cwd.ancestors().last().unwrap_or(cwd.as_path()).to_path_buf())
}

fn failure_message(kind: ActionKind, path: &Path) -> String {
    let path = path.display();
    match kind {
        ActionKind::OpenContainingFolder => format!("Failed to open containing folder of {path}"),
        ActionKind::RunAsAdmin => format!("Failed to run {path} as admin"),
        ActionKind::OpenInIde => format!("Failed to open {path} in the IDE"),
        ActionKind::CopyPath => "Failed to copy the path to the clipboard".to_string(),
        ActionKind::OpenInConsole => format!("Failed to open {path} in console"),
    }
}
