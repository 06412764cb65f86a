//! Resolver configuration and the injectable process environment.

use std::path::PathBuf;
use std::time::Duration;

/// Variable naming an explicit IDE executable.
pub const IDE_OVERRIDE_VAR: &str = "idea";
/// Command looked up on `PATH` when no override is set.
pub const IDE_COMMAND: &str = "idea";
/// Overrides the interactive console program (`program arg...`).
pub const CONSOLE_ENV: &str = "PATHMENU_CONSOLE";
/// Overrides the shell used for one-shot commands (`program arg...`).
pub const SHELL_ENV: &str = "PATHMENU_SHELL";
/// How long the one-shot command helper waits for its shell.
pub const COMMAND_GRACE: Duration = Duration::from_secs(2);

/// Read-only view of the process environment.
///
/// Injected so IDE resolution and overrides are testable without touching
/// the real environment.
pub trait Environment: Send + Sync {
    /// Value of `key`; empty values count as unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Resolve `program` through the executable search path.
    fn which(&self, program: &str) -> Option<PathBuf>;
}

/// The real environment: `std::env` plus the `which` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }

    fn which(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

/// A program plus its leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl ProgramSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Parse a whitespace-separated `program arg...` override.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program).with_args(parts))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub ide_override_var: String,
    pub ide_command: String,
    /// Interactive console opened by the "open in console" action.
    pub console: ProgramSpec,
    /// Shell that reads one-shot command lines from stdin.
    pub command_shell: ProgramSpec,
    pub command_grace: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ide_override_var: IDE_OVERRIDE_VAR.to_string(),
            ide_command: IDE_COMMAND.to_string(),
            console: default_console(),
            command_shell: default_command_shell(),
            command_grace: COMMAND_GRACE,
        }
    }
}

impl Config {
    /// Defaults with any `PATHMENU_*` overrides applied.
    pub fn from_env(env: &dyn Environment) -> Self {
        let mut config = Self::default();
        if let Some(console) = env.var(CONSOLE_ENV).as_deref().and_then(ProgramSpec::parse) {
            config.console = console;
        }
        if let Some(shell) = env.var(SHELL_ENV).as_deref().and_then(ProgramSpec::parse) {
            config.command_shell = shell;
        }
        config
    }

    /// Two-step IDE lookup: the override variable, then the search path.
    pub fn resolve_ide(&self, env: &dyn Environment) -> Option<String> {
        if let Some(explicit) = env.var(&self.ide_override_var) {
            return Some(explicit);
        }
        env.which(&self.ide_command)
            .map(|path| path.to_string_lossy().into_owned())
    }
}

#[cfg(target_os = "windows")]
fn default_console() -> ProgramSpec {
    ProgramSpec::new("cmd.exe")
}

#[cfg(target_os = "macos")]
fn default_console() -> ProgramSpec {
    ProgramSpec::new("open").with_args(["-a", "Terminal", "."])
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn default_console() -> ProgramSpec {
    ProgramSpec::new("x-terminal-emulator")
}

#[cfg(target_os = "windows")]
fn default_command_shell() -> ProgramSpec {
    ProgramSpec::new("cmd")
}

#[cfg(not(target_os = "windows"))]
fn default_command_shell() -> ProgramSpec {
    ProgramSpec::new("sh")
}
