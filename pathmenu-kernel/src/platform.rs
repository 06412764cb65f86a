//! OS seam: process creation and clipboard access.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::time::{Duration, Instant};

/// Everything needed to start one external process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    /// Written to the child's stdin, followed by a newline.
    pub stdin_line: Option<String>,
    /// Keep the stdin pipe open after writing instead of closing it.
    pub keep_stdin_open: bool,
    /// No console window, output discarded.
    pub hidden: bool,
    /// Wait at most this long for the child to exit.
    pub wait: Option<Duration>,
}

impl LaunchRequest {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            stdin_line: None,
            keep_stdin_open: false,
            hidden: false,
            wait: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn stdin_line(mut self, line: impl Into<String>) -> Self {
        self.stdin_line = Some(line.into());
        self
    }

    pub fn keep_stdin_open(mut self) -> Self {
        self.keep_stdin_open = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn wait(mut self, grace: Duration) -> Self {
        self.wait = Some(grace);
        self
    }
}

pub trait Platform: Send + Sync {
    /// Start the process described by `request`.
    ///
    /// Returns once the process is started (or once the optional wait has
    /// elapsed). Never kills the child.
    fn spawn(&self, request: &LaunchRequest) -> io::Result<()>;

    /// Replace the clipboard's text contents.
    fn set_clipboard(&self, text: &str) -> Result<(), String>;
}

/// `std::process` and `arboard` backed platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPlatform;

impl Platform for SystemPlatform {
    fn spawn(&self, request: &LaunchRequest) -> io::Result<()> {
        let mut cmd = Command::new(&request.program);
        cmd.args(&request.args);
        if let Some(cwd) = &request.cwd {
            cmd.current_dir(cwd);
        }
        if request.stdin_line.is_some() {
            cmd.stdin(Stdio::piped());
        }
        if request.hidden {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
            hide_window(&mut cmd);
        }

        let mut child = cmd.spawn()?;
        tracing::debug!(program = %request.program, pid = child.id(), "spawned");

        let mut stdin = child.stdin.take();
        if let (Some(line), Some(pipe)) = (&request.stdin_line, stdin.as_mut()) {
            // The child is running either way; it may just have exited already.
            if let Err(e) = writeln!(pipe, "{line}").and_then(|()| pipe.flush()) {
                tracing::debug!(program = %request.program, error = %e, "stdin write failed");
            }
        }
        if !request.keep_stdin_open {
            drop(stdin.take());
        }

        if let Some(grace) = request.wait {
            if wait_at_most(&mut child, grace)? {
                return Ok(());
            }
            tracing::debug!(program = %request.program, "still running after grace period");
        }

        reap_detached(child, stdin);
        Ok(())
    }

    fn set_clipboard(&self, text: &str) -> Result<(), String> {
        // arboard handles the platform-specific clipboard access.
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text.to_owned()).map_err(|e| e.to_string())
    }
}

/// Poll the child until it exits or `grace` elapses. True when it exited.
fn wait_at_most(child: &mut Child, grace: Duration) -> io::Result<bool> {
    let deadline = Instant::now() + grace;
    loop {
        if child.try_wait()?.is_some() {
            return Ok(true);
        }
        if Instant::now() >= deadline {
            return Ok(false);
        }
        std::thread::sleep(Duration::from_millis(25));
    }
}

/// Hand the child to a detached thread that only collects its exit status.
fn reap_detached(mut child: Child, stdin: Option<ChildStdin>) {
    let spawned = std::thread::Builder::new()
        .name("pathmenu-reaper".to_string())
        .spawn(move || {
            let _stdin = stdin;
            let _ = child.wait();
        });
    if let Err(e) = spawned {
        tracing::debug!(error = %e, "could not start reaper thread");
    }
}

#[cfg(windows)]
fn hide_window(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    cmd.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn hide_window(_cmd: &mut Command) {}
