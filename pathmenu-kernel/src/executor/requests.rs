//! Per-platform launch requests for each side effect.

use std::path::Path;
use std::time::Duration;

use crate::config::ProgramSpec;
use crate::platform::LaunchRequest;

/// Open a file manager at the entry's parent with the entry selected.
#[cfg(target_os = "windows")]
pub fn reveal(path: &Path) -> LaunchRequest {
    LaunchRequest::new("explorer.exe")
        .arg("/select,")
        .arg(path.to_string_lossy())
}

#[cfg(target_os = "macos")]
pub fn reveal(path: &Path) -> LaunchRequest {
    LaunchRequest::new("open").arg("-R").arg(path.to_string_lossy())
}

// xdg-open cannot preselect an item, so open the parent directory.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn reveal(path: &Path) -> LaunchRequest {
    let target = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(path);
    LaunchRequest::new("xdg-open").arg(target.to_string_lossy())
}

/// Ask the OS to launch `path` with elevated privileges.
#[cfg(target_os = "windows")]
pub fn elevate(path: &Path) -> LaunchRequest {
    let quoted = path.to_string_lossy().replace('\'', "''");
    LaunchRequest::new("powershell")
        .args(["-NoProfile", "-NonInteractive", "-Command"])
        .arg(format!("Start-Process -FilePath '{quoted}' -Verb RunAs"))
        .hidden()
}

#[cfg(target_os = "macos")]
pub fn elevate(path: &Path) -> LaunchRequest {
    let escaped = path
        .to_string_lossy()
        .replace('\\', "\\\\")
        .replace('"', "\\\"");
    LaunchRequest::new("osascript").arg("-e").arg(format!(
        "do shell script quoted form of \"{escaped}\" with administrator privileges"
    ))
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn elevate(path: &Path) -> LaunchRequest {
    LaunchRequest::new("pkexec").arg(path.to_string_lossy())
}

/// Interactive console rooted at `dir`, fed one empty line and left open.
pub fn console(spec: &ProgramSpec, dir: &Path) -> LaunchRequest {
    LaunchRequest::new(spec.program.clone())
        .args(spec.args.iter().cloned())
        .cwd(dir)
        .stdin_line("")
        .keep_stdin_open()
}

/// Hidden shell that reads `command_line` from stdin; waited on for `grace`.
pub fn command(spec: &ProgramSpec, dir: &Path, command_line: &str, grace: Duration) -> LaunchRequest {
    LaunchRequest::new(spec.program.clone())
        .args(spec.args.iter().cloned())
        .cwd(dir)
        .stdin_line(command_line)
        .hidden()
        .wait(grace)
}

/// Argument quoting rules of a command shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    /// `sh` and friends: single quotes, nothing inside is expanded.
    Posix,
    /// `cmd.exe`: double quotes.
    Cmd,
}

impl Quoting {
    pub fn for_shell(shell: &ProgramSpec) -> Self {
        let name = Path::new(&shell.program)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        if name.eq_ignore_ascii_case("cmd") {
            Quoting::Cmd
        } else {
            Quoting::Posix
        }
    }

    pub fn quote(self, arg: &str) -> String {
        match self {
            Quoting::Posix => format!("'{}'", arg.replace('\'', "'\\''")),
            Quoting::Cmd => format!("\"{arg}\""),
        }
    }
}

/// `<ide> <path>`, each part quoted for `shell`.
pub fn ide_command_line(shell: &ProgramSpec, ide: &str, path: &Path) -> String {
    let quoting = Quoting::for_shell(shell);
    format!(
        "{} {}",
        quoting.quote(ide),
        quoting.quote(&path.to_string_lossy())
    )
}
