//! 在系统文件管理器中显示路径

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

/// Program + arguments that show `path` in the platform file manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealCommand {
    pub program: &'static str,
    pub args: Vec<OsString>,
}

#[cfg(target_os = "windows")]
pub fn reveal_command(path: &Path, _is_dir: bool) -> Option<RevealCommand> {
    let mut arg = OsString::from("/select,");
    arg.push(path.as_os_str());
    Some(RevealCommand {
        program: "explorer",
        args: vec![arg],
    })
}

#[cfg(target_os = "macos")]
pub fn reveal_command(path: &Path, _is_dir: bool) -> Option<RevealCommand> {
    Some(RevealCommand {
        program: "open",
        args: vec![OsString::from("-R"), path.as_os_str().to_os_string()],
    })
}

/// xdg-open cannot select an entry, so a file opens its containing folder.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn reveal_command(path: &Path, is_dir: bool) -> Option<RevealCommand> {
    let target = if is_dir { path } else { path.parent()? };
    Some(RevealCommand {
        program: "xdg-open",
        args: vec![target.as_os_str().to_os_string()],
    })
}

pub fn reveal(path: &Path) -> io::Result<()> {
    let cmd = reveal_command(path, path.is_dir()).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "path has no parent folder")
    })?;
    tracing::debug!(program = cmd.program, path = %path.display(), "reveal in file manager");
    spawn_reaped(&cmd).map(|_| ())
}

/// Launch without blocking the UI. A named thread waits on the child so it
/// never lingers as a zombie.
fn spawn_reaped(cmd: &RevealCommand) -> io::Result<JoinHandle<Option<ExitStatus>>> {
    let (tx, rx) = mpsc::channel::<Child>();
    let program = cmd.program;
    let reaper = thread::Builder::new()
        .name("urnote-reveal".to_string())
        .spawn(move || {
            let mut child = rx.recv().ok()?;
            match child.wait() {
                Ok(status) => {
                    tracing::debug!(program, %status, "file manager exited");
                    Some(status)
                }
                Err(e) => {
                    tracing::warn!(program, error = %e, "wait for file manager failed");
                    None
                }
            }
        })?;

    let child = Command::new(cmd.program)
        .args(&cmd.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    if let Err(mpsc::SendError(mut child)) = tx.send(child) {
        let _ = child.wait();
    }
    Ok(reaper)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/system.rs"]
mod tests;
