//! Dependency install trigger.
//!
//! The install step runs as a detached child process with inherited I/O.
//! The working directory is passed explicitly instead of changing the
//! process-wide current directory. Callers receive a handle they may wait
//! on, observe from a background thread, or drop entirely; the child's
//! outcome never alters the bootstrap result.

use crate::error::{Error, Result};
use log::error;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;

/// Command used to install project dependencies
pub const INSTALL_COMMAND: &str = "npm";
pub const INSTALL_ARGS: [&str; 1] = ["install"];

/// Handle to a running install child process.
pub struct InstallHandle {
    child: Child,
}

impl InstallHandle {
    /// Blocks until the install step finishes.
    pub fn wait(mut self) -> Result<ExitStatus> {
        self.child.wait().map_err(Error::IoError)
    }

    /// Reports the install outcome from a background thread.
    ///
    /// Fire-and-forget: the returned thread handle can be dropped and the
    /// overall command may exit before the install step finishes.
    pub fn report_in_background(self) -> thread::JoinHandle<()> {
        thread::spawn(move || match self.wait() {
            Ok(status) if status.success() => {
                println!("npm install completed successfully.");
            }
            Ok(status) => {
                error!("npm install failed with status {}.", status);
            }
            Err(e) => {
                error!("npm install could not be awaited: {}", e);
            }
        })
    }
}

/// Spawns `npm install` in `working_dir` with inherited stdio.
///
/// # Errors
/// * `Error::InstallError` if the child process cannot be started; callers
///   report this without failing the surrounding bootstrap
pub fn trigger_install<P: AsRef<Path>>(working_dir: P) -> Result<InstallHandle> {
    let child = Command::new(INSTALL_COMMAND)
        .args(INSTALL_ARGS)
        .current_dir(working_dir.as_ref())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| Error::InstallError(e.to_string()))?;

    Ok(InstallHandle { child })
}
