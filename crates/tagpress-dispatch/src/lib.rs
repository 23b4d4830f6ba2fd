//! Output dispatch.
//!
//! A dispatcher receives the path of a saved artifact and whether it should be
//! physically output. Failures are reported to the caller, which logs them;
//! they never stop the trigger loop.
//!
//! Dispatch is a blocking step of the activation cycle. [`CommandDispatcher`]
//! bounds it with a timeout and kills a command that overruns.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use thiserror::Error;
use wait_timeout::ChildExt;

/// How long a print command may run before it is killed.
pub const DEFAULT_DISPATCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors raised while handing an artifact to the output mechanism.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("print command is empty")]
    EmptyCommand,

    #[error("failed to start `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed while waiting for `{command}`")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` did not finish within {}s and was killed", .timeout.as_secs())]
    TimedOut { command: String, timeout: Duration },

    #[error("`{command}` exited with {}: {stderr}", exit_label(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

/// Receives finished artifact files.
pub trait OutputDispatcher {
    fn dispatch(&mut self, path: &Path, should_print: bool) -> Result<(), DispatchError>;
}

impl<D: OutputDispatcher + ?Sized> OutputDispatcher for Box<D> {
    fn dispatch(&mut self, path: &Path, should_print: bool) -> Result<(), DispatchError> {
        (**self).dispatch(path, should_print)
    }
}

/// Runs an external command with the artifact path appended, e.g. `lp <path>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDispatcher {
    command: Vec<String>,
    timeout: Duration,
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new(vec!["lp".to_string()])
    }
}

impl CommandDispatcher {
    /// `command[0]` is the program, the rest are leading arguments.
    pub fn new(command: Vec<String>) -> Self {
        Self {
            command,
            timeout: DEFAULT_DISPATCH_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Display for CommandDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command.join(" "))
    }
}

impl OutputDispatcher for CommandDispatcher {
    fn dispatch(&mut self, path: &Path, should_print: bool) -> Result<(), DispatchError> {
        if !should_print {
            tracing::info!(path = %path.display(), "printing disabled, artifact kept on disk");
            return Ok(());
        }
        let (program, args) = self
            .command
            .split_first()
            .ok_or(DispatchError::EmptyCommand)?;

        let command = format!("{self} {}", path.display());
        tracing::debug!(%command, "dispatching artifact");

        let mut child = Command::new(program)
            .args(args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| DispatchError::Spawn {
                command: command.clone(),
                source: e,
            })?;

        let waited = child.wait_timeout(self.timeout).map_err(|e| DispatchError::Wait {
            command: command.clone(),
            source: e,
        })?;
        let Some(status) = waited else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(DispatchError::TimedOut {
                command,
                timeout: self.timeout,
            });
        };

        if !status.success() {
            let mut stderr = String::new();
            if let Some(mut pipe) = child.stderr.take() {
                let _ = pipe.read_to_string(&mut stderr);
            }
            return Err(DispatchError::Failed {
                command,
                code: status.code(),
                stderr: stderr.trim().to_string(),
            });
        }
        tracing::info!(path = %path.display(), "sent artifact to printer");
        Ok(())
    }
}

/// Dispatcher that only records the artifact location in the log.
///
/// Used when no print command is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDispatcher;

impl OutputDispatcher for LogDispatcher {
    fn dispatch(&mut self, path: &Path, should_print: bool) -> Result<(), DispatchError> {
        tracing::info!(path = %path.display(), should_print, "artifact ready");
        Ok(())
    }
}
