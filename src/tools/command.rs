//! Command runner for external process execution

use crate::error::ToolError;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// An external binary we invoke and wait on
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: PathBuf,
}

impl ToolCommand {
    /// Use an explicit binary path
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve `name` on PATH
    pub fn locate(name: &str) -> Result<Self, ToolError> {
        which::which(name)
            .map(Self::new)
            .map_err(|source| ToolError::NotFound {
                program: name.to_string(),
                source,
            })
    }

    /// Run to completion, failing on a non-zero exit status
    ///
    /// Output is captured; stderr is attached to a failure so it carries
    /// the tool's own message.
    pub fn run<I, S>(&self, args: I) -> Result<(), ToolError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<OsString> = args.into_iter().map(|a| a.as_ref().to_owned()).collect();
        let program = self.program.display().to_string();
        log::debug!("Running {} {:?}", program, args);

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ToolError::Launch {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ToolError::Failed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_missing_binary() {
        let err = ToolCommand::locate("nonexistent-musync-binary-xyz").unwrap_err();
        assert!(matches!(err, ToolError::NotFound { .. }));
    }

    #[test]
    fn test_launch_failure() {
        let cmd = ToolCommand::new("/nonexistent/musync/tool");
        let err = cmd.run(["--version"]).err().unwrap();
        assert!(matches!(err, ToolError::Launch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_carries_stderr() {
        let cmd = ToolCommand::new("sh");
        let err = cmd.run(["-c", "echo oops >&2; exit 3"]).err().unwrap();
        match err {
            ToolError::Failed { stderr, status, .. } => {
                assert_eq!(stderr, "oops");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_is_success() {
        let cmd = ToolCommand::new("sh");
        assert!(cmd.run(["-c", "echo hello; echo noise >&2"]).is_ok());
    }
}
