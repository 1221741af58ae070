//! External command execution.
//!
//! The bootstrap is the only external program dist-sanitize runs. Its output
//! goes straight to the terminal; failures map onto [`SanitizeError`].

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::SanitizeError;

/// Builder for configuring command execution.
#[derive(Debug, Clone)]
pub struct Cmd {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl Cmd {
    /// Create a new command builder.
    pub fn new(program: impl AsRef<str>) -> Self {
        Self {
            program: program.as_ref().to_string(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_string());
        }
        self
    }

    /// Set the working directory.
    pub fn dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    /// Run with inherited stdio and wait for it to exit.
    ///
    /// Blocks with no timeout. A launch failure becomes
    /// [`SanitizeError::Launch`], a non-zero exit becomes
    /// [`SanitizeError::ExternalTool`].
    pub fn run_interactive(self) -> Result<(), SanitizeError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|source| SanitizeError::Launch {
            program: self.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(SanitizeError::ExternalTool {
                program: self.program,
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// Resolve a program the way `Command` would: paths as-is, bare names via PATH.
pub fn which(program: &str) -> Option<PathBuf> {
    if program.contains('/') {
        let path = PathBuf::from(program);
        return path.is_file().then_some(path);
    }
    which::which(program).ok()
}
