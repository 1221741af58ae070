//! Error taxonomy for a sanitize run.

use std::path::PathBuf;
use thiserror::Error;

/// Every way a sanitize run can fail. None of these are recovered from.
#[derive(Debug, Error)]
pub enum SanitizeError {
    /// The variable naming the distribution root is unset or empty.
    #[error("environment variable {var} is not set; run this as a meson dist script")]
    MissingEnvironment { var: &'static str },

    /// A path the run expected to find is absent.
    #[error("expected path does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The bootstrap ran but did not exit cleanly.
    #[error("'{program}' failed ({})", exit_description(.code))]
    ExternalTool { program: String, code: Option<i32> },

    /// The bootstrap could not be started at all.
    #[error("failed to execute '{program}'. Is it installed?")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Any other filesystem failure while removing a path.
    #[error("failed to remove {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value {value:?} for {var} (expected 'strict' or 'lenient')")]
    InvalidMode { var: &'static str, value: String },
}

impl SanitizeError {
    /// Process exit code for this failure.
    ///
    /// Bootstrap failures hand the tool's own code back to meson; everything
    /// else exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            SanitizeError::ExternalTool {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }

    /// True for errors caused by the external bootstrap rather than the tree.
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            SanitizeError::ExternalTool { .. } | SanitizeError::Launch { .. }
        )
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}
