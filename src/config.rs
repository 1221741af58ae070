//! Configuration for dist-sanitize.
//!
//! Reads configuration from the environment. `main` loads a `.env` file
//! first; variables already set in the real environment take precedence.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::SanitizeError;

/// Variable meson sets to the staged distribution tree.
pub const DIST_ROOT_VAR: &str = "MESON_DIST_ROOT";

/// Selects strict or lenient removal.
pub const MODE_VAR: &str = "DIST_SANITIZE_MODE";

/// Overrides the bootstrap program (autotools convention).
pub const BOOTSTRAP_VAR: &str = "AUTORECONF";

pub const DEFAULT_BOOTSTRAP: &str = "autoreconf";

/// `-i`: install missing auxiliary files.
pub const DEFAULT_BOOTSTRAP_ARGS: &[&str] = &["-i"];

/// How much of the tree is stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Strip VCS metadata, CI config and fixtures; all must be present
    #[default]
    Strict,
    /// Only clean up after autoreconf
    Lenient,
}

impl Mode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Mode::Strict),
            "lenient" => Some(Mode::Lenient),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Strict => f.write_str("strict"),
            Mode::Lenient => f.write_str("lenient"),
        }
    }
}

/// dist-sanitize configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Staged distribution tree (MESON_DIST_ROOT), if set
    pub dist_root: Option<PathBuf>,
    pub mode: Mode,
    /// Bootstrap program (default: autoreconf)
    pub bootstrap_program: String,
    pub bootstrap_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dist_root: None,
            mode: Mode::default(),
            bootstrap_program: DEFAULT_BOOTSTRAP.to_string(),
            bootstrap_args: DEFAULT_BOOTSTRAP_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `mode` is the CLI override; when given, DIST_SANITIZE_MODE is not read.
    pub fn from_env(mode: Option<Mode>) -> Result<Self, SanitizeError> {
        Self::from_lookup(|key| std::env::var(key).ok(), mode)
    }

    /// Load configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F, mode: Option<Mode>) -> Result<Self, SanitizeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mode = match (mode, get(MODE_VAR)) {
            (Some(mode), _) => mode,
            (None, Some(value)) => Mode::parse(&value).ok_or(SanitizeError::InvalidMode {
                var: MODE_VAR,
                value,
            })?,
            (None, None) => Mode::default(),
        };

        let mut config = Self {
            dist_root: get(DIST_ROOT_VAR).map(PathBuf::from),
            mode,
            ..Self::default()
        };
        if let Some(program) = get(BOOTSTRAP_VAR) {
            config.bootstrap_program = match std::env::current_dir() {
                Ok(cwd) => anchor_program(program, &cwd),
                Err(_) => program,
            };
        }
        Ok(config)
    }

    /// CLI override for the mode.
    pub fn with_mode(mut self, mode: Option<Mode>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        self
    }

    /// The distribution root, or the configuration error if it is unset.
    pub fn dist_root(&self) -> Result<&Path, SanitizeError> {
        self.dist_root
            .as_deref()
            .ok_or(SanitizeError::MissingEnvironment { var: DIST_ROOT_VAR })
    }

    /// Bootstrap command as it would be typed in a shell.
    pub fn bootstrap_command_line(&self) -> String {
        std::iter::once(self.bootstrap_program.as_str())
            .chain(self.bootstrap_args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        match &self.dist_root {
            Some(root) => println!("  {}: {}", DIST_ROOT_VAR, root.display()),
            None => println!("  {}: NOT SET (meson sets this for dist scripts)", DIST_ROOT_VAR),
        }
        println!("  {}: {}", MODE_VAR, self.mode);
        println!("  {}: {}", BOOTSTRAP_VAR, self.bootstrap_program);
        println!("  Bootstrap command: {}", self.bootstrap_command_line());
    }
}

/// Anchor a relative program path like `./autoreconf` to `cwd`.
///
/// The bootstrap runs with the dist root as its working directory, so a
/// relative path would otherwise resolve somewhere else. Bare names are left
/// for the PATH search.
fn anchor_program(program: String, cwd: &Path) -> String {
    let path = Path::new(&program);
    if program.contains('/') && path.is_relative() {
        cwd.join(path).display().to_string()
    } else {
        program
    }
}
