//! Run command - sanitizes the staged distribution tree.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::sanitize;

/// Execute the run command.
pub fn cmd_run(config: &Config) -> Result<()> {
    let root = config.dist_root()?;
    sanitize::sanitize(root, config)
        .with_context(|| format!("Sanitizing {} failed", root.display()))
}
