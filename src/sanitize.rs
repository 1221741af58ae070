//! The sanitize run itself.
//!
//! Strictly linear: strip development metadata, run the bootstrap inside the
//! tree, strip the bootstrap's cache. The first failure aborts the run and
//! nothing already deleted is restored.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::{Config, Mode};
use crate::error::SanitizeError;
use crate::layout::{self, Removal, RemovalKind, Stage};
use crate::process::Cmd;
use crate::timing::Timer;

/// One action of a sanitize run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Remove(&'static Removal),
    Bootstrap,
}

/// The actions a run performs in `mode`, in order.
pub fn plan(mode: Mode) -> Vec<Step> {
    layout::removals_for(Stage::Metadata, mode)
        .map(Step::Remove)
        .chain(std::iter::once(Step::Bootstrap))
        .chain(layout::removals_for(Stage::BootstrapCache, mode).map(Step::Remove))
        .collect()
}

/// Sanitize the root named by the configuration.
pub fn sanitize_from_config(config: &Config) -> Result<(), SanitizeError> {
    let root = config.dist_root()?;
    sanitize(root, config)
}

/// Sanitize the distribution tree at `root`.
pub fn sanitize(root: &Path, config: &Config) -> Result<(), SanitizeError> {
    if !root.is_dir() {
        return Err(SanitizeError::NotFound {
            path: root.to_path_buf(),
        });
    }

    println!(
        "Sanitizing distribution tree {} ({} mode)...",
        root.display(),
        config.mode
    );
    let total = Timer::start("sanitize");

    for step in plan(config.mode) {
        match step {
            Step::Remove(removal) => remove(root, removal)?,
            Step::Bootstrap => {
                let timer = Timer::start(&config.bootstrap_command_line());
                bootstrap(root, config)?;
                timer.finish();
            }
        }
    }

    total.finish();
    println!("Distribution tree sanitized.");
    Ok(())
}

/// Run the bootstrap with `root` as its working directory.
pub fn bootstrap(root: &Path, config: &Config) -> Result<(), SanitizeError> {
    println!("Running {}...", config.bootstrap_command_line());
    Cmd::new(&config.bootstrap_program)
        .args(&config.bootstrap_args)
        .dir(root)
        .run_interactive()
}

/// Remove one layout entry. Absence is an error, never skipped.
pub fn remove(root: &Path, removal: &Removal) -> Result<(), SanitizeError> {
    let path = removal.resolve(root);
    let fail = |source: io::Error| {
        if source.kind() == io::ErrorKind::NotFound {
            SanitizeError::NotFound { path: path.clone() }
        } else {
            SanitizeError::Io {
                path: path.clone(),
                source,
            }
        }
    };

    // lstat so a dangling symlink still counts as present
    let meta = fs::symlink_metadata(&path).map_err(fail)?;

    match removal.kind {
        RemovalKind::File => {
            println!("Removing {}...", removal);
            fs::remove_file(&path).map_err(fail)
        }
        RemovalKind::Tree if meta.file_type().is_symlink() => Err(fail(io::Error::new(
            io::ErrorKind::Other,
            "refusing to remove a symlinked directory",
        ))),
        RemovalKind::Tree => {
            println!("Removing {} ({} entries)...", removal, count_entries(&path));
            fs::remove_dir_all(&path).map_err(fail)
        }
    }
}

fn count_entries(dir: &Path) -> usize {
    WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .count()
}
