//! Individual preflight checks. None of them touch the tree.

use std::ffi::CString;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::config::{Config, Mode, BOOTSTRAP_VAR, DIST_ROOT_VAR};
use crate::layout::{self, RemovalKind, Stage};
use crate::process;

use super::types::CheckResult;

/// Check the distribution root is usable.
pub fn check_root(root: &Path) -> CheckResult {
    match fs::metadata(root) {
        Ok(meta) if !meta.is_dir() => CheckResult::fail(DIST_ROOT_VAR, "Not a directory"),
        Ok(_) if !can_modify(root) => CheckResult::fail(
            DIST_ROOT_VAR,
            "Not writable by this user - removals would fail",
        ),
        Ok(_) => CheckResult::pass_with(DIST_ROOT_VAR, &root.display().to_string()),
        Err(e) => CheckResult::fail(
            DIST_ROOT_VAR,
            &format!("Cannot access {}: {}", root.display(), e),
        ),
    }
}

/// Whether this process may create and delete entries in `dir`.
fn can_modify(dir: &Path) -> bool {
    let Ok(c_path) = CString::new(dir.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string for the whole call.
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK | libc::X_OK) == 0 }
}

/// Warn about an `autom4te.cache` that predates the run.
///
/// autoreconf would reuse it, so the regenerated files may not match the
/// tarball's sources.
pub fn check_stale_cache(root: &Path) -> CheckResult {
    let name = format!("{}/", layout::AUTOM4TE_CACHE);
    if fs::symlink_metadata(root.join(layout::AUTOM4TE_CACHE)).is_ok() {
        CheckResult::warn(
            &name,
            "Already present before bootstrap; autoreconf will reuse stale cache entries",
        )
    } else {
        CheckResult::pass_with(&name, "absent")
    }
}

/// Check every path removed before the bootstrap is present with the right kind.
///
/// The bootstrap cache is produced by the run itself, so it is not checked.
pub fn check_layout(root: &Path, mode: Mode) -> Vec<CheckResult> {
    layout::REMOVALS
        .iter()
        .filter(|r| r.stage == Stage::Metadata)
        .map(|removal| {
            let name = removal.to_string();
            if !removal.applies_to(mode) {
                return CheckResult::skip(&name, &format!("not removed in {} mode", mode));
            }
            let path = removal.resolve(root);
            match (fs::symlink_metadata(&path), removal.kind) {
                (Err(_), _) => CheckResult::fail(&name, "Not found - run would abort here"),
                (Ok(meta), RemovalKind::Tree) if !meta.is_dir() => {
                    CheckResult::fail(&name, "Expected a directory")
                }
                (Ok(meta), RemovalKind::File) if meta.is_dir() => {
                    CheckResult::fail(&name, "Expected a file, found a directory")
                }
                (Ok(_), _) => CheckResult::pass(&name),
            }
        })
        .collect()
}

/// Check the bootstrap program can be found.
pub fn check_bootstrap(config: &Config) -> CheckResult {
    let program = &config.bootstrap_program;
    match process::which(program) {
        Some(path) => CheckResult::pass_with(program, &path.display().to_string()),
        None => CheckResult::fail(
            program,
            &format!(
                "Not found. Install the 'autoconf' and 'automake' packages or set {}.",
                BOOTSTRAP_VAR
            ),
        ),
    }
}
