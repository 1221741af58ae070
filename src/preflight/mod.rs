//! Preflight checks for a sanitize run.
//!
//! Validates the environment, the tree layout and the bootstrap tool without
//! modifying anything. Run with `dist-sanitize preflight`.

mod checks;
mod types;

use anyhow::{bail, Result};

use crate::config::{Config, DIST_ROOT_VAR};

pub use types::{CheckResult, CheckStatus, PreflightReport};

/// Run all preflight checks.
pub fn run_preflight(config: &Config) -> PreflightReport {
    let mut report = PreflightReport::default();

    println!("Running preflight checks ({} mode)...\n", config.mode);

    println!("Checking distribution root...");
    match config.dist_root() {
        Ok(root) => {
            let root_check = checks::check_root(root);
            let usable = root_check.status == CheckStatus::Pass;
            report.checks.push(root_check);

            if usable {
                println!("Checking tree layout...");
                report.checks.extend(checks::check_layout(root, config.mode));
                report.checks.push(checks::check_stale_cache(root));
            }
        }
        Err(e) => report
            .checks
            .push(CheckResult::fail(DIST_ROOT_VAR, &e.to_string())),
    }

    println!("Checking bootstrap tool...");
    report.checks.push(checks::check_bootstrap(config));

    println!();
    report
}

/// Run preflight and bail if any checks fail.
pub fn run_preflight_or_fail(config: &Config) -> Result<()> {
    let report = run_preflight(config);
    report.print();

    if !report.all_passed() {
        bail!(
            "Preflight failed: {} check(s) failed. Fix the issues above before running.",
            report.fail_count()
        );
    }

    println!("All preflight checks passed!\n");
    Ok(())
}
