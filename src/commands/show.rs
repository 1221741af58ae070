//! Show command - displays information.

use anyhow::Result;

use crate::config::{Config, DIST_ROOT_VAR};
use crate::sanitize::{self, Step};

/// Show target for the show command.
pub enum ShowTarget {
    /// Show configuration
    Config,
    /// Show the actions a run would take
    Plan,
}

/// Execute the show command.
pub fn cmd_show(target: ShowTarget, config: &Config) -> Result<()> {
    match target {
        ShowTarget::Config => config.print(),
        ShowTarget::Plan => {
            for line in plan_lines(config) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

/// Human-readable plan, one numbered line per step.
pub fn plan_lines(config: &Config) -> Vec<String> {
    let root = config
        .dist_root
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| format!("${}", DIST_ROOT_VAR));

    let mut lines = vec![format!("Plan for {} ({} mode):", root, config.mode)];
    for (i, step) in sanitize::plan(config.mode).into_iter().enumerate() {
        let action = match step {
            Step::Remove(removal) => format!("remove {}", removal),
            Step::Bootstrap => format!("run `{}` in {}", config.bootstrap_command_line(), root),
        };
        lines.push(format!("  {}. {}", i + 1, action));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;
    use std::path::PathBuf;

    #[test]
    fn test_plan_lines_strict() {
        let config = Config {
            dist_root: Some(PathBuf::from("/tmp/dist-XYZ")),
            ..Config::default()
        };
        let lines = plan_lines(&config);
        assert_eq!(lines[0], "Plan for /tmp/dist-XYZ (strict mode):");
        assert_eq!(lines[1], "  1. remove .gitattributes");
        assert_eq!(lines[4], "  4. remove .github/");
        assert_eq!(lines[6], "  6. run `autoreconf -i` in /tmp/dist-XYZ");
        assert_eq!(lines[7], "  7. remove autom4te.cache/");
    }

    #[test]
    fn test_plan_lines_without_root() {
        let config = Config::default().with_mode(Some(Mode::Lenient));
        let lines = plan_lines(&config);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "  1. run `autoreconf -i` in $MESON_DIST_ROOT");
    }
}
