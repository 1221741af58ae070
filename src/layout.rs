//! The fixed shape of a staged distribution tree.
//!
//! Everything the sanitizer deletes is listed here, in the order it is
//! deleted. Paths are relative to the distribution root.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Mode;

/// Cache directory autoreconf leaves in the tree it ran in.
pub const AUTOM4TE_CACHE: &str = "autom4te.cache";

/// How a path is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalKind {
    /// Single file, unlinked.
    File,
    /// Directory, removed recursively.
    Tree,
}

/// When a removal runs relative to the bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Development metadata stripped before autoreconf runs.
    Metadata,
    /// Bootstrap leftovers stripped after autoreconf runs.
    BootstrapCache,
}

/// One path deleted from the distribution root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub path: &'static str,
    pub kind: RemovalKind,
    pub stage: Stage,
    /// Lenient runs leave these in place.
    pub strict_only: bool,
}

impl Removal {
    const fn metadata(path: &'static str, kind: RemovalKind) -> Self {
        Self {
            path,
            kind,
            stage: Stage::Metadata,
            strict_only: true,
        }
    }

    /// Absolute path of this entry under `root`.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        self.path.split('/').fold(root.to_path_buf(), |acc, part| acc.join(part))
    }

    /// Whether this entry is removed in the given mode.
    pub fn applies_to(&self, mode: Mode) -> bool {
        mode == Mode::Strict || !self.strict_only
    }
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RemovalKind::File => write!(f, "{}", self.path),
            RemovalKind::Tree => write!(f, "{}/", self.path),
        }
    }
}

/// Every removal, in execution order.
pub const REMOVALS: &[Removal] = &[
    Removal::metadata(".gitattributes", RemovalKind::File),
    Removal::metadata(".gitignore", RemovalKind::File),
    Removal::metadata("m4/.gitignore", RemovalKind::File),
    Removal::metadata(".github", RemovalKind::Tree),
    // fixtures are only used by CI
    Removal::metadata("fixtures", RemovalKind::Tree),
    Removal {
        path: AUTOM4TE_CACHE,
        kind: RemovalKind::Tree,
        stage: Stage::BootstrapCache,
        strict_only: false,
    },
];

/// Removals for one stage that apply to `mode`, in execution order.
pub fn removals_for(stage: Stage, mode: Mode) -> impl Iterator<Item = &'static Removal> {
    REMOVALS
        .iter()
        .filter(move |r| r.stage == stage && r.applies_to(mode))
}
