//! Shared test utilities for dist-sanitize tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

use dist_sanitize::Config;

/// Test environment: a staged dist root plus a place for bootstrap stubs.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Staged distribution tree (MESON_DIST_ROOT)
    pub root: PathBuf,
    /// Directory holding stub bootstrap scripts
    pub bin_dir: PathBuf,
    /// Stubs append one line per invocation here
    pub marker: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path();

        let root = base.join("dist-XYZ");
        let bin_dir = base.join("bin");
        let marker = base.join("bootstrap.log");

        fs::create_dir_all(&root).expect("Failed to create dist root");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");

        Self {
            _temp_dir: temp_dir,
            root,
            bin_dir,
            marker,
        }
    }

    /// Environment with a fully populated staging tree.
    pub fn with_dist_tree() -> Self {
        let env = Self::new();
        create_dist_tree(&env.root);
        env
    }

    /// Write an executable stub that logs its invocation, then runs `body`.
    pub fn bootstrap_stub(&self, name: &str, body: &str) -> PathBuf {
        let path = self.bin_dir.join(name);
        let script = format!(
            "#!/bin/sh\necho \"$(pwd -P) $*\" >> '{}'\n{}\n",
            self.marker.display(),
            body
        );
        fs::write(&path, script).expect("Failed to write stub");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod stub");
        path
    }

    /// Stub that behaves like a successful `autoreconf -i`.
    pub fn autoreconf_stub(&self) -> PathBuf {
        self.bootstrap_stub(
            "autoreconf",
            "mkdir -p autom4te.cache && echo trace > autom4te.cache/traces.0\n\
             printf '#!/bin/sh\\necho configured\\n' > configure && chmod +x configure\n\
             touch Makefile.in",
        )
    }

    /// Stub that leaves its cache behind and fails with `code`.
    pub fn failing_stub(&self, code: i32) -> PathBuf {
        self.bootstrap_stub(
            "autoreconf-broken",
            &format!("mkdir -p autom4te.cache\necho 'configure.ac:3: error' >&2\nexit {}", code),
        )
    }

    pub fn config(&self, bootstrap: &Path) -> Config {
        Config {
            dist_root: Some(self.root.clone()),
            bootstrap_program: bootstrap.display().to_string(),
            ..Config::default()
        }
    }

    /// Lines the stubs logged, one per invocation.
    pub fn bootstrap_invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.marker)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Create a staged tree with every fixed path plus ordinary sources.
pub fn create_dist_tree(root: &Path) {
    let files = [
        (".gitattributes", "*.svs binary\n"),
        (".gitignore", "/build\n"),
        ("m4/.gitignore", "libtool.m4\n"),
        ("m4/ax_check.m4", "dnl check\n"),
        (".github/workflows/ci.yml", "on: push\n"),
        (".github/dependabot.yml", "version: 2\n"),
        ("fixtures/slide.svs", "binary"),
        ("fixtures/nested/tile.jpg", "binary"),
        ("configure.ac", "AC_INIT([demo], [1.0])\n"),
        ("Makefile.am", "SUBDIRS = src\n"),
        ("meson.build", "project('demo', 'c')\n"),
        ("src/demo.c", "int main(void) { return 0; }\n"),
        ("src/.gitkeep", ""),
    ];

    for (path, content) in files {
        let path = root.join(path);
        fs::create_dir_all(path.parent().expect("path has parent"))
            .expect("Failed to create parent dir");
        fs::write(&path, content).expect("Failed to write tree file");
    }
}

/// Every path under `root`, relative to it.
pub fn snapshot(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.expect("walk failed"))
        .map(|e| e.path().strip_prefix(root).expect("under root").to_path_buf())
        .collect()
}

/// Assert that a path exists.
pub fn assert_exists(path: &Path) {
    assert!(path.exists(), "Expected path to exist: {}", path.display());
}

/// Assert that a path does not exist.
pub fn assert_absent(path: &Path) {
    assert!(
        fs::symlink_metadata(path).is_err(),
        "Expected path to be removed: {}",
        path.display()
    );
}
