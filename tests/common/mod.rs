//! Shared testing utilities for copy-assets CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use std::fs;
use std::path::{Path, PathBuf};

/// Testing harness providing an isolated project tree for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated project tree.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the project root used for CLI invocations.
    pub fn project_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `copy-assets` binary in the project root.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("copy-assets").expect("Failed to locate copy-assets binary");
        cmd.current_dir(self.project_dir());
        cmd
    }

    /// Write a stylesheet fixture into `src/styles/`.
    pub fn write_style(&self, name: &str, content: &str) -> PathBuf {
        self.write_source("src/styles", name, content)
    }

    /// Write a template fixture into `src/templates/`.
    pub fn write_template(&self, name: &str, content: &str) -> PathBuf {
        self.write_source("src/templates", name, content)
    }

    fn write_source(&self, dir: &str, name: &str, content: &str) -> PathBuf {
        let source_dir = self.project_dir().join(dir);
        fs::create_dir_all(&source_dir).expect("Failed to create source directory");
        let path = source_dir.join(name);
        fs::write(&path, content).expect("Failed to write source fixture");
        path
    }

    /// Path to the `public/` output directory.
    pub fn public_path(&self) -> PathBuf {
        self.project_dir().join("public")
    }

    /// Path to the `public/css/` output directory.
    pub fn public_css_path(&self) -> PathBuf {
        self.public_path().join("css")
    }

    /// Read an output file under `public/`.
    pub fn read_public(&self, relative: &str) -> String {
        fs::read_to_string(self.public_path().join(relative)).expect("Failed to read output file")
    }

    /// Assert that `public/` and `public/css/` exist.
    pub fn assert_output_dirs_exist(&self) {
        assert!(self.public_path().is_dir(), "public/ should exist");
        assert!(self.public_css_path().is_dir(), "public/css/ should exist");
    }
}
