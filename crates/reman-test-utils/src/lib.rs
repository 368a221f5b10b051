//! Test utilities for reman crates.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory that is cleaned up on drop.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Body written into fixture templates.
pub const TEMPLATE_BODY: &str = "\\documentclass{article}\n\\begin{document}\nHello\n\\end{document}\n";

/// A store laid out on disk inside a temporary directory.
///
/// Built without going through the store crates so it can serve as an
/// independent starting point for their tests.
pub struct StoreFixture {
    dir: TempDir,
}

impl StoreFixture {
    /// Empty directory, no store yet.
    pub fn empty() -> Self {
        Self { dir: temp_dir() }
    }

    /// Full layout plus a `.reman` file naming `author`.
    pub fn initialized(author: &str) -> Self {
        let fixture = Self::empty();
        fixture.create_layout();
        fixture.write_config(&format!(
            "$version: 0.1.0\nauthor:\n  name: {author}\n"
        ));
        fixture
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn create_layout(&self) {
        for rel in [
            "src/custom",
            "src/templates",
            "src/outputs",
            "Resume",
            "preview",
        ] {
            fs::create_dir_all(self.path(rel)).expect("Failed to create store dir");
        }
    }

    /// Overwrite `.reman` with raw YAML.
    pub fn write_config(&self, yaml: &str) {
        fs::write(self.path(".reman"), yaml).expect("Failed to write config");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.path(".reman")).expect("Failed to read config")
    }

    /// Add `src/templates/<stem>.tex` with [`TEMPLATE_BODY`].
    pub fn add_template(&self, stem: &str) -> PathBuf {
        let dir = self.path("src/templates");
        fs::create_dir_all(&dir).expect("Failed to create templates dir");
        let path = dir.join(format!("{stem}.tex"));
        fs::write(&path, TEMPLATE_BODY).expect("Failed to write template");
        path
    }

    /// Write an arbitrary file relative to the root.
    pub fn write_file(&self, rel: impl AsRef<Path>, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}

/// Assert that a Result is Ok and return the value.
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a Result is Err and return the error.
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialized_fixture() {
        let store = StoreFixture::initialized("Jane");
        assert!(store.path("src/templates").is_dir());
        assert!(store.path("preview").is_dir());
        assert!(store.read_config().contains("name: Jane"));
    }

    #[test]
    fn test_add_template() {
        let store = StoreFixture::empty();
        let path = store.add_template("base");
        assert_eq!(path, store.path("src/templates/base.tex"));
        assert_eq!(fs::read_to_string(path).unwrap(), TEMPLATE_BODY);
    }

    #[test]
    fn test_assert_macros() {
        let ok: Result<u8, String> = Ok(3);
        assert_eq!(assert_ok!(ok), 3);
        let err: Result<u8, String> = Err("bad".into());
        assert_eq!(assert_err!(err), "bad");
    }
}
