//! On-disk layout of a reman store.
//!
//! ```text
//! <root>/
//!   .reman
//!   src/
//!     custom/
//!     templates/
//!     outputs/
//!   Resume/
//!   preview/
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use reman_common_core::{Error, Result};

use crate::{create_dir, create_dir_all, list_files_with_extension, path};

/// Directory holding resume sources.
pub const SRC: &str = "src";
/// Directory for rendered previews.
pub const PREVIEW: &str = "preview";
/// Directory for finished resumes.
pub const RESUME: &str = "Resume";
/// Extension of resume documents, without the dot.
pub const DOCUMENT_EXT: &str = "tex";

/// Subdirectories of `src/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SrcSubdir {
    Custom,
    Templates,
    Outputs,
}

impl SrcSubdir {
    pub const ALL: [SrcSubdir; 3] = [Self::Custom, Self::Templates, Self::Outputs];

    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Templates => "templates",
            Self::Outputs => "outputs",
        }
    }

    /// Path relative to the store root, e.g. `src/templates`.
    pub fn path(self) -> PathBuf {
        Path::new(SRC).join(self.dir_name())
    }
}

impl fmt::Display for SrcSubdir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A template document available for new resumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// File name without the extension, shown to the user.
    pub stem: String,
    pub path: PathBuf,
}

/// Directories touched by [`StoreLayout::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutReport {
    pub created: Vec<PathBuf>,
    pub existing: Vec<PathBuf>,
}

impl LayoutReport {
    fn record(&mut self, path: PathBuf, created: bool) {
        if created {
            tracing::info!(dir = %path.display(), "created directory");
            self.created.push(path);
        } else {
            self.existing.push(path);
        }
    }
}

/// Paths of a store rooted at a given directory.
#[derive(Debug, Clone)]
pub struct StoreLayout {
    root: PathBuf,
}

impl StoreLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join(SRC)
    }

    pub fn subdir(&self, sub: SrcSubdir) -> PathBuf {
        self.root.join(sub.path())
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.subdir(SrcSubdir::Templates)
    }

    pub fn preview_dir(&self) -> PathBuf {
        self.root.join(PREVIEW)
    }

    pub fn resume_dir(&self) -> PathBuf {
        self.root.join(RESUME)
    }

    /// Every directory of the layout in creation order.
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.src_dir()];
        dirs.extend(SrcSubdir::ALL.iter().map(|sub| self.subdir(*sub)));
        dirs.push(self.resume_dir());
        dirs.push(self.preview_dir());
        dirs
    }

    /// Whether every layout directory is present.
    pub fn is_complete(&self) -> bool {
        self.directories().iter().all(|dir| dir.is_dir())
    }

    /// Create the layout, keeping whatever already exists.
    ///
    /// `src/` is created as a single level under the root, so a missing
    /// root fails here. A failure to create it is reported as a permission
    /// problem.
    pub fn create(&self) -> Result<LayoutReport> {
        let mut report = LayoutReport::default();

        let src = self.src_dir();
        let created = create_dir(&src).map_err(|e| {
            Error::permission_denied(
                format!("failed to create directory: {}", src.display()),
                &src,
                e,
            )
        })?;
        report.record(src, created);

        let rest = SrcSubdir::ALL
            .iter()
            .map(|sub| self.subdir(*sub))
            .chain([self.resume_dir(), self.preview_dir()]);

        for dir in rest {
            let created = create_dir_all(&dir).map_err(|e| create_error(&dir, e))?;
            report.record(dir, created);
        }

        tracing::debug!(
            root = %self.root.display(),
            created = report.created.len(),
            existing = report.existing.len(),
            "store layout ready"
        );
        Ok(report)
    }

    /// Templates in `src/templates`, sorted by stem.
    pub fn templates(&self) -> Result<Vec<Template>> {
        let files = list_files_with_extension(self.templates_dir(), DOCUMENT_EXT)?;
        let mut templates: Vec<Template> = files
            .into_iter()
            .filter_map(|path| {
                path::stem(&path).map(|stem| Template {
                    stem: stem.to_string(),
                    path: path.clone(),
                })
            })
            .collect();
        templates.sort_by(|a, b| a.stem.cmp(&b.stem));
        Ok(templates)
    }

    /// Path of a new resume document in `src/`.
    pub fn document_path(&self, author: &str, name: &str) -> PathBuf {
        self.src_dir().join(document_file_name(author, name))
    }
}

fn create_error(dir: &Path, e: io::Error) -> Error {
    Error::write(format!("failed to create directory: {}", dir.display()), dir, e)
}

/// Create the store layout under `root`.
pub fn create_layout(root: impl Into<PathBuf>) -> Result<LayoutReport> {
    StoreLayout::new(root).create()
}

/// Templates available under `root`.
pub fn list_templates(root: impl Into<PathBuf>) -> Result<Vec<Template>> {
    StoreLayout::new(root).templates()
}

/// File name of a resume document: `<author>_<name>.tex`.
pub fn document_file_name(author: &str, name: &str) -> String {
    format!("{author}_{name}.{DOCUMENT_EXT}")
}
