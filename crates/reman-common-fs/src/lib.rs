//! File system utilities for reman stores.

use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use reman_common_core::{Error, Result};

pub mod layout;
pub mod path;

pub use layout::{
    create_layout, document_file_name, list_templates, LayoutReport, SrcSubdir, StoreLayout,
    Template,
};

/// Permission bits for directories created by reman.
pub const DIR_MODE: u32 = 0o755;

/// Fail with a not-found error unless `path` exists.
///
/// Any existing path passes, directories and regular files alike.
pub fn directory_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::not_found(path, Some(e))),
        _ => Ok(()),
    }
}

/// Check whether `path` is a directory with no entries at all.
///
/// Hidden files count as entries. An existing path that is not a directory
/// is reported as not empty rather than as an error.
pub fn is_empty_dir(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let metadata = fs::metadata(path)
        .map_err(|e| Error::read(format!("failed to read metadata: {}", path.display()), path, e))?;

    if !metadata.is_dir() {
        return Ok(false);
    }

    let mut entries = fs::read_dir(path)
        .map_err(|e| Error::read(format!("failed to read directory: {}", path.display()), path, e))?;

    match entries.next() {
        None => Ok(true),
        Some(Ok(_)) => Ok(false),
        Some(Err(e)) => Err(Error::read(
            format!("failed to read directory entry: {}", path.display()),
            path,
            e,
        )),
    }
}

fn dir_builder(recursive: bool) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(recursive);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
}

/// `AlreadyExists` only counts as success when a directory is in the way.
fn existing_dir(path: &Path, err: io::Error) -> io::Result<bool> {
    if err.kind() == io::ErrorKind::AlreadyExists && path.is_dir() {
        Ok(false)
    } else {
        Err(err)
    }
}

/// Create a single directory level.
///
/// Returns `Ok(false)` when the directory was already there. The parent
/// must exist. A non-directory at `path` is an error.
pub fn create_dir(path: impl AsRef<Path>) -> io::Result<bool> {
    let path = path.as_ref();
    match dir_builder(false).create(path) {
        Ok(()) => Ok(true),
        Err(e) => existing_dir(path, e),
    }
}

/// Create a directory and any missing parents.
///
/// Returns `Ok(false)` when the directory was already there. A
/// non-directory at `path` is an error.
pub fn create_dir_all(path: impl AsRef<Path>) -> io::Result<bool> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(false);
    }
    match dir_builder(true).create(path) {
        Ok(()) => Ok(true),
        Err(e) => existing_dir(path, e),
    }
}

/// Create a new empty document file, refusing to replace an existing one.
pub fn create_document(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => Error::already_exists(path),
            _ => Error::write(format!("failed to create file: {}", path.display()), path, e),
        })?;
    tracing::debug!(path = %path.display(), "created file");
    Ok(file)
}

/// Copy the full contents of `src` into an already open destination.
///
/// Returns the number of bytes copied. A failure part way leaves whatever
/// was written in `dst`.
pub fn copy_into(src: impl AsRef<Path>, dst: &mut File) -> Result<u64> {
    let src = src.as_ref();
    let mut reader = File::open(src).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::not_found(src, Some(e)),
        _ => Error::read(format!("failed to open file: {}", src.display()), src, e),
    })?;

    let copied = io::copy(&mut reader, dst)
        .map_err(|e| Error::write(format!("failed to copy from: {}", src.display()), src, e))?;
    dst.sync_all()
        .map_err(|e| Error::write(format!("failed to sync copy of: {}", src.display()), src, e))?;

    tracing::debug!(src = %src.display(), bytes = copied, "copied file contents");
    Ok(copied)
}

/// List regular files directly inside `dir` whose extension is `ext`.
///
/// A missing directory yields an empty list. Results are sorted by path.
pub fn list_files_with_extension(dir: impl AsRef<Path>, ext: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(Error::read(
                format!("failed to read directory: {}", dir.display()),
                dir,
                e,
            ))
        }
    };

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| {
            Error::read(format!("failed to read directory entry: {}", dir.display()), dir, e)
        })?;

        let path = entry.path();
        if path.is_file() && path::has_extension(&path, ext) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
