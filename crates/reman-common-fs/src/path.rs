//! Path helpers.

use std::path::Path;

/// File name without its final extension.
///
/// Hidden files such as `.tex` have no stem and yield `None`.
pub fn stem(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    if name.starts_with('.') && name[1..].find('.').is_none() {
        return None;
    }
    path.file_stem()?.to_str()
}

/// Whether `path` ends in `.<ext>`, compared exactly.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ext)
}

/// Display `path` relative to `base` when it lives under it.
pub fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
