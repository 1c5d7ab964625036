//! Display paths for walked files

use std::path::{Component, Path};

/// Render `path` relative to `root` with `/` separators.
///
/// Falls back to the file name when `path` is the root itself, and to the
/// full path when it does not live under `root`.
pub fn display_path(root: &Path, path: &Path) -> String {
    let relative = match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => {
            return path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
        }
        Ok(rel) => rel,
        Err(_) => path,
    };

    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
