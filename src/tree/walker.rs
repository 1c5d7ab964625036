//! Filesystem walker for the profile root

use crate::error::ValidatorError;
use crate::tree::path::display_path;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name suffix of profile documents.
pub const PROFILE_SUFFIX: &str = ".json";

/// A candidate profile document found during the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFile {
    /// Path as walked (root joined with the relative part)
    pub path: PathBuf,
    /// Path relative to the root, `/`-separated, used in output
    pub display: String,
}

/// Profile tree walker
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily walk the tree, yielding profile files in walk order.
    ///
    /// Entries of each directory are visited sorted by file name. Directories
    /// and files whose name does not end in `.json` are skipped. Symlinks are
    /// not followed. The first walk error is yielded as `Err`; callers stop
    /// there.
    pub fn profiles(&self) -> ProfileFiles {
        ProfileFiles {
            root: self.root.clone(),
            inner: WalkDir::new(&self.root)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter(),
        }
    }
}

/// Iterator returned by [`Walker::profiles`]
pub struct ProfileFiles {
    root: PathBuf,
    inner: walkdir::IntoIter,
}

impl Iterator for ProfileFiles {
    type Item = Result<ProfileFile, ValidatorError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(ValidatorError::Walk {
                        root: self.root.clone(),
                        source,
                    }))
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }
            if !entry.file_name().to_string_lossy().ends_with(PROFILE_SUFFIX) {
                continue;
            }

            let path = entry.into_path();
            let display = display_path(&self.root, &path);
            return Some(Ok(ProfileFile { path, display }));
        }
    }
}
