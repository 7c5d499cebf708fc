//! Project skeleton creation and best-effort tidy.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;
use crate::template;

/// Result of one removal attempt during tidy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TidyOutcome {
    pub sub_dir: &'static str,
    pub removed: bool,
}

pub struct Skeleton {
    root_path: PathBuf,
}

impl Skeleton {
    pub fn new(root_path: impl AsRef<Path>) -> Self {
        Self {
            root_path: root_path.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }

    /// Create the project root, its subdirectories, and their seed files.
    ///
    /// The caller is expected to have verified that the root does not exist
    /// yet. Any filesystem error propagates as-is; a partially built tree is
    /// left behind rather than rolled back.
    pub fn create(&self) -> Result<()> {
        fs::create_dir(&self.root_path).with_context(|| {
            format!(
                "Failed to create project root: {}",
                self.root_path.display()
            )
        })?;

        for sub_dir in paths::SUB_DIRS {
            let dir = self.root_path.join(sub_dir);
            fs::create_dir(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

            // src and tests are Python packages; the other three stay bare.
            if sub_dir == "src" || sub_dir == "tests" {
                let marker = dir.join(paths::MARKER_FILE);
                fs::write(&marker, "")
                    .with_context(|| format!("Failed to create {}", marker.display()))?;
            }

            if sub_dir == "src" {
                template::write_main_template(&dir)?;
            }
        }

        Ok(())
    }

    /// Remove empty (unused) subdirectories, best effort.
    ///
    /// A non-existing root is a no-op. Each subdirectory is attempted with a
    /// non-recursive remove, so "not empty" and "does not exist" both leave
    /// the entry marked as kept. The root itself is never removed.
    pub fn tidy(&self) -> Vec<TidyOutcome> {
        if !self.root_path.exists() {
            return Vec::new();
        }

        paths::SUB_DIRS
            .into_iter()
            .map(|sub_dir| TidyOutcome {
                sub_dir,
                removed: fs::remove_dir(self.root_path.join(sub_dir)).is_ok(),
            })
            .collect()
    }
}
