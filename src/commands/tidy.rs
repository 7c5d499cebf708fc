use anyhow::Result;
use std::path::Path;

use crate::paths;
use crate::skeleton::Skeleton;

/// Remove empty (unused) subdirectories from an existing project tree.
///
/// A missing project is a no-op, and subdirectories that still hold files
/// are deliberately left alone.
pub fn execute(parent: &Path, name: &str) -> Result<()> {
    let skeleton = Skeleton::new(paths::project_root(parent, name));

    let _ = skeleton.tidy();

    Ok(())
}
