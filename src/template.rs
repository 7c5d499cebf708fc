//! Generated file content: the main.py skeleton and the Makefile copy.

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::paths;

/// Fixed body written to a fresh `main.py`.
pub const MAIN_TEMPLATE: &str = r#"def main() -> None:
    print("Hello, World!")


if __name__ == "__main__":
    main()
"#;

/// Write the `main.py` skeleton into `dir` unless one already exists.
///
/// Returns `true` when the file was written. An existing `main.py` is never
/// touched; a warning is printed instead and the caller has to remove the
/// file manually to regenerate it.
pub fn write_main_template(dir: &Path) -> Result<bool> {
    let path = dir.join(paths::MAIN_FILE);

    if path.exists() {
        println!(
            "{}",
            format!("⚠️  {} already exists", path.display()).yellow()
        );
        println!("   Remove it manually to regenerate the template.");
        return Ok(false);
    }

    fs::write(&path, MAIN_TEMPLATE)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(true)
}

/// Copy the Makefile template into the project root, keeping its name.
pub fn copy_build_template(config: &Config, project_root: &Path) -> Result<()> {
    let source = config.makefile_source();
    let dest = project_root.join(paths::MAKEFILE);

    fs::copy(&source, &dest).with_context(|| {
        format!("Failed to copy build template from {}", source.display())
    })?;

    Ok(())
}
