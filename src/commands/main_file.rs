use anyhow::Result;
use std::path::Path;

use crate::paths;
use crate::template;

/// Create a standalone `main.py` in `dir` (the current directory for the CLI).
pub fn execute(dir: &Path) -> Result<()> {
    if template::write_main_template(dir)? {
        println!("✓ Created {}", dir.join(paths::MAIN_FILE).display());
    }

    Ok(())
}
