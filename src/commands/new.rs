use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::config::Config;
use crate::paths;
use crate::skeleton::Skeleton;
use crate::template;

/// Create a new project tree under `parent`, returning the process exit code.
///
/// Refuses to touch an existing project directory.
pub fn execute(config: &Config, parent: &Path, name: &str) -> Result<i32> {
    let project_root = paths::project_root(parent, name);

    if project_root.exists() {
        println!("{}", format!("⚠️  {name} project already exists.").yellow());
        return Ok(1);
    }

    println!("🐍 Creating Python project: {name}");

    let skeleton = Skeleton::new(&project_root);
    skeleton.create()?;
    println!("  ✓ Created project skeleton");

    template::copy_build_template(config, &project_root)?;
    println!("  ✓ Copied {}", paths::MAKEFILE);

    println!("\n✨ Project '{name}' created successfully!");

    Ok(0)
}
