use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::paths;

/// Configuration for pyinit
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory the build template is resolved under
    pub template_root: PathBuf,
}

impl Config {
    /// Build a configuration from an explicit template root.
    pub fn new(template_root: impl AsRef<Path>) -> Self {
        Self {
            template_root: template_root.as_ref().to_path_buf(),
        }
    }

    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let root = std::env::var(paths::TEMPLATE_ROOT_VAR).with_context(|| {
            format!(
                "{} environment variable is not set",
                paths::TEMPLATE_ROOT_VAR
            )
        })?;

        Ok(Self::new(root))
    }

    /// Full path to the Makefile template this configuration points at.
    pub fn makefile_source(&self) -> PathBuf {
        paths::makefile_source(&self.template_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_template_root() {
        let config = Config::new("templates");
        assert_eq!(config.template_root, PathBuf::from("templates"));
    }

    #[test]
    fn test_makefile_source_joins_fixed_subpath() {
        let config = Config::new("templates");
        assert_eq!(
            config.makefile_source(),
            PathBuf::from("templates")
                .join("pyinit")
                .join("util")
                .join("Makefile")
        );
    }
}
