//! Single source of truth for the filesystem layout pyinit produces.
//!
//! This module defines WHERE things go. It has no I/O, no validation,
//! no business logic.
//!
//! # Project Layout
//!
//! ```text
//! <name>/
//! ├── docs/
//! ├── src/
//! │   ├── __init__.py
//! │   └── main.py
//! ├── tests/
//! │   └── __init__.py
//! ├── site/
//! ├── data/
//! └── Makefile
//! ```

use std::path::{Path, PathBuf};

/// Subdirectories created under every project root.
///
/// Shared by creation and tidy so the two never drift apart.
pub const SUB_DIRS: [&str; 5] = ["docs", "src", "tests", "site", "data"];

/// Marker file that tags a subdirectory as a Python package.
pub const MARKER_FILE: &str = "__init__.py";

/// Generated entry-point file name.
pub const MAIN_FILE: &str = "main.py";

/// Build template file name, both at its source and inside the project.
pub const MAKEFILE: &str = "Makefile";

/// Environment variable pointing at the root the build template lives under.
pub const TEMPLATE_ROOT_VAR: &str = "GITLAB";

/// Project root for `name`: `<parent>/<name>`
pub fn project_root(parent: &Path, name: &str) -> PathBuf {
    parent.join(name)
}

/// Build template source under a template root: `<root>/pyinit/util/Makefile`
pub fn makefile_source(template_root: &Path) -> PathBuf {
    template_root.join("pyinit").join("util").join(MAKEFILE)
}
