//! Project root discovery for jrun.
//!
//! A Maven project root is the nearest ancestor directory (inclusive of the
//! starting directory) containing a `pom.xml`. The file's contents are never
//! parsed; only its existence anchors the project. The upward walk is an
//! explicit bounded loop so deep trees cannot grow the stack.

use crate::error::{JrunError, Result};
use std::path::{Path, PathBuf};

/// Build-descriptor marker whose presence identifies a project root.
pub const PROJECT_MARKER: &str = "pom.xml";

/// Walk upward from `start` to the nearest directory containing `pom.xml`.
///
/// Fails with a clean error when the walk reaches the filesystem root
/// without finding the marker.
pub fn find_project_root(start: &Path) -> Result<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(PROJECT_MARKER).is_file() {
            return Ok(dir);
        }
        match dir.parent() {
            Some(parent) if parent != dir => dir = parent.to_path_buf(),
            _ => {
                return Err(JrunError::ProjectRootError(format!(
                    "could not find {} in '{}' or any parent directory",
                    PROJECT_MARKER,
                    start.display()
                )));
            }
        }
    }
}

/// The locally compiled output directory for a project root.
///
/// Maven writes compiled classes to `target/classes`; the directory may or
/// may not exist depending on whether the project has been built.
pub fn compiled_classes_dir(project_root: &Path) -> PathBuf {
    project_root.join("target").join("classes")
}
