use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Changes the process working directory for the guard's lifetime.
///
/// The current directory is process-global and not thread-safe, so the guard
/// also holds a lock keeping cwd-dependent tests from racing each other.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Minimal pom.xml content for test projects; jrun never parses it.
const TEST_POM: &str = "<project>\n  <modelVersion>4.0.0</modelVersion>\n</project>\n";

/// Create a throwaway Maven project: a temp directory with a pom.xml and the
/// conventional source layout.
pub(crate) fn create_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    std::fs::write(path.join("pom.xml"), TEST_POM).unwrap();
    std::fs::create_dir_all(path.join("src").join("main").join("java")).unwrap();
    std::fs::create_dir_all(path.join("src").join("test").join("java")).unwrap();

    temp_dir
}

/// Write a config file with the given JSON into `dir`, returning its path.
pub(crate) fn write_config(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("jrun-config.json");
    std::fs::write(&path, json).unwrap();
    path
}
