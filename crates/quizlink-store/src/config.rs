//! Store configuration

use std::path::PathBuf;
use std::time::Duration;

/// Database file used when no path is given
pub const DEFAULT_DB_PATH: &str = "quiz.sqlite";

/// How long a statement waits on a locked database before failing
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the store lives and how its connection behaves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Database file; `None` means a private in-memory database
    pub path: Option<PathBuf>,

    /// Upper bound on waiting for a lock held by another connection
    pub busy_timeout: Duration,
}

impl StoreConfig {
    /// File-backed store at `path`
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Private in-memory store (for tests and dry runs)
    pub fn in_memory() -> Self {
        Self {
            path: None,
            ..Self::default()
        }
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: Some(PathBuf::from(DEFAULT_DB_PATH)),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }
}
