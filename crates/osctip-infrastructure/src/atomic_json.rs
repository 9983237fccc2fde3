//! Atomic JSON blob operations.
//!
//! Provides a thin layer for safe whole-blob access to the persisted JSON
//! files: tmp file + atomic rename on write, advisory file locking around
//! read-modify-write cycles.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Errors that can occur during atomic JSON operations.
#[derive(Debug)]
pub enum AtomicJsonError {
    /// File I/O error.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
    /// File locking error.
    Lock(String),
}

impl std::fmt::Display for AtomicJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicJsonError::Io(e) => write!(f, "I/O error: {}", e),
            AtomicJsonError::Json(e) => write!(f, "JSON error: {}", e),
            AtomicJsonError::Lock(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicJsonError {}

impl From<std::io::Error> for AtomicJsonError {
    fn from(e: std::io::Error) -> Self {
        AtomicJsonError::Io(e)
    }
}

impl From<serde_json::Error> for AtomicJsonError {
    fn from(e: serde_json::Error) -> Self {
        AtomicJsonError::Json(e)
    }
}

/// A handle to one JSON blob file.
///
/// Provides:
/// - **Atomicity**: updates are all-or-nothing via tmp file + atomic rename
/// - **Isolation**: an advisory `.lock` file guards the physical write
/// - **Durability**: explicit fsync before rename
///
/// The lock only covers the write itself; read-modify-write cycles above
/// this layer still race under concurrent writers (last writer wins).
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new blob handle for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    /// Loads the blob and deserializes it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: successfully loaded and deserialized
    /// - `Ok(None)`: file doesn't exist or is empty
    /// - `Err`: failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves data to the blob atomically.
    ///
    /// Writes to a temporary file in the same directory, fsyncs, then
    /// renames over the target. An advisory lock is held for the duration.
    pub fn save(&self, data: &T) -> Result<(), AtomicJsonError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let _lock = FileLock::acquire(&self.path)?;

        let json = serde_json::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Removes the blob file if it exists.
    pub fn remove(&self) -> Result<(), AtomicJsonError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf, AtomicJsonError> {
        let parent = self.path.parent().ok_or_else(|| {
            AtomicJsonError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            AtomicJsonError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

/// A file lock guard that releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Acquires an exclusive lock next to the given path.
    fn acquire(path: &Path) -> Result<Self, AtomicJsonError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| AtomicJsonError::Lock(format!("Failed to acquire lock: {}", e)))?;
        }

        #[cfg(not(unix))]
        {
            // No file locking on non-Unix systems; acceptable for a
            // single-user desktop tool.
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped.
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestBlob {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.json");
        let blob = AtomicJsonFile::<TestBlob>::new(file_path);

        let data = TestBlob {
            name: "test".to_string(),
            count: 42,
        };

        blob.save(&data).unwrap();

        let loaded = blob.load().unwrap().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let blob = AtomicJsonFile::<TestBlob>::new(temp_dir.path().join("missing.json"));

        assert!(blob.load().unwrap().is_none());
    }

    #[test]
    fn test_load_malformed_file_is_a_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("broken.json");
        fs::write(&file_path, "{ not json").unwrap();

        let blob = AtomicJsonFile::<TestBlob>::new(file_path);
        match blob.load() {
            Err(AtomicJsonError::Json(_)) => {}
            other => panic!("expected JSON error, got {other:?}"),
        }
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.json");
        let blob = AtomicJsonFile::<TestBlob>::new(file_path.clone());

        blob.save(&TestBlob {
            name: "test".to_string(),
            count: 1,
        })
        .unwrap();

        assert!(!temp_dir.path().join(".test.json.tmp").exists());
        assert!(file_path.exists());
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.json");
        let blob = AtomicJsonFile::<TestBlob>::new(file_path.clone());

        blob.save(&TestBlob {
            name: "x".to_string(),
            count: 0,
        })
        .unwrap();
        assert!(file_path.exists());

        blob.remove().unwrap();
        assert!(!file_path.exists());

        // Removing again is a no-op.
        blob.remove().unwrap();
    }
}
