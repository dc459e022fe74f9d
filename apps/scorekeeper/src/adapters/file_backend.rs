//! One JSON file per key under a data directory.
//!
//! Writes go to a temporary sibling and are renamed into place while an
//! exclusive OS lock is held on `<dir>/.lock`, so concurrent CLI invocations
//! never observe a half-written value. [`KvBackend::update`] holds the same
//! lock across its read and write. The directory is created on first write.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use fs4::fs_std::FileExt;
use tracing::debug;

use super::{KvBackend, StorageError};

#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Caller must hold the directory lock.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        let mut file = File::create(&tmp)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, self.path_for(key))?;
        Ok(())
    }

    /// Hold the directory lock for the duration of `f`.
    fn with_lock<T>(
        &self,
        f: impl FnOnce() -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        fs::create_dir_all(&self.dir)?;
        let lock_path = self.dir.join(".lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .read(true)
            .write(true)
            .open(&lock_path)?;

        lock_file
            .lock_exclusive()
            .map_err(|e| StorageError::Lock(format!("{}: {e}", lock_path.display())))?;
        debug!(lock_path = %lock_path.display(), "storage lock acquired");

        let result = f();
        // Closing the handle releases the lock.
        drop(lock_file);
        result
    }
}

impl KvBackend for FileBackend {
    /// A missing directory counts as available; it is created on write.
    fn is_available(&self) -> bool {
        match fs::metadata(&self.dir) {
            Ok(meta) => meta.is_dir() && !meta.permissions().readonly(),
            Err(e) => e.kind() == ErrorKind::NotFound,
        }
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.read(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_lock(|| self.write(key, value))
    }

    fn update(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<String>) -> Result<String, StorageError>,
    ) -> Result<(), StorageError> {
        self.with_lock(|| {
            let next = f(self.read(key)?)?;
            self.write(key, &next)
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let target = self.path_for(key);
        self.with_lock(|| match fs::remove_file(&target) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        })
    }
}
