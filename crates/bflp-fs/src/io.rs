//! Atomic I/O operations with file locking, plus access probes

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use backoff::ExponentialBackoffBuilder;
use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Tuning for [`write_atomic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// How long to keep retrying the advisory lock before giving up.
    pub lock_timeout: Duration,
    /// Whether to fsync the temp file before renaming it into place.
    pub enable_fsync: bool,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self {
            lock_timeout: Duration::from_secs(10),
            enable_fsync: true,
        }
    }
}

/// Write content atomically to a file with locking.
///
/// Holds an exclusive advisory lock on `<file>.lock` for the duration of the
/// write, writes to a temp file in the same directory and renames it over
/// the target. Permissions of an existing target are carried over to the
/// replacement.
pub fn write_atomic(path: &NormalizedPath, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let lock_path = native_path.with_file_name(format!(
        "{}.lock",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default()
    ));
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(|e| Error::io(&lock_path, e))?;
    acquire_lock(&lock_file, config.lock_timeout).map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    let temp_path = native_path.with_file_name(format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    ));

    let result = write_temp(&temp_path, content, config.enable_fsync)
        .and_then(|()| copy_permissions(&native_path, &temp_path))
        .and_then(|()| fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e)));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    let _ = FileExt::unlock(&lock_file);
    tracing::debug!(path = %path, bytes = content.len(), "atomic write finished");

    result
}

fn resolve_symlink(path: PathBuf) -> PathBuf {
    match fs::symlink_metadata(&path) {
        Ok(meta) if meta.file_type().is_symlink() => match dunce::canonicalize(&path) {
            Ok(target) => {
                tracing::debug!(link = %path.display(), target = %target.display(), "writing through symlink");
                target
            }
            Err(_) => path,
        },
        _ => path,
    }
}

fn acquire_lock(file: &File, timeout: Duration) -> std::result::Result<(), std::io::Error> {
    let policy = ExponentialBackoffBuilder::new()
        .with_initial_interval(Duration::from_millis(10))
        .with_max_interval(Duration::from_millis(250))
        .with_max_elapsed_time(Some(timeout))
        .build();

    backoff::retry(policy, || file.try_lock_exclusive().map_err(backoff::Error::transient)).map_err(
        |e| match e {
            backoff::Error::Permanent(err) => err,
            backoff::Error::Transient { err, .. } => err,
        },
    )
}

fn write_temp(temp_path: &Path, content: &[u8], fsync: bool) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    if fsync {
        temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;
    }

    Ok(())
}

fn copy_permissions(from: &Path, to: &Path) -> Result<()> {
    match fs::metadata(from) {
        Ok(meta) => fs::set_permissions(to, meta.permissions()).map_err(|e| Error::io(to, e)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(from, e)),
    }
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content, treating a missing file as `None`.
pub fn read_text_if_exists(path: &NormalizedPath) -> Result<Option<String>> {
    let native_path = path.to_native();
    match fs::read_to_string(&native_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Read raw bytes, treating a missing file as `None`.
///
/// For files that may hold text in any encoding, such as `.htaccess`.
pub fn read_bytes_if_exists(path: &NormalizedPath) -> Result<Option<Vec<u8>>> {
    let native_path = path.to_native();
    match fs::read(&native_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Write text content to a file atomically with default settings.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes(), RobustnessConfig::default())
}

/// Whether the file can be opened for reading right now.
pub fn is_readable(path: &NormalizedPath) -> bool {
    File::open(path.to_native()).is_ok_and(|f| f.metadata().is_ok_and(|m| m.is_file()))
}

/// Whether the existing file can be opened for writing right now.
///
/// Opens without `create` or `truncate`, so probing never alters the file.
pub fn is_writeable(path: &NormalizedPath) -> bool {
    OpenOptions::new()
        .write(true)
        .open(path.to_native())
        .is_ok_and(|f| f.metadata().is_ok_and(|m| m.is_file()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_probes_on_missing_file() {
        let dir = tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join(".htaccess"));
        assert!(!is_readable(&path));
        assert!(!is_writeable(&path));
        assert!(!path.exists(), "probing must not create the file");
    }

    #[test]
    fn test_probes_reject_directories() {
        let dir = tempdir().unwrap();
        let path = NormalizedPath::new(dir.path());
        assert!(!is_readable(&path));
        assert!(!is_writeable(&path));
    }

    #[test]
    fn test_read_text_if_exists_missing() {
        let dir = tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join("absent"));
        assert!(read_text_if_exists(&path).unwrap().is_none());
        assert!(read_bytes_if_exists(&path).unwrap().is_none());
    }
}
