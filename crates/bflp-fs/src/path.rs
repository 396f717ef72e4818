//! Normalized path handling

use std::path::{Path, PathBuf};

/// A path stored with forward slashes.
///
/// Configured directories come from settings files that may have been
/// written on either platform, so the separator is normalized on the way in
/// and converted back only when touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let normalized = path.as_ref().to_string_lossy().replace('\\', "/");
        Self { inner: normalized }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join a single segment, avoiding a doubled separator.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let inner = if self.inner.is_empty() {
            segment
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner }
    }

    /// The directory containing this path, if it has one.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(0) => Some(Self::new("/")),
            Some(idx) => Some(Self::new(&trimmed[..idx])),
            None => None,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.inner
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Extension of the file name. Dotfiles such as `.htaccess` have none.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }

    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Resolve symlinks and relative segments for display.
    ///
    /// Falls back to the path as given when it cannot be resolved.
    pub fn canonical(&self) -> Self {
        dunce::canonicalize(self.to_native())
            .map(Self::new)
            .unwrap_or_else(|_| self.clone())
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backslashes_normalized() {
        let path = NormalizedPath::new(r"C:\www\site");
        assert_eq!(path.as_str(), "C:/www/site");
    }

    #[test]
    fn test_join_avoids_double_slash() {
        assert_eq!(NormalizedPath::new("/var/www/").join(".htaccess").as_str(), "/var/www/.htaccess");
        assert_eq!(NormalizedPath::new("/var/www").join(".htaccess").as_str(), "/var/www/.htaccess");
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        assert_eq!(NormalizedPath::new("/var/www/.htaccess").extension(), None);
        assert_eq!(NormalizedPath::new("bflp.toml").extension(), Some("toml"));
    }

    #[test]
    fn test_parent() {
        let path = NormalizedPath::new("/var/www/.htaccess");
        assert_eq!(path.parent(), Some(NormalizedPath::new("/var/www")));
        assert_eq!(NormalizedPath::new("/srv").parent(), Some(NormalizedPath::new("/")));
        assert_eq!(NormalizedPath::new("relative").parent(), None);
    }
}
