//! [`TestSite`]: a temporary web root holding an `.htaccess` file.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BEGIN: &str = "# BEGIN Brute Force Login Protection";
const END: &str = "# END Brute Force Login Protection";

/// A temporary directory standing in for a site's document root.
///
/// # Example
///
/// ```rust,no_run
/// use bflp_test_utils::TestSite;
///
/// let site = TestSite::with_region(&["<Files \"*\">", "deny from 192.0.2.1", "</Files>"]);
/// assert!(site.htaccess().contains("deny from 192.0.2.1"));
/// ```
pub struct TestSite {
    temp_dir: TempDir,
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSite {
    /// Empty web root, no `.htaccess` yet.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestSite::new: failed to create temp dir"),
        }
    }

    /// Web root whose `.htaccess` holds `content` verbatim.
    pub fn with_htaccess(content: &str) -> Self {
        let site = Self::new();
        site.write_htaccess(content);
        site
    }

    /// Web root whose `.htaccess` holds only the managed region with `lines`.
    pub fn with_region(lines: &[&str]) -> Self {
        let mut content = String::new();
        content.push_str(BEGIN);
        content.push('\n');
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        content.push_str(END);
        content.push('\n');
        Self::with_htaccess(&content)
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn htaccess_path(&self) -> PathBuf {
        self.root().join(".htaccess")
    }

    pub fn write_htaccess(&self, content: &str) {
        fs::write(self.htaccess_path(), content).expect("TestSite: failed to write .htaccess");
    }

    /// Full `.htaccess` content; panics if the file is missing.
    pub fn htaccess(&self) -> String {
        fs::read_to_string(self.htaccess_path()).expect("TestSite: .htaccess missing")
    }

    pub fn has_htaccess(&self) -> bool {
        self.htaccess_path().exists()
    }

    /// Lines between the managed region's sentinels.
    pub fn region_lines(&self) -> Vec<String> {
        let content = self.htaccess();
        content
            .lines()
            .skip_while(|l| l.trim() != BEGIN)
            .skip(1)
            .take_while(|l| l.trim() != END)
            .map(str::to_string)
            .collect()
    }

    /// Write the settings file `name` into the root and return its path.
    pub fn write_settings(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, content).expect("TestSite: failed to write settings");
        path
    }
}
