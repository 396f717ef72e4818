//! Error handling under adverse filesystem conditions

use bflp_fs::{Error, NormalizedPath, io};
use tempfile::tempdir;

#[test]
fn read_text_nonexistent_file_returns_io_error() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("does_not_exist"));

    let result = io::read_text(&path);

    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn write_text_creates_missing_parents() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("a").join("b").join("settings.toml"));

    io::write_text(&path, "allowed_attempts = 3").unwrap();

    assert_eq!(io::read_text(&path).unwrap(), "allowed_attempts = 3");
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn write_into_readonly_directory_fails_and_keeps_original() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let webroot = dir.path().join("webroot");
        fs::create_dir(&webroot).unwrap();
        let file_path = webroot.join(".htaccess");
        fs::write(&file_path, "original").unwrap();
        fs::set_permissions(&webroot, Permissions::from_mode(0o555)).unwrap();

        let result = io::write_text(&NormalizedPath::new(&file_path), "replacement");

        let _ = fs::set_permissions(&webroot, Permissions::from_mode(0o755));

        assert!(result.is_err(), "write into read-only directory should fail");
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "original");
    }

    #[test]
    fn probes_report_unreadable_file() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(".htaccess");
        fs::write(&file_path, "deny from 1.2.3.4").unwrap();
        fs::set_permissions(&file_path, Permissions::from_mode(0o000)).unwrap();

        let path = NormalizedPath::new(&file_path);
        let readable = io::is_readable(&path);
        let writeable = io::is_writeable(&path);

        let _ = fs::set_permissions(&file_path, Permissions::from_mode(0o644));

        assert!(path.exists());
        assert!(!readable);
        assert!(!writeable);
    }

    #[test]
    fn probes_report_readonly_file() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(".htaccess");
        fs::write(&file_path, "").unwrap();
        fs::set_permissions(&file_path, Permissions::from_mode(0o444)).unwrap();

        let path = NormalizedPath::new(&file_path);
        let readable = io::is_readable(&path);
        let writeable = io::is_writeable(&path);

        let _ = fs::set_permissions(&file_path, Permissions::from_mode(0o644));

        assert!(readable);
        assert!(!writeable);
    }
}
