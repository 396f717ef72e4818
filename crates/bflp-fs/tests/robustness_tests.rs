use assert_fs::prelude::*;
use bflp_fs::{NormalizedPath, RobustnessConfig, io};
use predicates::prelude::*;
use std::time::Duration;

fn fast() -> RobustnessConfig {
    RobustnessConfig {
        lock_timeout: Duration::from_millis(500),
        enable_fsync: false,
    }
}

#[test]
fn test_read_bytes_keeps_non_utf8_content() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child(".htaccess");
    file.write_binary(b"# caf\xe9\nOptions -Indexes\n").unwrap();

    let path = NormalizedPath::new(file.path());
    let bytes = io::read_bytes_if_exists(&path).unwrap().unwrap();
    assert_eq!(bytes, b"# caf\xe9\nOptions -Indexes\n");
    assert!(io::read_text(&path).is_err());
}

#[test]
fn test_write_text_visible_to_readers() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child(".htaccess");

    io::write_text(&NormalizedPath::new(file.path()), "deny from 192.0.2.1\n").unwrap();

    file.assert(predicate::str::contains("deny from 192.0.2.1"));
    temp.child(".htaccess.lock").assert(predicate::path::exists());
}

#[cfg(unix)]
#[test]
fn test_write_atomic_through_symlink() {
    let temp = assert_fs::TempDir::new().unwrap();
    let shared = temp.child("shared.htaccess");
    shared.write_str("Options -Indexes\n").unwrap();
    let link = temp.child(".htaccess");
    link.symlink_to_file(shared.path()).unwrap();

    io::write_atomic(&NormalizedPath::new(link.path()), b"deny from 192.0.2.1\n", fast()).unwrap();

    link.assert(predicate::path::is_symlink());
    shared.assert("deny from 192.0.2.1\n");
}
