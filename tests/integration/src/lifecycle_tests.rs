//! Plugin lifecycle scenarios across settings, manager and file.
//!
//! Each scenario drives the library the way the admin page and the
//! activation hooks would, then checks the resulting `.htaccess`.

use bflp_fs::{ConfigStore, NormalizedPath};
use bflp_htaccess::{Htaccess, Settings};
use bflp_test_utils::TestSite;
use pretty_assertions::assert_eq;

const WORDPRESS_RULES: &str = "# BEGIN WordPress\n<IfModule mod_rewrite.c>\nRewriteEngine On\nRewriteBase /\nRewriteRule ^index\\.php$ - [L]\n</IfModule>\n# END WordPress\n";

#[test]
fn scenario_fresh_install_to_deactivation() {
    let site = TestSite::with_htaccess(WORDPRESS_RULES);
    let settings_path = NormalizedPath::new(site.root().join("bflp.toml"));
    let store = ConfigStore::new();

    // Admin saves settings pointing at the site root.
    let settings = Settings {
        allowed_attempts: 5,
        reset_time: 30,
        htaccess_dir: site.root().to_path_buf(),
        message_403: "Too many failed logins".into(),
    };
    settings.validate().unwrap();
    store.save(&settings_path, &settings).unwrap();

    // Reload as a later request would.
    let settings: Settings = store.load(&settings_path).unwrap();
    let htaccess = Htaccess::from_settings(&settings);
    assert!(htaccess.check_requirements().is_satisfied());

    htaccess.edit_403_message(&settings.message_403).unwrap();
    htaccess.deny_ip("203.0.113.7").unwrap();
    htaccess.deny_ip("2001:db8::bad").unwrap();

    assert_eq!(
        site.htaccess(),
        format!(
            "{WORDPRESS_RULES}# BEGIN Brute Force Login Protection\n<Files \"*\">\nOrder deny,allow\nErrorDocument 403 \"Too many failed logins\"\ndeny from 203.0.113.7\ndeny from 2001:db8::bad\n</Files>\n# END Brute Force Login Protection\n"
        )
    );

    assert_eq!(
        bflp_blocks::list_markers_in_file(htaccess.path()).unwrap(),
        vec!["WordPress", "Brute Force Login Protection"]
    );

    // Deactivation comments everything out, reactivation restores it.
    let active = site.htaccess();
    htaccess.comment_lines().unwrap();
    assert!(htaccess.denied_ips().unwrap().is_empty());
    assert!(site.htaccess().starts_with(WORDPRESS_RULES));

    htaccess.uncomment_lines().unwrap();
    assert_eq!(site.htaccess(), active);
}

#[test]
fn scenario_manual_unblock_keeps_other_rules() {
    let site = TestSite::with_htaccess(WORDPRESS_RULES);
    let htaccess = Htaccess::new(site.root());

    for ip in ["198.51.100.1", "198.51.100.2", "198.51.100.3"] {
        htaccess.deny_ip(ip).unwrap();
    }
    htaccess.undeny_ip("198.51.100.2").unwrap();
    htaccess.undeny_ip("198.51.100.2").unwrap();

    assert_eq!(htaccess.denied_ips().unwrap(), vec!["198.51.100.1", "198.51.100.3"]);
    assert!(site.htaccess().starts_with(WORDPRESS_RULES));
}

#[test]
fn scenario_moving_the_htaccess_directory() {
    let old_site = TestSite::with_htaccess("");
    let new_site = TestSite::with_htaccess("");
    let mut htaccess = Htaccess::new(old_site.root());
    htaccess.deny_ip("192.0.2.50").unwrap();

    htaccess.set_path(new_site.root());

    assert!(htaccess.denied_ips().unwrap().is_empty());
    htaccess.deny_ip("192.0.2.51").unwrap();
    assert!(old_site.htaccess().contains("192.0.2.50"));
    assert!(!old_site.htaccess().contains("192.0.2.51"));
    assert!(new_site.htaccess().contains("192.0.2.51"));
}
