//! Deny-rule management for Apache `.htaccess` files.
//!
//! The rules live in a region named [`MARKER`] and always take this shape:
//!
//! ```text
//! # BEGIN Brute Force Login Protection
//! <Files "*">
//! Order deny,allow
//! ErrorDocument 403 "Too many failed logins"
//! deny from 203.0.113.7
//! </Files>
//! # END Brute Force Login Protection
//! ```
//!
//! [`Htaccess`] reads the region fresh on every call, edits the typed
//! [`Line`]s between the header and footer, and writes the region back.

pub mod body;
pub mod error;
pub mod line;
pub mod manager;
pub mod settings;

pub use bflp_blocks::WriteOutcome;
pub use body::{Body, FOOTER, HEADER};
pub use error::{Error, Result};
pub use line::{Line, LineKind};
pub use manager::{FILE_NAME, Htaccess, MARKER, Requirements, Selection};
pub use settings::Settings;
