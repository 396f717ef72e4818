//! Filesystem primitives for the `.htaccess` deny-rule manager.
//!
//! Provides path handling, locked atomic writes, access probes and
//! format-agnostic settings persistence.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use path::NormalizedPath;
