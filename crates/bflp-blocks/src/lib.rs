//! Marker-delimited regions in line-oriented config files.
//!
//! A region looks like this:
//!
//! ```text
//! # BEGIN Brute Force Login Protection
//! deny from 203.0.113.7
//! # END Brute Force Login Protection
//! ```
//!
//! [`parser`] and [`writer`] work on in-memory text. [`file`] wraps them
//! around a path: [`extract_from_markers`] returns the lines of a region and
//! [`insert_with_markers`] replaces them, leaving every line outside the
//! region untouched.

pub mod error;
pub mod file;
pub mod marker;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use file::{WriteOutcome, extract_from_markers, insert_with_markers, list_markers_in_file};
pub use marker::Marker;
pub use parser::{Region, find_region, list_markers};
pub use writer::{replace_region, replace_region_bytes};
