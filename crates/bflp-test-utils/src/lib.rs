//! Shared test fixtures for the bflp workspace.
//!
//! Dev-dependency only, never published.

pub mod site;

pub use site::TestSite;
