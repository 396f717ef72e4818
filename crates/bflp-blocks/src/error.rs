//! Error types for bflp-blocks

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] bflp_fs::Error),

    #[error("Directory {path} does not exist")]
    DirectoryMissing { path: PathBuf },

    #[error("Region '{marker}' opened on line {line} is never closed")]
    UnterminatedRegion { marker: String, line: usize },
}
