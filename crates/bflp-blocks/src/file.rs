//! Region access on files.

use bflp_fs::{NormalizedPath, RobustnessConfig, io};

use crate::error::{Error, Result};
use crate::marker::Marker;
use crate::parser::{find_region, list_markers};
use crate::writer::replace_region_bytes;

/// What [`insert_with_markers`] did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The region already held exactly the requested lines.
    Unchanged,
}

/// Returns the lines inside the region, or nothing when the file or the
/// region is absent.
pub fn extract_from_markers(path: &NormalizedPath, marker: &Marker) -> Result<Vec<String>> {
    let Some(content) = io::read_bytes_if_exists(path)? else {
        tracing::debug!(path = %path, "file absent, region is empty");
        return Ok(Vec::new());
    };

    let lines = find_region(&String::from_utf8_lossy(&content), marker)?
        .map(|region| region.lines)
        .unwrap_or_default();
    tracing::debug!(path = %path, marker = marker.name(), count = lines.len(), "extracted region");
    Ok(lines)
}

/// Replaces the region's lines, creating the region or the file if needed.
///
/// Content outside the region is kept byte for byte, whatever its encoding.
///
/// The file is created only inside an existing directory. Nothing is written
/// when the region already matches `lines`.
pub fn insert_with_markers<S: AsRef<str>>(
    path: &NormalizedPath,
    marker: &Marker,
    lines: &[S],
    robustness: RobustnessConfig,
) -> Result<WriteOutcome> {
    let content = match io::read_bytes_if_exists(path)? {
        Some(content) => content,
        None => {
            if let Some(parent) = path.parent().filter(|p| !p.is_dir()) {
                return Err(Error::DirectoryMissing {
                    path: parent.to_native(),
                });
            }
            Vec::new()
        }
    };

    if let Some(region) = find_region(&String::from_utf8_lossy(&content), marker)? {
        let same = region.lines.len() == lines.len()
            && region.lines.iter().zip(lines).all(|(a, b)| a == b.as_ref());
        if same {
            tracing::debug!(path = %path, marker = marker.name(), "region unchanged, skipping write");
            return Ok(WriteOutcome::Unchanged);
        }
    }

    let updated = replace_region_bytes(&content, marker, lines)?;
    io::write_atomic(path, &updated, robustness)?;
    tracing::info!(path = %path, marker = marker.name(), count = lines.len(), "rewrote region");

    Ok(WriteOutcome::Written)
}

/// Names of all regions in the file; empty when the file is absent.
pub fn list_markers_in_file(path: &NormalizedPath) -> Result<Vec<String>> {
    Ok(io::read_bytes_if_exists(path)?
        .map(|content| list_markers(&String::from_utf8_lossy(&content)))
        .unwrap_or_default())
}
