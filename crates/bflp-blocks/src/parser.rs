//! Region parsing for marker-delimited blocks.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::marker::Marker;

/// The lines held by one region, with the position of its sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Lines strictly between the begin and end sentinels.
    pub lines: Vec<String>,
    /// 1-based line number of the begin sentinel.
    pub begin_line: usize,
    /// 1-based line number of the end sentinel.
    pub end_line: usize,
}

static BEGIN_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*# BEGIN (\S.*?)[ \t]*\r?$").expect("Invalid begin marker regex")
});

/// Finds the first region named by `marker`.
///
/// Returns `Ok(None)` when the content has no begin sentinel for the marker.
///
/// # Errors
/// Returns `Error::UnterminatedRegion` when a begin sentinel has no matching
/// end sentinel after it.
///
/// # Example
/// ```
/// use bflp_blocks::{Marker, find_region};
///
/// let content = "Options -Indexes\n# BEGIN bflp\ndeny from 10.0.0.1\n# END bflp\n";
/// let region = find_region(content, &Marker::new("bflp")).unwrap().unwrap();
/// assert_eq!(region.lines, vec!["deny from 10.0.0.1"]);
/// assert_eq!(region.begin_line, 2);
/// ```
pub fn find_region(content: &str, marker: &Marker) -> Result<Option<Region>> {
    let lines: Vec<&str> = content.lines().collect();

    let Some(begin) = lines.iter().position(|line| marker.is_begin(line)) else {
        return Ok(None);
    };

    let end = lines[begin + 1..]
        .iter()
        .position(|line| marker.is_end(line))
        .map(|offset| begin + 1 + offset)
        .ok_or_else(|| Error::UnterminatedRegion {
            marker: marker.name().to_string(),
            line: begin + 1,
        })?;

    Ok(Some(Region {
        lines: lines[begin + 1..end].iter().map(|l| l.to_string()).collect(),
        begin_line: begin + 1,
        end_line: end + 1,
    }))
}

/// Names of every region opened in the content, in order of appearance.
///
/// # Example
/// ```
/// use bflp_blocks::list_markers;
///
/// let content = "# BEGIN WordPress\n# END WordPress\n# BEGIN bflp\n# END bflp\n";
/// assert_eq!(list_markers(content), vec!["WordPress", "bflp"]);
/// ```
pub fn list_markers(content: &str) -> Vec<String> {
    BEGIN_MARKER_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
