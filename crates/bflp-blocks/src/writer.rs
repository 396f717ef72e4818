//! Region rewriting for marker-delimited blocks.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::marker::Marker;

/// Replaces the contents of the first region named by `marker`.
///
/// Text before the begin sentinel and after the end sentinel is kept
/// byte for byte, line endings included. When the region does not exist it
/// is appended after the existing content. Written lines use CRLF if the
/// input contains any, LF otherwise.
///
/// # Errors
/// Returns `Error::UnterminatedRegion` when the begin sentinel has no end
/// sentinel, rather than swallowing the rest of the file into the region.
///
/// # Example
/// ```
/// use bflp_blocks::{Marker, replace_region};
///
/// let updated = replace_region("Options -Indexes\n", &Marker::new("bflp"), &["deny from 10.0.0.1"]).unwrap();
/// assert_eq!(updated, "Options -Indexes\n# BEGIN bflp\ndeny from 10.0.0.1\n# END bflp\n");
/// ```
pub fn replace_region<S: AsRef<str>>(content: &str, marker: &Marker, lines: &[S]) -> Result<String> {
    let updated = replace_region_bytes(content.as_bytes(), marker, lines)?;
    Ok(String::from_utf8_lossy(&updated).into_owned())
}

/// [`replace_region`] over raw file content in any encoding.
///
/// Only the sentinel lines are decoded, and only to compare them with the
/// marker. Everything outside the region is copied through untouched.
pub fn replace_region_bytes<S: AsRef<str>>(content: &[u8], marker: &Marker, lines: &[S]) -> Result<Vec<u8>> {
    let newline: &[u8] = if content.windows(2).any(|w| w == b"\r\n") {
        b"\r\n"
    } else {
        b"\n"
    };
    let segments: Vec<&[u8]> = content.split_inclusive(|b| *b == b'\n').collect();

    let (pre, post, end_terminator): (&[&[u8]], &[&[u8]], &[u8]) =
        match segments.iter().position(|s| marker.is_begin(&decode(s))) {
            Some(begin) => {
                let end = segments[begin + 1..]
                    .iter()
                    .position(|s| marker.is_end(&decode(s)))
                    .map(|offset| begin + 1 + offset)
                    .ok_or_else(|| Error::UnterminatedRegion {
                        marker: marker.name().to_string(),
                        line: begin + 1,
                    })?;
                (&segments[..begin], &segments[end + 1..], terminator(segments[end]))
            }
            None => (&segments[..], &segments[segments.len()..], newline),
        };

    let mut output = Vec::with_capacity(content.len() + 64);
    for segment in pre {
        output.extend_from_slice(segment);
    }
    if !output.is_empty() && !output.ends_with(b"\n") {
        output.extend_from_slice(newline);
    }

    output.extend_from_slice(marker.begin_line().as_bytes());
    output.extend_from_slice(newline);
    for line in lines {
        output.extend_from_slice(line.as_ref().as_bytes());
        output.extend_from_slice(newline);
    }
    output.extend_from_slice(marker.end_line().as_bytes());
    output.extend_from_slice(end_terminator);

    for segment in post {
        output.extend_from_slice(segment);
    }
    Ok(output)
}

fn decode(segment: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(line_text(segment))
}

/// The segment without its `\n` or `\r\n` terminator.
fn line_text(segment: &[u8]) -> &[u8] {
    let line = segment.strip_suffix(b"\n").unwrap_or(segment);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn terminator(segment: &[u8]) -> &[u8] {
    &segment[line_text(segment).len()..]
}
