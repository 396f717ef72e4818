//! The `.htaccess` manager.

use std::net::IpAddr;
use std::path::Path;

use bflp_blocks::{Marker, WriteOutcome, extract_from_markers, insert_with_markers};
use bflp_fs::{NormalizedPath, RobustnessConfig, io};
use serde::Serialize;

use crate::body::Body;
use crate::error::{Error, Result};
use crate::line::{Line, LineKind};
use crate::settings::Settings;

/// Name of the region holding the managed rules.
pub const MARKER: &str = "Brute Force Login Protection";

/// File name appended to the configured directory.
pub const FILE_NAME: &str = ".htaccess";

/// Result of probing the target file. Each flag is probed independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Requirements {
    pub found: bool,
    pub readable: bool,
    pub writeable: bool,
}

impl Requirements {
    pub fn is_satisfied(&self) -> bool {
        self.found && self.readable && self.writeable
    }
}

/// Which lines [`Htaccess::lines`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Every region line, header and footer included.
    Raw,
    /// Region lines without header and footer.
    Body,
    /// Body lines of one kind.
    Only(LineKind),
    /// Body lines of any other kind, comments included.
    Except(LineKind),
}

/// Edits the managed region of one `.htaccess` file.
///
/// Nothing is cached: every query re-reads the file and every mutation is a
/// full read-modify-write that leaves the region as header, body, footer.
#[derive(Debug, Clone)]
pub struct Htaccess {
    path: NormalizedPath,
    marker: Marker,
    robustness: RobustnessConfig,
}

impl Htaccess {
    /// Manage `<dir>/.htaccess`. No I/O happens here.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: NormalizedPath::new(dir).join(FILE_NAME),
            marker: Marker::new(MARKER),
            robustness: RobustnessConfig::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.htaccess_dir)
    }

    pub fn with_robustness(mut self, robustness: RobustnessConfig) -> Self {
        self.robustness = robustness;
        self
    }

    /// Retarget to `<dir>/.htaccess`. No I/O happens here.
    pub fn set_path(&mut self, dir: impl AsRef<Path>) {
        self.path = NormalizedPath::new(dir).join(FILE_NAME);
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    /// Probe existence, readability and writability. Never fails.
    pub fn check_requirements(&self) -> Requirements {
        let status = Requirements {
            found: self.path.exists(),
            readable: io::is_readable(&self.path),
            writeable: io::is_writeable(&self.path),
        };
        if !status.is_satisfied() {
            tracing::warn!(path = %self.path, ?status, "htaccess requirements not met");
        }
        status
    }

    /// Targets of every `deny from` body line, in file order.
    pub fn denied_ips(&self) -> Result<Vec<String>> {
        Ok(self
            .lines(Selection::Only(LineKind::Deny))?
            .iter()
            .filter_map(Line::payload)
            .map(str::to_string)
            .collect())
    }

    /// The current 403 message, if the body has one.
    pub fn message_403(&self) -> Result<Option<String>> {
        Ok(self
            .lines(Selection::Only(LineKind::ErrorDocument))?
            .first()
            .and_then(Line::message))
    }

    /// Add `deny from <ip>` to the body, with `ip` written as given.
    ///
    /// An existing line for the same address, however it is spelled, counts
    /// as already denied.
    ///
    /// # Errors
    /// Returns `Error::InvalidIp` before touching the file when `ip` is not
    /// an IPv4 or IPv6 address.
    pub fn deny_ip(&self, ip: &str) -> Result<WriteOutcome> {
        let addr = parse_ip(ip)?;
        let mut body = self.read_body()?;

        if !body.iter().any(|line| line.denied_addr() == Some(addr)) {
            body.push(Line::Deny(ip.to_string()));
        }
        body.dedup();

        tracing::info!(%addr, "denying address");
        self.write_body(&body)
    }

    /// Remove the `deny from <ip>` line. Absent lines are not an error.
    pub fn undeny_ip(&self, ip: &str) -> Result<WriteOutcome> {
        let addr = parse_ip(ip)?;
        tracing::info!(%addr, "removing denial");
        self.remove_line(|line| line.denied_addr() == Some(addr))
    }

    /// Set the 403 message, placing it first in the body. An empty message
    /// removes it instead.
    pub fn edit_403_message(&self, message: &str) -> Result<WriteOutcome> {
        if message.is_empty() {
            return self.remove_403_message();
        }
        if message.contains(['\n', '\r']) {
            return Err(Error::InvalidMessage);
        }

        let body: Body = std::iter::once(Line::error_message(message))
            .chain(self.lines(Selection::Except(LineKind::ErrorDocument))?)
            .collect();
        self.write_body(&body)
    }

    /// Remove the first `ErrorDocument 403` line. Absent lines are not an error.
    pub fn remove_403_message(&self) -> Result<WriteOutcome> {
        self.remove_line(|line| line.is(LineKind::ErrorDocument))
    }

    /// Comment out every body line. Header and footer stay as they are.
    pub fn comment_lines(&self) -> Result<WriteOutcome> {
        let raw = self.raw_lines()?;
        if raw.is_empty() {
            return Ok(WriteOutcome::Unchanged);
        }

        let body: Body = Body::from_region(&raw)
            .into_lines()
            .into_iter()
            .map(Line::comment)
            .collect();
        self.write_body(&body)
    }

    /// Strip one `#` from every commented body line.
    ///
    /// Lines that were not commented are dropped from the rewritten body.
    pub fn uncomment_lines(&self) -> Result<WriteOutcome> {
        let raw = self.raw_lines()?;
        if raw.is_empty() {
            return Ok(WriteOutcome::Unchanged);
        }

        let body: Body = Body::from_region(&raw)
            .into_lines()
            .into_iter()
            .filter_map(Line::uncomment)
            .collect();
        self.write_body(&body)
    }

    /// Region lines exactly as they appear in the file.
    pub fn raw_lines(&self) -> Result<Vec<String>> {
        Ok(extract_from_markers(&self.path, &self.marker)?)
    }

    pub fn lines(&self, selection: Selection) -> Result<Vec<Line>> {
        if selection == Selection::Raw {
            return Ok(self.raw_lines()?.iter().map(|l| Line::parse(l)).collect());
        }

        let body = self.read_body()?.into_lines().into_iter();
        Ok(match selection {
            Selection::Only(kind) => body.filter(|line| line.is(kind)).collect(),
            Selection::Except(kind) => body.filter(|line| !line.is(kind)).collect(),
            Selection::Body | Selection::Raw => body.collect(),
        })
    }

    fn read_body(&self) -> Result<Body> {
        let body = Body::from_region(&self.raw_lines()?);
        tracing::debug!(path = %self.path, lines = body.len(), "read body");
        Ok(body)
    }

    fn remove_line(&self, predicate: impl Fn(&Line) -> bool) -> Result<WriteOutcome> {
        let mut body = self.read_body()?;
        match body.remove_first(predicate) {
            Some(removed) => {
                tracing::debug!(line = %removed, "removed line");
                self.write_body(&body)
            }
            None => {
                tracing::debug!(path = %self.path, "no matching line, nothing to remove");
                Ok(WriteOutcome::Unchanged)
            }
        }
    }

    fn write_body(&self, body: &Body) -> Result<WriteOutcome> {
        Ok(insert_with_markers(
            &self.path,
            &self.marker,
            &body.render(),
            self.robustness,
        )?)
    }
}

fn parse_ip(input: &str) -> Result<IpAddr> {
    input.parse().map_err(|_| Error::InvalidIp {
        input: input.to_string(),
    })
}
