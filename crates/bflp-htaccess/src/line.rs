//! Typed model of the directives kept in the region body.

use std::fmt;
use std::net::IpAddr;

const DENY_PREFIX: &str = "deny from ";
const ERROR_DOCUMENT_PREFIX: &str = "ErrorDocument 403 ";
const COMMENT_PREFIX: char = '#';

/// One body line.
///
/// Parsing is by literal, case-sensitive prefix and keeps the remainder
/// verbatim, so `Line::parse(s).to_string() == s` for every input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Line {
    /// `deny from <target>`. The target is usually an address but is kept
    /// as written so hand-edited entries like `all` survive a rewrite.
    Deny(String),
    /// `ErrorDocument 403 <argument>`, argument as written (quotes included).
    ErrorDocument(String),
    /// `#<inner>`
    Commented(Box<Line>),
    /// Anything else, verbatim.
    Other(String),
}

/// Variant tag used when selecting lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Deny,
    ErrorDocument,
}

impl Line {
    pub fn parse(raw: &str) -> Self {
        if let Some(inner) = raw.strip_prefix(COMMENT_PREFIX) {
            Self::Commented(Box::new(Self::parse(inner)))
        } else if let Some(target) = raw.strip_prefix(DENY_PREFIX) {
            Self::Deny(target.to_string())
        } else if let Some(argument) = raw.strip_prefix(ERROR_DOCUMENT_PREFIX) {
            Self::ErrorDocument(argument.to_string())
        } else {
            Self::Other(raw.to_string())
        }
    }

    /// A quoted 403 message. Embedded double quotes are backslash-escaped.
    pub fn error_message(message: &str) -> Self {
        Self::ErrorDocument(format!("\"{}\"", message.replace('"', "\\\"")))
    }

    pub fn kind(&self) -> Option<LineKind> {
        match self {
            Self::Deny(_) => Some(LineKind::Deny),
            Self::ErrorDocument(_) => Some(LineKind::ErrorDocument),
            Self::Commented(_) | Self::Other(_) => None,
        }
    }

    pub fn is(&self, kind: LineKind) -> bool {
        self.kind() == Some(kind)
    }

    /// The text after the directive prefix, for uncommented directives.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Deny(target) | Self::ErrorDocument(target) => Some(target.as_str()),
            Self::Commented(_) | Self::Other(_) => None,
        }
    }

    /// The address an uncommented `deny from` line blocks, if it parses as one.
    pub fn denied_addr(&self) -> Option<IpAddr> {
        match self {
            Self::Deny(target) => target.parse().ok(),
            _ => None,
        }
    }

    /// The 403 message with surrounding quotes and escapes removed.
    pub fn message(&self) -> Option<String> {
        let Self::ErrorDocument(argument) = self else {
            return None;
        };
        let unquoted = argument
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(argument.as_str());
        Some(unquoted.replace("\\\"", "\""))
    }

    pub fn comment(self) -> Self {
        Self::Commented(Box::new(self))
    }

    /// Strips one comment level; `None` for lines that are not commented.
    pub fn uncomment(self) -> Option<Self> {
        match self {
            Self::Commented(inner) => Some(*inner),
            _ => None,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deny(target) => write!(f, "{DENY_PREFIX}{target}"),
            Self::ErrorDocument(argument) => write!(f, "{ERROR_DOCUMENT_PREFIX}{argument}"),
            Self::Commented(inner) => write!(f, "{COMMENT_PREFIX}{inner}"),
            Self::Other(text) => f.write_str(text),
        }
    }
}
