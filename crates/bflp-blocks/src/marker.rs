//! Begin/end sentinel lines for a named region.

/// A region name and the sentinel lines derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    name: String,
}

impl Marker {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn begin_line(&self) -> String {
        format!("# BEGIN {}", self.name)
    }

    pub fn end_line(&self) -> String {
        format!("# END {}", self.name)
    }

    /// Surrounding whitespace is ignored so hand-indented files still match.
    pub fn is_begin(&self, line: &str) -> bool {
        line.trim() == self.begin_line()
    }

    pub fn is_end(&self, line: &str) -> bool {
        line.trim() == self.end_line()
    }
}

impl From<&str> for Marker {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
