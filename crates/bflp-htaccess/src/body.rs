//! The region body and the fixed wrapper around it.

use std::collections::HashSet;

use crate::line::Line;

/// Lines that open every rewritten region.
pub const HEADER: [&str; 2] = ["<Files \"*\">", "Order deny,allow"];

/// Lines that close every rewritten region.
pub const FOOTER: [&str; 1] = ["</Files>"];

/// The directives between header and footer, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    lines: Vec<Line>,
}

impl Body {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Parses raw region lines, dropping every line equal to a header or
    /// footer line wherever it appears.
    pub fn from_region<S: AsRef<str>>(raw: &[S]) -> Self {
        raw.iter()
            .map(|l| l.as_ref())
            .filter(|l| !is_wrapper(l))
            .map(Line::parse)
            .collect()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Removes and returns the first line matching `predicate`.
    pub fn remove_first(&mut self, predicate: impl Fn(&Line) -> bool) -> Option<Line> {
        let index = self.lines.iter().position(predicate)?;
        Some(self.lines.remove(index))
    }

    /// Drops repeated lines, keeping the first occurrence.
    pub fn dedup(&mut self) {
        let mut seen = HashSet::new();
        self.lines.retain(|line| seen.insert(line.clone()));
    }

    /// Header, body lines, footer.
    pub fn render(&self) -> Vec<String> {
        HEADER
            .iter()
            .map(|l| l.to_string())
            .chain(self.lines.iter().map(Line::to_string))
            .chain(FOOTER.iter().map(|l| l.to_string()))
            .collect()
    }

    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }
}

impl FromIterator<Line> for Body {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Body {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

fn is_wrapper(raw: &str) -> bool {
    HEADER.contains(&raw) || FOOTER.contains(&raw)
}
