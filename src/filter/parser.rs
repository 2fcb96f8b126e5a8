use std::fmt;

/// One piece of a pattern body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Characters that must appear verbatim
    Literal(String),
    /// `*`: zero or more of any character
    Wildcard,
}

/// A single filter entry (e.g. "server:*" or "-app:secret")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// The pattern body split into literal and wildcard segments
    pub segments: Vec<Segment>,
    /// Whether this entry excludes namespaces (prefixed with -)
    pub negated: bool,
}

impl Pattern {
    /// Parse a single, already trimmed entry.
    ///
    /// Returns `None` for entries that carry no pattern body: the empty string
    /// and a bare `-`.
    pub fn parse(entry: &str) -> Option<Self> {
        let (negated, body) = match entry.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, entry),
        };

        if body.is_empty() {
            return None;
        }

        Some(Pattern {
            segments: split_segments(body),
            negated,
        })
    }

    /// The pattern body as written, without the negation marker
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(literal) => literal.as_str(),
                Segment::Wildcard => "*",
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "-")?;
        }
        write!(f, "{}", self.text())
    }
}

/// An ordered list of patterns parsed from one configuration string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Patterns in left-to-right source order
    pub patterns: Vec<Pattern>,
}

impl FilterSpec {
    /// Parse a filter specification such as `"app:init,app:auth,server:*"`.
    ///
    /// Entries are separated by commas and/or whitespace. Empty entries and
    /// bare `-` entries are dropped; parsing never fails.
    pub fn parse(spec: &str) -> Self {
        let patterns = split_entries(spec).filter_map(Pattern::parse).collect();
        FilterSpec { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", pattern)?;
        }
        Ok(())
    }
}

pub(crate) fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Split on separators, dropping empty pieces
fn split_entries(spec: &str) -> impl Iterator<Item = &str> {
    spec.split(is_separator).filter(|entry| !entry.is_empty())
}

/// Break a pattern body into segments, collapsing runs of `*`
fn split_segments(body: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();

    for c in body.chars() {
        if c == '*' {
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            if segments.last() != Some(&Segment::Wildcard) {
                segments.push(Segment::Wildcard);
            }
        } else {
            literal.push(c);
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}
