use super::parser::{FilterSpec, Pattern, Segment};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

impl Pattern {
    /// Anchored, case-sensitive wildcard match against a namespace.
    ///
    /// Runs of `*` are collapsed at parse time, so literals are always
    /// separated by exactly one wildcard and a leftmost scan is sufficient.
    pub fn matches(&self, namespace: &str) -> bool {
        let count = self.segments.len();
        let mut rest = namespace;

        for (i, segment) in self.segments.iter().enumerate() {
            let Segment::Literal(literal) = segment else {
                continue;
            };
            let first = i == 0;
            let last = i + 1 == count;

            if first && last {
                return rest == literal;
            } else if first {
                match rest.strip_prefix(literal.as_str()) {
                    Some(remaining) => rest = remaining,
                    None => return false,
                }
            } else if last {
                return rest.ends_with(literal.as_str());
            } else {
                match rest.find(literal.as_str()) {
                    Some(pos) => rest = &rest[pos + literal.len()..],
                    None => return false,
                }
            }
        }

        // Only reachable when the pattern ends with a wildcard
        true
    }
}

/// A compiled namespace filter.
///
/// Built once from a filter string and immutable afterwards. A namespace is
/// enabled when at least one positive pattern matches it and no negated
/// pattern does; negation wins regardless of where it appears.
///
/// ```
/// use nsdebug::FilterEngine;
///
/// let engine = FilterEngine::compile("app:*,-app:secret");
/// assert!(engine.enabled("app:public"));
/// assert!(!engine.enabled("app:secret"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterEngine {
    spec: FilterSpec,
}

impl FilterEngine {
    /// Compile a filter string. Never fails: malformed entries are dropped.
    pub fn compile(spec: &str) -> Self {
        FilterEngine {
            spec: FilterSpec::parse(spec),
        }
    }

    /// Decide whether `namespace` is enabled
    pub fn enabled(&self, namespace: &str) -> bool {
        let mut included = false;
        for pattern in &self.spec.patterns {
            if pattern.matches(namespace) {
                if pattern.negated {
                    return false;
                }
                included = true;
            }
        }
        included
    }

    /// All patterns in source order
    pub fn patterns(&self) -> &[Pattern] {
        &self.spec.patterns
    }

    /// Positive patterns
    pub fn includes(&self) -> impl Iterator<Item = &Pattern> {
        self.spec.patterns.iter().filter(|p| !p.negated)
    }

    /// Negated patterns
    pub fn excludes(&self) -> impl Iterator<Item = &Pattern> {
        self.spec.patterns.iter().filter(|p| p.negated)
    }

    /// True when nothing can ever be enabled because there are no patterns
    pub fn is_empty(&self) -> bool {
        self.spec.is_empty()
    }
}

impl From<&str> for FilterEngine {
    fn from(spec: &str) -> Self {
        FilterEngine::compile(spec)
    }
}

impl FromStr for FilterEngine {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FilterEngine::compile(s))
    }
}

impl fmt::Display for FilterEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec)
    }
}
