use super::parser::is_separator;
use thiserror::Error;

/// Problems noticed in a filter string.
///
/// These are advisory only: the engine compiles the same string regardless,
/// silently skipping the offending entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterWarning {
    #[error("Empty filter entry at position {position} (stray comma?)")]
    EmptyEntry { position: usize },

    #[error("Filter entry at position {position} is a bare '-' and excludes nothing")]
    BareNegation { position: usize },
}

/// Lint a raw filter string.
///
/// Entries are counted from 1, comma-separated; whitespace inside a comma
/// group splits further entries but is never itself reported. Leading and
/// trailing whitespace of the whole string is ignored, as is a single
/// trailing comma.
pub fn filter_warnings(raw: &str) -> Vec<FilterWarning> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed);

    let mut warnings = Vec::new();
    let mut position = 0;

    for group in trimmed.split(',') {
        let entries: Vec<&str> = group.split(is_separator).filter(|e| !e.is_empty()).collect();
        if entries.is_empty() {
            position += 1;
            warnings.push(FilterWarning::EmptyEntry { position });
            continue;
        }
        for entry in entries {
            position += 1;
            if entry == "-" {
                warnings.push(FilterWarning::BareNegation { position });
            }
        }
    }

    warnings
}

/// Print warnings for a filter string to stderr
///
/// Helps users spot typos in their DEBUG value.
pub fn print_filter_warnings(raw: &str) {
    for warning in filter_warnings(raw) {
        eprintln!("Warning: {}", warning);
    }
}
