mod palette;

pub use palette::{
    ColourEntry, PALETTE, PaletteColour, StyledLine, namespace_hash, palette_index,
};
pub(crate) use palette::prefix;

use regex::Regex;
use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

static ANSI_ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("valid ansi escape regex"));

static GLOBAL_ASSIGNER: LazyLock<ColourAssigner> = LazyLock::new(ColourAssigner::new);

/// Maps namespaces to palette colours.
///
/// The assignment is a pure function of the namespace; lookups are memoised
/// in a cache that is never evicted (namespaces come from program source, so
/// the key set stays small). A poisoned lock only disables caching.
#[derive(Debug, Default)]
pub struct ColourAssigner {
    cache: RwLock<HashMap<String, usize>>,
}

impl ColourAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colour_for(&self, namespace: &str) -> ColourEntry {
        if let Ok(cache) = self.cache.read() {
            if let Some(&index) = cache.get(namespace) {
                return ColourEntry::from_index(index);
            }
        }

        let index = palette_index(namespace);
        if let Ok(mut cache) = self.cache.write() {
            cache.entry(namespace.to_string()).or_insert(index);
        }
        ColourEntry::from_index(index)
    }

    /// The namespace wrapped in its colour escape and a reset
    pub fn colour_ns(&self, namespace: &str) -> String {
        self.colour_for(namespace).paint(namespace)
    }

    /// Number of memoised namespaces
    pub fn cached(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }
}

/// Colour for a namespace, using the process-wide assigner
pub fn colour_for(namespace: &str) -> ColourEntry {
    GLOBAL_ASSIGNER.colour_for(namespace)
}

/// Namespace wrapped in its ANSI colour, using the process-wide assigner
pub fn colour_ns(namespace: &str) -> String {
    GLOBAL_ASSIGNER.colour_ns(namespace)
}

/// Remove SGR escape sequences from a string
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE_RE.replace_all(text, "").into_owned()
}
