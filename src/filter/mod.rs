//! Namespace filter parsing and matching
//!
//! A filter string selects which debug namespaces are enabled. It is read
//! once (normally from the `DEBUG` environment variable) and compiled into a
//! [`FilterEngine`].
//!
//! # Syntax
//!
//! ```text
//! pattern              Enable namespaces matching this pattern
//! -pattern             Disable namespaces matching this pattern
//! a,b c                Entries are separated by commas and/or whitespace
//! ```
//!
//! `*` matches any run of characters, including `:`. Everything else matches
//! literally and case-sensitively, and the whole namespace must match.
//! A negated match always disables, regardless of entry order.
//!
//! # Examples
//!
//! ```text
//! app:init,app:auth         Two exact namespaces
//! server:*                  Everything under server:, at any depth
//! *,-server:noisy           Everything except one namespace
//! ```

pub mod matcher;
pub mod parser;
pub mod warning;

pub use matcher::FilterEngine;
pub use parser::{FilterSpec, Pattern, Segment};
pub use warning::{FilterWarning, filter_warnings, print_filter_warnings};
