use crate::colour::{ColourEntry, PALETTE, colour_for};
use crate::filter::{FilterEngine, Pattern};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color as CellColor, Table};

/// Table with the shared preset and a bold header row
pub fn create_styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

/// One row per namespace: decision plus the patterns that matched it
pub fn format_check_table(engine: &FilterEngine, namespaces: &[String]) -> String {
    let mut table = create_styled_table(&["Namespace", "Enabled", "Matched by"]);

    for namespace in namespaces {
        let enabled = engine.enabled(namespace);
        let matched: Vec<String> = engine
            .patterns()
            .iter()
            .filter(|p| p.matches(namespace))
            .map(|p| p.to_string())
            .collect();

        let decision = if enabled {
            Cell::new("yes").fg(CellColor::Green)
        } else {
            Cell::new("no").fg(CellColor::Red)
        };

        table.add_row(vec![
            Cell::new(display_namespace(namespace)),
            decision,
            Cell::new(matched.join(", ")),
        ]);
    }

    table.to_string()
}

pub fn display_check(engine: &FilterEngine, namespaces: &[String]) {
    if engine.is_empty() {
        println!("{}", "Filter is empty: every namespace is disabled".yellow());
    } else {
        println!("{} {}", "Filter:".bold(), engine);
        println!("  {} {}", "enables:".green(), join_patterns(engine.includes()));
        println!("  {} {}", "excludes:".red(), join_patterns(engine.excludes()));
    }
    println!("{}", format_check_table(engine, namespaces));
}

fn colour_row(label: String, entry: ColourEntry) -> Vec<Cell> {
    vec![
        Cell::new(label),
        Cell::new(entry.index),
        Cell::new(entry.ansi_code()),
        Cell::new(format!("#{}", entry.hex)),
    ]
}

/// Colour assignments for the given namespaces, or the palette when empty
pub fn format_colour_table(namespaces: &[String]) -> String {
    let mut table = create_styled_table(&["Namespace", "Index", "ANSI", "Hex"]);

    if namespaces.is_empty() {
        for index in 0..PALETTE.len() {
            table.add_row(colour_row(String::from("-"), ColourEntry::from_index(index)));
        }
    } else {
        for namespace in namespaces {
            table.add_row(colour_row(
                display_namespace(namespace),
                colour_for(namespace),
            ));
        }
    }

    table.to_string()
}

/// Print the colour table, then a preview line per namespace.
///
/// Previews go through `colored`, so they honour the global colour override.
pub fn display_colours(namespaces: &[String]) {
    println!("{}", format_colour_table(namespaces));
    for namespace in namespaces {
        println!("  {}", namespace.color(colour_for(namespace).color));
    }
}

fn join_patterns<'a>(patterns: impl Iterator<Item = &'a Pattern>) -> String {
    let joined: Vec<String> = patterns.map(|p| p.to_string()).collect();
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined.join(", ")
    }
}

fn display_namespace(namespace: &str) -> String {
    if namespace.is_empty() {
        "(root)".to_string()
    } else {
        namespace.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_table_lists_matches() {
        let engine = FilterEngine::compile("app:*,-app:secret");
        let out = format_check_table(
            &engine,
            &["app:init".to_string(), "app:secret".to_string()],
        );
        assert!(out.contains("app:init"));
        assert!(out.contains("-app:secret"));
        assert!(out.contains("yes"));
        assert!(out.contains("no"));
    }

    #[test]
    fn test_join_patterns_splits_by_sign() {
        let engine = FilterEngine::compile("a,-b,c");
        assert_eq!(join_patterns(engine.includes()), "a, c");
        assert_eq!(join_patterns(engine.excludes()), "-b");
        assert_eq!(join_patterns(FilterEngine::compile("a").excludes()), "(none)");
    }

    #[test]
    fn test_palette_table_has_every_slot() {
        let out = format_colour_table(&[]);
        for slot in PALETTE {
            assert!(out.contains(slot.hex));
        }
    }
}
