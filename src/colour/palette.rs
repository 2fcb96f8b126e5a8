use colored::Color;
use std::borrow::Cow;

/// One palette slot: the terminal colour and its web-console counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColour {
    pub color: Color,
    /// Hex triplet without the leading '#'
    pub hex: &'static str,
}

/// The fixed namespace palette.
///
/// Order is part of the assignment contract: reordering or resizing changes
/// which colour every namespace gets.
pub const PALETTE: [PaletteColour; 12] = [
    PaletteColour { color: Color::Red, hex: "e74c3c" },
    PaletteColour { color: Color::Green, hex: "2ecc71" },
    PaletteColour { color: Color::Yellow, hex: "f1c40f" },
    PaletteColour { color: Color::Blue, hex: "3498db" },
    PaletteColour { color: Color::Magenta, hex: "9b59b6" },
    PaletteColour { color: Color::Cyan, hex: "1abc9c" },
    PaletteColour { color: Color::BrightRed, hex: "ff6b6b" },
    PaletteColour { color: Color::BrightGreen, hex: "7bed9f" },
    PaletteColour { color: Color::BrightYellow, hex: "ffd93d" },
    PaletteColour { color: Color::BrightBlue, hex: "74b9ff" },
    PaletteColour { color: Color::BrightMagenta, hex: "e056fd" },
    PaletteColour { color: Color::BrightCyan, hex: "81ecec" },
];

const RESET: &str = "\x1b[0m";

/// 32-bit rolling hash over UTF-16 code units (`h = h * 31 + unit`, wrapping).
///
/// Matches the hash conventionally used by DEBUG-style loggers, so a
/// namespace keeps its colour across runs and across implementations.
pub fn namespace_hash(namespace: &str) -> i32 {
    namespace.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Palette slot for a namespace
pub fn palette_index(namespace: &str) -> usize {
    namespace_hash(namespace).unsigned_abs() as usize % PALETTE.len()
}

/// The colour assigned to a namespace, usable both as an ANSI escape and as
/// a CSS colour token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourEntry {
    pub index: usize,
    pub color: Color,
    pub hex: &'static str,
}

impl ColourEntry {
    pub fn from_index(index: usize) -> Self {
        let slot = PALETTE[index % PALETTE.len()];
        ColourEntry {
            index: index % PALETTE.len(),
            color: slot.color,
            hex: slot.hex,
        }
    }

    /// SGR foreground code, e.g. "31"
    pub fn ansi_code(&self) -> Cow<'static, str> {
        self.color.to_fg_str()
    }

    /// Opening escape sequence for this colour
    pub fn ansi_prefix(&self) -> String {
        format!("\x1b[{}m", self.ansi_code())
    }

    /// Wrap `text` in this colour and a reset, unconditionally.
    ///
    /// Unlike `colored`'s `Colorize`, this ignores the global colour override:
    /// whether to colour at all is the caller's decision.
    pub fn paint(&self, text: &str) -> String {
        format!("{}{}{}", self.ansi_prefix(), text, RESET)
    }

    /// CSS declaration for styled consoles, e.g. "color: #e74c3c"
    pub fn css(&self) -> String {
        format!("color: #{}", self.hex)
    }

    /// Build the styled-console triplet for one line
    pub fn styled(&self, namespace: &str, message: &str) -> StyledLine {
        let prefix = prefix(namespace);
        StyledLine {
            format: format!("%c{}%c{}", prefix, message),
            colour_css: self.css(),
            reset_css: StyledLine::RESET_CSS.to_string(),
            prefix_len: prefix.len(),
        }
    }
}

/// A line for consoles that take `%c` placeholders with CSS arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    /// Format string with two `%c` placeholders: before and after the namespace
    pub format: String,
    pub colour_css: String,
    pub reset_css: String,
    /// Byte length of the namespace prefix between the two placeholders
    prefix_len: usize,
}

impl StyledLine {
    pub const RESET_CSS: &'static str = "color: inherit";

    /// The line with the two style placeholders removed.
    ///
    /// Placeholders are located by position, so a `%c` inside the namespace
    /// or the message survives.
    pub fn to_plain(&self) -> String {
        let marker = "%c".len();
        let prefix_end = marker + self.prefix_len;
        match (
            self.format.get(marker..prefix_end),
            self.format.get(prefix_end + marker..),
        ) {
            (Some(namespace), Some(message)) => format!("{}{}", namespace, message),
            // format was edited after construction
            _ => self.format.clone(),
        }
    }

    /// Format string and both CSS arguments, tab-separated, for streams that
    /// hand the line to a styled console
    pub fn to_console_args(&self) -> String {
        format!("{}\t{}\t{}", self.format, self.colour_css, self.reset_css)
    }
}

/// Namespace followed by a space, or nothing for the root namespace
pub(crate) fn prefix(namespace: &str) -> String {
    if namespace.is_empty() {
        String::new()
    } else {
        format!("{} ", namespace)
    }
}
