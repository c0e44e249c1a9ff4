//! Style types for text rendering
//!
//! This module provides the attribute pair (color + font) stored in a
//! buffer's run map, and the run type itself.

/// Display colors (ANSI 16-color palette plus true color)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 24-bit color
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a color from a config string
    ///
    /// Accepts palette names (`red`, `bright-black`, `bright_black`) and
    /// `#rrggbb` hex triples.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }

        let name = s.to_lowercase().replace('_', "-");
        let color = match name.as_str() {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "gray" | "grey" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// A font selection
///
/// Fonts are applied uniformly to every run; they do not vary per token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    /// Family name handed to the host renderer
    pub family: String,
    /// Point size
    pub size: u16,
}

impl Font {
    /// Create a new font
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// The host's system font
    pub fn system() -> Self {
        Self::new("system", 12)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system()
    }
}

/// The (color, font) pair stored for every character
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Attributes {
    /// Foreground color
    pub color: Color,
    /// Font
    pub font: Font,
}

impl Attributes {
    /// Create a new attribute pair
    pub fn new(color: Color, font: Font) -> Self {
        Self { color, font }
    }

    /// Builder: replace the color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A maximal range sharing one attribute pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Byte offset where this run starts (inclusive)
    pub start: usize,
    /// Byte offset where this run ends (exclusive)
    pub end: usize,
    /// Attributes applied to this run
    pub attrs: Attributes,
}

impl Run {
    /// Create a new run
    pub fn new(start: usize, end: usize, attrs: Attributes) -> Self {
        Self { start, end, attrs }
    }

    /// Check if this run contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this run in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if run is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The run as a byte range
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}
