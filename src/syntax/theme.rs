//! Themes
//!
//! A [`Palette`] is the named color table loaded from configuration.
//! A [`Theme`] is a palette bound to a language and a concrete font, and
//! is what the highlight engine consumes.

use std::collections::HashMap;

use super::style::{Attributes, Color, Font};
use super::tokens::TokenType;

/// Named color table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    /// Color for text no rule matched
    pub default_color: Color,
    /// Token type -> color
    pub colors: HashMap<TokenType, Color>,
}

impl Palette {
    /// Create an empty palette
    pub fn new(default_color: Color) -> Self {
        Self {
            default_color,
            colors: HashMap::new(),
        }
    }

    /// Builder: map a token type to a color
    pub fn with(mut self, token_type: TokenType, color: Color) -> Self {
        self.colors.insert(token_type, color);
        self
    }
}

/// A resolved theme
///
/// Immutable once built. Every styled run uses `current_font`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub language: String,
    pub theme_name: String,
    pub font_name: String,
    pub default_color: Color,
    pub current_font: Font,
    color_table: HashMap<TokenType, Color>,
}

impl Theme {
    /// Bind a palette to a language and font
    pub fn new(language: &str, theme_name: &str, font_name: &str, palette: &Palette, font: Font) -> Self {
        Self {
            language: language.to_string(),
            theme_name: theme_name.to_string(),
            font_name: font_name.to_string(),
            default_color: palette.default_color,
            current_font: font,
            color_table: palette.colors.clone(),
        }
    }

    /// Look up the color for a token type, falling back to the default color
    pub fn resolve_color(&self, token_type: &str) -> Color {
        self.color_table
            .get(token_type)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Baseline attributes for unmatched text
    pub fn default_attributes(&self) -> Attributes {
        Attributes::new(self.default_color, self.current_font.clone())
    }

    /// Attributes for text matched as `token_type`
    pub fn attributes_for(&self, token_type: &str) -> Attributes {
        self.default_attributes().with_color(self.resolve_color(token_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_theme() -> Theme {
        let palette = Palette::new(Color::White)
            .with(TokenType::KEYWORD, Color::Magenta)
            .with(TokenType::from("A"), Color::Red);
        Theme::new("test", "test", "mono", &palette, Font::new("Menlo", 13))
    }

    #[test]
    fn test_resolve_color() {
        let theme = test_theme();
        assert_eq!(theme.resolve_color("keyword"), Color::Magenta);
        assert_eq!(theme.resolve_color("A"), Color::Red);
    }

    #[test]
    fn test_unresolved_falls_back_to_default() {
        let theme = test_theme();
        assert_eq!(theme.resolve_color("nonexistent"), Color::White);
        assert_eq!(theme.resolve_color(""), Color::White);
    }

    #[test]
    fn test_attributes_use_current_font() {
        let theme = test_theme();
        let attrs = theme.attributes_for("keyword");
        assert_eq!(attrs.font, Font::new("Menlo", 13));
        assert_eq!(theme.default_attributes().color, Color::White);
    }
}
