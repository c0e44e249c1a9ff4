//! Configuration file support
//!
//! Loads settings from ~/.hilite.toml (or %USERPROFILE%\.hilite.toml on Windows)
//!
//! Example:
//! ```text
//! language = "rust"
//! theme = "solarized"
//! font = "mono"
//!
//! [fonts.mono]
//! family = "Menlo"
//! size = 13
//!
//! [themes.solarized]
//! default = "#839496"
//! colors = { keyword = "#859900", comment = "bright-black" }
//!
//! [[languages]]
//! name = "ini"
//! extensions = ["ini"]
//! rules = [{ pattern = '^\[.*\]$', token = "keyword", options = { multi_line = true } }]
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{HighlightError, Result};
use crate::syntax::{
    Color, Font, HighlightEngine, LanguageDefinition, Palette, ThemeResolver, TokenType,
    DEFAULT_FONT, DEFAULT_LANGUAGE, DEFAULT_THEME,
};

/// Font entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontConfig {
    pub family: String,
    #[serde(default = "default_font_size")]
    pub size: u16,
}

fn default_font_size() -> u16 {
    12
}

/// Theme entry; colors are names or `#rrggbb`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color for unmatched text
    pub default: Option<String>,
    /// Token type -> color
    pub colors: HashMap<String, String>,
}

impl ThemeConfig {
    /// Build the palette, rejecting unknown colors
    pub fn to_palette(&self, theme_name: &str) -> Result<Palette> {
        let invalid = |key: &str, value: &str| {
            HighlightError::Config(format!(
                "invalid color `{value}` for `{key}` in theme `{theme_name}`"
            ))
        };

        let default_color = match &self.default {
            Some(value) => Color::parse(value).ok_or_else(|| invalid("default", value.as_str()))?,
            None => Color::Default,
        };

        let mut palette = Palette::new(default_color);
        for (token, value) in &self.colors {
            let color = Color::parse(value).ok_or_else(|| invalid(token.as_str(), value.as_str()))?;
            palette.colors.insert(TokenType::new(token.as_str()), color);
        }
        Ok(palette)
    }
}

/// Configuration settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selected language
    pub language: Option<String>,
    /// Selected theme
    pub theme: Option<String>,
    /// Selected font
    pub font: Option<String>,
    /// Extra fonts by name
    pub fonts: HashMap<String, FontConfig>,
    /// Extra themes by name
    pub themes: HashMap<String, ThemeConfig>,
    /// Extra languages
    pub languages: Vec<LanguageDefinition>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".hilite.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".hilite.toml"))
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load the user's configuration, or defaults when there is none
    pub fn load_default() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// The selected `(language, theme, font)`, with unset entries defaulted
    pub fn selection(&self) -> (&str, &str, &str) {
        (
            self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE),
            self.theme.as_deref().unwrap_or(DEFAULT_THEME),
            self.font.as_deref().unwrap_or(DEFAULT_FONT),
        )
    }

    /// Register this config's fonts, themes and languages
    ///
    /// Every theme is validated before anything is registered, so a bad
    /// color leaves the resolver untouched.
    pub fn apply(&self, resolver: &mut ThemeResolver) -> Result<()> {
        let palettes = self
            .themes
            .iter()
            .map(|(name, theme)| theme.to_palette(name).map(|palette| (name.as_str(), palette)))
            .collect::<Result<Vec<_>>>()?;

        for (name, font) in &self.fonts {
            resolver.add_font(name, Font::new(font.family.clone(), font.size));
        }
        for (name, palette) in palettes {
            resolver.add_palette(name, palette);
        }
        for lang in &self.languages {
            resolver.add_language(lang.clone());
        }
        Ok(())
    }

    /// Build the engine for this config's selection
    pub fn engine(&self, resolver: &ThemeResolver) -> HighlightEngine {
        let (language, theme, font) = self.selection();
        resolver.engine_or_default(language, theme, font)
    }
}
