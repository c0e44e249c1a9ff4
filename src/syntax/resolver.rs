//! Theme resolution
//!
//! The [`ThemeResolver`] is the registry of named assets: languages
//! (rule lists), palettes and fonts. It resolves a
//! `(language, theme, font)` selection into a [`Theme`] and builds
//! highlight engines from it.

use std::collections::HashMap;
use std::path::Path;

use super::builtin::{self, DEFAULT_FONT, DEFAULT_LANGUAGE, DEFAULT_THEME};
use super::engine::HighlightEngine;
use super::language::LanguageDefinition;
use super::style::Font;
use super::theme::{Palette, Theme};
use crate::config::Config;
use crate::error::{HighlightError, Result};

/// Registry of languages, palettes and fonts
pub struct ThemeResolver {
    /// Loaded language definitions
    languages: HashMap<String, LanguageDefinition>,
    /// Extension to language name mapping
    extension_map: HashMap<String, String>,
    /// Palettes by theme name
    palettes: HashMap<String, Palette>,
    /// Fonts by font name
    fonts: HashMap<String, Font>,
}

impl ThemeResolver {
    /// Create a resolver with the built-in assets
    pub fn new() -> Self {
        let mut resolver = Self::empty();

        for lang in builtin::all_languages() {
            resolver.add_language(lang);
        }
        for (name, palette) in builtin::all_palettes() {
            resolver.add_palette(name, palette);
        }
        for (name, font) in builtin::all_fonts() {
            resolver.add_font(name, font);
        }

        resolver
    }

    /// Create a resolver with no assets at all
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
            palettes: HashMap::new(),
            fonts: HashMap::new(),
        }
    }

    /// Add (or replace) a language definition
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let name = lang.name.clone();
        for ext in &lang.extensions {
            self.extension_map.insert(ext.to_lowercase(), name.clone());
        }
        self.languages.insert(name, lang);
    }

    /// Add (or replace) a palette
    pub fn add_palette(&mut self, name: &str, palette: Palette) {
        self.palettes.insert(name.to_string(), palette);
    }

    /// Add (or replace) a font
    pub fn add_font(&mut self, name: &str, font: Font) {
        self.fonts.insert(name.to_string(), font);
    }

    /// Register the fonts, themes and languages of a config
    pub fn apply_config(&mut self, config: &Config) -> Result<()> {
        config.apply(self)
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<&str> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(|s| s.as_str())
    }

    /// Get a language definition by name
    pub fn get_language(&self, name: &str) -> Option<&LanguageDefinition> {
        self.languages.get(name)
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// List available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.palettes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Resolve a selection into a theme
    ///
    /// Fails with `ThemeNotFound` naming the first identifier that has no
    /// registered asset.
    pub fn load(&self, language: &str, theme_name: &str, font_name: &str) -> Result<Theme> {
        if !self.languages.contains_key(language) {
            return Err(not_found("language", language));
        }
        let palette = self
            .palettes
            .get(theme_name)
            .ok_or_else(|| not_found("theme", theme_name))?;
        let font = self
            .fonts
            .get(font_name)
            .ok_or_else(|| not_found("font", font_name))?;

        Ok(Theme::new(language, theme_name, font_name, palette, font.clone()))
    }

    /// Resolve the built-in fallback selection
    ///
    /// An [`empty`](ThemeResolver::empty) resolver may lack the fallback
    /// assets, in which case the built-in definitions are used directly.
    pub fn load_default(&self) -> Theme {
        self.load(DEFAULT_LANGUAGE, DEFAULT_THEME, DEFAULT_FONT)
            .unwrap_or_else(|_| {
                let palette = self
                    .palettes
                    .get(DEFAULT_THEME)
                    .cloned()
                    .unwrap_or_else(builtin_default_palette);
                let font = self.fonts.get(DEFAULT_FONT).cloned().unwrap_or_else(Font::system);
                Theme::new(DEFAULT_LANGUAGE, DEFAULT_THEME, DEFAULT_FONT, &palette, font)
            })
    }

    /// Resolve a selection, falling back to the built-in default theme
    pub fn load_or_default(&self, language: &str, theme_name: &str, font_name: &str) -> Theme {
        match self.load(language, theme_name, font_name) {
            Ok(theme) => theme,
            Err(err) => {
                tracing::warn!(
                    language,
                    theme = theme_name,
                    font = font_name,
                    error = %err,
                    "falling back to default theme"
                );
                self.load_default()
            }
        }
    }

    /// Build an engine for a selection
    pub fn engine(&self, language: &str, theme_name: &str, font_name: &str) -> Result<HighlightEngine> {
        let theme = self.load(language, theme_name, font_name)?;
        Ok(self.engine_for_theme(theme))
    }

    /// Build an engine for a selection, falling back to the default theme
    pub fn engine_or_default(&self, language: &str, theme_name: &str, font_name: &str) -> HighlightEngine {
        let theme = self.load_or_default(language, theme_name, font_name);
        self.engine_for_theme(theme)
    }

    /// Build an engine using the language detected from a filename
    pub fn engine_for_path(&self, filename: &Path, theme_name: &str, font_name: &str) -> HighlightEngine {
        let language = self
            .detect_language(filename)
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string();
        self.engine_or_default(&language, theme_name, font_name)
    }

    /// Build an engine from a resolved theme, using its language's rules
    pub fn engine_for_theme(&self, theme: Theme) -> HighlightEngine {
        let rules = self
            .get_language(&theme.language)
            .map(|lang| lang.rules.clone())
            .unwrap_or_default();
        HighlightEngine::new(rules, theme)
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(kind: &'static str, name: &str) -> HighlightError {
    HighlightError::ThemeNotFound {
        kind,
        name: name.to_string(),
    }
}

fn builtin_default_palette() -> Palette {
    builtin::all_palettes()
        .into_iter()
        .find(|(name, _)| *name == DEFAULT_THEME)
        .map(|(_, palette)| palette)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::style::Color;
    use crate::syntax::tokens::TokenType;

    #[test]
    fn test_detect_language() {
        let resolver = ThemeResolver::new();

        assert_eq!(resolver.detect_language(Path::new("main.rs")), Some("rust"));
        assert_eq!(resolver.detect_language(Path::new("test.py")), Some("python"));
        assert_eq!(resolver.detect_language(Path::new("Cargo.toml")), Some("toml"));
        assert_eq!(resolver.detect_language(Path::new("README.MD")), Some("markdown"));
        assert_eq!(resolver.detect_language(Path::new("main.c")), Some("c"));
        assert_eq!(resolver.detect_language(Path::new("no_extension")), None);
    }

    #[test]
    fn test_list_languages() {
        let resolver = ThemeResolver::new();
        assert_eq!(
            resolver.list_languages(),
            vec!["c", "default", "markdown", "python", "rust", "toml"]
        );
        assert!(ThemeResolver::empty().list_languages().is_empty());
    }

    #[test]
    fn test_load_builtin() {
        let resolver = ThemeResolver::new();
        let theme = resolver.load("rust", "default", "monospace").unwrap();

        assert_eq!(theme.language, "rust");
        assert_eq!(theme.current_font.family, "monospace");
        assert_eq!(theme.resolve_color("keyword"), Color::Magenta);
    }

    #[test]
    fn test_load_not_found() {
        let resolver = ThemeResolver::new();

        let err = resolver.load("cobol", "default", "system").unwrap_err();
        assert!(matches!(err, HighlightError::ThemeNotFound { kind: "language", .. }));

        let err = resolver.load("rust", "solarized", "system").unwrap_err();
        assert!(matches!(err, HighlightError::ThemeNotFound { kind: "theme", .. }));

        let err = resolver.load("rust", "default", "Comic Sans").unwrap_err();
        assert!(matches!(err, HighlightError::ThemeNotFound { kind: "font", .. }));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let resolver = ThemeResolver::new();
        let theme = resolver.load_or_default("rust", "missing", "system");

        assert_eq!(theme.language, "default");
        assert_eq!(theme.theme_name, "default");
        assert_eq!(theme.font_name, "system");
    }

    #[test]
    fn test_load_default_on_empty_resolver() {
        let resolver = ThemeResolver::empty();
        let theme = resolver.load_default();

        assert_eq!(theme.theme_name, "default");
        assert_eq!(theme.current_font, Font::system());
        assert_eq!(theme.resolve_color("comment"), Color::BrightBlack);
    }

    #[test]
    fn test_custom_palette() {
        let mut resolver = ThemeResolver::new();
        resolver.add_palette(
            "solarized",
            Palette::new(Color::Rgb(0x83, 0x94, 0x96)).with(TokenType::KEYWORD, Color::Rgb(0x85, 0x99, 0x00)),
        );

        let theme = resolver.load("default", "solarized", "system").unwrap();
        assert_eq!(theme.resolve_color("keyword"), Color::Rgb(0x85, 0x99, 0x00));
        assert_eq!(theme.resolve_color("string"), Color::Rgb(0x83, 0x94, 0x96));
        assert!(resolver.list_themes().contains(&"solarized"));
    }

    #[test]
    fn test_engine_for_path_uses_language_rules() {
        let resolver = ThemeResolver::new();
        let engine = resolver.engine_for_path(Path::new("lib.rs"), "default", "system");
        assert_eq!(engine.theme().language, "rust");
        assert!(!engine.rules().is_empty());

        let plain = resolver.engine_for_path(Path::new("notes"), "default", "system");
        assert_eq!(plain.theme().language, "default");
        assert!(plain.rules().is_empty());
    }
}
