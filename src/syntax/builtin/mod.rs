//! Built-in assets
//!
//! Language definitions for common languages, plus the palettes and
//! fonts every resolver starts with.

mod default;
mod rust;
mod c;
mod python;
mod toml_lang;
mod markdown;

use super::language::LanguageDefinition;
use super::style::Font;
use super::theme::Palette;

pub use default::{DEFAULT_FONT, DEFAULT_LANGUAGE, DEFAULT_THEME};

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        default::default_language(),
        rust::rust_language(),
        c::c_language(),
        python::python_language(),
        toml_lang::toml_language(),
        markdown::markdown_language(),
    ]
}

/// Get all built-in palettes, keyed by theme name
pub fn all_palettes() -> Vec<(&'static str, Palette)> {
    vec![
        (DEFAULT_THEME, default::default_palette()),
        ("monochrome", default::monochrome_palette()),
    ]
}

/// Get all built-in fonts, keyed by font name
pub fn all_fonts() -> Vec<(&'static str, Font)> {
    vec![
        (DEFAULT_FONT, Font::system()),
        ("monospace", Font::new("monospace", 12)),
    ]
}
