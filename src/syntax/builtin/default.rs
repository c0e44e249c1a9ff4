//! Fallback language, palettes and font names

use crate::syntax::language::LanguageDefinition;
use crate::syntax::style::Color;
use crate::syntax::theme::Palette;
use crate::syntax::tokens::TokenType;

pub const DEFAULT_LANGUAGE: &str = "default";
pub const DEFAULT_THEME: &str = "default";
pub const DEFAULT_FONT: &str = "system";

/// Plain text: no rules
pub fn default_language() -> LanguageDefinition {
    LanguageDefinition::new(DEFAULT_LANGUAGE)
}

/// 16-color palette
pub fn default_palette() -> Palette {
    Palette::new(Color::Default)
        .with(TokenType::COMMENT, Color::BrightBlack)
        .with(TokenType::STRING, Color::Green)
        .with(TokenType::CHAR, Color::Green)
        .with(TokenType::NUMBER, Color::Cyan)
        .with(TokenType::KEYWORD, Color::Magenta)
        .with(TokenType::TYPE, Color::Yellow)
        .with(TokenType::FUNCTION, Color::Blue)
        .with(TokenType::OPERATOR, Color::BrightWhite)
        .with(TokenType::PREPROCESSOR, Color::BrightMagenta)
        .with(TokenType::MACRO, Color::BrightCyan)
        .with(TokenType::CONSTANT, Color::BrightRed)
        .with(TokenType::SPECIAL, Color::BrightYellow)
        .with(TokenType::ATTRIBUTE, Color::BrightBlue)
        .with(TokenType::LIFETIME, Color::BrightMagenta)
        .with(TokenType::HEADING, Color::BrightBlue)
}

/// Everything default except comments
pub fn monochrome_palette() -> Palette {
    Palette::new(Color::Default).with(TokenType::COMMENT, Color::BrightBlack)
}
