//! TOML language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{RegexOptions, Rule};
use crate::syntax::tokens::TokenType;

/// Create TOML language definition
pub fn toml_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("toml");
    lang.add_extension("toml");

    // Numbers
    lang.add_pattern(r"\b[+-]?\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?\b", TokenType::NUMBER);
    lang.add_pattern(r"\b0x[0-9a-fA-F_]+\b", TokenType::NUMBER);
    lang.add_pattern(r"\b0b[01_]+\b", TokenType::NUMBER);
    lang.add_pattern(r"\b0o[0-7_]+\b", TokenType::NUMBER);

    // Dates/times
    lang.add_pattern(r"\d{2}:\d{2}:\d{2}(?:\.\d+)?", TokenType::NUMBER);
    lang.add_pattern(r"\d{4}-\d{2}-\d{2}(?:T\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})?)?", TokenType::NUMBER);

    // Booleans
    lang.add_pattern(r"\b(true|false)\b", TokenType::CONSTANT);

    // Keys (before = sign)
    lang.add_rule(Rule::new(r"^[ \t]*([\w\-\.]+)[ \t]*=", TokenType::TYPE).with_group(1).with_options(RegexOptions::MULTI_LINE));

    // Table headers
    lang.add_rule(Rule::new(r"^[ \t]*\[\[?[^\]\n]+\]\]?", TokenType::KEYWORD).with_options(RegexOptions::MULTI_LINE));

    // Strings
    lang.add_pattern(r#""(?:[^"\\\n]|\\.)*""#, TokenType::STRING);
    lang.add_pattern(r"'[^'\n]*'", TokenType::STRING);

    // Comments
    lang.add_pattern(r"#.*", TokenType::COMMENT);

    lang
}
