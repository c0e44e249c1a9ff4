//! Markdown language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{RegexOptions, Rule};
use crate::syntax::tokens::TokenType;

/// Create Markdown language definition
pub fn markdown_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("markdown");
    lang.add_extension("md");
    lang.add_extension("markdown");
    lang.add_extension("mkd");

    // Italic (* or _), then bold over it
    lang.add_pattern(r"\*[^*\n]+\*", TokenType::SPECIAL);
    lang.add_pattern(r"_[^_\n]+_", TokenType::SPECIAL);
    lang.add_pattern(r"\*\*[^*\n]+\*\*", TokenType::TYPE);
    lang.add_pattern(r"__[^_\n]+__", TokenType::TYPE);

    // Links [text](url) and [text][ref]; only the text is styled
    lang.add_rule(Rule::new(r"\[([^\]\n]+)\]\([^)\n]+\)", TokenType::FUNCTION).with_group(1));
    lang.add_rule(Rule::new(r"\[([^\]\n]+)\]\[[^\]\n]*\]", TokenType::FUNCTION).with_group(1));

    // Images ![alt](url)
    lang.add_pattern(r"!\[[^\]\n]*\]\([^)\n]+\)", TokenType::MACRO);

    // Inline code
    lang.add_pattern(r"`[^`\n]+`", TokenType::STRING);

    // Line-anchored constructs
    lang.add_rule(Rule::new(r"^(?:---+|\*\*\*+|___+)[ \t]*$", TokenType::OPERATOR).with_options(RegexOptions::MULTI_LINE));
    lang.add_rule(Rule::new(r"^>[ \t]+.*$", TokenType::COMMENT).with_options(RegexOptions::MULTI_LINE));
    lang.add_rule(Rule::new(r"^#{1,6}[ \t]+.*$", TokenType::HEADING).with_options(RegexOptions::MULTI_LINE));

    lang
}
