//! Rust language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::TokenType;

/// Create Rust language definition
pub fn rust_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("rust");
    lang.add_extension("rs");

    // Lowest precedence first: each rule overwrites the ones above it

    // Operators
    lang.add_pattern(r"[+\-*/%&|^!<>=@]+", TokenType::OPERATOR);

    // Numbers
    lang.add_pattern(r"\b\d[\d_]*(?:u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize)?\b", TokenType::NUMBER);
    lang.add_pattern(r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?\b", TokenType::NUMBER);
    lang.add_pattern(r"\b0x[0-9a-fA-F_]+\b", TokenType::NUMBER);
    lang.add_pattern(r"\b0b[01_]+\b", TokenType::NUMBER);
    lang.add_pattern(r"\b0o[0-7_]+\b", TokenType::NUMBER);

    // Type names (capitalized identifiers), then built-in types
    lang.add_pattern(r"\b[A-Z][a-zA-Z0-9_]*\b", TokenType::TYPE);
    let types = r"\b(bool|char|str|u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize|f32|f64|String|Vec|Box|Rc|Arc|Option|Result|Some|None|Ok|Err)\b";
    lang.add_pattern(types, TokenType::TYPE);

    // Function definitions: only the name
    lang.add_rule(Rule::new(r"\bfn\s+(\w+)", TokenType::FUNCTION).with_group(1));

    // Keywords
    let keywords = r"\b(as|async|await|break|const|continue|crate|dyn|else|enum|extern|false|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|self|Self|static|struct|super|trait|true|type|union|unsafe|use|where|while)\b";
    lang.add_pattern(keywords, TokenType::KEYWORD);

    // Macros (ending with !)
    lang.add_pattern(r"\b\w+!", TokenType::MACRO);

    // Lifetimes, then character literals over them
    lang.add_pattern(r"'\w+", TokenType::LIFETIME);
    lang.add_pattern(r"'(?:[^'\\\n]|\\.)'", TokenType::CHAR);

    // Attributes
    lang.add_pattern(r"#!?\[[^\]\n]*\]", TokenType::ATTRIBUTE);

    // Strings
    lang.add_pattern(r#""(?:[^"\\\n]|\\.)*""#, TokenType::STRING);

    // Comments (highest precedence)
    lang.add_pattern(r"/\*.*?\*/", TokenType::COMMENT);
    lang.add_pattern(r"//.*", TokenType::COMMENT);

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::CompiledRule;

    #[test]
    fn test_all_rules_compile() {
        for rule in rust_language().rules {
            let pattern = rule.pattern.clone();
            let (_, err) = CompiledRule::compile(rule);
            assert!(err.is_none(), "failed to compile {pattern}");
        }
    }

    #[test]
    fn test_comment_is_last() {
        let lang = rust_language();
        assert_eq!(lang.rules.last().map(|r| &r.token_type), Some(&TokenType::COMMENT));
    }
}
