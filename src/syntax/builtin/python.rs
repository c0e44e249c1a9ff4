//! Python language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::TokenType;

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("python");
    lang.add_extension("py");
    lang.add_extension("pyw");
    lang.add_extension("pyi");

    // Operators
    lang.add_pattern(r"[+\-*/%&|^!<>=@~]+", TokenType::OPERATOR);

    // Numbers
    lang.add_pattern(r"\b\d[\d_]*j?\b", TokenType::NUMBER);
    lang.add_pattern(r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?j?\b", TokenType::NUMBER);
    lang.add_pattern(r"\b0[xX][0-9a-fA-F_]+\b", TokenType::NUMBER);
    lang.add_pattern(r"\b0[bB][01_]+\b", TokenType::NUMBER);
    lang.add_pattern(r"\b0[oO][0-7_]+\b", TokenType::NUMBER);

    // Built-in functions
    let builtins = r"\b(abs|all|any|ascii|bin|bool|bytearray|bytes|callable|chr|classmethod|compile|complex|delattr|dict|dir|divmod|enumerate|eval|exec|filter|float|format|frozenset|getattr|globals|hasattr|hash|help|hex|id|input|int|isinstance|issubclass|iter|len|list|locals|map|max|memoryview|min|next|object|oct|open|ord|pow|print|property|range|repr|reversed|round|set|setattr|slice|sorted|staticmethod|str|sum|super|tuple|type|vars|zip)\b";
    lang.add_pattern(builtins, TokenType::FUNCTION);

    // Function and class names after def/class
    lang.add_rule(Rule::new(r"\b(?:def|class)\s+(\w+)", TokenType::FUNCTION).with_group(1));

    // Keywords
    let keywords = r"\b(False|None|True|and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b";
    lang.add_pattern(keywords, TokenType::KEYWORD);

    // self/cls
    lang.add_pattern(r"\b(self|cls)\b", TokenType::SPECIAL);

    // Decorators
    lang.add_pattern(r"@\w+", TokenType::ATTRIBUTE);

    // Strings, with the prefix styled separately
    lang.add_pattern(r#""(?:[^"\\\n]|\\.)*""#, TokenType::STRING);
    lang.add_pattern(r"'(?:[^'\\\n]|\\.)*'", TokenType::STRING);
    lang.add_rule(Rule::new(r#"\b([fFrRbBuU]+)["']"#, TokenType::SPECIAL).with_group(1));

    // Comments
    lang.add_pattern(r"#.*", TokenType::COMMENT);

    lang
}
