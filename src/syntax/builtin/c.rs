//! C/C++ language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{RegexOptions, Rule};
use crate::syntax::tokens::TokenType;

/// Create C language definition (also works for C++)
pub fn c_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("c");
    lang.add_extension("c");
    lang.add_extension("h");
    lang.add_extension("cpp");
    lang.add_extension("hpp");
    lang.add_extension("cc");
    lang.add_extension("cxx");

    // Operators
    lang.add_pattern(r"[+\-*/%&|^!<>=~?:]+", TokenType::OPERATOR);

    // Numbers
    lang.add_pattern(r"\b\d+[uUlL]*\b", TokenType::NUMBER);
    lang.add_pattern(r"\b\d*\.\d+(?:[eE][+-]?\d+)?[fFlL]?\b", TokenType::NUMBER);
    lang.add_pattern(r"\b\d+\.\d*(?:[eE][+-]?\d+)?[fFlL]?\b", TokenType::NUMBER);
    lang.add_pattern(r"\b0[xX][0-9a-fA-F]+[uUlL]*\b", TokenType::NUMBER);

    // Type names (standard types)
    let types = r"\b(size_t|ptrdiff_t|intptr_t|uintptr_t|int8_t|int16_t|int32_t|int64_t|uint8_t|uint16_t|uint32_t|uint64_t|FILE|NULL)\b";
    lang.add_pattern(types, TokenType::TYPE);

    // C++ keywords
    let cpp_keywords = r"\b(alignas|alignof|and|and_eq|asm|bitand|bitor|bool|catch|class|compl|concept|consteval|constexpr|constinit|const_cast|co_await|co_return|co_yield|decltype|delete|dynamic_cast|explicit|export|false|friend|mutable|namespace|new|noexcept|not|not_eq|nullptr|operator|or|or_eq|private|protected|public|reinterpret_cast|requires|static_assert|static_cast|template|this|thread_local|throw|true|try|typeid|typename|using|virtual|xor|xor_eq)\b";
    lang.add_pattern(cpp_keywords, TokenType::KEYWORD);

    // Keywords
    let keywords = r"\b(auto|break|case|char|const|continue|default|do|double|else|enum|extern|float|for|goto|if|inline|int|long|register|restrict|return|short|signed|sizeof|static|struct|switch|typedef|union|unsigned|void|volatile|while|_Alignas|_Alignof|_Atomic|_Bool|_Complex|_Generic|_Imaginary|_Noreturn|_Static_assert|_Thread_local)\b";
    lang.add_pattern(keywords, TokenType::KEYWORD);

    // Character literals and strings
    lang.add_pattern(r"'(?:[^'\\\n]|\\.)'", TokenType::CHAR);
    lang.add_pattern(r#""(?:[^"\\\n]|\\.)*""#, TokenType::STRING);

    // Preprocessor directives
    lang.add_rule(Rule::new(r"^[ \t]*#[ \t]*\w+", TokenType::PREPROCESSOR).with_options(RegexOptions::MULTI_LINE));

    // Comments
    lang.add_pattern(r"/\*.*?\*/", TokenType::COMMENT);
    lang.add_pattern(r"//.*", TokenType::COMMENT);

    lang
}
