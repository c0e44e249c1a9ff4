//! Token types for syntax highlighting
//!
//! A token type is an opaque category label. It carries no behavior of
//! its own and is only used as a key into a theme's color table.

use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque token category (e.g. "keyword", "string", "comment")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenType(Cow<'static, str>);

impl TokenType {
    pub const COMMENT: TokenType = TokenType::from_static("comment");
    pub const STRING: TokenType = TokenType::from_static("string");
    pub const CHAR: TokenType = TokenType::from_static("char");
    pub const NUMBER: TokenType = TokenType::from_static("number");
    pub const KEYWORD: TokenType = TokenType::from_static("keyword");
    pub const TYPE: TokenType = TokenType::from_static("type");
    pub const FUNCTION: TokenType = TokenType::from_static("function");
    pub const OPERATOR: TokenType = TokenType::from_static("operator");
    pub const PREPROCESSOR: TokenType = TokenType::from_static("preprocessor");
    pub const MACRO: TokenType = TokenType::from_static("macro");
    pub const CONSTANT: TokenType = TokenType::from_static("constant");
    pub const SPECIAL: TokenType = TokenType::from_static("special");
    pub const ATTRIBUTE: TokenType = TokenType::from_static("attribute");
    pub const LIFETIME: TokenType = TokenType::from_static("lifetime");
    pub const HEADING: TokenType = TokenType::from_static("heading");

    /// Create a token type from any name
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Create a token type from a static name
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Get the name of this token type
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TokenType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TokenType {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for TokenType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
