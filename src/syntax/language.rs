//! Language definitions for syntax highlighting
//!
//! A language is a named, ordered rule list plus the file extensions it
//! is detected from. Rule order is precedence order: later rules win.

use serde::{Deserialize, Serialize};

use super::rules::Rule;
use super::tokens::TokenType;

/// A complete language definition for syntax highlighting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDefinition {
    /// Language name (e.g., "rust", "python")
    pub name: String,
    /// File extensions (e.g., ["rs"], ["py", "pyw"])
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Rules in application order
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_string());
    }

    /// Append a rule; it takes precedence over every rule added before it
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append a whole-match rule
    pub fn add_pattern(&mut self, pattern: &str, token_type: TokenType) {
        self.add_rule(Rule::new(pattern, token_type));
    }
}
