//! Pattern rules for syntax highlighting
//!
//! This module defines the rule types used to match source text.
//! A [`Rule`] is plain data; a [`CompiledRule`] pairs it with the regex
//! compiled once when the rule list is loaded.

use std::ops::Range;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::tokens::TokenType;
use crate::error::{HighlightError, Result};

/// Regex compilation flags for a rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegexOptions {
    /// `(?i)`
    pub case_insensitive: bool,
    /// `(?m)`: `^` and `$` match at line boundaries
    pub multi_line: bool,
    /// `(?s)`: `.` matches `\n`
    pub dot_matches_new_line: bool,
    /// `(?x)`: whitespace and `#` comments in the pattern are ignored
    pub ignore_whitespace: bool,
}

impl RegexOptions {
    /// Only `multi_line` set, for rules anchored with `^` / `$`
    pub const MULTI_LINE: RegexOptions = RegexOptions {
        case_insensitive: false,
        multi_line: true,
        dot_matches_new_line: false,
        ignore_whitespace: false,
    };

    fn apply(&self, builder: &mut RegexBuilder) {
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace);
    }
}

/// A single ordered lexical rule
///
/// Rules are applied in declaration order; a later rule overwrites the
/// styling of an earlier one wherever their matches overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Regex source
    pub pattern: String,
    /// Capture group receiving the styling (0 = whole match)
    #[serde(default)]
    pub group: usize,
    /// Compilation flags
    #[serde(default)]
    pub options: RegexOptions,
    /// Token type used to look up the color
    #[serde(rename = "token")]
    pub token_type: TokenType,
}

impl Rule {
    /// Create a rule styling the whole match
    pub fn new(pattern: impl Into<String>, token_type: impl Into<TokenType>) -> Self {
        Self {
            pattern: pattern.into(),
            group: 0,
            options: RegexOptions::default(),
            token_type: token_type.into(),
        }
    }

    /// Builder: style only the given capture group
    pub fn with_group(mut self, group: usize) -> Self {
        self.group = group;
        self
    }

    /// Builder: set compilation flags
    pub fn with_options(mut self, options: RegexOptions) -> Self {
        self.options = options;
        self
    }

    /// Compile the rule's pattern
    ///
    /// With flags set, the flagged form replaces the plain one: if it fails
    /// to compile the rule has no regex, even when the plain pattern is
    /// valid.
    pub fn compile(&self) -> Result<Regex> {
        let mut builder = RegexBuilder::new(&self.pattern);
        self.options.apply(&mut builder);
        builder.build().map_err(|source| HighlightError::PatternCompile {
            pattern: self.pattern.clone(),
            source,
        })
    }
}

/// A rule together with its compiled pattern
///
/// `regex` is `None` when the pattern failed to compile; such a rule
/// contributes no matches.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: Rule,
    pub regex: Option<Regex>,
}

impl CompiledRule {
    /// Compile a rule, keeping the error for diagnostics
    pub fn compile(rule: Rule) -> (Self, Option<HighlightError>) {
        match rule.compile() {
            Ok(regex) => (Self { rule, regex: Some(regex) }, None),
            Err(err) => (Self { rule, regex: None }, Some(err)),
        }
    }

    /// Check whether the designated group exists in the compiled pattern
    pub fn has_group(&self) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| self.rule.group < regex.captures_len())
    }

    /// Find the styled range of every match in `text`
    ///
    /// Returned ranges are relative to `text`. Matches whose designated
    /// group did not participate are skipped.
    pub fn match_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };

        let group = self.rule.group;
        let mut ranges = Vec::new();
        if group == 0 {
            ranges.extend(regex.find_iter(text).map(|m| m.range()));
            return ranges;
        }

        for caps in regex.captures_iter(text) {
            match caps.get(group) {
                Some(m) => ranges.push(m.range()),
                None => tracing::trace!(
                    pattern = %self.rule.pattern,
                    group,
                    at = caps.get(0).map_or(0, |m| m.start()),
                    "capture group did not participate, skipping match"
                ),
            }
        }
        ranges
    }
}
