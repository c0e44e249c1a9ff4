//! Syntax and styling module
//!
//! This module provides the highlighting pipeline:
//! - Rules and language definitions (what to match)
//! - Themes and the resolver (what colors and font to use)
//! - The engine (re-styling the paragraphs touched by an edit)

mod style;
mod tokens;
mod rules;
mod language;
mod theme;
mod resolver;
mod engine;
mod builtin;

pub use style::{Attributes, Color, Font, Run};
pub use tokens::TokenType;
pub use rules::{CompiledRule, RegexOptions, Rule};
pub use language::LanguageDefinition;
pub use theme::{Palette, Theme};
pub use resolver::ThemeResolver;
pub use engine::{paragraph_range, HighlightEngine, RuleDiagnostic, RuleProblem};
pub use builtin::{DEFAULT_FONT, DEFAULT_LANGUAGE, DEFAULT_THEME};
