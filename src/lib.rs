//! hilite - incremental regex syntax highlighting
//!
//! A [`SyntaxStorage`] owns a [`TextBuffer`] and a [`HighlightEngine`].
//! Every content edit re-styles the paragraphs it touches: the span is
//! reset to the theme's default color, then each rule's matches are
//! applied in order, the last matching rule winning.
//!
//! ```
//! use hilite::{SyntaxStorage, ThemeResolver};
//!
//! let resolver = ThemeResolver::new();
//! let engine = resolver.engine_or_default("rust", "default", "system");
//! let mut storage = SyntaxStorage::with_text("let x = 1;", engine)?;
//! storage.replace(4..5, "answer")?;
//! assert_eq!(storage.text(), "let answer = 1;");
//! # Ok::<(), hilite::HighlightError>(())
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod storage;
pub mod syntax;

pub use buffer::{Edit, EditKind, TextBuffer};
pub use config::Config;
pub use error::{HighlightError, Result};
pub use storage::{EditObserver, SyntaxStorage};
pub use syntax::{
    Attributes, Color, Font, HighlightEngine, LanguageDefinition, Palette, RegexOptions, Rule,
    Theme, ThemeResolver, TokenType,
};
