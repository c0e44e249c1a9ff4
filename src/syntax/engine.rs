//! Highlight engine
//!
//! Re-styles the paragraphs touched by an edit. A pass resets its span to
//! the theme's default attributes, then applies every rule's matches in
//! declaration order, so the last rule to match a character decides its
//! color.

use std::ops::Range;

use super::rules::{CompiledRule, Rule};
use super::theme::Theme;
use crate::buffer::TextBuffer;
use crate::error::{HighlightError, Result};

/// A problem found while loading a rule
#[derive(Debug)]
pub struct RuleDiagnostic {
    /// Position of the rule in the rule list
    pub rule_index: usize,
    pub pattern: String,
    pub error: RuleProblem,
}

/// Why a rule will never style anything
#[derive(Debug)]
pub enum RuleProblem {
    /// The pattern failed to compile
    Compile(HighlightError),
    /// The pattern has fewer capture groups than the rule's `group`
    MissingGroup { group: usize, groups: usize },
}

/// Regex-driven highlighter over a borrowed [`TextBuffer`]
#[derive(Debug)]
pub struct HighlightEngine {
    rules: Vec<CompiledRule>,
    theme: Theme,
    diagnostics: Vec<RuleDiagnostic>,
}

impl HighlightEngine {
    /// Create an engine, compiling every rule once
    ///
    /// Rules that fail to compile are kept but never match; they are
    /// reported through [`HighlightEngine::diagnostics`].
    pub fn new(rules: Vec<Rule>, theme: Theme) -> Self {
        let mut compiled = Vec::with_capacity(rules.len());
        let mut diagnostics = Vec::new();

        for (rule_index, rule) in rules.into_iter().enumerate() {
            let (rule, err) = CompiledRule::compile(rule);
            let pattern = rule.rule.pattern.clone();

            if let Some(err) = err {
                tracing::warn!(rule_index, %pattern, error = %err, "skipping rule");
                diagnostics.push(RuleDiagnostic {
                    rule_index,
                    pattern,
                    error: RuleProblem::Compile(err),
                });
            } else if let Some(regex) = rule.regex.as_ref().filter(|_| !rule.has_group()) {
                let groups = regex.captures_len();
                let group = rule.rule.group;
                tracing::warn!(rule_index, %pattern, group, groups, "rule styles a group the pattern does not have");
                diagnostics.push(RuleDiagnostic {
                    rule_index,
                    pattern,
                    error: RuleProblem::MissingGroup { group, groups },
                });
            }

            compiled.push(rule);
        }

        Self {
            rules: compiled,
            theme,
            diagnostics,
        }
    }

    /// Compiled rules, in application order
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Swap the theme, keeping the compiled rules
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Problems found while loading the rule list
    pub fn diagnostics(&self) -> &[RuleDiagnostic] {
        &self.diagnostics
    }

    /// Re-highlight after an edit of `changed`
    ///
    /// Returns the span that was re-highlighted: `changed` grown to whole
    /// paragraphs.
    pub fn on_edit(&self, buffer: &mut TextBuffer, changed: Range<usize>) -> Result<Range<usize>> {
        let span = paragraph_range(buffer.text(), changed)?;
        self.highlight(buffer, span.clone())?;
        Ok(span)
    }

    /// Re-highlight the whole buffer
    pub fn highlight_all(&self, buffer: &mut TextBuffer) -> Result<()> {
        let len = buffer.len();
        self.highlight(buffer, 0..len)
    }

    /// Reset `span` to default styling and apply every rule within it
    ///
    /// Rules run on one paragraph at a time, so no match crosses a line
    /// break and `^`, `$` and `\b` treat the paragraph's ends as the ends
    /// of the text. `span` should start at a paragraph start.
    pub fn highlight(&self, buffer: &mut TextBuffer, span: Range<usize>) -> Result<()> {
        let text = buffer.slice(span.clone())?.to_string();
        tracing::debug!(start = span.start, end = span.end, rules = self.rules.len(), "highlight pass");

        buffer.paint(self.theme.default_attributes(), span.clone())?;

        for paragraph in paragraphs(&text) {
            let line = &text[paragraph.clone()];
            let base = span.start + paragraph.start;
            for compiled in &self.rules {
                let ranges = compiled.match_ranges(line);
                if ranges.is_empty() {
                    continue;
                }
                let attrs = self.theme.attributes_for(compiled.rule.token_type.name());
                for range in ranges {
                    buffer.paint(attrs.clone(), base + range.start..base + range.end)?;
                }
            }
        }

        if !span.is_empty() {
            buffer.restyled(span);
        }
        Ok(())
    }
}

/// Line terminators: `\n`, `\r` (and `\r\n`), U+2028, U+2029
fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Split `text` into paragraphs, each keeping its terminator
fn paragraphs(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        let mut end = i + ch.len_utf8();
        if ch == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            chars.next();
            end += 1;
        }
        ranges.push(start..end);
        start = end;
    }
    if start < text.len() {
        ranges.push(start..text.len());
    }
    ranges
}

/// Grow `range` to the whole paragraphs it touches
///
/// The result starts after the line break preceding `range.start` and
/// ends after the line break terminating the last touched paragraph (or
/// at the end of the text). Fails with `InvalidRange` if `range` is out of
/// bounds or splits a character.
pub fn paragraph_range(text: &str, range: Range<usize>) -> Result<Range<usize>> {
    let valid = range.start <= range.end
        && range.end <= text.len()
        && text.is_char_boundary(range.start)
        && text.is_char_boundary(range.end);
    if !valid {
        return Err(HighlightError::InvalidRange {
            start: range.start,
            end: range.end,
            len: text.len(),
        });
    }

    let start = text[..range.start]
        .char_indices()
        .rev()
        .find(|&(_, ch)| is_line_break(ch))
        .map_or(0, |(i, ch)| i + ch.len_utf8());

    // A range already ending on a terminator keeps that end
    let ends_on_break = text[range.start..range.end]
        .chars()
        .next_back()
        .is_some_and(is_line_break);

    let end = if ends_on_break {
        range.end
    } else {
        text[range.end..]
            .char_indices()
            .find(|&(_, ch)| is_line_break(ch))
            .map_or(text.len(), |(i, ch)| range.end + i + ch.len_utf8())
    };

    // Keep a CRLF pair together
    let end = if text[..end].ends_with('\r') && text[end..].starts_with('\n') {
        end + 1
    } else {
        end
    };

    Ok(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::style::{Attributes, Color, Font};
    use crate::syntax::theme::Palette;
    use crate::syntax::tokens::TokenType;

    fn theme() -> Theme {
        let palette = Palette::new(Color::White)
            .with(TokenType::KEYWORD, Color::Magenta)
            .with(TokenType::COMMENT, Color::BrightBlack)
            .with(TokenType::from("A"), Color::Red)
            .with(TokenType::from("B"), Color::Blue);
        Theme::new("test", "test", "system", &palette, Font::system())
    }

    fn buffer(text: &str) -> TextBuffer {
        TextBuffer::with_text(text, Attributes::default())
    }

    fn color_at(buf: &TextBuffer, offset: usize) -> Color {
        buf.attributes_at(offset).unwrap().color
    }

    #[test]
    fn test_paragraph_range() {
        let text = "one\ntwo\nthree";
        assert_eq!(paragraph_range(text, 5..6).unwrap(), 4..8);
        assert_eq!(paragraph_range(text, 0..0).unwrap(), 0..4);
        assert_eq!(paragraph_range(text, 9..9).unwrap(), 8..13);
        assert_eq!(paragraph_range(text, 13..13).unwrap(), 8..13);
        assert_eq!(paragraph_range(text, 2..6).unwrap(), 0..8);
        // Ending right after a terminator stays in the first paragraph
        assert_eq!(paragraph_range(text, 0..4).unwrap(), 0..4);
    }

    #[test]
    fn test_paragraph_range_terminators() {
        assert_eq!(paragraph_range("ab\r\ncd", 0..1).unwrap(), 0..4);
        assert_eq!(paragraph_range("ab\r\ncd", 4..5).unwrap(), 4..6);
        assert_eq!(paragraph_range("ab\u{2029}cd", 5..5).unwrap(), 5..7);
        assert_eq!(paragraph_range("ab\u{2029}cd", 0..1).unwrap(), 0..5);
        assert_eq!(paragraph_range("", 0..0).unwrap(), 0..0);
    }

    #[test]
    fn test_paragraph_range_rejects_bad_range() {
        assert!(matches!(
            paragraph_range("abc", 2..9),
            Err(HighlightError::InvalidRange { start: 2, end: 9, len: 3 })
        ));
        assert!(paragraph_range("abc", 2..1).is_err());
        // Inside the three-byte U+2029
        assert!(paragraph_range("ab\u{2029}cd", 3..3).is_err());
    }

    #[test]
    fn test_paragraphs_split() {
        assert_eq!(paragraphs("a\nb\r\nc\rd"), vec![0..2, 2..5, 5..7, 7..8]);
        assert_eq!(paragraphs("x\u{2028}y\u{2029}"), vec![0..4, 4..8]);
        assert_eq!(paragraphs("a\n\n"), vec![0..2, 2..3]);
        assert!(paragraphs("").is_empty());
    }

    #[test]
    fn test_keyword_scenario() {
        let engine = HighlightEngine::new(vec![Rule::new("let", TokenType::KEYWORD)], theme());
        let mut buf = buffer("let x = 1");
        engine.highlight_all(&mut buf).unwrap();

        let (attrs, range) = buf.attributes_at_effective(0).unwrap();
        assert_eq!(attrs.color, Color::Magenta);
        assert_eq!(range, 0..3);
        let (attrs, range) = buf.attributes_at_effective(3).unwrap();
        assert_eq!(attrs.color, Color::White);
        assert_eq!(range, 3..9);
    }

    #[test]
    fn test_comment_scenario() {
        let engine = HighlightEngine::new(vec![Rule::new("//.*", TokenType::COMMENT)], theme());
        let mut buf = buffer("// comment");
        engine.highlight_all(&mut buf).unwrap();

        let (attrs, range) = buf.attributes_at_effective(4).unwrap();
        assert_eq!(attrs.color, Color::BrightBlack);
        assert_eq!(range, 0..10);
    }

    #[test]
    fn test_later_rule_wins() {
        let rules = vec![Rule::new(r"\bfoo\b", "A"), Rule::new("foo", "B")];
        let engine = HighlightEngine::new(rules, theme());
        let mut buf = buffer("foo");
        engine.highlight_all(&mut buf).unwrap();

        assert_eq!(buf.runs().len(), 1);
        assert_eq!(color_at(&buf, 0), Color::Blue);
    }

    #[test]
    fn test_later_rule_wins_on_partial_overlap() {
        let rules = vec![Rule::new("abcd", "A"), Rule::new("cd", "B")];
        let engine = HighlightEngine::new(rules, theme());
        let mut buf = buffer("abcd");
        engine.highlight_all(&mut buf).unwrap();

        assert_eq!(color_at(&buf, 1), Color::Red);
        assert_eq!(color_at(&buf, 2), Color::Blue);
        assert_eq!(color_at(&buf, 3), Color::Blue);
    }

    #[test]
    fn test_capture_group_scenario() {
        let engine = HighlightEngine::new(vec![Rule::new("(foo)bar", "A").with_group(1)], theme());
        let mut buf = buffer("foobar");
        engine.highlight_all(&mut buf).unwrap();

        assert_eq!(buf.attributes_at_effective(0).unwrap().1, 0..3);
        assert_eq!(color_at(&buf, 0), Color::Red);
        assert_eq!(color_at(&buf, 3), Color::White);
    }

    #[test]
    fn test_invalid_pattern_isolated() {
        let rules = vec![Rule::new("(unclosed", "A"), Rule::new("let", TokenType::KEYWORD)];
        let engine = HighlightEngine::new(rules, theme());
        assert_eq!(engine.diagnostics().len(), 1);
        assert_eq!(engine.diagnostics()[0].rule_index, 0);
        assert!(matches!(engine.diagnostics()[0].error, RuleProblem::Compile(_)));

        let mut buf = buffer("let (unclosed");
        engine.highlight_all(&mut buf).unwrap();
        assert_eq!(color_at(&buf, 0), Color::Magenta);
        assert_eq!(color_at(&buf, 5), Color::White);
    }

    #[test]
    fn test_missing_group_reported() {
        let engine = HighlightEngine::new(vec![Rule::new("foo", "A").with_group(3)], theme());
        assert!(matches!(
            engine.diagnostics()[0].error,
            RuleProblem::MissingGroup { group: 3, groups: 1 }
        ));

        let mut buf = buffer("foo");
        engine.highlight_all(&mut buf).unwrap();
        assert_eq!(color_at(&buf, 0), Color::White);
    }

    #[test]
    fn test_reset_erases_stale_styling() {
        let engine = HighlightEngine::new(vec![Rule::new("let", TokenType::KEYWORD)], theme());
        let mut buf = buffer("let x");
        buf.set_attributes(Attributes::new(Color::Green, Font::system()), 0..5).unwrap();
        engine.highlight_all(&mut buf).unwrap();

        assert_eq!(color_at(&buf, 0), Color::Magenta);
        assert_eq!(color_at(&buf, 4), Color::White);
    }

    #[test]
    fn test_on_edit_scoped_to_paragraph() {
        let engine = HighlightEngine::new(vec![Rule::new("let", TokenType::KEYWORD)], theme());
        let mut buf = buffer("let a\nlet b\nlet c");

        let span = engine.on_edit(&mut buf, 8..8).unwrap();
        assert_eq!(span, 6..12);
        assert_eq!(color_at(&buf, 6), Color::Magenta);
        // Untouched paragraphs keep their old styling
        assert_eq!(color_at(&buf, 0), Color::Default);
        assert_eq!(color_at(&buf, 12), Color::Default);
    }

    #[test]
    fn test_no_match_across_paragraphs() {
        let engine = HighlightEngine::new(vec![Rule::new(r"a\nb", "A")], theme());
        let mut buf = buffer("a\nb");
        engine.on_edit(&mut buf, 0..0).unwrap();
        assert_eq!(color_at(&buf, 0), Color::White);
    }

    /// Full pass and per-paragraph passes must agree
    fn assert_matches_per_paragraph(engine: &HighlightEngine, text: &str) {
        let mut full = buffer(text);
        engine.highlight_all(&mut full).unwrap();

        let mut stepwise = buffer(text);
        for paragraph in paragraphs(text) {
            engine.on_edit(&mut stepwise, paragraph.end..paragraph.end).unwrap();
        }
        assert_eq!(full.runs(), stepwise.runs(), "{text:?}");
    }

    #[test]
    fn test_comment_stops_at_every_terminator() {
        let engine = HighlightEngine::new(vec![Rule::new("//.*", TokenType::COMMENT)], theme());

        for sep in ["\n", "\r", "\r\n", "\u{2028}", "\u{2029}"] {
            let text = format!("// a{sep}b");
            let mut buf = buffer(&text);
            engine.highlight_all(&mut buf).unwrap();

            assert_eq!(color_at(&buf, 3), Color::BrightBlack, "{sep:?}");
            assert_eq!(color_at(&buf, text.len() - 1), Color::White, "{sep:?}");
            assert_matches_per_paragraph(&engine, &text);
        }
    }

    #[test]
    fn test_full_pass_keeps_matches_in_paragraph() {
        let engine = HighlightEngine::new(vec![Rule::new(r"a\s+b", "A")], theme());

        for sep in ["\n", "\r", "\r\n", "\u{2028}", "\u{2029}"] {
            let text = format!("a{sep}b");
            let mut buf = buffer(&text);
            engine.highlight_all(&mut buf).unwrap();

            assert_eq!(buf.runs().len(), 1, "{sep:?}");
            assert_eq!(color_at(&buf, 0), Color::White, "{sep:?}");
            assert_matches_per_paragraph(&engine, &text);
        }
    }

    #[test]
    fn test_anchors_per_paragraph() {
        let engine = HighlightEngine::new(vec![Rule::new("^#.*", TokenType::COMMENT)], theme());
        let text = "x\r# one\u{2028}# two";
        let mut buf = buffer(text);
        engine.highlight_all(&mut buf).unwrap();

        assert_eq!(color_at(&buf, 0), Color::White);
        assert_eq!(color_at(&buf, 2), Color::BrightBlack);
        assert_eq!(color_at(&buf, 10), Color::BrightBlack);
        assert_matches_per_paragraph(&engine, text);
    }

    #[test]
    fn test_pass_queues_one_notification() {
        let rules = vec![Rule::new("let", TokenType::KEYWORD), Rule::new(r"\d", "A")];
        let engine = HighlightEngine::new(rules, theme());
        let mut buf = buffer("let a = 1\nlet b = 2");
        buf.take_edits();

        engine.highlight_all(&mut buf).unwrap();
        let edits = buf.take_edits();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].range, 0..19);
    }

    #[test]
    fn test_on_edit_invalid_range() {
        let engine = HighlightEngine::new(Vec::new(), theme());
        let mut buf = buffer("abc");
        assert!(matches!(
            engine.on_edit(&mut buf, 2..10),
            Err(HighlightError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let rules = vec![Rule::new(r"\d+", "A"), Rule::new("//.*", TokenType::COMMENT)];
        let engine = HighlightEngine::new(rules, theme());
        let mut buf = buffer("x = 42 // 7\ny = 3");

        engine.on_edit(&mut buf, 4..5).unwrap();
        let first = buf.runs().to_vec();
        engine.on_edit(&mut buf, 4..5).unwrap();
        assert_eq!(buf.runs(), first.as_slice());
        assert!(buf.is_consistent());
    }

    #[test]
    fn test_set_theme_keeps_rules() {
        let mut engine = HighlightEngine::new(vec![Rule::new("let", TokenType::KEYWORD)], theme());
        let palette = Palette::new(Color::Black).with(TokenType::KEYWORD, Color::Yellow);
        engine.set_theme(Theme::new("test", "other", "system", &palette, Font::system()));

        let mut buf = buffer("let");
        engine.highlight_all(&mut buf).unwrap();
        assert_eq!(engine.rules().len(), 1);
        assert_eq!(color_at(&buf, 0), Color::Yellow);
    }
}
