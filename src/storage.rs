//! Highlighted text storage
//!
//! [`SyntaxStorage`] is what a host editing surface talks to. It owns the
//! buffer and the engine, and runs the highlight pass inside every content
//! mutation, so the attribute map is consistent again before `replace`
//! returns.

use std::ops::Range;

use crate::buffer::{Edit, EditKind, TextBuffer};
use crate::error::Result;
use crate::syntax::{Attributes, HighlightEngine, Theme};

/// Host-side receiver of edit notifications (typically: schedule a redraw)
pub trait EditObserver {
    fn edited(&mut self, edit: &Edit);
}

impl<F> EditObserver for F
where
    F: FnMut(&Edit),
{
    fn edited(&mut self, edit: &Edit) {
        self(edit)
    }
}

/// A text buffer kept highlighted by an engine
pub struct SyntaxStorage {
    buffer: TextBuffer,
    engine: HighlightEngine,
    observer: Option<Box<dyn EditObserver>>,
}

impl SyntaxStorage {
    /// Create empty storage
    pub fn new(engine: HighlightEngine) -> Self {
        let buffer = TextBuffer::new(engine.theme().default_attributes());
        Self {
            buffer,
            engine,
            observer: None,
        }
    }

    /// Create storage holding `text`, fully highlighted
    pub fn with_text(text: &str, engine: HighlightEngine) -> Result<Self> {
        let mut buffer = TextBuffer::with_text(text, engine.theme().default_attributes());
        engine.highlight_all(&mut buffer)?;
        buffer.take_edits();
        Ok(Self {
            buffer,
            engine,
            observer: None,
        })
    }

    /// Register the host observer, replacing any previous one
    pub fn set_observer(&mut self, observer: impl EditObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Get the text content
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Get the length in bytes
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the storage is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn engine(&self) -> &HighlightEngine {
        &self.engine
    }

    /// Replace the text in `range` and re-highlight the touched paragraphs
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> Result<()> {
        self.buffer.replace(range, text)?;
        self.process_editing()
    }

    /// Overwrite attributes without re-highlighting
    pub fn set_attributes(&mut self, attrs: Attributes, range: Range<usize>) -> Result<()> {
        self.buffer.set_attributes(attrs, range)?;
        self.process_editing()
    }

    /// Switch theme and re-highlight everything
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.engine.set_theme(theme);
        self.buffer.reset_attributes(self.engine.theme().default_attributes());
        self.engine.highlight_all(&mut self.buffer)?;
        self.process_editing()
    }

    /// Get the attributes covering `offset`
    pub fn attributes_at(&self, offset: usize) -> Result<&Attributes> {
        self.buffer.attributes_at(offset)
    }

    /// Get the attributes covering `offset` and the range they span
    pub fn attributes_at_effective(&self, offset: usize) -> Result<(&Attributes, Range<usize>)> {
        self.buffer.attributes_at_effective(offset)
    }

    /// Highlight pending content edits, then forward notifications
    ///
    /// Attribute notifications are coalesced into a single range.
    fn process_editing(&mut self) -> Result<()> {
        let mut forwarded = Vec::new();
        let mut styled: Option<Range<usize>> = None;

        let mut pending = self.buffer.take_edits();
        while !pending.is_empty() {
            for edit in pending {
                match edit.kind {
                    EditKind::Characters => {
                        self.engine.on_edit(&mut self.buffer, edit.range.clone())?;
                        forwarded.push(edit);
                    }
                    EditKind::Attributes => {
                        styled = Some(match styled {
                            Some(r) => r.start.min(edit.range.start)..r.end.max(edit.range.end),
                            None => edit.range,
                        });
                    }
                }
            }
            pending = self.buffer.take_edits();
        }

        if let Some(range) = styled {
            forwarded.push(Edit {
                kind: EditKind::Attributes,
                range,
                delta: 0,
            });
        }

        if let Some(observer) = self.observer.as_mut() {
            for edit in &forwarded {
                observer.edited(edit);
            }
        }
        Ok(())
    }
}
