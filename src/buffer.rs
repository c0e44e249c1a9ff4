//! Text buffer with a run-length attribute map
//!
//! The buffer owns the text and one [`Attributes`] pair for every byte of
//! it, stored as sorted, contiguous, maximal [`Run`]s. Every mutating
//! call queues an [`Edit`] notification for the highlight engine.
//!
//! The queue only shrinks through [`TextBuffer::take_edits`]. A host
//! driving the engine without [`SyntaxStorage`](crate::SyntaxStorage) must
//! drain it after each edit.

use std::ops::Range;

use crate::error::{HighlightError, Result};
use crate::syntax::{Attributes, Run};

/// What an edit touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Content changed; attributes in `range` need re-highlighting
    Characters,
    /// Only attributes changed
    Attributes,
}

/// An edit notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub kind: EditKind,
    /// Affected range, in post-edit offsets
    pub range: Range<usize>,
    /// Change in buffer length
    pub delta: isize,
}

/// A text buffer with per-character attributes
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// The text content
    content: String,
    /// Attribute runs covering exactly `0..content.len()`
    runs: Vec<Run>,
    /// Attributes given to text inserted into an empty buffer
    base: Attributes,
    /// Queued notifications
    edits: Vec<Edit>,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new(base: Attributes) -> Self {
        Self::with_text("", base)
    }

    /// Create a buffer from text, uniformly styled with `base`
    pub fn with_text(text: &str, base: Attributes) -> Self {
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![Run::new(0, text.len(), base.clone())]
        };
        Self {
            content: text.to_string(),
            runs,
            base,
            edits: Vec::new(),
        }
    }

    /// Get the text content
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Get the length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get all attribute runs
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Get the text in a range
    pub fn slice(&self, range: Range<usize>) -> Result<&str> {
        self.check_range(&range)?;
        Ok(&self.content[range])
    }

    /// Drain queued edit notifications, oldest first
    pub fn take_edits(&mut self) -> Vec<Edit> {
        std::mem::take(&mut self.edits)
    }

    /// Replace the text in `range` with `text`
    ///
    /// Runs after the range shift by the length change. The inserted text
    /// inherits neighbouring attributes until it is re-highlighted.
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> Result<()> {
        self.check_range(&range)?;

        let start = range.start;
        let old_len = range.len();
        let new_len = text.len();
        let inherited = self.inherited_attributes(&range);

        self.content.replace_range(range.clone(), text);

        let first = self.split_at(range.start);
        let last = self.split_at(range.end);
        self.runs.drain(first..last);
        for run in &mut self.runs[first..] {
            run.start = run.start - old_len + new_len;
            run.end = run.end - old_len + new_len;
        }
        if new_len > 0 {
            self.runs.insert(first, Run::new(start, start + new_len, inherited));
        }
        self.merge_around(first);

        self.edits.push(Edit {
            kind: EditKind::Characters,
            range: start..start + new_len,
            delta: new_len as isize - old_len as isize,
        });
        Ok(())
    }

    /// Get the attributes covering `offset`
    pub fn attributes_at(&self, offset: usize) -> Result<&Attributes> {
        self.attributes_at_effective(offset).map(|(attrs, _)| attrs)
    }

    /// Get the attributes covering `offset` and the maximal range over
    /// which they are constant
    pub fn attributes_at_effective(&self, offset: usize) -> Result<(&Attributes, Range<usize>)> {
        let out_of_bounds = HighlightError::OutOfBounds {
            offset,
            len: self.len(),
        };
        if offset >= self.len() {
            return Err(out_of_bounds);
        }
        let run = self.runs.get(self.run_index(offset)).ok_or(out_of_bounds)?;
        Ok((&run.attrs, run.range()))
    }

    /// Overwrite the attributes of `range` with a single pair
    pub fn set_attributes(&mut self, attrs: Attributes, range: Range<usize>) -> Result<()> {
        self.paint(attrs, range.clone())?;
        if !range.is_empty() {
            self.restyled(range);
        }
        Ok(())
    }

    /// Overwrite attributes without queuing a notification
    ///
    /// A highlight pass paints many ranges and reports the whole span once
    /// through [`TextBuffer::restyled`].
    pub(crate) fn paint(&mut self, attrs: Attributes, range: Range<usize>) -> Result<()> {
        self.check_range(&range)?;
        if range.is_empty() {
            return Ok(());
        }

        let first = self.split_at(range.start);
        let last = self.split_at(range.end);
        self.runs.drain(first..last);
        self.runs.insert(first, Run::new(range.start, range.end, attrs));
        self.merge_around(first);
        Ok(())
    }

    /// Queue an attribute notification for `range`
    pub(crate) fn restyled(&mut self, range: Range<usize>) {
        self.edits.push(Edit {
            kind: EditKind::Attributes,
            range,
            delta: 0,
        });
    }

    /// Overwrite the attributes of the whole buffer
    pub fn reset_attributes(&mut self, attrs: Attributes) {
        self.base = attrs.clone();
        let len = self.len();
        self.runs.clear();
        if len > 0 {
            self.runs.push(Run::new(0, len, attrs));
        }
        self.restyled(0..len);
    }

    /// Check the run map covers `0..len` exactly, with maximal runs
    pub fn is_consistent(&self) -> bool {
        let mut pos = 0;
        for (i, run) in self.runs.iter().enumerate() {
            if run.start != pos || run.is_empty() {
                return false;
            }
            if i > 0 && self.runs[i - 1].attrs == run.attrs {
                return false;
            }
            pos = run.end;
        }
        pos == self.len()
    }

    fn check_range(&self, range: &Range<usize>) -> Result<()> {
        let valid = range.start <= range.end
            && range.end <= self.len()
            && self.content.is_char_boundary(range.start)
            && self.content.is_char_boundary(range.end);
        if valid {
            Ok(())
        } else {
            Err(HighlightError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.len(),
            })
        }
    }

    /// Index of the run containing `offset` (or `runs.len()` at the end)
    fn run_index(&self, offset: usize) -> usize {
        self.runs.partition_point(|run| run.end <= offset)
    }

    /// Ensure a run boundary at `offset`, returning the index of the run
    /// starting there
    fn split_at(&mut self, offset: usize) -> usize {
        let idx = self.run_index(offset);
        let Some(run) = self.runs.get(idx) else {
            return idx;
        };
        if run.start >= offset {
            return idx;
        }
        let tail = Run::new(offset, run.end, run.attrs.clone());
        self.runs[idx].end = offset;
        self.runs.insert(idx + 1, tail);
        idx + 1
    }

    /// Merge the run at `idx` with equal neighbours on either side
    fn merge_around(&mut self, idx: usize) {
        if idx + 1 < self.runs.len() && self.runs[idx].attrs == self.runs[idx + 1].attrs {
            let next = self.runs.remove(idx + 1);
            self.runs[idx].end = next.end;
        }
        if idx > 0 && idx < self.runs.len() && self.runs[idx - 1].attrs == self.runs[idx].attrs {
            let current = self.runs.remove(idx);
            self.runs[idx - 1].end = current.end;
        }
    }

    /// Attributes for text about to replace `range`
    fn inherited_attributes(&self, range: &Range<usize>) -> Attributes {
        let probe = if !range.is_empty() {
            Some(range.start)
        } else {
            range.start.checked_sub(1)
        };
        probe
            .and_then(|offset| self.runs.get(self.run_index(offset)))
            .or_else(|| self.runs.first())
            .map(|run| run.attrs.clone())
            .unwrap_or_else(|| self.base.clone())
    }
}
