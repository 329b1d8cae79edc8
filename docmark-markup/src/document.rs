//! Rope-backed text buffer
//!
//! [`Document`] is the in-process stand-in for an editor's open document. It
//! keeps the text in a [`ropey::Rope`] so that converting between byte offsets
//! (what `regex` reports) and line/character positions (what edits are expressed
//! in) stays cheap for large files.
//!
//! Edits are applied in batches. A batch is checked in full (every range must
//! exist and no two ranges may overlap) before the rope is touched, and the
//! edits are then applied from the end of the document backwards, so positions
//! computed against the original text stay valid for the whole batch.

use crate::error::MarkupError;
use crate::host::TextBuffer;
use ropey::Rope;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Zero-based line/character position.
///
/// `character` counts Unicode scalar values from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// Half-open span between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Zero-width range, used for plain insertions.
    pub fn empty(at: Position) -> Self {
        Self { start: at, end: at }
    }
}

/// Replace the text covered by `range` with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

impl TextEdit {
    pub fn replace(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    pub fn insert(at: Position, new_text: impl Into<String>) -> Self {
        Self::replace(Range::empty(at), new_text)
    }
}

/// Kind of content held by a document, as far as the markup commands care.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Markdown,
    Yaml,
    Other(String),
}

impl ContentType {
    /// Detect the content type from a file name's extension, ignoring case.
    ///
    /// Files without an extension are reported as `Other("")`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match extension.to_ascii_lowercase().as_str() {
            "md" | "markdown" => ContentType::Markdown,
            "yml" | "yaml" => ContentType::Yaml,
            _ => ContentType::Other(extension.to_string()),
        }
    }

    pub fn is_markdown(&self) -> bool {
        matches!(self, ContentType::Markdown)
    }

    pub fn is_yaml(&self) -> bool {
        matches!(self, ContentType::Yaml)
    }
}

/// An open document: text, content type and (optionally) its location on disk.
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    content_type: ContentType,
    path: Option<PathBuf>,
}

impl Document {
    pub fn new(text: &str, content_type: ContentType) -> Self {
        Self {
            rope: Rope::from_str(text),
            content_type,
            path: None,
        }
    }

    /// Shorthand for an in-memory Markdown document.
    pub fn markdown(text: &str) -> Self {
        Self::new(text, ContentType::Markdown)
    }

    /// Load a document from disk, detecting its content type from the extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, MarkupError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| MarkupError::io(path, e))?;
        Ok(Self {
            rope: Rope::from_str(&text),
            content_type: ContentType::from_path(path),
            path: Some(path.to_path_buf()),
        })
    }

    /// Write the current text back to the file the document was opened from.
    ///
    /// In-memory documents have nowhere to go and are left alone.
    pub fn save(&self) -> Result<(), MarkupError> {
        match &self.path {
            Some(path) => self.write_to(path),
            None => Ok(()),
        }
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), MarkupError> {
        let path = path.as_ref();
        fs::write(path, self.rope.to_string()).map_err(|e| MarkupError::io(path, e))
    }

    /// Number of characters on `line`, not counting its line break.
    fn line_len(&self, line: usize) -> usize {
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
        }
        if len > 0 && slice.char(len - 1) == '\r' {
            len -= 1;
        }
        len
    }

    fn char_index(&self, position: Position) -> Result<usize, MarkupError> {
        if position.line >= self.rope.len_lines() || position.character > self.line_len(position.line)
        {
            return Err(MarkupError::InvalidPosition(position));
        }
        Ok(self.rope.line_to_char(position.line) + position.character)
    }
}

impl TextBuffer for Document {
    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn content_type(&self) -> ContentType {
        self.content_type.clone()
    }

    fn position_at(&self, offset: usize) -> Result<Position, MarkupError> {
        if offset > self.rope.len_bytes() {
            return Err(MarkupError::InvalidPosition(Position::new(
                self.rope.len_lines(),
                0,
            )));
        }
        let char_idx = self.rope.byte_to_char(offset);
        let line = self.rope.char_to_line(char_idx);
        Ok(Position::new(line, char_idx - self.rope.line_to_char(line)))
    }

    fn offset_at(&self, position: Position) -> Result<usize, MarkupError> {
        let char_idx = self.char_index(position)?;
        Ok(self.rope.char_to_byte(char_idx))
    }

    fn apply_edits(&mut self, edits: Vec<TextEdit>) -> Result<(), MarkupError> {
        let mut resolved = Vec::with_capacity(edits.len());
        for edit in edits {
            let start = self.char_index(edit.range.start)?;
            let end = self.char_index(edit.range.end)?;
            if end < start {
                return Err(MarkupError::InvalidPosition(edit.range.end));
            }
            resolved.push((start, end, edit));
        }

        resolved.sort_by_key(|(start, end, _)| (*start, *end));
        for pair in resolved.windows(2) {
            let (_, prev_end, _) = &pair[0];
            let (next_start, _, next) = &pair[1];
            if prev_end > next_start {
                return Err(MarkupError::OverlappingEdits(next.range.start));
            }
        }

        for (start, end, edit) in resolved.into_iter().rev() {
            self.rope.remove(start..end);
            self.rope.insert(start, &edit.new_text);
        }
        Ok(())
    }
}
