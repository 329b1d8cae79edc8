//! Collaborators supplied by the host editor
//!
//! The markup commands never talk to a UI or a file system directly. They go
//! through four small traits:
//!
//! - [`Prompter`]: ask for one free-text value or one choice among options
//! - [`Notifier`]: show a warning to the user
//! - [`FileLister`]: list every file below a directory
//! - [`TextBuffer`]: read a document and apply position-based edits
//!
//! Every prompt may be cancelled, in which case it answers `None` and the
//! calling command stops without producing output.
//!
//! [`WalkLister`] is the file-system backed lister, and [`ScriptedPrompter`] /
//! [`RecordingNotifier`] are in-memory hosts for non-interactive callers.

use crate::document::{ContentType, Position, TextEdit};
use crate::error::MarkupError;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Asks the user for input.
pub trait Prompter {
    /// Ask for a single line of text. `None` means the prompt was dismissed.
    fn ask_text(&mut self, prompt: &str, placeholder: Option<&str>) -> Option<String>;

    /// Ask the user to pick one of `options`, returning its index. An index
    /// past the end of `options` is treated as a dismissed prompt.
    fn ask_choice(&mut self, prompt: &str, options: &[String]) -> Option<usize>;
}

/// Receives user-visible warnings.
pub trait Notifier {
    fn warn(&mut self, message: &str);
}

/// Recursive file listing.
pub trait FileLister {
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>, MarkupError>;
}

/// A live document that can be read and edited by position.
pub trait TextBuffer {
    /// Snapshot of the full text.
    fn text(&self) -> String;

    fn content_type(&self) -> ContentType;

    /// Convert a byte offset into the current text to a position.
    fn position_at(&self, offset: usize) -> Result<Position, MarkupError>;

    /// Convert a position to a byte offset into the current text.
    fn offset_at(&self, position: Position) -> Result<usize, MarkupError>;

    /// Apply every edit or none of them. Ranges refer to the text as it was
    /// before the call.
    fn apply_edits(&mut self, edits: Vec<TextEdit>) -> Result<(), MarkupError>;

    fn insert(&mut self, at: Position, text: &str) -> Result<(), MarkupError> {
        self.apply_edits(vec![TextEdit::insert(at, text)])
    }
}

/// [`FileLister`] backed by [`ignore::WalkBuilder`].
///
/// By default every file is listed, hidden and ignored files included. With
/// `respect_ignore_files` the usual `.gitignore` / `.ignore` / hidden-file
/// filters apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkLister {
    pub respect_ignore_files: bool,
}

impl WalkLister {
    pub fn new(respect_ignore_files: bool) -> Self {
        Self {
            respect_ignore_files,
        }
    }
}

impl FileLister for WalkLister {
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>, MarkupError> {
        if !root.is_dir() {
            return Err(MarkupError::Walk {
                root: root.to_path_buf(),
                message: "not a directory".to_string(),
            });
        }

        let walker = ignore::WalkBuilder::new(root)
            .standard_filters(self.respect_ignore_files)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|err| MarkupError::Walk {
                root: root.to_path_buf(),
                message: err.to_string(),
            })?;
            if entry.file_type().is_some_and(|ft| ft.is_file()) {
                files.push(entry.into_path());
            }
        }
        log::debug!("listed {} files under {}", files.len(), root.display());
        Ok(files)
    }
}

/// One pre-recorded answer for a [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Choice(usize),
    Cancel,
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }
}

/// Prompter that replays a fixed list of answers.
///
/// Running out of answers, or receiving an answer of the wrong kind, counts as
/// a cancellation. Every prompt asked is recorded so callers can check the
/// sequence.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Answers left unused.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_text(&mut self, prompt: &str, _placeholder: Option<&str>) -> Option<String> {
        self.asked.push(prompt.to_string());
        match self.answers.pop_front()? {
            Answer::Text(value) => Some(value),
            _ => None,
        }
    }

    fn ask_choice(&mut self, prompt: &str, options: &[String]) -> Option<usize> {
        self.asked.push(prompt.to_string());
        match self.answers.pop_front()? {
            Answer::Choice(index) if index < options.len() => Some(index),
            _ => None,
        }
    }
}

/// Notifier that keeps every warning it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub warnings: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
