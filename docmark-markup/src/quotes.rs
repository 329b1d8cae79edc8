//! Smart-quote normalization
//!
//! Typographic quotes pasted from word processors (`“ ” ‘ ’`) are replaced by
//! their ASCII counterparts as the author types. Each change notification
//! fixes at most one occurrence of each of the four glyphs: the first one in
//! the document. Further occurrences are picked up by later notifications, so
//! a document converges over a few keystrokes instead of being rewritten in
//! one go.
//!
//! The pass reads the document once, converts every match to a position
//! against that snapshot, and only then hands the whole batch to
//! [`TextBuffer::apply_edits`], which applies it atomically.

use crate::document::{Range, TextEdit};
use crate::error::MarkupError;
use crate::host::TextBuffer;
use once_cell::sync::Lazy;
use regex::Regex;

struct QuoteRule {
    pattern: Regex,
    straight: &'static str,
}

static RULES: Lazy<Vec<QuoteRule>> = Lazy::new(|| {
    [("\u{201C}", "\""), ("\u{201D}", "\""), ("\u{2018}", "'"), ("\u{2019}", "'")]
        .into_iter()
        .map(|(curly, straight)| QuoteRule {
            pattern: Regex::new(curly).expect("valid regex"),
            straight,
        })
        .collect()
});

/// One pending replacement, as byte offsets into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteReplacement {
    pub start: usize,
    pub end: usize,
    pub replacement: &'static str,
}

/// Why a pass did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Disabled,
    NotMarkdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeOutcome {
    Skipped(SkipReason),
    /// No curly quotes were found
    Clean,
    /// This many quotes were straightened
    Applied(usize),
}

/// Settings read from configuration for each pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteSettings {
    pub enabled: bool,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// First occurrence of each curly quote in `text`.
///
/// Results follow the glyph order `“ ” ‘ ’`, not document order.
pub fn find_replacements(text: &str) -> Vec<QuoteReplacement> {
    RULES
        .iter()
        .filter_map(|rule| {
            rule.pattern.find(text).map(|found| QuoteReplacement {
                start: found.start(),
                end: found.end(),
                replacement: rule.straight,
            })
        })
        .collect()
}

/// React to a change in `buffer`.
pub fn normalize(
    buffer: &mut dyn TextBuffer,
    settings: QuoteSettings,
) -> Result<NormalizeOutcome, MarkupError> {
    if !settings.enabled {
        return Ok(NormalizeOutcome::Skipped(SkipReason::Disabled));
    }
    if !buffer.content_type().is_markdown() {
        return Ok(NormalizeOutcome::Skipped(SkipReason::NotMarkdown));
    }

    let snapshot = buffer.text();
    let replacements = find_replacements(&snapshot);
    if replacements.is_empty() {
        return Ok(NormalizeOutcome::Clean);
    }

    let mut edits = Vec::with_capacity(replacements.len());
    for found in &replacements {
        let range = Range::new(
            buffer.position_at(found.start)?,
            buffer.position_at(found.end)?,
        );
        edits.push(TextEdit::replace(range, found.replacement));
    }

    let count = edits.len();
    buffer.apply_edits(edits)?;
    log::debug!("straightened {count} smart quotes");
    Ok(NormalizeOutcome::Applied(count))
}

/// Run passes until the document is clean, returning how many quotes changed.
///
/// Used for one-shot cleanups outside of an editing session.
pub fn normalize_all(
    buffer: &mut dyn TextBuffer,
    settings: QuoteSettings,
) -> Result<usize, MarkupError> {
    let mut total = 0;
    while let NormalizeOutcome::Applied(count) = normalize(buffer, settings)? {
        total += count;
    }
    Ok(total)
}
