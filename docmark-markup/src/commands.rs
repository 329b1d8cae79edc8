//! Authoring commands
//!
//! Each command is a straight sequence of prompts followed by a call into one
//! of the builders. A command returns the markup to insert at the author's
//! selection, or `None` when it was abandoned: a prompt was dismissed, or the
//! input was refused (in which case the author has already been warned).
//! Nothing is ever half-inserted.

use crate::alerts::{self, AlertKind};
use crate::document::ContentType;
use crate::error::MarkupError;
use crate::host::{FileLister, Notifier, Prompter};
use crate::links::{self, classify_target, PathStyle};
use crate::snippet::{SnippetOptions, SnippetResolver, SnippetSource};
use crate::table::{self, Validation};
use std::path::Path;

pub const NOT_A_WEB_URL: &str = "Enter a URL starting with http:// or https://.";

/// Prompts and warnings for one command invocation.
pub struct AuthoringSession<'a> {
    prompter: &'a mut dyn Prompter,
    notifier: &'a mut dyn Notifier,
}

impl<'a> AuthoringSession<'a> {
    pub fn new(prompter: &'a mut dyn Prompter, notifier: &'a mut dyn Notifier) -> Self {
        Self { prompter, notifier }
    }

    pub fn insert_table(&mut self) -> Option<String> {
        let request = self.prompter.ask_text(
            "Enter the number of columns and rows as C:R",
            Some("e.g. 3:4"),
        )?;
        self.table_from(&request)
    }

    /// Validate an already-typed `C:R` request and render it.
    pub fn table_from(&mut self, request: &str) -> Option<String> {
        match table::parse_table_request(request.trim(), self.notifier) {
            Validation::Valid(spec) => Some(spec.render()),
            Validation::Invalid(_) | Validation::Malformed => None,
        }
    }

    pub fn insert_snippet(
        &mut self,
        lister: &dyn FileLister,
        source: SnippetSource<'_>,
        options: SnippetOptions,
    ) -> Result<Option<String>, MarkupError> {
        let mut resolver = SnippetResolver::new(lister, self.prompter, self.notifier);
        let reference = resolver.reference(source)?;
        Ok(reference.map(|reference| reference.to_directive(options)))
    }

    /// Link (or image, with `is_art`) to a file in the repository.
    pub fn insert_internal_link(
        &mut self,
        selected_text: &str,
        is_art: bool,
        content_type: &ContentType,
        style: PathStyle,
    ) -> Option<String> {
        let prompt = if is_art {
            "Enter the path to the image"
        } else {
            "Enter the path to link to"
        };
        let path = self.prompter.ask_text(prompt, None)?;
        Some(links::internal_link(
            is_art,
            path.trim(),
            selected_text,
            content_type,
            style,
        ))
    }

    pub fn insert_external_link(&mut self, selected_text: &str) -> Option<String> {
        let url = self.ask_web_url("Enter the URL to link to")?;
        let title = Some(selected_text).filter(|text| !text.is_empty());
        Some(links::external_link(&url, title))
    }

    pub fn insert_video(&mut self) -> Option<String> {
        let url = self.ask_web_url("Enter the URL of the video")?;
        Some(links::video_link(&url))
    }

    /// Include another Markdown file; its file stem becomes the title.
    pub fn insert_include(&mut self) -> Option<String> {
        let path = self
            .prompter
            .ask_text("Enter the path to the include file", None)?;
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let title = Path::new(path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        Some(links::include_link(&title, path))
    }

    pub fn insert_alert(&mut self, selected_text: &str) -> Option<String> {
        let kinds: Vec<String> = AlertKind::ALL.iter().map(|k| k.to_string()).collect();
        let index = self.prompter.ask_choice("Select the alert type", &kinds)?;
        let kind = AlertKind::ALL.get(index).copied()?;
        Some(alerts::alert(kind, selected_text))
    }

    fn ask_web_url(&mut self, prompt: &str) -> Option<String> {
        let url = self.prompter.ask_text(prompt, Some("https://"))?;
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        if !classify_target(url).is_web() {
            self.notifier.warn(NOT_A_WEB_URL);
            return None;
        }
        Some(url.to_string())
    }
}
