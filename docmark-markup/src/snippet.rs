//! Code snippet references
//!
//! A snippet reference embeds (part of) a source file into a document with the
//! `:::code` directive:
//!
//! ```text
//! :::code language="python" source="../samples/app.py":::
//! :::code language="python" source="../samples/app.py" id=setup":::
//! :::code language="python" source="../samples/app.py" range="3-12":::
//! ```
//!
//! The id form above is what existing documents and the downstream renderer
//! have always received (note the missing opening quote), so it is the
//! default. [`SnippetOptions::quote_id_selector`] switches to `id="setup"`.
//!
//! [`SnippetResolver`] drives the prompts needed to build a reference: find
//! the file (by searching a directory tree, or by naming a path in a sibling
//! repository checkout), work out its language, and ask for an optional
//! selector. Any dismissed prompt ends the workflow with `Ok(None)`.

use crate::error::MarkupError;
use crate::host::{FileLister, Notifier, Prompter};
use crate::language::{self, LanguageDescriptor};
use crate::paths::relative_to_document;
use std::path::{Path, PathBuf};

pub const NO_LANGUAGE_WARNING: &str = "No language selected; snippet was not inserted.";

const SELECTOR_KINDS: [&str; 3] = ["None", "Id", "Range"];

/// Narrows a reference to part of the file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    None,
    Id(String),
    Range(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnippetOptions {
    /// Emit `id="x"` instead of the historical `id=x"`
    pub quote_id_selector: bool,
}

/// A fully resolved snippet, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetReference {
    /// Directive language identifier (a catalog alias)
    pub language: String,
    pub path: String,
    pub selector: Selector,
}

impl SnippetReference {
    pub fn to_directive(&self, options: SnippetOptions) -> String {
        format_snippet_with(&self.language, &self.path, &self.selector, options)
    }
}

/// Render a `:::code` directive with the default options.
pub fn format_snippet(language: &str, path: &str, selector: &Selector) -> String {
    format_snippet_with(language, path, selector, SnippetOptions::default())
}

pub fn format_snippet_with(
    language: &str,
    path: &str,
    selector: &Selector,
    options: SnippetOptions,
) -> String {
    let mut directive = format!(":::code language=\"{language}\" source=\"{path}\"");
    match selector {
        Selector::None => {}
        Selector::Id(id) if options.quote_id_selector => {
            directive.push_str(&format!(" id=\"{id}\""));
        }
        Selector::Id(id) => directive.push_str(&format!(" id={id}\"")),
        Selector::Range(range) => directive.push_str(&format!(" range=\"{range}\"")),
    }
    directive.push_str(":::");
    directive
}

/// Where the snippet file comes from.
#[derive(Debug, Clone, Copy)]
pub enum SnippetSource<'a> {
    /// Search `root` for files whose path contains `term`; the reference is
    /// made relative to `document`.
    Search {
        term: &'a str,
        root: &'a Path,
        document: &'a Path,
    },
    /// A path inside a repository checked out next to the current one.
    Repository { name: &'a str, path: &'a str },
}

/// File and language of a snippet, before a selector is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSnippet {
    pub language: String,
    pub path: String,
}

pub struct SnippetResolver<'a> {
    lister: &'a dyn FileLister,
    prompter: &'a mut dyn Prompter,
    notifier: &'a mut dyn Notifier,
}

impl<'a> SnippetResolver<'a> {
    pub fn new(
        lister: &'a dyn FileLister,
        prompter: &'a mut dyn Prompter,
        notifier: &'a mut dyn Notifier,
    ) -> Self {
        Self {
            lister,
            prompter,
            notifier,
        }
    }

    /// Resolve the file and language, then ask for a selector.
    pub fn reference(
        &mut self,
        source: SnippetSource<'_>,
    ) -> Result<Option<SnippetReference>, MarkupError> {
        let Some(resolved) = self.resolve(source)? else {
            return Ok(None);
        };
        let Some(selector) = self.choose_selector() else {
            return Ok(None);
        };
        Ok(Some(SnippetReference {
            language: resolved.language,
            path: resolved.path,
            selector,
        }))
    }

    /// Find the snippet file and its language.
    pub fn resolve(
        &mut self,
        source: SnippetSource<'_>,
    ) -> Result<Option<ResolvedSnippet>, MarkupError> {
        let (path, file) = match source {
            SnippetSource::Search {
                term,
                root,
                document,
            } => {
                let Some(selected) = self.search(term, root)? else {
                    return Ok(None);
                };
                (relative_to_document(document, &selected), selected)
            }
            SnippetSource::Repository { name, path } => {
                (format!("~/{name}/{path}"), PathBuf::from(path))
            }
        };

        let Some(language) = self.language_for(&file) else {
            return Ok(None);
        };
        log::debug!("resolved snippet {path} as {}", language.alias());
        Ok(Some(ResolvedSnippet {
            language: language.alias().to_string(),
            path,
        }))
    }

    fn search(&mut self, term: &str, root: &Path) -> Result<Option<PathBuf>, MarkupError> {
        let matches: Vec<PathBuf> = self
            .lister
            .list_files(root)?
            .into_iter()
            .filter(|file| file.to_string_lossy().contains(term))
            .collect();
        log::debug!("{} files under {} match '{term}'", matches.len(), root.display());

        if matches.is_empty() {
            self.notifier
                .warn(&format!("No files found matching '{term}'."));
            return Ok(None);
        }

        let labels: Vec<String> = matches
            .iter()
            .map(|file| {
                let shown = file.strip_prefix(root).unwrap_or(file);
                shown.to_string_lossy().replace('\\', "/")
            })
            .collect();
        let choice = self.prompter.ask_choice("Select the snippet file", &labels);
        Ok(choice.and_then(|index| matches.get(index).cloned()))
    }

    fn language_for(&mut self, file: &Path) -> Option<&'static LanguageDescriptor> {
        if let Some(language) = language::infer_from_path(file) {
            return Some(language);
        }

        log::debug!("no language registered for {}", file.display());
        let names = language::display_names();
        let picked = self
            .prompter
            .ask_choice("Select the programming language", &names)
            .and_then(|index| names.get(index))
            .and_then(|name| language::find_by_name(name));
        if picked.is_none() {
            self.notifier.warn(NO_LANGUAGE_WARNING);
        }
        picked
    }

    /// Ask whether to narrow the reference by id or line range.
    ///
    /// An empty id or range counts as a dismissed prompt.
    pub fn choose_selector(&mut self) -> Option<Selector> {
        let kinds: Vec<String> = SELECTOR_KINDS.iter().map(|k| k.to_string()).collect();
        let index = self
            .prompter
            .ask_choice("Select a snippet selector", &kinds)?;

        match *SELECTOR_KINDS.get(index)? {
            "Id" => self
                .ask_value("Enter the snippet id", None)
                .map(Selector::Id),
            "Range" => self
                .ask_value("Enter the line range", Some("e.g. 1-10"))
                .map(Selector::Range),
            _ => Some(Selector::None),
        }
    }

    fn ask_value(&mut self, prompt: &str, placeholder: Option<&str>) -> Option<String> {
        self.prompter
            .ask_text(prompt, placeholder)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Answer, RecordingNotifier, ScriptedPrompter};

    struct FixedLister(Vec<PathBuf>);

    impl FileLister for FixedLister {
        fn list_files(&self, _root: &Path) -> Result<Vec<PathBuf>, MarkupError> {
            Ok(self.0.clone())
        }
    }

    fn lister() -> FixedLister {
        FixedLister(vec![
            PathBuf::from("/repo/samples/app.py"),
            PathBuf::from("/repo/samples/App.cs"),
            PathBuf::from("/repo/samples/build.gradle"),
        ])
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(
            format_snippet("python", "a/b.py", &Selector::None),
            r#":::code language="python" source="a/b.py":::"#
        );
    }

    #[test]
    fn test_format_id_keeps_historical_quoting() {
        assert_eq!(
            format_snippet("python", "a/b.py", &Selector::Id("S1".to_string())),
            r#":::code language="python" source="a/b.py" id=S1":::"#
        );
    }

    #[test]
    fn test_format_id_quoted_when_requested() {
        let options = SnippetOptions {
            quote_id_selector: true,
        };
        assert_eq!(
            format_snippet_with("python", "a/b.py", &Selector::Id("S1".to_string()), options),
            r#":::code language="python" source="a/b.py" id="S1":::"#
        );
    }

    #[test]
    fn test_format_range() {
        let directive = format_snippet("python", "a/b.py", &Selector::Range("1-10".to_string()));
        assert_eq!(
            directive,
            r#":::code language="python" source="a/b.py" range="1-10":::"#
        );
        assert!(!directive.contains("id="));
    }

    #[test]
    fn test_search_is_case_sensitive_substring() {
        let lister = lister();
        let mut prompter = ScriptedPrompter::new([Answer::Choice(0)]);
        let mut notifier = RecordingNotifier::default();
        let mut resolver = SnippetResolver::new(&lister, &mut prompter, &mut notifier);

        let resolved = resolver
            .resolve(SnippetSource::Search {
                term: "App",
                root: Path::new("/repo"),
                document: Path::new("/repo/docs/index.md"),
            })
            .unwrap()
            .unwrap();
        assert_eq!(
            resolved,
            ResolvedSnippet {
                language: "csharp".to_string(),
                path: "../samples/App.cs".to_string(),
            }
        );
    }

    #[test]
    fn test_search_without_matches_warns() {
        let lister = lister();
        let mut prompter = ScriptedPrompter::default();
        let mut notifier = RecordingNotifier::default();
        let mut resolver = SnippetResolver::new(&lister, &mut prompter, &mut notifier);

        let resolved = resolver
            .resolve(SnippetSource::Search {
                term: "missing",
                root: Path::new("/repo"),
                document: Path::new("/repo/index.md"),
            })
            .unwrap();
        assert_eq!(resolved, None);
        assert_eq!(notifier.warnings, vec!["No files found matching 'missing'."]);
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_unknown_extension_falls_back_to_manual_choice() {
        let lister = lister();
        let java = language::display_names()
            .iter()
            .position(|name| name == "Java")
            .unwrap();
        let mut prompter = ScriptedPrompter::new([Answer::Choice(0), Answer::Choice(java)]);
        let mut notifier = RecordingNotifier::default();
        let mut resolver = SnippetResolver::new(&lister, &mut prompter, &mut notifier);

        let resolved = resolver
            .resolve(SnippetSource::Search {
                term: "gradle",
                root: Path::new("/repo"),
                document: Path::new("/repo/index.md"),
            })
            .unwrap()
            .unwrap();
        assert_eq!(resolved.language, "java");
        assert_eq!(resolved.path, "samples/build.gradle");
        assert!(notifier.warnings.is_empty());
    }

    #[test]
    fn test_cancelled_language_choice_warns_and_aborts() {
        let lister = lister();
        let mut prompter = ScriptedPrompter::new([Answer::Cancel]);
        let mut notifier = RecordingNotifier::default();
        let mut resolver = SnippetResolver::new(&lister, &mut prompter, &mut notifier);

        let resolved = resolver
            .resolve(SnippetSource::Repository {
                name: "samples",
                path: "Makefile",
            })
            .unwrap();
        assert_eq!(resolved, None);
        assert_eq!(notifier.warnings, vec![NO_LANGUAGE_WARNING]);
    }

    #[test]
    fn test_repository_reference() {
        let lister = lister();
        let mut prompter = ScriptedPrompter::new([Answer::Choice(2), Answer::text("5-9")]);
        let mut notifier = RecordingNotifier::default();
        let mut resolver = SnippetResolver::new(&lister, &mut prompter, &mut notifier);

        let reference = resolver
            .reference(SnippetSource::Repository {
                name: "dotnet-samples",
                path: "core/Program.cs",
            })
            .unwrap()
            .unwrap();
        assert_eq!(
            reference.to_directive(SnippetOptions::default()),
            r#":::code language="csharp" source="~/dotnet-samples/core/Program.cs" range="5-9":::"#
        );
    }

    #[test]
    fn test_empty_selector_value_cancels() {
        let lister = lister();
        let mut prompter = ScriptedPrompter::new([Answer::Choice(1), Answer::text("  ")]);
        let mut notifier = RecordingNotifier::default();
        let mut resolver = SnippetResolver::new(&lister, &mut prompter, &mut notifier);
        assert_eq!(resolver.choose_selector(), None);
    }

    #[test]
    fn test_cancelled_file_choice_is_silent() {
        let lister = lister();
        let mut prompter = ScriptedPrompter::new([Answer::Cancel]);
        let mut notifier = RecordingNotifier::default();
        let mut resolver = SnippetResolver::new(&lister, &mut prompter, &mut notifier);

        let reference = resolver
            .reference(SnippetSource::Search {
                term: "samples",
                root: Path::new("/repo"),
                document: Path::new("/repo/index.md"),
            })
            .unwrap();
        assert_eq!(reference, None);
        assert!(notifier.warnings.is_empty());
        assert_eq!(prompter.asked, vec!["Select the snippet file"]);
    }

    /// Answers every choice with the first index past the options.
    struct PastTheEnd;

    impl Prompter for PastTheEnd {
        fn ask_text(&mut self, _prompt: &str, _placeholder: Option<&str>) -> Option<String> {
            Some("value".to_string())
        }

        fn ask_choice(&mut self, _prompt: &str, options: &[String]) -> Option<usize> {
            Some(options.len())
        }
    }

    #[test]
    fn test_out_of_range_choices_abort() {
        let lister = lister();
        let mut prompter = PastTheEnd;
        let mut notifier = RecordingNotifier::default();
        let mut resolver = SnippetResolver::new(&lister, &mut prompter, &mut notifier);

        let search = resolver
            .reference(SnippetSource::Search {
                term: "samples",
                root: Path::new("/repo"),
                document: Path::new("/repo/index.md"),
            })
            .unwrap();
        assert_eq!(search, None);
        assert_eq!(resolver.choose_selector(), None);

        let unknown = resolver
            .resolve(SnippetSource::Repository {
                name: "samples",
                path: "Makefile",
            })
            .unwrap();
        assert_eq!(unknown, None);
        assert_eq!(notifier.warnings, vec![NO_LANGUAGE_WARNING]);
    }
}
