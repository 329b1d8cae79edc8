//! Markup builders and text transforms for documentation authoring
//!
//!     This crate holds everything an editor integration needs to help an author
//!     write Markdown documentation: table skeletons, code snippet directives,
//!     links, alerts, emphasis toggles and smart-quote cleanup.
//!
//!     It is a pure lib: it never talks to a terminal, a UI or the environment.
//!     Whatever the host editor provides (prompts, warnings, file listing, the
//!     open document) comes in through the traits in ./host.rs, so the same code
//!     powers the docmark binary and any editor plugin.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # MarkupError
//!     ├── host.rs                 # Prompter, Notifier, FileLister, TextBuffer
//!     ├── document.rs             # Rope-backed TextBuffer
//!     ├── table.rs                # C:R validation and pipe table rendering
//!     ├── language.rs             # Extension -> language catalog
//!     ├── snippet.rs              # :::code directives and the snippet resolver
//!     ├── links.rs                # internal / external / video / include links
//!     ├── quotes.rs               # smart-quote normalization
//!     ├── emphasis.rs             # bold / italic / code toggles
//!     ├── alerts.rs               # > [!NOTE] callouts
//!     └── commands.rs             # prompt sequences tying it all together
//!
//! Core Algorithms
//!
//!     Most builders are one format! away from their output. The two places with
//!     some care in them are:
//!
//!     - Table requests are tri-state: valid, refused with a reason (the author
//!       is warned), or not even numbers (dropped silently). See ./table.rs.
//!     - Smart quotes are fixed one occurrence per glyph per change, with every
//!       offset mapped to a position against one snapshot before the batch is
//!       applied. See ./quotes.rs and ./document.rs.
//!
//! Testing
//!
//!     Unit tests live next to the code. tests/ holds the end-to-end command
//!     flows, driven by ScriptedPrompter against real directory trees.

pub mod alerts;
pub mod commands;
pub mod document;
pub mod emphasis;
pub mod error;
pub mod host;
pub mod language;
pub mod links;
mod paths;
pub mod quotes;
pub mod snippet;
pub mod table;

pub use commands::AuthoringSession;
pub use document::{ContentType, Document, Position, Range, TextEdit};
pub use error::MarkupError;
pub use host::{FileLister, Notifier, Prompter, TextBuffer, WalkLister};
pub use language::LanguageDescriptor;
pub use links::PathStyle;
pub use quotes::{NormalizeOutcome, QuoteSettings};
pub use snippet::{Selector, SnippetOptions, SnippetReference, SnippetSource};
pub use table::{TableSpec, Validation};
