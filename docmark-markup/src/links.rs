//! Link markup builders
//!
//! Pure string builders for the four kinds of links an author inserts:
//!
//! | Kind     | Output                          |
//! |----------|---------------------------------|
//! | internal | `[text](path)` / `![alt](path)` |
//! | external | `[title](url)`                  |
//! | video    | `> [!VIDEO url]`                |
//! | include  | `[!INCLUDE [title](path)]`      |
//!
//! Internal links are the only ones that look at the path: Windows separators
//! are rewritten to `/` on Windows hosts, and always for images. In YAML files
//! (tables of contents, front matter indexes) the bare path is the reference,
//! so non-image links there are emitted without brackets.

use crate::document::ContentType;
use crate::paths::to_forward_slashes;
use url::Url;

/// Path separator convention of the machine producing the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    Posix,
    Windows,
}

impl PathStyle {
    pub fn host() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }
}

/// Link to a file in the same repository.
///
/// `is_art` selects image syntax. An empty `path` yields an empty target.
pub fn internal_link(
    is_art: bool,
    path: &str,
    text: &str,
    content_type: &ContentType,
    style: PathStyle,
) -> String {
    let path = if is_art || style == PathStyle::Windows {
        to_forward_slashes(path)
    } else {
        path.to_string()
    };

    if content_type.is_yaml() && !is_art {
        return path;
    }

    let marker = if is_art { "![" } else { "[" };
    format!("{marker}{text}]({path})")
}

/// Link to a web page. The URL doubles as the title when none is given.
pub fn external_link(url: &str, title: Option<&str>) -> String {
    let title = match title {
        Some(title) if !title.is_empty() => title,
        _ => url,
    };
    format!("[{title}]({url})")
}

pub fn video_link(url: &str) -> String {
    format!("> [!VIDEO {url}]")
}

pub fn include_link(title: &str, path: &str) -> String {
    format!("[!INCLUDE [{title}]({path})]")
}

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Absolute `http`/`https` URL
    Web(Url),
    /// Anything else: repository paths, anchors, other schemes
    Local(String),
}

impl LinkTarget {
    pub fn is_web(&self) -> bool {
        matches!(self, LinkTarget::Web(_))
    }
}

pub fn classify_target(target: &str) -> LinkTarget {
    match Url::parse(target.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => LinkTarget::Web(url),
        _ => LinkTarget::Local(target.to_string()),
    }
}
