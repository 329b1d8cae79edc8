use pathdiff::diff_paths;
use std::path::Path;

/// Path written into a document that lives at `document`, pointing at `target`.
///
/// The directory part is made relative to the document's directory and the
/// result always uses forward slashes. Both paths should be absolute (or both
/// relative to the same base); when no relative form exists the target's
/// directory is used unchanged.
pub(crate) fn relative_to_document(document: &Path, target: &Path) -> String {
    let document_dir = document.parent().unwrap_or_else(|| Path::new(""));
    let target_dir = target.parent().unwrap_or_else(|| Path::new(""));
    let relative_dir =
        diff_paths(target_dir, document_dir).unwrap_or_else(|| target_dir.to_path_buf());

    let joined = match target.file_name() {
        Some(name) => relative_dir.join(name),
        None => relative_dir,
    };
    to_forward_slashes(&joined.to_string_lossy())
}

pub(crate) fn to_forward_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_directory() {
        assert_eq!(
            relative_to_document(Path::new("/repo/docs/a.md"), Path::new("/repo/docs/b.py")),
            "b.py"
        );
    }

    #[test]
    fn test_sibling_directory() {
        assert_eq!(
            relative_to_document(
                Path::new("/repo/docs/howto/a.md"),
                Path::new("/repo/samples/api/main.cs")
            ),
            "../../samples/api/main.cs"
        );
    }

    #[test]
    fn test_nested_directory() {
        assert_eq!(
            relative_to_document(Path::new("/repo/a.md"), Path::new("/repo/src/x/y.rs")),
            "src/x/y.rs"
        );
    }

    #[test]
    fn test_backslashes_are_normalized() {
        assert_eq!(to_forward_slashes(r"media\img\x.png"), "media/img/x.png");
    }
}
