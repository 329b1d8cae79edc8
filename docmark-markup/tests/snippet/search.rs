use crate::common::DocsRepo;
use docmark_markup::host::{Answer, RecordingNotifier, ScriptedPrompter};
use docmark_markup::language;
use docmark_markup::snippet::NO_LANGUAGE_WARNING;
use docmark_markup::{AuthoringSession, SnippetOptions, SnippetSource, WalkLister};

fn run(
    repo: &DocsRepo,
    term: &str,
    document: &str,
    answers: Vec<Answer>,
) -> (Option<String>, ScriptedPrompter, RecordingNotifier) {
    let mut prompter = ScriptedPrompter::new(answers);
    let mut notifier = RecordingNotifier::default();
    let document = repo.path(document);
    let directive = AuthoringSession::new(&mut prompter, &mut notifier)
        .insert_snippet(
            &WalkLister::default(),
            SnippetSource::Search {
                term,
                root: repo.root(),
                document: &document,
            },
            SnippetOptions::default(),
        )
        .expect("walk succeeds");
    (directive, prompter, notifier)
}

#[test]
fn search_selects_file_and_builds_relative_directive() {
    let repo = DocsRepo::new();
    // "Program" only matches the C# sample; then pick the "None" selector.
    let (directive, prompter, notifier) = run(
        &repo,
        "Program",
        "docs/howto/setup.md",
        vec![Answer::Choice(0), Answer::Choice(0)],
    );

    assert_eq!(
        directive.as_deref(),
        Some(r#":::code language="csharp" source="../../samples/dotnet/Program.cs":::"#)
    );
    assert_eq!(
        prompter.asked,
        vec!["Select the snippet file", "Select a snippet selector"]
    );
    assert!(notifier.warnings.is_empty());
}

#[test]
fn search_match_is_case_sensitive() {
    let repo = DocsRepo::new();
    // Only App_test.py contains "App"; app.py does not.
    let (directive, _, _) = run(
        &repo,
        "App",
        "docs/index.md",
        vec![Answer::Choice(0), Answer::Choice(1), Answer::text("tests")],
    );

    assert_eq!(
        directive.as_deref(),
        Some(r#":::code language="python" source="../samples/python/App_test.py" id=tests":::"#)
    );
}

#[test]
fn search_without_extension_asks_for_language() {
    let repo = DocsRepo::new();
    let bash = language::display_names()
        .iter()
        .position(|name| name == "Bash")
        .expect("bash is registered");
    let (directive, prompter, _) = run(
        &repo,
        "deploy",
        "docs/index.md",
        vec![
            Answer::Choice(0),
            Answer::Choice(bash),
            Answer::Choice(2),
            Answer::text("1-3"),
        ],
    );

    assert_eq!(
        directive.as_deref(),
        Some(r#":::code language="bash" source="../samples/scripts/deploy" range="1-3":::"#)
    );
    assert_eq!(prompter.asked[1], "Select the programming language");
}

#[test]
fn cancelling_language_fallback_inserts_nothing() {
    let repo = DocsRepo::new();
    let (directive, prompter, notifier) = run(
        &repo,
        "deploy",
        "docs/index.md",
        vec![Answer::Choice(0), Answer::Cancel],
    );

    assert_eq!(directive, None);
    assert_eq!(notifier.warnings, vec![NO_LANGUAGE_WARNING]);
    assert_eq!(prompter.remaining(), 0);
}

#[test]
fn cancelling_selector_value_inserts_nothing() {
    let repo = DocsRepo::new();
    let (directive, _, notifier) = run(
        &repo,
        "Program",
        "docs/index.md",
        vec![Answer::Choice(0), Answer::Choice(1), Answer::Cancel],
    );

    assert_eq!(directive, None);
    assert!(notifier.warnings.is_empty());
}
