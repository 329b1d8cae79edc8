use crate::common::DocsRepo;
use docmark_markup::quotes::{normalize, normalize_all, SkipReason};
use docmark_markup::{Document, NormalizeOutcome, QuoteSettings, TextBuffer};
use std::fs;

#[test]
fn each_pass_straightens_one_more_occurrence() {
    let mut doc = Document::markdown("“a” “b” “c”\n‘d’ ‘e’\n");
    let settings = QuoteSettings::default();

    assert_eq!(normalize(&mut doc, settings).unwrap(), NormalizeOutcome::Applied(4));
    assert_eq!(doc.text(), "\"a\" “b” “c”\n'd' ‘e’\n");

    assert_eq!(normalize(&mut doc, settings).unwrap(), NormalizeOutcome::Applied(4));
    assert_eq!(doc.text(), "\"a\" \"b\" “c”\n'd' 'e'\n");

    assert_eq!(normalize(&mut doc, settings).unwrap(), NormalizeOutcome::Applied(2));
    assert_eq!(normalize(&mut doc, settings).unwrap(), NormalizeOutcome::Clean);
}

#[test]
fn saved_document_keeps_other_text_intact() {
    let repo = DocsRepo::new();
    repo.write("docs/quotes.md", "# Title\n\nShe said “don’t”.\n");
    let path = repo.path("docs/quotes.md");

    let mut doc = Document::open(&path).unwrap();
    assert_eq!(normalize_all(&mut doc, QuoteSettings::default()).unwrap(), 3);
    doc.save().unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# Title\n\nShe said \"don't\".\n"
    );
}

#[test]
fn yaml_files_are_left_alone() {
    let repo = DocsRepo::new();
    repo.write("docs/toc.yml", "- name: “Intro”\n");
    let mut doc = Document::open(repo.path("docs/toc.yml")).unwrap();

    assert_eq!(
        normalize(&mut doc, QuoteSettings::default()).unwrap(),
        NormalizeOutcome::Skipped(SkipReason::NotMarkdown)
    );
}
