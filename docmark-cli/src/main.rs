// Command-line host for the docmark authoring commands
//
// Every command produces a piece of Markdown: a table skeleton, a :::code snippet
// directive, a link, an alert. By default the markup is printed to stdout so it
// can be piped into an editor. With --insert <file> --at <line:col> it is
// written straight into the document at that position instead.
//
// Commands that need more input than was given on the command line ask for it
// interactively: prompts and choices are printed to stderr, answers are read
// from stdin. Dismissing a prompt (end of input, an empty or invalid choice)
// ends the command without output and with exit status 1.
//
// Usage:
//  docmark table [C:R]
//  docmark snippet search <term> --root <dir> --document <file>
//  docmark snippet repo <name> <path>
//  docmark link internal|external|video|include ...
//  docmark alert [kind] [text]
//  docmark emphasis bold|italic|code <text>
//  docmark smart-quotes <file> [--write] [--all]
//  docmark languages [--json]
//
// Configuration is read from the embedded defaults, then ./docmark.toml if it
// exists, then --config <path>, then any --set key=value overrides.

mod terminal;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use docmark_config::{DocmarkConfig, Loader};
use docmark_markup::alerts::{self, AlertKind};
use docmark_markup::commands::NOT_A_WEB_URL;
use docmark_markup::emphasis;
use docmark_markup::language;
use docmark_markup::links::{self, classify_target};
use docmark_markup::quotes::{self, SkipReason};
use docmark_markup::{
    AuthoringSession, ContentType, Document, NormalizeOutcome, PathStyle, Position,
    QuoteSettings, SnippetOptions, SnippetSource, TextBuffer, WalkLister,
};
use std::io;
use std::path::{Path, PathBuf};
use terminal::{StderrNotifier, TerminalPrompter};

fn build_cli() -> Command {
    Command::new("docmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Authoring helpers for Markdown documentation")
        .long_about(
            "docmark generates the Markdown an author would otherwise type by hand.\n\n\
            Commands:\n  \
            - table:        pipe table skeletons from a C:R size\n  \
            - snippet:      :::code directives for sample files\n  \
            - link:         internal, external, video and include links\n  \
            - alert:        > [!NOTE] style callouts\n  \
            - emphasis:     bold / italic / code toggles\n  \
            - smart-quotes: straighten curly quotes in a Markdown file\n\n\
            Examples:\n  \
            docmark table 3:4                                   # 3 columns, 4 rows\n  \
            docmark snippet search app.py --root . --document docs/index.md\n  \
            docmark link external https://example.com --title Example\n  \
            docmark table 2:2 --insert docs/index.md --at 5:1    # write into a file",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a docmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .help("Override a configuration key (e.g. smart_quotes.enabled=false)")
                .action(ArgAction::Append)
                .global(true),
        )
        .arg(
            Arg::new("insert")
                .long("insert")
                .value_name("FILE")
                .help("Insert the generated markup into FILE instead of printing it")
                .requires("at")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("at")
                .long("at")
                .value_name("LINE:COL")
                .help("Insertion point (1-based) for --insert")
                .value_parser(parse_position)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print debug logging to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("table")
                .about("Generate a Markdown table skeleton")
                .long_about(
                    "Generate a pipe table with labelled header and row cells.\n\n\
                    The size is given as C:R (columns:rows). Up to 4 columns and 50 rows\n\
                    are supported. When the size is omitted it is asked for.",
                )
                .arg(
                    Arg::new("size")
                        .help("Table size as C:R, e.g. 3:4")
                        .index(1)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("snippet")
                .about("Generate a :::code snippet directive")
                .subcommand_required(true)
                .subcommand(
                    Command::new("search")
                        .about("Find the snippet file by searching a directory")
                        .arg(
                            Arg::new("term")
                                .help("Text the file path must contain (case-sensitive)")
                                .required(true)
                                .index(1),
                        )
                        .arg(
                            Arg::new("root")
                                .long("root")
                                .help("Directory to search")
                                .default_value(".")
                                .value_hint(ValueHint::DirPath),
                        )
                        .arg(
                            Arg::new("document")
                                .long("document")
                                .help("Document the directive is written into")
                                .required(true)
                                .value_hint(ValueHint::FilePath),
                        ),
                )
                .subcommand(
                    Command::new("repo")
                        .about("Reference a file in a repository checked out next to this one")
                        .arg(
                            Arg::new("name")
                                .help("Repository name")
                                .required(true)
                                .index(1),
                        )
                        .arg(
                            Arg::new("path")
                                .help("Path of the file inside the repository")
                                .required(true)
                                .index(2),
                        ),
                ),
        )
        .subcommand(
            Command::new("link")
                .about("Generate a link")
                .subcommand_required(true)
                .subcommand(
                    Command::new("internal")
                        .about("Link to a file in this repository")
                        .arg(Arg::new("path").help("Link target").index(1))
                        .arg(
                            Arg::new("text")
                                .long("text")
                                .help("Link text (alt text for images)")
                                .default_value(""),
                        )
                        .arg(
                            Arg::new("image")
                                .long("image")
                                .help("Generate image syntax (![alt](path))")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(
                    Command::new("external")
                        .about("Link to a web page")
                        .arg(Arg::new("url").help("http(s) URL").index(1))
                        .arg(
                            Arg::new("title")
                                .long("title")
                                .help("Link text (defaults to the URL)"),
                        ),
                )
                .subcommand(
                    Command::new("video")
                        .about("Embed a video")
                        .arg(Arg::new("url").help("http(s) URL of the video").index(1)),
                )
                .subcommand(
                    Command::new("include")
                        .about("Include another Markdown file")
                        .arg(Arg::new("path").help("Path of the include file").index(1))
                        .arg(
                            Arg::new("title")
                                .long("title")
                                .help("Include title (defaults to the file stem)"),
                        ),
                ),
        )
        .subcommand(
            Command::new("alert")
                .about("Generate an alert callout")
                .arg(
                    Arg::new("kind")
                        .help("note, tip, important, caution or warning")
                        .index(1),
                )
                .arg(
                    Arg::new("text")
                        .help("Alert text")
                        .index(2)
                        .default_value(""),
                ),
        )
        .subcommand(
            Command::new("emphasis")
                .about("Toggle bold, italic or code markers around text")
                .arg(
                    Arg::new("style")
                        .help("Marker to toggle")
                        .required(true)
                        .index(1)
                        .value_parser(["bold", "italic", "code"]),
                )
                .arg(
                    Arg::new("text")
                        .help("Selected text")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("language")
                        .long("language")
                        .help("Language for fenced code blocks"),
                ),
        )
        .subcommand(
            Command::new("smart-quotes")
                .about("Straighten curly quotes in a Markdown file")
                .long_about(
                    "Run one smart-quote pass over a Markdown file.\n\n\
                    A pass replaces the first occurrence of each of the curly quotes\n\
                    (double and single, opening and closing). Use --all to repeat\n\
                    passes until none are left. The result is printed unless --write\n\
                    is given.",
                )
                .arg(
                    Arg::new("file")
                        .help("Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("write")
                        .long("write")
                        .help("Write the result back to the file")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .help("Repeat passes until the file is clean")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("languages")
                .about("List the languages known to snippet directives")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the catalog as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_flag("verbose"));

    let overrides: Vec<String> = matches
        .get_many::<String>("set")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &overrides,
    );

    let target = matches.get_one::<String>("insert").map(PathBuf::from);
    let at = matches.get_one::<Position>("at").copied();
    let insertion = target.as_deref().zip(at);

    let stdin = io::stdin();
    let mut prompter = TerminalPrompter::new(stdin.lock(), io::stderr());
    let mut notifier = StderrNotifier;
    let mut session = AuthoringSession::new(&mut prompter, &mut notifier);

    let markup = match matches.subcommand() {
        Some(("table", sub)) => match sub.get_one::<String>("size") {
            Some(size) => session.table_from(size),
            None => session.insert_table(),
        },
        Some(("snippet", sub)) => handle_snippet_command(&mut session, sub, &config),
        Some(("link", sub)) => {
            let content_type = target
                .as_deref()
                .map(ContentType::from_path)
                .unwrap_or_default();
            handle_link_command(&mut session, sub, &config, &content_type)
        }
        Some(("alert", sub)) => handle_alert_command(&mut session, sub),
        Some(("emphasis", sub)) => Some(handle_emphasis_command(sub)),
        Some(("smart-quotes", sub)) => {
            handle_smart_quotes_command(sub, &config);
            return;
        }
        Some(("languages", sub)) => {
            handle_languages_command(sub.get_flag("json"));
            return;
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    match markup {
        Some(markup) => emit(&markup, insertion),
        None => std::process::exit(1),
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Handle the snippet command
fn handle_snippet_command(
    session: &mut AuthoringSession<'_>,
    matches: &ArgMatches,
    config: &DocmarkConfig,
) -> Option<String> {
    let lister = WalkLister::new(config.snippet.respect_ignore_files);
    let options = SnippetOptions::from(&config.snippet);

    let result = match matches.subcommand() {
        Some(("search", sub)) => {
            let term = sub.get_one::<String>("term").expect("term is required");
            let root = absolute(sub.get_one::<String>("root").expect("root has a default"));
            let document = absolute(
                sub.get_one::<String>("document")
                    .expect("document is required"),
            );
            session.insert_snippet(
                &lister,
                SnippetSource::Search {
                    term,
                    root: &root,
                    document: &document,
                },
                options,
            )
        }
        Some(("repo", sub)) => {
            let name = sub.get_one::<String>("name").expect("name is required");
            let path = sub.get_one::<String>("path").expect("path is required");
            session.insert_snippet(&lister, SnippetSource::Repository { name, path }, options)
        }
        _ => unreachable!("clap requires a snippet subcommand"),
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

/// Handle the link command
fn handle_link_command(
    session: &mut AuthoringSession<'_>,
    matches: &ArgMatches,
    config: &DocmarkConfig,
    content_type: &ContentType,
) -> Option<String> {
    let style = PathStyle::from(config.links.path_style);

    match matches.subcommand() {
        Some(("internal", sub)) => {
            let text = sub.get_one::<String>("text").expect("text has a default");
            let is_art = sub.get_flag("image");
            match sub.get_one::<String>("path") {
                Some(path) => Some(links::internal_link(is_art, path, text, content_type, style)),
                None => session.insert_internal_link(text, is_art, content_type, style),
            }
        }
        Some(("external", sub)) => {
            let title = sub.get_one::<String>("title").map(|s| s.as_str());
            match sub.get_one::<String>("url") {
                Some(url) => require_web_url(url).map(|url| links::external_link(url, title)),
                None => session.insert_external_link(title.unwrap_or_default()),
            }
        }
        Some(("video", sub)) => match sub.get_one::<String>("url") {
            Some(url) => require_web_url(url).map(links::video_link),
            None => session.insert_video(),
        },
        Some(("include", sub)) => match sub.get_one::<String>("path") {
            Some(path) => {
                let title = sub.get_one::<String>("title").cloned().unwrap_or_else(|| {
                    Path::new(path)
                        .file_stem()
                        .map(|stem| stem.to_string_lossy().to_string())
                        .unwrap_or_default()
                });
                Some(links::include_link(&title, path))
            }
            None => session.insert_include(),
        },
        _ => unreachable!("clap requires a link subcommand"),
    }
}

fn require_web_url(url: &str) -> Option<&str> {
    if classify_target(url).is_web() {
        Some(url)
    } else {
        eprintln!("Warning: {NOT_A_WEB_URL}");
        None
    }
}

/// Handle the alert command
fn handle_alert_command(session: &mut AuthoringSession<'_>, matches: &ArgMatches) -> Option<String> {
    let text = matches.get_one::<String>("text").expect("text has a default");
    match matches.get_one::<String>("kind") {
        Some(kind) => match kind.parse::<AlertKind>() {
            Ok(kind) => Some(alerts::alert(kind, text)),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => session.insert_alert(text),
    }
}

/// Handle the emphasis command
fn handle_emphasis_command(matches: &ArgMatches) -> String {
    let text = matches.get_one::<String>("text").expect("text is required");
    match matches.get_one::<String>("style").map(|s| s.as_str()) {
        Some("bold") => emphasis::toggle_bold(text),
        Some("italic") => emphasis::toggle_italic(text),
        _ => emphasis::toggle_code(
            text,
            matches.get_one::<String>("language").map(|s| s.as_str()),
        ),
    }
}

/// Handle the smart-quotes command
fn handle_smart_quotes_command(matches: &ArgMatches, config: &DocmarkConfig) {
    let file = matches.get_one::<String>("file").expect("file is required");
    let mut doc = Document::open(file).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let settings = QuoteSettings::from(&config.smart_quotes);

    let all = matches.get_flag("all");
    let result = quotes::normalize(&mut doc, settings).and_then(|first| match first {
        NormalizeOutcome::Applied(count) if all => quotes::normalize_all(&mut doc, settings)
            .map(|rest| NormalizeOutcome::Applied(count + rest)),
        other => Ok(other),
    });
    let outcome = result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    match outcome {
        NormalizeOutcome::Skipped(SkipReason::Disabled) => {
            eprintln!("Smart quote replacement is disabled (smart_quotes.enabled)");
        }
        NormalizeOutcome::Skipped(SkipReason::NotMarkdown) => {
            eprintln!("'{file}' is not a Markdown file; left unchanged");
        }
        NormalizeOutcome::Clean => eprintln!("No smart quotes found"),
        NormalizeOutcome::Applied(count) => eprintln!("Straightened {count} smart quotes"),
    }

    if matches.get_flag("write") {
        doc.save().unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
    } else {
        print!("{}", doc.text());
    }
}

/// Handle the languages command
fn handle_languages_command(json: bool) {
    if json {
        let output = serde_json::to_string_pretty(language::catalog()).unwrap_or_else(|e| {
            eprintln!("JSON serialization failed: {e}");
            std::process::exit(1);
        });
        println!("{output}");
        return;
    }

    for lang in language::catalog() {
        println!(
            "{:<18} {:<16} {}",
            lang.name,
            lang.alias(),
            lang.extensions.join(" ")
        );
    }
}

/// Print the markup, or insert it into the target document.
fn emit(markup: &str, insertion: Option<(&Path, Position)>) {
    let Some((path, at)) = insertion else {
        if markup.ends_with('\n') {
            print!("{markup}");
        } else {
            println!("{markup}");
        }
        return;
    };

    let result = Document::open(path).and_then(|mut doc| {
        doc.insert(at, markup)?;
        doc.save()
    });
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn absolute(path: &str) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| PathBuf::from(path))
}

/// Parse a 1-based `LINE:COL` into a zero-based position.
fn parse_position(raw: &str) -> Result<Position, String> {
    let (line, column) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got '{raw}'"))?;
    let line = line
        .parse::<usize>()
        .map_err(|e| format!("invalid line '{line}': {e}"))?;
    let column = column
        .parse::<usize>()
        .map_err(|e| format!("invalid column '{column}': {e}"))?;
    Ok(Position::new(line.saturating_sub(1), column.saturating_sub(1)))
}

fn load_cli_config(explicit_path: Option<&str>, overrides: &[String]) -> DocmarkConfig {
    layer_cli_config(
        Loader::new().with_optional_file("docmark.toml"),
        explicit_path,
        overrides,
    )
}

/// Layer `--config` and `--set` on top of `loader` and build the result.
fn layer_cli_config(
    loader: Loader,
    explicit_path: Option<&str>,
    overrides: &[String],
) -> DocmarkConfig {
    let mut loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    for raw in overrides {
        let Some((key, value)) = raw.split_once('=') else {
            eprintln!("Invalid --set '{raw}': expected KEY=VALUE");
            std::process::exit(1);
        };
        let applied = match parse_bool_value(value) {
            Some(flag) => loader.set_override(key, flag),
            None => loader.set_override(key, value),
        };
        loader = applied.unwrap_or_else(|err| {
            eprintln!("Invalid --set '{raw}': {err}");
            std::process::exit(1);
        });
    }

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn parse_bool_value(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}
