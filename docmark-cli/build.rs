use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, Shell};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs, trimmed to what completions use.
// Build scripts can't access src/ modules, so it is duplicated here
fn completion_cli() -> Command {
    Command::new("docmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Authoring helpers for Markdown documentation")
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(Arg::new("set").long("set").action(ArgAction::Append).global(true))
        .arg(
            Arg::new("insert")
                .long("insert")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(Arg::new("at").long("at").global(true))
        .subcommand(Command::new("table").arg(Arg::new("size").index(1)))
        .subcommand(
            Command::new("snippet")
                .subcommand(
                    Command::new("search")
                        .arg(Arg::new("term").index(1))
                        .arg(Arg::new("root").long("root").value_hint(ValueHint::DirPath))
                        .arg(
                            Arg::new("document")
                                .long("document")
                                .value_hint(ValueHint::FilePath),
                        ),
                )
                .subcommand(
                    Command::new("repo")
                        .arg(Arg::new("name").index(1))
                        .arg(Arg::new("path").index(2)),
                ),
        )
        .subcommand(
            Command::new("link")
                .subcommand(Command::new("internal"))
                .subcommand(Command::new("external"))
                .subcommand(Command::new("video"))
                .subcommand(Command::new("include")),
        )
        .subcommand(
            Command::new("alert").arg(
                Arg::new("kind")
                    .index(1)
                    .value_parser(["note", "tip", "important", "caution", "warning"]),
            ),
        )
        .subcommand(
            Command::new("emphasis").arg(
                Arg::new("style")
                    .index(1)
                    .value_parser(["bold", "italic", "code"]),
            ),
        )
        .subcommand(
            Command::new("smart-quotes").arg(
                Arg::new("file")
                    .index(1)
                    .value_hint(ValueHint::FilePath),
            ),
        )
        .subcommand(Command::new("languages"))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = completion_cli();

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        generate_to(shell, &mut cmd, "docmark", &outdir)?;
    }

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
