use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use summit_migrate::{flatten, journal_club, reorganize, MigrateConfig, ReorganizeOptions};

fn cli() -> Command {
    Command::new("summit-migrate")
        .version(summit_migrate::VERSION)
        .about("One-shot people, summit and journal-club content migrations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("root")
                .long("root")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Site root the content paths are resolved against"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML file overriding the default content layout"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print the run report as JSON"),
        )
        .subcommand(
            Command::new("flatten")
                .about("Merge per-edition people into flat records and update summits"),
        )
        .subcommand(
            Command::new("reorganize")
                .about("Split flat people into edition directories and archive posts")
                .arg(
                    Arg::new("skip-posts")
                        .long("skip-posts")
                        .action(ArgAction::SetTrue)
                        .help("Leave the posts directory where it is"),
                ),
        )
        .subcommand(
            Command::new("journal-club")
                .about("Rewrite journal club entries to the speaker-name/links shape"),
        )
}

fn load_config(matches: &ArgMatches) -> Result<MigrateConfig> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => MigrateConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => MigrateConfig::new(),
    };
    Ok(match matches.get_one::<PathBuf>("root") {
        Some(root) => config.with_root(root),
        None => config,
    })
}

fn emit<R: Serialize + Display>(report: &R, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report).context("serializing report")?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let config = load_config(&matches)?;
    let json = matches.get_flag("json");
    tracing::debug!(root = %config.root.display(), "resolved configuration");

    match matches.subcommand() {
        Some(("flatten", _)) => {
            let report = flatten::run(&config).context("flatten failed")?;
            emit(&report, json)
        }
        Some(("reorganize", args)) => {
            let options = ReorganizeOptions::new().with_archive_posts(!args.get_flag("skip-posts"));
            let report = reorganize::run(&config, options).context("reorganize failed")?;
            emit(&report, json)
        }
        Some(("journal-club", _)) => {
            let report = journal_club::run(&config).context("journal club migration failed")?;
            emit(&report, json)
        }
        _ => unreachable!("subcommand is required"),
    }
}
