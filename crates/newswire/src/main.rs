#![allow(unused)]

use std::ffi::OsString;

use crate::prelude::*;
use clap::Parser;

mod client;
mod everything;
mod headlines;
mod output;
mod prelude;
mod sources;

/// Query the NewsAPI v2 endpoints from the command line.
#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    infer_subcommands = true,
    disable_help_subcommand = true,
    arg_required_else_help = true
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

/// Output and diagnostic options shared by every subcommand.
#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Emit the raw API response as compact JSON
    #[clap(long, global = true)]
    json: bool,

    /// Emit the raw API response as indented JSON
    #[clap(long, global = true, conflicts_with = "json")]
    pretty: bool,

    /// Write the rendered output to a file instead of stdout
    #[clap(long, global = true, value_name = "PATH")]
    output: Option<std::path::PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "NEWSWIRE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Top headlines for a country or an explicit set of sources
    Headlines(headlines::Options),

    /// The catalog of publishers available through the API
    Sources(sources::Options),

    /// Full-archive article search
    Everything(everything::Options),
}

/// Commands match case-insensitively, and the bare `help`/`version` words
/// resolve before any prefix matching happens. Option tokens pass through
/// untouched; prefix resolution itself is clap's subcommand inference.
fn normalize_args(mut args: Vec<OsString>) -> Vec<OsString> {
    if let Some(first) = args.get_mut(1) {
        if let Some(token) = first.to_str() {
            let lowered = token.to_ascii_lowercase();
            match lowered.as_str() {
                "help" => *first = OsString::from("--help"),
                "version" | "-v" => *first = OsString::from("--version"),
                _ if !lowered.starts_with('-') => *first = OsString::from(lowered),
                _ => {}
            }
        }
    }
    args
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse_from(normalize_args(std::env::args_os().collect()));

    match app.command {
        SubCommands::Headlines(options) => headlines::run(options, app.global).await,
        SubCommands::Sources(options) => sources::run(options, app.global).await,
        SubCommands::Everything(options) => everything::run(options, app.global).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newswire_core::enums::{Category, SearchIn, SortBy};

    fn parse(tokens: &[&str]) -> Result<App, clap::Error> {
        let args = normalize_args(tokens.iter().map(OsString::from).collect());
        App::try_parse_from(args)
    }

    #[test]
    fn test_every_headlines_prefix_resolves() {
        let name = "headlines";
        for end in 1..=name.len() {
            let app = parse(&["newswire", &name[..end], "--country", "us"]).unwrap();
            assert!(
                matches!(app.command, SubCommands::Headlines(_)),
                "prefix '{}' did not resolve",
                &name[..end]
            );
        }
    }

    #[test]
    fn test_every_sources_prefix_resolves() {
        let name = "sources";
        for end in 1..=name.len() {
            let app = parse(&["newswire", &name[..end]]).unwrap();
            assert!(
                matches!(app.command, SubCommands::Sources(_)),
                "prefix '{}' did not resolve",
                &name[..end]
            );
        }
    }

    #[test]
    fn test_every_everything_prefix_resolves() {
        let name = "everything";
        for end in 1..=name.len() {
            let app = parse(&["newswire", &name[..end], "--query", "x"]).unwrap();
            assert!(
                matches!(app.command, SubCommands::Everything(_)),
                "prefix '{}' did not resolve",
                &name[..end]
            );
        }
    }

    #[test]
    fn test_prefixes_match_case_insensitively() {
        let app = parse(&["newswire", "HEAD", "--country", "us"]).unwrap();
        assert!(matches!(app.command, SubCommands::Headlines(_)));

        let app = parse(&["newswire", "Sources"]).unwrap();
        assert!(matches!(app.command, SubCommands::Sources(_)));

        let app = parse(&["newswire", "EV", "--query", "x"]).unwrap();
        assert!(matches!(app.command, SubCommands::Everything(_)));
    }

    #[test]
    fn test_unrecognized_command_fails() {
        assert!(parse(&["newswire", "weather"]).is_err());
    }

    #[test]
    fn test_help_tokens_short_circuit() {
        for tokens in [
            ["newswire", "help"],
            ["newswire", "--help"],
            ["newswire", "-h"],
        ] {
            let err = parse(&tokens).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        }
    }

    #[test]
    fn test_version_tokens_short_circuit() {
        for tokens in [
            ["newswire", "version"],
            ["newswire", "--version"],
            ["newswire", "-v"],
        ] {
            let err = parse(&tokens).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        }
    }

    #[test]
    fn test_empty_input_shows_help() {
        let err = parse(&["newswire"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn test_headlines_defaults() {
        let app = parse(&["newswire", "headlines", "--country", "us"]).unwrap();

        match app.command {
            SubCommands::Headlines(options) => {
                assert_eq!(options.category, Category::General);
                assert_eq!(options.page_size, 20);
                assert_eq!(options.page, 1);
            }
            _ => panic!("expected headlines"),
        }
    }

    #[test]
    fn test_everything_defaults_override_page_size() {
        let app = parse(&["newswire", "everything", "--query", "bitcoin"]).unwrap();

        match app.command {
            SubCommands::Everything(options) => {
                assert_eq!(options.page_size, 100);
                assert_eq!(options.page, 1);
                assert_eq!(options.sort_by, SortBy::PublishedAt);
            }
            _ => panic!("expected everything"),
        }
    }

    #[test]
    fn test_list_options_split_on_commas() {
        let app = parse(&[
            "newswire",
            "everything",
            "--query",
            "rust",
            "--search-in",
            "title,content",
            "--domains",
            "wired.com,arstechnica.com",
        ])
        .unwrap();

        match app.command {
            SubCommands::Everything(options) => {
                assert_eq!(options.search_in, vec![SearchIn::Title, SearchIn::Content]);
                assert_eq!(
                    options.domains,
                    vec!["wired.com".to_string(), "arstechnica.com".to_string()]
                );
            }
            _ => panic!("expected everything"),
        }
    }

    #[test]
    fn test_sort_by_accepts_hyphenated_form() {
        let app = parse(&[
            "newswire",
            "everything",
            "--query",
            "rust",
            "--sort-by",
            "published-at",
        ])
        .unwrap();

        match app.command {
            SubCommands::Everything(options) => {
                assert_eq!(options.sort_by, SortBy::PublishedAt)
            }
            _ => panic!("expected everything"),
        }
    }

    #[test]
    fn test_invalid_enum_value_is_fatal() {
        assert!(parse(&["newswire", "headlines", "--category", "politics"]).is_err());
        assert!(parse(&["newswire", "everything", "-q", "x", "--sort-by", "newest"]).is_err());
    }

    #[test]
    fn test_page_size_range_is_enforced() {
        assert!(parse(&["newswire", "headlines", "--page-size", "0"]).is_err());
        assert!(parse(&["newswire", "headlines", "--page-size", "101"]).is_err());
        assert!(parse(&["newswire", "headlines", "--page-size", "100"]).is_ok());
    }

    #[test]
    fn test_unrecognized_option_is_fatal() {
        assert!(parse(&["newswire", "sources", "--nope"]).is_err());
    }

    #[test]
    fn test_json_and_pretty_conflict() {
        assert!(parse(&["newswire", "sources", "--json", "--pretty"]).is_err());
    }

    #[test]
    fn test_global_output_flags_propagate_from_subcommand_position() {
        let app = parse(&["newswire", "sources", "--json", "--output", "out.md"]).unwrap();

        assert!(app.global.json);
        assert!(!app.global.pretty);
        assert_eq!(
            app.global.output,
            Some(std::path::PathBuf::from("out.md"))
        );
    }
}
