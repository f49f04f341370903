//! Recovers the secrets of Shamir share sets.
use std::{
    fs::File,
    io::{self, BufReader},
    process::exit,
};

use ansi_term::Color::Red;
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches};
use shamir_secret_sharing::shamir::DivisionPolicy;
use slog::{error, Level};

use shamir_tools::{
    logger::{self, get_logger},
    recover::{recover, Options, Report},
};

/// Reads the share set from standard input.
const STDIN: &str = "-";

fn command() -> clap::Command {
    clap::Command::new("shamir-recover")
        .about("Recovers the secret of Shamir share sets with values in bases 2 to 16")
        .version(clap::crate_version!())
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .help("Share set JSON files, - for standard input")
                .action(ArgAction::Append)
                .required(true),
        )
        .arg(
            Arg::new("division")
                .long("division")
                .help("Division of the Lagrange terms")
                .value_parser(["truncate", "exact"])
                .default_value("truncate"),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .action(ArgAction::SetTrue)
                .help("Check the shares beyond the threshold against the polynomial"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Most verbose level to log")
                .value_parser(["error", "warning", "info", "debug"])
                .default_value("warning"),
        )
}

fn parse_options(matches: &ArgMatches) -> Options {
    let policy = match matches.get_one::<String>("division").map(String::as_str) {
        Some("exact") => DivisionPolicy::Exact,
        _ => DivisionPolicy::Truncate,
    };

    Options {
        policy,
        verify: matches.get_flag("verify"),
    }
}

fn parse_level(matches: &ArgMatches) -> Level {
    match matches.get_one::<String>("log-level").map(String::as_str) {
        Some("error") => Level::Error,
        Some("info") => Level::Info,
        Some("debug") => Level::Debug,
        _ => Level::Warning,
    }
}

fn recover_file(source: &str, options: &Options) -> Result<Report> {
    if source == STDIN {
        return recover("stdin", io::stdin().lock(), options);
    }

    let file = File::open(source).with_context(|| format!("failed to open {}", source))?;
    recover(source, BufReader::new(file), options)
}

fn print_report(report: &Report, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
        return Ok(());
    }

    println!("Secret for {}: {}", report.source, report.secret);
    if let Some(invalid) = report.invalid_shares.as_ref().filter(|ids| !ids.is_empty()) {
        let ids: Vec<_> = invalid.iter().map(u64::to_string).collect();
        println!("Invalid shares for {}: {}", report.source, ids.join(", "));
    }
    Ok(())
}

fn real_main() -> Result<bool> {
    let matches = command().get_matches();
    logger::set_level(parse_level(&matches));
    let logger = get_logger("tools/main");

    let options = parse_options(&matches);
    let json = matches.get_one::<String>("format").map(String::as_str) == Some("json");

    // Share sets are independent, a failing one does not stop the others.
    let mut success = true;
    for source in matches.get_many::<String>("files").into_iter().flatten() {
        match recover_file(source, &options) {
            Ok(report) => print_report(&report, json)?,
            Err(err) => {
                error!(logger, "Failed to recover secret";
                    "source" => source,
                    "err" => format!("{:#}", err),
                );
                eprintln!("{} {:#}", Red.bold().paint("error:"), err);
                success = false;
            }
        }
    }

    Ok(success)
}

fn main() {
    match real_main() {
        Ok(true) => (),
        Ok(false) => exit(1),
        Err(error) => {
            eprintln!("{} {}", Red.bold().paint("error:"), error);
            exit(128);
        }
    }
}

#[cfg(test)]
mod tests {
    use shamir_secret_sharing::shamir::DivisionPolicy;
    use slog::Level;

    use super::{command, parse_level, parse_options};

    #[test]
    fn test_command() {
        command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let matches = command().get_matches_from(["shamir-recover", "a.json"]);
        let options = parse_options(&matches);
        assert_eq!(options.policy, DivisionPolicy::Truncate);
        assert!(!options.verify);
        assert_eq!(parse_level(&matches), Level::Warning);
    }

    #[test]
    fn test_flags() {
        let matches = command().get_matches_from([
            "shamir-recover",
            "--division",
            "exact",
            "--verify",
            "--log-level",
            "debug",
            "a.json",
            "b.json",
        ]);
        let options = parse_options(&matches);
        assert_eq!(options.policy, DivisionPolicy::Exact);
        assert!(options.verify);
        assert_eq!(parse_level(&matches), Level::Debug);

        let files: Vec<_> = matches.get_many::<String>("files").unwrap().collect();
        assert_eq!(files, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_invalid_division() {
        let result =
            command().try_get_matches_from(["shamir-recover", "--division", "round", "a.json"]);
        assert!(result.is_err());
    }
}
