//! # billcalc
//!
//! Calculator for the total and split costs of a bill.
//!
//! ## Usage
//!
//! ```bash
//! # Split two costs between two people
//! billcalc -n 2 --add rent 1000 utilities 50
//!
//! # Multi-word labels with a delimiter
//! billcalc -n 3 -d - -a gas-station 45.10 late-dinner 96
//!
//! # Currency symbol and JSON output
//! billcalc -n 4 -a hotel 612.40 --currency '$' --output json
//! ```
//!
//! Set `BILLCALC_DELIMITER` to give `--delimiter` a default, and `RUST_LOG`
//! (or `--verbose`) to see what the ledger is doing on stderr.

mod render;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use billcalclib::{pair_tokens, Ledger, MoneyFormat, MAX_PLACES};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use render::OutputMode;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("billcalc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Calculator for the total and split costs of a bill")
        .arg(
            Arg::new("parties")
                .short('n')
                .value_name("N")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value("1")
                .help("Number of parties to split the bill"),
        )
        .arg(
            Arg::new("add")
                .short('a')
                .long("add")
                .value_name("LABEL COST")
                .num_args(1..)
                .allow_negative_numbers(true)
                .action(ArgAction::Append)
                .required(true)
                .help("Add costs to the bill as [label] [cost] ..."),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .env("BILLCALC_DELIMITER")
                .help("Symbol used to indicate multi-word labels"),
        )
        .arg(
            Arg::new("places")
                .long("places")
                .value_parser(value_parser!(u32).range(0..=MAX_PLACES as i64))
                .help("Digits after the decimal point (default: 2)"),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .help("Currency symbol placed before amounts"),
        )
        .arg(
            Arg::new("group-separator")
                .long("group-separator")
                .help("Thousands grouping separator (default: ,)"),
        )
        .arg(
            Arg::new("decimal-point")
                .long("decimal-point")
                .help("Decimal point (default: .)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log ledger activity to stderr"),
        )
}

/// Build the money format from formatting flags
fn build_format(matches: &ArgMatches) -> MoneyFormat {
    let mut format = MoneyFormat::new();

    if let Some(places) = matches.get_one::<u32>("places") {
        format = format.with_places(*places);
    }
    if let Some(currency) = matches.get_one::<String>("currency") {
        format = format.with_currency(currency);
    }
    if let Some(separator) = matches.get_one::<String>("group-separator") {
        format = format.with_group_separator(separator);
    }
    if let Some(point) = matches.get_one::<String>("decimal-point") {
        format = format.with_decimal_point(point);
    }

    format
}

/// Install the stderr logger; `RUST_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Build the bill from arguments and render it
fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let parties = *matches.get_one::<i64>("parties").unwrap_or(&1);
    let delimiter = matches.get_one::<String>("delimiter").cloned();
    let tokens: Vec<&String> = matches
        .get_many::<String>("add")
        .map(|v| v.collect())
        .unwrap_or_default();
    let output_mode = matches
        .get_one::<String>("output")
        .map(|s| OutputMode::from_arg(s))
        .unwrap_or(OutputMode::Text);

    let mut ledger = Ledger::new(parties, delimiter)?.with_format(build_format(matches));
    for (label, cost) in pair_tokens(&tokens)? {
        ledger.add_cost(label, cost)?;
    }
    debug!(entries = ledger.entries().len(), "collected costs");

    let report = ledger.summarize()?;
    match output_mode {
        OutputMode::Text => Ok(render::render_text(&report)),
        OutputMode::Json => render::render_json(&ledger),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    let output = match run(&matches) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    let written = stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("failed to write report");
    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
