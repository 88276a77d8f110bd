//! Command-line lookups over the administrative reference dataset.
//!
//! Prints the states, LGAs, wards or polling units below a selection so the
//! results can feed scripts or a cascading-select form.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wardmap::{dataset, lookup, Coverage, SelectionPath};

mod config;
mod output;

use config::Config;
use output::{write_coverage, write_entries, OutputFormat, OutputOptions};

#[derive(Parser, Debug)]
#[command(name = "query")]
#[command(about = "Look up states, LGAs, wards and polling units")]
struct Args {
    /// Optional TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all states
    States,
    /// List the LGAs of a state
    Lgas { state: String },
    /// List the wards of an LGA
    Wards { state: String, lga: String },
    /// List the polling units of a ward
    PollingUnits {
        state: String,
        lga: String,
        ward: String,
    },
    /// List the entries below a slash-separated path, e.g. "lagos/ikeja"
    List {
        #[arg(default_value = "")]
        path: String,
    },
    /// Report how much of the dataset is populated
    Coverage {
        /// Restrict the report to one state
        #[arg(long)]
        state: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load_optional(args.config.as_deref())?;

    // Logs go to stderr so stdout stays machine-readable
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .context("Invalid log filter")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(path) = &args.config {
        debug!("Loaded config from {}", path.display());
    }

    let options = OutputOptions {
        format: args.format.unwrap_or(config.output.format),
        pretty: args.pretty || config.output.pretty,
    };

    let stdout = io::stdout().lock();

    let path = match args.command {
        Command::Coverage { state } => {
            let coverage = match state.as_deref() {
                Some(key) => match Coverage::for_state(key) {
                    Some(coverage) => coverage,
                    None => {
                        warn!("Unknown state '{}'", key);
                        Coverage::default()
                    }
                },
                None => Coverage::compute(),
            };
            coverage.log_summary();
            return write_coverage(stdout, &coverage, options);
        }
        Command::States => SelectionPath::root(),
        Command::Lgas { state } => SelectionPath::from_keys(&[state.as_str()])?,
        Command::Wards { state, lga } => {
            SelectionPath::from_keys(&[state.as_str(), lga.as_str()])?
        }
        Command::PollingUnits { state, lga, ward } => {
            SelectionPath::from_keys(&[state.as_str(), lga.as_str(), ward.as_str()])?
        }
        Command::List { path } => path
            .parse::<SelectionPath>()
            .with_context(|| format!("Invalid selection path '{}'", path))?,
    };

    let entries = lookup::list_children(&path);
    if entries.is_empty() {
        explain_empty(&path);
    } else {
        info!(
            "{} {} entries under '{}'",
            entries.len(),
            path.level(),
            path
        );
    }

    write_entries(stdout, &entries, options)
}

/// Log whether an empty result comes from an unknown key or missing data
fn explain_empty(path: &SelectionPath) {
    let known = match (path.state(), path.lga(), path.ward()) {
        (Some(state), Some(lga), Some(ward)) => dataset::find_ward(state, lga, ward).is_some(),
        (Some(state), Some(lga), None) => dataset::find_lga(state, lga).is_some(),
        (Some(state), None, _) => dataset::find_state(state).is_some(),
        (None, _, _) => true,
    };

    if known {
        info!("No {} entries recorded under '{}' yet", path.level(), path);
    } else {
        warn!("No match for '{}'", path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardmap::{Entry, Level};

    #[test]
    fn test_args_parse_polling_units() {
        let args = Args::try_parse_from([
            "query",
            "--format",
            "text",
            "polling-units",
            "lagos",
            "ikeja",
            "ikeja-central",
        ])
        .unwrap();
        assert_eq!(args.format, Some(OutputFormat::Text));
        match args.command {
            Command::PollingUnits { state, lga, ward } => {
                assert_eq!(state, "lagos");
                assert_eq!(lga, "ikeja");
                assert_eq!(ward, "ikeja-central");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_args_global_flags_after_subcommand() {
        let argv = ["query", "states", "--pretty", "-f", "csv"];
        let args = Args::try_parse_from(argv).unwrap();
        assert!(args.pretty);
        assert_eq!(args.format, Some(OutputFormat::Csv));
    }

    #[test]
    fn test_list_defaults_to_root() {
        let args = Args::try_parse_from(["query", "list"]).unwrap();
        match args.command {
            Command::List { path } => {
                let path: SelectionPath = path.parse().unwrap();
                assert_eq!(path.level(), Level::State);
                let entries: Vec<Entry> = lookup::list_children(&path);
                assert_eq!(entries.len(), dataset::states().len());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        let parsed = Args::try_parse_from(["query", "--format", "yaml", "states"]);
        assert!(parsed.is_err());
    }
}
