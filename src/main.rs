use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use isostamp::{batch, logging, Precision, RawTimestamp};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "isostamp")]
#[command(about = "Format fixed-point timestamps as UTC ISO-8601 strings", long_about = None)]
struct Cli {
    /// Write logs to DIR/isostamp.log instead of stderr
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format one timestamp value
    Format {
        /// Fractional-second precision (0-12)
        #[arg(short, long)]
        precision: i64,

        /// Compact value: milliseconds for precision 0-3, microseconds for 4-6
        #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["micros", "picos"])]
        value: Option<i64>,

        /// Epoch microseconds for precision 7-12
        #[arg(long, allow_hyphen_values = true)]
        micros: Option<i64>,

        /// Sub-microsecond remainder (0-999) for precision 7-12
        #[arg(long, requires = "micros")]
        picos: Option<u16>,
    },
    /// Print the maximum formatted length for a precision
    Bound {
        /// Fractional-second precision (0-12)
        #[arg(short, long)]
        precision: i64,

        /// Check that a declared output capacity equals the bound exactly
        #[arg(long)]
        declared: Option<usize>,
    },
    /// Format a JSON array of requests
    Batch {
        /// Path to a JSON file of {"precision", "raw"} requests
        #[arg(short, long)]
        input: PathBuf,

        /// Write results here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_dir.as_deref(), cli.verbose)?;

    match cli.command {
        Commands::Format {
            precision,
            value,
            micros,
            picos,
        } => {
            let precision = Precision::new(precision)?;
            let raw = raw_from_args(value, micros, picos)?;
            let formatted = isostamp::to_iso8601(precision, raw)?;
            println!("{}", render_format(precision, &formatted, cli.json));
        }
        Commands::Bound {
            precision,
            declared,
        } => {
            let precision = Precision::new(precision)?;
            println!("{}", render_bound(precision, declared, cli.json)?);
        }
        Commands::Batch { input, output } => {
            let requests = batch::load_requests(&input)?;
            let results = batch::run(&requests);
            let rendered =
                serde_json::to_string_pretty(&results).context("Failed to serialize results")?;

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write results: {}", path.display()))?;
                    eprintln!("Results written to: {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }
    }

    Ok(())
}

/// Picks the raw encoding from the `format` flags; `--picos` defaults to 0.
fn raw_from_args(
    value: Option<i64>,
    micros: Option<i64>,
    picos: Option<u16>,
) -> Result<RawTimestamp> {
    match (value, micros) {
        (Some(value), None) if picos.is_none() => Ok(RawTimestamp::Compact(value)),
        (None, Some(epoch_micros)) => Ok(RawTimestamp::Extended {
            epoch_micros,
            picos_of_micro: picos.unwrap_or(0),
        }),
        _ => anyhow::bail!("Pass either --value (precision 0-6) or --micros (precision 7-12)"),
    }
}

fn render_format(precision: Precision, formatted: &str, as_json: bool) -> String {
    if as_json {
        json!({ "precision": precision, "value": formatted }).to_string()
    } else {
        formatted.to_string()
    }
}

fn render_bound(precision: Precision, declared: Option<usize>, as_json: bool) -> Result<String> {
    let bound = isostamp::length_bound(precision);
    if let Some(declared) = declared {
        isostamp::check_declared_capacity(precision, declared)?;
    }
    if as_json {
        Ok(json!({ "precision": precision, "length_bound": bound }).to_string())
    } else {
        Ok(bound.to_string())
    }
}
