use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bessel_ladder::design::{FilterType, Response};
use bessel_ladder::export::{write_batch, write_result, OutputFormat};
use bessel_ladder::service::{FilterSpec, DEFAULT_LOAD_OHMS};
use clap::{Args, Parser, Subcommand, ValueEnum};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Design(args) => execute_design(args),
        Commands::Batch(args) => execute_batch(args),
    };
    if let Err(e) = &outcome {
        log::error!("{e:#}");
    }
    outcome
}

#[derive(Parser)]
#[command(author, version, about = "Component values for passive Bessel LC filters")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print component values for a single filter.
    Design(DesignArgs),
    /// Print component values for every filter listed in a JSON file.
    Batch(BatchArgs),
}

#[derive(Args)]
struct DesignArgs {
    /// Filter response.
    #[arg(short, long, value_enum, default_value_t = ResponseArg::Bessel)]
    response: ResponseArg,
    /// Type of filter.
    #[arg(short = 't', long = "type", value_enum)]
    filter_type: TypeArg,
    /// Filter order (1-10).
    #[arg(short, long)]
    order: usize,
    /// Cutoff frequency, or centre frequency for bandpass (MHz).
    #[arg(short, long)]
    frequency: f64,
    /// Bandwidth (MHz), bandpass only.
    #[arg(short, long)]
    bandwidth: Option<f64>,
    /// Output load resistance (Ohm).
    #[arg(short, long, default_value_t = DEFAULT_LOAD_OHMS)]
    load: f64,
    /// Output encoding.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
}

#[derive(Args)]
struct BatchArgs {
    /// JSON array of filter descriptions.
    file: PathBuf,
    /// Output encoding.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
}

fn execute_design(args: DesignArgs) -> Result<()> {
    let spec = FilterSpec {
        response: args.response.into(),
        filter_type: args.filter_type.into(),
        order: args.order,
        frequency_mhz: args.frequency,
        bandwidth_mhz: args.bandwidth,
        load: args.load,
    };
    let result = spec
        .values()
        .with_context(|| format!("cannot design {}", spec.label()))?;
    write_result(io::stdout().lock(), &result, args.format.into())
}

fn execute_batch(args: BatchArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let specs: Vec<FilterSpec> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a valid filter list", args.file.display()))?;
    log::debug!("{} filters in {}", specs.len(), args.file.display());

    let mut entries = Vec::with_capacity(specs.len());
    for (i, spec) in specs.into_iter().enumerate() {
        let result = spec
            .values()
            .with_context(|| format!("filter #{i} ({})", spec.label()))?;
        entries.push((spec, result));
    }
    write_batch(io::stdout().lock(), &entries, args.format.into())
}

// ---------------------------------------------------------------------------
// Argument enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ResponseArg {
    Bessel,
}

impl From<ResponseArg> for Response {
    fn from(response: ResponseArg) -> Self {
        match response {
            ResponseArg::Bessel => Response::Bessel,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TypeArg {
    #[value(alias = "lp")]
    Lowpass,
    #[value(alias = "hp")]
    Highpass,
    #[value(alias = "bp")]
    Bandpass,
}

impl From<TypeArg> for FilterType {
    fn from(filter_type: TypeArg) -> Self {
        match filter_type {
            TypeArg::Lowpass => FilterType::Lowpass,
            TypeArg::Highpass => FilterType::Highpass,
            TypeArg::Bandpass => FilterType::Bandpass,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}
