//! fincheck command-line tool
//!
//! Extracts checksum-valid CUSIPs, ISINs, SEDOLs and ABA routing numbers
//! from files, stdin or CSV cells.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use fincheck::{
    get_identifiers, read_csv_cells, scan_kinds, scan_windows, FincheckConfig, IdentifierKind,
    OutputFormat, Result, ScanMode,
};

#[derive(Parser, Debug)]
#[command(name = "fincheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to <config dir>/fincheck/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract identifiers from files, or stdin when none are given
    Extract(ExtractArgs),
    /// Check a single candidate's checksum
    Check {
        /// CUSIP, ISIN, SEDOL or ABA
        kind: IdentifierKind,
        value: String,
    },
    /// Windowed scan over every cell of a CSV file
    Csv(CsvArgs),
}

#[derive(Args, Debug)]
struct ExtractArgs {
    files: Vec<PathBuf>,

    /// Comma-separated kinds to extract, e.g. `cusip,isin`
    #[arg(long, value_delimiter = ',')]
    include: Vec<IdentifierKind>,

    /// Also extract ABA routing numbers
    #[arg(long)]
    aba: bool,

    /// Scan every fixed-length window instead of whole tokens
    #[arg(long)]
    windowed: bool,

    #[arg(long, value_enum)]
    format: Option<Format>,
}

#[derive(Args, Debug)]
struct CsvArgs {
    file: PathBuf,

    /// Treat the first row as data
    #[arg(long)]
    keep_headers: bool,

    /// Comma-separated kinds to scan for, e.g. `cusip,isin`
    #[arg(long, value_delimiter = ',')]
    include: Vec<IdentifierKind>,

    /// Also scan for ABA routing numbers
    #[arg(long)]
    aba: bool,

    #[arg(long, value_enum)]
    format: Option<Format>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Format {
    Json,
    Lines,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Lines => OutputFormat::Lines,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fincheck: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => FincheckConfig::load(path)?,
        None => FincheckConfig::load_standard()?,
    };

    match cli.command {
        Command::Extract(args) => {
            if !args.include.is_empty() {
                config.include = args.include;
            }
            if args.aba {
                config.include_aba = true;
            }
            if args.windowed {
                config.scan = ScanMode::Windowed;
            }
            if let Some(format) = args.format {
                config.output = format.into();
            }
            config.validate()?;

            let texts = read_inputs(&args.files)?;
            let results = extract(&texts, &config);
            print_results(&results, config.output)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { kind, value } => {
            let valid = kind.validate(&value);
            println!("{}", if valid { "valid" } else { "invalid" });
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Csv(args) => {
            if !args.include.is_empty() {
                config.include = args.include;
            }
            if args.aba {
                config.include_aba = true;
            }
            if let Some(format) = args.format {
                config.output = format.into();
            }
            config.validate()?;

            let cells = read_csv_cells(&args.file, args.keep_headers)?;
            let results = scan_kinds(&cells, &config.kinds());
            print_results(&results, config.output)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_inputs(files: &[PathBuf]) -> Result<Vec<String>> {
    if files.is_empty() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(vec![text]);
    }

    files
        .iter()
        .map(|path| -> Result<String> {
            tracing::debug!("Reading {:?}", path);
            Ok(std::fs::read_to_string(path)?)
        })
        .collect()
}

fn extract(texts: &[String], config: &FincheckConfig) -> BTreeMap<IdentifierKind, Vec<String>> {
    let mut results = BTreeMap::new();
    for kind in config.kinds() {
        let found: Vec<String> = texts
            .iter()
            .flat_map(|text| match config.scan {
                ScanMode::Bounded => get_identifiers(text, kind),
                ScanMode::Windowed => scan_windows(text, kind),
            })
            .collect();
        results.insert(kind, found);
    }
    results
}

fn print_results(
    results: &BTreeMap<IdentifierKind, Vec<String>>,
    output: OutputFormat,
) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
        OutputFormat::Lines => {
            for (kind, values) in results {
                for value in values {
                    println!("{}\t{}", kind, value);
                }
            }
        }
    }
    Ok(())
}
