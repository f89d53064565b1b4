//! findaid - Streaming EAD export

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use findaid::{EadConfig, EadExporter, Labels, Resource, StreamStats};

#[derive(Parser)]
#[command(name = "findaid")]
#[command(version, about = "Streaming EAD export for archival finding aids", long_about = None)]
#[command(after_help = "EXAMPLES:
    findaid resource.json                     Write EAD to stdout
    findaid resource.json -o ead.xml          Write EAD to a file
    findaid resource.json -c config.json -v   Custom labels, debug logging")]
struct Cli {
    /// Resource tree as JSON
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Export configuration as JSON
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Log export progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(stats) => {
            if !cli.quiet {
                eprintln!("wrote {} chunks ({} bytes)", stats.chunks, stats.bytes);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> findaid::Result<StreamStats> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EadConfig::default(),
    };
    let resource: Resource = read_json(&cli.input)?;
    info!(
        input = %cli.input.display(),
        components = resource.descendant_count(),
        "loaded resource"
    );

    let exporter = EadExporter::new().with_config(config);
    match &cli.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            let stats = exporter.export(&resource, &mut writer)?;
            writer.flush()?;
            Ok(stats)
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            let stats = exporter.export(&resource, &mut writer)?;
            writer.flush()?;
            Ok(stats)
        }
    }
}

/// Read a config file; its labels are layered over the built-in defaults.
fn load_config(path: &Path) -> findaid::Result<EadConfig> {
    let mut config: EadConfig = read_json(path)?;
    let mut labels = Labels::with_defaults();
    labels.merge(config.labels);
    config.labels = labels;
    Ok(config)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> findaid::Result<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
