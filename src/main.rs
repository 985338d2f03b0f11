//! camelize CLI entrypoint
//! Parses command-line arguments and dispatches to the use cases.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use camelize::{
    application::{
        BenchFileRequest, ConvertFileUseCase, ConvertRequest, GenerateBenchFileUseCase,
    },
    conversion::CasePolicy,
    core::Config,
    infrastructure::io::{FileLineSink, line_sink, line_source},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "camelize")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./camelize.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Rewrite snake_case identifiers into camelCase, line by line
    Convert {
        /// Input file; omit or pass '-' to read stdin
        input: Option<PathBuf>,
        /// Output file; defaults to stdout
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,
        /// Atomically replace the input file with the result
        #[arg(short, long)]
        in_place: bool,
        /// Rewrite policy: camel (default) or pascal
        #[arg(long)]
        policy: Option<CasePolicy>,
        /// Print a summary of the conversion to stderr
        #[arg(long)]
        stats: bool,
        /// Print the conversion report as JSON to stderr
        #[arg(long)]
        json: bool,
    },
    /// Generate a large benchmark input file by repeating a text block
    BenchFile {
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Number of block repetitions
        #[arg(long)]
        count: Option<usize>,
        /// File whose content is written once before the blocks
        #[arg(long)]
        header: Option<PathBuf>,
        /// File whose content is repeated
        #[arg(long)]
        block: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so converted text on stdout stays clean
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = Config::discover(&cwd, cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;
    debug!(policy = %config.policy, stats = config.stats, "Resolved configuration");

    match cli.command {
        Commands::Convert {
            input,
            output,
            in_place,
            policy,
            stats,
            json,
        } => {
            let request = ConvertRequest {
                input,
                output,
                in_place,
                policy: policy.unwrap_or(config.policy),
            };
            run_convert(request, stats || config.stats, json).await?
        }
        Commands::BenchFile {
            output,
            count,
            header,
            block,
        } => {
            let mut request = BenchFileRequest::from(config.bench);
            if let Some(output) = output {
                request.output = output;
            }
            if let Some(count) = count {
                request.count = count;
            }
            if let Some(path) = header {
                request.header = read_text(&path).await?;
            }
            if let Some(path) = block {
                request.block = read_text(&path).await?;
            }
            run_bench_file(request).await?
        }
    }
    Ok(())
}

/// Runtime handler for the convert command
async fn run_convert(request: ConvertRequest, stats: bool, json: bool) -> anyhow::Result<()> {
    request.validate().context("Invalid convert arguments")?;

    let source = line_source(request.input.as_deref());
    let sink = line_sink(&request);
    let response = ConvertFileUseCase::new(source, sink)
        .execute(request)
        .await
        .context("Conversion failed")?;

    if json {
        eprintln!("{}", serde_json::to_string_pretty(&response)?);
    } else if stats {
        eprintln!(
            "{} -> {}: {} line(s), {} changed, {} replacement(s)",
            response.source,
            response.destination,
            response.stats.lines,
            response.stats.changed_lines,
            response.stats.matches
        );
    }
    Ok(())
}

/// Runtime handler for the bench-file command
async fn run_bench_file(request: BenchFileRequest) -> anyhow::Result<()> {
    let sink = Arc::new(FileLineSink::new(&request.output));
    let response = GenerateBenchFileUseCase::new(sink)
        .execute(request)
        .await
        .context("Failed to generate benchmark file")?;

    info!(
        destination = %response.destination,
        lines = response.lines,
        "Benchmark file written"
    );
    println!(
        "Wrote {} ({} repetition(s), {} line(s))",
        response.destination, response.repetitions, response.lines
    );
    Ok(())
}

async fn read_text(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}
