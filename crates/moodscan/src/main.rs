//! Moodscan launcher
//!
//! Fetches public comments for a short-form video URL, scores their
//! sentiment, and reports the bucket distribution.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod cli;
mod pipeline;

#[derive(Parser, Debug)]
#[command(name = "moodscan", about = "Comment sentiment scanner for short-form video URLs")]
struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch comments for a video URL and report the sentiment distribution
    Analyze(cli::analyze::AnalyzeArgs),

    /// Score a single text with the bundled analyzer
    Score(cli::score::ScoreArgs),

    /// Show current configuration and paths
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn command_wants_json(command: &Commands) -> bool {
    match command {
        Commands::Analyze(args) => args.json,
        Commands::Score(args) => args.json,
        Commands::Config { json } => *json,
    }
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze(args) => cli::analyze::run(args),
        Commands::Score(args) => cli::score::run(args),
        Commands::Config { json } => cli::config::run(cli::config::ConfigArgs { json }),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs never mix with machine-readable stdout: in --json mode the
    // console layer moves to stderr.
    let json_mode = command_wants_json(&cli.command);
    let default_filter = if cli.verbose {
        "moodscan=debug,moodscan_source=debug,moodscan_sentiment=debug"
    } else {
        "moodscan=info,moodscan_source=info,moodscan_sentiment=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let mut _log_guard: Option<tracing_appender::non_blocking::WorkerGuard> = None;
    let file_layer = match cli::config::ensure_logs_dir() {
        Ok(log_dir) => {
            let file_appender = tracing_appender::rolling::daily(log_dir, "moodscan.log");
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            _log_guard = Some(guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(file_writer)
                    .with_ansi(false)
                    .with_filter(env_filter.clone()),
            )
        }
        Err(err) => {
            eprintln!("Warning: failed to create logs directory: {}", err);
            None
        }
    };

    let console_writer = if json_mode {
        tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stderr)
    } else {
        tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stdout)
    };
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(console_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json_mode {
                let payload = serde_json::json!({ "error": format!("{:#}", err) });
                println!("{}", payload);
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::from(1)
        }
    }
}
