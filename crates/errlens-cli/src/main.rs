//! errlens CLI
//!
//! Command-line interface for classifying upstream error payloads

use clap::{Parser, Subcommand, ValueEnum};
use errlens_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "errlens")]
#[command(about = "errlens - Classify upstream error payloads", long_about = None)]
struct Cli {
    /// Diagnostic log format on stderr
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Human)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a payload from a file or stdin
    Classify(commands::classify::ClassifyArgs),
    /// List registered shapes in priority order
    Shapes(commands::shapes::ShapesArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Human => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Classify(args) => commands::classify::execute(args),
        Commands::Shapes(args) => commands::shapes::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
