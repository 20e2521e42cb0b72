//! Classify command
//!
//! Usage: errlens classify [FILE] [--hint <ID> [--strict-hint]] [--correlation-id <ID>] [--format json|text]

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use errlens_core::{log_op_end, log_op_error, log_op_start, registry, ClassificationReport, LensError};
use serde_json::Value;

use super::OutputFormat;

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Payload file (default: stdin)
    pub file: Option<PathBuf>,

    /// Registry shape id to try first (e.g. sap, raml)
    #[arg(long)]
    pub hint: Option<String>,

    /// Reject a hint that names no registered shape instead of auto-detecting
    #[arg(long, requires = "hint")]
    pub strict_hint: bool,

    /// Correlation id to stamp on the report (default: generated)
    #[arg(long)]
    pub correlation_id: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Execute classify command
pub fn execute(args: ClassifyArgs) -> Result<(), LensError> {
    let started = Instant::now();
    log_op_start!("cli_classify");

    match run(&args) {
        Ok(report) => {
            log_op_end!(
                "cli_classify",
                duration_ms = elapsed_ms(started),
                error_type = report.error_type().as_str(),
                http_status = report.http_status
            );
            Ok(())
        }
        Err(e) => {
            log_op_error!(
                "cli_classify",
                e,
                duration_ms = elapsed_ms(started)
            );
            Err(e)
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn run(args: &ClassifyArgs) -> Result<ClassificationReport, LensError> {
    if let (true, Some(hint)) = (args.strict_hint, &args.hint) {
        registry::require(hint)?;
    }
    let raw = read_input(args.file.as_deref())?;
    let value = parse_payload(&raw);

    let mut handle = errlens_core::inspect(&value);
    if let Some(hint) = &args.hint {
        handle = handle.of_type(hint.as_str());
    }
    if let Some(id) = &args.correlation_id {
        handle = handle.with_correlation_id(id.as_str());
    }

    let report = handle.info();
    match args.format {
        OutputFormat::Json => {
            let response = errlens_core::HttpResponse::from(report.clone());
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => println!("{}", summary(&report)),
    }
    Ok(report)
}

fn read_input(file: Option<&Path>) -> Result<String, LensError> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| LensError::io(format!("reading {}", path.display()), e)),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| LensError::io("reading stdin", e))?;
            Ok(buf)
        }
    }
}

/// JSON when it parses, otherwise the trimmed text as a plain string payload
fn parse_payload(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.trim().to_string()))
}

fn summary(report: &ClassificationReport) -> String {
    format!(
        "{} {} [{}] {}{}",
        report.http_status,
        report.error_type(),
        report.code(),
        report.message(),
        if report.retryable { " (retryable)" } else { "" }
    )
}
