//! Shapes command
//!
//! Usage: errlens shapes [--format json|text]

use clap::Args;
use errlens_core::path;
use errlens_core::registry::FieldRule;
use errlens_core::{shapes_in_priority_order, ErrorShape, LensError};
use serde_json::{json, Value};

use super::OutputFormat;

#[derive(Debug, Args)]
pub struct ShapesArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute shapes command
pub fn execute(args: ShapesArgs) -> Result<(), LensError> {
    let shapes = shapes_in_priority_order();
    match args.format {
        OutputFormat::Json => {
            let listing: Vec<Value> = shapes.iter().map(shape_json).collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Text => {
            for (rank, shape) in shapes.iter().enumerate() {
                println!(
                    "{:>2}. {:<12} {:<18} {}",
                    rank + 1,
                    shape.id,
                    shape.error_type.as_str(),
                    shape.source
                );
            }
        }
    }
    Ok(())
}

fn shape_json(shape: &ErrorShape) -> Value {
    json!({
        "id": shape.id,
        "type": shape.error_type,
        "source": shape.source,
        "message": rule_json(&shape.message),
        "code": rule_json(&shape.code),
        "details": rule_json(&shape.details),
    })
}

fn rule_json(rule: &FieldRule) -> Value {
    let paths: Vec<String> = rule.paths.iter().map(|p| path::display(p)).collect();
    json!({
        "paths": paths,
        "fallback": rule.fallback,
    })
}
