pub mod classify;
pub mod shapes;

use clap::ValueEnum;

/// Shape of what a command prints on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}
