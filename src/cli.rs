use crate::config::{CliOverrides, Config, TraversalOrder};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dircount")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Recursively count files and subdirectories in the project folders")]
#[command(
    long_about = "dircount walks each of the project's top-level folders \
                  (app, components, config, constants, hooks) and prints how many \
                  files and subdirectories each one holds at any depth."
)]
#[command(after_help = "EXAMPLES:\n  \
    dircount\n  \
    dircount --base-dir ../frontend\n  \
    dircount --output-format json -v")]
pub struct Cli {
    /// Directory the folder names are resolved against
    #[arg(short = 'C', long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Visit directory contents before the directory itself
    #[arg(long)]
    pub post_order: bool,

    /// Log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text blocks, one per folder
    Human,
    /// JSON formatted output
    Json,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::default();

        config.merge_with_cli_args(&self.create_cli_overrides());
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        let order = self.post_order.then_some(TraversalOrder::PostOrder);

        CliOverrides::new()
            .with_base_directory(self.base_dir.clone())
            .with_order(order)
    }
}
