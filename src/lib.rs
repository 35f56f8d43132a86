pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, TraversalOrder, DEFAULT_FOLDERS};
pub use error::{DirCountError, Result, UserFriendlyError};

// Core functionality re-exports
pub use report::{FolderReport, FolderStatus, FolderSummary, Reporter};
pub use scanner::{FolderCounter, FolderCounts, TreeCounter};
pub use ui::{OutputFormatter, OutputMode};

use std::io::Write;
use tracing::info;

/// Main library interface for a counting run
pub struct DirCount {
    config: Config,
    output_formatter: OutputFormatter,
}

impl DirCount {
    pub fn new(config: Config, output_mode: OutputMode) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            output_formatter: OutputFormatter::new(output_mode),
        })
    }

    /// Create DirCount instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
        };

        Self::new(config, output_mode)
    }

    /// Count every configured folder, in list order.
    pub fn collect(&self) -> FolderSummary {
        let counter = FolderCounter::new().with_order(self.config.order);
        let reporter = Reporter::new(counter, self.config.base_directory.clone());

        info!(
            base = %self.config.base_directory.display(),
            folders = self.config.folders.len(),
            "starting folder count"
        );

        let summary = reporter.collect(self.config.folders.as_slice());
        let missing = summary.missing_count();
        info!(
            counted = summary.folders.len() - missing,
            missing,
            "folder count finished"
        );

        summary
    }

    /// Count and render the report to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<FolderSummary> {
        let summary = self.collect();
        self.output_formatter.write_summary(out, &summary)?;
        out.flush()?;
        Ok(summary)
    }

    /// Count and render the report to stdout.
    pub fn run_to_stdout(&self) -> Result<FolderSummary> {
        let summary = self.collect();
        self.output_formatter.print_summary(&summary)?;
        Ok(summary)
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &DirCountError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Count the default folders under `base_directory` with default settings.
pub fn count_folders<P: Into<std::path::PathBuf>>(base_directory: P) -> Result<FolderSummary> {
    let config = Config {
        base_directory: base_directory.into(),
        ..Config::default()
    };

    Ok(DirCount::new(config, OutputMode::Human)?.collect())
}
