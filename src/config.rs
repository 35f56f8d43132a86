use crate::error::{DirCountError, Result};
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// Top-level folders reported on every run, in output order.
pub const DEFAULT_FOLDERS: &[&str] = &["app", "components", "config", "constants", "hooks"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Directories are visited before their contents.
    #[default]
    PreOrder,
    /// Contents are visited before the directory that holds them.
    PostOrder,
}

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub folders: Vec<String>,
    pub base_directory: PathBuf,
    pub order: TraversalOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folders: DEFAULT_FOLDERS.iter().map(|s| s.to_string()).collect(),
            base_directory: PathBuf::from("."),
            order: TraversalOrder::default(),
        }
    }
}

impl Config {
    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref base_directory) = cli_args.base_directory {
            self.base_directory = base_directory.clone();
        }

        if let Some(order) = cli_args.order {
            self.order = order;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.folders.is_empty() {
            return Err(DirCountError::Config {
                message: "At least one folder must be listed".to_string(),
            });
        }

        for name in &self.folders {
            if name.is_empty() {
                return Err(DirCountError::Config {
                    message: "Folder names cannot be empty".to_string(),
                });
            }

            // Each name is joined onto the base directory, so it has to stay
            // a single component below it.
            let mut components = Path::new(name).components();
            let single_normal = matches!(components.next(), Some(Component::Normal(_)))
                && components.next().is_none();
            if !single_normal {
                return Err(DirCountError::Config {
                    message: format!("Folder name is not a plain directory name: {}", name),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub base_directory: Option<PathBuf>,
    pub order: Option<TraversalOrder>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_directory(mut self, base_directory: Option<PathBuf>) -> Self {
        self.base_directory = base_directory;
        self
    }

    pub fn with_order(mut self, order: Option<TraversalOrder>) -> Self {
        self.order = order;
        self
    }
}
