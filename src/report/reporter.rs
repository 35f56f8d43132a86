use crate::scanner::{FolderCounts, TreeCounter};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderStatus {
    Counted(FolderCounts),
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderReport {
    pub name: String,
    pub status: FolderStatus,
}

impl FolderReport {
    pub fn exists(&self) -> bool {
        matches!(self.status, FolderStatus::Counted(_))
    }

    pub fn counts(&self) -> Option<FolderCounts> {
        match self.status {
            FolderStatus::Counted(counts) => Some(counts),
            FolderStatus::Missing => None,
        }
    }
}

// Flattened to `{name, exists, files?, directories?}` for the JSON report.
impl Serialize for FolderReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Flat<'a> {
            name: &'a str,
            exists: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            files: Option<u64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            directories: Option<u64>,
        }

        let counts = self.counts();
        Flat {
            name: &self.name,
            exists: counts.is_some(),
            files: counts.map(|c| c.files),
            directories: counts.map(|c| c.directories),
        }
        .serialize(serializer)
    }
}

#[derive(Debug, Clone)]
pub struct FolderSummary {
    pub base_directory: PathBuf,
    pub folders: Vec<FolderReport>,
}

impl FolderSummary {
    pub fn missing_count(&self) -> usize {
        self.folders.iter().filter(|f| !f.exists()).count()
    }
}

/// Runs the counter over each listed folder that exists under a base
/// directory, keeping the list order.
pub struct Reporter<C: TreeCounter> {
    counter: C,
    base_directory: PathBuf,
}

impl<C: TreeCounter> Reporter<C> {
    pub fn new<P: Into<PathBuf>>(counter: C, base_directory: P) -> Self {
        Self {
            counter,
            base_directory: base_directory.into(),
        }
    }

    pub fn collect<S: AsRef<str>>(&self, folders: &[S]) -> FolderSummary {
        let folders = folders
            .iter()
            .map(|name| self.report_folder(name.as_ref()))
            .collect();

        FolderSummary {
            base_directory: self.base_directory.clone(),
            folders,
        }
    }

    fn report_folder(&self, name: &str) -> FolderReport {
        let path = self.base_directory.join(name);

        let status = if is_existing_directory(&path) {
            let counts = self.counter.count(&path);
            info!(
                folder = name,
                files = counts.files,
                directories = counts.directories,
                "counted folder"
            );
            FolderStatus::Counted(counts)
        } else {
            debug!(folder = name, path = %path.display(), "folder not found");
            FolderStatus::Missing
        };

        FolderReport {
            name: name.to_string(),
            status,
        }
    }
}

// Follows symlinks; a regular file under the name is reported as missing.
fn is_existing_directory(path: &Path) -> bool {
    path.is_dir()
}
