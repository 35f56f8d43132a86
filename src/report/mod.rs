pub mod reporter;

pub use reporter::{FolderReport, FolderStatus, FolderSummary, Reporter};
