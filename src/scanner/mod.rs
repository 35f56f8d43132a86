pub mod folder_counter;

pub use folder_counter::{FolderCounter, FolderCounts, TreeCounter};
