use crate::config::TraversalOrder;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Totals for one root, root itself excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FolderCounts {
    pub files: u64,
    pub directories: u64,
}

impl FolderCounts {
    pub fn new(files: u64, directories: u64) -> Self {
        Self { files, directories }
    }

    fn record(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::Directory => self.directories += 1,
            EntryKind::File => self.files += 1,
        }
    }
}

/// Anything that can tally a directory tree.
pub trait TreeCounter {
    fn count(&self, root: &Path) -> FolderCounts;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
}

#[derive(Debug, Clone, Default)]
pub struct FolderCounter {
    order: TraversalOrder,
}

impl FolderCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    /// Walks the whole subtree of `root` and returns its totals.
    ///
    /// `root` must be an existing directory. Entries the walker cannot read
    /// are logged and left out of the totals; nothing is surfaced to the
    /// caller.
    pub fn count<P: AsRef<Path>>(&self, root: P) -> FolderCounts {
        let root_path = root.as_ref();
        let mut counts = FolderCounts::default();
        let mut skipped = 0usize;

        let walker = WalkDir::new(root_path)
            .min_depth(1)
            .follow_links(false)
            .contents_first(self.order == TraversalOrder::PostOrder)
            .into_iter();

        for entry in walker {
            match entry {
                Ok(entry) => counts.record(classify(&entry)),
                Err(err) => {
                    skipped += 1;
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| root_path.display().to_string());
                    if err
                        .io_error()
                        .is_some_and(|e| e.kind() == std::io::ErrorKind::PermissionDenied)
                    {
                        warn!(path = %path, "permission denied, subtree not counted");
                    } else {
                        warn!(path = %path, error = %err, "skipping unreadable entry");
                    }
                }
            }
        }

        debug!(
            root = %root_path.display(),
            files = counts.files,
            directories = counts.directories,
            skipped,
            "folder counted"
        );

        counts
    }
}

impl TreeCounter for FolderCounter {
    fn count(&self, root: &Path) -> FolderCounts {
        FolderCounter::count(self, root)
    }
}

fn classify(entry: &DirEntry) -> EntryKind {
    let file_type = entry.file_type();

    if file_type.is_dir() {
        return EntryKind::Directory;
    }

    // Symlinked directories count as directories but are never entered.
    if file_type.is_symlink() && entry.path().is_dir() {
        return EntryKind::Directory;
    }

    EntryKind::File
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let counts = FolderCounter::new().count(temp_dir.path());
        assert_eq!(counts, FolderCounts::new(0, 0));
    }

    #[test]
    fn test_direct_files_and_empty_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        for i in 0..4 {
            fs::write(root.join(format!("file{}.txt", i)), "x").unwrap();
        }
        for i in 0..3 {
            fs::create_dir(root.join(format!("dir{}", i))).unwrap();
        }

        let counts = FolderCounter::new().count(root);
        assert_eq!(counts, FolderCounts::new(4, 3));
    }

    #[test]
    fn test_nested_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let app = temp_dir.path().join("app");
        fs::create_dir_all(app.join("sub")).unwrap();
        fs::write(app.join("a.txt"), "a").unwrap();
        fs::write(app.join("b.txt"), "b").unwrap();
        fs::write(app.join("sub").join("c.txt"), "c").unwrap();

        let counts = FolderCounter::new().count(&app);
        assert_eq!(counts.files, 3);
        assert_eq!(counts.directories, 1);
    }

    #[test]
    fn test_deep_tree_counts_every_level() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/b/c/d")).unwrap();
        fs::create_dir_all(root.join("a/e")).unwrap();
        fs::write(root.join("a/b/c/d/leaf.rs"), "").unwrap();
        fs::write(root.join("a/e/other.rs"), "").unwrap();
        fs::write(root.join("top.rs"), "").unwrap();

        let counts = FolderCounter::new().count(root);
        assert_eq!(counts, FolderCounts::new(3, 5));
    }

    #[test]
    fn test_order_does_not_change_totals() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("x/y")).unwrap();
        fs::create_dir_all(root.join("z")).unwrap();
        fs::write(root.join("x/one"), "").unwrap();
        fs::write(root.join("x/y/two"), "").unwrap();
        fs::write(root.join("z/three"), "").unwrap();

        let pre = FolderCounter::new()
            .with_order(TraversalOrder::PreOrder)
            .count(root);
        let post = FolderCounter::new()
            .with_order(TraversalOrder::PostOrder)
            .count(root);

        assert_eq!(pre, post);
        assert_eq!(pre, FolderCounts::new(3, 3));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_counted_not_entered() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target");
        let root = temp_dir.path().join("root");
        fs::create_dir_all(&target).unwrap();
        fs::create_dir_all(&root).unwrap();
        fs::write(target.join("inside.txt"), "").unwrap();
        std::os::unix::fs::symlink(&target, root.join("link")).unwrap();
        std::os::unix::fs::symlink(target.join("inside.txt"), root.join("file_link")).unwrap();

        let counts = FolderCounter::new().count(&root);
        assert_eq!(counts, FolderCounts::new(1, 1));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycle_terminates() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("root");
        fs::create_dir_all(&root).unwrap();
        std::os::unix::fs::symlink(&root, root.join("loop")).unwrap();

        let counts = FolderCounter::new().count(&root);
        assert_eq!(counts, FolderCounts::new(0, 1));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_counted_but_not_entered() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let locked = root.join("locked");
        fs::create_dir_all(locked.join("nested")).unwrap();
        fs::write(locked.join("hidden1.txt"), "").unwrap();
        fs::write(locked.join("hidden2.txt"), "").unwrap();
        fs::write(root.join("visible.txt"), "").unwrap();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not stop root; nothing to check then.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let pre = FolderCounter::new().count(root);
        let post = FolderCounter::new()
            .with_order(TraversalOrder::PostOrder)
            .count(root);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(pre, FolderCounts::new(1, 1));
        assert_eq!(post, FolderCounts::new(1, 1));
    }

    #[test]
    fn test_trait_object_dispatch() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("only.txt"), "").unwrap();

        let counter: &dyn TreeCounter = &FolderCounter::new();
        assert_eq!(counter.count(temp_dir.path()), FolderCounts::new(1, 0));
    }
}
