use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Xcode asset sets regenerated by the icon pipeline
pub const DEFAULT_ASSET_TARGETS: [&str; 3] = [
    "ios/Runner/Assets.xcassets/AppIcon.appiconset",
    "ios/Runner/Assets.xcassets/LaunchImage.imageset",
    "ios/Runner/Assets.xcassets/LaunchBackground.imageset",
];

#[derive(Debug)]
pub enum CleanOutcome {
    Deleted,
    NotFound,
    Failed(io::Error),
}

impl CleanOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, CleanOutcome::Failed(_))
    }
}

/// Remove each target directory (relative to `root`) and everything below it
///
/// A failure on one target is recorded and the remaining targets are still
/// processed. Deletions are not reversible.
pub fn clean_asset_dirs<P: AsRef<Path>>(root: &Path, targets: &[P]) -> Vec<(PathBuf, CleanOutcome)> {
    targets
        .iter()
        .map(|target| {
            let path = root.join(target);
            let outcome = remove_target(&path);
            debug!("{:?}: {:?}", path, outcome);
            (path, outcome)
        })
        .collect()
}

fn remove_target(path: &Path) -> CleanOutcome {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return CleanOutcome::NotFound,
        Err(e) => return CleanOutcome::Failed(e),
    };

    // A stray file or symlink at a target path is removed as-is.
    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => CleanOutcome::Deleted,
        Err(e) => CleanOutcome::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_deletes_existing_and_reports_missing() {
        let root = TempDir::new().unwrap();
        let icon_set = root.path().join(DEFAULT_ASSET_TARGETS[0]);
        fs::create_dir_all(icon_set.join("nested")).unwrap();
        fs::write(icon_set.join("Contents.json"), "{}").unwrap();
        fs::write(icon_set.join("nested").join("icon.png"), [0u8; 4]).unwrap();

        let results = clean_asset_dirs(root.path(), &DEFAULT_ASSET_TARGETS);

        assert_eq!(results.len(), 3);
        assert!(matches!(results[0].1, CleanOutcome::Deleted));
        assert!(matches!(results[1].1, CleanOutcome::NotFound));
        assert!(matches!(results[2].1, CleanOutcome::NotFound));
        assert!(!icon_set.exists());
        // parent directories are left alone
        assert!(root.path().join("ios/Runner/Assets.xcassets").is_dir());
    }

    #[test]
    fn test_results_keep_target_order() {
        let root = TempDir::new().unwrap();
        let targets = ["b", "a"];
        fs::create_dir(root.path().join("a")).unwrap();

        let results = clean_asset_dirs(root.path(), &targets);

        assert_eq!(results[0].0, root.path().join("b"));
        assert_eq!(results[1].0, root.path().join("a"));
        assert!(matches!(results[0].1, CleanOutcome::NotFound));
        assert!(matches!(results[1].1, CleanOutcome::Deleted));
    }

    #[test]
    fn test_file_target_is_removed() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("stale"), "x").unwrap();

        let results = clean_asset_dirs(root.path(), &["stale"]);

        assert!(matches!(results[0].1, CleanOutcome::Deleted));
        assert!(!root.path().join("stale").exists());
    }

    #[test]
    fn test_failure_does_not_stop_later_targets() {
        let root = TempDir::new().unwrap();
        let blocker = root.path().join("blocker");
        fs::write(&blocker, "not a dir").unwrap();
        fs::create_dir(root.path().join("later")).unwrap();

        // "blocker/child" cannot exist because "blocker" is a file.
        let results = clean_asset_dirs(root.path(), &["blocker/child", "later"]);

        assert!(results[0].1.is_failure());
        assert!(matches!(results[1].1, CleanOutcome::Deleted));
        assert!(blocker.exists());
    }

    #[test]
    fn test_is_failure() {
        assert!(CleanOutcome::Failed(io::Error::other("nope")).is_failure());
        assert!(!CleanOutcome::Deleted.is_failure());
        assert!(!CleanOutcome::NotFound.is_failure());
    }
}
