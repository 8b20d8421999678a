//! Directory scanner for discovering test scripts.
//!
//! Test scripts follow the `MODEL_NAME.Test.xxx.xml` naming convention.
//! Scanning lists the immediate entries of the origin directory and
//! tallies them per model name.

use crate::error::GenError;
use crate::models::GroupTable;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Default marker separating the model name from the test number.
pub const DEFAULT_DELIMITER: &str = ".Test.";

/// Source of directory entry names.
pub trait DirectoryLister {
    /// Names of the immediate entries of `dir`.
    fn list(&self, dir: &Path) -> Result<Vec<String>, GenError>;
}

/// Lists entries from the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> Result<Vec<String>, GenError> {
        let metadata = std::fs::metadata(dir).map_err(|e| GenError::directory(dir, e))?;
        if !metadata.is_dir() {
            return Err(GenError::directory(
                dir,
                std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
            ));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| GenError::directory(dir, e.into()))?;
            names.push(entry.file_name().to_string_lossy().to_string());
        }

        debug!("Listed {} entries in {}", names.len(), dir.display());
        Ok(names)
    }
}

/// Model name of `file_name`: everything before the first `delimiter`.
pub fn group_name<'a>(file_name: &'a str, delimiter: &str) -> Option<&'a str> {
    file_name
        .find(delimiter)
        .map(|index| &file_name[..index])
}

/// Scan `dir` and count the test scripts of every model.
///
/// Entries without the delimiter are ignored. Numeric suffixes are not
/// parsed; the count is a plain tally.
pub fn scan(
    lister: &dyn DirectoryLister,
    dir: &Path,
    delimiter: &str,
) -> Result<GroupTable, GenError> {
    let mut groups = GroupTable::new();

    for name in lister.list(dir)? {
        match group_name(&name, delimiter) {
            Some(group) => *groups.entry(group.to_string()).or_default() += 1,
            None => trace!("Skipping {}", name),
        }
    }

    Ok(groups)
}

/// In-memory lister for tests.
#[cfg(test)]
pub struct MemoryLister {
    pub names: Vec<String>,
}

#[cfg(test)]
impl MemoryLister {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl DirectoryLister for MemoryLister {
    fn list(&self, _dir: &Path) -> Result<Vec<String>, GenError> {
        Ok(self.names.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_name() {
        assert_eq!(group_name("A.Test.001.xml", ".Test."), Some("A"));
        assert_eq!(
            group_name("XFS_CDM_DISPENSE.Test.014.xml", ".Test."),
            Some("XFS_CDM_DISPENSE")
        );
        assert_eq!(group_name("A.Test.B.Test.001.xml", ".Test."), Some("A"));
        assert_eq!(group_name(".Test.001.xml", ".Test."), Some(""));
        assert_eq!(group_name("header.xml", ".Test."), None);
        assert_eq!(group_name("A.test.001.xml", ".Test."), None);
    }

    #[test]
    fn test_scan_groups() {
        let lister = MemoryLister::new(&["A.Test.001.xml", "A.Test.002.xml", "B.Test.001.xml"]);
        let groups = scan(&lister, Path::new("scripts"), DEFAULT_DELIMITER).unwrap();

        let expected: GroupTable = [("A".to_string(), 2), ("B".to_string(), 1)]
            .into_iter()
            .collect();
        assert_eq!(groups, expected);
    }

    #[test]
    fn test_scan_ignores_unmatched() {
        let lister = MemoryLister::new(&["A.Test.001.xml", "A.xml", "README.txt", "header.xml"]);
        let groups = scan(&lister, Path::new("scripts"), DEFAULT_DELIMITER).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get("A"), Some(&1));
    }

    #[test]
    fn test_scan_counts_gaps_as_tally() {
        let lister = MemoryLister::new(&["A.Test.001.xml", "A.Test.007.xml", "A.Test.notes"]);
        let groups = scan(&lister, Path::new("scripts"), DEFAULT_DELIMITER).unwrap();

        assert_eq!(groups.get("A"), Some(&3));
    }

    #[test]
    fn test_scan_custom_delimiter() {
        let lister = MemoryLister::new(&["A.Case.001.xml", "A.Test.001.xml"]);
        let groups = scan(&lister, Path::new("scripts"), ".Case.").unwrap();

        assert_eq!(groups.get("A"), Some(&1));
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_fs_lister_immediate_entries_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("A.Test.001.xml"), "").unwrap();
        std::fs::write(dir.path().join("A.Test.002.xml"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("B.Test.001.xml"), "").unwrap();

        let groups = scan(&FsLister, dir.path(), DEFAULT_DELIMITER).unwrap();
        assert_eq!(groups.get("A"), Some(&2));
        assert!(groups.get("B").is_none());
    }

    #[test]
    fn test_fs_lister_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = FsLister.list(&missing).unwrap_err();
        assert!(matches!(err, GenError::DirectoryAccess { .. }));
    }

    #[test]
    fn test_fs_lister_rejects_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("A.Test.001.xml");
        std::fs::write(&file, "").unwrap();

        let err = FsLister.list(&file).unwrap_err();
        assert!(matches!(err, GenError::DirectoryAccess { .. }));
    }
}
