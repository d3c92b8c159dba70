use std::fs;
use std::io::ErrorKind;
use std::path::Path as StdPath;

use crate::Error;
use crate::FileSize;
use crate::FileStat;
use crate::FileSystem;
use crate::Timestamp;
use crate::file::entry_name;
use crate::file::mtime_seconds;

/// [`FileSystem`] backed by the blocking `std::fs` calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFs;

impl NativeFs {
    /// Creates a new `NativeFs`.
    pub fn new() -> Self {
        Self
    }

    fn metadata(op: &str, path: &StdPath) -> Result<fs::Metadata, Error> {
        fs::metadata(path).map_err(|e| Error::stat_failure(op, path, e))
    }
}

impl FileSystem for NativeFs {
    fn size(&self, path: &StdPath) -> Result<FileSize, Error> {
        Ok(Self::metadata("size", path)?.len())
    }

    fn last_write_time(&self, path: &StdPath) -> Result<Timestamp, Error> {
        let metadata = Self::metadata("last_write_time", path)?;
        mtime_seconds(path, &metadata)
    }

    fn exists(&self, path: &StdPath) -> bool {
        fs::metadata(path).is_ok()
    }

    fn is_directory(&self, path: &StdPath) -> Result<bool, Error> {
        Ok(Self::metadata("is_directory", path)?.is_dir())
    }

    fn list_files(&self, directory: &StdPath) -> Result<Vec<String>, Error> {
        match fs::metadata(directory) {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => return Err(Error::not_a_directory("list_files", directory)),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                return Err(Error::not_a_directory("list_files", directory));
            }
            Err(e) => return Err(Error::enumeration_failure("list_files", "stat", directory, e)),
        }

        let entries = fs::read_dir(directory)
            .map_err(|e| Error::enumeration_failure("list_files", "opendir", directory, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| Error::enumeration_failure("list_files", "readdir", directory, e))?;
            files.push(entry_name(entry.file_name()));
        }
        Ok(files)
    }

    fn stat(&self, path: &StdPath) -> Result<FileStat, Error> {
        let metadata = Self::metadata("stat", path)?;
        FileStat::from_metadata(path, &metadata)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::thread::sleep;
    use std::time::Duration;

    use crate::Error;
    use crate::FileSystem;
    use crate::NativeFs;
    use crate::TestRoot;

    #[test]
    fn size_matches_bytes_written() {
        let root = TestRoot::new().unwrap();
        let path = root.write_file("sized.bin", b"0123456789").unwrap();
        assert_eq!(NativeFs.size(&path).unwrap(), 10);

        let empty = root.path().join("file1.txt");
        assert_eq!(NativeFs.size(&empty).unwrap(), 0);
    }

    #[test]
    fn size_of_missing_file_is_stat_failure() {
        let root = TestRoot::new().unwrap();
        let err = NativeFs.size(&root.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::StatFailure { .. }), "{err:?}");
        assert!(err.to_string().starts_with("size: stat failed for file"));
    }

    #[test]
    fn last_write_time_does_not_go_backwards() {
        let root = TestRoot::new().unwrap();
        let path = root.write_file("touched.txt", b"one").unwrap();
        let before = NativeFs.last_write_time(&path).unwrap();
        sleep(Duration::from_millis(20));
        fs::write(&path, b"two").unwrap();
        let after = NativeFs.last_write_time(&path).unwrap();
        assert!(after >= before);
        assert!(before > 0);
    }

    #[test]
    fn last_write_time_of_missing_file_is_stat_failure() {
        let root = TestRoot::new().unwrap();
        let err = NativeFs
            .last_write_time(&root.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, Error::StatFailure { .. }), "{err:?}");
    }

    #[test]
    fn exists_flips_on_creation() {
        let root = TestRoot::new().unwrap();
        let path = root.path().join("new.txt");
        assert!(!NativeFs.exists(&path));
        fs::write(&path, b"").unwrap();
        assert!(NativeFs.exists(&path));
        assert!(NativeFs.exists(root.path()));
    }

    #[test]
    fn is_directory_distinguishes_files_and_dirs() {
        let root = TestRoot::new().unwrap();
        assert!(NativeFs.is_directory(&root.path().join("dir1")).unwrap());
        assert!(
            NativeFs
                .is_directory(&root.path().join("dir_empty"))
                .unwrap()
        );
        assert!(!NativeFs.is_directory(&root.path().join("file1.txt")).unwrap());
    }

    #[test]
    fn is_directory_of_missing_path_is_stat_failure() {
        let root = TestRoot::new().unwrap();
        let err = NativeFs
            .is_directory(&root.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, Error::StatFailure { .. }), "{err:?}");
    }

    #[test]
    fn list_files_returns_direct_children_with_original_case() {
        let root = TestRoot::new().unwrap();
        let mut files = NativeFs.list_files(root.path()).unwrap();
        files.sort();
        assert_eq!(
            files,
            vec!["MixedCase.TXT", "dir1", "dir_empty", "file1.txt", "file2.txt"]
        );
    }

    #[test]
    fn list_files_on_empty_directory() {
        let root = TestRoot::new().unwrap();
        let files = NativeFs.list_files(&root.path().join("dir_empty")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn list_files_contains_written_files() {
        let root = TestRoot::new().unwrap();
        root.write_file("listing/a.txt", b"a").unwrap();
        root.write_file("listing/b.txt", b"b").unwrap();
        let files = NativeFs.list_files(&root.path().join("listing")).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.contains(&"a.txt".to_string()));
        assert!(files.contains(&"b.txt".to_string()));
    }

    #[test]
    fn list_files_on_regular_file_is_not_a_directory() {
        let root = TestRoot::new().unwrap();
        let err = NativeFs
            .list_files(&root.path().join("file1.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }), "{err:?}");
    }

    #[test]
    fn list_files_on_missing_path_is_not_a_directory() {
        let root = TestRoot::new().unwrap();
        let err = NativeFs.list_files(&root.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }), "{err:?}");
    }

    #[test]
    fn list_files_below_regular_file_is_not_a_directory() {
        let root = TestRoot::new().unwrap();
        let path = root.path().join("file1.txt").join("sub");
        assert!(!NativeFs.exists(&path));
        let err = NativeFs.list_files(&path).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }), "{err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn list_files_with_overlong_name_is_enumeration_failure() {
        let root = TestRoot::new().unwrap();
        let path = root.path().join("x".repeat(300));
        let err = NativeFs.list_files(&path).unwrap_err();
        assert!(matches!(err, Error::EnumerationFailure { .. }), "{err:?}");
        assert!(err.to_string().starts_with("list_files: stat failed"));
    }

    #[cfg(unix)]
    #[test]
    fn list_files_on_unreadable_directory_is_enumeration_failure() {
        use std::os::unix::fs::PermissionsExt;

        let root = TestRoot::new().unwrap();
        let locked = root.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits don't apply to root.
        let readable = fs::read_dir(&locked).is_ok();
        let result = NativeFs.list_files(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable {
            return;
        }

        let err = result.unwrap_err();
        assert!(matches!(err, Error::EnumerationFailure { .. }), "{err:?}");
        assert!(err.to_string().starts_with("list_files: opendir failed"));
    }

    #[test]
    fn stat_reports_all_attributes() {
        let root = TestRoot::new().unwrap();
        let path = root.write_file("stat.txt", b"abc").unwrap();
        let stat = NativeFs.stat(&path).unwrap();
        assert_eq!(stat.size, 3);
        assert!(!stat.is_directory);
        assert!(stat.mtime.ends_with('Z'));

        let dir = NativeFs.stat(&root.path().join("dir1")).unwrap();
        assert!(dir.is_directory);
    }

    #[test]
    fn stat_serializes_to_json() {
        let root = TestRoot::new().unwrap();
        let path = root.write_file("json.txt", b"abcd").unwrap();
        let stat = NativeFs.stat(&path).unwrap();
        let value = serde_json::to_value(&stat).unwrap();
        assert_eq!(value["size"], 4);
        assert_eq!(value["is_directory"], false);
        assert_eq!(value["mtime"], stat.mtime.as_str());
    }
}
