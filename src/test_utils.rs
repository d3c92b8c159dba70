use std::fs;
use std::fs::create_dir_all;
use std::path::Path as StdPath;
use std::path::PathBuf;

use tempdir::TempDir;

// File paths, contents and whether the entry is a directory.
pub(crate) static TEMP_FILES: &[(&str, &str, bool)] = &[
    ("file1.txt", "", false),
    ("file2.txt", "hello", false),
    ("MixedCase.TXT", "case", false),
    ("dir1", "", true),
    ("dir1/file3.txt", "nested", false),
    ("dir_empty", "", true),
];

/// Utility structure for managing a temporary test directory and its files.
#[derive(Debug)]
pub struct TestRoot {
    /// Root of the temporary test directory.
    pub root: TempDir,
}

impl TestRoot {
    /// Creates a new `TestRoot` populated with a small fixture tree.
    pub fn new() -> Result<Self, std::io::Error> {
        let ret = Self {
            root: TempDir::new("fsutil")?,
        };
        for (relative_path, contents, is_dir) in TEMP_FILES {
            if *is_dir {
                create_dir_all(ret.path().join(relative_path))?;
            } else {
                ret.write_file(relative_path, contents.as_bytes())?;
            }
        }
        Ok(ret)
    }

    /// Returns the root directory of the fixture tree.
    pub fn path(&self) -> &StdPath {
        self.root.path()
    }

    /// Writes `content` to `relative_path` under the root, creating missing
    /// parent directories, and returns the full path.
    pub fn write_file(
        &self,
        relative_path: &str,
        content: &[u8],
    ) -> Result<PathBuf, std::io::Error> {
        let full_path = self.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            create_dir_all(parent)?;
        }
        fs::write(&full_path, content)?;
        Ok(full_path)
    }
}
