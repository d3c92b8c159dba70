use std::io::ErrorKind;
use std::path::Path as StdPath;

use tokio::fs;

use crate::Error;
use crate::FileSize;
use crate::FileStat;
use crate::Timestamp;
use crate::file::entry_name;
use crate::file::mtime_seconds;

/// Async counterpart of [`NativeFs`](crate::NativeFs) built on `tokio::fs`.
///
/// Results and errors are the same as for the blocking implementation.
///
/// ```rust
/// # tokio_test::block_on(async {
/// use fsutil::AsyncNativeFs;
///
/// let fs = AsyncNativeFs::new();
/// assert!(fs.exists("Cargo.toml").await);
/// assert!(!fs.is_directory("Cargo.toml").await.unwrap());
/// assert!(fs.list_files("src").await.unwrap().contains(&"lib.rs".to_string()));
/// # })
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncNativeFs;

impl AsyncNativeFs {
    /// Creates a new `AsyncNativeFs`.
    pub fn new() -> Self {
        Self
    }

    async fn metadata(op: &str, path: &StdPath) -> Result<std::fs::Metadata, Error> {
        fs::metadata(path)
            .await
            .map_err(|e| Error::stat_failure(op, path, e))
    }

    /// Returns the size of `path` in bytes.
    pub async fn size<P: AsRef<StdPath>>(&self, path: P) -> Result<FileSize, Error> {
        Ok(Self::metadata("size", path.as_ref()).await?.len())
    }

    /// Returns the modification time of `path` in seconds since the unix
    /// epoch.
    pub async fn last_write_time<P: AsRef<StdPath>>(&self, path: P) -> Result<Timestamp, Error> {
        let path = path.as_ref();
        let metadata = Self::metadata("last_write_time", path).await?;
        mtime_seconds(path, &metadata)
    }

    /// Returns whether `path` resolves to any filesystem entry.
    pub async fn exists<P: AsRef<StdPath>>(&self, path: P) -> bool {
        fs::metadata(path).await.is_ok()
    }

    /// Returns whether `path` is a directory.
    pub async fn is_directory<P: AsRef<StdPath>>(&self, path: P) -> Result<bool, Error> {
        Ok(Self::metadata("is_directory", path.as_ref())
            .await?
            .is_dir())
    }

    /// Lists the names of the entries directly inside `directory`.
    pub async fn list_files<P: AsRef<StdPath>>(&self, directory: P) -> Result<Vec<String>, Error> {
        let directory = directory.as_ref();
        match fs::metadata(directory).await {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => return Err(Error::not_a_directory("list_files", directory)),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                return Err(Error::not_a_directory("list_files", directory));
            }
            Err(e) => return Err(Error::enumeration_failure("list_files", "stat", directory, e)),
        }

        let mut entries = fs::read_dir(directory)
            .await
            .map_err(|e| Error::enumeration_failure("list_files", "opendir", directory, e))?;
        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::enumeration_failure("list_files", "readdir", directory, e))?
        {
            files.push(entry_name(entry.file_name()));
        }
        Ok(files)
    }

    /// Returns size, modification time and directory flag of `path`.
    pub async fn stat<P: AsRef<StdPath>>(&self, path: P) -> Result<FileStat, Error> {
        let path = path.as_ref();
        let metadata = Self::metadata("stat", path).await?;
        FileStat::from_metadata(path, &metadata)
    }
}
