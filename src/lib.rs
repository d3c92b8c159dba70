//! Small cross-platform filesystem helpers
//!
//! The crate answers the handful of questions an application usually asks
//! about a path (size, modification time, existence, whether it is a
//! directory, what it contains) and creates uniquely named temporary files.
//! Failures are logged through the [`log`] facade and returned as
//! [`Error`]; install any logger at process start to see them.
//!
//! ```rust
//! let dir = fsutil::temp_dir();
//! let path = fsutil::create_temp_file_name();
//! assert!(!path.as_os_str().is_empty());
//! assert!(path.starts_with(&dir));
//! assert_eq!(fsutil::size(&path).unwrap(), 0);
//! assert!(!fsutil::is_directory(&path).unwrap());
//!
//! let names = fsutil::list_files(&dir).unwrap();
//! let name = path.file_name().unwrap().to_string_lossy().into_owned();
//! assert!(names.contains(&name));
//! # std::fs::remove_file(&path).unwrap();
//! assert!(!fsutil::exists(&path));
//! ```

mod async_fs;
mod errors;
mod file;
mod file_system;
mod native_fs;
mod temp;
pub mod utils;

use std::path::Path as StdPath;
use std::path::PathBuf;

pub use async_fs::AsyncNativeFs;
pub use errors::Error;
pub use file::FileStat;
pub use file_system::FileSystem;
pub use native_fs::NativeFs;
pub use temp::DEFAULT_TEMP_PREFIX;
pub use temp::DEFAULT_TMP_DIR_VAR;
pub use temp::TempConfig;

#[cfg(feature = "test_utils")]
pub(crate) mod test_utils;
#[cfg(feature = "test_utils")]
pub use test_utils::TestRoot;

/// Size of a file in bytes.
pub type FileSize = u64;

/// Modification time in seconds since the unix epoch.
pub type Timestamp = i64;

/// Returns the size of `path` in bytes. See [`FileSystem::size`].
pub fn size<P: AsRef<StdPath>>(path: P) -> Result<FileSize, Error> {
    NativeFs.size(path.as_ref())
}

/// Returns the modification time of `path`. See
/// [`FileSystem::last_write_time`].
pub fn last_write_time<P: AsRef<StdPath>>(path: P) -> Result<Timestamp, Error> {
    NativeFs.last_write_time(path.as_ref())
}

/// Returns whether `path` exists. Never fails.
pub fn exists<P: AsRef<StdPath>>(path: P) -> bool {
    NativeFs.exists(path.as_ref())
}

/// Returns whether `path` is a directory. See [`FileSystem::is_directory`].
pub fn is_directory<P: AsRef<StdPath>>(path: P) -> Result<bool, Error> {
    NativeFs.is_directory(path.as_ref())
}

/// Lists the entry names directly inside `directory`. See
/// [`FileSystem::list_files`].
pub fn list_files<P: AsRef<StdPath>>(directory: P) -> Result<Vec<String>, Error> {
    NativeFs.list_files(directory.as_ref())
}

/// Returns a [`FileStat`] for `path`.
pub fn stat<P: AsRef<StdPath>>(path: P) -> Result<FileStat, Error> {
    NativeFs.stat(path.as_ref())
}

/// Resolves the temp directory with the default [`TempConfig`].
pub fn temp_dir() -> PathBuf {
    TempConfig::default().temp_dir()
}

/// Creates a new empty temp file with the default [`TempConfig`] and returns
/// its path, or an empty path on failure.
pub fn create_temp_file_name() -> PathBuf {
    TempConfig::default().create_temp_file_name()
}

/// Creates a new empty temp file with the default [`TempConfig`].
pub fn try_create_temp_file() -> Result<PathBuf, Error> {
    TempConfig::default().try_create_temp_file()
}
