use std::path::Path as StdPath;

use crate::Error;
use crate::FileSize;
use crate::FileStat;
use crate::Timestamp;

/// The metadata and listing queries offered by this crate.
///
/// Every failure is logged through the `log` facade before it is returned.
pub trait FileSystem: Send + Sync {
    /// Returns the size of `path` in bytes.
    ///
    /// Fails with `Error::StatFailure` if the metadata cannot be read, which
    /// includes the path not existing.
    fn size(&self, path: &StdPath) -> Result<FileSize, Error>;

    /// Returns the modification time of `path` in seconds since the unix
    /// epoch. Same failure semantics as [`FileSystem::size`].
    fn last_write_time(&self, path: &StdPath) -> Result<Timestamp, Error>;

    /// Returns whether `path` resolves to any filesystem entry. Never fails.
    fn exists(&self, path: &StdPath) -> bool;

    /// Returns whether `path` is a directory.
    ///
    /// A path that exists but is not a directory yields `Ok(false)`; a path
    /// whose metadata cannot be read yields `Error::StatFailure`.
    fn is_directory(&self, path: &StdPath) -> Result<bool, Error>;

    /// Lists the names of the entries directly inside `directory`, in the
    /// order the OS returns them and with their original casing.
    fn list_files(&self, directory: &StdPath) -> Result<Vec<String>, Error>;

    /// Returns size, modification time and directory flag of `path` from a
    /// single metadata query.
    fn stat(&self, path: &StdPath) -> Result<FileStat, Error>;
}
