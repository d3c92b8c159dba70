use std::ffi::OsString;
use std::fs::Metadata;
use std::path::Path as StdPath;

use serde::Deserialize;
use serde::Serialize;

use crate::Timestamp;
use crate::errors::Error;
use crate::utils::format_system_time;
use crate::utils::unix_seconds;

/// Snapshot of the attributes the queries in this crate report for a
/// single path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Hash, Eq)]
pub struct FileStat {
    /// The size of the file in bytes. For directories, this is
    /// implementation-defined.
    pub size: u64,
    /// The last modification time in RFC 3339 - Z format. For example
    /// "2018-01-26T18:30:09.453Z"
    pub mtime: String,
    /// Whether this entry is a directory.
    pub is_directory: bool,
}

impl FileStat {
    /// Create a `FileStat` from a `Metadata` value.
    ///
    /// Fails with `Error::StatFailure` when the platform cannot report a
    /// modification time.
    pub(crate) fn from_metadata(path: &StdPath, metadata: &Metadata) -> Result<Self, Error> {
        let modified = metadata
            .modified()
            .map_err(|e| Error::stat_failure("stat", path, e))?;
        Ok(FileStat {
            size: metadata.len(),
            mtime: format_system_time(modified),
            is_directory: metadata.is_dir(),
        })
    }
}

pub(crate) fn mtime_seconds(path: &StdPath, metadata: &Metadata) -> Result<Timestamp, Error> {
    let modified = metadata
        .modified()
        .map_err(|e| Error::stat_failure("last_write_time", path, e))?;
    Ok(unix_seconds(modified))
}

pub(crate) fn entry_name(name: OsString) -> String {
    name.into_string()
        .unwrap_or_else(|name| name.to_string_lossy().into_owned())
}
