use std::path::Path as StdPath;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Represents all possible errors in the fsutil crate.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Hash, Eq)]
pub enum Error {
    /// Metadata of a path could not be retrieved.
    #[error("{what}: {how}")]
    StatFailure {
        /// The operation and path that failed.
        what: String,
        /// The reason for the failure.
        how: String,
    },

    /// Enumeration was requested on a path that is missing or is not a
    /// directory.
    #[error("{what}")]
    NotADirectory {
        /// The operation and path that failed.
        what: String,
    },

    /// The directory exists but its entries could not be enumerated.
    #[error("{what}: {how}")]
    EnumerationFailure {
        /// The operation and path that failed.
        what: String,
        /// The reason for the failure.
        how: String,
    },

    /// A temporary file could not be created.
    #[error("{what}: {how}")]
    TempFile {
        /// The temp directory that was used.
        what: String,
        /// The reason for the failure.
        how: String,
    },
}

impl Error {
    pub(crate) fn stat_failure(op: &str, path: &StdPath, how: impl ToString) -> Self {
        let err = Error::StatFailure {
            what: format!("{op}: stat failed for file \"{}\"", path.display()),
            how: how.to_string(),
        };
        log::error!("{err}");
        err
    }

    pub(crate) fn not_a_directory(op: &str, path: &StdPath) -> Self {
        let err = Error::NotADirectory {
            what: format!("{op}: \"{}\" is not a directory", path.display()),
        };
        log::error!("{err}");
        err
    }

    pub(crate) fn enumeration_failure(
        op: &str,
        step: &str,
        path: &StdPath,
        how: impl ToString,
    ) -> Self {
        let err = Error::EnumerationFailure {
            what: format!("{op}: {step} failed for directory \"{}\"", path.display()),
            how: how.to_string(),
        };
        log::error!("{err}");
        err
    }

    pub(crate) fn temp_file(dir: &StdPath, how: impl ToString) -> Self {
        let err = Error::TempFile {
            what: format!(
                "create_temp_file_name: cannot create file in \"{}\"",
                dir.display()
            ),
            how: how.to_string(),
        };
        log::error!("{err}");
        err
    }
}
