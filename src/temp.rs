use std::env;
use std::path::PathBuf;

use tempfile::Builder;

use crate::Error;

/// Environment variable consulted first by [`TempConfig::temp_dir`].
pub const DEFAULT_TMP_DIR_VAR: &str = "FSUTIL_TMP_DIR";

/// File name prefix of the files created by
/// [`TempConfig::create_temp_file_name`].
pub const DEFAULT_TEMP_PREFIX: &str = "fsu";

const RANDOM_SUFFIX_LEN: usize = 6;

/// Where temporary files go and how they are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempConfig {
    env_var: String,
    prefix: String,
}

impl Default for TempConfig {
    fn default() -> Self {
        Self {
            env_var: DEFAULT_TMP_DIR_VAR.to_owned(),
            prefix: DEFAULT_TEMP_PREFIX.to_owned(),
        }
    }
}

impl TempConfig {
    /// Use `name` as the override environment variable.
    pub fn with_env_var(mut self, name: &str) -> Self {
        self.env_var = name.to_owned();
        self
    }

    /// Use `prefix` for the names of created files.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_owned();
        self
    }

    /// Resolves the temp directory.
    ///
    /// The value of the override environment variable is returned verbatim
    /// when it is set, without checking that it exists. Otherwise the
    /// platform default from [`std::env::temp_dir`] is used: `GetTempPath`
    /// on Windows, and on Unix `$TMPDIR` when set, falling back to `/tmp`.
    pub fn temp_dir(&self) -> PathBuf {
        env::var_os(&self.env_var)
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir)
    }

    /// Creates a new empty file with a unique name inside
    /// [`TempConfig::temp_dir`] and returns its path.
    ///
    /// The name is reserved with an exclusive create, so concurrent callers
    /// in any thread or process never receive the same path. The file is left
    /// on disk and owned by the caller.
    pub fn try_create_temp_file(&self) -> Result<PathBuf, Error> {
        let dir = self.temp_dir();
        if dir.as_os_str().is_empty() {
            return Err(Error::temp_file(&dir, "no temp directory available"));
        }
        let file = Builder::new()
            .prefix(&self.prefix)
            .rand_bytes(RANDOM_SUFFIX_LEN)
            .tempfile_in(&dir)
            .map_err(|e| Error::temp_file(&dir, e))?;
        let (_, path) = file.keep().map_err(|e| Error::temp_file(&dir, e))?;
        log::debug!("created temp file {}", path.display());
        Ok(path)
    }

    /// Same as [`TempConfig::try_create_temp_file`] but returns an empty path
    /// on failure. The failure is logged.
    pub fn create_temp_file_name(&self) -> PathBuf {
        self.try_create_temp_file().unwrap_or_default()
    }
}
