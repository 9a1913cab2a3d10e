// ============================================================
// Layer 2 — Configuration
// ============================================================
// Where is the roster file?
//
//   1. the -d/--data flag, if given
//   2. otherwise STUDENTS_DATA from the environment
//      (main has already merged a local .env file into it)
//   3. otherwise give up with MissingDataFile
//
// The environment is read once, in main, into EnvConfig and
// passed down. resolve_data_file itself never looks at the
// process environment, so it can be tested with plain values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fmt, path::PathBuf};

/// Variables read from the process environment.
/// envy maps STUDENTS_DATA onto `students_data`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvConfig {
    pub students_data: Option<PathBuf>,
}

impl EnvConfig {
    /// Read from the process environment. Variables whose name or
    /// value is not valid UTF-8 are skipped; std::env::vars would panic.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars_os().filter_map(|(k, v)| {
            Some((k.into_string().ok()?, v.into_string().ok()?))
        }))
    }

    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, EnvConfig>(vars).context("Cannot read configuration from the environment")
    }
}

/// Neither the flag nor the environment named a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingDataFile;

impl fmt::Display for MissingDataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("The data file name is absent")
    }
}

impl std::error::Error for MissingDataFile {}

/// Pick the data file path: flag first, then environment.
/// An empty value counts as not given.
pub fn resolve_data_file(
    flag: Option<PathBuf>,
    env:  &EnvConfig,
) -> std::result::Result<PathBuf, MissingDataFile> {
    flag.into_iter()
        .chain(env.students_data.clone())
        .find(|p| !p.as_os_str().is_empty())
        .ok_or(MissingDataFile)
}
