// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! YAML configuration loading
//!
//! Each program keeps at most one file, `<config dir>/<program>/<program>.yaml`.
//! A missing file is not an error: callers fall back to their defaults.

use std::{
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use serde_core::de::DeserializeOwned;
use snafu::{ResultExt, Snafu};

/// Location of the per-user config file for `program`
pub fn user_path(program: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(program).join(format!("{program}.yaml")))
}

/// Load and deserialize `path`
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let contents = fs::read_to_string(path).context(ReadSnafu { path })?;
    serde_yaml::from_str(&contents).context(ParseSnafu { path })
}

/// Load `path` if it exists, otherwise return `T::default()`
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, Error> {
    match load(path) {
        Err(Error::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => Ok(T::default()),
        result => result,
    }
}

/// Load from an explicit path when given, else from the user config file
pub fn resolve<T: DeserializeOwned + Default>(program: &str, explicit: Option<&Path>) -> Result<T, Error> {
    match explicit {
        Some(path) => load(path),
        None => match user_path(program) {
            Some(path) => load_or_default(&path),
            None => Ok(T::default()),
        },
    }
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("read {}", path.display()))]
    Read { source: io::Error, path: PathBuf },
    #[snafu(display("parse {}", path.display()))]
    Parse { source: serde_yaml::Error, path: PathBuf },
}
