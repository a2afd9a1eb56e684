// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structured logging setup.
//!
//! The interactive TUI owns the terminal, so it only logs when `MAPCHECK_LOG_FILE` names a file.
//! Non-interactive modes log to stderr. `MAPCHECK_LOG` holds an env-filter directive (default
//! `info`).

use std::{
    env,
    error::Error,
    fmt,
    fs::OpenOptions,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing_subscriber::EnvFilter;

pub const LOG_FILTER_ENV: &str = "MAPCHECK_LOG";
pub const LOG_FILE_ENV: &str = "MAPCHECK_LOG_FILE";
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Log to `MAPCHECK_LOG_FILE` if set, otherwise not at all.
    Interactive,
    /// Log to `MAPCHECK_LOG_FILE` if set, otherwise to stderr.
    Batch,
}

/// Installs the global subscriber. Returns `false` when logging stays disabled.
pub fn init(mode: LogMode) -> Result<bool, LoggingError> {
    let filter = filter_from_env()?;
    let file = match env::var(LOG_FILE_ENV) {
        Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path.trim())),
        Ok(_) | Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            return Err(LoggingError::InvalidEnv {
                name: LOG_FILE_ENV.to_owned(),
                value: "<non-unicode>".to_owned(),
            });
        }
    };

    match (file, mode) {
        (Some(path), _) => init_file(&path, filter).map(|()| true),
        (None, LogMode::Batch) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map(|()| true)
            .map_err(|err| LoggingError::Install(err.to_string())),
        (None, LogMode::Interactive) => Ok(false),
    }
}

fn init_file(path: &Path, filter: EnvFilter) -> Result<(), LoggingError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))
}

fn filter_from_env() -> Result<EnvFilter, LoggingError> {
    let directive = match env::var(LOG_FILTER_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        Ok(_) | Err(env::VarError::NotPresent) => DEFAULT_FILTER.to_owned(),
        Err(env::VarError::NotUnicode(_)) => {
            return Err(LoggingError::InvalidEnv {
                name: LOG_FILTER_ENV.to_owned(),
                value: "<non-unicode>".to_owned(),
            });
        }
    };
    parse_filter(&directive)
}

fn parse_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive.trim()).map_err(|err| LoggingError::InvalidEnv {
        name: LOG_FILTER_ENV.to_owned(),
        value: format!("{directive} ({err})"),
    })
}

#[derive(Debug)]
pub enum LoggingError {
    InvalidEnv { name: String, value: String },
    Open { path: PathBuf, source: std::io::Error },
    Install(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
            Self::Open { path, source } => write!(f, "cannot open log file {path:?}: {source}"),
            Self::Install(message) => write!(f, "cannot install log subscriber: {message}"),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_filter;

    #[test]
    fn accepts_level_and_target_directives() {
        parse_filter("debug").expect("level");
        parse_filter("mapcheck::ui=trace,info").expect("target directive");
    }

    #[test]
    fn rejects_malformed_directive() {
        let err = parse_filter("mapcheck=loudest").unwrap_err();
        assert!(err.to_string().contains("MAPCHECK_LOG"));
    }
}
