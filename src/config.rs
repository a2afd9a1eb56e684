// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Runtime configuration.
//!
//! Values come from CLI flags first, then `MAPCHECK_*` environment variables, then defaults.

use std::{env, error::Error, fmt};

use crate::format::FormatOptions;

pub const CLOSURE_DECIMALS_ENV: &str = "MAPCHECK_CLOSURE_DECIMALS";
pub const PRECISION_DECIMALS_ENV: &str = "MAPCHECK_PRECISION_DECIMALS";
pub const MAX_DECIMALS: usize = 12;

/// Decimal overrides given on the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecimalOverrides {
    pub closure_error_decimals: Option<usize>,
    pub precision_decimals: Option<usize>,
}

/// Resolves the format options from flags, then the process environment.
pub fn resolve_format_options(flags: DecimalOverrides) -> Result<FormatOptions, ConfigError> {
    resolve_format_options_with(flags, |name| env::var(name))
}

pub(crate) fn resolve_format_options_with(
    flags: DecimalOverrides,
    lookup: impl Fn(&str) -> Result<String, env::VarError>,
) -> Result<FormatOptions, ConfigError> {
    let defaults = FormatOptions::default();

    let closure_error_decimals = match flags.closure_error_decimals {
        Some(decimals) => check_decimals("--closure-decimals", decimals)?,
        None => decimals_from_env(&lookup, CLOSURE_DECIMALS_ENV)?
            .unwrap_or(defaults.closure_error_decimals),
    };
    let precision_decimals = match flags.precision_decimals {
        Some(decimals) => check_decimals("--precision-decimals", decimals)?,
        None => decimals_from_env(&lookup, PRECISION_DECIMALS_ENV)?
            .unwrap_or(defaults.precision_decimals),
    };

    Ok(FormatOptions {
        closure_error_decimals,
        precision_decimals,
    })
}

fn decimals_from_env(
    lookup: &impl Fn(&str) -> Result<String, env::VarError>,
    name: &str,
) -> Result<Option<usize>, ConfigError> {
    let value = match lookup(name) {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            return Err(ConfigError::InvalidEnv {
                name: name.to_owned(),
                value: "<non-unicode>".to_owned(),
            });
        }
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<usize>() {
        Ok(decimals) if decimals <= MAX_DECIMALS => Ok(Some(decimals)),
        _ => Err(ConfigError::InvalidEnv {
            name: name.to_owned(),
            value: format!("{trimmed} (expected 0..={MAX_DECIMALS})"),
        }),
    }
}

fn check_decimals(flag: &str, decimals: usize) -> Result<usize, ConfigError> {
    if decimals > MAX_DECIMALS {
        return Err(ConfigError::InvalidFlag {
            flag: flag.to_owned(),
            value: format!("{decimals} (expected 0..={MAX_DECIMALS})"),
        });
    }
    Ok(decimals)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidEnv { name: String, value: String },
    InvalidFlag { flag: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
            Self::InvalidFlag { flag, value } => write!(f, "invalid {flag} {value}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::{
        resolve_format_options_with, ConfigError, DecimalOverrides, CLOSURE_DECIMALS_ENV,
        PRECISION_DECIMALS_ENV,
    };
    use crate::format::FormatOptions;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let map = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect::<HashMap<_, _>>();
        move |name| map.get(name).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let options =
            resolve_format_options_with(DecimalOverrides::default(), env_of(&[])).expect("options");
        assert_eq!(options, FormatOptions::default());
    }

    #[test]
    fn env_overrides_defaults() {
        let options = resolve_format_options_with(
            DecimalOverrides::default(),
            env_of(&[(CLOSURE_DECIMALS_ENV, "4"), (PRECISION_DECIMALS_ENV, " 0 ")]),
        )
        .expect("options");
        assert_eq!(options.closure_error_decimals, 4);
        assert_eq!(options.precision_decimals, 0);
    }

    #[test]
    fn flags_override_env() {
        let flags = DecimalOverrides {
            closure_error_decimals: Some(1),
            precision_decimals: None,
        };
        let options =
            resolve_format_options_with(flags, env_of(&[(CLOSURE_DECIMALS_ENV, "5")]))
                .expect("options");
        assert_eq!(options.closure_error_decimals, 1);
        assert_eq!(options.precision_decimals, 2);
    }

    #[test]
    fn rejects_invalid_env_values() {
        let err = resolve_format_options_with(
            DecimalOverrides::default(),
            env_of(&[(PRECISION_DECIMALS_ENV, "two")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { ref name, .. } if name == PRECISION_DECIMALS_ENV));

        resolve_format_options_with(
            DecimalOverrides::default(),
            env_of(&[(CLOSURE_DECIMALS_ENV, "13")]),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_out_of_range_flags() {
        let flags = DecimalOverrides {
            closure_error_decimals: None,
            precision_decimals: Some(40),
        };
        let err = resolve_format_options_with(flags, env_of(&[])).unwrap_err();
        assert!(err.to_string().contains("--precision-decimals"));
    }
}
