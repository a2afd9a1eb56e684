// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Display formatting for report values.
//!
//! Numeric fields are rounded and grouped here; everything else arrives pre-formatted and is
//! passed through.

pub mod number;

pub use number::{format_fixed_thousands, NO_VALUE};

pub const DEFAULT_CLOSURE_ERROR_DECIMALS: usize = 3;
pub const DEFAULT_PRECISION_DECIMALS: usize = 2;

/// Fixed decimal places for the two numeric summary fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub closure_error_decimals: usize,
    pub precision_decimals: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            closure_error_decimals: DEFAULT_CLOSURE_ERROR_DECIMALS,
            precision_decimals: DEFAULT_PRECISION_DECIMALS,
        }
    }
}

impl FormatOptions {
    pub fn closure_error(&self, feet: f64) -> String {
        format_fixed_thousands(feet, self.closure_error_decimals)
    }

    pub fn precision(&self, denominator: f64) -> String {
        format_fixed_thousands(denominator, self.precision_decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::FormatOptions;

    #[test]
    fn default_options_match_report_layout() {
        let options = FormatOptions::default();
        assert_eq!(options.closure_error(0.01), "0.010");
        assert_eq!(options.precision(291872.202), "291,872.20");
    }

    #[test]
    fn custom_decimals_apply_per_field() {
        let options = FormatOptions {
            closure_error_decimals: 1,
            precision_decimals: 0,
        };
        assert_eq!(options.closure_error(0.04), "0.0");
        assert_eq!(options.precision(15483.5), "15,484");
    }
}
