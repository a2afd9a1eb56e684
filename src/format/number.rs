// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Rendered in place of a value that cannot be shown (non-finite numbers, absent fields).
pub const NO_VALUE: &str = "-";

/// Every finite `f64` has a terminating decimal expansion with at most this many fractional
/// digits, so formatting at this precision prints the value exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Formats `value` with exactly `decimals` fractional digits and a `,` between every three
/// integer digits.
///
/// Rounding is half away from zero, applied to the exact binary value of `value`: `2.5`
/// becomes `"3"`, `0.125` at two decimals becomes `"0.13"`, but `1.005` (stored as
/// `1.00499999…`) becomes `"1.00"`. A result that rounds to zero never carries a minus sign.
/// Non-finite input renders [`NO_VALUE`].
pub fn format_fixed_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NO_VALUE.to_owned();
    }

    let digits = round_half_away_from_zero(value.abs(), decimals);
    let split = digits.len() - decimals;
    let (int_digits, frac_digits) = digits.split_at(split);
    let is_zero = digits.iter().all(|&digit| digit == b'0');

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    push_grouped(&mut out, int_digits);
    if decimals > 0 {
        out.push('.');
        out.extend(frac_digits.iter().copied().map(char::from));
    }
    out
}

/// Returns the ASCII digits of `magnitude` rounded to `decimals` places, integer digits first.
/// The last `decimals` bytes are the fractional part.
///
/// Digits past the exact expansion are zero, so they are padded in rather than formatted and
/// never trigger a round up.
fn round_half_away_from_zero(magnitude: f64, decimals: usize) -> Vec<u8> {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits = Vec::with_capacity(int_part.len().saturating_add(decimals).saturating_add(1));
    digits.extend_from_slice(int_part.as_bytes());
    digits.extend(frac_part.bytes().take(decimals));
    digits.resize(int_part.len().saturating_add(decimals), b'0');

    let round_up = frac_part.as_bytes().get(decimals).is_some_and(|&next| next >= b'5');
    if round_up {
        let mut idx = digits.len();
        loop {
            if idx == 0 {
                digits.insert(0, b'1');
                break;
            }
            idx -= 1;
            if digits[idx] == b'9' {
                digits[idx] = b'0';
            } else {
                digits[idx] += 1;
                break;
            }
        }
    }

    digits
}

fn push_grouped(out: &mut String, int_digits: &[u8]) {
    let len = int_digits.len();
    for (idx, &digit) in int_digits.iter().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(digit));
    }
}
